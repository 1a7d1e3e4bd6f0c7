use image_binary::{Point, Rect};

/// Reports whether a rectangular region is composed of a single value.
///
/// Rectangles are clipped to the bounds of the scanned image first. A region without any pixels,
/// including one entirely outside the image, is never uniform.
pub trait UniformityScanner {
    type Value: Copy;

    /// The bounds of the scanned image.
    fn bounds(&self) -> Rect;

    /// The value of a single pixel, if within bounds.
    fn value_at(&self, at: Point) -> Option<Self::Value>;

    /// Check if all pixels of `rect` have `value`.
    fn is_uniform_value(&self, rect: Rect, value: Self::Value) -> bool;

    /// Check if all pixels of `rect` share one value, and return it.
    ///
    /// The candidate is the top-left pixel of the clipped rectangle.
    fn is_uniform(&self, rect: Rect) -> Option<Self::Value> {
        let rect = rect.intersect(self.bounds());
        let first = self.value_at(rect.min)?;
        self.is_uniform_value(rect, first).then_some(first)
    }
}

/// The mean value of a region, and whether all of its pixels have that value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Average<V> {
    pub value: V,
    pub uniform: bool,
}

/// Computes the mean value of a rectangular region.
///
/// Unlike [`UniformityScanner::is_uniform`] this always visits every pixel of the region. The
/// region is clipped like for the uniformity queries and an empty region has no average.
pub trait AverageScanner: UniformityScanner {
    fn average(&self, rect: Rect) -> Option<Average<Self::Value>>;
}
