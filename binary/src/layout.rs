//! Coordinates and the placement of pixels within a byte buffer.
//!
//! Images are not anchored at the origin. Their bounds are an arbitrary half-open rectangle of
//! signed coordinates and the storage begins with the pixel at `bounds.min`. A row of pixels is
//! always contiguous; consecutive rows are `stride` bytes apart which, for views into a larger
//! image, is more than their own width.
use core::cmp;
use core::ops::Range;

/// A point in image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// An axis aligned, half-open rectangle `[min.x, max.x) × [min.y, max.y)`.
///
/// A rectangle is well-formed if `min.x <= max.x` and `min.y <= max.y`. All constructors in this
/// crate produce well-formed rectangles. A rectangle with no pixels is empty but may still carry a
/// position, except for the results of [`Rect::intersect`] which always normalize an empty result
/// to the zero rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

/// The strided placement of a rectangle of pixels.
///
/// The pixel at `(x, y)` is found at `(y - bounds.min.y) * stride + (x - bounds.min.x)`. Since
/// pixels are a single byte the stride is counted both in bytes and in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BinaryLayout {
    bounds: Rect,
    stride: usize,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl Rect {
    /// Create the rectangle spanned by two corners.
    ///
    /// The coordinates are swapped where necessary, such that the result is well-formed.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        Rect {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// A rectangle with its top-left corner at the origin.
    pub const fn with_size(width: u32, height: u32) -> Self {
        Rect::new(0, 0, width as i32, height as i32)
    }

    pub const fn width(&self) -> u32 {
        self.max.x.saturating_sub(self.min.x) as u32
    }

    pub const fn height(&self) -> u32 {
        self.max.y.saturating_sub(self.min.y) as u32
    }

    /// The number of pixels inside.
    pub const fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub const fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Check if `other` lies wholly within this rectangle.
    ///
    /// Every rectangle contains the empty ones.
    pub fn contains_rect(&self, other: Rect) -> bool {
        other.is_empty() || self.intersect(other) == other
    }

    /// The largest rectangle contained in both.
    ///
    /// Two rectangles that do not overlap intersect in the zero rectangle, not in some
    /// inverted rectangle located between them.
    #[must_use]
    pub fn intersect(&self, other: Rect) -> Rect {
        let result = Rect {
            min: Point::new(cmp::max(self.min.x, other.min.x), cmp::max(self.min.y, other.min.y)),
            max: Point::new(cmp::min(self.max.x, other.max.x), cmp::min(self.max.y, other.max.y)),
        };

        if result.is_empty() {
            Rect::default()
        } else {
            result
        }
    }

    /// The smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }

        if other.is_empty() {
            return *self;
        }

        Rect {
            min: Point::new(cmp::min(self.min.x, other.min.x), cmp::min(self.min.y, other.min.y)),
            max: Point::new(cmp::max(self.max.x, other.max.x), cmp::max(self.max.y, other.max.y)),
        }
    }

    /// Move by an offset. Coordinates saturate at the limits of `i32`, which may shrink the
    /// rectangle.
    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            min: Point::new(self.min.x.saturating_add(dx), self.min.y.saturating_add(dy)),
            max: Point::new(self.max.x.saturating_add(dx), self.max.y.saturating_add(dy)),
        }
    }

    pub(crate) fn columns(&self) -> Range<i32> {
        self.min.x..self.max.x
    }

    pub(crate) fn rows(&self) -> Range<i32> {
        self.min.y..self.max.y
    }
}

impl BinaryLayout {
    /// The dense layout of an owned image, rows are packed back to back.
    pub fn packed(bounds: Rect) -> Self {
        BinaryLayout {
            bounds,
            stride: bounds.width() as usize,
        }
    }

    /// The layout of a view restricted to `bounds`, keeping the stride of its parent.
    ///
    /// An empty intersection results in the empty layout with zero stride.
    pub fn restrict(&self, bounds: Rect) -> Self {
        let bounds = self.bounds.intersect(bounds);

        if bounds.is_empty() {
            return BinaryLayout::default();
        }

        BinaryLayout {
            bounds,
            stride: self.stride,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The number of bytes spanned from the first to the last pixel.
    ///
    /// Views do not require the padding after their last row. An owned, packed image has the
    /// same length as `stride * height`.
    pub fn byte_len(&self) -> usize {
        if self.bounds.is_empty() {
            return 0;
        }

        let height = self.bounds.height() as usize;
        self.stride * (height - 1) + self.bounds.width() as usize
    }

    /// The index of the pixel at `(x, y)`, if it is within bounds.
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(Point::new(x, y)) {
            return None;
        }

        Some(self.offset_unchecked(x, y))
    }

    /// The indices of a row between two columns, both clipped to the bounds.
    ///
    /// Returns an empty range when the row is outside the bounds or the clipped columns are empty.
    pub fn row_span(&self, y: i32, columns: Range<i32>) -> Range<usize> {
        let start = cmp::max(columns.start, self.bounds.min.x);
        let end = cmp::min(columns.end, self.bounds.max.x);

        if !self.bounds.rows().contains(&y) || start >= end {
            return 0..0;
        }

        let first = self.offset_unchecked(start, y);
        first..first + (end - start) as usize
    }

    /// The indices of a whole row.
    pub fn row(&self, y: i32) -> Range<usize> {
        self.row_span(y, self.bounds.columns())
    }

    #[inline]
    fn offset_unchecked(&self, x: i32, y: i32) -> usize {
        let row = (y - self.bounds.min.y) as usize;
        let col = (x - self.bounds.min.x) as usize;
        row * self.stride + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_rect() {
        let rect = Rect::new(4, 3, 1, 1);
        assert_eq!(rect.min, Point::new(1, 1));
        assert_eq!(rect.max, Point::new(4, 3));
        assert_eq!((rect.width(), rect.height()), (3, 2));
        assert_eq!(rect.area(), 6);
        assert!(Rect::new(2, 0, 2, 5).is_empty());
    }

    #[test]
    fn disjoint_intersection_is_zero() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(100, 100, 110, 110);
        assert_eq!(a.intersect(b), Rect::default());
        assert!(a.intersect(b).is_empty());

        let touching = Rect::new(10, 0, 20, 10);
        assert_eq!(a.intersect(touching), Rect::default());
    }

    #[test]
    fn overlapping_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(8, -2, 12, 4);
        assert_eq!(a.intersect(b), Rect::new(8, 0, 10, 4));
        assert!(a.contains_rect(Rect::new(8, 0, 10, 4)));
        assert!(!a.contains_rect(b));
        assert_eq!(a.union(b), Rect::new(0, -2, 12, 10));
    }

    #[test]
    fn translate_saturates() {
        let rect = Rect::new(0, 0, 4, 4);
        assert_eq!(rect.translate(-2, 3), Rect::new(-2, 3, 2, 7));

        let moved = rect.translate(i32::MAX - 1, i32::MIN);
        assert_eq!(moved, Rect::new(i32::MAX - 1, i32::MIN, i32::MAX, i32::MIN + 4));
        assert_eq!(moved.width(), 1);
    }

    #[test]
    fn offsets_relative_to_bounds() {
        let layout = BinaryLayout::packed(Rect::new(-2, 5, 2, 8));
        assert_eq!(layout.stride(), 4);
        assert_eq!(layout.byte_len(), 12);
        assert_eq!(layout.offset(-2, 5), Some(0));
        assert_eq!(layout.offset(1, 7), Some(11));
        assert_eq!(layout.offset(2, 7), None);
        assert_eq!(layout.offset(0, 4), None);
    }

    #[test]
    fn restricted_layout() {
        let parent = BinaryLayout::packed(Rect::with_size(10, 10));
        let view = parent.restrict(Rect::new(3, 3, 5, 6));
        assert_eq!(view.stride(), 10);
        assert_eq!(view.byte_len(), 22);
        assert_eq!(view.offset(3, 3), Some(0));
        assert_eq!(view.offset(4, 5), Some(21));

        let empty = parent.restrict(Rect::new(20, 20, 30, 30));
        assert_eq!(empty, BinaryLayout::default());
        assert_eq!(empty.byte_len(), 0);
    }

    #[test]
    fn clipped_row_span() {
        let layout = BinaryLayout::packed(Rect::new(0, 0, 5, 2));
        assert_eq!(layout.row_span(1, -3..2), 5..7);
        assert_eq!(layout.row_span(1, 4..9), 9..10);
        assert_eq!(layout.row_span(2, 0..5), 0..0);
        assert_eq!(layout.row_span(0, 3..3), 0..0);
        assert_eq!(layout.row(0), 0..5);
    }
}
