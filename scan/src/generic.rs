use image::GenericImageView;
use image_binary::{Point, Rect};

use crate::UniformityScanner;

/// Compares every pixel of any image, one at a time.
///
/// This is the slow path. It is never chosen by [`select`](crate::select), callers that want it
/// for unsupported formats construct it themselves.
#[derive(Clone, Copy, Debug)]
pub struct GenericScanner<'data, I: ?Sized> {
    image: &'data I,
}

impl<'data, I: GenericImageView + ?Sized> GenericScanner<'data, I> {
    pub fn new(image: &'data I) -> Self {
        GenericScanner { image }
    }
}

impl<I> UniformityScanner for GenericScanner<'_, I>
where
    I: GenericImageView + ?Sized,
    I::Pixel: PartialEq,
{
    type Value = I::Pixel;

    /// Views of the `image` crate index their pixels from `(0, 0)`, sub-images included.
    fn bounds(&self) -> Rect {
        let (w, h) = self.image.dimensions();
        Rect::with_size(w, h)
    }

    fn value_at(&self, at: Point) -> Option<I::Pixel> {
        if !UniformityScanner::bounds(self).contains(at) {
            return None;
        }

        Some(self.image.get_pixel(at.x as u32, at.y as u32))
    }

    fn is_uniform_value(&self, rect: Rect, value: I::Pixel) -> bool {
        let rect = rect.intersect(UniformityScanner::bounds(self));
        if rect.is_empty() {
            return false;
        }

        (rect.min.y..rect.max.y).all(|y| {
            (rect.min.x..rect.max.x).all(|x| self.image.get_pixel(x as u32, y as u32) == value)
        })
    }
}
