use crate::{Bit, BinaryImage, BinaryRef, Color, Rect};

/// A rectangle of colors that can be converted into a binary image.
///
/// Implementations should answer `color_at` for every point within `bounds`. Points outside are
/// never requested by this crate.
pub trait PixelSource {
    type Color: Color;

    fn bounds(&self) -> Rect;

    fn color_at(&self, x: i32, y: i32) -> Self::Color;
}

impl PixelSource for BinaryImage {
    type Color = Bit;

    fn bounds(&self) -> Rect {
        BinaryImage::bounds(self)
    }

    fn color_at(&self, x: i32, y: i32) -> Bit {
        self.bit_at(x, y)
    }
}

impl PixelSource for BinaryRef<'_> {
    type Color = Bit;

    fn bounds(&self) -> Rect {
        BinaryRef::bounds(self)
    }

    fn color_at(&self, x: i32, y: i32) -> Bit {
        self.bit_at(x, y)
    }
}

#[cfg(feature = "image")]
mod image_impls {
    use super::PixelSource;
    use crate::{Color, Rect, Rgba16};

    use ::image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};
    use core::ops::Deref;

    /// Buffers of the `image` crate have their origin at `(0, 0)`.
    impl<P, C> PixelSource for ImageBuffer<P, C>
    where
        P: Pixel + Color,
        C: Deref<Target = [P::Subpixel]>,
    {
        type Color = P;

        fn bounds(&self) -> Rect {
            Rect::with_size(self.width(), self.height())
        }

        fn color_at(&self, x: i32, y: i32) -> P {
            *self.get_pixel(x as u32, y as u32)
        }
    }

    /// Sixteen bit images are read at full precision, everything else through 8-bit RGBA.
    impl PixelSource for DynamicImage {
        type Color = Rgba16;

        fn bounds(&self) -> Rect {
            Rect::with_size(self.width(), self.height())
        }

        fn color_at(&self, x: i32, y: i32) -> Rgba16 {
            let (x, y) = (x as u32, y as u32);
            match self {
                DynamicImage::ImageLuma16(buffer) => buffer.get_pixel(x, y).rgba16(),
                DynamicImage::ImageLumaA16(buffer) => buffer.get_pixel(x, y).rgba16(),
                DynamicImage::ImageRgb16(buffer) => buffer.get_pixel(x, y).rgba16(),
                DynamicImage::ImageRgba16(buffer) => buffer.get_pixel(x, y).rgba16(),
                other => other.get_pixel(x, y).rgba16(),
            }
        }
    }
}
