use image_binary::{Bit, BinaryRef, Point, Rect, Rgba16};

use crate::{Average, AverageScanner, UniformityScanner};

/// Scans a binary image one row at a time.
///
/// With only two possible values, a row is uniformly `value` exactly if it does not contain the
/// byte of `value.other()`. That is a plain byte search, vectorized by the standard library.
#[derive(Clone, Copy, Debug)]
pub struct BinaryScanner<'data> {
    image: BinaryRef<'data>,
}

impl<'data> BinaryScanner<'data> {
    pub fn new(image: impl Into<BinaryRef<'data>>) -> Self {
        BinaryScanner {
            image: image.into(),
        }
    }

    pub fn image(&self) -> &BinaryRef<'data> {
        &self.image
    }
}

impl UniformityScanner for BinaryScanner<'_> {
    type Value = Bit;

    fn bounds(&self) -> Rect {
        self.image.bounds()
    }

    fn value_at(&self, at: Point) -> Option<Bit> {
        self.image.pix_offset(at.x, at.y)?;
        Some(self.image.bit_at(at.x, at.y))
    }

    fn is_uniform_value(&self, rect: Rect, value: Bit) -> bool {
        let rect = rect.intersect(self.bounds());
        if rect.is_empty() {
            return false;
        }

        let other = value.other().to_byte();
        let columns = rect.min.x..rect.max.x;

        (rect.min.y..rect.max.y).all(|y| {
            !self
                .image
                .row_span_bytes(y, columns.clone())
                .contains(&other)
        })
    }
}

/// The mean is the share of `On` pixels as a gray level, thresholded with the palette of the image.
impl AverageScanner for BinaryScanner<'_> {
    fn average(&self, rect: Rect) -> Option<Average<Bit>> {
        let rect = rect.intersect(self.bounds());
        if rect.is_empty() {
            return None;
        }

        let on_byte = Bit::On.to_byte();
        let columns = rect.min.x..rect.max.x;
        let on: usize = (rect.min.y..rect.max.y)
            .map(|y| {
                let row = self.image.row_span_bytes(y, columns.clone());
                row.iter().filter(|&&b| b == on_byte).count()
            })
            .sum();

        let area = rect.area();
        if on == 0 || on == area {
            return Some(Average {
                value: Bit::from(on != 0),
                uniform: true,
            });
        }

        let gray = (on as u64 * 0xffff / area as u64) as u16;
        Some(Average {
            value: self.image.palette().bit(&Rgba16::from_luma16(gray)),
            uniform: false,
        })
    }
}
