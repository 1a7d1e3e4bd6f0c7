use core::ops::Range;

use image::GrayImage;
use image_binary::{Point, Rect};

use crate::{Average, AverageScanner, UniformityScanner};

/// Scans an 8-bit gray image one row at a time.
///
/// Unlike a binary image there is no single other byte to look for. Each row is instead checked
/// for its first byte not equal to the value.
#[derive(Clone, Copy, Debug)]
pub struct LumaScanner<'data> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'data [u8],
}

impl<'data> LumaScanner<'data> {
    pub fn new(image: &'data GrayImage) -> Self {
        let (width, height) = image.dimensions();
        LumaScanner {
            width: width as usize,
            height: height as usize,
            stride: width as usize,
            data: image.as_raw(),
        }
    }

    /// Scan rows of bytes with padding, the origin at `(0, 0)`.
    ///
    /// Returns `None` if the stride is smaller than the width or the data is too short.
    pub fn from_bytes(
        width: usize,
        height: usize,
        stride: usize,
        data: &'data [u8],
    ) -> Option<Self> {
        if stride < width {
            return None;
        }

        let needed = match height {
            0 => 0,
            h => stride.checked_mul(h - 1)?.checked_add(width)?,
        };

        if data.len() < needed {
            return None;
        }

        Some(LumaScanner {
            width,
            height,
            stride,
            data,
        })
    }

    fn row(&self, y: usize, columns: Range<usize>) -> &'data [u8] {
        let start = y * self.stride;
        &self.data[start + columns.start..start + columns.end]
    }
}

impl UniformityScanner for LumaScanner<'_> {
    type Value = u8;

    fn bounds(&self) -> Rect {
        Rect::with_size(self.width as u32, self.height as u32)
    }

    fn value_at(&self, at: Point) -> Option<u8> {
        if !self.bounds().contains(at) {
            return None;
        }

        let (x, y) = (at.x as usize, at.y as usize);
        Some(self.data[y * self.stride + x])
    }

    fn is_uniform_value(&self, rect: Rect, value: u8) -> bool {
        let rect = rect.intersect(self.bounds());
        if rect.is_empty() {
            return false;
        }

        let columns = rect.min.x as usize..rect.max.x as usize;
        (rect.min.y as usize..rect.max.y as usize)
            .all(|y| self.row(y, columns.clone()).iter().all(|&b| b == value))
    }
}

/// The mean is truncated towards zero.
impl AverageScanner for LumaScanner<'_> {
    fn average(&self, rect: Rect) -> Option<Average<u8>> {
        let rect = rect.intersect(self.bounds());
        if rect.is_empty() {
            return None;
        }

        let columns = rect.min.x as usize..rect.max.x as usize;
        let (mut sum, mut min, mut max) = (0u64, u8::MAX, u8::MIN);
        for y in rect.min.y as usize..rect.max.y as usize {
            for &b in self.row(y, columns.clone()) {
                sum += u64::from(b);
                min = min.min(b);
                max = max.max(b);
            }
        }

        Some(Average {
            value: (sum / rect.area() as u64) as u8,
            uniform: min == max,
        })
    }
}
