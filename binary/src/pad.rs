//! Padding images to power-of-two squares.
//!
//! Recursive subdivision into quadrants is simplest when every level halves evenly. These helpers
//! place an image on the smallest square canvas with a power-of-two side that contains it.
use alloc::borrow::Cow;
use core::cmp;

use crate::{Bit, BinaryImage, Rect};

/// Round up to the next power of two, or return `n` if it is already one.
///
/// Zero is rounded to one, the smallest power of two.
///
/// ```
/// use image_binary::pad::pow2_roundup;
///
/// assert_eq!(pow2_roundup(0), 1);
/// assert_eq!(pow2_roundup(3), 4);
/// assert_eq!(pow2_roundup(129), 256);
/// ```
pub fn pow2_roundup(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Place `src` on the smallest power-of-two square canvas that contains it.
///
/// The canvas is anchored at the same minimum point as `src`, filled with `pad` and has the
/// palette of `src`. An image that already is such a square is returned as-is, without copy.
///
/// Near the end of the coordinate space the canvas is cut off at `i32::MAX`, and is then not
/// square. It still contains all of `src`.
pub fn power_of_two(src: &BinaryImage, pad: Bit) -> Cow<'_, BinaryImage> {
    let bounds = src.bounds();
    let side = pow2_roundup(cmp::max(bounds.width(), bounds.height()) as usize);

    if side == bounds.width() as usize && side == bounds.height() as usize {
        return Cow::Borrowed(src);
    }

    log::debug!(
        "Padding {}x{} image to {}x{}",
        bounds.width(),
        bounds.height(),
        side,
        side,
    );

    let side = i32::try_from(side).unwrap_or(i32::MAX);
    let canvas = Rect::new(
        bounds.min.x,
        bounds.min.y,
        bounds.min.x.saturating_add(side),
        bounds.min.y.saturating_add(side),
    );

    let mut padded = BinaryImage::with_palette(canvas, *src.palette());
    padded.set_rect(canvas, pad);
    padded.copy_from(&src.as_ref());
    Cow::Owned(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_at_coordinate_limit() {
        let bounds = Rect::new(i32::MAX - 3, i32::MAX - 2, i32::MAX, i32::MAX);
        let mut image = BinaryImage::new(bounds);
        image.set_bit(i32::MAX - 1, i32::MAX - 1, Bit::On);

        let padded = power_of_two(&image, Bit::Off);
        assert_eq!(padded.bounds(), bounds);
        assert_eq!(padded.bit_at(i32::MAX - 1, i32::MAX - 1), Bit::On);
    }

    #[test]
    fn roundup() {
        assert_eq!(pow2_roundup(1), 1);
        assert_eq!(pow2_roundup(2), 2);
        assert_eq!(pow2_roundup(15), 16);
        assert_eq!(pow2_roundup(16), 16);
        assert_eq!(pow2_roundup(127), 128);
    }
}
