use bytemuck::{Pod, Zeroable};

use crate::Bit;

/// A color with 16-bit channels, the common currency between pixel sources and binary images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// A color that can be thresholded into a [`Bit`].
///
/// Types that already are binary should report this through `as_bit`, the palette then returns
/// their value unchanged instead of going through the luminance of its color.
pub trait Color {
    fn rgba16(&self) -> Rgba16;

    fn as_bit(&self) -> Option<Bit> {
        None
    }
}

/// The rule that maps colors to bits and back.
///
/// A color is `On` when the top byte of its perceptual luminance lies strictly above the
/// threshold. In the reverse direction `Off` and `On` render as the `off` and `on` colors.
///
/// Palettes are plain values, two palettes are the same exactly if all fields agree.
///
/// ```
/// use image_binary::{Bit, Palette, Rgba16};
///
/// let orange = Rgba16::from_rgb8(235, 152, 30);
/// let purple = Rgba16::from_rgb8(56, 35, 133);
///
/// assert_eq!(Palette::BLACK_AND_WHITE.bit(&orange), Bit::On);
/// assert_eq!(Palette::BLACK_AND_WHITE.bit(&purple), Bit::Off);
/// assert_eq!(Palette::BLACK_AND_WHITE.convert(&orange), Rgba16::WHITE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    pub threshold: u8,
    pub off: Rgba16,
    pub on: Rgba16,
}

impl Rgba16 {
    pub const BLACK: Self = Rgba16::new(0, 0, 0, 0xffff);
    pub const WHITE: Self = Rgba16::new(0xffff, 0xffff, 0xffff, 0xffff);

    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Rgba16 { r, g, b, a }
    }

    /// Widen 8-bit channels, such that `0xff` maps to `0xffff`.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba16::new(widen(r), widen(g), widen(b), widen(a))
    }

    /// Widen opaque 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgba16::from_rgba8(r, g, b, 0xff)
    }

    /// A gray level, opaque.
    pub const fn from_luma16(l: u16) -> Self {
        Rgba16::new(l, l, l, 0xffff)
    }

    /// The perceptual luminance, ITU-R BT.601 weights with rounding.
    pub const fn luma(&self) -> u16 {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        ((299 * r + 587 * g + 114 * b + 500) / 1000) as u16
    }
}

const fn widen(v: u8) -> u16 {
    (v as u16) * 0x101
}

impl Palette {
    /// Black and white with a low threshold, most colors are `On`.
    pub const LOW_THRESHOLD: Self = Palette::with_threshold(37);
    /// Black and white with the medium threshold. This is the default palette.
    pub const BLACK_AND_WHITE: Self = Palette::with_threshold(97);
    /// Black and white with a high threshold, only light colors are `On`.
    pub const HIGH_THRESHOLD: Self = Palette::with_threshold(197);

    /// A black and white palette with a custom threshold.
    pub const fn with_threshold(threshold: u8) -> Self {
        Palette {
            threshold,
            off: Rgba16::BLACK,
            on: Rgba16::WHITE,
        }
    }

    /// Threshold a color.
    pub fn bit(&self, color: &(impl Color + ?Sized)) -> Bit {
        if let Some(bit) = color.as_bit() {
            return bit;
        }

        let y = color.rgba16().luma();
        Bit::from((y >> 8) as u8 > self.threshold)
    }

    /// The color a bit renders as.
    pub fn color(&self, bit: Bit) -> Rgba16 {
        match bit {
            Bit::Off => self.off,
            Bit::On => self.on,
        }
    }

    /// Snap a color to one of the two palette colors.
    pub fn convert(&self, color: &(impl Color + ?Sized)) -> Rgba16 {
        self.color(self.bit(color))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::BLACK_AND_WHITE
    }
}

impl Color for Bit {
    fn rgba16(&self) -> Rgba16 {
        match self {
            Bit::Off => Rgba16::BLACK,
            Bit::On => Rgba16::WHITE,
        }
    }

    fn as_bit(&self) -> Option<Bit> {
        Some(*self)
    }
}

impl Color for Rgba16 {
    fn rgba16(&self) -> Rgba16 {
        *self
    }
}

#[cfg(feature = "image")]
mod pixels {
    use super::{widen, Color, Rgba16};
    use ::image::{Luma, LumaA, Rgb, Rgba};

    impl Color for Luma<u8> {
        fn rgba16(&self) -> Rgba16 {
            Rgba16::from_luma16(widen(self.0[0]))
        }
    }

    impl Color for LumaA<u8> {
        fn rgba16(&self) -> Rgba16 {
            let [l, a] = self.0;
            Rgba16::from_rgba8(l, l, l, a)
        }
    }

    impl Color for Rgb<u8> {
        fn rgba16(&self) -> Rgba16 {
            let [r, g, b] = self.0;
            Rgba16::from_rgb8(r, g, b)
        }
    }

    impl Color for Rgba<u8> {
        fn rgba16(&self) -> Rgba16 {
            let [r, g, b, a] = self.0;
            Rgba16::from_rgba8(r, g, b, a)
        }
    }

    impl Color for Luma<u16> {
        fn rgba16(&self) -> Rgba16 {
            Rgba16::from_luma16(self.0[0])
        }
    }

    impl Color for LumaA<u16> {
        fn rgba16(&self) -> Rgba16 {
            let [l, a] = self.0;
            Rgba16::new(l, l, l, a)
        }
    }

    impl Color for Rgb<u16> {
        fn rgba16(&self) -> Rgba16 {
            let [r, g, b] = self.0;
            Rgba16::new(r, g, b, 0xffff)
        }
    }

    impl Color for Rgba<u16> {
        fn rgba16(&self) -> Rgba16 {
            let [r, g, b, a] = self.0;
            Rgba16::new(r, g, b, a)
        }
    }
}
