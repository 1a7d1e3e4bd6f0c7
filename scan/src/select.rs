use image::{DynamicImage, GrayImage};
use image_binary::{Bit, BinaryImage, BinaryRef, Point, Rect};

use crate::{Average, AverageScanner, BinaryScanner, LumaScanner, ScanError, UniformityScanner};

/// The images for which a scanner can be selected.
#[derive(Clone, Copy, Debug)]
pub enum Scannable<'data> {
    Binary(BinaryRef<'data>),
    Luma(&'data GrayImage),
    Dynamic(&'data DynamicImage),
}

/// A byte scanner, chosen at runtime.
///
/// Values are the raw bytes of pixels. For binary images only `0x00` and `0xff` occur, any other
/// byte value is never uniform.
#[derive(Clone, Copy, Debug)]
pub enum Scanner<'data> {
    Binary(BinaryScanner<'data>),
    Luma(LumaScanner<'data>),
}

/// Choose the byte scanner for an image.
///
/// Binary images and 8-bit gray images have one byte per pixel and get a row scanner. All other
/// formats are rejected with [`ScanError::UnsupportedFormat`]. There is no silent fallback to a
/// slow path, see [`GenericScanner`](crate::GenericScanner) for that.
pub fn select<'data>(image: impl Into<Scannable<'data>>) -> Result<Scanner<'data>, ScanError> {
    let scanner = match image.into() {
        Scannable::Binary(image) => Scanner::Binary(BinaryScanner::new(image)),
        Scannable::Luma(image) => Scanner::Luma(LumaScanner::new(image)),
        Scannable::Dynamic(DynamicImage::ImageLuma8(image)) => {
            Scanner::Luma(LumaScanner::new(image))
        }
        Scannable::Dynamic(other) => {
            log::debug!("No byte scanner for {:?} image", other.color());
            return Err(ScanError::UnsupportedFormat(other.color()));
        }
    };

    log::debug!("Selected {} scanner for {:?}", scanner.name(), scanner.bounds());
    Ok(scanner)
}

impl Scanner<'_> {
    fn name(&self) -> &'static str {
        match self {
            Scanner::Binary(_) => "binary",
            Scanner::Luma(_) => "luma",
        }
    }
}

impl UniformityScanner for Scanner<'_> {
    type Value = u8;

    fn bounds(&self) -> Rect {
        match self {
            Scanner::Binary(scanner) => scanner.bounds(),
            Scanner::Luma(scanner) => scanner.bounds(),
        }
    }

    fn value_at(&self, at: Point) -> Option<u8> {
        match self {
            Scanner::Binary(scanner) => scanner.value_at(at).map(Bit::to_byte),
            Scanner::Luma(scanner) => scanner.value_at(at),
        }
    }

    fn is_uniform_value(&self, rect: Rect, value: u8) -> bool {
        match self {
            Scanner::Binary(scanner) => match Bit::from_byte(value) {
                Some(bit) => scanner.is_uniform_value(rect, bit),
                None => false,
            },
            Scanner::Luma(scanner) => scanner.is_uniform_value(rect, value),
        }
    }
}

impl AverageScanner for Scanner<'_> {
    fn average(&self, rect: Rect) -> Option<Average<u8>> {
        match self {
            Scanner::Binary(scanner) => scanner.average(rect).map(|avg| Average {
                value: avg.value.to_byte(),
                uniform: avg.uniform,
            }),
            Scanner::Luma(scanner) => scanner.average(rect),
        }
    }
}

impl<'data> From<&'data BinaryImage> for Scannable<'data> {
    fn from(image: &'data BinaryImage) -> Self {
        Scannable::Binary(image.as_ref())
    }
}

impl<'data> From<BinaryRef<'data>> for Scannable<'data> {
    fn from(image: BinaryRef<'data>) -> Self {
        Scannable::Binary(image)
    }
}

impl<'data> From<&'data GrayImage> for Scannable<'data> {
    fn from(image: &'data GrayImage) -> Self {
        Scannable::Luma(image)
    }
}

impl<'data> From<&'data DynamicImage> for Scannable<'data> {
    fn from(image: &'data DynamicImage) -> Self {
        Scannable::Dynamic(image)
    }
}
