// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! Uniformity tests for rectangular regions of an image.
//!
//! Spatial decompositions such as quad trees repeatedly ask whether some rectangle of an image
//! has a single color, and if so, which one. For images with one byte per pixel this is answered
//! with one linear search per row which stops at the first differing byte.
//!
//! # Usage
//!
//! ```
//! use image_binary::{Bit, BinaryImage, Rect};
//! use image_scan::{BinaryScanner, UniformityScanner};
//!
//! let image = BinaryImage::from_rows(&[
//!     "000",
//!     "100",
//!     "011",
//! ]);
//!
//! let scanner = BinaryScanner::new(&image);
//! assert!(scanner.is_uniform_value(Rect::new(0, 1, 1, 2), Bit::On));
//! assert!(!scanner.is_uniform_value(Rect::new(0, 0, 3, 3), Bit::On));
//! assert_eq!(scanner.is_uniform(Rect::new(1, 2, 3, 3)), Some(Bit::On));
//! ```
//!
//! The strategy for an image only known at runtime is chosen with [`select`]. Formats without a
//! byte scanner are reported, a pixel-by-pixel [`GenericScanner`] is only used when requested.
//!
//! ```
//! use image::{DynamicImage, RgbImage};
//! use image_binary::Rect;
//! use image_scan::{select, GenericScanner, ScanError, UniformityScanner};
//!
//! let image = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
//!
//! let uniform = match select(&image) {
//!     Ok(scanner) => scanner.is_uniform(Rect::with_size(4, 4)).is_some(),
//!     Err(ScanError::UnsupportedFormat(_)) => {
//!         GenericScanner::new(&image).is_uniform(Rect::with_size(4, 4)).is_some()
//!     }
//! };
//!
//! assert!(uniform);
//! ```
#![deny(unsafe_code)]

mod binary;
mod error;
mod generic;
mod luma;
mod scanner;
mod select;

#[cfg(test)]
mod tests;

pub use self::binary::BinaryScanner;
pub use self::error::ScanError;
pub use self::generic::GenericScanner;
pub use self::luma::LumaScanner;
pub use self::scanner::{Average, AverageScanner, UniformityScanner};
pub use self::select::{select, Scannable, Scanner};
