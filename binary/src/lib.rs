// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! # Binary
//!
//! A packed image of two-tone pixels, one byte per pixel.
//!
//! Every pixel is a [`Bit`], either `Off` (stored as `0x00`) or `On` (stored as `0xff`). Since the
//! buffer contains no other byte values, asking whether a row contains a pixel different from some
//! bit is the same as searching the row for the single *other* byte. This is the primitive that
//! region scanners build on, see the `image-scan` crate.
//!
//! Images are either allocated zeroed, i.e. all `Off`, or converted from some [`PixelSource`]
//! through a [`Palette`] that thresholds the perceptual luminance of each color. Rectangular
//! views share the storage of their parent image without copying.
//!
//! ## Usage
//!
//! ```
//! use image_binary::{Bit, BinaryImage, Rect};
//!
//! let mut image = BinaryImage::new(Rect::with_size(8, 8));
//! image.set_rect(Rect::new(2, 2, 6, 6), Bit::On);
//!
//! // Views borrow the storage of the image.
//! let center = image.sub_image(Rect::new(3, 3, 5, 5));
//! assert!(center.rows().all(|row| row.iter().all(|&bit| bit == Bit::On)));
//!
//! // Reading outside the bounds is not an error.
//! assert_eq!(image.bit_at(-1, 20), Bit::Off);
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod binary;
mod bit;
mod color;
pub mod layout;
pub mod pad;
mod source;

pub use self::binary::{BinaryImage, BinaryMut, BinaryRef, Rows};
pub use self::bit::Bit;
pub use self::color::{Color, Palette, Rgba16};
pub use self::layout::{Point, Rect};
pub use self::source::PixelSource;
