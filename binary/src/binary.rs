use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::layout::BinaryLayout;
use crate::{Bit, Color, Palette, PixelSource, Rect, Rgba16};

/// An owned binary image.
///
/// The pixels are stored row after row without padding, one [`Bit`] per byte. Each image carries
/// its [`Palette`] which is used whenever a color is written or a pixel is read back as a color.
///
/// Any access outside the bounds is well-defined. Reads return `Bit::Off` and writes do nothing.
/// Regions are clipped to the bounds, where nothing remains the operation does nothing either.
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryImage {
    pixels: Vec<Bit>,
    layout: BinaryLayout,
    palette: Palette,
}

/// A borrowed view on a rectangle of a binary image.
///
/// The view shares the storage of the image it was created from. Coordinates are the same as in
/// the parent image, only the bounds are restricted.
#[derive(Clone, Copy)]
pub struct BinaryRef<'data> {
    pixels: &'data [Bit],
    layout: BinaryLayout,
    palette: Palette,
}

/// A mutably borrowed view on a rectangle of a binary image.
///
/// Writes go directly into the storage of the parent. Pixels of the parent outside the bounds of
/// the view can not be modified through it.
pub struct BinaryMut<'data> {
    pixels: &'data mut [Bit],
    layout: BinaryLayout,
    palette: Palette,
}

/// An iterator over the rows of a binary image, top to bottom.
pub struct Rows<'data> {
    pixels: &'data [Bit],
    layout: BinaryLayout,
    rows: Range<i32>,
}

impl BinaryImage {
    /// Allocate an image with all pixels `Off`, with the default palette.
    ///
    /// # Panics
    /// When allocation of memory fails.
    pub fn new(bounds: Rect) -> Self {
        Self::with_palette(bounds, Palette::default())
    }

    /// Allocate an image with all pixels `Off` that converts colors with a custom palette.
    ///
    /// # Panics
    /// When allocation of memory fails.
    pub fn with_palette(bounds: Rect, palette: Palette) -> Self {
        let layout = BinaryLayout::packed(bounds);
        BinaryImage {
            pixels: vec![Bit::Off; layout.byte_len()],
            layout,
            palette,
        }
    }

    /// Convert any source of colors into a binary image of the same bounds.
    ///
    /// Each pixel of the source is read exactly once and thresholded with `palette`. Sources
    /// that already hold bits, such as other binary images, are copied unchanged.
    pub fn from_source<S>(source: &S, palette: Palette) -> Self
    where
        S: PixelSource + ?Sized,
    {
        let bounds = source.bounds();
        log::debug!(
            "Thresholding {}x{} source at {:?} with threshold {}",
            bounds.width(),
            bounds.height(),
            bounds.min,
            palette.threshold,
        );

        let mut image = Self::with_palette(bounds, palette);
        for y in bounds.rows() {
            let range = image.layout.row(y);
            let row = &mut image.pixels[range];
            for (x, pixel) in bounds.columns().zip(row) {
                *pixel = palette.bit(&source.color_at(x, y));
            }
        }

        image
    }

    /// Build an image from rows of `'0'` and `'1'` characters, with its origin at `(0, 0)`.
    ///
    /// This is meant for fixtures, in tests and documentation.
    ///
    /// ```
    /// use image_binary::{Bit, BinaryImage};
    ///
    /// let image = BinaryImage::from_rows(&[
    ///     "000",
    ///     "100",
    ///     "011",
    /// ]);
    ///
    /// assert_eq!(image.bit_at(0, 1), Bit::On);
    /// assert_eq!(image.bit_at(0, 2), Bit::Off);
    /// ```
    ///
    /// # Panics
    /// When the rows do not all have the same length, or contain any other character.
    #[track_caller]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut image = Self::new(Rect::with_size(width as u32, rows.len() as u32));

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(
                row.len(),
                width,
                "Row {} has length {} but the first row has {}",
                y,
                row.len(),
                width,
            );

            let range = image.layout.row(y as i32);
            for (pixel, ch) in image.pixels[range].iter_mut().zip(row.chars()) {
                *pixel = match ch {
                    '0' => Bit::Off,
                    '1' => Bit::On,
                    other => panic!("Unexpected character {:?} in row {}", other, y),
                };
            }
        }

        image
    }

    pub fn bounds(&self) -> Rect {
        self.layout.bounds()
    }

    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Change the palette used for further conversions. The stored pixels are not modified.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn layout(&self) -> &BinaryLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Bit] {
        &mut self.pixels
    }

    /// The storage as raw bytes, each either `0x00` or `0xff`.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn into_vec(self) -> Vec<Bit> {
        self.pixels
    }

    /// Borrow the whole image as a view.
    pub fn as_ref(&self) -> BinaryRef<'_> {
        BinaryRef {
            pixels: &self.pixels,
            layout: self.layout,
            palette: self.palette,
        }
    }

    /// Borrow the whole image as a mutable view.
    pub fn as_mut(&mut self) -> BinaryMut<'_> {
        BinaryMut {
            pixels: &mut self.pixels,
            layout: self.layout,
            palette: self.palette,
        }
    }

    /// The index of the pixel at `(x, y)` in the storage, if it is in bounds.
    pub fn pix_offset(&self, x: i32, y: i32) -> Option<usize> {
        self.layout.offset(x, y)
    }

    pub fn bit_at(&self, x: i32, y: i32) -> Bit {
        self.as_ref().bit_at(x, y)
    }

    pub fn color_at(&self, x: i32, y: i32) -> Rgba16 {
        self.as_ref().color_at(x, y)
    }

    pub fn row(&self, y: i32) -> &[Bit] {
        &self.pixels[self.layout.row(y)]
    }

    pub fn row_span(&self, y: i32, columns: Range<i32>) -> &[Bit] {
        &self.pixels[self.layout.row_span(y, columns)]
    }

    pub fn rows(&self) -> Rows<'_> {
        self.as_ref().rows()
    }

    /// Threshold a color with the palette of this image and store it.
    pub fn set(&mut self, x: i32, y: i32, color: &(impl Color + ?Sized)) {
        self.as_mut().set(x, y, color)
    }

    /// Store a bit directly, no palette involved.
    pub fn set_bit(&mut self, x: i32, y: i32, bit: Bit) {
        self.as_mut().set_bit(x, y, bit)
    }

    /// Fill the part of `rect` within the bounds.
    pub fn set_rect(&mut self, rect: Rect, bit: Bit) {
        self.as_mut().set_rect(rect, bit)
    }

    /// Copy the pixels of `src` where it overlaps this image.
    pub fn copy_from(&mut self, src: &BinaryRef<'_>) {
        self.as_mut().copy_from(src)
    }

    /// A view of the part of `rect` within the bounds.
    ///
    /// If the two do not overlap at all, the result is an empty view with the zero rectangle as
    /// its bounds and no storage.
    pub fn sub_image(&self, rect: Rect) -> BinaryRef<'_> {
        self.as_ref().into_sub_image(rect)
    }

    /// A mutable view of the part of `rect` within the bounds.
    ///
    /// See [`BinaryImage::sub_image`] for the handling of rectangles outside the bounds.
    pub fn sub_image_mut(&mut self, rect: Rect) -> BinaryMut<'_> {
        self.as_mut().into_sub_image_mut(rect)
    }

    /// Binary images have no transparency.
    pub fn is_opaque(&self) -> bool {
        true
    }

    /// Render through the palette into a color image, with the origin at `bounds.min`.
    #[cfg(feature = "image")]
    pub fn to_rgba16(&self) -> ::image::ImageBuffer<::image::Rgba<u16>, Vec<u16>> {
        self.as_ref().to_rgba16()
    }
}

impl<'data> BinaryRef<'data> {
    pub fn bounds(&self) -> Rect {
        self.layout.bounds()
    }

    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn layout(&self) -> &BinaryLayout {
        &self.layout
    }

    /// The storage from the first to the last pixel of the view.
    ///
    /// Note that for a strict sub-image this includes pixels of the parent between the rows.
    pub fn as_slice(&self) -> &'data [Bit] {
        self.pixels
    }

    pub fn as_bytes(&self) -> &'data [u8] {
        bytemuck::cast_slice(self.pixels)
    }

    pub fn pix_offset(&self, x: i32, y: i32) -> Option<usize> {
        self.layout.offset(x, y)
    }

    /// The bit at `(x, y)`, or `Off` when out of bounds.
    #[inline]
    pub fn bit_at(&self, x: i32, y: i32) -> Bit {
        match self.layout.offset(x, y) {
            Some(idx) => self.pixels[idx],
            None => Bit::default(),
        }
    }

    /// The palette color of the bit at `(x, y)`.
    pub fn color_at(&self, x: i32, y: i32) -> Rgba16 {
        self.palette.color(self.bit_at(x, y))
    }

    pub fn row(&self, y: i32) -> &'data [Bit] {
        &self.pixels[self.layout.row(y)]
    }

    /// The contiguous pixels of row `y` between two columns, clipped to the bounds.
    pub fn row_span(&self, y: i32, columns: Range<i32>) -> &'data [Bit] {
        &self.pixels[self.layout.row_span(y, columns)]
    }

    /// Like `row_span` but as raw bytes.
    pub fn row_span_bytes(&self, y: i32, columns: Range<i32>) -> &'data [u8] {
        bytemuck::cast_slice(self.row_span(y, columns))
    }

    pub fn rows(&self) -> Rows<'data> {
        let bounds = self.layout.bounds();
        Rows {
            pixels: self.pixels,
            layout: self.layout,
            rows: if bounds.is_empty() { 0..0 } else { bounds.rows() },
        }
    }

    pub fn sub_image(&self, rect: Rect) -> BinaryRef<'data> {
        self.into_sub_image(rect)
    }

    fn into_sub_image(self, rect: Rect) -> BinaryRef<'data> {
        let layout = self.layout.restrict(rect);
        let pixels = match self.layout.offset(layout.bounds().min.x, layout.bounds().min.y) {
            Some(start) if !layout.bounds().is_empty() => {
                &self.pixels[start..start + layout.byte_len()]
            }
            _ => &[],
        };

        BinaryRef {
            pixels,
            layout,
            palette: self.palette,
        }
    }

    pub fn is_opaque(&self) -> bool {
        true
    }

    /// Copy the view into a packed image with the same bounds and palette.
    pub fn to_owned(&self) -> BinaryImage {
        let mut image = BinaryImage::with_palette(self.bounds(), self.palette);
        image.copy_from(self);
        image
    }

    #[cfg(feature = "image")]
    pub fn to_rgba16(&self) -> ::image::ImageBuffer<::image::Rgba<u16>, Vec<u16>> {
        let bounds = self.bounds();
        let mut rendered = ::image::ImageBuffer::new(bounds.width(), bounds.height());

        let [on, off] =
            [self.palette.on, self.palette.off].map(|c| ::image::Rgba([c.r, c.g, c.b, c.a]));

        for (row, dst) in self.rows().zip(rendered.rows_mut()) {
            for (&bit, pixel) in row.iter().zip(dst) {
                *pixel = if bit.is_on() { on } else { off };
            }
        }

        rendered
    }
}

impl<'data> BinaryMut<'data> {
    pub fn bounds(&self) -> Rect {
        self.layout.bounds()
    }

    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn as_ref(&self) -> BinaryRef<'_> {
        BinaryRef {
            pixels: &*self.pixels,
            layout: self.layout,
            palette: self.palette,
        }
    }

    pub fn into_ref(self) -> BinaryRef<'data> {
        BinaryRef {
            pixels: self.pixels,
            layout: self.layout,
            palette: self.palette,
        }
    }

    pub fn bit_at(&self, x: i32, y: i32) -> Bit {
        self.as_ref().bit_at(x, y)
    }

    pub fn set(&mut self, x: i32, y: i32, color: &(impl Color + ?Sized)) {
        let bit = self.palette.bit(color);
        self.set_bit(x, y, bit)
    }

    #[inline]
    pub fn set_bit(&mut self, x: i32, y: i32, bit: Bit) {
        if let Some(idx) = self.layout.offset(x, y) {
            self.pixels[idx] = bit;
        }
    }

    pub fn set_rect(&mut self, rect: Rect, bit: Bit) {
        let rect = rect.intersect(self.bounds());

        for y in rect.rows() {
            let range = self.layout.row_span(y, rect.columns());
            self.pixels[range].fill(bit);
        }
    }

    pub fn copy_from(&mut self, src: &BinaryRef<'_>) {
        let overlap = src.bounds().intersect(self.bounds());

        for y in overlap.rows() {
            let range = self.layout.row_span(y, overlap.columns());
            self.pixels[range].copy_from_slice(src.row_span(y, overlap.columns()));
        }
    }

    pub fn sub_image_mut(&mut self, rect: Rect) -> BinaryMut<'_> {
        BinaryMut {
            pixels: &mut *self.pixels,
            layout: self.layout,
            palette: self.palette,
        }
        .into_sub_image_mut(rect)
    }

    pub fn into_sub_image_mut(self, rect: Rect) -> BinaryMut<'data> {
        let BinaryMut {
            pixels,
            layout: parent,
            palette,
        } = self;

        let layout = parent.restrict(rect);
        let pixels = match parent.offset(layout.bounds().min.x, layout.bounds().min.y) {
            Some(start) if !layout.bounds().is_empty() => {
                &mut pixels[start..start + layout.byte_len()]
            }
            _ => &mut [],
        };

        BinaryMut {
            pixels,
            layout,
            palette,
        }
    }
}

impl<'data> Iterator for Rows<'data> {
    type Item = &'data [Bit];

    fn next(&mut self) -> Option<Self::Item> {
        let y = self.rows.next()?;
        Some(&self.pixels[self.layout.row(y)])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl<'data> From<&'data BinaryImage> for BinaryRef<'data> {
    fn from(image: &'data BinaryImage) -> Self {
        image.as_ref()
    }
}

impl<'data> From<&'data mut BinaryImage> for BinaryMut<'data> {
    fn from(image: &'data mut BinaryImage) -> Self {
        image.as_mut()
    }
}

impl<'data> From<BinaryMut<'data>> for BinaryRef<'data> {
    fn from(image: BinaryMut<'data>) -> Self {
        image.into_ref()
    }
}

impl fmt::Debug for BinaryImage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl fmt::Debug for BinaryRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct Pattern<'a>(BinaryRef<'a>);

        impl fmt::Debug for Pattern<'_> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let mut list = f.debug_list();
                for row in self.0.rows() {
                    list.entry(&format_args!("{}", RowPattern(row)));
                }
                list.finish()
            }
        }

        f.debug_struct("BinaryImage")
            .field("bounds", &self.bounds())
            .field("stride", &self.stride())
            .field("rows", &Pattern(*self))
            .finish()
    }
}

impl fmt::Debug for BinaryMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

struct RowPattern<'a>(&'a [Bit]);

impl fmt::Display for RowPattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write as _;
        self.0
            .iter()
            .try_for_each(|bit| f.write_char(if bit.is_on() { '1' } else { '0' }))
    }
}
