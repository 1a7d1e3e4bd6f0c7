use image::{ColorType, DynamicImage, GenericImageView, GrayImage, Luma, Rgb, RgbImage};
use image_binary::{Bit, BinaryImage, Palette, Point, Rect};

use crate::{
    select, Average, AverageScanner, BinaryScanner, GenericScanner, LumaScanner, ScanError,
    Scanner, UniformityScanner,
};

fn rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Rect {
    Rect::new(min_x, min_y, max_x, max_y)
}

/// Check `is_uniform_value` against a pixel-by-pixel comparison for every rectangle.
fn check_exhaustive(image: &BinaryImage) {
    let scanner = BinaryScanner::new(image);
    let bounds = image.bounds();

    for y0 in bounds.min.y..bounds.max.y {
        for y1 in y0 + 1..=bounds.max.y {
            for x0 in bounds.min.x..bounds.max.x {
                for x1 in x0 + 1..=bounds.max.x {
                    let r = rect(x0, y0, x1, y1);
                    for bit in [Bit::Off, Bit::On] {
                        let expected =
                            (y0..y1).all(|y| (x0..x1).all(|x| image.bit_at(x, y) == bit));
                        assert_eq!(scanner.is_uniform_value(r, bit), expected, "{:?} {:?}", r, bit);
                    }

                    let top_left = image.bit_at(x0, y0);
                    let expected = scanner.is_uniform_value(r, top_left).then_some(top_left);
                    assert_eq!(scanner.is_uniform(r), expected, "{:?}", r);
                }
            }
        }
    }
}

#[test]
#[rustfmt::skip]
fn uniform_on() {
    let image = BinaryImage::from_rows(&[
        "000",
        "100",
        "011",
    ]);

    let tests = [
        (rect(0, 0, 3, 3), false),
        (rect(1, 1, 3, 3), false),
        (rect(0, 1, 1, 2), true),
        (rect(0, 0, 1, 1), false),
        (rect(1, 0, 2, 1), false),
        (rect(1, 0, 3, 2), false),
        (rect(1, 2, 3, 3), true),
        (rect(2, 2, 3, 3), true),
    ];

    let scanner = BinaryScanner::new(&image);
    for (r, expected) in tests {
        assert_eq!(scanner.is_uniform_value(r, Bit::On), expected, "{:?}", r);
    }
}

#[test]
#[rustfmt::skip]
fn uniform_off() {
    let image = BinaryImage::from_rows(&[
        "111",
        "011",
        "100",
    ]);

    let tests = [
        (rect(0, 0, 3, 3), false),
        (rect(1, 1, 3, 3), false),
        (rect(0, 1, 1, 2), true),
        (rect(0, 0, 1, 1), false),
        (rect(1, 0, 2, 1), false),
        (rect(1, 0, 3, 2), false),
        (rect(1, 2, 3, 3), true),
        (rect(2, 2, 3, 3), true),
    ];

    let scanner = BinaryScanner::new(&image);
    for (r, expected) in tests {
        assert_eq!(scanner.is_uniform_value(r, Bit::Off), expected, "{:?}", r);
    }
}

#[test]
#[rustfmt::skip]
fn uniform_value_of_region() {
    let image = BinaryImage::from_rows(&[
        "000",
        "100",
        "011",
    ]);

    let tests = [
        (rect(0, 0, 3, 3), None),
        (rect(1, 1, 3, 3), None),
        (rect(0, 1, 1, 2), Some(Bit::On)),
        (rect(0, 0, 1, 1), Some(Bit::Off)),
        (rect(1, 0, 3, 2), Some(Bit::Off)),
        (rect(0, 0, 3, 1), Some(Bit::Off)),
        (rect(1, 2, 3, 3), Some(Bit::On)),
        (rect(0, 1, 2, 3), None),
    ];

    let scanner = BinaryScanner::new(&image);
    for (r, expected) in tests {
        assert_eq!(scanner.is_uniform(r), expected, "{:?}", r);
    }
}

#[test]
fn empty_regions_are_not_uniform() {
    let image = BinaryImage::from_rows(&["11", "11"]);
    let scanner = BinaryScanner::new(&image);

    for r in [
        rect(0, 0, 0, 2),
        rect(0, 1, 2, 1),
        rect(5, 5, 8, 8),
        rect(-4, -4, 0, 0),
    ] {
        assert!(!scanner.is_uniform_value(r, Bit::On), "{:?}", r);
        assert!(!scanner.is_uniform_value(r, Bit::Off), "{:?}", r);
        assert_eq!(scanner.is_uniform(r), None, "{:?}", r);
    }

    let empty = BinaryImage::new(Rect::default());
    let scanner = BinaryScanner::new(&empty);
    assert!(!scanner.is_uniform_value(Rect::with_size(4, 4), Bit::Off));
    assert_eq!(scanner.is_uniform(Rect::with_size(4, 4)), None);
}

#[test]
#[rustfmt::skip]
fn regions_are_clipped() {
    let image = BinaryImage::from_rows(&[
        "000",
        "100",
        "011",
    ]);
    let scanner = BinaryScanner::new(&image);

    // Only the bottom-right strip remains.
    let r = rect(1, 2, 10, 10);
    assert!(scanner.is_uniform_value(r, Bit::On));
    assert_eq!(scanner.is_uniform(r), Some(Bit::On));

    // The top-left of the clipped rectangle is the candidate, not the requested corner.
    let r = rect(-5, -5, 3, 1);
    assert_eq!(scanner.is_uniform(r), Some(Bit::Off));
}

#[test]
#[rustfmt::skip]
fn exhaustive_small_patterns() {
    check_exhaustive(&BinaryImage::from_rows(&[
        "0010",
        "0110",
        "1111",
        "0000",
    ]));

    check_exhaustive(&BinaryImage::from_rows(&[
        "1111100",
        "1111100",
        "0000011",
    ]));
}

#[test]
#[rustfmt::skip]
fn scan_through_sub_image() {
    let image = BinaryImage::from_rows(&[
        "00000",
        "01110",
        "01010",
        "01110",
        "00000",
    ]);

    let ring = image.sub_image(rect(1, 1, 4, 4));
    let scanner = BinaryScanner::new(ring);

    assert_eq!(scanner.bounds(), rect(1, 1, 4, 4));
    assert!(scanner.is_uniform_value(rect(1, 1, 4, 2), Bit::On));
    assert!(!scanner.is_uniform_value(rect(1, 1, 4, 4), Bit::On));
    assert_eq!(scanner.is_uniform(rect(2, 2, 3, 3)), Some(Bit::Off));
    // The border of the parent is outside of the view.
    assert_eq!(scanner.is_uniform(rect(0, 0, 1, 5)), None);
    assert_eq!(scanner.value_at(Point::new(0, 0)), None);

    check_exhaustive(&ring.to_owned());
}

#[test]
fn scan_offset_bounds() {
    let mut image = BinaryImage::new(rect(-8, 10, 0, 14));
    image.set_rect(rect(-4, 10, 0, 14), Bit::On);
    let scanner = BinaryScanner::new(&image);

    assert_eq!(scanner.is_uniform(rect(-8, 10, -4, 14)), Some(Bit::Off));
    assert_eq!(scanner.is_uniform(rect(-4, 10, 0, 14)), Some(Bit::On));
    assert_eq!(scanner.is_uniform(image.bounds()), None);

    check_exhaustive(&image);
}

#[test]
#[rustfmt::skip]
fn luma_scanner() {
    let image = GrayImage::from_raw(3, 3, vec![
        0, 0, 0,
        122, 0, 0,
        0, 24, 24,
    ])
    .unwrap();

    let scanner = LumaScanner::new(&image);
    assert!(!scanner.is_uniform_value(rect(0, 0, 3, 3), 0));
    assert!(scanner.is_uniform_value(rect(1, 0, 3, 2), 0));
    assert!(scanner.is_uniform_value(rect(0, 1, 1, 2), 122));
    assert!(!scanner.is_uniform_value(rect(0, 1, 1, 2), 0));
    assert_eq!(scanner.is_uniform(rect(1, 2, 3, 3)), Some(24));
    assert_eq!(scanner.is_uniform(rect(0, 2, 3, 3)), None);
    assert_eq!(scanner.is_uniform(rect(3, 0, 4, 3)), None);
}

#[test]
#[rustfmt::skip]
fn luma_scanner_with_stride() {
    let data = [
        7, 7, 1, 9,
        7, 7, 1, 9,
        7, 7, 1,
    ];

    let scanner = LumaScanner::from_bytes(3, 3, 4, &data).unwrap();
    assert_eq!(scanner.bounds(), Rect::with_size(3, 3));
    assert_eq!(scanner.is_uniform(rect(0, 0, 2, 3)), Some(7));
    assert_eq!(scanner.is_uniform(rect(2, 0, 3, 2)), Some(1));
    // The padding byte 9 is never part of a row.
    assert_eq!(scanner.is_uniform(rect(2, 0, 4, 2)), Some(1));

    assert!(LumaScanner::from_bytes(3, 3, 2, &data).is_none());
    assert!(LumaScanner::from_bytes(3, 3, 4, &data[..9]).is_none());
    assert!(LumaScanner::from_bytes(3, 0, 4, &[]).is_some());
}

#[test]
fn generic_scanner() {
    let mut image = RgbImage::from_pixel(4, 2, Rgb([10, 20, 30]));
    image.put_pixel(3, 1, Rgb([0, 0, 0]));

    let scanner = GenericScanner::new(&image);
    assert_eq!(scanner.is_uniform(rect(0, 0, 4, 1)), Some(Rgb([10, 20, 30])));
    assert_eq!(scanner.is_uniform(rect(0, 0, 4, 2)), None);
    assert!(scanner.is_uniform_value(rect(3, 1, 4, 2), Rgb([0, 0, 0])));
    assert!(!scanner.is_uniform_value(rect(4, 0, 8, 2), Rgb([0, 0, 0])));
}

#[test]
fn generic_scanner_on_sub_image() {
    let mut image = RgbImage::new(4, 4);
    for y in 0..4 {
        image.put_pixel(3, y, Rgb([255, 255, 255]));
    }

    // The view starts at (0, 0), the white column of the parent is just outside of it.
    let view = image.view(1, 1, 2, 2);
    let scanner = GenericScanner::new(&*view);

    assert_eq!(scanner.bounds(), Rect::with_size(2, 2));
    assert_eq!(scanner.is_uniform(Rect::with_size(2, 2)), Some(Rgb([0, 0, 0])));
    assert_eq!(scanner.is_uniform(rect(1, 1, 3, 3)), Some(Rgb([0, 0, 0])));
    assert_eq!(scanner.value_at(Point::new(2, 0)), None);

    let wide = image.view(1, 1, 3, 2);
    let scanner = GenericScanner::new(&*wide);
    assert_eq!(scanner.is_uniform(Rect::with_size(3, 2)), None);
    assert!(scanner.is_uniform_value(rect(2, 0, 3, 2), Rgb([255, 255, 255])));
}

#[test]
#[rustfmt::skip]
fn luma_average() {
    let image = GrayImage::from_raw(3, 3, vec![
        0, 0, 0,
        122, 0, 0,
        0, 24, 24,
    ])
    .unwrap();

    let tests = [
        (rect(0, 0, 1, 1), 0, true),
        // 170 / 9, truncated.
        (rect(0, 0, 3, 3), 18, false),
        (rect(0, 1, 1, 2), 122, true),
        (rect(1, 2, 3, 3), 24, true),
        (rect(0, 1, 2, 3), 36, false),
    ];

    let scanner = LumaScanner::new(&image);
    for (r, value, uniform) in tests {
        assert_eq!(scanner.average(r), Some(Average { value, uniform }), "{:?}", r);
    }

    assert_eq!(scanner.average(rect(3, 3, 5, 5)), None);
    assert_eq!(scanner.average(rect(-2, 1, 1, 2)), Some(Average { value: 122, uniform: true }));
}

#[test]
#[rustfmt::skip]
fn binary_average() {
    let image = BinaryImage::from_rows(&[
        "000",
        "100",
        "011",
    ]);

    let tests = [
        // A third of the pixels is On, below the threshold of the default palette.
        (rect(0, 0, 3, 3), Bit::Off, false),
        (rect(1, 1, 3, 3), Bit::On, false),
        (rect(0, 1, 1, 2), Bit::On, true),
        (rect(0, 0, 1, 1), Bit::Off, true),
        (rect(1, 0, 2, 1), Bit::Off, true),
        (rect(1, 0, 3, 2), Bit::Off, true),
        (rect(1, 1, 2, 3), Bit::On, false),
        (rect(1, 2, 3, 3), Bit::On, true),
        (rect(2, 2, 3, 3), Bit::On, true),
    ];

    let scanner = BinaryScanner::new(&image);
    for (r, value, uniform) in tests {
        assert_eq!(scanner.average(r), Some(Average { value, uniform }), "{:?}", r);
    }

    assert_eq!(scanner.average(rect(0, 0, 0, 3)), None);
}

#[test]
fn binary_average_follows_palette() {
    let mut image = BinaryImage::from_rows(&["100", "000", "011"]);
    let whole = Rect::with_size(3, 3);

    image.set_palette(Palette::LOW_THRESHOLD);
    let scanner = BinaryScanner::new(&image);
    assert_eq!(
        scanner.average(whole),
        Some(Average {
            value: Bit::On,
            uniform: false
        })
    );

    // Uniform regions keep their value, even where the threshold maps the mean elsewhere.
    image.set_rect(whole, Bit::On);
    image.set_palette(Palette::with_threshold(255));
    let scanner = BinaryScanner::new(&image);
    assert_eq!(
        scanner.average(whole),
        Some(Average {
            value: Bit::On,
            uniform: true
        })
    );
}

#[test]
fn selected_scanner_average() {
    let image = BinaryImage::from_rows(&["01", "11"]);
    let scanner = select(&image).unwrap();
    assert_eq!(
        scanner.average(Rect::with_size(2, 2)),
        Some(Average {
            value: 0xff,
            uniform: false
        })
    );

    let gray = GrayImage::from_pixel(2, 2, Luma([9]));
    let scanner = select(&gray).unwrap();
    assert_eq!(
        scanner.average(Rect::with_size(2, 2)),
        Some(Average {
            value: 9,
            uniform: true
        })
    );
}

#[test]
fn select_binary() {
    let image = BinaryImage::from_rows(&["01", "01"]);
    let scanner = select(&image).unwrap();

    assert!(matches!(scanner, Scanner::Binary(_)));
    assert_eq!(scanner.is_uniform(rect(1, 0, 2, 2)), Some(0xff));
    assert_eq!(scanner.is_uniform(rect(0, 0, 1, 2)), Some(0x00));
    assert!(scanner.is_uniform_value(rect(1, 0, 2, 2), 0xff));
    // Not a bit, never uniform.
    assert!(!scanner.is_uniform_value(rect(1, 0, 2, 2), 0x80));

    let view = select(image.sub_image(rect(1, 0, 2, 1))).unwrap();
    assert_eq!(view.bounds(), rect(1, 0, 2, 1));
}

#[test]
fn select_luma() {
    let gray = GrayImage::from_pixel(5, 5, Luma([42]));
    assert!(matches!(select(&gray), Ok(Scanner::Luma(_))));

    let dynamic = DynamicImage::ImageLuma8(gray);
    let scanner = select(&dynamic).unwrap();
    assert!(matches!(scanner, Scanner::Luma(_)));
    assert_eq!(scanner.is_uniform(Rect::with_size(5, 5)), Some(42));
}

#[test]
fn select_unsupported() {
    let rgb = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
    let err = select(&rgb).unwrap_err();
    assert_eq!(err, ScanError::UnsupportedFormat(ColorType::Rgb8));
    assert!(err.to_string().contains("Rgb8"), "{}", err);

    let gray16 = DynamicImage::new_luma16(2, 2);
    assert_eq!(
        select(&gray16).unwrap_err(),
        ScanError::UnsupportedFormat(ColorType::L16)
    );

    // The caller may still fall back explicitly.
    let fallback = GenericScanner::new(&rgb);
    assert!(fallback.is_uniform(Rect::with_size(2, 2)).is_some());
}
