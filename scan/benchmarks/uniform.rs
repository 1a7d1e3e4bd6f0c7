//! Benchmarks uniformity scans driven by a quad tree subdivision.
use brunch::Bench;

use image_binary::pad::power_of_two;
use image_binary::{Bit, BinaryImage, Rect};
use image_scan::{BinaryScanner, UniformityScanner};

struct Subdivide {
    name: &'static str,
    sz: u32,
    /// Draw the test pattern.
    draw: fn(&mut BinaryImage),
}

impl Subdivide {
    fn name(&self) -> String {
        format!("subdivide({}, {})", self.name, self.sz)
    }

    fn prepare(self) -> impl FnMut() -> usize {
        let mut image = BinaryImage::new(Rect::with_size(self.sz, self.sz));
        (self.draw)(&mut image);
        let image = power_of_two(&image, Bit::Off).into_owned();

        move || {
            let scanner = BinaryScanner::new(&image);
            leaves(&scanner, image.bounds())
        }
    }
}

/// Count the uniform leaves of a quad tree decomposition.
fn leaves(scanner: &impl UniformityScanner, rect: Rect) -> usize {
    if rect.is_empty() {
        return 0;
    }

    if scanner.is_uniform(rect).is_some() || rect.width() == 1 {
        return 1;
    }

    let mid_x = rect.min.x + (rect.width() / 2) as i32;
    let mid_y = rect.min.y + (rect.height() / 2) as i32;

    [
        Rect::new(rect.min.x, rect.min.y, mid_x, mid_y),
        Rect::new(mid_x, rect.min.y, rect.max.x, mid_y),
        Rect::new(rect.min.x, mid_y, mid_x, rect.max.y),
        Rect::new(mid_x, mid_y, rect.max.x, rect.max.y),
    ]
    .into_iter()
    .map(|quad| leaves(scanner, quad))
    .sum()
}

fn blank(_: &mut BinaryImage) {}

fn disc(image: &mut BinaryImage) {
    let bounds = image.bounds();
    let (cx, cy) = (bounds.width() as i32 / 2, bounds.height() as i32 / 2);
    let r2 = cx * cx / 2;

    for y in bounds.min.y..bounds.max.y {
        for x in bounds.min.x..bounds.max.x {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy < r2 {
                image.set_bit(x, y, Bit::On);
            }
        }
    }
}

fn checkerboard(image: &mut BinaryImage) {
    let bounds = image.bounds();
    for y in bounds.min.y..bounds.max.y {
        for x in bounds.min.x..bounds.max.x {
            image.set_bit(x, y, Bit::from((x / 8 + y / 8) % 2 == 0));
        }
    }
}

fn main() {
    let tests = [
        Subdivide {
            name: "blank",
            sz: 1024,
            draw: blank,
        },
        Subdivide {
            name: "disc",
            sz: 1024,
            draw: disc,
        },
        Subdivide {
            name: "disc",
            sz: 1000,
            draw: disc,
        },
        Subdivide {
            name: "checkerboard",
            sz: 512,
            draw: checkerboard,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|subdivide| {
        Bench::new(format!("scan::uniform::{}", subdivide.name())).run(subdivide.prepare())
    }));
    benches.finish();
}
