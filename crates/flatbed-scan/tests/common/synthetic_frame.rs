// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use image::{Rgb, RgbImage};

pub const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// A white page with a black outline of `border` pixels, spanning
/// `(x0, y0)`..=`(x1, y1)` on a uniform gray background.
pub fn bordered_page(
    width: u32,
    height: u32,
    (x0, y0): (u32, u32),
    (x1, y1): (u32, u32),
    border: u32,
) -> RgbImage {
    assert!(x0 < x1 && y0 < y1, "page must have positive size");
    RgbImage::from_fn(width, height, |x, y| {
        let on_page = (x0..=x1).contains(&x) && (y0..=y1).contains(&y);
        if !on_page {
            return GRAY;
        }
        let inner = x >= x0 + border && x + border <= x1 && y >= y0 + border && y + border <= y1;
        if inner { WHITE } else { BLACK }
    })
}

/// A filled convex quadrilateral (corners given in drawing order) on a
/// uniform background.
pub fn convex_quad(
    width: u32,
    height: u32,
    corners: [(f32, f32); 4],
    fill: Rgb<u8>,
    background: Rgb<u8>,
) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let (px, py) = (x as f32, y as f32);
        let mut sign = 0.0f32;
        for i in 0..4 {
            let (ax, ay) = corners[i];
            let (bx, by) = corners[(i + 1) % 4];
            let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
            if cross != 0.0 {
                if sign == 0.0 {
                    sign = cross.signum();
                } else if cross.signum() != sign {
                    return background;
                }
            }
        }
        fill
    })
}

/// Mean of all channels over a region.
pub fn mean_brightness(image: &RgbImage, x0: u32, y0: u32, x1: u32, y1: u32) -> f64 {
    let mut total = 0u64;
    let mut count = 0u64;
    for y in y0..y1 {
        for x in x0..x1 {
            total += image.get_pixel(x, y).0.iter().map(|&c| c as u64).sum::<u64>();
            count += 3;
        }
    }
    total as f64 / count as f64
}
