// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

mod common;

use common::synthetic_frame::{BLACK, GRAY, WHITE, bordered_page, convex_quad, mean_brightness};
use flatbed_core::{OutputSpec, ScanConfig, ScanError};
use flatbed_scan::DocumentScanner;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::point::Point;

const CORNER_TOLERANCE: i32 = 6;

fn assert_near(actual: Point<i32>, expected: (i32, i32), what: &str) {
    assert!(
        (actual.x - expected.0).abs() <= CORNER_TOLERANCE
            && (actual.y - expected.1).abs() <= CORNER_TOLERANCE,
        "{what}: expected near {expected:?}, got ({}, {})",
        actual.x,
        actual.y
    );
}

fn reference_page() -> RgbImage {
    bordered_page(640, 480, (100, 100), (500, 400), 3)
}

#[test]
fn bordered_page_corners_are_found_in_role_order() {
    let scanner = DocumentScanner::new();
    let corners = scanner.detect(&reference_page()).expect("page should be detected");

    assert_near(corners.top_left, (100, 100), "top-left");
    assert_near(corners.top_right, (500, 100), "top-right");
    assert_near(corners.bottom_left, (100, 400), "bottom-left");
    assert_near(corners.bottom_right, (500, 400), "bottom-right");
}

#[test]
fn bordered_page_rectifies_to_a_white_field() {
    let scanner = DocumentScanner::new();
    let page = scanner.scan(&reference_page()).expect("page should be scanned");

    assert_eq!(page.dimensions(), (400, 576));
    let (w, h) = page.dimensions();
    let centre = mean_brightness(&page, w / 10, h / 10, w - w / 10, h - h / 10);
    assert!(centre > 240.0, "page centre too dark: {centre:.1}");
    let overall = mean_brightness(&page, 0, 0, w, h);
    assert!(overall > 200.0, "page too dark overall: {overall:.1}");
}

#[test]
fn tilted_page_is_detected_and_sized_by_output_spec() {
    let corners = [(150.0, 90.0), (520.0, 130.0), (480.0, 420.0), (110.0, 380.0)];
    let frame = convex_quad(640, 480, corners, WHITE, Rgb([50, 50, 50]));
    let scanner = DocumentScanner::with_output_size(300.0, 420.0).unwrap();

    let found = scanner.detect(&frame).expect("tilted page should be detected");
    assert_near(found.top_left, (150, 90), "top-left");
    assert_near(found.top_right, (520, 130), "top-right");
    assert_near(found.bottom_left, (110, 380), "bottom-left");
    assert_near(found.bottom_right, (480, 420), "bottom-right");

    let page = scanner.scan(&frame).unwrap();
    assert_eq!(page.dimensions(), (280, 400));
    let (w, h) = page.dimensions();
    assert!(mean_brightness(&page, w / 4, h / 4, 3 * w / 4, 3 * h / 4) > 240.0);
}

#[test]
fn rectified_rectangle_keeps_the_output_aspect_ratio() {
    let frame = convex_quad(
        640,
        480,
        [(120.0, 60.0), (520.0, 60.0), (520.0, 420.0), (120.0, 420.0)],
        WHITE,
        BLACK,
    );
    let config = ScanConfig {
        output: OutputSpec::new(360.0, 240.0).unwrap(),
        crop_margin: 0,
        ..Default::default()
    };
    let scanner = DocumentScanner::from_config(config).unwrap();

    let page = scanner.scan(&frame).unwrap();
    let ratio = page.width() as f64 / page.height() as f64;
    assert!((ratio - 1.5).abs() < 0.01, "ratio {ratio}");
}

#[test]
fn largest_of_two_pages_wins() {
    let mut frame = RgbImage::from_pixel(640, 480, GRAY);
    let small = bordered_page(640, 480, (20, 20), (120, 100), 2);
    let large = bordered_page(640, 480, (200, 60), (600, 440), 2);
    for (x, y, p) in frame.enumerate_pixels_mut() {
        if *small.get_pixel(x, y) != GRAY {
            *p = *small.get_pixel(x, y);
        } else if *large.get_pixel(x, y) != GRAY {
            *p = *large.get_pixel(x, y);
        }
    }

    let corners = DocumentScanner::new().detect(&frame).unwrap();
    assert_near(corners.top_left, (200, 60), "top-left");
    assert_near(corners.bottom_right, (600, 440), "bottom-right");
}

#[test]
fn uniform_frame_reports_no_document() {
    let frame = RgbImage::from_pixel(640, 480, GRAY);
    assert_eq!(
        DocumentScanner::new().scan(&frame).unwrap_err(),
        ScanError::NoDocumentDetected
    );
}

#[test]
fn small_blob_is_not_a_document() {
    let frame = bordered_page(640, 480, (300, 200), (325, 225), 2);
    let err = DocumentScanner::new().scan(&frame).unwrap_err();
    assert_eq!(err, ScanError::NoDocumentDetected);
    assert!(err.is_retriable());
}

#[test]
fn tiny_output_fails_crop_after_detection() {
    let scanner = DocumentScanner::with_output_size(15.0, 15.0).unwrap();
    assert_eq!(
        scanner.scan(&reference_page()).unwrap_err(),
        ScanError::InvalidCropRegion {
            width: 15,
            height: 15,
            margin: 10
        }
    );
    // Detection itself is unaffected by the output size.
    assert!(scanner.detect(&reference_page()).is_ok());
}

#[test]
fn empty_frame_is_empty_input() {
    let scanner = DocumentScanner::new();
    assert_eq!(
        scanner.scan(&RgbImage::new(0, 0)).unwrap_err(),
        ScanError::EmptyInput
    );
    assert_eq!(
        scanner
            .scan_dynamic(&DynamicImage::new_rgb8(0, 0))
            .unwrap_err(),
        ScanError::EmptyInput
    );
}

#[test]
fn dynamic_images_of_other_formats_are_accepted() {
    let rgba = DynamicImage::ImageRgb8(reference_page()).to_rgba8();
    let page = DocumentScanner::new()
        .scan_dynamic(&DynamicImage::ImageRgba8(rgba))
        .unwrap();
    assert_eq!(page.dimensions(), (400, 576));
}

#[test]
fn scans_are_independent_of_previous_calls() {
    let scanner = DocumentScanner::new();
    let first = scanner.scan(&reference_page()).unwrap();
    let _ = scanner.scan(&RgbImage::from_pixel(640, 480, GRAY));
    let again = scanner.scan(&reference_page()).unwrap();
    assert_eq!(first, again);
}

#[test]
fn resized_output_applies_to_the_next_scan() {
    let mut scanner = DocumentScanner::new();
    scanner.set_output_size(220.0, 320.0).unwrap();
    let page = scanner.scan(&reference_page()).unwrap();
    assert_eq!(page.dimensions(), (200, 300));
}
