// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rectification — unwarp the document quadrilateral onto the output
// rectangle and trim the border.

use flatbed_core::{OutputSpec, ScanError};
use image::{Rgb, RgbImage, imageops};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use tracing::{info, instrument, warn};

use super::corners::OrderedCorners;

/// Warp the region bounded by `corners` onto an `output`-sized rectangle,
/// then crop `margin` pixels from every side.
///
/// Corners map as top-left to (0, 0), top-right to (w, 0), bottom-left to
/// (0, h) and bottom-right to (w, h). Resampling is inverse-mapped with
/// bilinear interpolation; samples falling outside the frame are black.
/// The result is `(w - 2 * margin) x (h - 2 * margin)` where `w` and `h` are
/// the truncated output dimensions.
///
/// Fails with `InvalidCropRegion` when the margin would consume the whole
/// image, and with `NoDocumentDetected` when the corners are degenerate
/// (collinear) so no projective transform exists.
#[instrument(skip(frame), fields(frame_w = frame.width(), frame_h = frame.height()))]
pub fn rectify(
    frame: &RgbImage,
    corners: &OrderedCorners,
    output: &OutputSpec,
    margin: u32,
) -> Result<RgbImage, ScanError> {
    let (out_w, out_h) = output.pixel_size();
    let trim = margin.saturating_mul(2);
    if out_w <= trim || out_h <= trim {
        warn!(out_w, out_h, margin, "Crop margin leaves an empty image");
        return Err(ScanError::InvalidCropRegion {
            width: out_w,
            height: out_h,
            margin,
        });
    }

    let (w, h) = (output.width(), output.height());
    let dest: [(f32, f32); 4] = [
        (0.0, 0.0), // top-left
        (w, 0.0),   // top-right
        (0.0, h),   // bottom-left
        (w, h),     // bottom-right
    ];

    let projection = match Projection::from_control_points(corners.to_f32(), dest) {
        Some(p) => p,
        None => {
            warn!(?corners, "Corners admit no projective transform");
            return Err(ScanError::NoDocumentDetected);
        }
    };

    let mut warped = RgbImage::new(out_w, out_h);
    warp_into(
        frame,
        &projection,
        Interpolation::Bilinear,
        Rgb([0, 0, 0]),
        &mut warped,
    );

    let cropped = imageops::crop_imm(&warped, margin, margin, out_w - trim, out_h - trim).to_image();
    info!(
        width = cropped.width(),
        height = cropped.height(),
        "Document rectified"
    );
    Ok(cropped)
}
