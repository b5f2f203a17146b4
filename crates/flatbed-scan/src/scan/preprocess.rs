// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preprocessing — turn a color frame into a binary edge map whose document
// boundary forms one closed contour.

use flatbed_core::ScanConfig;
use image::{GrayImage, RgbImage, imageops};
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::separable_filter_equal;
use imageproc::morphology::dilate;
use tracing::{debug, instrument};

/// Produce the edge map for a frame.
///
/// ## Pipeline
///
/// 1. Convert to luminance
/// 2. Gaussian blur with a `blur_kernel_size` square kernel
/// 3. Canny edge detection with the configured hysteresis thresholds. The
///    `imageproc` detector smooths again with its own fixed σ = 1.4 Gaussian
///    before taking gradients, so the configured blur is not the only one.
/// 4. Dilate with a 3x3 square so small gaps in the page outline close
///
/// The result is strictly 0/255 and has the frame's dimensions.
#[instrument(skip_all, fields(width = frame.width(), height = frame.height()))]
pub fn preprocess(frame: &RgbImage, config: &ScanConfig) -> GrayImage {
    let gray = imageops::grayscale(frame);

    let kernel = gaussian_kernel(config.blur_kernel_size, config.blur_sigma);
    let blurred = if kernel.len() > 1 {
        separable_filter_equal(&gray, &kernel)
    } else {
        gray
    };
    debug!(
        kernel_size = kernel.len(),
        sigma = config.blur_sigma,
        "Applied Gaussian blur"
    );

    let edges = canny(
        &blurred,
        config.edge_low_threshold,
        config.edge_high_threshold,
    );
    debug!(
        low = config.edge_low_threshold,
        high = config.edge_high_threshold,
        "Canny edge detection complete"
    );

    // L-infinity radius 1 is exactly the 3x3 square structuring element.
    let dilated = dilate(&edges, Norm::LInf, 1);
    debug!("Edge map dilated");

    dilated
}

/// Normalised 1-D Gaussian weights of length `size`.
///
/// Applied once per axis this is the `size` x `size` Gaussian kernel.
pub(crate) fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    let half = (size / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let weights: Vec<f32> = (0..size)
        .map(|i| {
            let offset = i as f32 - half;
            (-(offset * offset) / denom).exp()
        })
        .collect();
    let total: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}
