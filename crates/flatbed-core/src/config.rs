// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanner configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlatbedError, Result};
use crate::types::OutputSpec;

/// Widest accepted Gaussian kernel.
pub const MAX_BLUR_KERNEL_SIZE: u32 = 31;

/// Tunables for the detection and rectification pipeline.
///
/// The defaults reproduce the reference behaviour; changing them is supported
/// but not required for ordinary documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Size of the rectangle the document is unwarped onto.
    pub output: OutputSpec,
    /// Side length of the square Gaussian kernel (odd, at most 31).
    pub blur_kernel_size: u32,
    /// Standard deviation of the Gaussian kernel.
    pub blur_sigma: f32,
    /// Canny hysteresis low threshold.
    pub edge_low_threshold: f32,
    /// Canny hysteresis high threshold.
    pub edge_high_threshold: f32,
    /// Contours enclosing this many square pixels or fewer are noise.
    pub min_contour_area: f64,
    /// Douglas-Peucker tolerance as a fraction of the contour perimeter.
    pub polygon_approx_tolerance: f64,
    /// Border trimmed from each side of the unwarped image.
    pub crop_margin: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            output: OutputSpec::default(),
            blur_kernel_size: 3,
            blur_sigma: 3.0,
            edge_low_threshold: 50.0,
            edge_high_threshold: 150.0,
            min_contour_area: 1000.0,
            polygon_approx_tolerance: 0.02,
            crop_margin: 10,
        }
    }
}

impl ScanConfig {
    /// Check every tunable is usable.
    ///
    /// A crop margin that swallows the whole output is deliberately *not*
    /// rejected here; it surfaces per scan as `ScanError::InvalidCropRegion`.
    pub fn validate(&self) -> Result<()> {
        self.output.validate()?;

        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(invalid(format!(
                "blur kernel size must be odd, got {}",
                self.blur_kernel_size
            )));
        }
        if self.blur_kernel_size > MAX_BLUR_KERNEL_SIZE {
            return Err(invalid(format!(
                "blur kernel size must be at most {MAX_BLUR_KERNEL_SIZE}, got {}",
                self.blur_kernel_size
            )));
        }
        if !(self.blur_sigma.is_finite() && self.blur_sigma > 0.0) {
            return Err(invalid(format!(
                "blur sigma must be positive, got {}",
                self.blur_sigma
            )));
        }
        if !(self.edge_low_threshold >= 0.0 && self.edge_high_threshold.is_finite()) {
            return Err(invalid(format!(
                "edge thresholds must be non-negative, got {}/{}",
                self.edge_low_threshold, self.edge_high_threshold
            )));
        }
        if self.edge_low_threshold > self.edge_high_threshold {
            return Err(invalid(format!(
                "edge low threshold {} exceeds high threshold {}",
                self.edge_low_threshold, self.edge_high_threshold
            )));
        }
        if !(self.min_contour_area >= 0.0 && self.min_contour_area.is_finite()) {
            return Err(invalid(format!(
                "minimum contour area must be non-negative, got {}",
                self.min_contour_area
            )));
        }
        if !(self.polygon_approx_tolerance > 0.0 && self.polygon_approx_tolerance < 1.0) {
            return Err(invalid(format!(
                "polygon tolerance must be in (0, 1), got {}",
                self.polygon_approx_tolerance
            )));
        }
        Ok(())
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), text)?;
        Ok(())
    }
}

fn invalid(msg: String) -> FlatbedError {
    FlatbedError::InvalidConfig(msg)
}
