// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core value types for the Flatbed scanner.

use serde::{Deserialize, Serialize};

use crate::error::{FlatbedError, Result};

/// Default output width, in output pixels.
pub const DEFAULT_OUTPUT_WIDTH: f32 = 420.0;
/// Default output height, in output pixels. Together with the width this is
/// roughly the A4 aspect ratio.
pub const DEFAULT_OUTPUT_HEIGHT: f32 = 596.0;
/// Largest accepted output side, in output pixels.
pub const MAX_OUTPUT_SIDE: f32 = 16384.0;

/// Target rectangle a detected document is unwarped onto.
///
/// Both dimensions are positive, finite and at most [`MAX_OUTPUT_SIDE`].
/// Fractional sizes are accepted and truncated when the output buffer is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    width: f32,
    height: f32,
}

impl OutputSpec {
    /// Build an output size, rejecting zero, negative, non-finite or
    /// oversized values.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let spec = Self { width, height };
        spec.validate()?;
        Ok(spec)
    }

    /// Output size for a paper preset at the given resolution, portrait.
    pub fn from_paper(paper: PaperSize, px_per_mm: f32) -> Result<Self> {
        let (w_mm, h_mm) = paper.dimensions_mm();
        Self::new(w_mm as f32 * px_per_mm, h_mm as f32 * px_per_mm)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Integer pixel dimensions of the warp target (truncating).
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !(ok(self.width) && ok(self.height)) {
            return Err(FlatbedError::InvalidConfig(format!(
                "output size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_OUTPUT_SIDE || self.height > MAX_OUTPUT_SIDE {
            return Err(FlatbedError::InvalidConfig(format!(
                "output size {}x{} exceeds the {MAX_OUTPUT_SIDE} pixel limit per side",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_OUTPUT_WIDTH,
            height: DEFAULT_OUTPUT_HEIGHT,
        }
    }
}

/// Standard paper sizes, used to derive an output aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height), portrait.
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A3 => (297, 420),
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }

    /// Parse a preset name as typed on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "a3" => Some(Self::A3),
            "a4" => Some(Self::A4),
            "a5" => Some(Self::A5),
            "letter" => Some(Self::Letter),
            "legal" => Some(Self::Legal),
            _ => None,
        }
    }
}
