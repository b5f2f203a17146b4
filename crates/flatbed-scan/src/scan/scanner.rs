// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scan orchestration — run the detection stages in order and define the
// success/failure contract of a single scan.

use flatbed_core::error::Result;
use flatbed_core::{OutputSpec, ScanConfig, ScanError};
use image::{DynamicImage, RgbImage};
use tracing::{debug, info, instrument, warn};

use super::contours::extract_polygons;
use super::corners::{OrderedCorners, order_corners};
use super::preprocess::preprocess;
use super::rectify::rectify;
use super::select::select_best;

/// Finds a document in a still frame and unwarps it to a flat page.
///
/// The scanner owns only its configuration. Every call is independent:
/// nothing from one frame is remembered for the next, and no retries happen
/// internally. A capture loop that wants "try the next frame" behaviour
/// should check [`ScanError::is_retriable`].
///
/// Reconfiguring takes `&mut self`, so it cannot overlap an in-flight scan.
///
/// ```ignore
/// let scanner = DocumentScanner::new();
/// match scanner.scan(&frame) {
///     Ok(page) => page.save("page.png")?,
///     Err(e) if e.is_retriable() => { /* grab another frame */ }
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentScanner {
    config: ScanConfig,
}

impl DocumentScanner {
    // -- Construction ---------------------------------------------------------

    /// Scanner with the default configuration (420x596 output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner with the default tunables and a custom output size.
    pub fn with_output_size(width: f32, height: f32) -> Result<Self> {
        let config = ScanConfig {
            output: OutputSpec::new(width, height)?,
            ..Default::default()
        };
        Ok(Self { config })
    }

    /// Scanner with a full configuration, validated up front.
    pub fn from_config(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    // -- Configuration --------------------------------------------------------

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn output_spec(&self) -> OutputSpec {
        self.config.output
    }

    /// Change the output size. An invalid size is rejected and the previous
    /// one kept.
    pub fn set_output_size(&mut self, width: f32, height: f32) -> Result<()> {
        self.config.output = OutputSpec::new(width, height)?;
        info!(width, height, "Output size changed");
        Ok(())
    }

    // -- Scanning -------------------------------------------------------------

    /// Locate the document and return its rectified image.
    ///
    /// ## Stages
    ///
    /// 1. Empty frame: `EmptyInput`
    /// 2. Edge map
    /// 3. Candidate polygons
    /// 4. Largest qualifying quadrilateral, else `NoDocumentDetected`
    /// 5. Corner ordering, else `InvalidCornerCount`
    /// 6. Perspective warp and border trim, else `InvalidCropRegion`
    #[instrument(skip_all, fields(width = frame.width(), height = frame.height()))]
    pub fn scan(&self, frame: &RgbImage) -> std::result::Result<RgbImage, ScanError> {
        let corners = self.detect(frame)?;
        rectify(
            frame,
            &corners,
            &self.config.output,
            self.config.crop_margin,
        )
    }

    /// Like [`Self::scan`], for any decoded image. Non-RGB8 inputs are
    /// converted first.
    pub fn scan_dynamic(&self, image: &DynamicImage) -> std::result::Result<RgbImage, ScanError> {
        match image {
            DynamicImage::ImageRgb8(rgb) => self.scan(rgb),
            other => self.scan(&other.to_rgb8()),
        }
    }

    /// Run stages 1 to 5 only and report where the document corners are.
    ///
    /// Useful for drawing a live outline over a camera preview without paying
    /// for the warp.
    #[instrument(skip_all, fields(width = frame.width(), height = frame.height()))]
    pub fn detect(&self, frame: &RgbImage) -> std::result::Result<OrderedCorners, ScanError> {
        if frame.width() == 0 || frame.height() == 0 {
            warn!("Input frame is empty; scan not possible");
            return Err(ScanError::EmptyInput);
        }

        let edges = preprocess(frame, &self.config);
        let polygons = extract_polygons(&edges, self.config.polygon_approx_tolerance);

        let Some(quad) = select_best(&polygons, self.config.min_contour_area) else {
            warn!(
                candidates = polygons.len(),
                "No document-shaped quadrilateral found"
            );
            return Err(ScanError::NoDocumentDetected);
        };
        debug!(area = quad.area, "Document quadrilateral selected");

        // The selector only returns four-vertex polygons; this re-checks that
        // contract rather than trusting it.
        let corners = order_corners(&quad.vertices)?;
        info!(
            top_left = ?corners.top_left,
            top_right = ?corners.top_right,
            bottom_left = ?corners.bottom_left,
            bottom_right = ?corners.bottom_right,
            "Document corners found"
        );
        Ok(corners)
    }
}
