// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// flatbed-scan — Document detection and rectification for Flatbed.
//
// Finds the largest quadrilateral outline in a camera frame (blur, Canny,
// dilation, contour tracing, polygon simplification), orders its corners, and
// warps it onto a fixed-size page. Also writes finished pages to disk.

pub mod output;
pub mod scan;

// Re-export the primary items so callers can use `flatbed_scan::DocumentScanner` etc.
pub use output::{encode_jpeg, save_scan};
pub use scan::{DocumentScanner, OrderedCorners};
