// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanning pipeline — edge map, contour extraction, quadrilateral selection,
// corner ordering and perspective rectification.

pub mod contours;
pub mod corners;
pub mod geometry;
pub mod preprocess;
pub mod rectify;
pub mod scanner;
pub mod select;

pub use contours::{Polygon, extract_polygons};
pub use corners::{OrderedCorners, order_corners};
pub use preprocess::preprocess;
pub use rectify::rectify;
pub use scanner::DocumentScanner;
pub use select::{Quadrilateral, select_best};
