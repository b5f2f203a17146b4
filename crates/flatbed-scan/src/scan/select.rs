// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Quadrilateral selection — the largest four-sided polygon is the document.

use imageproc::point::Point;
use tracing::{debug, instrument};

use super::contours::Polygon;

/// A four-vertex polygon in no particular corner order.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrilateral {
    pub vertices: Vec<Point<i32>>,
    /// Enclosed area, used for ranking.
    pub area: f64,
}

/// Pick the polygon most likely to be the document boundary.
///
/// Candidates must enclose more than `min_area` square pixels and have
/// exactly four vertices. The largest candidate wins; on equal area the
/// earlier one is kept. Returns `None` when nothing qualifies.
#[instrument(skip(polygons), fields(candidates = polygons.len()))]
pub fn select_best(polygons: &[Polygon], min_area: f64) -> Option<Quadrilateral> {
    let mut best: Option<&Polygon> = None;
    for poly in polygons {
        if poly.area <= min_area || poly.vertices.len() != 4 {
            continue;
        }
        if best.is_none_or(|b| poly.area > b.area) {
            best = Some(poly);
        }
    }

    let quad = best.map(|p| Quadrilateral {
        vertices: p.vertices.clone(),
        area: p.area,
    });
    debug!(
        found = quad.is_some(),
        area = quad.as_ref().map(|q| q.area),
        "Quadrilateral selection done"
    );
    quad
}
