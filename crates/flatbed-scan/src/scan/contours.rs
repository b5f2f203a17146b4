// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contour extraction — trace the outer boundary of every edge region and
// reduce each to a simplified polygon.

use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};
use imageproc::geometry::{arc_length, contour_area};
use imageproc::point::Point;
use tracing::{debug, instrument};

use super::geometry::approximate_closed;

/// A simplified closed contour.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Simplified vertices in traversal order.
    pub vertices: Vec<Point<i32>>,
    /// Area enclosed by the traced contour before simplification.
    pub area: f64,
}

/// Trace the outermost boundaries of the edge map and simplify each one.
///
/// Hole borders and any contour nested inside another region are ignored;
/// only the outer silhouette of each connected edge region survives.
/// `tolerance` is the Douglas-Peucker epsilon as a fraction of each
/// contour's perimeter.
#[instrument(skip(edges), fields(width = edges.width(), height = edges.height()))]
pub fn extract_polygons(edges: &GrayImage, tolerance: f64) -> Vec<Polygon> {
    let contours = find_contours::<i32>(edges);
    let total = contours.len();

    let polygons: Vec<Polygon> = contours
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .filter_map(|c| {
            let perimeter = arc_length(&c.points, true);
            if perimeter <= 0.0 {
                return None;
            }
            Some(Polygon {
                vertices: approximate_closed(&c.points, tolerance * perimeter),
                area: contour_area(&c.points),
            })
        })
        .collect();

    debug!(
        contours = total,
        external = polygons.len(),
        "Contours traced"
    );
    polygons
}
