// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Corner ordering — assign top-left/top-right/bottom-left/bottom-right roles
// from coordinates alone.

use flatbed_core::ScanError;
use imageproc::point::Point;
use tracing::{debug, warn};

/// The four document corners in fixed semantic roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedCorners {
    pub top_left: Point<i32>,
    pub top_right: Point<i32>,
    pub bottom_left: Point<i32>,
    pub bottom_right: Point<i32>,
}

impl OrderedCorners {
    /// `[top_left, top_right, bottom_left, bottom_right]`.
    pub fn to_array(&self) -> [Point<i32>; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// Same order as [`Self::to_array`], as float pairs for transform fitting.
    pub fn to_f32(&self) -> [(f32, f32); 4] {
        self.to_array().map(|p| (p.x as f32, p.y as f32))
    }
}

#[derive(Clone, Copy)]
enum Extreme {
    Min,
    Max,
}

/// Order four unordered corner points.
///
/// With `sum = x + y` and `diff = x - y`: top-left has the smallest sum,
/// bottom-right the largest sum, top-right the largest diff and bottom-left
/// the smallest diff. When several points share an extreme value, the first
/// one in input order is taken. Anything other than exactly four points is
/// rejected with `InvalidCornerCount`.
///
/// Assumes the document is rotated less than 45 degrees from upright.
pub fn order_corners(points: &[Point<i32>]) -> Result<OrderedCorners, ScanError> {
    if points.len() != 4 {
        warn!(found = points.len(), "Corner ordering needs exactly 4 points");
        return Err(ScanError::InvalidCornerCount {
            found: points.len(),
        });
    }

    let sum = |p: Point<i32>| p.x + p.y;
    let diff = |p: Point<i32>| p.x - p.y;

    let corners = OrderedCorners {
        top_left: pick(points, sum, Extreme::Min),
        top_right: pick(points, diff, Extreme::Max),
        bottom_left: pick(points, diff, Extreme::Min),
        bottom_right: pick(points, sum, Extreme::Max),
    };
    debug!(?corners, "Corners ordered");
    Ok(corners)
}

/// First point (in slice order) at the requested extreme of `key`.
fn pick(points: &[Point<i32>], key: impl Fn(Point<i32>) -> i32, extreme: Extreme) -> Point<i32> {
    let mut best = points[0];
    for &p in &points[1..] {
        let better = match extreme {
            Extreme::Min => key(p) < key(best),
            Extreme::Max => key(p) > key(best),
        };
        if better {
            best = p;
        }
    }
    best
}
