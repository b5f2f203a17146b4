// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Douglas-Peucker simplification of closed integer pixel contours. Perimeter
// and area come from `imageproc::geometry`.

use imageproc::point::Point;

/// Simplify a closed curve with the Douglas-Peucker algorithm.
///
/// Every input point lies within `epsilon` of the returned polygon. The
/// curve is split at two far-apart anchor points and each half is reduced
/// independently, so the result does not depend on where the curve happens
/// to start. Vertices keep the traversal direction of the input; the first
/// vertex is not repeated at the end.
pub fn approximate_closed(points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let first = farthest_from(points, 0);
    let second = farthest_from(points, first);
    if distance(points[first], points[second]) <= epsilon {
        return vec![points[first]];
    }

    let mut vertices = Vec::new();
    simplify_arc(points, first, second, epsilon, &mut vertices);
    simplify_arc(points, second, first, epsilon, &mut vertices);
    vertices
}

/// Reduce the arc running forward (with wrap-around) from `start` to `end`.
/// Pushes the kept vertices, `start` included and `end` excluded.
fn simplify_arc(
    points: &[Point<i32>],
    start: usize,
    end: usize,
    epsilon: f64,
    out: &mut Vec<Point<i32>>,
) {
    let n = points.len();
    let at = |offset: usize| points[(start + offset) % n];
    let span = (end + n - start) % n;

    // Offsets into the arc; the left half is always handled first so the
    // output stays in traversal order.
    let mut stack = vec![(0usize, span)];
    while let Some((lo, hi)) = stack.pop() {
        let mut split = None;
        let mut max_dist = epsilon;
        for k in lo + 1..hi {
            let d = segment_distance(at(k), at(lo), at(hi));
            if d > max_dist {
                max_dist = d;
                split = Some(k);
            }
        }
        match split {
            Some(k) => {
                stack.push((k, hi));
                stack.push((lo, k));
            }
            None => out.push(at(lo)),
        }
    }
}

fn farthest_from(points: &[Point<i32>], origin: usize) -> usize {
    let anchor = points[origin];
    let mut best = origin;
    let mut best_dist = 0.0;
    for (i, p) in points.iter().enumerate() {
        let d = distance(anchor, *p);
        if d > best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Perpendicular distance from `p` to the line through `a` and `b`, or the
/// plain distance to `a` when the two coincide.
fn segment_distance(p: Point<i32>, a: Point<i32>, b: Point<i32>) -> f64 {
    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return distance(p, a);
    }
    let cross = (p.x - a.x) as f64 * dy - (p.y - a.y) as f64 * dx;
    cross.abs() / len
}

fn distance(a: Point<i32>, b: Point<i32>) -> f64 {
    let (dx, dy) = ((a.x - b.x) as f64, (a.y - b.y) as f64);
    (dx * dx + dy * dy).sqrt()
}
