//! Douglas-Peucker polyline simplification
//!
//! Works on index ranges into the caller's point buffer and marks survivors
//! in a single keep-mask, so no sub-slices are allocated while recursing.

use glam::DVec2;

use crate::geometry::distance_to_segment;

/// Indices of the points that survive simplification, in order
///
/// The first and last points always survive. Inputs of two points or fewer
/// are returned unchanged.
pub fn simplify_indices(points: &[DVec2], tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    // Explicit stack of (first, last) ranges instead of call recursion
    let mut ranges = vec![(0usize, n - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last <= first + 1 {
            continue;
        }

        let (a, b) = (points[first], points[last]);
        let mut max_dist = 0.0;
        let mut max_idx = first;
        for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
            let dist = distance_to_segment(*p, a, b);
            if dist > max_dist {
                max_dist = dist;
                max_idx = i;
            }
        }

        if max_dist > tolerance {
            keep[max_idx] = true;
            ranges.push((max_idx, last));
            ranges.push((first, max_idx));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| k.then_some(i))
        .collect()
}

/// Simplified copy of `points`
pub fn simplify(points: &[DVec2], tolerance: f64) -> Vec<DVec2> {
    simplify_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}
