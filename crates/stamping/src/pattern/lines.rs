//! Parallel line and cross-hatch generators

use super::{PatternOptions, PatternParams, resolve_count};
use crate::geometry::LineSegment;

/// `count` equally spaced parallel segments centered on `params.center`
///
/// Every segment runs along the rotation and has length `count * step`, so
/// the footprint stays square-ish regardless of rotation. Segments are
/// offset along the rotation normal by `(i - (count - 1) / 2) * step`.
pub fn parallel_lines(params: &PatternParams, options: &PatternOptions) -> Vec<LineSegment> {
    let count = resolve_count(params, options);
    let step = params.step();
    let axis = params.axis();
    let normal = params.normal();

    let half_length = count as f64 * step * 0.5;
    let middle = (count as f64 - 1.0) * 0.5;

    (0..count)
        .map(|i| {
            let offset = normal * ((i as f64 - middle) * step);
            let mid = params.center + offset;
            LineSegment::new(mid - axis * half_length, mid + axis * half_length)
        })
        .collect()
}

/// Two parallel line sets, at the rotation and at rotation + 90 degrees
pub fn cross_hatch(params: &PatternParams, options: &PatternOptions) -> Vec<LineSegment> {
    let mut lines = parallel_lines(params, options);
    let crossed = PatternParams {
        rotation: params.rotation + 90.0,
        ..*params
    };
    lines.extend(parallel_lines(&crossed, options));
    lines
}
