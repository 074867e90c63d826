//! Dot grid generator

use super::{PatternOptions, PatternParams, grid_size_for_density};
use crate::constants::MAX_EXPLICIT_DOT_GRID;
use crate::geometry::Circle;

/// Square grid of `(2 * grid_size + 1)^2` circles centered on `params.center`
///
/// The grid step is `spacing * scale` and the grid axes follow the rotation.
/// All dots share one radius, `dot_radius * step`.
pub fn dot_grid(params: &PatternParams, options: &PatternOptions) -> Vec<Circle> {
    let options = options.normalized();
    let grid = match options.count {
        Some(count) => count.min(MAX_EXPLICIT_DOT_GRID) as i64,
        None => grid_size_for_density(params.density) as i64,
    };
    let step = params.step();
    let axis = params.axis();
    let normal = params.normal();
    let radius = options.dot_radius * step;

    let side = (2 * grid + 1) as usize;
    let mut dots = Vec::with_capacity(side * side);
    for row in -grid..=grid {
        for col in -grid..=grid {
            let offset = axis * (col as f64 * step) + normal * (row as f64 * step);
            dots.push(Circle {
                center: params.center + offset,
                radius,
            });
        }
    }
    dots
}
