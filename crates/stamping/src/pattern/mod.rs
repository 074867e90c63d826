//! Procedural pattern generation
//!
//! Pure, stateless geometry generators, one per [`PatternType`]. Every
//! generator takes the stamp center, rotation (degrees), spacing, scale and
//! density. Element counts depend only on density (or an explicit count),
//! never on scale; scale stretches spacing and size.
//!
//! Density maps to count as `2 + round(density * 10)`, so density 0.0 gives
//! 2 elements, 0.5 gives 7 and 1.0 gives 12. Dot grids use
//! `1 + round(density * 3)` as the half-size of the grid.

mod contour;
mod dots;
mod lines;
mod waves;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::brush::PatternType;
use crate::constants::{
    MAX_DOT_GRID, MAX_EXPLICIT_COUNT, MAX_PATTERN_COUNT, MAX_WAVE_SAMPLES, MIN_DOT_GRID,
    MIN_PATTERN_COUNT, MIN_WAVE_SAMPLES,
};
use crate::geometry::{Arc, Circle, LineSegment, Polyline};
use crate::validation::{clamp_unit, guard_scale, guard_spacing};

pub use contour::contour_lines;
pub use dots::dot_grid;
pub use lines::{cross_hatch, parallel_lines};
pub use waves::waves;

/// Shape knobs beyond the common generator inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternOptions {
    /// Explicit element count (dot grid half-size for dots), overrides density.
    /// Capped at `MAX_EXPLICIT_COUNT` (`MAX_EXPLICIT_DOT_GRID` for dots).
    pub count: Option<u32>,
    /// Dot radius as a fraction of the grid step
    pub dot_radius: f64,
    /// Wave amplitude as a fraction of the line step
    pub wave_amplitude: f64,
    /// Wavelength as a multiple of the line step
    pub wave_wavelength: f64,
    /// Samples per wave polyline
    pub wave_samples: usize,
    /// 360 draws full contour circles, less draws arcs around the rotation
    pub contour_sweep_degrees: f64,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            count: None,
            dot_radius: 0.2,
            wave_amplitude: 0.35,
            wave_wavelength: 2.0,
            wave_samples: 32,
            contour_sweep_degrees: 360.0,
        }
    }
}

impl PatternOptions {
    pub fn with_count(count: u32) -> Self {
        Self {
            count: Some(count),
            ..Default::default()
        }
    }

    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f64, d: f64| if v.is_finite() { v } else { d };
        Self {
            count: self.count.map(|c| c.clamp(1, MAX_EXPLICIT_COUNT)),
            dot_radius: finite_or(self.dot_radius, defaults.dot_radius).clamp(0.01, 0.5),
            wave_amplitude: finite_or(self.wave_amplitude, defaults.wave_amplitude).max(0.0),
            wave_wavelength: finite_or(self.wave_wavelength, defaults.wave_wavelength).max(0.1),
            wave_samples: self.wave_samples.clamp(MIN_WAVE_SAMPLES, MAX_WAVE_SAMPLES),
            contour_sweep_degrees: finite_or(
                self.contour_sweep_degrees,
                defaults.contour_sweep_degrees,
            )
            .clamp(1.0, 360.0),
        }
    }
}

/// Common generator inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternParams {
    pub center: DVec2,
    /// Degrees
    pub rotation: f64,
    pub spacing: f64,
    pub scale: f64,
    pub density: f32,
}

impl PatternParams {
    pub fn new(center: DVec2, rotation: f64, spacing: f64, scale: f64, density: f32) -> Self {
        Self {
            center,
            rotation,
            spacing,
            scale,
            density,
        }
    }

    /// Distance between neighbouring elements after guarding and scaling
    pub(crate) fn step(&self) -> f64 {
        guard_spacing(self.spacing) * guard_scale(self.scale)
    }

    pub(crate) fn radians(&self) -> f64 {
        if self.rotation.is_finite() {
            self.rotation.to_radians()
        } else {
            0.0
        }
    }

    /// Unit vector along the rotation
    pub(crate) fn axis(&self) -> DVec2 {
        DVec2::from_angle(self.radians())
    }

    /// Unit vector perpendicular to the rotation
    pub(crate) fn normal(&self) -> DVec2 {
        self.axis().perp()
    }
}

/// Geometry produced for one stamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "items")]
pub enum PatternGeometry {
    Lines(Vec<LineSegment>),
    Circles(Vec<Circle>),
    Arcs(Vec<Arc>),
    Waves(Vec<Polyline>),
}

impl PatternGeometry {
    /// Number of primitives
    pub fn len(&self) -> usize {
        match self {
            PatternGeometry::Lines(lines) => lines.len(),
            PatternGeometry::Circles(circles) => circles.len(),
            PatternGeometry::Arcs(arcs) => arcs.len(),
            PatternGeometry::Waves(waves) => waves.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Element count for a density value
pub fn count_for_density(density: f32) -> u32 {
    let span = (MAX_PATTERN_COUNT - MIN_PATTERN_COUNT) as f32;
    MIN_PATTERN_COUNT + (clamp_unit(density) * span).round() as u32
}

/// Dot grid half-size for a density value
pub fn grid_size_for_density(density: f32) -> u32 {
    let span = (MAX_DOT_GRID - MIN_DOT_GRID) as f32;
    MIN_DOT_GRID + (clamp_unit(density) * span).round() as u32
}

pub(crate) fn resolve_count(params: &PatternParams, options: &PatternOptions) -> u32 {
    match options.count {
        Some(count) => count.clamp(1, MAX_EXPLICIT_COUNT),
        None => count_for_density(params.density),
    }
}

/// Generate the geometry for one pattern type
pub fn generate(
    pattern: PatternType,
    params: &PatternParams,
    options: &PatternOptions,
) -> PatternGeometry {
    match pattern {
        PatternType::ParallelLines => PatternGeometry::Lines(parallel_lines(params, options)),
        PatternType::CrossHatch => PatternGeometry::Lines(cross_hatch(params, options)),
        PatternType::Dots => PatternGeometry::Circles(dot_grid(params, options)),
        PatternType::ContourLines => contour_lines(params, options),
        PatternType::Waves => PatternGeometry::Waves(waves(params, options)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_EXPLICIT_DOT_GRID;

    fn params(scale: f64) -> PatternParams {
        PatternParams::new(DVec2::new(50.0, 50.0), 30.0, 8.0, scale, 0.5)
    }

    #[test]
    fn test_density_mapping() {
        assert_eq!(count_for_density(0.0), 2);
        assert_eq!(count_for_density(0.5), 7);
        assert_eq!(count_for_density(1.0), 12);
        assert_eq!(count_for_density(5.0), 12);
        assert_eq!(grid_size_for_density(0.0), 1);
        assert_eq!(grid_size_for_density(1.0), 4);
    }

    #[test]
    fn test_every_pattern_non_empty() {
        let options = PatternOptions::default();
        for pattern in PatternType::ALL {
            let geometry = generate(pattern, &params(1.0), &options);
            assert!(!geometry.is_empty(), "{pattern:?} produced no geometry");
        }
    }

    #[test]
    fn test_scale_does_not_change_count() {
        let options = PatternOptions::default();
        for pattern in PatternType::ALL {
            let small = generate(pattern, &params(1.0), &options);
            let large = generate(pattern, &params(2.0), &options);
            assert_eq!(small.len(), large.len(), "{pattern:?}");
        }
    }

    #[test]
    fn test_degenerate_params_still_generate() {
        let options = PatternOptions {
            count: Some(0),
            ..Default::default()
        };
        let degenerate = PatternParams::new(DVec2::ZERO, f64::NAN, 0.0, -1.0, f32::NAN);
        for pattern in PatternType::ALL {
            let geometry = generate(pattern, &degenerate, &options);
            assert!(!geometry.is_empty(), "{pattern:?}");
        }
    }

    #[test]
    fn test_huge_explicit_count_is_capped() {
        let options = PatternOptions {
            count: Some(u32::MAX),
            wave_samples: usize::MAX,
            ..Default::default()
        };
        for pattern in PatternType::ALL {
            let geometry = generate(pattern, &params(1.0), &options);
            assert!(!geometry.is_empty(), "{pattern:?}");
            let bound = match pattern {
                PatternType::Dots => {
                    let side = (2 * MAX_EXPLICIT_DOT_GRID + 1) as usize;
                    side * side
                }
                PatternType::CrossHatch => 2 * MAX_EXPLICIT_COUNT as usize,
                _ => MAX_EXPLICIT_COUNT as usize,
            };
            assert!(geometry.len() <= bound, "{pattern:?}: {}", geometry.len());
        }
        assert_eq!(options.normalized().count, Some(MAX_EXPLICIT_COUNT));
        assert_eq!(options.normalized().wave_samples, MAX_WAVE_SAMPLES);
    }

    #[test]
    fn test_options_normalized() {
        let options = PatternOptions {
            count: Some(0),
            dot_radius: 4.0,
            wave_samples: 2,
            contour_sweep_degrees: 720.0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(options.count, Some(1));
        assert_eq!(options.dot_radius, 0.5);
        assert_eq!(options.wave_samples, MIN_WAVE_SAMPLES);
        assert_eq!(options.contour_sweep_degrees, 360.0);
    }
}
