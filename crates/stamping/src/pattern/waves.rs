//! Sine wave generator

use std::f64::consts::TAU;

use super::{PatternOptions, PatternParams, resolve_count};
use crate::geometry::Polyline;

/// `count` parallel sine polylines running along the rotation
///
/// Each wave spans a whole number of wavelengths (the nearest to
/// `count * step`), so every polyline starts and ends on its own axis.
/// Waves are offset along the rotation normal exactly like parallel lines.
pub fn waves(params: &PatternParams, options: &PatternOptions) -> Vec<Polyline> {
    let options = options.normalized();
    let count = resolve_count(params, &options);
    let step = params.step();
    let axis = params.axis();
    let normal = params.normal();

    let amplitude = options.wave_amplitude * step;
    let wavelength = options.wave_wavelength * step;
    let cycles = (count as f64 / options.wave_wavelength).round().max(1.0);
    let span = wavelength * cycles;
    let samples = options.wave_samples;
    let middle = (count as f64 - 1.0) * 0.5;

    (0..count)
        .map(|i| {
            let base = params.center + normal * ((i as f64 - middle) * step);
            let points = (0..samples)
                .map(|s| {
                    let along = span * s as f64 / (samples - 1) as f64;
                    let phase = TAU * along / wavelength;
                    base + axis * (along - span * 0.5) + normal * (amplitude * phase.sin())
                })
                .collect();
            Polyline::new(points)
        })
        .collect()
}
