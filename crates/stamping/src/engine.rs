//! Brush engine: stamp sequencing along a stroke
//!
//! The engine walks a stroke at fixed arc-length intervals of
//! `spacing * scale`, so stamp density does not depend on how often the
//! input device reports points. Each resample point runs through the
//! dynamics evaluator and the pattern generator, and stamps whose center
//! falls outside the drawable area are dropped.

use glam::DVec2;
use tracing::debug;

use crate::constants::LENGTH_EPSILON;
use crate::dynamics::{DynamicsEvaluator, StampInput};
use crate::geometry::direction_angle;
use crate::mask::{MaskProvider, is_point_in_drawable_area};
use crate::pattern::{self, PatternParams};
use crate::types::{PatternStamp, PointSample, ResolvedBrush, Stroke};
use crate::validation::guard_scale;

/// A point on the stroke path with interpolated input state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSample {
    pub position: DVec2,
    pub pressure: f32,
    pub tilt: Option<f32>,
    /// px/s over the bracketing input segment
    pub speed: f64,
    /// Radians, `None` where the path does not move
    pub direction: Option<f64>,
}

impl StrokeSample {
    fn stationary(point: &PointSample) -> Self {
        Self {
            position: point.position,
            pressure: point.pressure,
            tilt: point.tilt,
            speed: 0.0,
            direction: None,
        }
    }

    fn input(&self) -> StampInput {
        StampInput {
            pressure: self.pressure,
            tilt: self.tilt,
            speed: self.speed,
            direction: self.direction,
        }
    }
}

/// Interpolate between two samples at `t` in [0, 1]
fn interpolate(a: &PointSample, b: &PointSample, t: f64) -> StrokeSample {
    let delta = b.position - a.position;
    let length = delta.length();
    let dt = b.timestamp - a.timestamp;
    let speed = if dt > 0.0 { length / dt } else { 0.0 };
    let tf = t as f32;

    StrokeSample {
        position: a.position + delta * t,
        pressure: a.pressure + (b.pressure - a.pressure) * tf,
        tilt: match (a.tilt, b.tilt) {
            (Some(ta), Some(tb)) => Some(ta + (tb - ta) * tf),
            (ta, tb) => ta.or(tb),
        },
        speed,
        direction: (length > LENGTH_EPSILON).then(|| direction_angle(delta)),
    }
}

/// Resample a stroke at fixed arc-length `step`
///
/// Samples sit at distances `0, step, 2 * step, ...` up to the path length.
/// A stroke without length yields exactly one sample at its first point.
/// Runs in O(points + samples).
pub fn resample_stroke(points: &[PointSample], step: f64) -> Vec<StrokeSample> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let total: f64 = points
        .windows(2)
        .map(|w| w[0].position.distance(w[1].position))
        .sum();
    if points.len() == 1 || total < LENGTH_EPSILON || !step.is_finite() || step <= 0.0 {
        return vec![StrokeSample::stationary(first)];
    }

    let count = (total / step + 1e-9).floor() as usize + 1;
    let mut samples = Vec::with_capacity(count);

    let last_segment = points.len() - 2;
    let mut segment = 0;
    let mut segment_start = 0.0;
    let mut segment_length = points[0].position.distance(points[1].position);

    for k in 0..count {
        let target = k as f64 * step;
        while segment < last_segment && segment_start + segment_length < target {
            segment_start += segment_length;
            segment += 1;
            segment_length = points[segment].position.distance(points[segment + 1].position);
        }
        let t = if segment_length > LENGTH_EPSILON {
            ((target - segment_start) / segment_length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        samples.push(interpolate(&points[segment], &points[segment + 1], t));
    }

    samples
}

/// Generates pattern stamps for strokes
///
/// Stateless: the brush comes from the stroke's snapshot and the canvas
/// size used for mask lookups comes from the mask provider.
#[derive(Debug, Clone, Default)]
pub struct BrushEngine;

impl BrushEngine {
    pub fn new() -> Self {
        Self
    }

    /// Expand a stroke into ordered pattern stamps
    ///
    /// Uses the stroke's own brush snapshot and seed, so the same stroke
    /// always yields the same stamps. With a mask, stamps centered outside
    /// the drawable area are omitted; dynamics still run for them so the
    /// remaining stamps match the unmasked output exactly.
    pub fn generate_pattern_stamps(
        &self,
        stroke: &Stroke,
        mask: Option<&dyn MaskProvider>,
    ) -> Vec<PatternStamp> {
        let brush = stroke.brush.normalized();
        let samples = resample_stroke(&stroke.points, brush.stamp_spacing());
        let mut evaluator = DynamicsEvaluator::for_stroke(stroke);

        let mut stamps = Vec::with_capacity(samples.len());
        let mut suppressed = 0usize;

        for sample in &samples {
            let modulation = evaluator.evaluate(&brush, &sample.input());
            let position = sample.position + modulation.offset;

            if let Some(mask) = mask {
                if !is_point_in_drawable_area(mask, position, mask.canvas_size()) {
                    suppressed += 1;
                    continue;
                }
            }

            let scale = guard_scale(brush.scale * modulation.size as f64);
            let params = PatternParams::new(
                position,
                modulation.rotation,
                brush.spacing,
                scale,
                brush.density,
            );
            let geometry = pattern::generate(brush.pattern, &params, &brush.options);

            stamps.push(PatternStamp {
                position,
                brush: ResolvedBrush {
                    pattern: brush.pattern,
                    size: modulation.size,
                    opacity: modulation.opacity,
                    rotation: modulation.rotation,
                    scale,
                    spacing: brush.spacing,
                    density: brush.density,
                    color: brush.color,
                },
                geometry,
            });
        }

        debug!(
            "generate_pattern_stamps: {:?} {} samples -> {} stamps ({} masked)",
            stroke.id,
            samples.len(),
            stamps.len(),
            suppressed
        );
        stamps
    }
}
