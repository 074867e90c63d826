//! Brush dynamics evaluation
//!
//! Turns a point's pressure, tilt and speed into per-stamp size, opacity,
//! rotation and position offset. Evaluation never fails: out-of-range input
//! is clamped and disabled dynamics contribute a factor of 1.0.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::brush::{
    BrushConfig, CurvePoint, CurveShape, PressureCurve, RotationMode, TiltDynamics,
    VelocityDynamics,
};
use crate::geometry::angle_delta;
use crate::types::Stroke;
use crate::validation::{clamp_unit, clamp_unit_f64};

/// Cubic ease-in
#[inline]
pub fn ease_in(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-out
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Piecewise-linear lookup through points sorted by input
///
/// A curve without a point at input 0 (or 1) is anchored at (0, 0) (or
/// (1, 1)). Supplied end points are used as given, so the curve stays
/// continuous across the whole input range.
fn evaluate_custom(points: &[CurvePoint], t: f32) -> f32 {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return t;
    };
    let start = if first.input > 0.0 { CurvePoint::new(0.0, 0.0) } else { first };
    let end = if last.input < 1.0 { CurvePoint::new(1.0, 1.0) } else { last };

    if t <= start.input {
        return clamp_unit(start.output);
    }
    if t >= end.input {
        return clamp_unit(end.output);
    }

    let idx = points.partition_point(|p| p.input <= t);
    let (lo, hi) = if idx == 0 {
        (start, first)
    } else if idx == points.len() {
        (last, end)
    } else {
        (points[idx - 1], points[idx])
    };

    let span = hi.input - lo.input;
    if span <= f32::EPSILON {
        return clamp_unit(hi.output);
    }
    let local = (t - lo.input) / span;
    clamp_unit(lo.output + (hi.output - lo.output) * local)
}

impl CurveShape {
    /// Shape value in [0, 1] for an input in [0, 1]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = clamp_unit(t);
        match self {
            CurveShape::Linear => t,
            CurveShape::EaseIn => ease_in(t),
            CurveShape::EaseOut => ease_out(t),
            CurveShape::EaseInOut => ease_in_out(t),
            CurveShape::Custom(points) => evaluate_custom(points, t),
        }
    }
}

impl PressureCurve {
    /// Output multiplier for a pressure value
    ///
    /// Pressure 0 yields `min_output` and pressure 1 yields `max_output`
    /// for every curve shape.
    pub fn evaluate(&self, pressure: f32) -> f32 {
        let shaped = self.shape.evaluate(pressure);
        self.min_output + (self.max_output - self.min_output) * shaped
    }

    fn size_factor(&self, pressure: f32) -> f32 {
        if self.enabled { self.evaluate(pressure) } else { 1.0 }
    }

    fn opacity_factor(&self, pressure: f32) -> f32 {
        if self.enabled && self.affects_opacity {
            self.evaluate(pressure)
        } else {
            1.0
        }
    }
}

impl VelocityDynamics {
    /// Position of `speed` within the configured range, 0.0 = slow, 1.0 = fast
    fn speed_fraction(&self, speed: f64) -> f32 {
        let range = self.max_velocity - self.min_velocity;
        if range <= f64::EPSILON {
            return if speed > self.min_velocity { 1.0 } else { 0.0 };
        }
        clamp_unit_f64((speed - self.min_velocity) / range) as f32
    }

    /// Slow strokes get `size_max`, fast strokes thin out to `size_min`
    fn size_factor(&self, speed: f64) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let t = self.speed_fraction(speed);
        self.size_max + (self.size_min - self.size_max) * t
    }

    fn opacity_factor(&self, speed: f64) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let t = self.speed_fraction(speed);
        self.opacity_max + (self.opacity_min - self.opacity_max) * t
    }
}

impl TiltDynamics {
    fn tilt_fraction(&self, tilt: f32) -> f32 {
        let tilt = tilt.clamp(0.0, 90.0);
        let range = self.max_tilt - self.min_tilt;
        if range <= f32::EPSILON {
            return if tilt > self.min_tilt { 1.0 } else { 0.0 };
        }
        clamp_unit((tilt - self.min_tilt) / range)
    }

    /// More tilt widens the stamp
    fn size_factor(&self, tilt: Option<f32>) -> f32 {
        match tilt {
            Some(tilt) if self.enabled && self.affects_size => {
                1.0 + self.size_sensitivity * self.tilt_fraction(tilt)
            }
            _ => 1.0,
        }
    }

    /// More tilt fades the stamp
    fn opacity_factor(&self, tilt: Option<f32>) -> f32 {
        match tilt {
            Some(tilt) if self.enabled && self.affects_opacity => {
                (1.0 - self.opacity_sensitivity * self.tilt_fraction(tilt)).max(0.0)
            }
            _ => 1.0,
        }
    }
}

/// Local stroke state at a stamp location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampInput {
    pub pressure: f32,
    /// Degrees
    pub tilt: Option<f32>,
    /// px/s
    pub speed: f64,
    /// Direction of travel in radians, `None` for a stationary stroke
    pub direction: Option<f64>,
}

/// Resolved per-stamp modulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulation {
    /// Size multiplier (applied to the brush scale)
    pub size: f32,
    /// Final opacity 0.0-1.0
    pub opacity: f32,
    /// Degrees
    pub rotation: f64,
    /// Position jitter in pixels
    pub offset: DVec2,
}

/// Stateful evaluator for one stroke
///
/// Holds the stroke's RNG (seeded from the stroke) and the smoothed travel
/// direction used by follow-stroke rotation.
#[derive(Debug, Clone)]
pub struct DynamicsEvaluator {
    rng: StdRng,
    smoothed_direction: Option<f64>,
}

impl DynamicsEvaluator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            smoothed_direction: None,
        }
    }

    pub fn for_stroke(stroke: &Stroke) -> Self {
        Self::new(stroke.seed)
    }

    /// Evaluate all dynamics for one stamp
    pub fn evaluate(&mut self, brush: &BrushConfig, input: &StampInput) -> Modulation {
        let pressure = clamp_unit(input.pressure);
        let speed = if input.speed.is_finite() { input.speed.max(0.0) } else { 0.0 };
        let tilt = input.tilt.filter(|t| !t.is_nan());

        let mut size = brush.pressure.size_factor(pressure)
            * brush.velocity.size_factor(speed)
            * brush.tilt.size_factor(tilt);
        let mut opacity = clamp_unit(brush.opacity)
            * brush.pressure.opacity_factor(pressure)
            * brush.velocity.opacity_factor(speed)
            * brush.tilt.opacity_factor(tilt);
        let mut rotation = brush.rotation + self.rotation_for(brush, input.direction);
        let mut offset = DVec2::ZERO;

        let jitter = &brush.jitter;
        if jitter.enabled {
            if jitter.size > 0.0 {
                size *= 1.0 + self.signed_unit() as f32 * jitter.size;
            }
            if jitter.rotation > 0.0 {
                rotation += self.signed_unit() * jitter.rotation as f64 * 180.0;
            }
            if jitter.opacity > 0.0 {
                opacity *= 1.0 + self.signed_unit() as f32 * jitter.opacity;
            }
            if jitter.position > 0.0 {
                let reach = brush.stamp_spacing() * jitter.position as f64;
                offset = DVec2::new(self.signed_unit(), self.signed_unit()) * reach;
            }
        }

        Modulation {
            size: size.max(0.0),
            opacity: clamp_unit(opacity),
            rotation,
            offset,
        }
    }

    /// Rotation contribution in degrees, added to the brush rotation
    fn rotation_for(&mut self, brush: &BrushConfig, direction: Option<f64>) -> f64 {
        let dynamics = &brush.rotation_dynamics;
        match dynamics.mode {
            RotationMode::Fixed => dynamics.fixed_value,
            RotationMode::Random => self.rng.random_range(0.0..360.0),
            RotationMode::FollowStroke => {
                let smoothed = match (self.smoothed_direction, direction) {
                    (Some(previous), Some(current)) => {
                        let keep = dynamics.smoothing.clamp(0.0, 0.99);
                        previous + angle_delta(previous, current) * (1.0 - keep)
                    }
                    (None, Some(current)) => current,
                    (previous, None) => previous.unwrap_or(0.0),
                };
                self.smoothed_direction = Some(smoothed);
                smoothed.to_degrees()
            }
        }
    }

    fn signed_unit(&mut self) -> f64 {
        self.rng.random_range(-1.0..=1.0)
    }
}
