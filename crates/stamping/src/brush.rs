//! Brush configuration
//!
//! A [`BrushConfig`] is copied into each stroke when the stroke begins, so
//! edits made while a stroke is in flight only affect the next stroke.
//! Every type here is plain data with serde derives for the preset store.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DENSITY;
use crate::pattern::PatternOptions;
use crate::validation::{clamp_unit, guard_scale, guard_spacing, non_negative_or};

/// Procedural pattern stamped along a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PatternType {
    #[default]
    ParallelLines = 0,
    CrossHatch = 1,
    Dots = 2,
    ContourLines = 3,
    Waves = 4,
}

impl PatternType {
    pub const ALL: [PatternType; 5] = [
        PatternType::ParallelLines,
        PatternType::CrossHatch,
        PatternType::Dots,
        PatternType::ContourLines,
        PatternType::Waves,
    ];
}

/// Speed-driven size/opacity modulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityDynamics {
    pub enabled: bool,
    /// Size factor at or above `max_velocity`
    pub size_min: f32,
    /// Size factor at or below `min_velocity`
    pub size_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Speed range in px/s
    pub min_velocity: f64,
    pub max_velocity: f64,
}

impl Default for VelocityDynamics {
    fn default() -> Self {
        Self {
            enabled: false,
            size_min: 0.5,
            size_max: 1.0,
            opacity_min: 0.6,
            opacity_max: 1.0,
            min_velocity: 0.0,
            max_velocity: 2000.0,
        }
    }
}

/// A control point of a custom pressure curve, both axes in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub input: f32,
    pub output: f32,
}

impl CurvePoint {
    pub fn new(input: f32, output: f32) -> Self {
        Self { input, output }
    }
}

/// Shape of the pressure response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "points")]
pub enum CurveShape {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Piecewise-linear through points sorted by input. Missing end points
    /// default to (0, 0) and (1, 1).
    Custom(Vec<CurvePoint>),
}

/// Number of control points the curve editor works with
pub const CANONICAL_CURVE_POINTS: usize = 11;

impl CurveShape {
    /// Custom curve from arbitrary points, sorted by input
    pub fn custom(mut points: Vec<CurvePoint>) -> Self {
        for point in &mut points {
            point.input = clamp_unit(point.input);
            point.output = clamp_unit(point.output);
        }
        points.sort_by(|a, b| a.input.total_cmp(&b.input));
        CurveShape::Custom(points)
    }

    /// The editor's default: 11 points on the identity line at 0.1 steps
    pub fn canonical_custom() -> Self {
        let step = 1.0 / (CANONICAL_CURVE_POINTS - 1) as f32;
        CurveShape::Custom(
            (0..CANONICAL_CURVE_POINTS)
                .map(|i| {
                    let x = i as f32 * step;
                    CurvePoint::new(x, x)
                })
                .collect(),
        )
    }
}

/// Maps input pressure to a multiplier in `[min_output, max_output]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureCurve {
    pub enabled: bool,
    pub min_output: f32,
    pub max_output: f32,
    pub shape: CurveShape,
    /// Pressure also modulates opacity
    pub affects_opacity: bool,
}

impl Default for PressureCurve {
    fn default() -> Self {
        Self {
            enabled: true,
            min_output: 0.2,
            max_output: 1.0,
            shape: CurveShape::Linear,
            affects_opacity: false,
        }
    }
}

/// Pen tilt modulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltDynamics {
    pub enabled: bool,
    pub affects_size: bool,
    pub affects_opacity: bool,
    pub size_sensitivity: f32,
    pub opacity_sensitivity: f32,
    /// Tilt range in degrees mapped onto the sensitivity
    pub min_tilt: f32,
    pub max_tilt: f32,
}

impl Default for TiltDynamics {
    fn default() -> Self {
        Self {
            enabled: false,
            affects_size: true,
            affects_opacity: false,
            size_sensitivity: 0.5,
            opacity_sensitivity: 0.5,
            min_tilt: 0.0,
            max_tilt: 90.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    #[default]
    Fixed,
    FollowStroke,
    Random,
}

/// How each stamp's rotation is chosen on top of the brush rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RotationDynamics {
    pub mode: RotationMode,
    /// Degrees added in `Fixed` mode
    pub fixed_value: f64,
    /// 0.0 = raw tangent, approaching 1.0 = heavily smoothed
    pub smoothing: f64,
}

/// Per-stamp random perturbation, each amount a fraction of the base value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Jitter {
    pub enabled: bool,
    pub size: f32,
    pub rotation: f32,
    pub opacity: f32,
    pub position: f32,
}

/// Complete brush configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub pattern: PatternType,
    /// Degrees
    pub rotation: f64,
    /// Pixels between stamps and between pattern elements
    pub spacing: f64,
    /// Multiplies spacing and size
    pub scale: f64,
    pub opacity: f32,
    pub density: f32,
    /// Color in [r, g, b, a]
    pub color: [f32; 4],
    pub velocity: VelocityDynamics,
    pub pressure: PressureCurve,
    pub tilt: TiltDynamics,
    pub rotation_dynamics: RotationDynamics,
    pub jitter: Jitter,
    pub options: PatternOptions,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            pattern: PatternType::ParallelLines,
            rotation: 0.0,
            spacing: 10.0,
            scale: 1.0,
            opacity: 1.0,
            density: DEFAULT_DENSITY,
            color: [0.0, 0.0, 0.0, 1.0],
            velocity: VelocityDynamics::default(),
            pressure: PressureCurve::default(),
            tilt: TiltDynamics::default(),
            rotation_dynamics: RotationDynamics::default(),
            jitter: Jitter::default(),
            options: PatternOptions::default(),
        }
    }
}

impl BrushConfig {
    /// Brush for the given pattern with default parameters
    pub fn with_pattern(pattern: PatternType) -> Self {
        Self {
            pattern,
            ..Default::default()
        }
    }

    /// Distance between consecutive stamps along a stroke
    pub fn stamp_spacing(&self) -> f64 {
        guard_spacing(self.spacing) * guard_scale(self.scale)
    }

    /// Copy with every field clamped into its documented range
    pub fn normalized(&self) -> Self {
        let mut brush = self.clone();
        brush.rotation = if brush.rotation.is_finite() { brush.rotation } else { 0.0 };
        brush.spacing = guard_spacing(brush.spacing);
        brush.scale = guard_scale(brush.scale);
        brush.opacity = clamp_unit(brush.opacity);
        brush.density = if brush.density.is_nan() {
            DEFAULT_DENSITY
        } else {
            clamp_unit(brush.density)
        };
        for channel in &mut brush.color {
            *channel = clamp_unit(*channel);
        }

        let v = &mut brush.velocity;
        v.size_min = v.size_min.max(0.0);
        v.size_max = v.size_max.max(0.0);
        v.opacity_min = clamp_unit(v.opacity_min);
        v.opacity_max = clamp_unit(v.opacity_max);
        v.min_velocity = non_negative_or(v.min_velocity, 0.0);
        v.max_velocity = non_negative_or(v.max_velocity, v.min_velocity);

        let p = &mut brush.pressure;
        p.min_output = p.min_output.max(0.0);
        p.max_output = p.max_output.max(0.0);
        if let CurveShape::Custom(points) = &p.shape {
            p.shape = CurveShape::custom(points.clone());
        }

        let t = &mut brush.tilt;
        t.size_sensitivity = clamp_unit(t.size_sensitivity);
        t.opacity_sensitivity = clamp_unit(t.opacity_sensitivity);
        t.min_tilt = t.min_tilt.clamp(0.0, 90.0);
        t.max_tilt = t.max_tilt.clamp(t.min_tilt, 90.0);

        let r = &mut brush.rotation_dynamics;
        r.smoothing = r.smoothing.clamp(0.0, 0.99);
        r.fixed_value = if r.fixed_value.is_finite() { r.fixed_value } else { 0.0 };

        let j = &mut brush.jitter;
        j.size = clamp_unit(j.size);
        j.rotation = clamp_unit(j.rotation);
        j.opacity = clamp_unit(j.opacity);
        j.position = clamp_unit(j.position);

        brush.options = brush.options.normalized();
        brush
    }
}
