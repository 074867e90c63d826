use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::brush::{BrushConfig, PatternType};
use crate::pattern::PatternGeometry;
use crate::validation::clamp_unit;

/// Type-safe layer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u32);

/// Type-safe stroke identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StrokeId(pub u64);

/// One recorded input sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSample {
    /// Canvas-space position
    pub position: DVec2,
    /// Pressure 0.0-1.0
    pub pressure: f32,
    /// Pen tilt in degrees, if the device reports it
    pub tilt: Option<f32>,
    /// Seconds
    pub timestamp: f64,
}

impl PointSample {
    /// Create a sample, clamping pressure into [0, 1]
    pub fn new(position: DVec2, pressure: f32, timestamp: f64) -> Self {
        Self {
            position,
            pressure: clamp_unit(pressure),
            tilt: None,
            timestamp,
        }
    }

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = if tilt.is_nan() { None } else { Some(tilt) };
        self
    }
}

/// One continuous drag gesture
///
/// Points are kept in non-decreasing timestamp order and a stroke always
/// holds at least one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub id: StrokeId,
    pub points: Vec<PointSample>,
    /// Brush copied at stroke start, never mutated afterwards
    pub brush: BrushConfig,
    pub layer_id: LayerId,
    pub start_time: f64,
    /// Seed for jitter and random rotation
    pub seed: u64,
}

impl Stroke {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().map(|p| p.position)
    }

    pub fn last_point(&self) -> Option<&PointSample> {
        self.points.last()
    }

    /// Total path length in pixels
    pub fn arc_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].position.distance(w[1].position))
            .sum()
    }
}

/// Parameters resolved for a single stamp after dynamics and jitter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBrush {
    pub pattern: PatternType,
    /// Size multiplier applied to the brush scale
    pub size: f32,
    /// Final opacity 0.0-1.0
    pub opacity: f32,
    /// Degrees
    pub rotation: f64,
    /// Effective pattern scale (brush scale * size)
    pub scale: f64,
    pub spacing: f64,
    pub density: f32,
    pub color: [f32; 4],
}

/// A positioned pattern instance ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternStamp {
    pub position: DVec2,
    pub brush: ResolvedBrush,
    pub geometry: PatternGeometry,
}
