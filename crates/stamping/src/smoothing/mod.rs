//! Stroke smoothing and simplification
//!
//! The [`StrokeSmoother`] owns the in-flight stroke. Incoming points pass
//! through a running filter over the last N accepted points (O(1) per
//! point), and the finished stroke is simplified with Douglas-Peucker.
//!
//! Clipping against the drawable-area mask is not done here; the brush
//! engine suppresses stamps instead.

mod simplify;

use std::collections::VecDeque;

use glam::DVec2;
use patternist_config::EngineConfig;
use tracing::{debug, warn};

use crate::brush::BrushConfig;
use crate::types::{LayerId, PointSample, Stroke, StrokeId};
use crate::validation::clamp_unit;

pub use simplify::{simplify, simplify_indices};

/// Smoother lifecycle
#[derive(Debug, Default)]
enum StrokeState {
    #[default]
    Idle,
    Active(ActiveStroke),
}

#[derive(Debug)]
struct ActiveStroke {
    stroke: Stroke,
    /// Last accepted positions, oldest first
    window: VecDeque<DVec2>,
    /// Running sum of `window`
    window_sum: DVec2,
}

impl ActiveStroke {
    fn accept(&mut self, position: DVec2, capacity: usize) {
        self.window.push_back(position);
        self.window_sum += position;
        while self.window.len() > capacity {
            if let Some(old) = self.window.pop_front() {
                self.window_sum -= old;
            }
        }
    }
}

/// Accumulates, smooths and finalizes strokes
#[derive(Debug)]
pub struct StrokeSmoother {
    window: usize,
    strength: f64,
    tolerance: f64,
    jitter_seed: Option<u64>,
    next_stroke_id: u64,
    state: StrokeState,
}

impl Default for StrokeSmoother {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl StrokeSmoother {
    /// Create a smoother from the engine configuration
    pub fn new(config: &EngineConfig) -> Self {
        let config = config.normalized();
        Self {
            window: config.smoothing_window,
            strength: config.smoothing_strength,
            tolerance: config.simplify_tolerance,
            jitter_seed: config.jitter_seed,
            next_stroke_id: 1,
            state: StrokeState::Idle,
        }
    }

    /// Simplification tolerance in pixels
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Check if a stroke is currently in progress
    pub fn is_active(&self) -> bool {
        matches!(self.state, StrokeState::Active(_))
    }

    /// The in-progress stroke, if any
    pub fn active_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            StrokeState::Active(active) => Some(&active.stroke),
            StrokeState::Idle => None,
        }
    }

    /// Start a stroke with exactly one point
    ///
    /// The brush is copied into the stroke and a copy of the new stroke is
    /// returned. A stroke already in progress is discarded.
    pub fn begin_stroke(
        &mut self,
        sample: PointSample,
        layer_id: LayerId,
        brush: &BrushConfig,
    ) -> Stroke {
        if let StrokeState::Active(active) = &self.state {
            warn!(
                "begin_stroke: discarding unfinished stroke {:?}",
                active.stroke.id
            );
        }

        let id = StrokeId(self.next_stroke_id);
        self.next_stroke_id += 1;

        let sample = PointSample {
            pressure: clamp_unit(sample.pressure),
            ..sample
        };
        let stroke = Stroke {
            id,
            points: vec![sample],
            brush: brush.normalized(),
            layer_id,
            start_time: sample.timestamp,
            seed: self.seed_for(id),
        };

        let mut active = ActiveStroke {
            stroke,
            window: VecDeque::with_capacity(self.window + 1),
            window_sum: DVec2::ZERO,
        };
        active.accept(sample.position, self.window);

        debug!(
            "begin_stroke: {:?} on layer {:?} at ({:.1}, {:.1})",
            id, layer_id, sample.position.x, sample.position.y
        );

        let started = active.stroke.clone();
        self.state = StrokeState::Active(active);
        started
    }

    /// Append a smoothed sample to the active stroke
    ///
    /// Returns false (and does nothing) when no stroke is active.
    pub fn add_point(&mut self, sample: PointSample) -> bool {
        let StrokeState::Active(active) = &mut self.state else {
            debug!("add_point: no active stroke, ignoring");
            return false;
        };

        let raw = sample.position;
        let average = (active.window_sum + raw) / (active.window.len() + 1) as f64;
        let smoothed = raw.lerp(average, self.strength);

        let last_time = active
            .stroke
            .last_point()
            .map(|p| p.timestamp)
            .unwrap_or(sample.timestamp);

        active.stroke.points.push(PointSample {
            position: smoothed,
            pressure: clamp_unit(sample.pressure),
            tilt: sample.tilt,
            timestamp: sample.timestamp.max(last_time),
        });
        active.accept(smoothed, self.window);
        true
    }

    /// Finish the active stroke, simplifying its points
    ///
    /// Returns `None` when no stroke is active.
    pub fn end_stroke(&mut self) -> Option<Stroke> {
        let StrokeState::Active(active) = std::mem::take(&mut self.state) else {
            return None;
        };
        let mut stroke = active.stroke;

        let positions: Vec<DVec2> = stroke.positions().collect();
        let kept = simplify_indices(&positions, self.tolerance);
        let before = stroke.points.len();
        if kept.len() < before {
            stroke.points = kept.into_iter().map(|i| stroke.points[i]).collect();
        }

        debug!(
            "end_stroke: {:?} simplified {} -> {} points",
            stroke.id,
            before,
            stroke.points.len()
        );
        Some(stroke)
    }

    /// Discard the active stroke
    ///
    /// Returns false when there was nothing to cancel.
    pub fn cancel_stroke(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            StrokeState::Active(active) => {
                debug!("cancel_stroke: discarded {:?}", active.stroke.id);
                true
            }
            StrokeState::Idle => false,
        }
    }

    fn seed_for(&self, id: StrokeId) -> u64 {
        match self.jitter_seed {
            Some(seed) => seed ^ id.0.wrapping_mul(0x9E37_79B9_7F4A_7C15),
            None => rand::random(),
        }
    }
}
