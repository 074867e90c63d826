//! Shared configuration for Patternist
//!
//! This crate provides the single source of truth for the stroke engine's
//! tunables: input smoothing, simplification tolerance, canvas dimensions
//! used for mask lookup, command history depth and jitter seeding.

use serde::{Deserialize, Serialize};

/// Default number of accepted points in the smoothing window
pub const DEFAULT_SMOOTHING_WINDOW: usize = 4;

/// Default blend between raw input and the windowed average
pub const DEFAULT_SMOOTHING_STRENGTH: f64 = 0.5;

/// Default Douglas-Peucker tolerance in canvas pixels
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 2.0;

/// Default number of undoable commands kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 2048;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 2048;

/// Canvas dimensions in canvas-space pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasConfig {
    /// Create a canvas config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Get width as f64 for calculations
    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    /// Get height as f64 for calculations
    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }
}

/// Engine configuration shared by the stroke smoother, brush engine and pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of previously accepted points blended into each new point
    pub smoothing_window: usize,
    /// 0.0 = raw input, 1.0 = full windowed average
    pub smoothing_strength: f64,
    /// Maximum deviation allowed when simplifying a finished stroke
    pub simplify_tolerance: f64,
    /// Maximum undo levels
    pub history_capacity: usize,
    /// Canvas dimensions (mask lookups scale from this space)
    pub canvas: CanvasConfig,
    /// Fixed seed for jitter/random rotation; `None` draws a fresh seed per stroke
    pub jitter_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            smoothing_strength: DEFAULT_SMOOTHING_STRENGTH,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            canvas: CanvasConfig::default(),
            jitter_seed: None,
        }
    }
}

impl EngineConfig {
    /// Return a copy with every field clamped into its documented range
    pub fn normalized(&self) -> Self {
        let strength = if self.smoothing_strength.is_finite() {
            self.smoothing_strength.clamp(0.0, 1.0)
        } else {
            DEFAULT_SMOOTHING_STRENGTH
        };
        let tolerance = if self.simplify_tolerance.is_finite() {
            self.simplify_tolerance.max(0.0)
        } else {
            DEFAULT_SIMPLIFY_TOLERANCE
        };

        Self {
            smoothing_window: self.smoothing_window.max(1),
            smoothing_strength: strength,
            simplify_tolerance: tolerance,
            history_capacity: self.history_capacity.max(1),
            canvas: CanvasConfig {
                width: self.canvas.width.max(1),
                height: self.canvas.height.max(1),
            },
            jitter_seed: self.jitter_seed,
        }
    }

    /// Builder-style helper for a fixed jitter seed
    pub fn with_jitter_seed(mut self, seed: u64) -> Self {
        self.jitter_seed = Some(seed);
        self
    }
}
