//! Complete stroke-to-stamp pipeline
//!
//! This module provides the pipeline that connects:
//! - Input handling (begin / add / end / cancel events from the UI thread)
//! - Stroke smoothing and simplification
//! - The brush engine (stamp generation)
//! - Drawable-area masking
//! - Undo/redo command history
//!
//! All calls are synchronous and expected on a single interaction thread.

mod history;
mod stroke;

use patternist_config::EngineConfig;

use crate::brush::BrushConfig;
use crate::engine::BrushEngine;
use crate::mask::RegionMask;
use crate::smoothing::StrokeSmoother;

pub use history::{CommandHistory, HistoryCommand};
pub use stroke::CompletedStroke;

/// Stroke pipeline for one canvas
///
/// This struct manages the full stroke workflow:
/// 1. Input comes in via `begin_stroke`, `add_point`, `end_stroke`
/// 2. The smoother filters and finally simplifies the stroke
/// 3. The brush engine expands it into pattern stamps
/// 4. Stamps outside the drawable area are dropped
/// 5. Finished strokes are pushed to the command history
pub struct PatternPipeline {
    pub(crate) config: EngineConfig,
    /// Brush used for the next stroke
    pub(crate) brush: BrushConfig,
    pub(crate) smoother: StrokeSmoother,
    pub(crate) engine: BrushEngine,
    pub(crate) mask: RegionMask,
    pub(crate) history: CommandHistory<HistoryCommand>,
}

impl Default for PatternPipeline {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PatternPipeline {
    /// Create a pipeline from the engine configuration
    pub fn new(config: EngineConfig) -> Self {
        let config = config.normalized();
        Self {
            brush: BrushConfig::default(),
            smoother: StrokeSmoother::new(&config),
            engine: BrushEngine::new(),
            mask: RegionMask::new(config.canvas),
            history: CommandHistory::new(config.history_capacity),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set the brush for subsequent strokes
    ///
    /// A stroke already in progress keeps the brush it started with.
    pub fn set_brush(&mut self, brush: BrushConfig) {
        self.brush = brush.normalized();
    }

    /// Get the current brush
    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    /// Set the brush color
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.brush.color = color;
        self.brush = self.brush.normalized();
    }

    pub fn mask(&self) -> &RegionMask {
        &self.mask
    }

    /// Mask state, for swapping the bitmap or toggling masking between strokes
    pub fn mask_mut(&mut self) -> &mut RegionMask {
        &mut self.mask
    }

    pub fn engine(&self) -> &BrushEngine {
        &self.engine
    }
}
