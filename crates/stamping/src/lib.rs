//! Patternist stamping - stroke processing and procedural pattern stamping
//!
//! This crate turns pointer/pencil input into positioned pattern stamps:
//! - [`smoothing`] - Incremental input smoothing and Douglas-Peucker simplification
//! - [`pattern`] - Parallel lines, cross-hatch, dots, contours and waves
//! - [`dynamics`] - Pressure curves, velocity/tilt modulation, rotation and jitter
//! - [`engine`] - Arc-length resampling and stamp sequencing
//! - [`mask`] - Drawable-area mask sampling
//! - [`pipeline`] - Stroke lifecycle wiring plus undo/redo history
//! - [`presets`] - Named brush presets
//! - [`render`] - GPU instance records for the renderer

pub mod brush;
pub mod constants;
pub mod dynamics;
pub mod engine;
pub mod geometry;
pub mod mask;
pub mod pattern;
pub mod pipeline;
pub mod presets;
pub mod render;
pub mod smoothing;
pub mod types;
pub mod validation;

pub use brush::*;
pub use constants::*;
pub use dynamics::{DynamicsEvaluator, Modulation, StampInput};
pub use engine::{BrushEngine, StrokeSample, resample_stroke};
pub use geometry::*;
pub use mask::*;
pub use pattern::{PatternGeometry, PatternOptions, PatternParams};
pub use pipeline::*;
pub use presets::*;
pub use render::*;
pub use smoothing::{StrokeSmoother, simplify, simplify_indices};
pub use types::*;

pub use patternist_config::{CanvasConfig, EngineConfig};
