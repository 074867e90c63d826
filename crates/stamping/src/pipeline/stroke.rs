//! Stroke handling for the pattern pipeline

use tracing::debug;

use crate::mask::MaskProvider;
use crate::types::{LayerId, PatternStamp, PointSample, Stroke, StrokeId};

use super::{HistoryCommand, PatternPipeline};

/// A finished stroke and the stamps to render for it
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedStroke {
    pub stroke: Stroke,
    pub stamps: Vec<PatternStamp>,
}

impl PatternPipeline {
    /// Begin a stroke on a layer
    ///
    /// The caller checks that the layer exists and is unlocked. The current
    /// brush is snapshotted into the stroke.
    pub fn begin_stroke(&mut self, layer_id: LayerId, sample: PointSample) -> StrokeId {
        self.smoother
            .begin_stroke(sample, layer_id, &self.brush)
            .id
    }

    /// Continue the stroke with new input
    ///
    /// Returns false when no stroke is in progress.
    pub fn add_point(&mut self, sample: PointSample) -> bool {
        self.smoother.add_point(sample)
    }

    /// Stamps for the in-progress stroke (unsimplified), for live preview
    pub fn preview_stamps(&self) -> Vec<PatternStamp> {
        match self.smoother.active_stroke() {
            Some(stroke) => self.stamps_for(stroke),
            None => Vec::new(),
        }
    }

    /// End the current stroke
    ///
    /// Simplifies the stroke, generates its stamps and records it in the
    /// history. Returns `None` when no stroke is in progress.
    pub fn end_stroke(&mut self) -> Option<CompletedStroke> {
        let stroke = self.smoother.end_stroke()?;
        let stamps = self.stamps_for(&stroke);

        debug!(
            "end_stroke: {:?} on {:?}, {} points, {} stamps",
            stroke.id,
            stroke.layer_id,
            stroke.len(),
            stamps.len()
        );

        self.history.push(HistoryCommand::Stroke(stroke.clone()));
        Some(CompletedStroke { stroke, stamps })
    }

    /// Cancel the current stroke
    ///
    /// Nothing is emitted or recorded for a cancelled stroke.
    pub fn cancel_stroke(&mut self) -> bool {
        self.smoother.cancel_stroke()
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.smoother.is_active()
    }

    /// Generate stamps for any stroke against the current mask
    pub fn stamps_for(&self, stroke: &Stroke) -> Vec<PatternStamp> {
        let mask: &dyn MaskProvider = &self.mask;
        self.engine.generate_pattern_stamps(stroke, Some(mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn sample(x: f64, y: f64, t: f64) -> PointSample {
        PointSample::new(DVec2::new(x, y), 1.0, t)
    }

    #[test]
    fn test_pipeline_stroke() {
        let mut pipeline = PatternPipeline::default();

        pipeline.begin_stroke(LayerId(1), sample(100.0, 100.0, 0.0));
        assert!(pipeline.is_stroking());

        pipeline.add_point(sample(150.0, 100.0, 0.05));
        pipeline.add_point(sample(200.0, 100.0, 0.1));
        let completed = pipeline.end_stroke().unwrap();

        assert!(!pipeline.is_stroking());
        assert!(!completed.stamps.is_empty());
        assert_eq!(completed.stroke.layer_id, LayerId(1));
        assert!(pipeline.can_undo());
    }

    #[test]
    fn test_pipeline_cancel_stroke() {
        let mut pipeline = PatternPipeline::default();

        pipeline.begin_stroke(LayerId(0), sample(100.0, 100.0, 0.0));
        pipeline.add_point(sample(120.0, 100.0, 0.01));
        assert!(pipeline.cancel_stroke());

        assert!(!pipeline.is_stroking());
        assert!(pipeline.end_stroke().is_none());
        assert!(pipeline.preview_stamps().is_empty());
        // History should be empty (stroke was cancelled)
        assert!(!pipeline.can_undo());
    }

    #[test]
    fn test_preview_during_stroke() {
        let mut pipeline = PatternPipeline::default();
        assert!(pipeline.preview_stamps().is_empty());

        pipeline.begin_stroke(LayerId(0), sample(10.0, 10.0, 0.0));
        assert_eq!(pipeline.preview_stamps().len(), 1);
        for i in 1..=10 {
            pipeline.add_point(sample(10.0 + i as f64 * 10.0, 10.0, i as f64 * 0.01));
        }
        assert!(pipeline.preview_stamps().len() > 1);
    }

    #[test]
    fn test_undo_returns_stroke() {
        let mut pipeline = PatternPipeline::default();
        pipeline.begin_stroke(LayerId(3), sample(0.0, 0.0, 0.0));
        let id = pipeline.end_stroke().unwrap().stroke.id;
        pipeline.clear_layer(LayerId(3));

        assert_eq!(pipeline.undo(), Some(&HistoryCommand::ClearLayer(LayerId(3))));
        match pipeline.undo() {
            Some(HistoryCommand::Stroke(stroke)) => assert_eq!(stroke.id, id),
            other => panic!("expected stroke, got {other:?}"),
        }
        assert!(pipeline.undo().is_none());
        assert!(pipeline.redo().is_some());
    }
}
