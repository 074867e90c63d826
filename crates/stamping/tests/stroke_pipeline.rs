//! End-to-end stroke processing through the pattern pipeline

use glam::DVec2;
use stamping::{
    BrushConfig, CanvasConfig, DrawableMask, EngineConfig, HistoryCommand, LayerId, PatternGeometry,
    PatternPipeline, PatternType, PointSample, PresetLibrary, distance_to_segment, stamp_instances,
};

fn config() -> EngineConfig {
    EngineConfig {
        canvas: CanvasConfig::new(400, 400),
        ..EngineConfig::default().with_jitter_seed(11)
    }
}

fn sample(x: f64, y: f64, t: f64) -> PointSample {
    PointSample::new(DVec2::new(x, y), 0.7, t)
}

/// Draws a horizontal 100 px stroke at y = 50 with 20 input events
fn draw_straight(pipeline: &mut PatternPipeline) -> stamping::CompletedStroke {
    pipeline.begin_stroke(LayerId(0), sample(50.0, 50.0, 0.0));
    for i in 1..=20 {
        pipeline.add_point(sample(50.0 + i as f64 * 5.0, 50.0, i as f64 * 0.008));
    }
    pipeline.end_stroke().expect("stroke was active")
}

#[test]
fn test_straight_stroke_stamp_spacing() {
    let mut pipeline = PatternPipeline::new(config());
    pipeline.set_brush(BrushConfig {
        spacing: 10.0,
        scale: 1.0,
        ..Default::default()
    });

    let completed = draw_straight(&mut pipeline);
    let count = completed.stamps.len();
    assert!((6..=15).contains(&count), "got {count} stamps");

    let a = DVec2::new(50.0, 50.0);
    let b = DVec2::new(150.0, 50.0);
    for stamp in &completed.stamps {
        assert!(distance_to_segment(stamp.position, a, b) < 5.0);
    }
}

#[test]
fn test_degenerate_stroke_single_stamp() {
    let mut pipeline = PatternPipeline::new(config());
    for pattern in PatternType::ALL {
        pipeline.set_brush(BrushConfig::with_pattern(pattern));
        pipeline.begin_stroke(LayerId(0), sample(80.0, 90.0, 0.0));
        let completed = pipeline.end_stroke().unwrap();
        assert_eq!(completed.stroke.len(), 1);
        assert_eq!(completed.stamps.len(), 1, "{pattern:?}");
        assert_eq!(completed.stamps[0].position, DVec2::new(80.0, 90.0));
    }
}

#[test]
fn test_zero_length_stroke_with_repeated_points() {
    let mut pipeline = PatternPipeline::new(config());
    pipeline.begin_stroke(LayerId(0), sample(30.0, 30.0, 0.0));
    pipeline.add_point(sample(30.0, 30.0, 0.01));
    pipeline.add_point(sample(30.0, 30.0, 0.02));
    let completed = pipeline.end_stroke().unwrap();
    assert_eq!(completed.stamps.len(), 1);
}

#[test]
fn test_cancel_produces_nothing() {
    let mut pipeline = PatternPipeline::new(config());
    pipeline.begin_stroke(LayerId(0), sample(10.0, 10.0, 0.0));
    for i in 1..5 {
        pipeline.add_point(sample(10.0 + i as f64 * 8.0, 10.0, i as f64 * 0.01));
    }
    pipeline.cancel_stroke();

    assert!(!pipeline.is_stroking());
    assert!(pipeline.preview_stamps().is_empty());
    assert!(pipeline.end_stroke().is_none());
    assert!(!pipeline.can_undo());
}

#[test]
fn test_black_mask_suppresses_everything() {
    let mut pipeline = PatternPipeline::new(config());
    pipeline
        .mask_mut()
        .set_mask(DrawableMask::filled(100, 100, 0).unwrap());

    let completed = draw_straight(&mut pipeline);
    assert!(completed.stamps.is_empty());
}

#[test]
fn test_white_mask_matches_unmasked() {
    let mut brush = BrushConfig::with_pattern(PatternType::CrossHatch);
    brush.jitter.enabled = true;
    brush.jitter.position = 0.2;
    brush.jitter.size = 0.3;

    let mut unmasked = PatternPipeline::new(config());
    unmasked.set_brush(brush.clone());
    let expected = draw_straight(&mut unmasked);

    let mut masked = PatternPipeline::new(config());
    masked.set_brush(brush);
    masked
        .mask_mut()
        .set_mask(DrawableMask::filled(100, 100, 255).unwrap());
    let actual = draw_straight(&mut masked);

    assert_eq!(expected.stamps.len(), actual.stamps.len());
    assert_eq!(expected.stamps, actual.stamps);
}

#[test]
fn test_partial_mask_drops_only_restricted_stamps() {
    // Left half of the canvas drawable, right half restricted
    let mut mask = DrawableMask::filled(4, 4, 0).unwrap();
    for y in 0..4 {
        mask.set_pixel(0, y, 255);
        mask.set_pixel(1, y, 255);
    }

    let mut pipeline = PatternPipeline::new(config());
    pipeline.mask_mut().set_mask(mask);
    pipeline.begin_stroke(LayerId(0), sample(100.0, 100.0, 0.0));
    pipeline.add_point(sample(300.0, 100.0, 0.2));
    let completed = pipeline.end_stroke().unwrap();

    assert!(!completed.stamps.is_empty());
    assert!(completed.stamps.iter().all(|s| s.position.x < 200.0));

    pipeline.mask_mut().set_enabled(false);
    let unrestricted = pipeline.stamps_for(&completed.stroke);
    assert!(unrestricted.len() > completed.stamps.len());
}

#[test]
fn test_brush_edits_do_not_affect_active_stroke() {
    let mut pipeline = PatternPipeline::new(config());
    pipeline.set_brush(BrushConfig::with_pattern(PatternType::Dots));
    pipeline.begin_stroke(LayerId(0), sample(10.0, 10.0, 0.0));
    pipeline.set_brush(BrushConfig::with_pattern(PatternType::Waves));
    pipeline.add_point(sample(60.0, 10.0, 0.05));
    let completed = pipeline.end_stroke().unwrap();

    assert_eq!(completed.stroke.brush.pattern, PatternType::Dots);
    assert!(
        completed
            .stamps
            .iter()
            .all(|s| matches!(s.geometry, PatternGeometry::Circles(_)))
    );
}

#[test]
fn test_history_receives_completed_strokes() {
    let mut pipeline = PatternPipeline::new(EngineConfig {
        history_capacity: 2,
        ..config()
    });
    for _ in 0..3 {
        draw_straight(&mut pipeline);
    }
    assert_eq!(pipeline.history().undo_count(), 2);
    assert!(matches!(pipeline.undo(), Some(HistoryCommand::Stroke(_))));
}

#[test]
fn test_presets_drive_pipeline() {
    let library = PresetLibrary::builtin();
    let mut pipeline = PatternPipeline::new(config());
    for preset in library.iter() {
        pipeline.set_brush(preset.brush.clone());
        let completed = draw_straight(&mut pipeline);
        assert!(!completed.stamps.is_empty(), "{}", preset.name);
        assert!(completed.stamps.iter().all(|s| !s.geometry.is_empty()));

        let instances = stamp_instances(&completed.stamps);
        assert_eq!(instances.len(), completed.stamps.len());
    }
}
