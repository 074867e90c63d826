//! Named brush presets
//!
//! The library is a plain value the caller owns and passes around; there is
//! no process-wide preset registry.

use serde::{Deserialize, Serialize};

use crate::brush::{BrushConfig, CurveShape, Jitter, PatternType, RotationMode};
use crate::pattern::PatternOptions;

/// Brush preset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushPreset {
    /// Unique preset ID
    pub id: u32,
    /// Human-readable name
    pub name: String,
    pub brush: BrushConfig,
}

impl BrushPreset {
    pub fn new(id: u32, name: impl Into<String>, brush: BrushConfig) -> Self {
        Self {
            id,
            name: name.into(),
            brush: brush.normalized(),
        }
    }
}

/// Ordered collection of presets keyed by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetLibrary {
    presets: Vec<BrushPreset>,
}

impl PresetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// One preset per pattern type
    pub fn builtin() -> Self {
        let mut library = Self::new();

        library.insert(BrushPreset::new(
            1,
            "Fine Lines",
            BrushConfig {
                spacing: 6.0,
                density: 0.4,
                ..BrushConfig::with_pattern(PatternType::ParallelLines)
            },
        ));

        let mut hatch = BrushConfig {
            rotation: 45.0,
            spacing: 8.0,
            ..BrushConfig::with_pattern(PatternType::CrossHatch)
        };
        hatch.pressure.shape = CurveShape::EaseIn;
        library.insert(BrushPreset::new(2, "Cross Hatch", hatch));

        library.insert(BrushPreset::new(
            3,
            "Stipple",
            BrushConfig {
                spacing: 12.0,
                density: 0.3,
                jitter: Jitter {
                    enabled: true,
                    position: 0.25,
                    size: 0.15,
                    ..Default::default()
                },
                options: PatternOptions {
                    dot_radius: 0.15,
                    ..Default::default()
                },
                ..BrushConfig::with_pattern(PatternType::Dots)
            },
        ));

        library.insert(BrushPreset::new(
            4,
            "Contours",
            BrushConfig {
                spacing: 5.0,
                density: 0.5,
                ..BrushConfig::with_pattern(PatternType::ContourLines)
            },
        ));

        let mut waves = BrushConfig {
            spacing: 8.0,
            density: 0.3,
            ..BrushConfig::with_pattern(PatternType::Waves)
        };
        waves.rotation_dynamics.mode = RotationMode::FollowStroke;
        waves.rotation_dynamics.smoothing = 0.6;
        library.insert(BrushPreset::new(5, "Flowing Waves", waves));

        library
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&BrushPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Case-insensitive name lookup
    pub fn find_by_name(&self, name: &str) -> Option<&BrushPreset> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Add a preset, replacing any preset with the same id in place
    pub fn insert(&mut self, preset: BrushPreset) {
        match self.presets.iter_mut().find(|p| p.id == preset.id) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
    }

    pub fn remove(&mut self, id: u32) -> Option<BrushPreset> {
        let index = self.presets.iter().position(|p| p.id == id)?;
        Some(self.presets.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrushPreset> {
        self.presets.iter()
    }
}
