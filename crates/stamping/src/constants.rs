/// Smallest stamp/element spacing in pixels. Substituted for zero or negative spacing.
pub const MIN_SPACING: f64 = 1.0;

/// Smallest pattern scale. Substituted for zero or negative scale.
pub const MIN_SCALE: f64 = 0.01;

/// Element count range produced by the density mapping.
pub const MIN_PATTERN_COUNT: u32 = 2;
pub const MAX_PATTERN_COUNT: u32 = 12;

/// Dot grid half-size range produced by the density mapping.
pub const MIN_DOT_GRID: u32 = 1;
pub const MAX_DOT_GRID: u32 = 4;

/// Hard caps on an explicit `PatternOptions::count`, keeping per-stamp cost bounded.
pub const MAX_EXPLICIT_COUNT: u32 = 64;
pub const MAX_EXPLICIT_DOT_GRID: u32 = 16;

/// Density used when a brush leaves it unset.
pub const DEFAULT_DENSITY: f32 = 0.5;

/// Minimum number of samples per wave polyline.
pub const MIN_WAVE_SAMPLES: usize = 12;
pub const MAX_WAVE_SAMPLES: usize = 512;

/// Mask intensity above which a pixel is drawable (0-255).
pub const MASK_THRESHOLD: u8 = 127;

/// Lengths below this are treated as zero.
pub const LENGTH_EPSILON: f64 = 1e-6;
