//! Input normalization helpers
//!
//! Nothing on the stroke path rejects input. Out-of-range values are clamped
//! and degenerate values are replaced with the smallest usable default.

use tracing::warn;

use crate::constants::{MIN_SCALE, MIN_SPACING};

/// Clamp to [0, 1], mapping NaN to 0
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Clamp to [0, 1], mapping NaN to 0
#[inline]
pub fn clamp_unit_f64(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Spacing guarded against zero, negative and non-finite values
pub fn guard_spacing(spacing: f64) -> f64 {
    if spacing.is_finite() && spacing > 0.0 {
        spacing
    } else {
        warn!("degenerate spacing {spacing}, using {MIN_SPACING}");
        MIN_SPACING
    }
}

/// Scale guarded against zero, negative and non-finite values
#[inline]
pub fn guard_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale.max(MIN_SCALE)
    } else {
        MIN_SCALE
    }
}

/// Non-negative finite value or the fallback
#[inline]
pub fn non_negative_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
        assert_eq!(clamp_unit_f64(f64::NAN), 0.0);
    }

    #[test]
    fn test_guard_spacing() {
        assert_eq!(guard_spacing(0.0), MIN_SPACING);
        assert_eq!(guard_spacing(-4.0), MIN_SPACING);
        assert_eq!(guard_spacing(f64::NAN), MIN_SPACING);
        assert_eq!(guard_spacing(12.0), 12.0);
    }

    #[test]
    fn test_guard_scale() {
        assert_eq!(guard_scale(0.0), MIN_SCALE);
        assert_eq!(guard_scale(f64::INFINITY), MIN_SCALE);
        assert_eq!(guard_scale(0.001), MIN_SCALE);
        assert_eq!(guard_scale(2.0), 2.0);
    }
}
