//! Geometry primitives emitted by the pattern generator
//!
//! All coordinates are canvas-space pixels stored as [`DVec2`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::LENGTH_EPSILON;

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: DVec2,
    pub end: DVec2,
}

impl LineSegment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Direction of travel from start to end, in radians
    pub fn angle(&self) -> f64 {
        direction_angle(self.end - self.start)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> DVec2 {
        self.start.lerp(self.end, 0.5)
    }
}

/// A full circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

/// A circular arc swept counter-clockwise from `start_angle` to `end_angle` (radians)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    /// Angle halfway through the sweep
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) * 0.5
    }

    pub fn point_at(&self, angle: f64) -> DVec2 {
        self.center + DVec2::from_angle(angle) * self.radius
    }
}

/// An open polyline (used for sampled wave curves)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<DVec2>,
}

impl Polyline {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Angle of the chord from first to last point
    pub fn chord_angle(&self) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some(direction_angle(*last - *first))
    }

    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

/// Angle of a direction vector in radians, `0.0` for the zero vector
#[inline]
pub fn direction_angle(v: DVec2) -> f64 {
    if v.length_squared() < LENGTH_EPSILON * LENGTH_EPSILON {
        return 0.0;
    }
    v.y.atan2(v.x)
}

/// Distance from `p` to the segment `a`-`b`
///
/// Degenerates to point distance when `a` and `b` coincide, so closed or
/// back-tracking chords never divide by zero.
pub fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < LENGTH_EPSILON * LENGTH_EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`
pub fn perpendicular_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len = ab.length();
    if len < LENGTH_EPSILON {
        return p.distance(a);
    }
    (ab.perp_dot(p - a)).abs() / len
}

/// Signed smallest difference `to - from` wrapped into (-PI, PI]
pub fn angle_delta(from: f64, to: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let mut delta = (to - from) % TAU;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_segment_angle_and_length() {
        let seg = LineSegment::new(DVec2::ZERO, DVec2::new(0.0, 10.0));
        assert!((seg.angle() - FRAC_PI_2).abs() < 1e-9);
        assert!((seg.length() - 10.0).abs() < 1e-9);
        assert_eq!(seg.midpoint(), DVec2::new(0.0, 5.0));
    }

    #[test]
    fn test_distance_to_segment_clamps_to_endpoints() {
        let a = DVec2::ZERO;
        let b = DVec2::new(10.0, 0.0);
        assert!((distance_to_segment(DVec2::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-9);
        assert!((distance_to_segment(DVec2::new(14.0, 3.0), a, b) - 5.0).abs() < 1e-9);
        // Line distance ignores the endpoints
        assert!((perpendicular_distance(DVec2::new(14.0, 3.0), a, b) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_chord() {
        let a = DVec2::new(2.0, 2.0);
        assert!((distance_to_segment(DVec2::new(5.0, 6.0), a, a) - 5.0).abs() < 1e-9);
        assert!((perpendicular_distance(DVec2::new(5.0, 6.0), a, a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_delta_wraps() {
        assert!((angle_delta(PI - 0.1, -PI + 0.1) - 0.2).abs() < 1e-9);
        assert!((angle_delta(0.0, FRAC_PI_2) - FRAC_PI_2).abs() < 1e-9);
        assert!((angle_delta(0.1, -0.1) + 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_polyline_chord() {
        let line = Polyline::new(vec![DVec2::ZERO, DVec2::new(1.0, 1.0), DVec2::new(2.0, 0.0)]);
        assert!((line.chord_angle().unwrap()).abs() < 1e-9);
        assert!(Polyline::default().chord_angle().is_none());
    }
}
