//! Concentric contour generator

use super::{PatternGeometry, PatternOptions, PatternParams, resolve_count};
use crate::geometry::{Arc, Circle};

/// `count` concentric rings around `params.center` with radius `i * step`, `i >= 1`
///
/// A full sweep yields circles. A partial sweep yields arcs centered on the
/// rotation direction.
pub fn contour_lines(params: &PatternParams, options: &PatternOptions) -> PatternGeometry {
    let options = options.normalized();
    let count = resolve_count(params, &options);
    let step = params.step();
    let radii = (1..=count).map(move |i| i as f64 * step);

    if options.contour_sweep_degrees >= 360.0 {
        return PatternGeometry::Circles(
            radii
                .map(|radius| Circle {
                    center: params.center,
                    radius,
                })
                .collect(),
        );
    }

    let half_sweep = options.contour_sweep_degrees.to_radians() * 0.5;
    let mid = params.radians();
    PatternGeometry::Arcs(
        radii
            .map(|radius| Arc {
                center: params.center,
                radius,
                start_angle: mid - half_sweep,
                end_angle: mid + half_sweep,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;

    fn radii(geometry: &PatternGeometry) -> Vec<f64> {
        match geometry {
            PatternGeometry::Circles(circles) => circles.iter().map(|c| c.radius).collect(),
            PatternGeometry::Arcs(arcs) => arcs.iter().map(|a| a.radius).collect(),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn test_full_sweep_circles() {
        let params = PatternParams::new(DVec2::new(10.0, 10.0), 0.0, 4.0, 1.0, 0.5);
        let geometry = contour_lines(&params, &PatternOptions::with_count(5));
        let PatternGeometry::Circles(circles) = &geometry else {
            panic!("expected circles");
        };
        assert_eq!(circles.len(), 5);
        assert!(circles.iter().all(|c| c.center.distance(params.center) < 0.1));
        assert_eq!(radii(&geometry), vec![4.0, 8.0, 12.0, 16.0, 20.0]);
    }

    #[test]
    fn test_partial_sweep_arcs_follow_rotation() {
        let options = PatternOptions {
            contour_sweep_degrees: 120.0,
            ..PatternOptions::with_count(3)
        };
        let a = contour_lines(&PatternParams::new(DVec2::ZERO, 0.0, 4.0, 1.0, 0.5), &options);
        let b = contour_lines(&PatternParams::new(DVec2::ZERO, 90.0, 4.0, 1.0, 0.5), &options);
        let (PatternGeometry::Arcs(a), PatternGeometry::Arcs(b)) = (a, b) else {
            panic!("expected arcs");
        };
        for (arc_a, arc_b) in a.iter().zip(&b) {
            let delta = arc_b.mid_angle() - arc_a.mid_angle();
            assert!((delta - std::f64::consts::FRAC_PI_2).abs() < 0.1);
            assert!((arc_a.end_angle - arc_a.start_angle - 120f64.to_radians()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scale_grows_radius_not_count() {
        let options = PatternOptions::default();
        let small = contour_lines(&PatternParams::new(DVec2::ZERO, 0.0, 4.0, 1.0, 0.5), &options);
        let large = contour_lines(&PatternParams::new(DVec2::ZERO, 0.0, 4.0, 2.0, 0.5), &options);
        let (small, large) = (radii(&small), radii(&large));
        assert_eq!(small.len(), large.len());
        for (s, l) in small.iter().zip(&large) {
            assert!((l - 2.0 * s).abs() < 1e-9);
        }
    }

    proptest! {
        #[test]
        fn prop_radii_strictly_increase(
            spacing in 0.1f64..50.0,
            scale in 0.05f64..5.0,
            density in 0.0f32..=1.0,
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
        ) {
            let params = PatternParams::new(DVec2::new(x, y), 0.0, spacing, scale, density);
            let geometry = contour_lines(&params, &PatternOptions::default());
            let radii = radii(&geometry);
            prop_assert!(radii[0] > 0.0);
            for pair in radii.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}
