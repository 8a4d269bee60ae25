//! Pairwise collision behaviour across all shape kinds
//!
//! Covers symmetry of every kind pair, strict boundaries and the capsule and
//! line tests that have no per-module coverage.

use crate::foundation::math::Vec2;
use crate::physics::{Collider, ShapeKind};

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn square(half: f32) -> Vec<Vec2> {
    vec![v(-half, -half), v(half, -half), v(half, half), v(-half, half)]
}

fn small_triangle() -> Vec<Vec2> {
    vec![v(0.0, -2.0), v(-2.0, 2.0), v(2.0, 2.0)]
}

/// One collider of every kind, clustered so that some pairs overlap
fn one_of_each() -> Vec<Collider> {
    vec![
        Collider::circle(v(0.0, 0.0), 10.0).unwrap(),
        Collider::rectangle(v(15.0, 0.0), v(10.0, 10.0)).unwrap(),
        Collider::polygon(v(5.0, 5.0), vec![v(0.0, -10.0), v(-10.0, 10.0), v(10.0, 10.0)]).unwrap(),
        Collider::capsule(v(-20.0, 5.0), 30.0, 8.0).unwrap(),
        Collider::line(v(-5.0, -20.0), v(5.0, 20.0)).unwrap(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_pair_is_symmetric() {
        let fixed = one_of_each();
        let offsets = [v(0.0, 0.0), v(7.5, -3.0), v(-12.0, 9.0), v(25.0, 25.0), v(3.0, 14.0)];

        let mut kinds_seen = Vec::new();
        for offset in offsets {
            for mut moving in one_of_each() {
                moving.translate(offset);
                for other in &fixed {
                    assert_eq!(
                        moving.collides_with(other),
                        other.collides_with(&moving),
                        "{:?} vs {:?} at offset ({}, {})",
                        moving.kind(),
                        other.kind(),
                        offset.x,
                        offset.y
                    );
                    kinds_seen.push((moving.kind(), other.kind()));
                }
            }
        }

        kinds_seen.sort_by_key(|&(a, b)| (a as u8, b as u8));
        kinds_seen.dedup();
        assert_eq!(kinds_seen.len(), 25);
    }

    #[test]
    fn test_every_area_kind_collides_with_itself() {
        for collider in one_of_each() {
            // A line is collinear with itself, and collinear lines never intersect
            let expected = collider.kind() != ShapeKind::Line;
            assert_eq!(collider.collides_with(&collider), expected, "{:?}", collider.kind());
        }
    }

    #[test]
    fn test_circles_touching_exactly_do_not_collide() {
        let a = Collider::circle(v(0.0, 0.0), 2.5).unwrap();
        let touching = Collider::circle(v(5.0, 0.0), 2.5).unwrap();
        let overlapping = Collider::circle(v(4.999, 0.0), 2.5).unwrap();

        assert!(!a.collides_with(&touching));
        assert!(a.collides_with(&overlapping));
    }

    #[test]
    fn test_rectangles_separate_then_overlap_after_move() {
        let a = Collider::rectangle(v(0.0, 0.0), v(10.0, 10.0)).unwrap();
        let mut b = Collider::rectangle(v(20.0, 0.0), v(10.0, 10.0)).unwrap();
        assert!(!a.collides_with(&b));

        b.set_position(v(9.0, 0.0));
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn test_circle_against_rectangle_scenario() {
        let rect = Collider::rectangle(v(100.0, 100.0), v(10.0, 10.0)).unwrap();
        let enclosing = Collider::circle(v(100.0, 100.0), 20.0).unwrap();
        let distant = Collider::circle(v(200.0, 100.0), 20.0).unwrap();

        assert!(enclosing.collides_with(&rect));
        assert!(!distant.collides_with(&rect));
    }

    #[test]
    fn test_circle_beside_capsule_scenario() {
        // Closest segment point is (50, 0): distance 30 against radii 20 + 5
        let capsule = Collider::capsule(v(0.0, 0.0), 100.0, 40.0).unwrap();
        let circle = Collider::circle(v(50.0, 30.0), 5.0).unwrap();
        assert!(!capsule.collides_with(&circle));
        assert!(!circle.collides_with(&capsule));

        let closer = Collider::circle(v(50.0, 24.0), 5.0).unwrap();
        assert!(capsule.collides_with(&closer));
    }

    #[test]
    fn test_circle_reaches_capsule_cap() {
        let capsule = Collider::capsule(v(0.0, 0.0), 100.0, 40.0).unwrap();
        assert!(capsule.collides_with(&Collider::circle(v(124.0, 0.0), 5.0).unwrap()));
        assert!(!capsule.collides_with(&Collider::circle(v(126.0, 0.0), 5.0).unwrap()));
    }

    #[test]
    fn test_circle_inside_polygon_only_hits_near_boundary() {
        let polygon = Collider::polygon(v(0.0, 0.0), square(10.0)).unwrap();

        assert!(!Collider::circle(v(0.0, 0.0), 1.0).unwrap().collides_with(&polygon));
        assert!(Collider::circle(v(8.0, 0.0), 3.0).unwrap().collides_with(&polygon));
    }

    #[test]
    fn test_polygon_cache_follows_consecutive_moves() {
        let mut polygon = Collider::polygon(v(0.0, 0.0), square(5.0)).unwrap();
        let circle = Collider::circle(v(100.0, 0.0), 5.0).unwrap();
        let rect = Collider::rectangle(v(100.0, 0.0), v(4.0, 4.0)).unwrap();

        assert!(!polygon.collides_with(&circle));
        assert!(!polygon.collides_with(&rect));

        polygon.set_position(v(98.0, 0.0));
        assert!(polygon.collides_with(&circle));
        assert!(rect.collides_with(&polygon));

        polygon.set_position(v(-50.0, 0.0));
        assert!(!circle.collides_with(&polygon));
        assert!(!polygon.collides_with(&rect));

        polygon.set_position(v(104.0, 0.0));
        assert!(polygon.collides_with(&circle));
    }

    #[test]
    fn test_polygons_overlap_by_separating_axes() {
        let a = Collider::polygon(v(0.0, 0.0), square(5.0)).unwrap();
        let mut b = Collider::polygon(v(9.0, 0.0), square(5.0)).unwrap();
        assert!(a.collides_with(&b));

        // Touching projections still count as overlap
        b.set_position(v(10.0, 0.0));
        assert!(a.collides_with(&b));

        b.set_position(v(10.5, 0.0));
        assert!(!a.collides_with(&b));
    }

    #[test]
    fn test_rectangle_against_capsule() {
        let capsule = Collider::capsule(v(0.0, 0.0), 100.0, 40.0).unwrap();
        let clear = Collider::rectangle(v(50.0, 30.0), v(10.0, 10.0)).unwrap();
        let grazing = Collider::rectangle(v(50.0, 24.0), v(10.0, 10.0)).unwrap();
        assert!(!capsule.collides_with(&clear));
        assert!(capsule.collides_with(&grazing));
    }

    #[test]
    fn test_capsule_inside_polygon_collides() {
        let polygon = Collider::polygon(v(0.0, 0.0), square(10.0)).unwrap();
        let capsule = Collider::capsule(v(-1.0, 0.0), 2.0, 1.0).unwrap();
        assert!(capsule.collides_with(&polygon));
        assert!(polygon.collides_with(&capsule));
    }

    #[test]
    fn test_polygon_inside_capsule_collides() {
        let capsule = Collider::capsule(v(0.0, 0.0), 100.0, 40.0).unwrap();
        let mut triangle = Collider::polygon(v(50.0, 0.0), small_triangle()).unwrap();
        assert!(capsule.collides_with(&triangle));

        // Clear of the core segment but within the radius
        triangle.set_position(v(50.0, 15.0));
        assert!(capsule.collides_with(&triangle));

        triangle.set_position(v(50.0, 25.0));
        assert!(!capsule.collides_with(&triangle));
    }

    #[test]
    fn test_capsules_use_segment_distance() {
        let long = Collider::capsule(v(0.0, 0.0), 100.0, 40.0).unwrap();

        assert!(!long.collides_with(&Collider::capsule(v(50.0, 39.0), 10.0, 20.0).unwrap()));
        assert!(long.collides_with(&Collider::capsule(v(50.0, 29.0), 10.0, 20.0).unwrap()));

        // End to end: gap between segments is exactly the radii sum
        assert!(!long.collides_with(&Collider::capsule(v(130.0, 0.0), 10.0, 20.0).unwrap()));
        assert!(long.collides_with(&Collider::capsule(v(129.0, 0.0), 10.0, 20.0).unwrap()));
    }

    #[test]
    fn test_capsule_against_line() {
        let capsule = Collider::capsule(v(0.0, 0.0), 100.0, 40.0).unwrap();

        assert!(capsule.collides_with(&Collider::line(v(50.0, 19.0), v(60.0, 19.0)).unwrap()));
        assert!(!capsule.collides_with(&Collider::line(v(50.0, 20.0), v(60.0, 20.0)).unwrap()));
        assert!(capsule.collides_with(&Collider::line(v(50.0, -100.0), v(50.0, 100.0)).unwrap()));
    }

    #[test]
    fn test_circle_against_line_is_strict() {
        let circle = Collider::circle(v(0.0, 0.0), 5.0).unwrap();
        assert!(!circle.collides_with(&Collider::line(v(5.0, -10.0), v(5.0, 10.0)).unwrap()));
        assert!(circle.collides_with(&Collider::line(v(4.9, -10.0), v(4.9, 10.0)).unwrap()));
    }

    #[test]
    fn test_line_inside_polygon_collides() {
        let polygon = Collider::polygon(v(0.0, 0.0), square(10.0)).unwrap();
        let inside = Collider::line(v(-2.0, -2.0), v(3.0, 1.0)).unwrap();
        let crossing = Collider::line(v(-20.0, 0.0), v(20.0, 0.0)).unwrap();
        let outside = Collider::line(v(11.0, -20.0), v(11.0, 20.0)).unwrap();

        assert!(polygon.collides_with(&inside));
        assert!(crossing.collides_with(&polygon));
        assert!(!polygon.collides_with(&outside));
    }

    #[test]
    fn test_lines_sharing_an_endpoint_intersect() {
        let a = Collider::line(v(0.0, 0.0), v(10.0, 0.0)).unwrap();
        let b = Collider::line(v(10.0, 0.0), v(10.0, 10.0)).unwrap();
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn test_tiny_crossing_lines_collide() {
        let a = Collider::line(v(0.0, 0.0), v(3e-4, 0.0)).unwrap();
        let b = Collider::line(v(1.5e-4, -1.5e-4), v(1.5e-4, 1.5e-4)).unwrap();
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));

        let tiny_square = Collider::polygon(v(1.5e-4, 0.0), square(5e-5)).unwrap();
        assert!(b.collides_with(&tiny_square));
    }

    #[test]
    fn test_collinear_polygon_separates_only_across_its_line() {
        let flat = vec![v(0.0, 0.0), v(5.0, 0.0), v(10.0, 0.0)];
        let polygon = Collider::polygon(v(0.0, 0.0), flat.clone()).unwrap();

        let above = Collider::polygon(v(0.0, 50.0), flat.clone()).unwrap();
        assert!(!polygon.collides_with(&above));

        // Degenerate: only one axis exists, so distance along the line is never checked
        let far_along = Collider::polygon(v(1000.0, 0.0), flat).unwrap();
        assert!(polygon.collides_with(&far_along));
    }

    #[test]
    fn test_parallel_lines_never_intersect() {
        let a = Collider::line(v(0.0, 0.0), v(10.0, 0.0)).unwrap();
        for offset in [0.001, 1.0, 1000.0] {
            let b = Collider::line(v(0.0, offset), v(10.0, offset)).unwrap();
            assert!(!a.collides_with(&b));
        }
    }

    #[test]
    fn test_missing_other_is_false_for_every_kind() {
        for collider in one_of_each() {
            assert!(!collider.collides_with(None::<&Collider>));
        }
    }
}
