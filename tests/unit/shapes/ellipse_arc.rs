use super::*;
use crate::animation::keyframe::Keyframe;
use crate::foundation::error::SceneError;
use crate::shapes::ShapeBuilder;

const EPS: f64 = 1e-9;

fn quarter() -> EllipseArc {
    EllipseArc::new(Vector::xy(0.0, 0.0), Vector::xy(10.0, 10.0), 0.0, 90.0).unwrap()
}

fn assert_close(p: Point, x: f64, y: f64) {
    assert!(
        (p.x - x).abs() < EPS && (p.y - y).abs() < EPS,
        "({}, {}) != ({x}, {y})",
        p.x,
        p.y
    );
}

#[test]
fn quarter_arc_derived_points_and_flags() {
    let arc = quarter();
    assert_close(arc.start_point(), 10.0, 0.0);
    // Angles grow counter-clockwise on screen, where y points down.
    assert_close(arc.end_point(), 0.0, -10.0);
    assert!(!arc.large_arc());
    assert!(!arc.sweep_invert());
}

#[test]
fn flags_are_recomputed_after_each_rotation() {
    let mut arc = quarter();
    arc.apply_rotation(0.0, 100.0).unwrap();
    assert_eq!(arc.angles(), (0.0, 190.0));
    assert!(arc.large_arc());

    arc.apply_rotation(0.0, -20.0).unwrap();
    assert!(!arc.large_arc());

    arc.apply_rotation(200.0, 0.0).unwrap();
    assert_eq!(arc.angles(), (200.0, 170.0));
    assert!(!arc.large_arc());
    assert!(arc.sweep_invert());

    arc.apply_rotation(200.0, 0.0).unwrap();
    assert!(arc.large_arc());
    assert!(arc.sweep_invert());

    arc.apply_rotation(-400.0, 0.0).unwrap();
    assert!(!arc.sweep_invert());
    assert!(!arc.large_arc());
}

#[test]
fn translation_and_inflation_recompute_points() {
    let mut arc = quarter();
    arc.apply_translation(&Vector::xy(5.0, 5.0)).unwrap();
    assert_close(arc.start_point(), 15.0, 5.0);

    arc.apply_inflation(&Vector::xy(10.0, 0.0)).unwrap();
    assert_close(arc.start_point(), 25.0, 5.0);
    assert_close(arc.end_point(), 5.0, -5.0);

    assert!(matches!(
        arc.apply_translation(&Vector::scalar(1.0)),
        Err(SceneError::DimensionMismatch { .. })
    ));
}

#[test]
fn quadrant_spans_derived_endpoints() {
    let q = quarter().bounding_quadrant().unwrap();
    let (min, max) = q.corners().unwrap();
    assert!((min.coords()[0] - 0.0).abs() < EPS);
    assert!((min.coords()[1] + 10.0).abs() < EPS);
    assert_eq!(max.coords(), &[10.0, 0.0]);
}

#[test]
fn svg_uses_absolute_arc_command() {
    let arc = EllipseArc::new(Vector::xy(0.0, 0.0), Vector::xy(4.0, 2.0), 0.0, 180.0).unwrap();
    let svg = arc.to_svg().unwrap();
    assert!(svg.starts_with(r#"<path d="M 4 0 A 4 2, 0, 0, 0, -4 "#));
    assert!(svg.ends_with(r#"" fill="none"></path>"#));
    assert!(!svg.contains("<circle"));
}

#[test]
fn verbose_appends_three_markers() {
    let arc = quarter().verbose(true);
    let svg = arc.to_svg().unwrap();
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(svg.contains(r#"<circle cx="0" cy="0" r="0.5"/>"#));
}

#[test]
fn reset_restores_radius_and_angles_but_not_center() {
    let mut arc = quarter();
    arc.apply_translation(&Vector::xy(3.0, 4.0)).unwrap();
    arc.apply_inflation(&Vector::xy(1.0, 1.0)).unwrap();
    arc.apply_rotation(10.0, 10.0).unwrap();

    arc.reset().unwrap();
    assert_eq!(arc.radius(), Vec2::new(10.0, 10.0));
    assert_eq!(arc.angles(), (0.0, 90.0));
    // Pinned: the center is not part of the reset contract.
    assert_eq!(arc.center(), Point::new(3.0, 4.0));
    assert_eq!(arc.start_center(), Point::new(0.0, 0.0));
    assert_close(arc.start_point(), 13.0, 4.0);
}

#[test]
fn rotation_timeline_matches_one_shot_application() {
    for frames in [7u64, 13] {
        let mut animated = quarter()
            .keyframe(Keyframe::rotate(35.0, 100.0, frames).unwrap())
            .unwrap()
            .keyframe(Keyframe::inflate(Vector::xy(2.5, -1.0), frames).unwrap())
            .unwrap();
        let total = animated.frame_count();
        for _ in 0..total {
            animated.update().unwrap();
        }

        let mut direct = quarter();
        direct.apply_rotation(35.0, 100.0).unwrap();
        direct.apply_inflation(&Vector::xy(2.5, -1.0)).unwrap();

        assert_eq!(animated.angles(), (35.0, 190.0));
        assert_eq!(animated.angles(), direct.angles());
        assert_eq!(animated.large_arc(), direct.large_arc());
        assert_eq!(animated.radius(), direct.radius());
        assert_eq!(animated.start_point(), direct.start_point());
        assert_eq!(animated.end_point(), direct.end_point());
    }
}

#[test]
fn fractional_rotation_lands_bit_exact() {
    for frames in [7u64, 13] {
        let start = EllipseArc::new(Vector::xy(0.0, 0.0), Vector::xy(10.0, 10.0), 0.1, 90.3)
            .unwrap();
        let mut animated = start
            .clone()
            .keyframe(Keyframe::rotate(33.3, 71.7, frames).unwrap())
            .unwrap();
        for _ in 0..frames {
            animated.update().unwrap();
        }

        let mut direct = start;
        direct.apply_rotation(33.3, 71.7).unwrap();
        assert_eq!(animated.angles(), direct.angles());
        assert_eq!(animated.end_point(), direct.end_point());
    }
}

#[test]
fn partial_rotation_is_visible_mid_keyframe() {
    let mut arc = quarter()
        .keyframe(Keyframe::rotate(0.0, 180.0, 4).unwrap())
        .unwrap();
    arc.update().unwrap();
    assert_eq!(arc.angles(), (0.0, 135.0));
    arc.update().unwrap();
    assert_eq!(arc.angles(), (0.0, 180.0));
    assert!(!arc.large_arc());
    arc.update().unwrap();
    assert!(arc.large_arc());
}
