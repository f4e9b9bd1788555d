use super::*;
use crate::animation::keyframe::Keyframe;
use crate::foundation::core::Fps;
use crate::shapes::ShapeBuilder;

#[test]
fn distance_between_centers() {
    let a = Circle::new(Vector::xy(0.0, 0.0), 10.0);
    let b = Circle::new(Vector::xy(3.0, 4.0), 5.0);
    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.distance_to(&a), 5.0);
}

#[test]
fn distance_is_bitwise_symmetric() {
    let a = Circle::new(Vector::xy(0.1, -7.3), 1.0);
    let b = Circle::new(Vector::xy(-2.9, 0.7), 1.0);
    assert_eq!(a.distance_to(&b).to_bits(), b.distance_to(&a).to_bits());
}

#[test]
fn arithmetic_keeps_radius() {
    let a = Circle::new(Vector::xy(1.0, -2.0), 4.0);
    let b = Circle::new(Vector::xy(3.0, 3.0), 9.0);
    assert_eq!(
        a.try_add(&b).unwrap(),
        Circle::new(Vector::xy(4.0, 1.0), 4.0)
    );
    assert_eq!(
        a.try_sub(&b).unwrap(),
        Circle::new(Vector::xy(-2.0, -5.0), 4.0)
    );
    assert_eq!(&a * 2.0, Circle::new(Vector::xy(2.0, -4.0), 4.0));
    assert_eq!(&a / 2.0, Circle::new(Vector::xy(0.5, -1.0), 4.0));
    assert_eq!(a.abs(), Circle::new(Vector::xy(1.0, 2.0), 4.0));
    assert!(
        a.try_add(&Circle::new(Vector::new([1.0, 1.0, 1.0]), 1.0))
            .is_err()
    );
}

#[test]
fn equality_needs_center_and_radius() {
    let a = Circle::new(Vector::xy(1.0, 1.0), 2.0);
    assert_eq!(a, Circle::new(Vector::xy(1.0, 1.0), 2.0));
    assert_ne!(a, Circle::new(Vector::xy(1.0, 1.0), 3.0));
    assert_ne!(a, Circle::new(Vector::xy(1.0, 0.0), 2.0));
}

#[test]
fn quadrant_ignores_radius() {
    let c = Circle::new(Vector::xy(2.0, 3.0), 10.0);
    let q = c.bounding_quadrant().unwrap();
    assert_eq!(q, Quadrant::from_point(Vector::xy(2.0, 3.0)));
    assert_eq!(
        c.padded_quadrant().unwrap(),
        Quadrant::new(Vector::xy(-8.0, -7.0), Vector::xy(12.0, 13.0)).unwrap()
    );
}

#[test]
fn translation_requires_matching_dimension() {
    let mut c = Circle::new(Vector::new([0.0, 0.0, 0.0]), 1.0);
    c.apply_translation(&Vector::new([1.0, 2.0, 3.0])).unwrap();
    assert_eq!(c.center(), &Vector::new([1.0, 2.0, 3.0]));
    assert!(matches!(
        c.apply_translation(&Vector::xy(1.0, 1.0)),
        Err(SceneError::DimensionMismatch { .. })
    ));
}

#[test]
fn inflation_takes_a_scalar_vector() {
    let mut c = Circle::new(Vector::xy(0.0, 0.0), 1.0);
    c.apply_inflation(&Vector::scalar(2.5)).unwrap();
    assert_eq!(c.radius(), 3.5);
    assert!(c.apply_inflation(&Vector::xy(1.0, 1.0)).is_err());
}

#[test]
fn reset_restores_center_but_not_radius() {
    let mut c = Circle::new(Vector::xy(0.0, 0.0), 10.0);
    c.apply_translation(&Vector::xy(5.0, 5.0)).unwrap();
    c.apply_inflation(&Vector::scalar(2.0)).unwrap();
    c.reset().unwrap();
    assert_eq!(c.center(), &Vector::xy(0.0, 0.0));
    // Pinned: the radius is not part of the reset contract.
    assert_eq!(c.radius(), 12.0);
}

#[test]
fn svg_circle_primitive() {
    let c = Circle::new(Vector::xy(1.5, -2.0), 3.0).with_id("dot");
    assert_eq!(c.to_svg().unwrap(), r#"<circle cx="1.5" cy="-2" r="3" id="dot"/>"#);
}

#[test]
fn opacity_keyframe_animates_and_resets() {
    let mut c = Circle::new(Vector::xy(0.0, 0.0), 1.0)
        .with_opacity(0.8)
        .animated(Fps::new(24, 1).unwrap())
        .keyframe(Keyframe::opacity(-0.5, 2).unwrap())
        .unwrap();
    c.update().unwrap();
    assert!((c.core().opacity - 0.55).abs() < 1e-12);
    assert!(c.to_svg().unwrap().contains("opacity=\"0.55"));
    c.update().unwrap();
    assert!((c.core().opacity - 0.3).abs() < 1e-12);
    c.reset().unwrap();
    assert_eq!(c.core().opacity, 0.8);
}

#[test]
fn translation_timeline_ends_on_one_shot_state() {
    for frames in [7u64, 13] {
        let payload = Vector::xy(10.0, -4.4);
        let mut animated = Circle::new(Vector::xy(1.0, 2.0), 3.0)
            .keyframe(Keyframe::translate(payload.clone(), frames).unwrap())
            .unwrap()
            .keyframe(Keyframe::inflate(Vector::scalar(1.0 / 3.0), frames).unwrap())
            .unwrap();
        for _ in 0..animated.frame_count() {
            animated.update().unwrap();
        }

        let mut direct = Circle::new(Vector::xy(1.0, 2.0), 3.0);
        direct.apply_translation(&payload).unwrap();
        direct.apply_inflation(&Vector::scalar(1.0 / 3.0)).unwrap();

        assert_eq!(animated.center(), direct.center());
        assert_eq!(animated.radius(), direct.radius());

        animated.reset().unwrap();
        assert_eq!(animated.center(), &Vector::xy(1.0, 2.0));
    }
}

#[test]
fn fractional_translation_lands_bit_exact() {
    for frames in [7u64, 13] {
        let payload = Vector::xy(10.0, -3.3);
        let mut animated = Circle::new(Vector::xy(0.1, 0.2), 1.0)
            .keyframe(Keyframe::translate(payload.clone(), frames).unwrap())
            .unwrap();
        for _ in 0..frames {
            animated.update().unwrap();
        }
        assert_eq!(
            animated.center(),
            &Vector::xy(0.1, 0.2).try_add(&payload).unwrap()
        );
    }
}

#[test]
fn manual_edits_between_keyframes_are_kept() {
    let mut c = Circle::new(Vector::xy(0.0, 0.0), 1.0)
        .keyframe(Keyframe::translate(Vector::xy(2.0, 0.0), 2).unwrap())
        .unwrap()
        .keyframe(Keyframe::translate(Vector::xy(0.0, 4.0), 2).unwrap())
        .unwrap();
    c.update().unwrap();
    c.update().unwrap();
    c.apply_translation(&Vector::xy(100.0, 0.0)).unwrap();
    c.update().unwrap();
    assert_eq!(c.center(), &Vector::xy(102.0, 2.0));
    c.update().unwrap();
    assert_eq!(c.center(), &Vector::xy(102.0, 4.0));
}

#[test]
fn three_dimensional_translation_keyframe_checks_dimension() {
    let mut c = Circle::new(Vector::xy(0.0, 0.0), 1.0)
        .keyframe(Keyframe::translate(Vector::new([1.0, 1.0, 1.0]), 2).unwrap())
        .unwrap();
    assert!(matches!(
        c.update(),
        Err(SceneError::DimensionMismatch { .. })
    ));
}

#[test]
fn drawing_requires_a_planar_center() {
    let c = Circle::new(Vector::new([1.0, 2.0, 3.0]), 1.0);
    assert!(matches!(
        c.to_svg(),
        Err(SceneError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    ));
}
