use super::*;
use crate::foundation::vector::Vector;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn two_step() -> Timeline {
    Timeline::with_keyframes(
        fps30(),
        1.0,
        [
            Keyframe::translate(Vector::xy(3.0, 0.0), 3).unwrap(),
            Keyframe::opacity(-0.5, 2).unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn duration_and_end_time() {
    let tl = two_step();
    assert_eq!(tl.duration_frames(), 5);
    assert!((tl.end_time() - 5.0 / 30.0).abs() < 1e-12);
}

#[test]
fn keyframes_run_in_declaration_order() {
    let mut tl = two_step();
    assert_eq!(tl.state(), TimelineState::Idle);

    let mut kinds = Vec::new();
    while let Some(reached) = tl.step() {
        kinds.push(reached.kind());
    }
    assert_eq!(
        kinds,
        ["translate", "translate", "translate", "opacity", "opacity"]
    );
    assert_eq!(tl.state(), TimelineState::Exhausted);
    assert_eq!(tl.elapsed(), FrameIndex(5));
    assert_eq!(tl.cursor(), 2);
}

#[test]
fn last_frame_stays_running_until_stepped_past() {
    let mut tl = two_step();
    for _ in 0..5 {
        assert!(tl.step().is_some());
    }
    assert_eq!(tl.state(), TimelineState::Running);
    assert_eq!(tl.cursor(), 1);
    assert_eq!(tl.elapsed(), FrameIndex(5));

    assert!(tl.step().is_none());
    assert_eq!(tl.state(), TimelineState::Exhausted);
    assert_eq!(tl.cursor(), 2);
    assert_eq!(tl.elapsed(), FrameIndex(5));
}

#[test]
fn cursor_tracks_active_keyframe() {
    let mut tl = two_step();
    tl.step();
    assert_eq!(tl.cursor(), 0);
    assert_eq!(tl.state(), TimelineState::Running);
    tl.step();
    tl.step();
    assert_eq!(tl.cursor(), 0);
    tl.step();
    assert_eq!(tl.cursor(), 1);
    assert_eq!(tl.elapsed(), FrameIndex(4));
}

#[test]
fn exhausted_steps_are_noops() {
    let mut tl = two_step();
    for _ in 0..5 {
        assert!(tl.step().is_some());
    }
    for _ in 0..3 {
        assert!(tl.step().is_none());
    }
    assert_eq!(tl.elapsed(), FrameIndex(5));
}

#[test]
fn empty_timeline_exhausts_immediately() {
    let mut tl = Timeline::new(fps30(), 1.0);
    assert_eq!(tl.duration_frames(), 0);
    assert!(tl.step().is_none());
    assert_eq!(tl.state(), TimelineState::Exhausted);
    assert_eq!(tl.elapsed(), FrameIndex(0));
}

#[test]
fn reset_returns_to_idle() {
    let mut tl = two_step();
    tl.step();
    tl.step();
    tl.reset();
    assert_eq!(tl.state(), TimelineState::Idle);
    assert_eq!(tl.elapsed(), FrameIndex(0));
    assert_eq!(tl.cursor(), 0);
    tl.reset();
    assert_eq!(tl.state(), TimelineState::Idle);

    let first = tl.step().unwrap();
    assert_eq!(first, Action::Translate(Vector::xy(1.0, 0.0)));
}

#[test]
fn push_after_exhaustion_resumes() {
    let mut tl = two_step();
    while tl.step().is_some() {}
    tl.push(Keyframe::rotate(10.0, 20.0, 2).unwrap()).unwrap();
    assert_eq!(tl.state(), TimelineState::Running);
    assert_eq!(
        tl.step(),
        Some(Action::Rotate {
            start: 5.0,
            end: 10.0
        })
    );
    assert!(tl.step().is_some());
    assert!(tl.step().is_none());
}

#[test]
fn last_frame_of_each_keyframe_reaches_its_exact_payload() {
    for frames in [7u64, 13] {
        let payload = Vector::xy(10.0, -3.3);
        let mut tl = Timeline::with_keyframes(
            fps30(),
            1.0,
            [
                Keyframe::translate(payload.clone(), frames).unwrap(),
                Keyframe::rotate(33.3, 71.7, frames).unwrap(),
            ],
        )
        .unwrap();
        let reached: Vec<_> = std::iter::from_fn(|| tl.step()).collect();
        assert_eq!(reached.len() as u64, 2 * frames);
        assert_eq!(reached[frames as usize - 1], Action::Translate(payload));
        assert_eq!(
            reached.last(),
            Some(&Action::Rotate {
                start: 33.3,
                end: 71.7
            })
        );
    }
}

#[test]
fn keyframe_base_is_cleared_when_a_keyframe_begins() {
    let mut tl = two_step();
    tl.step();
    assert!(tl.keyframe_base().is_none());
    tl.set_keyframe_base(Action::Translate(Vector::xy(1.0, 1.0)));
    tl.step();
    tl.step();
    assert_eq!(
        tl.keyframe_base(),
        Some(&Action::Translate(Vector::xy(1.0, 1.0)))
    );
    tl.step();
    assert!(tl.keyframe_base().is_none());

    tl.set_keyframe_base(Action::Opacity(1.0));
    tl.reset();
    assert!(tl.keyframe_base().is_none());
}

#[test]
fn overflowing_total_duration_is_rejected() {
    let mut tl = Timeline::new(fps30(), 1.0);
    tl.push(Keyframe::opacity(-0.5, u64::MAX).unwrap()).unwrap();
    assert!(matches!(
        tl.push(Keyframe::opacity(0.5, 1).unwrap()),
        Err(SceneError::Validation(_))
    ));
    assert_eq!(tl.keyframes().len(), 1);
    assert_eq!(tl.duration_frames(), u64::MAX);
}

#[test]
fn cumulative_actions_merge_by_kind() {
    let tl = Timeline::with_keyframes(
        fps30(),
        1.0,
        [
            Keyframe::translate(Vector::xy(1.0, 0.0), 2).unwrap(),
            Keyframe::opacity(-0.25, 1).unwrap(),
            Keyframe::translate(Vector::xy(0.0, 2.0), 3).unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(
        tl.cumulative_actions().unwrap(),
        vec![
            Action::Translate(Vector::xy(1.0, 2.0)),
            Action::Opacity(-0.25)
        ]
    );
}

#[test]
fn display_lists_keyframes() {
    let s = two_step().to_string();
    assert!(s.starts_with("Timeline(30/1 fps, 5 frames, Idle)"));
    assert!(s.contains("#1: opacity(-0.5) over 2 frames"));
}
