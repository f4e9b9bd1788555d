use std::fmt;

use crate::animation::keyframe::{Action, Keyframe};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{SceneError, SceneResult};

/// Lifecycle of a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TimelineState {
    /// At frame 0, nothing applied yet.
    Idle,
    /// At least one frame applied.
    Running,
    /// A step past the last frame was requested; further steps are no-ops.
    Exhausted,
}

/// Ordered keyframes driving one shape, frame by frame.
///
/// The timeline owns the frame cursor and hands out, per frame, the share of the active
/// keyframe's payload reached so far. The owning shape adds that share to the value it
/// sampled when the keyframe began, so the last frame lands exactly on `base + payload`.
/// Keyframes run strictly in declaration order, each spanning `frames` steps.
#[derive(Clone, Debug)]
pub struct Timeline {
    fps: Fps,
    keyframes: Vec<Keyframe>,
    total: u64,
    elapsed: FrameIndex,
    cursor: usize,
    cursor_start: u64, // first elapsed frame of keyframes[cursor], minus one
    state: TimelineState,
    start_opacity: f64,
    keyframe_base: Option<Action>,
}

impl Timeline {
    /// Empty timeline at `fps`; `start_opacity` is what [`Shape::reset`](crate::Shape::reset)
    /// restores.
    pub fn new(fps: Fps, start_opacity: f64) -> Self {
        Self {
            fps,
            keyframes: Vec::new(),
            total: 0,
            elapsed: FrameIndex(0),
            cursor: 0,
            cursor_start: 0,
            state: TimelineState::Idle,
            start_opacity,
            keyframe_base: None,
        }
    }

    /// Timeline pre-filled with `keyframes`, each validated.
    pub fn with_keyframes(
        fps: Fps,
        start_opacity: f64,
        keyframes: impl IntoIterator<Item = Keyframe>,
    ) -> SceneResult<Self> {
        let mut out = Self::new(fps, start_opacity);
        for kf in keyframes {
            out.push(kf)?;
        }
        Ok(out)
    }

    /// Append a keyframe after the current last one.
    ///
    /// Fails when the keyframe is invalid or the total duration would overflow `u64`.
    pub fn push(&mut self, keyframe: Keyframe) -> SceneResult<()> {
        keyframe.validate()?;
        let total = self.total.checked_add(keyframe.frames).ok_or_else(|| {
            SceneError::validation(format!(
                "timeline duration overflows: {} + {} frames",
                self.total, keyframe.frames
            ))
        })?;
        self.keyframes.push(keyframe);
        self.total = total;
        if self.state == TimelineState::Exhausted {
            self.state = if self.elapsed.0 == 0 {
                TimelineState::Idle
            } else {
                TimelineState::Running
            };
        }
        Ok(())
    }

    /// Advance one frame and return the share of the active keyframe reached, if any.
    ///
    /// The returned action is cumulative within its keyframe: `partial(local, frames)`,
    /// equal to the payload itself on the keyframe's last frame. Entering a keyframe clears
    /// [`Timeline::keyframe_base`].
    pub fn step(&mut self) -> Option<Action> {
        if self.state == TimelineState::Exhausted {
            return None;
        }

        let frame = self.elapsed.next();
        if frame.0 > self.total {
            self.cursor = self.keyframes.len();
            self.cursor_start = self.total;
            self.state = TimelineState::Exhausted;
            tracing::debug!(elapsed = self.elapsed.0, "timeline exhausted");
            return None;
        }
        self.elapsed = frame;
        self.state = TimelineState::Running;

        let mut local = frame.0 - self.cursor_start;
        while local > self.keyframes[self.cursor].frames {
            self.cursor_start += self.keyframes[self.cursor].frames;
            self.cursor += 1;
            local = frame.0 - self.cursor_start;
            tracing::trace!(cursor = self.cursor, frame = frame.0, "keyframe switch");
        }
        if local == 1 {
            self.keyframe_base = None;
        }

        let keyframe = &self.keyframes[self.cursor];
        let reached = keyframe.action.partial(local, keyframe.frames);
        tracing::trace!(
            frame = frame.0,
            keyframe = self.cursor,
            local,
            kind = reached.kind(),
            "timeline step"
        );
        Some(reached)
    }

    /// Back to frame 0. The owning shape restores its own start geometry.
    pub fn reset(&mut self) {
        self.elapsed = FrameIndex(0);
        self.cursor = 0;
        self.cursor_start = 0;
        self.state = TimelineState::Idle;
        self.keyframe_base = None;
    }

    /// Value of the animated property sampled when the active keyframe began.
    pub fn keyframe_base(&self) -> Option<&Action> {
        self.keyframe_base.as_ref()
    }

    pub(crate) fn set_keyframe_base(&mut self, base: Action) {
        self.keyframe_base = Some(base);
    }

    /// Sum of all keyframe durations.
    pub fn duration_frames(&self) -> u64 {
        self.total
    }

    /// Duration in seconds at the timeline fps.
    pub fn end_time(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_frames())
    }

    /// Net payload per action kind, in order of first appearance.
    pub fn cumulative_actions(&self) -> SceneResult<Vec<Action>> {
        let mut out: Vec<Action> = Vec::new();
        for kf in &self.keyframes {
            match out.iter().position(|a| a.kind() == kf.action.kind()) {
                Some(i) => out[i] = out[i].plus(&kf.action)?,
                None => out.push(kf.action.clone()),
            }
        }
        Ok(out)
    }

    /// Frame rate used by [`Timeline::end_time`].
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Change the frame rate; durations in frames are unaffected.
    pub fn set_fps(&mut self, fps: Fps) {
        self.fps = fps;
    }

    /// Frames stepped since the last reset.
    pub fn elapsed(&self) -> FrameIndex {
        self.elapsed
    }

    /// Index of the active keyframe; equals `keyframes().len()` once exhausted.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// Keyframes in declaration order.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Opacity snapshot taken when animation was enabled.
    pub fn start_opacity(&self) -> f64 {
        self.start_opacity
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Timeline({}/{} fps, {} frames, {:?})",
            self.fps.num,
            self.fps.den,
            self.duration_frames(),
            self.state
        )?;
        for (i, kf) in self.keyframes.iter().enumerate() {
            write!(f, "\n  #{i}: {kf}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
