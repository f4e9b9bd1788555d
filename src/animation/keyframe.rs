use std::fmt;

use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::vector::Vector;

/// Payload of one keyframe: the total change applied over its duration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move the shape by a displacement.
    Translate(Vector),
    /// Grow radii componentwise (1-D for circles).
    Inflate(Vector),
    /// Add to the start and end angles, in degrees.
    Rotate {
        /// Start-angle delta.
        start: f64,
        /// End-angle delta.
        end: f64,
    },
    /// Add to the shape opacity.
    Opacity(f64),
}

impl Action {
    /// Kind name used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Translate(_) => "translate",
            Self::Inflate(_) => "inflate",
            Self::Rotate { .. } => "rotate",
            Self::Opacity(_) => "opacity",
        }
    }

    /// Share of the payload reached after `done` of `total` frames.
    ///
    /// The last frame returns the payload itself, never a recomputed product.
    pub fn partial(&self, done: u64, total: u64) -> Action {
        if done >= total {
            return self.clone();
        }
        let (done, total) = (done as f64, total as f64);
        let part = |v: f64| v * done / total;
        match self {
            Self::Translate(v) => Self::Translate(v.map(part)),
            Self::Inflate(v) => Self::Inflate(v.map(part)),
            Self::Rotate { start, end } => Self::Rotate {
                start: part(*start),
                end: part(*end),
            },
            Self::Opacity(v) => Self::Opacity(part(*v)),
        }
    }

    /// Sum of two actions of the same kind.
    pub fn plus(&self, other: &Action) -> SceneResult<Action> {
        match (self, other) {
            (Self::Translate(a), Self::Translate(b)) => Ok(Self::Translate(a.try_add(b)?)),
            (Self::Inflate(a), Self::Inflate(b)) => Ok(Self::Inflate(a.try_add(b)?)),
            (
                Self::Rotate { start, end },
                Self::Rotate {
                    start: other_start,
                    end: other_end,
                },
            ) => Ok(Self::Rotate {
                start: start + other_start,
                end: end + other_end,
            }),
            (Self::Opacity(a), Self::Opacity(b)) => Ok(Self::Opacity(a + b)),
            (a, b) => Err(SceneError::validation(format!(
                "cannot add {} action to {} action",
                b.kind(),
                a.kind()
            ))),
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::Translate(v) | Self::Inflate(v) => v.coords().iter().all(|c| c.is_finite()),
            Self::Rotate { start, end } => start.is_finite() && end.is_finite(),
            Self::Opacity(v) => v.is_finite(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translate(v) => write!(f, "translate({v})"),
            Self::Inflate(v) => write!(f, "inflate({v})"),
            Self::Rotate { start, end } => write!(f, "rotate({start}, {end})"),
            Self::Opacity(v) => write!(f, "opacity({v})"),
        }
    }
}

/// One timed action of a [`crate::Timeline`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Total change applied across the keyframe.
    pub action: Action,
    /// Duration in frames (>= 1).
    pub frames: u64,
}

impl Keyframe {
    /// Create a validated keyframe.
    pub fn new(action: Action, frames: u64) -> SceneResult<Self> {
        let kf = Self { action, frames };
        kf.validate()?;
        Ok(kf)
    }

    /// Translation by `by` over `frames`.
    pub fn translate(by: Vector, frames: u64) -> SceneResult<Self> {
        Self::new(Action::Translate(by), frames)
    }

    /// Radius growth by `by` over `frames`.
    pub fn inflate(by: Vector, frames: u64) -> SceneResult<Self> {
        Self::new(Action::Inflate(by), frames)
    }

    /// Angle deltas in degrees over `frames`.
    pub fn rotate(start: f64, end: f64, frames: u64) -> SceneResult<Self> {
        Self::new(Action::Rotate { start, end }, frames)
    }

    /// Opacity change over `frames`.
    pub fn opacity(by: f64, frames: u64) -> SceneResult<Self> {
        Self::new(Action::Opacity(by), frames)
    }

    /// Reject zero durations and non-finite payloads.
    pub fn validate(&self) -> SceneResult<()> {
        if self.frames == 0 {
            return Err(SceneError::validation(format!(
                "{} keyframe duration must be >= 1 frame",
                self.action.kind()
            )));
        }
        if !self.action.is_finite() {
            return Err(SceneError::validation(format!(
                "{} keyframe payload must be finite",
                self.action.kind()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {} frames", self.action, self.frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;
