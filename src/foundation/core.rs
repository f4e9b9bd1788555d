use crate::foundation::error::{SceneError, SceneResult};

pub use kurbo::{Point, Rect, Vec2};

/// 0-based frame counter in timeline space.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Frame index one step later, saturating at `u64::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Rational frame rate `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator.
    pub den: u32, // must be > 0
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

impl Fps {
    /// Create a validated frame rate with `num > 0` and `den > 0`.
    pub fn new(num: u32, den: u32) -> SceneResult<Self> {
        if den == 0 {
            return Err(SceneError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SceneError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Whole frames per second, shorthand for `Fps::new(n, 1)`.
    pub fn per_second(num: u32) -> SceneResult<Self> {
        Self::new(num, 1)
    }

    /// Re-check the invariants, e.g. after deserialization.
    pub fn validate(self) -> SceneResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert a frame count into seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }
}

/// Declared output size of a rendered document, in output units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width of the `<svg>` root element.
    pub width: u32,
    /// Height of the `<svg>` root element.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
        }
    }
}

impl Canvas {
    /// `true` when either axis has zero length.
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
