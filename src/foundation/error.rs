/// Convenience result type used across arcscene.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by scene, shape and timeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Vectors or quadrants of different dimensionality were combined.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the receiver.
        expected: usize,
        /// Dimension of the offending operand.
        found: usize,
    },

    /// The computed viewport or the canvas has a zero-length axis.
    #[error("degenerate viewport: {0}")]
    DegenerateViewport(String),

    /// A transform was requested on a shape kind that cannot honor it.
    #[error("unsupported transform: {transform} is not supported by {shape}")]
    UnsupportedTransform {
        /// Shape kind name.
        shape: &'static str,
        /// Transform callback name.
        transform: &'static str,
    },

    /// Invalid user-provided data (fps, keyframes, scene documents).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing scene documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::DimensionMismatch`] value.
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    /// Build a [`SceneError::DegenerateViewport`] value.
    pub fn degenerate_viewport(msg: impl Into<String>) -> Self {
        Self::DegenerateViewport(msg.into())
    }

    /// Build a [`SceneError::UnsupportedTransform`] value.
    pub fn unsupported(shape: &'static str, transform: &'static str) -> Self {
        Self::UnsupportedTransform { shape, transform }
    }

    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Fail with [`SceneError::DimensionMismatch`] unless both dimensions agree.
pub(crate) fn ensure_same_dim(expected: usize, found: usize) -> SceneResult<()> {
    if expected != found {
        return Err(SceneError::dimension_mismatch(expected, found));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
