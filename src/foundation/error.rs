/// Convenience result type used across boothframe.
pub type PictureResult<T> = Result<T, PictureError>;

/// Top-level error taxonomy used by the picture APIs.
///
/// Every variant is a contract violation by the caller; none of them is transient.
#[derive(thiserror::Error, Debug)]
pub enum PictureError {
    /// Capture list (or layout slot count) outside `1..=4`.
    #[error("invalid capture count: expected 1 to 4 captures, got {0}")]
    InvalidCaptureCount(usize),

    /// Orientation string outside `auto`, `portrait`, `landscape`.
    #[error("invalid orientation: unknown orientation '{0}'")]
    InvalidOrientation(String),

    /// Asset exists but cannot be decoded, or is missing with no substitute.
    #[error("asset error: {0}")]
    Asset(String),

    /// Zero-sized targets, non-positive paper formats and similar degenerate geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Malformed configuration or user-provided values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PictureError {
    /// Build a [`PictureError::InvalidOrientation`] value.
    pub fn invalid_orientation(value: impl Into<String>) -> Self {
        Self::InvalidOrientation(value.into())
    }

    /// Build a [`PictureError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`PictureError::InvalidGeometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`PictureError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
