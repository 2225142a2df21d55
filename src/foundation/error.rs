/// Convenience result type used across paintgrid.
pub type PaintResult<T> = Result<T, PaintError>;

/// Top-level error taxonomy. Every variant is fatal to the conversion that raised it.
#[derive(thiserror::Error, Debug)]
pub enum PaintError {
    /// Invalid command-line or caller-provided arguments, detected before any IO.
    #[error("usage error: {0}")]
    Usage(String),

    /// A source image could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Buffer shapes disagree, or an input does not have the size the painting needs.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A pixel buffer could not be reserved.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// The output image could not be written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PaintError {
    /// Build a [`PaintError::Usage`] value.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Build a [`PaintError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PaintError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`PaintError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`PaintError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
