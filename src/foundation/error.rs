/// Convenience result type used across clipsynth.
pub type ClipsynthResult<T> = Result<T, ClipsynthError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum ClipsynthError {
    /// Invalid user-provided or plan data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing a content plan.
    #[error("planning error: {0}")]
    Planning(String),

    /// Errors while synthesizing audio.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Errors while rasterizing frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding output containers.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors while reading or writing the gallery store.
    #[error("storage error: {0}")]
    Storage(String),

    /// The generation was cancelled before completing.
    #[error("generation cancelled")]
    Cancelled,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClipsynthError {
    /// Build a [`ClipsynthError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ClipsynthError::Planning`] value.
    pub fn planning(msg: impl Into<String>) -> Self {
        Self::Planning(msg.into())
    }

    /// Build a [`ClipsynthError::Synthesis`] value.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Build a [`ClipsynthError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ClipsynthError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ClipsynthError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
