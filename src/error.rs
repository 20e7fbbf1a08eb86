//! Error types for outline extraction.
//!
//! Extraction itself is fail-soft (see [`crate::pipeline`]), so these errors are
//! only visible through the `try_*` entry points and the fragment sources.

/// Result type alias for outline library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading fragments or inferring an outline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A fragment carries data the heuristics cannot work with
    #[error("Invalid fragment at index {index}: {reason}")]
    InvalidFragment {
        /// Position of the fragment in the input list
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fragment JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected fault inside classification (captured panic payload)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidFragment`].
    pub fn invalid_fragment(index: usize, reason: impl Into<String>) -> Self {
        Error::InvalidFragment {
            index,
            reason: reason.into(),
        }
    }
}
