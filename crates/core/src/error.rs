use std::time::Duration;
use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum LedError {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    /// The display utility did not finish within the allotted window.
    #[error("write timed out after {0:?}")]
    WriteTimeout(Duration),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl LedError {
    /// `true` for [`LedError::WriteTimeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::WriteTimeout(_))
    }
}

pub type Result<T, E = LedError> = std::result::Result<T, E>;
