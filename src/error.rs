use std::sync::Arc;

use thiserror::Error;

/// Result type for operations that load flag definitions.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading flag definitions.
///
/// Evaluation itself never fails: [`DecisionEngine`](crate::DecisionEngine) always produces a
/// boolean.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The flags document is not valid JSON or has an unexpected shape.
    #[error("error parsing flags configuration")]
    ConfigurationParseError(#[source] Arc<serde_json::Error>),
    /// An I/O error while reading the flags document.
    #[error(transparent)]
    // std::io::Error is not clonable, so we're wrapping it in an Arc.
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(Arc::new(value))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::ConfigurationParseError(Arc::new(value))
    }
}
