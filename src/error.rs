//! Error types for untable library.

use thiserror::Error;

/// Result type alias for untable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during table extraction and text placement.
///
/// A table that cannot be found is not an error: it is reported through
/// [`crate::extract::DiagnosticReporter`] and yields an empty model.
#[derive(Error, Debug)]
pub enum Error {
    /// The table locator is not a valid CSS selector.
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    /// The style resolver failed for an element.
    #[error("Style resolution error: {0}")]
    Style(String),

    /// The drawing backend failed to measure or paint text.
    #[error("Paint error: {0}")]
    Paint(String),

    /// Error during rendering (JSON, Markdown, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
