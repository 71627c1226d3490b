//! Exporter error types.

use builder_core::LayoutError;
use thiserror::Error;

/// Result type for exporter operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format name is not one of the supported formats.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// An export option is malformed.
    #[error("Invalid export option: {0}")]
    InvalidOption(String),

    /// The document could not be serialized.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
