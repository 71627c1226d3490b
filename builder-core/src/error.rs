//! Error types for surface operations.

use thiserror::Error;

use crate::surface::GestureKind;
use crate::ElementKind;

/// Result type for surface operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors that can occur while editing or loading a document.
///
/// Absent ids and sub-threshold drags are not errors; those calls succeed
/// without changing the document.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// An id already present in the document was generated or loaded again.
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    /// Coordinates are not finite or a size is negative.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A geometry-producing gesture was requested while another is in flight.
    #[error("Cannot start {requested} while {active} is in progress")]
    GestureConflict {
        /// The gesture currently in flight.
        active: GestureKind,
        /// The gesture that was rejected.
        requested: GestureKind,
    },

    /// Moving was requested while a palette kind is armed for placement.
    #[error("Cannot move elements while {0} placement is armed")]
    KindArmed(ElementKind),

    /// The element kind name is not one of the five palette kinds.
    #[error("Unknown element kind: {0}")]
    UnknownKind(String),

    /// No built-in template has this id.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
