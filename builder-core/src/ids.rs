//! Element id sources.
//!
//! The surface model never invents ids itself; it asks an injected
//! [`IdSource`]. Ids must never repeat within a document, and the model
//! checks every generated id before appending.

use uuid::Uuid;

use crate::{Document, ElementId, ElementKind};

/// Produces fresh element ids.
pub trait IdSource: std::fmt::Debug + Send {
    /// Generate the id for a new element of `kind`.
    fn next_id(&mut self, kind: ElementKind) -> ElementId;
}

/// Deterministic `"{kind}-{n}"` ids from a monotonic counter.
///
/// Once the counter would pass `u64::MAX` it switches to `"{kind}-{uuid}"`
/// ids instead of repeating itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    /// `None` once the counter is exhausted.
    next: Option<u64>,
}

impl SequentialIds {
    /// Start counting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Start counting after the largest numeric suffix already in `document`.
    ///
    /// Ids are matched on their last `-` separated segment, so a document
    /// that was itself produced by a `SequentialIds` never collides.
    #[must_use]
    pub fn seeded_from(document: &Document) -> Self {
        let highest = document
            .ids()
            .filter_map(|id| id.as_str().rsplit('-').next())
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next: highest.checked_add(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, kind: ElementKind) -> ElementId {
        let Some(n) = self.next else {
            tracing::trace!("Sequential ids exhausted, using a random id");
            return RandomIds.next_id(kind);
        };
        self.next = n.checked_add(1);
        ElementId::new(format!("{kind}-{n}"))
    }
}

/// Random `"{kind}-{uuid}"` ids, for documents merged from several sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self, kind: ElementKind) -> ElementId {
        ElementId::new(format!("{kind}-{}", Uuid::new_v4()))
    }
}
