//! Surface model: owns the document and applies placement gestures.
//!
//! ```text
//! pointer layer ──(kind, points)──▶ SurfaceModel ──▶ new Document snapshot
//!               ──(id, delta)────▶              ──▶ redisplay / export
//! ```
//!
//! At most one geometry-producing gesture may be in flight. The streaming
//! `begin_*`/`finish_*` calls track it; the one-shot calls refuse to run
//! while a streamed gesture is open.

use serde::{Deserialize, Serialize};

use crate::geometry::{Delta, Point, Rect, Size};
use crate::gesture::{Gesture, GestureOutcome};
use crate::ids::{IdSource, SequentialIds};
use crate::{Document, Element, ElementId, ElementKind, ElementPatch, LayoutError, LayoutResult};

/// The geometry-producing gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// Rubber-band creation.
    Draw,
    /// Palette drop.
    Drop,
    /// Drag-relocate of an existing element.
    Move,
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Draw => "draw",
            Self::Drop => "drop",
            Self::Move => "move",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ActiveGesture {
    Draw { kind: ElementKind, start: Point },
    Move { id: ElementId },
}

impl ActiveGesture {
    const fn kind(&self) -> GestureKind {
        match self {
            Self::Draw { .. } => GestureKind::Draw,
            Self::Move { .. } => GestureKind::Move,
        }
    }
}

/// Editing state for one surface.
#[derive(Debug)]
pub struct SurfaceModel {
    document: Document,
    armed: Option<ElementKind>,
    active: Option<ActiveGesture>,
    ids: Box<dyn IdSource>,
}

impl Default for SurfaceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceModel {
    /// Create a model over an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::from_document(Document::new())
    }

    /// Start editing `document`, e.g. one supplied by a template.
    ///
    /// The default id source is seeded past the ids already present.
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        let ids = SequentialIds::seeded_from(&document);
        Self {
            document,
            armed: None,
            active: None,
            ids: Box::new(ids),
        }
    }

    /// Replace the id source.
    #[must_use]
    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// The current document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// A snapshot of the current document for readers such as the exporter.
    #[must_use]
    pub fn snapshot(&self) -> Document {
        self.document.clone()
    }

    /// Consume the model, keeping the document.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// The palette kind waiting for the next rubber-band drag.
    #[must_use]
    pub fn armed_kind(&self) -> Option<ElementKind> {
        self.armed
    }

    /// The streamed gesture currently in flight.
    #[must_use]
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.active.as_ref().map(ActiveGesture::kind)
    }

    /// Arm `kind` for placement by the next rubber-band drag.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::GestureConflict`] while a gesture is in flight.
    pub fn arm(&mut self, kind: ElementKind) -> LayoutResult<()> {
        self.ensure_idle(GestureKind::Draw)?;
        tracing::debug!(%kind, "Armed kind for placement");
        self.armed = Some(kind);
        Ok(())
    }

    /// Clear the armed kind.
    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Create an element from a rubber-band drag using the armed kind.
    ///
    /// The drag is normalized so the element's corner is the minimum of the
    /// two points. Returns `Ok(None)` without touching the document when no
    /// kind is armed or either side is 10 pixels or less. On success the
    /// armed kind is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::GestureConflict`] while a streamed gesture is
    /// open, [`LayoutError::InvalidGeometry`] for non-finite points and
    /// [`LayoutError::DuplicateId`] if the id source repeats itself.
    pub fn create_by_drag(&mut self, start: Point, end: Point) -> LayoutResult<Option<Element>> {
        self.ensure_idle(GestureKind::Draw)?;
        let Some(kind) = self.armed else {
            tracing::trace!("Drag ignored: no kind armed");
            return Ok(None);
        };
        self.draw(kind, start, end)
    }

    /// Create an element of `kind` with its top-left corner at `at`.
    ///
    /// `size` defaults to the kind's drop size. The armed kind is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::GestureConflict`] while a streamed gesture is
    /// open, [`LayoutError::InvalidGeometry`] for a non-finite point or an
    /// invalid size and [`LayoutError::DuplicateId`] if the id source
    /// repeats itself.
    pub fn create_by_drop(
        &mut self,
        kind: ElementKind,
        at: Point,
        size: Option<Size>,
    ) -> LayoutResult<Element> {
        self.ensure_idle(GestureKind::Drop)?;
        let size = size.unwrap_or(kind.descriptor().drop_size);
        let element = self.append(kind, Rect::new(at, size))?;
        tracing::debug!(id = %element.id, %kind, x = at.x, y = at.y, "Dropped element");
        Ok(element)
    }

    /// Shift element `id` by `delta` and return the new snapshot.
    ///
    /// An unknown id leaves the document unchanged; callers may pass
    /// palette handles without checking first.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::GestureConflict`] while a streamed gesture is
    /// open and [`LayoutError::InvalidGeometry`] for a non-finite delta.
    pub fn move_by(&mut self, id: &ElementId, delta: Delta) -> LayoutResult<Document> {
        self.ensure_idle(GestureKind::Move)?;
        self.relocate(id, delta)
    }

    /// Merge `patch` into element `id` and return the new snapshot.
    ///
    /// An unknown id leaves the document unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGeometry`] if the patch would leave the
    /// element with invalid geometry.
    pub fn patch(&mut self, id: &ElementId, patch: &ElementPatch) -> LayoutResult<Document> {
        let next = self.document.with_patch(id, patch)?;
        if next == self.document {
            tracing::trace!(%id, "Patch ignored: unknown id or no change");
        } else {
            tracing::debug!(%id, "Patched element");
        }
        self.document = next;
        Ok(self.snapshot())
    }

    /// Open a rubber-band drag at `start` for the armed kind.
    ///
    /// Returns `Ok(false)` when no kind is armed.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::GestureConflict`] if a gesture is in flight.
    pub fn begin_draw(&mut self, start: Point) -> LayoutResult<bool> {
        self.ensure_idle(GestureKind::Draw)?;
        let Some(kind) = self.armed else {
            return Ok(false);
        };
        self.active = Some(ActiveGesture::Draw { kind, start });
        Ok(true)
    }

    /// The rubber-band rectangle for the pointer at `current`.
    #[must_use]
    pub fn draw_preview(&self, current: Point) -> Option<Rect> {
        match &self.active {
            Some(ActiveGesture::Draw { start, .. }) => Some(Rect::from_drag(*start, current)),
            _ => None,
        }
    }

    /// Close the open rubber-band drag at `end`.
    ///
    /// Returns `Ok(None)` if no drag was open or the rectangle is below the
    /// size threshold.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::GestureConflict`] if a move is open instead, or
    /// the errors of [`SurfaceModel::create_by_drag`].
    pub fn finish_draw(&mut self, end: Point) -> LayoutResult<Option<Element>> {
        match self.active.take() {
            Some(ActiveGesture::Draw { kind, start }) => self.draw(kind, start, end),
            Some(other) => {
                let active = other.kind();
                self.active = Some(other);
                Err(LayoutError::GestureConflict {
                    active,
                    requested: GestureKind::Draw,
                })
            }
            None => Ok(None),
        }
    }

    /// Open a drag-relocate of element `id`.
    ///
    /// Returns `Ok(false)` for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::GestureConflict`] if a gesture is in flight and
    /// [`LayoutError::KindArmed`] while a kind is armed.
    pub fn begin_move(&mut self, id: &ElementId) -> LayoutResult<bool> {
        self.ensure_idle(GestureKind::Move)?;
        if let Some(kind) = self.armed {
            return Err(LayoutError::KindArmed(kind));
        }
        if !self.document.contains(id) {
            tracing::trace!(%id, "Move ignored: not a surface element");
            return Ok(false);
        }
        self.active = Some(ActiveGesture::Move { id: id.clone() });
        Ok(true)
    }

    /// Close the open drag-relocate with the total pointer `delta`.
    ///
    /// Without an open move the current snapshot is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::GestureConflict`] if a draw is open instead and
    /// [`LayoutError::InvalidGeometry`] for a non-finite delta.
    pub fn finish_move(&mut self, delta: Delta) -> LayoutResult<Document> {
        match self.active.take() {
            Some(ActiveGesture::Move { id }) => self.relocate(&id, delta),
            Some(other) => {
                let active = other.kind();
                self.active = Some(other);
                Err(LayoutError::GestureConflict {
                    active,
                    requested: GestureKind::Move,
                })
            }
            None => Ok(self.snapshot()),
        }
    }

    /// Abandon the streamed gesture, if any. The armed kind is kept.
    pub fn cancel_gesture(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!(gesture = %active.kind(), "Gesture cancelled");
        }
    }

    /// Apply a complete gesture description.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation.
    pub fn apply(&mut self, gesture: &Gesture) -> LayoutResult<GestureOutcome> {
        match gesture {
            Gesture::Draw { kind, start, end } => {
                let previous = self.armed;
                self.arm(*kind)?;
                let created = self.create_by_drag(*start, *end);
                if !matches!(created, Ok(Some(_))) {
                    self.armed = previous;
                }
                Ok(created?.map_or(GestureOutcome::Ignored, GestureOutcome::Created))
            }
            Gesture::Drop { kind, at, size } => {
                let element = self.create_by_drop(*kind, *at, *size)?;
                Ok(GestureOutcome::Created(element))
            }
            Gesture::Move { id, delta } => {
                let before = self.snapshot();
                let after = self.move_by(id, *delta)?;
                Ok(Self::outcome(&before, &after, id))
            }
            Gesture::Patch { id, patch } => {
                let before = self.snapshot();
                let after = self.patch(id, patch)?;
                Ok(Self::outcome(&before, &after, id))
            }
        }
    }

    fn outcome(before: &Document, after: &Document, id: &ElementId) -> GestureOutcome {
        if before == after {
            GestureOutcome::Ignored
        } else {
            GestureOutcome::Updated(id.clone())
        }
    }

    fn ensure_idle(&self, requested: GestureKind) -> LayoutResult<()> {
        match &self.active {
            Some(active) => Err(LayoutError::GestureConflict {
                active: active.kind(),
                requested,
            }),
            None => Ok(()),
        }
    }

    fn draw(&mut self, kind: ElementKind, start: Point, end: Point) -> LayoutResult<Option<Element>> {
        if !start.is_finite() || !end.is_finite() {
            return Err(LayoutError::InvalidGeometry(
                "non-finite drag coordinates".to_string(),
            ));
        }
        let bounds = Rect::from_drag(start, end);
        if !bounds.exceeds_draw_threshold() {
            tracing::trace!(
                width = bounds.size.width,
                height = bounds.size.height,
                "Drag ignored: below size threshold"
            );
            return Ok(None);
        }
        let element = self.append(kind, bounds)?;
        self.armed = None;
        tracing::debug!(
            id = %element.id,
            %kind,
            x = bounds.origin.x,
            y = bounds.origin.y,
            width = bounds.size.width,
            height = bounds.size.height,
            "Drew element"
        );
        Ok(Some(element))
    }

    fn relocate(&mut self, id: &ElementId, delta: Delta) -> LayoutResult<Document> {
        let next = self.document.with_moved(id, delta)?;
        if next == self.document {
            tracing::trace!(%id, "Move ignored: unknown id or zero delta");
        } else {
            tracing::debug!(%id, dx = delta.dx, dy = delta.dy, "Moved element");
        }
        self.document = next;
        Ok(self.snapshot())
    }

    fn append(&mut self, kind: ElementKind, bounds: Rect) -> LayoutResult<Element> {
        if !bounds.origin.is_finite() {
            return Err(LayoutError::InvalidGeometry(
                "non-finite placement point".to_string(),
            ));
        }
        let id = self.ids.next_id(kind);
        if self.document.contains(&id) {
            tracing::error!(%id, "Id source produced an id already in the document");
            return Err(LayoutError::DuplicateId(id.to_string()));
        }
        let element = Element::new(id, kind, bounds);
        self.document = self.document.with_element(element.clone())?;
        Ok(element)
    }
}
