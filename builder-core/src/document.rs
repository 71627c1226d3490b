//! The ordered element collection of one page.

use std::collections::HashSet;
use std::sync::Arc;

use crate::geometry::{Delta, Point};
use crate::{Element, ElementId, ElementPatch, LayoutError, LayoutResult};

/// An immutable snapshot of the elements on one surface.
///
/// Insertion order is paint order: later elements are drawn on top and win
/// hit tests. Every edit returns a new `Document`; existing snapshots held
/// by readers never change underneath them. Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Arc<Vec<Element>>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from elements in paint order.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateId`] if two elements share an id, or
    /// [`LayoutError::InvalidGeometry`] if any element has invalid geometry.
    pub fn from_elements(elements: Vec<Element>) -> LayoutResult<Self> {
        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            element.validate()?;
            if !seen.insert(&element.id) {
                return Err(LayoutError::DuplicateId(element.id.to_string()));
            }
        }
        Ok(Self {
            elements: Arc::new(elements),
        })
    }

    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterate elements in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Element ids in paint order.
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter().map(|e| &e.id)
    }

    /// Get an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Whether an element with this id exists.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Get the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Find the topmost element containing `point`.
    #[must_use]
    pub fn element_at(&self, point: Point) -> Option<&Element> {
        self.elements.iter().rev().find(|e| e.contains_point(point))
    }

    /// Return a document with `element` appended on top.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateId`] if the id is already present, or
    /// [`LayoutError::InvalidGeometry`] if the element is malformed.
    pub fn with_element(&self, element: Element) -> LayoutResult<Self> {
        element.validate()?;
        if self.contains(&element.id) {
            return Err(LayoutError::DuplicateId(element.id.to_string()));
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.elements).push(element);
        Ok(next)
    }

    /// Return a document with element `id` shifted by `delta`.
    ///
    /// An unknown id yields an unchanged document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGeometry`] if `delta` is not finite or
    /// the moved position overflows.
    pub fn with_moved(&self, id: &ElementId, delta: Delta) -> LayoutResult<Self> {
        if !delta.is_finite() {
            return Err(LayoutError::InvalidGeometry(format!(
                "non-finite move delta ({}, {})",
                delta.dx, delta.dy
            )));
        }
        self.with_updated(id, |element| {
            element.position = element.position.offset(delta);
            element.validate()
        })
    }

    /// Return a document with `patch` merged into element `id`.
    ///
    /// An unknown id yields an unchanged document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGeometry`] if the patched element would
    /// have invalid geometry.
    pub fn with_patch(&self, id: &ElementId, patch: &ElementPatch) -> LayoutResult<Self> {
        self.with_updated(id, |element| element.apply_patch(patch))
    }

    fn with_updated<F>(&self, id: &ElementId, update: F) -> LayoutResult<Self>
    where
        F: FnOnce(&mut Element) -> LayoutResult<()>,
    {
        let Some(index) = self.elements.iter().position(|e| &e.id == id) else {
            return Ok(self.clone());
        };
        let mut next = self.clone();
        update(&mut Arc::make_mut(&mut next.elements)[index])?;
        Ok(next)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
