//! Gesture descriptions handed to the surface model.
//!
//! The input layer turns raw pointer events into one of these with
//! coordinates already relative to the surface.

use serde::{Deserialize, Serialize};

use crate::geometry::{Delta, Point, Size};
use crate::{Element, ElementId, ElementKind, ElementPatch};

/// A completed edit gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    /// Rubber-band creation: arm `kind`, then drag from `start` to `end`.
    Draw {
        /// Kind to place.
        kind: ElementKind,
        /// Pointer-down position.
        start: Point,
        /// Pointer-up position.
        end: Point,
    },

    /// A palette item dropped onto the surface.
    Drop {
        /// Kind to place.
        kind: ElementKind,
        /// Drop point; becomes the element's top-left corner.
        at: Point,
        /// Explicit size, or the kind's drop size when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Size>,
    },

    /// An existing element dragged by `delta`.
    Move {
        /// Dragged element.
        id: ElementId,
        /// Pointer displacement.
        delta: Delta,
    },

    /// A field edit on an existing element.
    Patch {
        /// Edited element.
        id: ElementId,
        /// Fields to merge.
        patch: ElementPatch,
    },
}

/// What applying a [`Gesture`] did to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// A new element was appended.
    Created(Element),
    /// An existing element changed.
    Updated(ElementId),
    /// The gesture was absorbed without changes.
    Ignored,
}

impl GestureOutcome {
    /// Whether the document changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_json_shape() {
        let gesture: Gesture = serde_json::from_str(
            r#"{"gesture":"move","id":"button-1","delta":{"dx":5.0,"dy":-3.0}}"#,
        )
        .expect("parse gesture");
        assert_eq!(
            gesture,
            Gesture::Move {
                id: ElementId::from("button-1"),
                delta: Delta::new(5.0, -3.0),
            }
        );

        let gesture: Gesture = serde_json::from_str(
            r#"{"gesture":"drop","kind":"image","at":{"x":1.0,"y":2.0}}"#,
        )
        .expect("parse drop");
        assert!(matches!(gesture, Gesture::Drop { size: None, .. }));
    }
}
