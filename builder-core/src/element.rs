//! Surface elements - the shapes placed on a page.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};
use crate::{LayoutError, LayoutResult};

/// Opaque style overrides, keyed by camelCase property name.
///
/// Merged over the kind's presentation at export time. Never consulted for
/// geometry.
pub type StyleMap = BTreeMap<String, serde_json::Value>;

/// Unique identifier for an element within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The five palette kinds.
///
/// Kind only changes how an element is presented and exported; geometry
/// behaves identically for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A text block.
    Text,
    /// A push button.
    Button,
    /// A single-line text input.
    Input,
    /// An image placeholder.
    Image,
    /// An empty layout container.
    Container,
}

/// Per-kind constants used when creating elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindDescriptor {
    /// Serialized tag (`"text"`, `"button"`, ...).
    pub tag: &'static str,
    /// Palette label.
    pub label: &'static str,
    /// Content given to a freshly created element.
    pub creation_content: &'static str,
    /// Size used for a drop when the caller does not supply one.
    pub drop_size: Size,
}

static DESCRIPTORS: [KindDescriptor; 5] = [
    KindDescriptor {
        tag: "text",
        label: "Text",
        creation_content: "Edit me",
        drop_size: Size::new(200.0, 40.0),
    },
    KindDescriptor {
        tag: "button",
        label: "Button",
        creation_content: "Click me",
        drop_size: Size::new(120.0, 40.0),
    },
    KindDescriptor {
        tag: "input",
        label: "Input",
        creation_content: "",
        drop_size: Size::new(200.0, 36.0),
    },
    KindDescriptor {
        tag: "image",
        label: "Image",
        creation_content: "",
        drop_size: Size::new(160.0, 120.0),
    },
    KindDescriptor {
        tag: "container",
        label: "Container",
        creation_content: "",
        drop_size: Size::new(240.0, 160.0),
    },
];

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 5] = [
        Self::Text,
        Self::Button,
        Self::Input,
        Self::Image,
        Self::Container,
    ];

    /// Creation constants for this kind.
    #[must_use]
    pub fn descriptor(self) -> &'static KindDescriptor {
        let index = match self {
            Self::Text => 0,
            Self::Button => 1,
            Self::Input => 2,
            Self::Image => 3,
            Self::Container => 4,
        };
        &DESCRIPTORS[index]
    }

    /// Serialized tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.descriptor().tag
    }

    /// Content a new element of this kind starts with. Empty for kinds
    /// without a default label.
    #[must_use]
    pub fn creation_content(self) -> Option<String> {
        Some(self.descriptor().creation_content.to_string())
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LayoutError::UnknownKind(s.to_string()))
    }
}

/// A shape placed on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Unique identifier, fixed at creation.
    pub id: ElementId,
    /// Element kind, fixed at creation.
    pub kind: ElementKind,
    /// Top-left corner in surface pixels.
    pub position: Point,
    /// Width and height in pixels.
    pub size: Size,
    /// Text content for text, button and input elements.
    pub content: Option<String>,
    /// Style overrides.
    pub custom_style: Option<StyleMap>,
}

impl Element {
    /// Create an element occupying `bounds` with the kind's creation content.
    #[must_use]
    pub fn new(id: ElementId, kind: ElementKind, bounds: Rect) -> Self {
        Self {
            id,
            kind,
            position: bounds.origin,
            size: bounds.size,
            content: kind.creation_content(),
            custom_style: None,
        }
    }

    /// Set the content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the style overrides.
    #[must_use]
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.custom_style = Some(style);
        self
    }

    /// The rectangle the element occupies.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Check if a point (in surface coordinates) is within this element.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Reject non-finite coordinates and negative sizes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGeometry`] naming the element.
    pub fn validate(&self) -> LayoutResult<()> {
        if !self.position.is_finite() {
            return Err(LayoutError::InvalidGeometry(format!(
                "element {} has a non-finite position",
                self.id
            )));
        }
        if !self.size.is_valid() {
            return Err(LayoutError::InvalidGeometry(format!(
                "element {} has an invalid size {}x{}",
                self.id, self.size.width, self.size.height
            )));
        }
        Ok(())
    }

    /// Merge `patch` into this element. Id and kind never change.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidGeometry`] if the patched geometry is
    /// invalid; the element is left untouched in that case.
    pub fn apply_patch(&mut self, patch: &ElementPatch) -> LayoutResult<()> {
        let mut next = self.clone();
        if let Some(x) = patch.x {
            next.position.x = x;
        }
        if let Some(y) = patch.y {
            next.position.y = y;
        }
        if let Some(width) = patch.width {
            next.size.width = width;
        }
        if let Some(height) = patch.height {
            next.size.height = height;
        }
        if let Some(content) = &patch.content {
            next.content = Some(content.clone());
        }
        if let Some(styles) = &patch.styles {
            next.custom_style = Some(styles.clone());
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// A partial update to an element, keyed like the persisted layout.
///
/// Only the fields that are present are written. `id` and `type` are not
/// patchable and are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementPatch {
    /// New left offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New top offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Replacement style overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
}

impl ElementPatch {
    /// Patch that only replaces the content.
    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Patch that moves the element to `position`.
    #[must_use]
    pub fn position(position: Point) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            ..Self::default()
        }
    }

    /// Patch that resizes the element.
    #[must_use]
    pub fn size(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
            ..Self::default()
        }
    }
}
