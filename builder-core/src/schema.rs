//! Canonical persisted representation of a project.
//!
//! ```json
//! {
//!   "config": { "useRouter": false, "useRTKQuery": false },
//!   "components": [
//!     { "id": "b1", "type": "button", "x": 10, "y": 20, "width": 80, "height": 30,
//!       "content": "Click me" }
//!   ]
//! }
//! ```
//!
//! Optional fields that are absent stay absent; they are never written as
//! `null`. Whole pixel values are written as integers.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};
use crate::{Document, Element, ElementId, ElementKind, FeatureConfig, LayoutResult, StyleMap};

/// Element as stored in a project file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Element identifier.
    pub id: ElementId,
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Left offset in pixels.
    #[serde(serialize_with = "pixels::serialize")]
    pub x: f64,
    /// Top offset in pixels.
    #[serde(serialize_with = "pixels::serialize")]
    pub y: f64,
    /// Width in pixels.
    #[serde(serialize_with = "pixels::serialize")]
    pub width: f64,
    /// Height in pixels.
    #[serde(serialize_with = "pixels::serialize")]
    pub height: f64,
    /// Text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Style overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
}

impl From<&Element> for ComponentRecord {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id.clone(),
            kind: element.kind,
            x: element.position.x,
            y: element.position.y,
            width: element.size.width,
            height: element.size.height,
            content: element.content.clone(),
            styles: element.custom_style.clone(),
        }
    }
}

impl From<ComponentRecord> for Element {
    fn from(record: ComponentRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind,
            position: Point::new(record.x, record.y),
            size: Size::new(record.width, record.height),
            content: record.content,
            custom_style: record.styles,
        }
    }
}

/// Convert stored records into a validated document.
///
/// # Errors
///
/// Returns [`crate::LayoutError::DuplicateId`] or
/// [`crate::LayoutError::InvalidGeometry`] for malformed input.
pub fn records_to_document(records: Vec<ComponentRecord>) -> LayoutResult<Document> {
    Document::from_elements(records.into_iter().map(Element::from).collect())
}

/// Convert a document into stored records, in paint order.
#[must_use]
pub fn document_to_records(document: &Document) -> Vec<ComponentRecord> {
    document.iter().map(ComponentRecord::from).collect()
}

/// The whole persisted project: feature flags plus the element list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    /// Feature flags.
    pub config: FeatureConfig,
    /// Elements in paint order.
    pub components: Vec<ComponentRecord>,
}

impl ProjectDocument {
    /// Build the persisted form of a session.
    #[must_use]
    pub fn new(config: FeatureConfig, document: &Document) -> Self {
        Self {
            config,
            components: document_to_records(document),
        }
    }

    /// Split into feature flags and a validated document.
    ///
    /// # Errors
    ///
    /// Returns an error if the components do not form a valid document.
    pub fn into_parts(self) -> LayoutResult<(FeatureConfig, Document)> {
        let document = records_to_document(self.components)?;
        Ok((self.config, document))
    }

    /// Serialize with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse without validating the element list.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the layout.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse and validate in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the document invalid.
    pub fn load(json: &str) -> LayoutResult<(FeatureConfig, Document)> {
        Self::from_json(json)?.into_parts()
    }
}

mod pixels {
    use serde::Serializer;

    /// Largest magnitude at which every integer is exactly representable.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    #[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
