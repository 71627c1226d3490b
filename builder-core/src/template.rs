//! Starting documents.

use serde::{Deserialize, Serialize};

use crate::schema::{records_to_document, ComponentRecord};
use crate::{Document, LayoutError, LayoutResult};

/// Id of the empty starting point.
pub const BLANK_TEMPLATE: &str = "blank";

/// A named starting document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Template identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short pictogram shown in the picker.
    pub thumbnail: String,
    /// Initial elements, in paint order.
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

impl Template {
    fn empty(id: &str, name: &str, thumbnail: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: thumbnail.to_string(),
            components: Vec::new(),
        }
    }

    /// The built-in catalogue, in picker order, ending with the blank page.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::empty("landing", "Landing Page", "🏠"),
            Self::empty("blog", "Blog Post", "📝"),
            Self::empty("portfolio", "Portfolio", "💼"),
            Self::empty(BLANK_TEMPLATE, "Blank Canvas", "⬜"),
        ]
    }

    /// Look up a built-in template by id.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownTemplate`] if no template matches.
    pub fn find(id: &str) -> LayoutResult<Self> {
        Self::builtin()
            .into_iter()
            .find(|template| template.id == id)
            .ok_or_else(|| LayoutError::UnknownTemplate(id.to_string()))
    }

    /// Parse a template from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a template.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The template's initial document.
    ///
    /// # Errors
    ///
    /// Returns an error if the template's elements repeat an id or carry
    /// invalid geometry.
    pub fn document(&self) -> LayoutResult<Document> {
        records_to_document(self.components.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_start_empty() {
        let templates = Template::builtin();
        assert_eq!(templates.len(), 4);
        for template in &templates {
            assert!(template.document().expect("document").is_empty());
        }
        assert_eq!(templates[0].name, "Landing Page");
    }

    #[test]
    fn test_find_unknown_template() {
        assert!(Template::find("portfolio").is_ok());
        assert!(matches!(
            Template::find("shop"),
            Err(LayoutError::UnknownTemplate(id)) if id == "shop"
        ));
    }

    #[test]
    fn test_template_from_json() {
        let template = Template::from_json(
            r#"{"id":"hero","name":"Hero","thumbnail":"*","components":[
                {"id":"t1","type":"text","x":40,"y":40,"width":300,"height":60,"content":"Welcome"}
            ]}"#,
        )
        .expect("template");
        let document = template.document().expect("document");
        assert_eq!(document.len(), 1);
        assert_eq!(document.elements()[0].content.as_deref(), Some("Welcome"));
    }
}
