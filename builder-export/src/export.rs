//! Document export to markup, typed source, or project JSON.
//!
//! Every format is a pure function of `(document, config, format)`: the same
//! inputs always produce byte-identical text.

use builder_core::{Document, FeatureConfig, ProjectDocument};

use crate::error::ExportResult;
use crate::format::{ExportFormat, ExportOptions};
use crate::{markup, source};

/// Renders a [`Document`] into any [`ExportFormat`].
#[derive(Debug, Clone, Default)]
pub struct PageExporter {
    options: ExportOptions,
}

impl PageExporter {
    /// Create a new exporter with the given options.
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Create an exporter with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportOptions::default())
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a document to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error only for [`ExportFormat::Json`] when serialization
    /// fails, which well-formed documents never trigger.
    pub fn render(
        &self,
        document: &Document,
        config: FeatureConfig,
        format: ExportFormat,
    ) -> ExportResult<String> {
        tracing::debug!(
            "Exporting {} elements as {} ({:?})",
            document.len(),
            format,
            config
        );
        match format {
            ExportFormat::Markup => Ok(self.render_markup(document)),
            ExportFormat::TypedSource => Ok(self.render_typed_source(document, config)),
            ExportFormat::Json => Self::render_json(document, config),
        }
    }

    /// Render a static HTML page. Feature flags never affect markup.
    #[must_use]
    pub fn render_markup(&self, document: &Document) -> String {
        markup::render_document(document, &self.options)
    }

    /// Render a React function component, annotated for enabled features.
    #[must_use]
    pub fn render_typed_source(&self, document: &Document, config: FeatureConfig) -> String {
        source::render_document(document, config, &self.options)
    }

    /// Render the canonical project JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    pub fn render_json(document: &Document, config: FeatureConfig) -> ExportResult<String> {
        Ok(ProjectDocument::new(config, document).to_json_pretty()?)
    }
}

/// Export with default options.
///
/// # Errors
///
/// See [`PageExporter::render`].
pub fn render(
    document: &Document,
    config: FeatureConfig,
    format: ExportFormat,
) -> ExportResult<String> {
    PageExporter::with_defaults().render(document, config, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use builder_core::{Element, ElementId, ElementKind, Point, Rect, Size};

    fn sample() -> Document {
        Document::new()
            .with_element(
                Element::new(
                    ElementId::from("t1"),
                    ElementKind::Text,
                    Rect::new(Point::new(0.0, 0.0), Size::new(200.0, 40.0)),
                )
                .with_content("Hello"),
            )
            .expect("unique id")
    }

    #[test]
    fn test_flags_do_not_change_markup() {
        let exporter = PageExporter::with_defaults();
        let doc = sample();
        let plain = exporter
            .render(&doc, FeatureConfig::default(), ExportFormat::Markup)
            .expect("markup");
        let flagged = exporter
            .render(&doc, FeatureConfig::new(true, true), ExportFormat::Markup)
            .expect("markup");
        assert_eq!(plain, flagged);
    }

    #[test]
    fn test_options_flow_into_output() {
        let options = ExportOptions::default()
            .with_component_name("Landing")
            .expect("valid")
            .with_page_title("Launch & Learn");
        let exporter = PageExporter::new(options);
        let doc = sample();
        let html = exporter.render_markup(&doc);
        assert!(html.contains("<title>Launch &amp; Learn</title>"));
        let tsx = exporter.render_typed_source(&doc, FeatureConfig::default());
        assert!(tsx.contains("export default function Landing() {"));
    }

    #[test]
    fn test_json_format_loads_back() {
        let doc = sample();
        let config = FeatureConfig::new(false, true);
        let json = render(&doc, config, ExportFormat::Json).expect("json");
        let (loaded_config, loaded) = ProjectDocument::load(&json).expect("load");
        assert_eq!(loaded_config, config);
        assert_eq!(loaded, doc);
    }
}
