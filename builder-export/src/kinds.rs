//! Per-kind presentation used by the markup and typed-source writers.

use builder_core::{Element, ElementKind};

/// What goes between an element's opening and closing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Body {
    /// The element's content, or this label when the content is empty.
    Content(&'static str),
    /// Fixed placeholder text.
    Fixed(&'static str),
    /// Nothing; markup still writes a closing tag.
    Empty,
    /// A void tag that never has children.
    Void,
}

/// Export presentation for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KindTemplate {
    pub tag: &'static str,
    /// CSS declarations appended after the geometry in markup.
    pub inline_style: &'static str,
    /// Utility classes used in typed source.
    pub class_name: Option<&'static str>,
    /// Extra attributes, written verbatim after the style.
    pub attributes: &'static str,
    pub markup_body: Body,
    pub source_body: Body,
}

const TEXT: KindTemplate = KindTemplate {
    tag: "div",
    inline_style: "",
    class_name: None,
    attributes: "",
    markup_body: Body::Content("Text"),
    source_body: Body::Content("Text"),
};

const BUTTON: KindTemplate = KindTemplate {
    tag: "button",
    inline_style: "background:#3B82F6;color:white;border-radius:4px;",
    class_name: Some("bg-blue-500 text-white rounded"),
    attributes: "",
    markup_body: Body::Content("Button"),
    source_body: Body::Content("Button"),
};

const INPUT: KindTemplate = KindTemplate {
    tag: "input",
    inline_style: "border:1px solid #ccc;padding:4px;",
    class_name: Some("border px-2"),
    attributes: " placeholder=\"Enter text...\"",
    markup_body: Body::Void,
    source_body: Body::Void,
};

const IMAGE: KindTemplate = KindTemplate {
    tag: "div",
    inline_style: "background:#E5E7EB;",
    class_name: Some("bg-gray-200"),
    attributes: "",
    markup_body: Body::Fixed("Image Placeholder"),
    source_body: Body::Fixed("Image"),
};

const CONTAINER: KindTemplate = KindTemplate {
    tag: "div",
    inline_style: "border:2px dashed #ccc;",
    class_name: Some("border-2 border-dashed border-gray-300"),
    attributes: "",
    markup_body: Body::Empty,
    source_body: Body::Empty,
};

/// Look up the export presentation for `kind`.
pub(crate) const fn template(kind: ElementKind) -> &'static KindTemplate {
    match kind {
        ElementKind::Text => &TEXT,
        ElementKind::Button => &BUTTON,
        ElementKind::Input => &INPUT,
        ElementKind::Image => &IMAGE,
        ElementKind::Container => &CONTAINER,
    }
}

impl Body {
    /// Resolve the text to write for `element`, `None` for no children.
    pub(crate) fn text(self, element: &Element) -> Option<&str> {
        match self {
            Self::Content(fallback) => Some(
                element
                    .content
                    .as_deref()
                    .filter(|content| !content.is_empty())
                    .unwrap_or(fallback),
            ),
            Self::Fixed(text) => Some(text),
            Self::Empty | Self::Void => None,
        }
    }
}
