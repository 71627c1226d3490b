//! Static HTML writer.

use std::fmt::Write;

use builder_core::{Document, Element};

use crate::format::ExportOptions;
use crate::kinds::{template, Body};
use crate::style::{escape_html, write_css_declarations};

/// Indentation of each element line inside `<body>`.
const BODY_INDENT: &str = "    ";

/// Write one element as a self-contained absolutely positioned tag.
pub(crate) fn render_element(element: &Element) -> String {
    let tpl = template(element.kind);
    let mut style = format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;{}",
        element.position.x,
        element.position.y,
        element.size.width,
        element.size.height,
        tpl.inline_style,
    );
    write_css_declarations(&mut style, element.custom_style.as_ref());

    let mut tag = format!("<{} style=\"{style}\"{}", tpl.tag, tpl.attributes);
    match tpl.markup_body {
        Body::Void => tag.push_str(" />"),
        body => {
            let text = body.text(element).map(escape_html).unwrap_or_default();
            let _ = write!(tag, ">{text}</{}>", tpl.tag);
        }
    }
    tag
}

/// Write the whole page.
pub(crate) fn render_document(document: &Document, options: &ExportOptions) -> String {
    let body = document
        .iter()
        .map(render_element)
        .collect::<Vec<_>>()
        .join(&format!("\n{BODY_INDENT}"));

    format!(
        "<!DOCTYPE html>
<html>
<head>
  <meta charset=\"UTF-8\" />
  <title>{title}</title>
  <style>body{{margin:0;padding:0;position:relative;min-height:100vh;}}</style>
</head>
<body>
{BODY_INDENT}{body}
</body>
</html>",
        title = escape_html(&options.page_title),
    )
}
