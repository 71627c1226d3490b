//! React component writer.
//!
//! Feature flags only add advisory comments: a header listing the pre-wired
//! features, commented hook placeholders, and a trailing block of setup
//! instructions. Nothing flag-dependent is executable.

use std::fmt::Write;

use builder_core::{Document, Element, FeatureConfig};

use crate::format::ExportOptions;
use crate::kinds::{template, Body};
use crate::style::{escape_jsx_text, write_style_record_entries};

/// Write one element as a JSX line (without indentation or newline).
pub(crate) fn render_element(element: &Element) -> String {
    let tpl = template(element.kind);
    let mut style = format!(
        "position: 'absolute', left: {}, top: {}, width: {}, height: {}",
        element.position.x, element.position.y, element.size.width, element.size.height,
    );
    write_style_record_entries(&mut style, element.custom_style.as_ref());

    let mut tag = format!("<{} style={{{{ {style} }}}}", tpl.tag);
    if let Some(class_name) = tpl.class_name {
        let _ = write!(tag, " className=\"{class_name}\"");
    }
    tag.push_str(tpl.attributes);
    match tpl.source_body {
        Body::Void | Body::Empty => tag.push_str(" />"),
        body => {
            let text = body.text(element).map(escape_jsx_text).unwrap_or_default();
            let _ = write!(tag, ">{text}</{}>", tpl.tag);
        }
    }
    tag
}

fn write_feature_header(out: &mut String, config: FeatureConfig) {
    if !config.any_enabled() {
        return;
    }
    out.push_str("/*\n * This file is pre-wired for optional features.\n");
    for feature in config.enabled_features() {
        let _ = writeln!(out, " *  - {feature}");
    }
    out.push_str(" */\n\n");
}

fn write_hook_placeholders(out: &mut String, config: FeatureConfig) {
    if config.use_router {
        out.push_str("  // const navigate = useNavigate(); // add from react-router-dom\n");
    }
    if config.use_rtk_query {
        out.push_str("  // const { data, error, isLoading } = myApi.useGetSomethingQuery();\n");
    }
    if config.any_enabled() {
        out.push('\n');
    }
}

fn write_setup_instructions(out: &mut String, config: FeatureConfig, component: &str) {
    if !config.any_enabled() {
        return;
    }
    out.push_str("\n/*\nSETUP INSTRUCTIONS\n");
    if config.use_router {
        let _ = writeln!(
            out,
            "1. Install react-router-dom and wrap <{component} /> with <BrowserRouter> in your root."
        );
    }
    if config.use_rtk_query {
        out.push_str("2. Configure Redux store and inject endpoints via createApi().\n");
    }
    out.push_str("*/");
}

/// Write the whole component file.
pub(crate) fn render_document(
    document: &Document,
    config: FeatureConfig,
    options: &ExportOptions,
) -> String {
    let mut code = String::from("import React from 'react';\n\n");
    write_feature_header(&mut code, config);

    let _ = writeln!(code, "export default function {}() {{", options.component_name);
    write_hook_placeholders(&mut code, config);

    code.push_str("  return (\n    <div className=\"relative min-h-screen\">\n");
    for element in document {
        let _ = writeln!(code, "      {}", render_element(element));
    }
    code.push_str("    </div>\n  );\n}\n");

    write_setup_instructions(&mut code, config, &options.component_name);
    code
}
