//! Escaping and custom-style rendering shared by the writers.

use std::fmt::Write;

use builder_core::StyleMap;
use serde_json::Value;

/// Style keys that would change an element's geometry. Skipped on export.
const GEOMETRY_KEYS: [&str; 8] = [
    "position", "left", "top", "right", "bottom", "width", "height", "inset",
];

/// Numeric properties written without a `px` unit.
const UNITLESS_KEYS: [&str; 15] = [
    "animationIterationCount",
    "aspectRatio",
    "columnCount",
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "gridColumn",
    "gridRow",
    "lineHeight",
    "opacity",
    "order",
    "tabSize",
    "zIndex",
    "zoom",
];

/// Escape text for HTML element content and double-quoted attributes.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for JSX children, where braces open expressions.
pub(crate) fn escape_jsx_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_geometry_key(key: &str) -> bool {
    GEOMETRY_KEYS.iter().any(|g| g.eq_ignore_ascii_case(key))
}

/// Property names are ASCII letters, digits and `-`, not starting with a digit.
fn is_property_name(key: &str) -> bool {
    key.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '-')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A CSS value that cannot end its declaration or open a block or comment.
fn is_contained_css_value(value: &str) -> bool {
    !value.contains([';', '{', '}', '\\', '\n', '\r']) && !value.contains("/*")
}

/// Style entries that may be exported, in key order.
fn exportable(style: Option<&StyleMap>) -> impl Iterator<Item = (&String, &Value)> {
    style.into_iter().flatten().filter(|(key, value)| {
        let keep = is_property_name(key) && !is_geometry_key(key) && !value.is_null();
        if !keep {
            tracing::trace!(%key, "Skipping custom style entry");
        }
        keep
    })
}

/// `fontWeight` -> `font-weight`, `WebkitTransition` -> `-webkit-transition`.
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Append custom styles as CSS declarations (`key:value;`).
pub(crate) fn write_css_declarations(out: &mut String, style: Option<&StyleMap>) {
    for (key, value) in exportable(style) {
        let rendered = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) if UNITLESS_KEYS.contains(&key.as_str()) => n.to_string(),
            Value::Number(n) => format!("{n}px"),
            Value::Bool(_) => continue,
            other => other.to_string(),
        };
        if !is_contained_css_value(&rendered) {
            tracing::debug!(%key, "Dropping custom style value that escapes its declaration");
            continue;
        }
        let _ = write!(out, "{}:{};", kebab_case(key), escape_html(&rendered));
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Append custom styles as object-literal entries (`, key: value`).
pub(crate) fn write_style_record_entries(out: &mut String, style: Option<&StyleMap>) {
    for (key, value) in exportable(style) {
        let key = if is_identifier(key) {
            key.clone()
        } else {
            js_string(key)
        };
        let rendered = match value {
            Value::String(s) => js_string(s),
            other => other.to_string(),
        };
        let _ = write!(out, ", {key}: {rendered}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn styles(entries: &[(&str, Value)]) -> StyleMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_css_declarations() {
        let style = styles(&[
            ("fontWeight", json!(700)),
            ("marginTop", json!(8)),
            ("color", json!("red")),
            ("width", json!(999)),
            ("WebkitUserSelect", json!("none")),
            ("hidden", json!(true)),
            ("border", Value::Null),
        ]);
        let mut out = String::new();
        write_css_declarations(&mut out, Some(&style));
        assert_eq!(
            out,
            "-webkit-user-select:none;color:red;font-weight:700;margin-top:8px;"
        );
    }

    #[test]
    fn test_style_record_entries() {
        let style = styles(&[
            ("color", json!("it's")),
            ("data-x", json!(1)),
            ("opacity", json!(0.5)),
            ("top", json!(0)),
        ]);
        let mut out = String::new();
        write_style_record_entries(&mut out, Some(&style));
        assert_eq!(out, ", color: 'it\\'s', 'data-x': 1, opacity: 0.5");
    }

    #[test]
    fn test_values_cannot_add_declarations() {
        let style = styles(&[
            ("color", json!("red;left:999px;width:1px")),
            ("background", json!("url(a) }")),
            ("border", json!("1px solid /* x")),
            ("outline", json!("none\nleft:0")),
            ("margin", json!("4px")),
        ]);
        let mut out = String::new();
        write_css_declarations(&mut out, Some(&style));
        assert_eq!(out, "margin:4px;");
    }

    #[test]
    fn test_malformed_keys_dropped() {
        let style = styles(&[
            ("x\" onclick=\"alert(1)", json!("y")),
            ("left ", json!(5)),
            ("Top", json!(5)),
            ("", json!("z")),
            ("fontSize", json!(12)),
        ]);
        let mut out = String::new();
        write_css_declarations(&mut out, Some(&style));
        assert_eq!(out, "font-size:12px;");

        let mut record = String::new();
        write_style_record_entries(&mut record, Some(&style));
        assert_eq!(record, ", fontSize: 12");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_html(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(escape_jsx_text("{x} < y"), "&#123;x&#125; &lt; y");
    }
}
