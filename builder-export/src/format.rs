//! Export formats and their options.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};

/// Base name for downloaded files.
pub const FILE_STEM: &str = "my-page";

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// Static HTML page with inline absolute positioning.
    Markup,
    /// Self-contained React function component (`.tsx`).
    TypedSource,
    /// Canonical project JSON, loadable again.
    Json,
}

impl ExportFormat {
    /// Every format, in picker order.
    pub const ALL: [Self; 3] = [Self::Markup, Self::TypedSource, Self::Json];

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::TypedSource => "typed-source",
            Self::Json => "json",
        }
    }

    /// File extension for downloads.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::TypedSource => "tsx",
            Self::Json => "json",
        }
    }

    /// Download file name, e.g. `my-page.tsx`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{FILE_STEM}.{}", self.file_extension())
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markup" | "html" => Ok(Self::Markup),
            "typed-source" | "react" | "tsx" => Ok(Self::TypedSource),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Naming options for generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Name of the generated React component.
    pub component_name: String,
    /// `<title>` of the generated HTML page.
    pub page_title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            component_name: "MyPage".to_string(),
            page_title: "My Web Page".to_string(),
        }
    }
}

impl ExportOptions {
    /// Use `name` for the generated component.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidOption`] unless `name` starts with an
    /// ASCII capital and continues with ASCII letters, digits or `_`.
    pub fn with_component_name(mut self, name: impl Into<String>) -> ExportResult<Self> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(ExportError::InvalidOption(format!(
                "component name {name:?} must be a PascalCase identifier"
            )));
        }
        self.component_name = name;
        Ok(self)
    }

    /// Use `title` for the HTML page title.
    #[must_use]
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }
}
