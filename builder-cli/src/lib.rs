//! # Page Builder CLI
//!
//! Headless front end for the page builder. Each invocation loads a project
//! file (or starts blank), applies one operation, and prints the resulting
//! project JSON or an export.
//!
//! ```text
//! page-builder new --template landing --router > page.json
//! page-builder place --input page.json --kind button --from 10,20 --to 90,50 -o page.json
//! page-builder export --input page.json --format typed-source
//! ```
//!
//! ## Components
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `CliConfig` - Resolved feature flags, paths and the operation to run
//! - [`execute`] - Runs one operation and returns its text output

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use builder_core::{
    Delta, Document, ElementId, ElementKind, ElementPatch, FeatureConfig, Point, ProjectDocument,
    Size, SurfaceModel, Template,
};
use builder_export::{ExportFormat, ExportOptions, PageExporter};
use clap::{Parser, Subcommand};

/// Command-line arguments for page-builder.
#[derive(Debug, Clone, Parser)]
#[command(name = "page-builder")]
#[command(about = "Headless page-layout editor and exporter")]
#[command(version)]
pub struct CliArgs {
    /// Project file to read (starts from a blank page when omitted)
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,

    /// File to write instead of stdout
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Enable React Router annotations
    #[arg(long, global = true, env = "PAGE_BUILDER_ROUTER")]
    pub router: bool,

    /// Enable RTK Query annotations
    #[arg(long, global = true, env = "PAGE_BUILDER_RTK_QUERY")]
    pub rtk_query: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations on a project.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the built-in templates
    Templates,

    /// Start a project from a template
    New {
        /// Template id
        #[arg(long, default_value = builder_core::template::BLANK_TEMPLATE)]
        template: String,
    },

    /// Create an element by dragging out a rectangle
    Place {
        /// Element kind
        #[arg(long)]
        kind: ElementKind,
        /// Drag start as `x,y`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        /// Drag end as `x,y`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
    },

    /// Create an element at a point with its default size
    Drop {
        /// Element kind
        #[arg(long)]
        kind: ElementKind,
        /// Top-left corner as `x,y`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        at: Point,
        /// Size as `WxH` (kind default when omitted)
        #[arg(long, value_parser = parse_size)]
        size: Option<Size>,
    },

    /// Move an element by a displacement
    Move {
        /// Element id
        #[arg(long)]
        id: String,
        /// Displacement as `dx,dy`
        #[arg(long, value_parser = parse_delta, allow_hyphen_values = true)]
        by: Delta,
    },

    /// Merge a JSON field patch into an element
    Patch {
        /// Element id
        #[arg(long)]
        id: String,
        /// Patch object, e.g. `{"content":"Hello"}`
        #[arg(long)]
        patch: String,
    },

    /// Export the project
    Export {
        /// markup, typed-source or json
        #[arg(long, default_value = "markup")]
        format: ExportFormat,
        /// Component name for typed source
        #[arg(long)]
        component_name: Option<String>,
        /// Page title for markup
        #[arg(long)]
        title: Option<String>,
    },
}

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Project file to read.
    pub input: Option<PathBuf>,
    /// Destination file, stdout when `None`.
    pub output: Option<PathBuf>,
    /// Feature flags requested on the command line.
    pub features: FeatureConfig,
    /// Operation to run.
    pub command: Command,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            features: FeatureConfig::new(args.router, args.rtk_query),
            command: args.command,
        }
    }
}

fn parse_pair(value: &str, separator: char) -> Result<(f64, f64), String> {
    let (a, b) = value
        .split_once(separator)
        .ok_or_else(|| format!("expected two numbers separated by '{separator}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("{part:?}: {e}"))
            .and_then(|n| {
                if n.is_finite() {
                    Ok(n)
                } else {
                    Err(format!("{part:?} is not finite"))
                }
            })
    };
    Ok((parse(a)?, parse(b)?))
}

fn parse_point(value: &str) -> Result<Point, String> {
    parse_pair(value, ',').map(|(x, y)| Point::new(x, y))
}

fn parse_delta(value: &str) -> Result<Delta, String> {
    parse_pair(value, ',').map(|(dx, dy)| Delta::new(dx, dy))
}

fn parse_size(value: &str) -> Result<Size, String> {
    let size = parse_pair(value, 'x').map(|(w, h)| Size::new(w, h))?;
    if size.is_valid() {
        Ok(size)
    } else {
        Err("width and height must not be negative".to_string())
    }
}

/// Load a project, or a blank one when no path is given.
fn load_project(path: Option<&Path>) -> Result<(FeatureConfig, Document)> {
    let Some(path) = path else {
        return Ok((FeatureConfig::default(), Document::new()));
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let project = ProjectDocument::load(&json)
        .with_context(|| format!("Invalid project file {}", path.display()))?;
    tracing::debug!("Loaded {} elements from {}", project.1.len(), path.display());
    Ok(project)
}

fn project_json(features: FeatureConfig, document: &Document) -> Result<String> {
    let mut json = ProjectDocument::new(features, document).to_json_pretty()?;
    json.push('\n');
    Ok(json)
}

fn list_templates() -> String {
    let mut listing = String::new();
    for template in Template::builtin() {
        let _ = writeln!(listing, "{}\t{} {}", template.id, template.thumbnail, template.name);
    }
    listing
}

/// Load the input project onto a surface.
///
/// The loaded feature flags are kept, plus any enabled on the command line.
fn open(config: &CliConfig) -> Result<(FeatureConfig, SurfaceModel)> {
    let (loaded, document) = load_project(config.input.as_deref())?;
    let features = FeatureConfig::new(
        loaded.use_router || config.features.use_router,
        loaded.use_rtk_query || config.features.use_rtk_query,
    );
    Ok((features, SurfaceModel::from_document(document)))
}

fn warn_if_absent(surface: &SurfaceModel, id: &ElementId) {
    if !surface.document().contains(id) {
        tracing::warn!("No element '{}', document unchanged", id);
    }
}

/// Run one operation and return the text it produces.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the operation
/// is rejected by the surface model or exporter.
pub fn execute(config: &CliConfig) -> Result<String> {
    match &config.command {
        Command::Templates => Ok(list_templates()),
        Command::New { template } => {
            let document = Template::find(template)?.document()?;
            tracing::info!("New project from template '{}'", template);
            project_json(config.features, &document)
        }
        Command::Place { kind, from, to } => {
            let (features, mut surface) = open(config)?;
            surface.arm(*kind)?;
            match surface.create_by_drag(*from, *to)? {
                Some(element) => tracing::info!("Placed {}", element.id),
                None => tracing::warn!("Drag too small, nothing placed"),
            }
            project_json(features, surface.document())
        }
        Command::Drop { kind, at, size } => {
            let (features, mut surface) = open(config)?;
            let element = surface.create_by_drop(*kind, *at, *size)?;
            tracing::info!("Dropped {}", element.id);
            project_json(features, surface.document())
        }
        Command::Move { id, by } => {
            let (features, mut surface) = open(config)?;
            let id = ElementId::new(id.as_str());
            warn_if_absent(&surface, &id);
            let document = surface.move_by(&id, *by)?;
            project_json(features, &document)
        }
        Command::Patch { id, patch } => {
            let patch: ElementPatch = serde_json::from_str(patch)
                .context("Patch must be a JSON object of element fields")?;
            let (features, mut surface) = open(config)?;
            let id = ElementId::new(id.as_str());
            warn_if_absent(&surface, &id);
            let document = surface.patch(&id, &patch)?;
            project_json(features, &document)
        }
        Command::Export {
            format,
            component_name,
            title,
        } => {
            let (features, surface) = open(config)?;
            let mut options = ExportOptions::default();
            if let Some(name) = component_name {
                options = options.with_component_name(name.as_str())?;
            }
            if let Some(title) = title {
                options = options.with_page_title(title.as_str());
            }
            let text = PageExporter::new(options).render(surface.document(), features, *format)?;
            tracing::info!("Exported {} as {}", format.file_name(), format);
            Ok(text)
        }
    }
}

/// Run one operation and write its output.
///
/// # Errors
///
/// See [`execute`]; also fails if the output file cannot be written.
pub fn run(config: &CliConfig) -> Result<()> {
    let text = execute(config)?;
    match &config.output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_defaults() {
        let args = CliArgs::try_parse_from(["page-builder", "new"]).expect("parse");
        let config = CliConfig::from(args);
        assert_eq!(config.features, FeatureConfig::default());
        assert!(config.input.is_none());
        assert!(matches!(config.command, Command::New { ref template } if template == "blank"));
    }

    #[test]
    fn test_cli_args_flags_and_negative_coordinates() {
        let args = CliArgs::try_parse_from([
            "page-builder",
            "move",
            "--id",
            "text-1",
            "--by",
            "-10,2.5",
            "--router",
        ])
        .expect("parse");
        let config = CliConfig::from(args);
        assert_eq!(config.features, FeatureConfig::new(true, false));
        match config.command {
            Command::Move { id, by } => {
                assert_eq!(id, "text-1");
                assert_eq!(by, Delta::new(-10.0, 2.5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_value_parsers() {
        assert_eq!(parse_point("3, 4"), Ok(Point::new(3.0, 4.0)));
        assert_eq!(parse_size("120x40"), Ok(Size::new(120.0, 40.0)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("NaN,1").is_err());
        assert!(parse_size("-1x4").is_err());
    }

    #[test]
    fn test_unknown_kind_and_format_rejected() {
        assert!(CliArgs::try_parse_from([
            "page-builder", "drop", "--kind", "video", "--at", "0,0"
        ])
        .is_err());
        assert!(CliArgs::try_parse_from(["page-builder", "export", "--format", "pdf"]).is_err());
    }
}
