//! # Page Builder Export
//!
//! Turns a [`builder_core::Document`] into text.
//!
//! ## Formats
//!
//! - **Markup**: a standalone HTML page, one absolutely positioned tag per
//!   element
//! - **Typed source**: a React function component (`.tsx`) with optional
//!   setup annotations for routing and data fetching
//! - **JSON**: the canonical project file, loadable with
//!   [`builder_core::ProjectDocument::load`]
//!
//! ```
//! use builder_core::{Document, FeatureConfig};
//! use builder_export::{render, ExportFormat};
//!
//! let html = render(&Document::new(), FeatureConfig::default(), ExportFormat::Markup).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;
pub mod format;

mod kinds;
mod markup;
mod source;
mod style;

pub use error::{ExportError, ExportResult};
pub use export::{render, PageExporter};
pub use format::{ExportFormat, ExportOptions, FILE_STEM};
