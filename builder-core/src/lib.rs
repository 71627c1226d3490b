//! # Page Builder Core
//!
//! Headless design-surface model for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                builder-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Surface Model     │  Document              │
//! │  - Draw / drop     │  - Ordered elements    │
//! │  - Move / patch    │  - Immutable snapshots │
//! │  - Gesture guard   │  - Hit testing         │
//! ├─────────────────────────────────────────────┤
//! │  Schema            │  Templates             │
//! │  - Project JSON    │  - Starting documents  │
//! │  - Feature flags   │  - Id sources          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The surface model never touches rendering or storage. Callers pass
//! surface-relative coordinates and receive new [`Document`] snapshots.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod ids;
pub mod schema;
pub mod surface;
pub mod template;

pub use config::FeatureConfig;
pub use document::Document;
pub use element::{Element, ElementId, ElementKind, ElementPatch, KindDescriptor, StyleMap};
pub use error::{LayoutError, LayoutResult};
pub use geometry::{Delta, Point, Rect, Size, MIN_DRAW_EXTENT};
pub use gesture::{Gesture, GestureOutcome};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use schema::{ComponentRecord, ProjectDocument};
pub use surface::{GestureKind, SurfaceModel};
pub use template::Template;

/// Builder core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
