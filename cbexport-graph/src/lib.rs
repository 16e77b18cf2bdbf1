//! Build graph model for the cbexport project generator.
//!
//! These types describe an already-resolved build: the targets of each
//! sub-project, their sources and settings, and the global definitions the
//! upstream build system computed. The generator never mutates them.
//!
//! # Architecture
//!
//! ```text
//! snapshot (TOML/JSON) → cbexport-snapshot (parsing) → cbexport-graph (model) → codegen
//! ```
//!
//! The code generator depends only on the [`BuildGraph`] trait, so any other
//! representation of a build can be exported by implementing it.

mod graph;
mod policy;
mod settings;
mod target;
mod types;

pub use graph::{BuildGraph, Project, ProjectView};
pub use policy::{ExportPolicy, RefreshStyle};
pub use settings::{BuildSettings, DEFAULT_HEADER_EXTENSIONS, DEFAULT_SOURCE_EXTENSIONS};
pub use target::{SourceFile, Target};
pub use types::{Language, LanguageSet, TargetKind};
