//! Code::Blocks project file generation for resolved builds.
//!
//! This crate turns a [`BuildGraph`](cbexport_graph::BuildGraph) into one
//! `.cbp` descriptor per sub-project.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`xml`] - Element model and attribute escaping
//! - [`compiler`] - Compiler tokens and target type codes
//! - [`pipeline`] - Export phases and diagnostics
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod compiler;
pub mod pipeline;
pub mod xml;

mod build_command;
mod classify;
mod export;
mod serializer;
mod settings;
mod trie;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use build_command::{Host, build_command};
pub use classify::{ClassifiedSources, DiskProbe, FileProbe, SourceClassifier};
pub use export::{ExportError, ExportOutcome, Exporter};
pub use pipeline::ExportArtifacts;
pub use serializer::{Descriptor, DescriptorSerializer, ObjectLibraryMarker};
pub use settings::{AggregatedSettings, LinkEntry, SettingsAggregator};
pub use trie::{FileEntry, PathTrie, ROOT_FOLDER};
