//! Snapshot files describing a configured build.
//!
//! A snapshot is a TOML (or JSON) document holding the global
//! [`BuildSettings`](cbexport_graph::BuildSettings), the optional
//! [`ExportPolicy`](cbexport_graph::ExportPolicy) and one entry per
//! sub-project. Parse errors and validation failures are reported as
//! [`miette`] diagnostics pointing into the source text.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod snapshot;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::SnapshotFile;
pub use snapshot::{Format, Snapshot};
pub use validate::find_name_span;

/// Default snapshot file name looked up by the command line.
pub const DEFAULT_SNAPSHOT_FILE: &str = "cbexport.toml";
