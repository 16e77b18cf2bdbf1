//! Export pipeline.
//!
//! A [`Pipeline`] runs the export phases over one project graph:
//!
//! - `validate` - required settings and target sanity, fatal on errors
//! - `folders` - virtual folder tree of the build-configuration files
//! - `classify` - implementation files, other files and matched headers
//! - `aggregate` - compiler and linker settings per target
//!
//! The filled [`ExportContext`] is then handed to the serializer.
//!
//! # Example
//!
//! ```ignore
//! let ctx = Pipeline::new().run(&graph, &policy, &DiskProbe)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! let descriptor = DescriptorSerializer::new(&graph, &policy).render(&ctx.artifacts);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{ExportArtifacts, ExportContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
