//! Pipeline phase trait.

use eyre::Result;

use super::ExportContext;

/// A phase in the export pipeline.
///
/// Phases run in order. Each one reads the project graph and fills part
/// of the context's artifacts or diagnostics.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the export context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut ExportContext<'_>) -> Result<()>;
}
