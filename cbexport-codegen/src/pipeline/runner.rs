//! Pipeline orchestrator.

use cbexport_graph::{BuildGraph, ExportPolicy};
use eyre::Result;

use super::{
    ExportContext, Phase,
    phases::{AggregatePhase, ClassifyPhase, FoldersPhase, ValidatePhase},
};
use crate::FileProbe;

/// The export pipeline orchestrator.
///
/// Runs the built-in phases (validate, folders, classify, aggregate)
/// followed by any extra phases.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on one project graph.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. A failed validation
    /// carries an [`ExportError`](crate::ExportError).
    pub fn run<'a>(
        &self,
        graph: &'a dyn BuildGraph,
        policy: &'a ExportPolicy,
        probe: &'a dyn FileProbe,
    ) -> Result<ExportContext<'a>> {
        let mut ctx = ExportContext::new(graph, policy, probe);

        let builtin_phases: [Box<dyn Phase>; 4] = [
            Box::new(ValidatePhase),
            Box::new(FoldersPhase),
            Box::new(ClassifyPhase),
            Box::new(AggregatePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            tracing::debug!(
                project = graph.project_name(),
                phase = phase.name(),
                "running phase"
            );
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
