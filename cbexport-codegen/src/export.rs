//! Writing project files for every project of a build.

use std::path::{Path, PathBuf};

use cbexport_core::GeneratedFile;
use cbexport_graph::{BuildGraph, ExportPolicy};
use eyre::{Result, WrapErr};
use thiserror::Error;

use crate::{
    Descriptor, DescriptorSerializer, DiskProbe, FileProbe,
    pipeline::{Diagnostic, ExportContext, Pipeline},
};

/// Failures that stop the whole export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("project '{project}' is missing the required setting '{setting}'")]
    MissingSetting {
        project: String,
        setting: &'static str,
    },

    #[error("project '{project}' failed validation with {count} error(s)")]
    Invalid { project: String, count: usize },

    #[error("the IDE program must not be empty")]
    EmptyIdeProgram,
}

/// What happened to one project.
#[derive(Debug)]
pub enum ExportOutcome {
    /// The project file and its markers were written.
    Written {
        project: String,
        path: PathBuf,
        markers: Vec<PathBuf>,
        diagnostics: Vec<Diagnostic>,
    },
    /// Nothing was written because the output could not be opened.
    Abandoned { project: String, reason: String },
    /// Dry run: the project file was rendered but not written.
    Rendered {
        project: String,
        path: PathBuf,
        descriptor: Descriptor,
        diagnostics: Vec<Diagnostic>,
    },
}

impl ExportOutcome {
    pub fn project(&self) -> &str {
        match self {
            ExportOutcome::Written { project, .. }
            | ExportOutcome::Abandoned { project, .. }
            | ExportOutcome::Rendered { project, .. } => project,
        }
    }

    pub fn is_abandoned(&self) -> bool {
        matches!(self, ExportOutcome::Abandoned { .. })
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ExportOutcome::Written { diagnostics, .. }
            | ExportOutcome::Rendered { diagnostics, .. } => diagnostics,
            ExportOutcome::Abandoned { .. } => &[],
        }
    }
}

/// Runs the pipeline and writes the result for each project graph.
///
/// # Example
///
/// ```ignore
/// let exporter = Exporter::new(snapshot.export.clone());
/// for outcome in exporter.export_all(snapshot.graphs())? {
///     println!("{}", outcome.project());
/// }
/// ```
pub struct Exporter<'p> {
    policy: ExportPolicy,
    probe: &'p dyn FileProbe,
    pipeline: Pipeline,
    dry_run: bool,
}

impl Exporter<'static> {
    /// An exporter that probes the filesystem for headers.
    pub fn new(policy: ExportPolicy) -> Self {
        Self::with_probe(policy, &DiskProbe)
    }
}

impl<'p> Exporter<'p> {
    pub fn with_probe(policy: ExportPolicy, probe: &'p dyn FileProbe) -> Self {
        Self {
            policy,
            probe,
            pipeline: Pipeline::new(),
            dry_run: false,
        }
    }

    /// Render without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn policy(&self) -> &ExportPolicy {
        &self.policy
    }

    /// Export every graph in order.
    ///
    /// Every graph runs through the pipeline before anything is written, so
    /// a validation failure in any project aborts the pass with no files
    /// on disk. A project whose output cannot be opened is abandoned and
    /// the rest continue.
    pub fn export_all<G: BuildGraph>(
        &self,
        graphs: impl IntoIterator<Item = G>,
    ) -> Result<Vec<ExportOutcome>> {
        let graphs: Vec<G> = graphs.into_iter().collect();
        let contexts = graphs
            .iter()
            .map(|graph| self.prepare(graph))
            .collect::<Result<Vec<_>>>()?;

        Ok(graphs
            .iter()
            .zip(contexts)
            .map(|(graph, ctx)| self.finish(graph, ctx))
            .collect())
    }

    pub fn export(&self, graph: &dyn BuildGraph) -> Result<ExportOutcome> {
        let ctx = self.prepare(graph)?;
        Ok(self.finish(graph, ctx))
    }

    fn prepare<'a>(&'a self, graph: &'a dyn BuildGraph) -> Result<ExportContext<'a>> {
        let project = graph.project_name();
        let ctx = self
            .pipeline
            .run(graph, &self.policy, self.probe)
            .wrap_err_with(|| format!("failed to export project '{}'", project))?;

        for diag in &ctx.diagnostics {
            tracing::debug!(project = %project, phase = %diag.phase, "{}", diag);
        }
        Ok(ctx)
    }

    fn finish(&self, graph: &dyn BuildGraph, ctx: ExportContext<'_>) -> ExportOutcome {
        let project = graph.project_name().to_string();
        let descriptor = DescriptorSerializer::new(graph, &self.policy).render(&ctx.artifacts);
        let output_dir = Path::new(graph.output_directory());
        let path = descriptor.path(output_dir);
        let diagnostics = ctx.diagnostics;

        if self.dry_run {
            return ExportOutcome::Rendered {
                project,
                path,
                descriptor,
                diagnostics,
            };
        }

        if let Err(err) = descriptor.write(output_dir) {
            tracing::warn!(project = %project, path = %path.display(), "abandoning project: {:#}", err);
            return ExportOutcome::Abandoned {
                project,
                reason: format!("{:#}", err),
            };
        }
        tracing::info!(project = %project, path = %path.display(), "wrote project file");

        let mut markers = Vec::new();
        for marker in &descriptor.markers {
            let marker_path = marker.path(output_dir);
            match marker.write(output_dir) {
                Ok(_) => markers.push(marker_path),
                Err(err) => tracing::warn!(
                    target = %marker.target,
                    path = %marker_path.display(),
                    "could not write object library marker: {:#}",
                    err
                ),
            }
        }

        ExportOutcome::Written {
            project,
            path,
            markers,
            diagnostics,
        }
    }
}
