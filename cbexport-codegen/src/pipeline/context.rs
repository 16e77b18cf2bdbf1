//! Export context passed through pipeline phases.

use cbexport_graph::{BuildGraph, ExportPolicy};
use indexmap::IndexMap;

use super::diagnostic::{Diagnostic, Severity};
use crate::{AggregatedSettings, ClassifiedSources, FileProbe, PathTrie};

/// Everything the serializer needs besides the graph itself.
#[derive(Debug, Clone, Default)]
pub struct ExportArtifacts {
    /// Virtual folders of the build-configuration files (folders phase).
    pub trie: PathTrie,
    /// Classified project sources (classify phase).
    pub sources: ClassifiedSources,
    /// Settings of every buildable target by name (aggregate phase).
    pub settings: IndexMap<String, AggregatedSettings>,
}

/// State of one project's export as it moves through the phases.
pub struct ExportContext<'a> {
    pub graph: &'a dyn BuildGraph,
    pub policy: &'a ExportPolicy,
    pub probe: &'a dyn FileProbe,
    pub artifacts: ExportArtifacts,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> ExportContext<'a> {
    pub fn new(
        graph: &'a dyn BuildGraph,
        policy: &'a ExportPolicy,
        probe: &'a dyn FileProbe,
    ) -> Self {
        Self {
            graph,
            policy,
            probe,
            artifacts: ExportArtifacts::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use cbexport_graph::{BuildSettings, Project, ProjectView};

    use super::*;
    use crate::DiskProbe;

    #[test]
    fn test_context_diagnostics() {
        let settings = BuildSettings::new("/src", "/build");
        let project = Project::new("demo", "/build");
        let view = ProjectView::new(&settings, &project);
        let policy = ExportPolicy::default();
        let mut ctx = ExportContext::new(&view, &policy, &DiskProbe);

        assert!(ctx.artifacts.trie.is_empty());
        assert!(ctx.diagnostics.is_empty());

        ctx.add_warning("test", "just a warning");
        ctx.add_info("test", "just info");
        assert!(!ctx.has_errors());
        assert!(ctx.has_warnings());

        ctx.add_error("test", "an error");
        assert!(ctx.has_errors());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warnings().count(), 1);
    }
}
