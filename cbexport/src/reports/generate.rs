//! Generate command report data structures.

use std::path::PathBuf;

use cbexport_codegen::{ExportOutcome, pipeline::Severity};

use super::output::{Output, Report};

/// A project file that was written.
#[derive(Debug)]
pub struct WrittenProject {
    pub path: PathBuf,
    pub markers: Vec<PathBuf>,
}

/// A project file rendered during a dry run.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Report data from an export pass.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub written: Vec<WrittenProject>,
    pub previews: Vec<PreviewFile>,
    /// Project name and reason for every abandoned project.
    pub abandoned: Vec<(String, String)>,
    pub warnings: Vec<String>,
}

impl GenerateReport {
    pub fn from_outcomes(outcomes: Vec<ExportOutcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            for diag in outcome.diagnostics() {
                if diag.severity == Severity::Warning {
                    report
                        .warnings
                        .push(format!("{}: {}", outcome.project(), diag.message));
                }
            }

            match outcome {
                ExportOutcome::Written { path, markers, .. } => {
                    report.written.push(WrittenProject { path, markers });
                }
                ExportOutcome::Rendered {
                    path, descriptor, ..
                } => report.previews.push(PreviewFile {
                    path,
                    content: descriptor.content,
                }),
                ExportOutcome::Abandoned { project, reason } => {
                    report.abandoned.push((project, reason));
                }
            }
        }
        report
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for (project, reason) in &self.abandoned {
            out.warning(&format!("skipped project '{}': {}", project, reason));
        }

        if !self.previews.is_empty() {
            for file in &self.previews {
                out.divider(&file.path.display().to_string());
                out.preformatted(&file.content);
            }
            out.divider("Summary");
            out.preformatted(&format!(
                "{} project file{} would be generated",
                self.previews.len(),
                if self.previews.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        if !self.written.is_empty() {
            out.section("Generated");
            for project in &self.written {
                out.added_item(&project.path.display().to_string());
                for marker in &project.markers {
                    out.added_item(&marker.display().to_string());
                }
            }
        }
    }
}
