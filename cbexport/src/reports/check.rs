//! Check command report data structures.

use std::path::PathBuf;

use cbexport_codegen::pipeline::{Diagnostic, Severity};
use serde::Serialize;

use super::output::{Output, Report};

/// Validation result of one project.
#[derive(Debug, Serialize)]
pub struct ProjectCheck {
    pub project: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Set when validation stopped the export of this project.
    pub fatal: Option<String>,
}

impl ProjectCheck {
    pub fn is_valid(&self) -> bool {
        self.fatal.is_none() && !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Report data from snapshot validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the snapshot file.
    pub snapshot: PathBuf,
    pub projects: Vec<ProjectCheck>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.projects.iter().all(ProjectCheck::is_valid)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let mut noisy = false;
        for project in &self.projects {
            for diag in &project.diagnostics {
                let mut msg = format!("{}: {}", project.project, diag.message);
                if let Some(loc) = &diag.location {
                    msg.push_str(&format!("\n  --> {}", loc));
                }
                match diag.severity {
                    Severity::Error => out.error(&msg),
                    Severity::Warning => out.warning(&msg),
                    Severity::Info => out.preformatted(&format!("info: {}", msg)),
                }
                noisy = true;
            }
            if let Some(fatal) = &project.fatal {
                out.error(fatal);
                noisy = true;
            }
        }

        if noisy {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.snapshot.display()));
        }
    }
}
