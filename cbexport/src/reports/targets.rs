//! Targets command report data structures.

use super::output::{Output, Report};

/// One target as it appears in a project file.
#[derive(Debug, PartialEq, Eq)]
pub struct TargetRow {
    pub name: String,
    pub kind: &'static str,
    pub type_code: u8,
}

/// Targets of every project.
#[derive(Debug, Default)]
pub struct TargetsReport {
    pub projects: Vec<(String, Vec<TargetRow>)>,
}

impl Report for TargetsReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, (project, targets)) in self.projects.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(project);
            if targets.is_empty() {
                out.preformatted("  (no targets)");
            }
            for target in targets {
                out.list_item(&format!(
                    "{} ({}, type {})",
                    target.name, target.kind, target.type_code
                ));
            }
        }
    }
}
