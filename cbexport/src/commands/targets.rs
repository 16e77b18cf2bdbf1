use std::path::PathBuf;

use cbexport_codegen::compiler::{is_emitted, target_type_code};
use cbexport_graph::Project;
use cbexport_snapshot::DEFAULT_SNAPSHOT_FILE;
use clap::Args;
use eyre::Result;

use super::open_snapshot;
use crate::reports::{Report, TargetRow, TargetsReport, TerminalOutput};

#[derive(Args)]
pub struct TargetsCommand {
    /// Path to the build snapshot (defaults to ./cbexport.toml)
    #[arg(short, long, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub snapshot: PathBuf,

    /// Only list the targets of this project
    #[arg(short, long)]
    pub project: Option<String>,
}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        let file = open_snapshot(&self.snapshot);
        let snapshot = file.snapshot();

        let projects: Vec<&Project> = match &self.project {
            Some(name) => match snapshot.project(name) {
                Some(project) => vec![project],
                None => eyre::bail!(
                    "no project named '{}' in {}",
                    name,
                    self.snapshot.display()
                ),
            },
            None => snapshot.projects.iter().collect(),
        };

        let report = TargetsReport {
            projects: projects
                .into_iter()
                .map(|p| (p.name.clone(), rows(p)))
                .collect(),
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

/// Targets that get a block in the project file, in file order.
fn rows(project: &Project) -> Vec<TargetRow> {
    project
        .targets
        .iter()
        .filter(|t| is_emitted(t))
        .map(|t| TargetRow {
            name: t.name.clone(),
            kind: t.kind.as_str(),
            type_code: target_type_code(t),
        })
        .collect()
}
