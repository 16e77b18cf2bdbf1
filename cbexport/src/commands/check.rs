use std::path::PathBuf;

use cbexport_codegen::{DiskProbe, pipeline::Pipeline};
use cbexport_snapshot::DEFAULT_SNAPSHOT_FILE;
use clap::Args;
use eyre::{Context, Result};

use super::open_snapshot;
use crate::reports::{CheckReport, ProjectCheck, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the build snapshot (defaults to ./cbexport.toml)
    #[arg(short, long, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub snapshot: PathBuf,

    /// Print the diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = open_snapshot(&self.snapshot);
        let snapshot = file.snapshot();
        let pipeline = Pipeline::new();

        let projects = snapshot
            .graphs()
            .iter()
            .map(|graph| match pipeline.run(graph, &snapshot.export, &DiskProbe) {
                Ok(ctx) => ProjectCheck {
                    project: graph.project().name.clone(),
                    diagnostics: ctx.diagnostics,
                    fatal: None,
                },
                Err(err) => ProjectCheck {
                    project: graph.project().name.clone(),
                    diagnostics: Vec::new(),
                    fatal: Some(format!("{:#}", err)),
                },
            })
            .collect();

        let report = CheckReport {
            snapshot: self.snapshot.clone(),
            projects,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
