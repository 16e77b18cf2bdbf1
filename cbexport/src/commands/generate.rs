use std::path::PathBuf;

use cbexport_codegen::Exporter;
use cbexport_graph::{ExportPolicy, RefreshStyle};
use cbexport_snapshot::DEFAULT_SNAPSHOT_FILE;
use clap::Args;
use eyre::{Context, Result};

use super::open_snapshot;
use crate::reports::{GenerateReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the build snapshot (defaults to ./cbexport.toml)
    #[arg(short, long, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub snapshot: PathBuf,

    /// Print the project files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// How project files re-run configuration (extra-commands, rebuild-target, none)
    #[arg(long)]
    pub refresh: Option<RefreshStyle>,

    /// Omit the owning targets of each source unit
    #[arg(long)]
    pub no_unit_targets: bool,

    /// Also list build files that sit directly in the source root
    #[arg(long)]
    pub root_list_files: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut file = open_snapshot(&self.snapshot);
        self.apply_overrides(&mut file.snapshot_mut().export);
        let snapshot = file.snapshot();

        let exporter = Exporter::new(snapshot.export.clone()).dry_run(self.dry_run);
        let outcomes = exporter
            .export_all(snapshot.graphs())
            .wrap_err("Export failed")?;

        GenerateReport::from_outcomes(outcomes).render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Command-line flags win over the snapshot's `[export]` table.
    fn apply_overrides(&self, policy: &mut ExportPolicy) {
        if let Some(refresh) = self.refresh {
            policy.refresh = refresh;
        }
        if self.no_unit_targets {
            policy.unit_targets = false;
        }
        if self.root_list_files {
            policy.root_list_files = true;
        }
    }
}
