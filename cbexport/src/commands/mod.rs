mod build_command;
mod check;
mod completions;
mod generate;
mod targets;

use std::path::Path;

use build_command::BuildCommandCommand;
use cbexport_snapshot::SnapshotFile;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use targets::TargetsCommand;

/// Extension trait for exiting on snapshot errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cbexport_snapshot::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open a snapshot, exiting with a rendered diagnostic on failure.
pub(crate) fn open_snapshot(path: &Path) -> SnapshotFile {
    SnapshotFile::open(path).unwrap_or_exit()
}

#[derive(Parser)]
#[command(name = "cbexport")]
#[command(version)]
#[command(about = "Generate Code::Blocks project files from a build snapshot")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Targets(cmd) => cmd.run(),
            Commands::BuildCommand(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a project file for every project in the snapshot
    Generate(GenerateCommand),

    /// Validate the snapshot without writing anything
    Check(CheckCommand),

    /// List the targets that would appear in each project file
    Targets(TargetsCommand),

    /// Print the IDE command line that builds a target
    BuildCommand(BuildCommandCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
