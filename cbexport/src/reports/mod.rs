//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod targets;

pub use check::{CheckReport, ProjectCheck};
pub use generate::GenerateReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
pub use targets::{TargetRow, TargetsReport};
