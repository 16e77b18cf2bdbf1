//! Export options read from the snapshot or the command line.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the descriptor asks the IDE to re-run configuration before a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshStyle {
    /// A project-level `ExtraCommands` block run before every build.
    #[default]
    ExtraCommands,
    /// A dedicated `rebuild_cache` command-only target.
    RebuildTarget,
    /// No refresh step.
    None,
}

impl RefreshStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshStyle::ExtraCommands => "extra-commands",
            RefreshStyle::RebuildTarget => "rebuild-target",
            RefreshStyle::None => "none",
        }
    }
}

impl fmt::Display for RefreshStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RefreshStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extra-commands" | "extra" => Ok(RefreshStyle::ExtraCommands),
            "rebuild-target" | "target" => Ok(RefreshStyle::RebuildTarget),
            "none" => Ok(RefreshStyle::None),
            _ => Err(format!(
                "unknown refresh style '{}', expected 'extra-commands', 'rebuild-target' or 'none'",
                s
            )),
        }
    }
}

/// Per-feature switches of the descriptor generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportPolicy {
    /// List the owning targets of every implementation file.
    pub unit_targets: bool,
    pub refresh: RefreshStyle,
    /// Keep build-configuration files that sit directly in the source root.
    pub root_list_files: bool,
    /// Extension of the descriptor file.
    pub extension: String,
}

impl Default for ExportPolicy {
    fn default() -> Self {
        Self {
            unit_targets: true,
            refresh: RefreshStyle::default(),
            root_list_files: false,
            extension: "cbp".to_string(),
        }
    }
}
