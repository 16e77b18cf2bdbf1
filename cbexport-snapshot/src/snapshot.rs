use std::path::Path;

use cbexport_graph::{BuildSettings, ExportPolicy, Project, ProjectView};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, SourceContext, validate};

/// Encoding of a snapshot file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None | Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            Some(other) => Err(Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            })),
        }
    }
}

/// A resolved build: global settings plus one entry per sub-project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub build: BuildSettings,
    #[serde(default)]
    pub export: ExportPolicy,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Snapshot {
    /// Parse a TOML snapshot (uses "cbexport.toml" as default filename)
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, crate::DEFAULT_SNAPSHOT_FILE, Format::Toml)
    }

    /// Parse a snapshot with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str, format: Format) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let snapshot: Snapshot = match format {
            Format::Toml => toml::from_str(content).map_err(|e| ctx.parse_error(e))?,
            Format::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e))?,
        };

        validate::validate(&snapshot, &ctx)?;
        tracing::debug!(
            file = filename,
            projects = snapshot.projects.len(),
            "parsed snapshot"
        );
        Ok(snapshot)
    }

    /// One build-graph view per project, in declaration order.
    ///
    /// Link items of a project may resolve to targets of any other project
    /// of the same build.
    pub fn graphs(&self) -> Vec<ProjectView<'_>> {
        self.projects
            .iter()
            .map(|project| ProjectView::new(&self.build, project).with_siblings(&self.projects))
            .collect()
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }
}
