//! The read-only interface the generator consumes.

use serde::{Deserialize, Serialize};

use crate::{BuildSettings, Target};

/// Read-only view of one sub-project of a resolved build.
pub trait BuildGraph {
    /// Name of the sub-project; also the descriptor's file stem.
    fn project_name(&self) -> &str;

    /// Directory the descriptor is written to.
    fn output_directory(&self) -> &str;

    /// Global settings of the build.
    fn settings(&self) -> &BuildSettings;

    /// Targets of this sub-project in discovery order.
    fn targets(&self) -> &[Target];

    /// Build-configuration files read while configuring this sub-project.
    fn list_files(&self) -> &[String];

    /// Resolve a link item to a target of the build.
    fn find_target(&self, name: &str) -> Option<&Target> {
        self.targets().iter().find(|t| t.name == name)
    }
}

/// One sub-project as stored in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub output_directory: String,
    #[serde(default)]
    pub list_files: Vec<String>,
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl Project {
    pub fn new(name: impl Into<String>, output_directory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_directory: output_directory.into(),
            list_files: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    pub fn with_list_file(mut self, path: impl Into<String>) -> Self {
        self.list_files.push(path.into());
        self
    }
}

/// [`BuildGraph`] adapter over a [`Project`] and the settings it belongs to.
///
/// Link items resolve against the project's own targets first, then against
/// the targets of the sibling projects of the same build.
#[derive(Debug, Clone, Copy)]
pub struct ProjectView<'a> {
    settings: &'a BuildSettings,
    project: &'a Project,
    siblings: &'a [Project],
}

impl<'a> ProjectView<'a> {
    pub fn new(settings: &'a BuildSettings, project: &'a Project) -> Self {
        Self {
            settings,
            project,
            siblings: &[],
        }
    }

    /// Also resolve link items against the targets of `siblings`.
    pub fn with_siblings(mut self, siblings: &'a [Project]) -> Self {
        self.siblings = siblings;
        self
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }
}

impl BuildGraph for ProjectView<'_> {
    fn project_name(&self) -> &str {
        &self.project.name
    }

    fn output_directory(&self) -> &str {
        &self.project.output_directory
    }

    fn settings(&self) -> &BuildSettings {
        self.settings
    }

    fn targets(&self) -> &[Target] {
        &self.project.targets
    }

    fn list_files(&self) -> &[String] {
        &self.project.list_files
    }

    fn find_target(&self, name: &str) -> Option<&Target> {
        self.project
            .targets
            .iter()
            .chain(self.siblings.iter().flat_map(|p| p.targets.iter()))
            .find(|t| t.name == name)
    }
}
