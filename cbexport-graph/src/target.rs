//! Build targets and their source files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Language, TargetKind};

/// A source file listed by a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Full path of the file.
    pub path: String,
    /// Language tag, absent for files the build system does not compile.
    #[serde(default)]
    pub language: Option<Language>,
    /// Produced during the build; never listed in the descriptor.
    #[serde(default)]
    pub generated: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language: None,
            generated: false,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }

    /// Extension of the file name, without the dot.
    pub fn extension(&self) -> Option<&str> {
        cbexport_core::file_extension(&self.path)
    }
}

/// A named build target with its raw settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub kind: TargetKind,
    /// WIN32 executable or macOS bundle.
    #[serde(default)]
    pub gui: bool,
    #[serde(default)]
    pub sources: Vec<SourceFile>,
    /// Defines inherited from the target's directory (list-encoded entries).
    #[serde(default)]
    pub directory_defines: Vec<String>,
    /// Defines set on the target itself (list-encoded entries).
    #[serde(default)]
    pub defines: Vec<String>,
    #[serde(default)]
    pub compile_flags: Vec<String>,
    #[serde(default)]
    pub include_directories: Vec<String>,
    /// Link items in the order the build graph declares them.
    #[serde(default)]
    pub link_libraries: Vec<String>,
    /// Full path of the build artifact.
    #[serde(default)]
    pub location: Option<String>,
    /// Artifact paths that differ per build type.
    #[serde(default)]
    pub locations: BTreeMap<String, String>,
    /// Directory the target is built in.
    pub build_directory: String,
    /// Per-target support directory, relative to `build_directory`.
    #[serde(default)]
    pub support_directory: Option<String>,
}

impl Target {
    pub fn new(
        name: impl Into<String>,
        kind: TargetKind,
        build_directory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            gui: false,
            sources: Vec::new(),
            directory_defines: Vec::new(),
            defines: Vec::new(),
            compile_flags: Vec::new(),
            include_directories: Vec::new(),
            link_libraries: Vec::new(),
            location: None,
            locations: BTreeMap::new(),
            build_directory: build_directory.into(),
            support_directory: None,
        }
    }

    pub fn with_source(mut self, source: SourceFile) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_link(mut self, library: impl Into<String>) -> Self {
        self.link_libraries.push(library.into());
        self
    }

    pub fn with_gui(mut self, gui: bool) -> Self {
        self.gui = gui;
        self
    }

    /// Artifact path for a build type, falling back to the default location.
    pub fn location_for(&self, build_type: Option<&str>) -> Option<&str> {
        build_type
            .and_then(|bt| self.locations.get(bt))
            .or(self.location.as_ref())
            .map(String::as_str)
    }

    /// Absolute support directory of this target.
    pub fn support_path(&self) -> String {
        match &self.support_directory {
            Some(dir) => format!("{}/{}", self.build_directory, dir),
            None => format!("{}/CMakeFiles/{}.dir", self.build_directory, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_extension() {
        assert_eq!(SourceFile::new("/src/a.cpp").extension(), Some("cpp"));
        assert_eq!(SourceFile::new("/src/README").extension(), None);
        assert_eq!(SourceFile::new("/src.d/README").extension(), None);
    }

    #[test]
    fn test_location_for_build_type() {
        let mut target = Target::new("app", TargetKind::Executable, "/build")
            .with_location("/build/app");
        target
            .locations
            .insert("Release".into(), "/build/Release/app".into());

        assert_eq!(target.location_for(None), Some("/build/app"));
        assert_eq!(target.location_for(Some("Debug")), Some("/build/app"));
        assert_eq!(
            target.location_for(Some("Release")),
            Some("/build/Release/app")
        );
    }

    #[test]
    fn test_support_path() {
        let mut target = Target::new("objs", TargetKind::ObjectLibrary, "/build/lib");
        assert_eq!(target.support_path(), "/build/lib/CMakeFiles/objs.dir");

        target.support_directory = Some("custom".into());
        assert_eq!(target.support_path(), "/build/lib/custom");
    }

    #[test]
    fn test_target_deserialize_defaults() {
        let target: Target = serde_json::from_str(
            r#"{"name": "util", "kind": "static-library", "build_directory": "/b"}"#,
        )
        .unwrap();
        assert_eq!(target.kind, TargetKind::StaticLibrary);
        assert!(target.sources.is_empty());
        assert!(!target.gui);
        assert_eq!(target.location, None);
    }
}
