//! Global definitions shared by every sub-project of a build.

use serde::{Deserialize, Serialize};

use crate::{Language, LanguageSet};

/// Extensions of compiled implementation files.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["c", "C", "c++", "cc", "cpp", "cxx", "m", "M", "mm"];

/// Extensions probed when looking for a companion header.
pub const DEFAULT_HEADER_EXTENSIONS: &[&str] = &["h", "hh", "h++", "hm", "hpp", "hxx", "in", "txx"];

/// Global settings of the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Top of the source tree.
    pub home_directory: String,
    /// Top of the build tree.
    pub home_output_directory: String,
    /// Install location of the build system's own modules; files below it
    /// are never listed.
    #[serde(default)]
    pub module_root: Option<String>,
    /// Make tool used to build targets (required for export).
    #[serde(default)]
    pub make_program: Option<String>,
    /// Command that re-runs configuration (required for export).
    #[serde(default)]
    pub configure_command: Option<String>,
    #[serde(default)]
    pub build_type: Option<String>,
    #[serde(default)]
    pub runtime_output_directory: Option<String>,
    #[serde(default)]
    pub executable_output_path: Option<String>,
    #[serde(default)]
    pub c_compiler_id: Option<String>,
    #[serde(default)]
    pub cxx_compiler_id: Option<String>,
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,
    #[serde(default)]
    pub c_system_include_dirs: Vec<String>,
    #[serde(default)]
    pub cxx_system_include_dirs: Vec<String>,
    #[serde(default)]
    pub c_shared_library_flags: Vec<String>,
    #[serde(default)]
    pub cxx_shared_library_flags: Vec<String>,
}

fn default_languages() -> Vec<Language> {
    vec![Language::C, Language::Cxx]
}

fn default_source_extensions() -> Vec<String> {
    DEFAULT_SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_header_extensions() -> Vec<String> {
    DEFAULT_HEADER_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl BuildSettings {
    pub fn new(home_directory: impl Into<String>, home_output_directory: impl Into<String>) -> Self {
        Self {
            home_directory: home_directory.into(),
            home_output_directory: home_output_directory.into(),
            module_root: None,
            make_program: None,
            configure_command: None,
            build_type: None,
            runtime_output_directory: None,
            executable_output_path: None,
            c_compiler_id: None,
            cxx_compiler_id: None,
            languages: default_languages(),
            source_extensions: default_source_extensions(),
            header_extensions: default_header_extensions(),
            c_system_include_dirs: Vec::new(),
            cxx_system_include_dirs: Vec::new(),
            c_shared_library_flags: Vec::new(),
            cxx_shared_library_flags: Vec::new(),
        }
    }

    pub fn language_set(&self) -> LanguageSet {
        LanguageSet::from_languages(&self.languages)
    }

    /// Compiler identifier of the primary language.
    pub fn compiler_id(&self) -> Option<&str> {
        match self.language_set().primary() {
            Language::Cxx => self.cxx_compiler_id.as_deref(),
            _ => self.c_compiler_id.as_deref(),
        }
    }

    /// Shared-library compile flags of the primary language.
    pub fn shared_library_flags(&self) -> &[String] {
        match self.language_set().primary() {
            Language::Cxx => &self.cxx_shared_library_flags,
            _ => &self.c_shared_library_flags,
        }
    }
}
