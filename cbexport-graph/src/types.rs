//! Core type definitions.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Source language tag as reported by the build system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    C,
    Cxx,
    Fortran,
    Java,
    Rc,
    Asm,
    /// Any tag the generator has no special handling for.
    Other(String),
}

impl Language {
    /// Get the upstream tag for this language.
    pub fn as_str(&self) -> &str {
        match self {
            Language::C => "C",
            Language::Cxx => "CXX",
            Language::Fortran => "Fortran",
            Language::Java => "Java",
            Language::Rc => "RC",
            Language::Asm => "ASM",
            Language::Other(tag) => tag,
        }
    }

    /// Returns true for the compiled C-family languages whose sources can
    /// have a companion header.
    pub fn is_c_family(&self) -> bool {
        matches!(self, Language::C | Language::Cxx)
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "C" => Language::C,
            "CXX" => Language::Cxx,
            "Fortran" => Language::Fortran,
            "Java" => Language::Java,
            "RC" => Language::Rc,
            "ASM" => Language::Asm,
            other => Language::Other(other.to_string()),
        })
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(lang) => lang,
            Err(never) => match never {},
        }
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.as_str().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of languages enabled for a build.
///
/// Replaces "is C++ enabled" lookups: whichever of C and C++ is primary
/// decides the compiler identifier and the shared-library flags in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageSet {
    pub c: bool,
    pub cxx: bool,
}

impl LanguageSet {
    pub fn from_languages<'a>(languages: impl IntoIterator<Item = &'a Language>) -> Self {
        let mut set = Self::default();
        for lang in languages {
            match lang {
                Language::C => set.c = true,
                Language::Cxx => set.cxx = true,
                _ => {}
            }
        }
        set
    }

    /// C++ when enabled, C otherwise.
    pub fn primary(&self) -> Language {
        if self.cxx { Language::Cxx } else { Language::C }
    }
}

/// Kind of a build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    Executable,
    StaticLibrary,
    SharedLibrary,
    ModuleLibrary,
    ObjectLibrary,
    Utility,
    /// Global or interface targets that never appear in the descriptor.
    Other,
}

impl TargetKind {
    /// Get the kebab-case name used in snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Executable => "executable",
            TargetKind::StaticLibrary => "static-library",
            TargetKind::SharedLibrary => "shared-library",
            TargetKind::ModuleLibrary => "module-library",
            TargetKind::ObjectLibrary => "object-library",
            TargetKind::Utility => "utility",
            TargetKind::Other => "other",
        }
    }

    /// Executables and every library kind.
    pub fn is_buildable(&self) -> bool {
        matches!(
            self,
            TargetKind::Executable
                | TargetKind::StaticLibrary
                | TargetKind::SharedLibrary
                | TargetKind::ModuleLibrary
                | TargetKind::ObjectLibrary
        )
    }

    /// Buildable kinds plus utilities, which may carry sources too.
    pub fn has_sources(&self) -> bool {
        self.is_buildable() || *self == TargetKind::Utility
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
