//! Partitioning of target sources into implementation files and the rest.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use cbexport_core::{file_basename, parent_directory};
use cbexport_graph::{BuildSettings, Target};

/// Answers whether a file exists.
///
/// Header discovery goes through this trait so tests can run without
/// touching the disk.
pub trait FileProbe {
    fn exists(&self, path: &str) -> bool;
}

/// [`FileProbe`] backed by the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }
}

impl<F: Fn(&str) -> bool> FileProbe for F {
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

/// Sources of a project, split for the descriptor's unit list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedSources {
    /// Compiled C/C++ files keyed by path, with the names of the targets
    /// that list them in discovery order.
    pub paired_files: BTreeMap<String, Vec<String>>,
    /// Every other non-generated file.
    pub other_files: BTreeSet<String>,
}

impl ClassifiedSources {
    /// Look for a companion header next to every implementation file.
    ///
    /// For `dir/name.ext` the candidates are `dir/name.<h>` for each header
    /// extension in order, where `name` stops at the first dot of the file
    /// name (`widget.moc.cpp` looks for `widget.h`). The search stops at a candidate already listed
    /// and otherwise adds the first one the probe finds. This relies on the
    /// usual one-to-one naming of sources and headers; a file without a
    /// matching header simply gets none.
    pub fn discover_matching_headers<S: AsRef<str>>(
        &mut self,
        header_extensions: &[S],
        probe: &dyn FileProbe,
    ) {
        let mut found = Vec::new();
        for path in self.paired_files.keys() {
            let base = match parent_directory(path) {
                Some(dir) => format!("{}/{}", dir, file_basename(path)),
                None => file_basename(path).to_string(),
            };

            for ext in header_extensions {
                let candidate = format!("{}.{}", base, ext.as_ref());
                if self.other_files.contains(&candidate) || found.contains(&candidate) {
                    break;
                }
                if probe.exists(&candidate) {
                    tracing::trace!(header = %candidate, source = %path, "matched header");
                    found.push(candidate);
                    break;
                }
            }
        }
        self.other_files.extend(found);
    }

    pub fn is_empty(&self) -> bool {
        self.paired_files.is_empty() && self.other_files.is_empty()
    }
}

/// Splits target sources by language and extension.
#[derive(Debug, Clone)]
pub struct SourceClassifier<'a> {
    source_extensions: &'a [String],
}

impl<'a> SourceClassifier<'a> {
    pub fn new(source_extensions: &'a [String]) -> Self {
        Self { source_extensions }
    }

    pub fn from_settings(settings: &'a BuildSettings) -> Self {
        Self::new(&settings.source_extensions)
    }

    /// Classify the sources of every buildable or utility target.
    ///
    /// Generated files are dropped. A C or C++ file with a known source
    /// extension becomes a paired file; anything else is an other file.
    pub fn classify<'t>(&self, targets: impl IntoIterator<Item = &'t Target>) -> ClassifiedSources {
        let mut out = ClassifiedSources::default();

        for target in targets {
            if !target.kind.has_sources() {
                continue;
            }

            for source in &target.sources {
                if source.generated {
                    continue;
                }

                let is_c_family = source.language.as_ref().is_some_and(|l| l.is_c_family());
                let known_ext = source
                    .extension()
                    .is_some_and(|ext| self.source_extensions.iter().any(|e| e == ext));

                if is_c_family && known_ext {
                    let owners = out.paired_files.entry(source.path.clone()).or_default();
                    if !owners.contains(&target.name) {
                        owners.push(target.name.clone());
                    }
                } else {
                    out.other_files.insert(source.path.clone());
                }
            }
        }

        out
    }
}
