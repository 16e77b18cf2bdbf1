//! Per-target compiler and linker settings.

use cbexport_core::{expand_list, parent_directory};
use cbexport_graph::{BuildGraph, Target};
use indexmap::IndexSet;

/// One library reference of the linker block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Library name without a leading `-l`.
    pub library: String,
    /// Output directory of the target the library resolves to.
    pub directory: Option<String>,
}

/// Deduplicated settings of one target.
///
/// Every sequence keeps the order in which entries were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedSettings {
    pub defines: IndexSet<String>,
    pub flags: IndexSet<String>,
    pub include_directories: IndexSet<String>,
    pub links: Vec<LinkEntry>,
}

impl AggregatedSettings {
    pub fn has_compiler_settings(&self) -> bool {
        !(self.defines.is_empty() && self.flags.is_empty() && self.include_directories.is_empty())
    }
}

/// Insert every list element of every value, skipping ones already present.
fn extend_unique<'a>(set: &mut IndexSet<String>, values: impl IntoIterator<Item = &'a String>) {
    for value in values {
        for item in expand_list(value) {
            set.insert(item);
        }
    }
}

/// Collects the settings of targets against one build graph.
pub struct SettingsAggregator<'g> {
    graph: &'g dyn BuildGraph,
}

impl<'g> SettingsAggregator<'g> {
    pub fn new(graph: &'g dyn BuildGraph) -> Self {
        Self { graph }
    }

    pub fn aggregate(&self, target: &Target) -> AggregatedSettings {
        let settings = self.graph.settings();
        let mut out = AggregatedSettings::default();

        extend_unique(
            &mut out.defines,
            target.directory_defines.iter().chain(&target.defines),
        );
        extend_unique(
            &mut out.flags,
            target
                .compile_flags
                .iter()
                .chain(settings.shared_library_flags()),
        );
        extend_unique(
            &mut out.include_directories,
            target
                .include_directories
                .iter()
                .chain(&settings.c_system_include_dirs)
                .chain(&settings.cxx_system_include_dirs),
        );

        out.links = target
            .link_libraries
            .iter()
            .map(|item| self.link_entry(item))
            .collect();

        tracing::debug!(
            target = %target.name,
            defines = out.defines.len(),
            flags = out.flags.len(),
            includes = out.include_directories.len(),
            links = out.links.len(),
            "aggregated settings"
        );
        out
    }

    fn link_entry(&self, item: &str) -> LinkEntry {
        let build_type = self.graph.settings().build_type.as_deref();
        let directory = self
            .graph
            .find_target(item)
            .and_then(|dep| dep.location_for(build_type))
            .and_then(parent_directory)
            .map(str::to_string);

        let library = item.strip_prefix("-l").unwrap_or(item).to_string();
        LinkEntry { library, directory }
    }
}

#[cfg(test)]
mod tests {
    use cbexport_graph::{BuildSettings, Language, Project, ProjectView, TargetKind};

    use super::*;

    fn view<'a>(settings: &'a BuildSettings, project: &'a Project) -> ProjectView<'a> {
        ProjectView::new(settings, project)
    }

    #[test]
    fn test_defines_deduplicated_in_order() {
        let settings = BuildSettings::new("/src", "/build");
        let mut target = Target::new("app", TargetKind::Executable, "/build");
        target.directory_defines = vec!["DEBUG;FOO".into()];
        target.defines = vec!["FOO;BAR".into()];
        let project = Project::new("demo", "/build").with_target(target.clone());

        let agg = SettingsAggregator::new(&view(&settings, &project)).aggregate(&target);
        assert_eq!(
            agg.defines.iter().collect::<Vec<_>>(),
            vec!["DEBUG", "FOO", "BAR"]
        );
    }

    #[test]
    fn test_flags_use_primary_language() {
        let mut settings = BuildSettings::new("/src", "/build");
        settings.c_shared_library_flags = vec!["-fPIC".into()];
        settings.cxx_shared_library_flags = vec!["-fPIC;-fvisibility=hidden".into()];
        let mut target = Target::new("lib", TargetKind::SharedLibrary, "/build");
        target.compile_flags = vec!["-Wall;-fPIC".into()];
        let project = Project::new("demo", "/build").with_target(target.clone());

        let agg = SettingsAggregator::new(&view(&settings, &project)).aggregate(&target);
        assert_eq!(
            agg.flags.iter().collect::<Vec<_>>(),
            vec!["-Wall", "-fPIC", "-fvisibility=hidden"]
        );

        settings.languages = vec![Language::C];
        let agg = SettingsAggregator::new(&view(&settings, &project)).aggregate(&target);
        assert_eq!(agg.flags.iter().collect::<Vec<_>>(), vec!["-Wall", "-fPIC"]);
    }

    #[test]
    fn test_include_directories_merged() {
        let mut settings = BuildSettings::new("/src", "/build");
        settings.c_system_include_dirs = vec!["/usr/include;/usr/local/include".into()];
        settings.cxx_system_include_dirs = vec!["/usr/include/c++/13;/usr/include".into()];
        let mut target = Target::new("app", TargetKind::Executable, "/build");
        target.include_directories = vec!["/src/include".into(), "/usr/include".into()];
        let project = Project::new("demo", "/build").with_target(target.clone());

        let agg = SettingsAggregator::new(&view(&settings, &project)).aggregate(&target);
        assert_eq!(
            agg.include_directories.iter().collect::<Vec<_>>(),
            vec![
                "/src/include",
                "/usr/include",
                "/usr/local/include",
                "/usr/include/c++/13"
            ]
        );
    }

    #[test]
    fn test_link_entries() {
        let settings = BuildSettings::new("/src", "/build");
        let util = Target::new("utilLib", TargetKind::StaticLibrary, "/build/lib")
            .with_location("/build/lib/libutilLib.a");
        let app = Target::new("app", TargetKind::Executable, "/build")
            .with_link("utilLib")
            .with_link("-lm")
            .with_link("pthread");
        let project = Project::new("demo", "/build")
            .with_target(app.clone())
            .with_target(util);

        let agg = SettingsAggregator::new(&view(&settings, &project)).aggregate(&app);
        assert_eq!(
            agg.links,
            vec![
                LinkEntry {
                    library: "utilLib".into(),
                    directory: Some("/build/lib".into()),
                },
                LinkEntry {
                    library: "m".into(),
                    directory: None,
                },
                LinkEntry {
                    library: "pthread".into(),
                    directory: None,
                },
            ]
        );
    }

    #[test]
    fn test_empty_target() {
        let settings = BuildSettings::new("/src", "/build");
        let target = Target::new("tool", TargetKind::Utility, "/build");
        let project = Project::new("demo", "/build").with_target(target.clone());

        let agg = SettingsAggregator::new(&view(&settings, &project)).aggregate(&target);
        assert!(!agg.has_compiler_settings());
        assert!(agg.links.is_empty());
    }
}
