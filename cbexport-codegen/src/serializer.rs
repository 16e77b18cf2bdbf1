//! Rendering of the `.cbp` project file.

use std::path::{Path, PathBuf};

use cbexport_core::{FileRules, GeneratedFile};
use cbexport_graph::{BuildGraph, ExportPolicy, RefreshStyle, Target, TargetKind};

use crate::{
    AggregatedSettings, ExportArtifacts,
    builder::CodeBuilder,
    compiler::{compiler_token, is_emitted, target_type_code},
    xml::Element,
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>"#;

/// A rendered project file plus the marker files it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// File name of the project file, e.g. `demo.cbp`.
    pub file_name: String,
    pub content: String,
    pub markers: Vec<ObjectLibraryMarker>,
}

impl GeneratedFile for Descriptor {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    /// The output directory must already exist.
    fn rules(&self) -> FileRules {
        FileRules::existing_dir()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Placeholder output file for an object library.
///
/// Object libraries produce no single artifact, so the project file points
/// at this file instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLibraryMarker {
    pub target: String,
    /// Absolute path of the marker.
    pub path: String,
}

impl ObjectLibraryMarker {
    pub fn for_target(target: &Target) -> Self {
        Self {
            target: target.name.clone(),
            path: format!("{}/{}.objlib", target.support_path(), target.name),
        }
    }
}

impl GeneratedFile for ObjectLibraryMarker {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        format!(
            "# This is a dummy file for the OBJECT library {} for the CMake CodeBlocks project generator.\n\
             # Don't edit, this file will be overwritten.\n",
            self.target
        )
    }
}

/// Renders one project graph into a [`Descriptor`].
///
/// Rendering is a pure function of the graph, the artifacts and the
/// policy; the same inputs always give the same bytes.
pub struct DescriptorSerializer<'a> {
    graph: &'a dyn BuildGraph,
    policy: &'a ExportPolicy,
}

impl<'a> DescriptorSerializer<'a> {
    pub fn new(graph: &'a dyn BuildGraph, policy: &'a ExportPolicy) -> Self {
        Self { graph, policy }
    }

    pub fn render(&self, artifacts: &ExportArtifacts) -> Descriptor {
        let settings = self.graph.settings();
        let compiler = compiler_token(settings.compiler_id());
        let mut markers = Vec::new();

        let mut build = Element::container("Build");
        if self.policy.refresh == RefreshStyle::RebuildTarget {
            build.push(
                Element::new("Target")
                    .attr("title", "rebuild_cache")
                    .child(Element::option("type", "4"))
                    .child(self.refresh_commands()),
            );
        }

        let mut all = String::new();
        for target in self.graph.targets().iter().filter(|t| is_emitted(t)) {
            if target.kind.is_buildable() {
                let output = if target.kind == TargetKind::ObjectLibrary {
                    let marker = ObjectLibraryMarker::for_target(target);
                    let path = marker.path.clone();
                    markers.push(marker);
                    path
                } else {
                    target
                        .location_for(settings.build_type.as_deref())
                        .unwrap_or_default()
                        .to_string()
                };
                let aggregated = artifacts.settings.get(&target.name);
                build.push(self.buildable_target(target, output, compiler, aggregated));

                all.push_str(&target.name);
                all.push(';');
            } else {
                build.push(
                    Element::new("Target")
                        .attr("title", &target.name)
                        .child(Element::option("working_dir", &target.build_directory))
                        .child(Element::option("type", "4")),
                );
            }
        }

        let mut project = Element::container("Project")
            .child(Element::option("title", self.graph.project_name()))
            .child(Element::option("makefile_is_custom", "0"))
            .child(Element::option("compiler", compiler))
            .child(Element::option(
                "virtualFolders",
                artifacts.trie.render_folder_declaration(),
            ))
            .child(build)
            .child(
                Element::container("VirtualTargets").child(
                    Element::new("Add")
                        .attr("alias", "All")
                        .attr("targets", all),
                ),
            );

        if self.policy.refresh == RefreshStyle::ExtraCommands {
            project.push(self.refresh_commands());
        }

        for (path, owners) in &artifacts.sources.paired_files {
            let mut unit = Element::container("Unit").attr("filename", path);
            if self.policy.unit_targets {
                unit = unit.children(owners.iter().map(|name| Element::option("target", name)));
            }
            project.push(unit);
        }
        for path in &artifacts.sources.other_files {
            project.push(Element::container("Unit").attr("filename", path));
        }
        let base = format!("{}/", settings.home_directory);
        for entry in artifacts.trie.render_file_entries(&base) {
            project.push(
                Element::container("Unit")
                    .attr("filename", entry.path)
                    .child(Element::option("virtualFolder", entry.virtual_folder)),
            );
        }

        let root = Element::container("CodeBlocks_project_file")
            .child(
                Element::new("FileVersion")
                    .attr("major", "1")
                    .attr("minor", "6"),
            )
            .child(project);

        let mut builder = CodeBuilder::codeblocks().line(XML_DECLARATION);
        builder.emit(&root);

        Descriptor {
            file_name: format!("{}.{}", self.graph.project_name(), self.policy.extension),
            content: builder.build(),
            markers,
        }
    }

    fn buildable_target(
        &self,
        target: &Target,
        output: String,
        compiler: &str,
        aggregated: Option<&AggregatedSettings>,
    ) -> Element {
        let settings = self.graph.settings();
        let working_dir = match target.kind {
            TargetKind::Executable => settings
                .runtime_output_directory
                .as_deref()
                .or(settings.executable_output_path.as_deref())
                .unwrap_or(target.build_directory.as_str()),
            _ => target.build_directory.as_str(),
        };

        let mut compiler_block = Element::container("Compiler");
        let mut element = Element::new("Target")
            .attr("title", &target.name)
            .child(
                Element::option("output", output)
                    .attr("prefix_auto", "0")
                    .attr("extension_auto", "0"),
            )
            .child(Element::option("working_dir", working_dir))
            .child(Element::option("object_output", "./"))
            .child(Element::option("type", target_type_code(target).to_string()))
            .child(Element::option("compiler", compiler));

        let Some(aggregated) = aggregated else {
            return element.child(compiler_block);
        };

        for define in &aggregated.defines {
            compiler_block.push(Element::new("Add").attr("option", format!("-D{}", define)));
        }
        for flag in &aggregated.flags {
            compiler_block.push(Element::new("Add").attr("option", flag));
        }
        for dir in &aggregated.include_directories {
            compiler_block.push(Element::new("Add").attr("directory", dir));
        }
        element = element.child(compiler_block);

        if !aggregated.links.is_empty() {
            let mut linker = Element::new("Linker");
            for link in &aggregated.links {
                if let Some(dir) = &link.directory {
                    linker.push(Element::new("Add").attr("directory", dir));
                }
                linker.push(Element::new("Add").attr("library", &link.library));
            }
            element = element.child(linker);
        }

        element
    }

    /// Pre-build step that re-runs configuration.
    fn refresh_commands(&self) -> Element {
        let settings = self.graph.settings();
        let command = settings.configure_command.as_deref().unwrap_or_default();
        let before = format!(
            "{} chdir {} && {} {}",
            command, settings.home_output_directory, command, settings.home_directory
        );

        Element::new("ExtraCommands")
            .child(Element::new("Add").attr("before", before))
            .child(Element::new("Mode").attr("after", "always"))
    }
}

#[cfg(test)]
mod tests {
    use cbexport_graph::{BuildSettings, Project, ProjectView};

    use super::*;
    use crate::{DiskProbe, pipeline::Pipeline};

    fn settings() -> BuildSettings {
        let mut settings = BuildSettings::new("/src", "/build");
        settings.make_program = Some("make".into());
        settings.configure_command = Some("cmake".into());
        settings
    }

    fn render(settings: &BuildSettings, project: &Project, policy: &ExportPolicy) -> Descriptor {
        let view = ProjectView::new(settings, project);
        let ctx = Pipeline::new()
            .run(&view, policy, &DiskProbe)
            .expect("pipeline should succeed");
        DescriptorSerializer::new(&view, policy).render(&ctx.artifacts)
    }

    #[test]
    fn test_header_and_metadata() {
        let project = Project::new("demo", "/build");
        let descriptor = render(&settings(), &project, &ExportPolicy::default());

        assert_eq!(descriptor.file_name, "demo.cbp");
        let mut lines = descriptor.content.lines();
        assert_eq!(lines.next(), Some(XML_DECLARATION));
        assert_eq!(lines.next(), Some("<CodeBlocks_project_file>"));
        assert_eq!(lines.next(), Some("   <FileVersion major=\"1\" minor=\"6\" />"));
        assert_eq!(lines.next(), Some("   <Project>"));
        assert_eq!(lines.next(), Some("      <Option title=\"demo\" />"));
        assert_eq!(lines.next(), Some("      <Option makefile_is_custom=\"0\" />"));
        assert_eq!(lines.next(), Some("      <Option compiler=\"gcc\" />"));
        assert!(descriptor.content.ends_with("   </Project>\n</CodeBlocks_project_file>\n"));
    }

    #[test]
    fn test_refresh_styles() {
        let project = Project::new("demo", "/build");
        let mut policy = ExportPolicy::default();

        let content = render(&settings(), &project, &policy).content;
        assert!(content.contains(
            "      <ExtraCommands>\n         <Add before=\"cmake chdir /build &amp;&amp; cmake /src\" />\n         <Mode after=\"always\" />\n      </ExtraCommands>\n"
        ));
        assert!(!content.contains("rebuild_cache"));

        policy.refresh = RefreshStyle::RebuildTarget;
        let content = render(&settings(), &project, &policy).content;
        assert!(content.contains("         <Target title=\"rebuild_cache\">\n            <Option type=\"4\" />\n            <ExtraCommands>\n"));
        assert_eq!(content.matches("<ExtraCommands>").count(), 1);

        policy.refresh = RefreshStyle::None;
        let content = render(&settings(), &project, &policy).content;
        assert!(!content.contains("ExtraCommands"));
    }

    #[test]
    fn test_object_library_marker() {
        let project = Project::new("demo", "/build")
            .with_target(Target::new("objs", TargetKind::ObjectLibrary, "/build/lib"));
        let descriptor = render(&settings(), &project, &ExportPolicy::default());

        assert_eq!(descriptor.markers.len(), 1);
        let marker = &descriptor.markers[0];
        assert_eq!(marker.path, "/build/lib/CMakeFiles/objs.dir/objs.objlib");
        assert_eq!(
            marker.render(),
            "# This is a dummy file for the OBJECT library objs for the CMake CodeBlocks project generator.\n# Don't edit, this file will be overwritten.\n"
        );
        assert!(descriptor.content.contains(
            "<Option output=\"/build/lib/CMakeFiles/objs.dir/objs.objlib\" prefix_auto=\"0\" extension_auto=\"0\" />"
        ));
        assert!(descriptor.content.contains("<Option type=\"2\" />"));
    }

    #[test]
    fn test_executable_working_dir() {
        let mut settings = settings();
        let project = Project::new("demo", "/build").with_target(
            Target::new("app", TargetKind::Executable, "/build/app").with_location("/build/app/app"),
        );

        let content = render(&settings, &project, &ExportPolicy::default()).content;
        assert!(content.contains("<Option working_dir=\"/build/app\" />"));

        settings.executable_output_path = Some("/build/exe".into());
        let content = render(&settings, &project, &ExportPolicy::default()).content;
        assert!(content.contains("<Option working_dir=\"/build/exe\" />"));

        settings.runtime_output_directory = Some("/build/bin".into());
        let content = render(&settings, &project, &ExportPolicy::default()).content;
        assert!(content.contains("<Option working_dir=\"/build/bin\" />"));
    }

    #[test]
    fn test_utilities() {
        let project = Project::new("demo", "/build")
            .with_target(Target::new("docs", TargetKind::Utility, "/build/doc"))
            .with_target(Target::new("NightlyMemCheck", TargetKind::Utility, "/build"))
            .with_target(Target::new("Nightly", TargetKind::Utility, "/build"));
        let content = render(&settings(), &project, &ExportPolicy::default()).content;

        assert!(content.contains(
            "         <Target title=\"docs\">\n            <Option working_dir=\"/build/doc\" />\n            <Option type=\"4\" />\n         </Target>\n"
        ));
        assert!(content.contains("<Target title=\"Nightly\">"));
        assert!(!content.contains("NightlyMemCheck"));
        assert!(content.contains("<Add alias=\"All\" targets=\"\" />"));
    }

    #[test]
    fn test_unit_targets_policy() {
        let mut target = Target::new("app", TargetKind::Executable, "/build");
        target.sources.push(
            cbexport_graph::SourceFile::new("/src/main.c").with_language(cbexport_graph::Language::C),
        );
        let project = Project::new("demo", "/build").with_target(target);
        let mut policy = ExportPolicy::default();

        let content = render(&settings(), &project, &policy).content;
        assert!(content.contains(
            "      <Unit filename=\"/src/main.c\">\n         <Option target=\"app\" />\n      </Unit>\n"
        ));

        policy.unit_targets = false;
        let content = render(&settings(), &project, &policy).content;
        assert!(content.contains("      <Unit filename=\"/src/main.c\">\n      </Unit>\n"));
    }

    #[test]
    fn test_extension_policy() {
        let policy = ExportPolicy {
            extension: "xml".into(),
            ..ExportPolicy::default()
        };
        let descriptor = render(&settings(), &Project::new("demo", "/build"), &policy);
        assert_eq!(descriptor.file_name, "demo.xml");
        assert_eq!(descriptor.path(Path::new("/build")), PathBuf::from("/build/demo.xml"));
    }
}
