//! Test utilities for the exporter.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use cbexport_graph::{
    BuildSettings, ExportPolicy, Language, Project, ProjectView, SourceFile, Target, TargetKind,
};
use eyre::Result;

use crate::{Descriptor, DescriptorSerializer, FileProbe, pipeline::Pipeline};

/// Builder for in-memory builds.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub settings: BuildSettings,
    pub projects: Vec<Project>,
}

impl Fixture {
    /// A build with the required settings filled in.
    pub fn new(home_directory: &str, home_output_directory: &str) -> Self {
        let mut settings = BuildSettings::new(home_directory, home_output_directory);
        settings.make_program = Some("make".into());
        settings.configure_command = Some("cmake".into());
        settings.cxx_compiler_id = Some("GNU".into());
        Self {
            settings,
            projects: Vec::new(),
        }
    }

    /// The two-target build used across the end-to-end tests.
    ///
    /// `app` links against `utilLib`; only `/src/main.h` exists next to
    /// the implementation files (see [`Fixture::demo_probe`]).
    pub fn demo() -> Self {
        let util = Target::new("utilLib", TargetKind::StaticLibrary, "/build/lib")
            .with_location("/build/lib/libutilLib.a")
            .with_source(SourceFile::new("/src/util.cpp").with_language(Language::Cxx));

        let mut app = Target::new("app", TargetKind::Executable, "/build")
            .with_location("/build/app")
            .with_source(SourceFile::new("/src/main.cpp").with_language(Language::Cxx))
            .with_link("utilLib");
        app.defines = vec!["APP_VERSION=2".into()];
        app.include_directories = vec!["/src/include".into()];

        let project = Project::new("demo", "/build")
            .with_list_file("/src/CMakeLists.txt")
            .with_list_file("/src/cmake/helpers.cmake")
            .with_list_file("/src/util/CMakeLists.txt")
            .with_list_file("/build/CMakeFiles/3.28/CMakeSystem.cmake")
            .with_target(app)
            .with_target(util);

        Self::new("/src", "/build").project(project)
    }

    /// Probe matching the files of [`Fixture::demo`].
    pub fn demo_probe() -> impl FileProbe {
        |path: &str| path == "/src/main.h"
    }

    pub fn project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    pub fn settings_mut(&mut self) -> &mut BuildSettings {
        &mut self.settings
    }

    /// Graph view of the project at `index`, resolving links across projects.
    pub fn view(&self, index: usize) -> ProjectView<'_> {
        ProjectView::new(&self.settings, &self.projects[index]).with_siblings(&self.projects)
    }

    pub fn views(&self) -> Vec<ProjectView<'_>> {
        (0..self.projects.len()).map(|i| self.view(i)).collect()
    }

    /// Run the pipeline and render the project at `index`.
    pub fn render(
        &self,
        index: usize,
        policy: &ExportPolicy,
        probe: &dyn FileProbe,
    ) -> Result<Descriptor> {
        let view = self.view(index);
        let ctx = Pipeline::new().run(&view, policy, probe)?;
        Ok(DescriptorSerializer::new(&view, policy).render(&ctx.artifacts))
    }

    /// Point every project's output directory at `dir`.
    pub fn output_to(mut self, dir: &Path) -> Self {
        let dir = dir.display().to_string();
        for project in &mut self.projects {
            project.output_directory = dir.clone();
        }
        self
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Undo attribute escaping.
pub fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
