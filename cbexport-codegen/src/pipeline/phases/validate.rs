//! Validate phase - checks that a project can be exported.

use std::collections::HashSet;

use cbexport_graph::TargetKind;
use eyre::Result;

use crate::{
    ExportError,
    pipeline::{Diagnostic, ExportContext, Phase},
};

const NAME: &str = "validate";

/// Fails on missing required settings and duplicate target names, and
/// notes link items that will be treated as external libraries.
pub struct ValidatePhase;

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Check required settings and target integrity"
    }

    fn run(&self, ctx: &mut ExportContext<'_>) -> Result<()> {
        let graph = ctx.graph;
        let project = graph.project_name().to_string();
        let settings = graph.settings();

        let required = [
            ("make_program", &settings.make_program),
            ("configure_command", &settings.configure_command),
        ];
        for (setting, value) in required {
            if value.as_deref().is_none_or(str::is_empty) {
                ctx.add_diagnostic(
                    Diagnostic::error(NAME, format!("required setting '{}' is not set", setting))
                        .at(format!("build.{}", setting)),
                );
                return Err(ExportError::MissingSetting { project, setting }.into());
            }
        }

        if graph.targets().is_empty() {
            ctx.add_warning(NAME, format!("project '{}' has no targets", project));
        }

        let mut names = HashSet::new();
        for target in graph.targets() {
            if !names.insert(target.name.as_str()) {
                ctx.add_diagnostic(
                    Diagnostic::error(NAME, format!("duplicate target '{}'", target.name))
                        .at(format!("projects.{}.targets", project)),
                );
            }

            let build_type = settings.build_type.as_deref();
            if target.kind.is_buildable()
                && target.kind != TargetKind::ObjectLibrary
                && target.location_for(build_type).is_none()
            {
                ctx.add_diagnostic(
                    Diagnostic::warning(NAME, "target has no output location")
                        .at(format!("targets.{}", target.name)),
                );
            }

            for item in &target.link_libraries {
                if graph.find_target(item).is_none() {
                    ctx.add_diagnostic(
                        Diagnostic::info(
                            NAME,
                            format!("'{}' is not a target, linking it as an external library", item),
                        )
                        .at(format!("targets.{}", target.name)),
                    );
                }
            }
        }

        if ctx.has_errors() {
            return Err(ExportError::Invalid {
                project,
                count: ctx.error_count(),
            }
            .into());
        }

        Ok(())
    }
}
