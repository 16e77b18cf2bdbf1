//! Structural checks that need the source text for their labels.

use std::collections::HashMap;

use cbexport_graph::Project;
use miette::SourceSpan;

use crate::{Result, SourceContext, Snapshot};

/// Find the span of a `name` value in TOML or JSON source.
///
/// Tries the key/value spellings first and falls back to the first quoted
/// occurrence of `name`.
pub fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    find_name_spans(src, name).into_iter().next()
}

/// Every `name = "<name>"` (or `"name": "<name>"`) occurrence, in source
/// order. Spans cover the quoted value without its quotes.
pub(crate) fn find_name_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    let patterns = [
        format!("name = \"{}\"", name),
        format!("name=\"{}\"", name),
        format!("\"name\": \"{}\"", name),
        format!("\"name\":\"{}\"", name),
    ];

    let mut offsets: Vec<usize> = patterns
        .iter()
        .flat_map(|pattern| {
            let value_at = pattern.len() - name.len() - 1;
            src.match_indices(pattern.as_str())
                .map(move |(idx, _)| idx + value_at)
        })
        .collect();

    if offsets.is_empty() {
        let quoted = format!("\"{}\"", name);
        offsets.extend(src.match_indices(quoted.as_str()).map(|(idx, _)| idx + 1));
    }

    offsets.sort_unstable();
    offsets.dedup();
    offsets
        .into_iter()
        .map(|offset| SourceSpan::from((offset, name.len())))
        .collect()
}

pub(crate) fn validate(snapshot: &Snapshot, ctx: &SourceContext) -> Result<()> {
    if snapshot.build.home_directory.is_empty() {
        return Err(ctx.validation_error("build.home_directory must not be empty"));
    }
    if snapshot.build.home_output_directory.is_empty() {
        return Err(ctx.validation_error("build.home_output_directory must not be empty"));
    }
    if snapshot.export.extension.is_empty() || snapshot.export.extension.contains('/') {
        return Err(ctx.validation_error(format!(
            "export.extension '{}' is not a valid file extension",
            snapshot.export.extension
        )));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for project in &snapshot.projects {
        validate_project(project, ctx)?;

        let count = seen.entry(project.name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            let spans = find_name_spans(ctx.src(), &project.name);
            if let [first, second, ..] = spans.as_slice() {
                return Err(ctx.duplicate_project_error(&project.name, *first, *second));
            }
            return Err(ctx.validation_error(format!(
                "duplicate project '{}'",
                project.name
            )));
        }
    }

    Ok(())
}

fn validate_project(project: &Project, ctx: &SourceContext) -> Result<()> {
    if project.name.is_empty() {
        let span = find_name_span(ctx.src(), "");
        return Err(ctx.validation_error_at("project name must not be empty", span));
    }
    if project.name.contains(['/', '\\']) {
        return Err(ctx.validation_error_at(
            format!(
                "project name '{}' is used as a file name and must not contain path separators",
                project.name
            ),
            find_name_span(ctx.src(), &project.name),
        ));
    }
    if project.output_directory.is_empty() {
        return Err(ctx.validation_error_at(
            format!("project '{}' has no output_directory", project.name),
            find_name_span(ctx.src(), &project.name),
        ));
    }

    for target in &project.targets {
        if target.name.is_empty() {
            return Err(ctx.validation_error_at(
                format!("project '{}' has a target without a name", project.name),
                find_name_span(ctx.src(), ""),
            ));
        }
        if target.build_directory.is_empty() {
            return Err(ctx.validation_error_at(
                format!("target '{}' has no build_directory", target.name),
                find_name_span(ctx.src(), &target.name),
            ));
        }
    }

    Ok(())
}
