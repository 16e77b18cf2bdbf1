//! Classify phase - sorts project sources and finds companion headers.

use eyre::Result;

use crate::{
    SourceClassifier,
    pipeline::{ExportContext, Phase},
};

pub struct ClassifyPhase;

impl Phase for ClassifyPhase {
    fn name(&self) -> &'static str {
        "classify"
    }

    fn description(&self) -> &'static str {
        "Split sources into implementation and other files"
    }

    fn run(&self, ctx: &mut ExportContext<'_>) -> Result<()> {
        let graph = ctx.graph;
        let settings = graph.settings();

        let mut sources = SourceClassifier::from_settings(settings).classify(graph.targets());
        sources.discover_matching_headers(&settings.header_extensions, ctx.probe);

        tracing::debug!(
            implementation = sources.paired_files.len(),
            other = sources.other_files.len(),
            "classified sources"
        );
        ctx.artifacts.sources = sources;
        Ok(())
    }
}
