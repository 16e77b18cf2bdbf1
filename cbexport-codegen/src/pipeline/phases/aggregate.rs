//! Aggregate phase - collects compiler and linker settings per target.

use eyre::Result;

use crate::{
    SettingsAggregator,
    pipeline::{ExportContext, Phase},
};

pub struct AggregatePhase;

impl Phase for AggregatePhase {
    fn name(&self) -> &'static str {
        "aggregate"
    }

    fn description(&self) -> &'static str {
        "Deduplicate defines, flags, include directories and link entries"
    }

    fn run(&self, ctx: &mut ExportContext<'_>) -> Result<()> {
        let graph = ctx.graph;
        let aggregator = SettingsAggregator::new(graph);

        for target in graph.targets().iter().filter(|t| t.kind.is_buildable()) {
            let settings = aggregator.aggregate(target);
            ctx.artifacts.settings.insert(target.name.clone(), settings);
        }

        Ok(())
    }
}
