//! Folders phase - groups build-configuration files into virtual folders.

use eyre::Result;

use crate::{
    PathTrie,
    pipeline::{ExportContext, Phase},
};

pub struct FoldersPhase;

impl Phase for FoldersPhase {
    fn name(&self) -> &'static str {
        "folders"
    }

    fn description(&self) -> &'static str {
        "Build the virtual folder tree of build-configuration files"
    }

    fn run(&self, ctx: &mut ExportContext<'_>) -> Result<()> {
        let graph = ctx.graph;
        let trie = PathTrie::from_list_files(
            graph.list_files(),
            graph.settings(),
            ctx.policy.root_list_files,
        );
        tracing::debug!(folders = trie.folder_paths().len(), "collected list files");
        ctx.artifacts.trie = trie;
        Ok(())
    }
}
