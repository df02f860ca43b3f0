use std::{collections::HashSet, path::Path};

use anyhow::Context;
use followcover::{loader::load_graph, FollowGraph, VertexId};

/// Load an edge list into a new network.
pub fn load_network(path: &Path) -> anyhow::Result<FollowGraph> {
    load_graph(path).with_context(|| format!("failed to load edge list: {}", path.display()))
}

/// Raw ids of `set` in ascending order, for stable output.
pub fn sorted_ids(set: &HashSet<VertexId>) -> Vec<i64> {
    let mut ids: Vec<i64> = set.iter().map(|id| id.value()).collect();
    ids.sort_unstable();
    ids
}

/// Extract a display-friendly filename from a path.
pub fn file_display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}
