use std::{
    collections::{BTreeMap, HashMap, HashSet},
    path::Path,
};

use anyhow::bail;
use followcover::{utils::render_dot, VertexId};

use crate::{
    commands::common::{file_display_name, load_network, sorted_ids},
    output::join_ids,
};

pub fn run(path: &Path, format: &str) -> anyhow::Result<()> {
    let graph = load_network(path)?;
    let adjacency = graph.export();

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&ordered(&adjacency))?;
            println!("{json}");
        }
        "dot" => {
            let cover = graph.find_minimum_cover();
            print!(
                "{}",
                render_dot(&file_display_name(path), &adjacency, &cover)
            );
        }
        "text" => {
            for (id, targets) in &ordered(&adjacency) {
                println!("{id}: {}", join_ids(targets));
            }
        }
        other => bail!("unsupported format '{other}'; expected 'text', 'json', or 'dot'"),
    }

    Ok(())
}

fn ordered(adjacency: &HashMap<VertexId, HashSet<VertexId>>) -> BTreeMap<i64, Vec<i64>> {
    adjacency
        .iter()
        .map(|(id, targets)| (id.value(), sorted_ids(targets)))
        .collect()
}
