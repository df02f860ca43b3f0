use std::path::Path;

use followcover::utils::{sort_by_value, SortOrder};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_network,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct DegreeEntry {
    rank: usize,
    vertex: i64,
    in_degree: usize,
    /// Distinct followers; lower than `in_degree` when follows are repeated
    followers: usize,
}

#[derive(Debug, Serialize)]
struct DegreesOutput {
    order: String,
    total: usize,
    entries: Vec<DegreeEntry>,
}

pub fn run(path: &Path, top: usize, order: SortOrder, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_network(path)?;

    let ranked = sort_by_value(graph.in_degrees(), order);
    let total = ranked.len();
    let limit = if top == 0 { total } else { top.min(total) };

    let mut entries = Vec::with_capacity(limit);
    for (rank, (id, in_degree)) in ranked.into_iter().take(limit).enumerate() {
        entries.push(DegreeEntry {
            rank: rank + 1,
            vertex: id.value(),
            in_degree,
            followers: graph.vertex(id)?.sources().len(),
        });
    }

    let output = DegreesOutput {
        order: order.to_string(),
        total,
        entries,
    };

    print_output(&output, opts, |output| {
        println!(
            "In-degrees ({}, {} of {})",
            output.order,
            output.entries.len(),
            output.total
        );
        if output.entries.is_empty() {
            return;
        }
        println!();

        let mut tw = TabWriter::new(vec![
            ("Rank", Align::Right),
            ("Vertex", Align::Right),
            ("In-degree", Align::Right),
            ("Followers", Align::Right),
        ]);
        for entry in &output.entries {
            tw.row(vec![
                entry.rank.to_string(),
                entry.vertex.to_string(),
                entry.in_degree.to_string(),
                entry.followers.to_string(),
            ]);
        }
        tw.print();
    })
}
