use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_network, sorted_ids},
    output::{join_ids, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct CoverMember {
    vertex: i64,
    in_degree: usize,
}

#[derive(Debug, Serialize)]
struct Validation {
    valid: bool,
    /// Vertices neither in the cover nor following a member, including unfollowed ones
    uncovered: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct CoverOutput {
    vertex_count: usize,
    cover_size: usize,
    members: Vec<CoverMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<Validation>,
}

pub fn run(path: &Path, validate: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_network(path)?;
    let cover = graph.find_minimum_cover();

    let mut members = Vec::with_capacity(cover.len());
    for vertex in sorted_ids(&cover) {
        members.push(CoverMember {
            vertex,
            in_degree: graph.in_degree(vertex.into())?,
        });
    }

    let validation = validate.then(|| Validation {
        valid: graph.is_covered_by(&cover),
        uncovered: graph.uncovered(&cover).into_iter().map(i64::from).collect(),
    });

    let output = CoverOutput {
        vertex_count: graph.vertex_count(),
        cover_size: cover.len(),
        members,
        validation,
    };

    print_output(&output, opts, |output| {
        println!(
            "Cover: {} of {} vertices",
            output.cover_size, output.vertex_count
        );

        if !output.members.is_empty() {
            println!();
            let mut tw = TabWriter::new(vec![("Vertex", Align::Left), ("In-degree", Align::Right)])
                .indent("  ");
            for member in &output.members {
                tw.row(vec![member.vertex.to_string(), member.in_degree.to_string()]);
            }
            tw.print();
        }

        if let Some(validation) = &output.validation {
            println!();
            let verdict = if validation.valid { "valid" } else { "INVALID" };
            println!("Validation: {verdict}");
            println!("Uncovered:  {}", join_ids(&validation.uncovered));
        }
    })
}
