use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_network},
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct NetworkInfo {
    pub file: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Vertices with at least one follower
    pub followed_count: usize,
    /// Vertices nobody follows
    pub unfollowed_count: usize,
    pub self_follow_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_followed: Option<MostFollowed>,
}

#[derive(Debug, Serialize)]
pub struct MostFollowed {
    pub vertex: i64,
    pub in_degree: usize,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_network(path)?;
    let degrees = graph.in_degrees();

    // First maximum wins, matching the cover's tie order
    let most_followed = degrees
        .iter()
        .fold(None::<(i64, usize)>, |best, &(id, degree)| match best {
            Some((_, top)) if top >= degree => best,
            _ => Some((id.value(), degree)),
        })
        .map(|(vertex, in_degree)| MostFollowed { vertex, in_degree });

    let mut self_follow_count = 0;
    for (id, _) in &degrees {
        if graph.vertex(*id)?.has_source(*id) {
            self_follow_count += 1;
        }
    }

    let info = NetworkInfo {
        file: file_display_name(path),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        followed_count: degrees.len(),
        unfollowed_count: graph.vertex_count() - degrees.len(),
        self_follow_count,
        most_followed,
    };

    print_output(&info, opts, |info| {
        println!("File:           {}", info.file);
        println!("Vertices:       {}", info.vertex_count);
        println!("Edges:          {}", info.edge_count);
        println!("Followed:       {}", info.followed_count);
        println!("Unfollowed:     {}", info.unfollowed_count);
        println!("Self-follows:   {}", info.self_follow_count);
        if let Some(top) = &info.most_followed {
            println!("Most followed:  {} ({} edges)", top.vertex, top.in_degree);
        }
    })
}
