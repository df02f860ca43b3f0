//! Reference networks shared by the unit tests.

use crate::{FollowGraph, VertexId};

pub fn id(n: i64) -> VertexId {
    VertexId::new(n)
}

// Helper function to build a graph with vertices `0..count` and the given edges
pub fn network(count: i64, edges: &[(i64, i64)]) -> FollowGraph {
    let mut graph = FollowGraph::new();
    for n in 0..count {
        graph.add_vertex(id(n));
    }
    for &(from, to) in edges {
        graph.add_edge(id(from), id(to)).unwrap();
    }
    graph
}

/// Five users with a mutual follow, a duplicate edge and two followers of 3.
pub fn simple_network() -> FollowGraph {
    network(5, &[(0, 1), (1, 0), (2, 1), (2, 1), (2, 3), (4, 3)])
}

/// Two hubs: 0 followed by 1..=4, and 4 followed by 5 and 6.
pub fn custom_network() -> FollowGraph {
    network(7, &[(1, 0), (2, 0), (3, 0), (4, 0), (5, 4), (6, 4)])
}

/// A 4-cycle with duplicated and triplicated edges.
pub fn strongly_connected_network() -> FollowGraph {
    network(
        4,
        &[(0, 1), (1, 2), (2, 3), (2, 3), (3, 0), (3, 0), (3, 0)],
    )
}
