//! Greedy dominating-set approximation.
//!
//! Picking a high in-degree vertex dominates all of its followers in one step, so ranking
//! by in-degree and walking the ranking once gives a compact (not minimum) cover. Finding
//! a minimum dominating set is NP-hard; this module makes no optimality claim.
//!
//! # Complexity
//!
//! - Time: O(V log V + E) - one sort of the in-degree index, each source set read once
//! - Space: O(V)

use std::collections::HashSet;

use crate::{
    graph::{FollowGraph, VertexId},
    utils::{sort_by_value, SortOrder},
};

/// Runs the single greedy pass behind [`FollowGraph::find_minimum_cover`].
pub(crate) fn greedy_cover(graph: &FollowGraph) -> HashSet<VertexId> {
    let total = graph.vertex_count();
    let ranked = sort_by_value(graph.in_degrees(), SortOrder::Descending);

    log::debug!(
        "greedy cover: {} ranked candidates over {} vertices",
        ranked.len(),
        total
    );

    let mut visited: HashSet<VertexId> = HashSet::with_capacity(total);
    let mut cover: HashSet<VertexId> = HashSet::new();

    for (candidate, degree) in ranked {
        if visited.len() == total {
            log::debug!(
                "greedy cover: all {} vertices visited, {} picked",
                total,
                cover.len()
            );
            return cover;
        }

        if cover.contains(&candidate) {
            continue;
        }

        log::trace!("greedy cover: picking {candidate} (in-degree {degree})");
        visited.insert(candidate);
        cover.insert(candidate);
        if let Some(vertex) = graph.vertex_ref(candidate) {
            visited.extend(vertex.source_ids());
        }
    }

    if visited.len() < total {
        log::warn!(
            "greedy cover: {} of {} vertices never received an edge and were not visited",
            total - visited.len(),
            total
        );
    }
    cover
}

/// Returns `cover` together with every vertex that follows a member of `cover`.
pub(crate) fn dominated_by(graph: &FollowGraph, cover: &HashSet<VertexId>) -> HashSet<VertexId> {
    let mut dominated = cover.clone();
    for member in cover {
        if let Some(vertex) = graph.vertex_ref(*member) {
            dominated.extend(vertex.source_ids());
        }
    }
    dominated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{custom_network, id, simple_network, strongly_connected_network};

    #[test]
    fn test_simple_network_cover() {
        let graph = simple_network();
        let cover = graph.find_minimum_cover();

        assert!(cover.contains(&id(3)));
        assert!(!cover.contains(&id(4)));
        assert_eq!(cover, HashSet::from([id(1), id(3)]));
        assert!(graph.is_covered_by(&cover));
    }

    #[test]
    fn test_custom_network_cover() {
        let graph = custom_network();
        let cover = graph.find_minimum_cover();

        assert!(cover.contains(&id(4)));
        assert!(!cover.contains(&id(6)));
        assert_eq!(cover, HashSet::from([id(0), id(4)]));
        assert!(graph.is_covered_by(&cover));
    }

    #[test]
    fn test_strongly_connected_cover_size() {
        // A 4-cycle is dominated by 2 vertices; the greedy order picks 3.
        let graph = strongly_connected_network();
        let cover = graph.find_minimum_cover();

        assert_eq!(cover.len(), 3);
        assert_eq!(cover, HashSet::from([id(0), id(3), id(1)]));
        assert!(graph.is_covered_by(&cover));
    }

    #[test]
    fn test_empty_graph_cover() {
        assert!(FollowGraph::new().find_minimum_cover().is_empty());
    }

    #[test]
    fn test_vertices_without_in_degree_are_never_picked() {
        let mut graph = FollowGraph::new();
        for n in 0..4 {
            graph.add_vertex(id(n));
        }
        // 1 and 2 follow 0; 3 is isolated
        graph.add_edge(id(1), id(0)).unwrap();
        graph.add_edge(id(2), id(0)).unwrap();

        let cover = graph.find_minimum_cover();
        assert_eq!(cover, HashSet::from([id(0)]));
        assert!(graph.is_covered_by(&cover));
        assert_eq!(graph.uncovered(&cover), vec![id(3)]);
    }

    #[test]
    fn test_ties_follow_first_observation_order() {
        // 0 and 1 both have in-degree 1; 0 is observed first, is picked first and
        // already visits both vertices.
        let mut graph = FollowGraph::new();
        graph.add_vertex(id(0));
        graph.add_vertex(id(1));
        graph.add_edge(id(1), id(0)).unwrap();
        graph.add_edge(id(0), id(1)).unwrap();

        assert_eq!(graph.find_minimum_cover(), HashSet::from([id(0)]));

        // A later, busier vertex outranks both and visits everything on its own.
        graph.add_vertex(id(2));
        graph.add_vertex(id(3));
        graph.add_edge(id(2), id(3)).unwrap();
        graph.add_edge(id(1), id(3)).unwrap();
        graph.add_edge(id(0), id(3)).unwrap();
        assert_eq!(graph.find_minimum_cover(), HashSet::from([id(3)]));
    }

    #[test]
    fn test_dominated_by() {
        let graph = custom_network();
        let dominated = dominated_by(&graph, &HashSet::from([id(4)]));
        assert_eq!(dominated, HashSet::from([id(4), id(5), id(6)]));
    }
}
