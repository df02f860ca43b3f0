//! The follows network and its in-degree index.
//!
//! [`FollowGraph`] owns every [`Vertex`] and keeps a cached in-degree per vertex that has
//! received at least one edge. The index is maintained incrementally by
//! [`FollowGraph::add_edge`] and remembers the order in which vertices were first observed
//! as edge targets; that order is the tie-break used when ranking vertices by in-degree.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::{
    graph::{cover, Edge, GraphBuilder, Vertex, VertexId},
    Error, Result,
};

/// A directed follows network.
///
/// Vertices are registered with [`FollowGraph::add_vertex`] and linked with
/// [`FollowGraph::add_edge`]; an edge `a -> b` means `a` follows `b`. Duplicate edges and
/// self-edges are legal and counted. The graph is append-only.
///
/// Every query returns owned data: [`FollowGraph::vertex`] hands out a snapshot, and
/// nothing returned by the graph aliases its internal state.
///
/// # Examples
///
/// ```rust
/// use followcover::{FollowGraph, VertexId};
///
/// let mut graph = FollowGraph::new();
/// for n in 0..3 {
///     graph.add_vertex(VertexId::new(n));
/// }
/// graph.add_edge(VertexId::new(1), VertexId::new(0))?;
/// graph.add_edge(VertexId::new(2), VertexId::new(0))?;
///
/// assert_eq!(graph.in_degree(VertexId::new(0))?, 2);
/// assert!(graph.in_degree(VertexId::new(1)).is_err());
///
/// let cover = graph.find_minimum_cover();
/// assert!(cover.contains(&VertexId::new(0)));
/// # Ok::<(), followcover::Error>(())
/// ```
///
/// # Thread Safety
///
/// Mutation requires `&mut self`. Callers sharing a graph across threads must wrap it in
/// their own lock.
#[derive(Debug, Clone, Default)]
pub struct FollowGraph {
    /// Registered vertices by id
    vertices: HashMap<VertexId, Vertex>,
    /// Cached in-degrees in first-observation order
    in_degrees: Vec<(VertexId, usize)>,
    /// Position of each vertex in `in_degrees`
    in_degree_slots: HashMap<VertexId, usize>,
    /// Total number of edges, multiplicities included
    edge_count: usize,
}

impl FollowGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(vertex_capacity),
            in_degrees: Vec::with_capacity(vertex_capacity),
            in_degree_slots: HashMap::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    /// Registers a vertex.
    ///
    /// This method is idempotent - registering an id twice leaves the existing vertex and
    /// its edges untouched. No in-degree entry is created until the vertex receives an edge.
    pub fn add_vertex(&mut self, id: VertexId) {
        self.vertices.entry(id).or_insert_with(|| Vertex::new(id));
    }

    /// Adds a directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either vertex is not registered. The graph is
    /// left unchanged in that case.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            return Err(Error::InvalidArgument(format!(
                "both vertices must exist in the graph before adding edge {from} -> {to}"
            )));
        }

        if let Some(target) = self.vertices.get_mut(&to) {
            target.add_incoming_edge(from);
        }
        self.increment_in_degree(to);
        self.edge_count += 1;
        Ok(())
    }

    fn increment_in_degree(&mut self, id: VertexId) {
        match self.in_degree_slots.get(&id) {
            Some(&slot) => self.in_degrees[slot].1 += 1,
            None => {
                self.in_degree_slots.insert(id, self.in_degrees.len());
                self.in_degrees.push((id, 1));
            }
        }
    }

    /// Returns the cached in-degree of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InDegreeNotFound`] if `id` never received an edge, including when it
    /// is not registered at all. Absence is never reported as zero.
    pub fn in_degree(&self, id: VertexId) -> Result<usize> {
        self.in_degree_slots
            .get(&id)
            .map(|&slot| self.in_degrees[slot].1)
            .ok_or(Error::InDegreeNotFound(id))
    }

    /// Returns a copy of the in-degree index in first-observation order.
    ///
    /// Only vertices that received at least one edge appear.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<(VertexId, usize)> {
        self.in_degrees.clone()
    }

    /// Returns a snapshot of the vertex with the given id.
    ///
    /// Accepts either a [`VertexId`] or an `Option<VertexId>`; `None` stands for a missing
    /// identifier, such as a lookup key that failed to parse upstream.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `id` is `None`
    /// - [`Error::VertexNotFound`] if `id` is not registered
    pub fn vertex(&self, id: impl Into<Option<VertexId>>) -> Result<Vertex> {
        let id = id
            .into()
            .ok_or_else(|| Error::InvalidArgument("vertex id cannot be empty".to_string()))?;

        self.vertices
            .get(&id)
            .cloned()
            .ok_or(Error::VertexNotFound(id))
    }

    /// Borrowing lookup for algorithms inside the crate.
    pub(crate) fn vertex_ref(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if no vertex is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns all registered ids in ascending order.
    #[must_use]
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.vertices.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Flattens the graph into an adjacency mapping.
    ///
    /// Every registered vertex gets an entry holding the [`Edge::end`] of each edge stored
    /// on that vertex. Stored edges are the vertex's incoming edges, so a vertex with any
    /// followers maps to a set containing only itself, and a vertex without followers maps
    /// to an empty set. The mapping always has [`FollowGraph::vertex_count`] entries.
    #[must_use]
    pub fn export(&self) -> HashMap<VertexId, HashSet<VertexId>> {
        self.vertices
            .par_iter()
            .map(|(&id, vertex)| (id, vertex.incoming().map(Edge::end).collect::<HashSet<_>>()))
            .collect()
    }

    /// Computes a greedy approximation of a minimum dominating set.
    ///
    /// Vertices are ranked by in-degree (highest first, ties in first-observation order)
    /// and walked once. Each vertex not yet in the cover joins it, and the vertex plus all
    /// of its followers are marked visited. The walk stops as soon as every registered
    /// vertex has been visited.
    ///
    /// Vertices that never received an edge are not part of the ranking. They are never
    /// picked, and they only count as visited when they follow a picked vertex. When such
    /// vertices remain unvisited the walk ends with the cover reached so far.
    ///
    /// The result is a heuristic and is not guaranteed to be minimum.
    #[must_use]
    pub fn find_minimum_cover(&self) -> HashSet<VertexId> {
        cover::greedy_cover(self)
    }

    /// Checks that every vertex with a recorded in-degree is either in `cover` or follows
    /// a member of `cover`.
    ///
    /// Vertices that never received an edge are outside the scope of the check; see
    /// [`FollowGraph::uncovered`] for a listing over all vertices.
    #[must_use]
    pub fn is_covered_by(&self, cover: &HashSet<VertexId>) -> bool {
        let dominated = cover::dominated_by(self, cover);
        self.in_degrees
            .iter()
            .all(|(id, _)| dominated.contains(id))
    }

    /// Returns every registered vertex, in ascending order, that is neither in `cover` nor
    /// follows a member of `cover`.
    #[must_use]
    pub fn uncovered(&self, cover: &HashSet<VertexId>) -> Vec<VertexId> {
        let dominated = cover::dominated_by(self, cover);
        let mut missing: Vec<VertexId> = self
            .vertices
            .keys()
            .filter(|id| !dominated.contains(id))
            .copied()
            .collect();
        missing.sort_unstable();
        missing
    }
}

impl GraphBuilder for FollowGraph {
    fn add_vertex(&mut self, id: VertexId) {
        FollowGraph::add_vertex(self, id);
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        FollowGraph::add_edge(self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{id, simple_network};

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = simple_network();
        assert_eq!(graph.vertex_count(), 5);

        graph.add_vertex(id(1));
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.vertex(id(1)).unwrap().edges().len(), 3);
        assert_eq!(graph.in_degree(id(1)).unwrap(), 3);
    }

    #[test]
    fn test_add_vertex_creates_no_in_degree() {
        let mut graph = FollowGraph::new();
        graph.add_vertex(id(8));

        let err = graph.in_degree(id(8)).unwrap_err();
        assert!(matches!(err, Error::InDegreeNotFound(v) if v == id(8)));
        assert!(graph.in_degrees().is_empty());
    }

    #[test]
    fn test_add_edge_unregistered() {
        let mut graph = FollowGraph::new();
        graph.add_vertex(id(0));

        assert!(graph.add_edge(id(0), id(1)).unwrap_err().is_invalid_argument());
        assert!(graph.add_edge(id(1), id(0)).unwrap_err().is_invalid_argument());

        assert_eq!(graph.edge_count(), 0);
        assert!(graph.in_degree(id(0)).is_err());
        assert!(graph.vertex(id(0)).unwrap().edges().is_empty());
        assert!(!graph.contains_vertex(id(1)));
    }

    #[test]
    fn test_multi_edges() {
        let mut graph = FollowGraph::new();
        graph.add_vertex(id(1));
        graph.add_vertex(id(2));
        for _ in 0..4 {
            graph.add_edge(id(1), id(2)).unwrap();
        }

        assert_eq!(graph.in_degree(id(2)).unwrap(), 4);
        let target = graph.vertex(id(2)).unwrap();
        assert_eq!(target.edge_count_from(id(1)).unwrap(), 4);
        assert_eq!(target.sources(), HashSet::from([id(1)]));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_self_edge() {
        let mut graph = FollowGraph::new();
        graph.add_vertex(id(3));
        graph.add_edge(id(3), id(3)).unwrap();

        assert_eq!(graph.in_degree(id(3)).unwrap(), 1);
        assert!(graph.vertex(id(3)).unwrap().has_source(id(3)));
    }

    #[test]
    fn test_in_degree_matches_edges() {
        let graph = simple_network();
        for (vertex, degree) in graph.in_degrees() {
            assert_eq!(graph.vertex(vertex).unwrap().edges().len(), degree);
        }
    }

    #[test]
    fn test_in_degrees_first_observation_order() {
        let graph = simple_network();
        assert_eq!(
            graph.in_degrees(),
            vec![(id(1), 3), (id(0), 1), (id(3), 2)]
        );
    }

    #[test]
    fn test_vertex_lookup_errors() {
        let graph = simple_network();

        assert!(graph.vertex(None::<VertexId>).unwrap_err().is_invalid_argument());

        let err = graph.vertex(id(5)).unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(v) if v == id(5)));
        assert!(graph.vertex(id(-1)).unwrap_err().is_not_found());

        assert_eq!(graph.vertex(Some(id(1))).unwrap().id(), id(1));
    }

    #[test]
    fn test_vertex_snapshot_is_independent() {
        let graph = simple_network();

        let mut snapshot = graph.vertex(id(3)).unwrap();
        snapshot.add_incoming_edge(id(0));
        assert_eq!(snapshot.in_degree(), 3);

        let fresh = graph.vertex(id(3)).unwrap();
        assert_eq!(fresh.in_degree(), 2);
        assert!(!fresh.has_source(id(0)));
        assert_eq!(graph.in_degree(id(3)).unwrap(), 2);
    }

    #[test]
    fn test_export_directionality() {
        let graph = simple_network();
        let exported = graph.export();

        assert_eq!(exported.len(), graph.vertex_count());
        assert_eq!(exported[&id(1)], HashSet::from([id(1)]));
        assert_eq!(exported[&id(3)], HashSet::from([id(3)]));
        assert_eq!(exported[&id(0)], HashSet::from([id(0)]));
        assert!(exported[&id(2)].is_empty());
        assert!(exported[&id(4)].is_empty());
    }

    #[test]
    fn test_export_empty_graph() {
        assert!(FollowGraph::new().export().is_empty());
    }

    #[test]
    fn test_vertex_ids_sorted() {
        let mut graph = FollowGraph::with_capacity(3);
        for n in [5, -2, 9] {
            graph.add_vertex(id(n));
        }
        assert_eq!(graph.vertex_ids(), vec![id(-2), id(5), id(9)]);
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_builder_trait_delegates() {
        fn populate<B: GraphBuilder>(builder: &mut B) -> Result<()> {
            builder.add_vertex(id(0));
            builder.add_vertex(id(1));
            builder.add_edge(id(0), id(1))
        }

        let mut graph = FollowGraph::new();
        populate(&mut graph).unwrap();
        assert_eq!(graph.in_degree(id(1)).unwrap(), 1);
    }

    #[test]
    fn test_uncovered_lists_missing_vertices() {
        let graph = simple_network();
        let empty = HashSet::new();

        assert_eq!(graph.uncovered(&empty), graph.vertex_ids());
        assert!(!graph.is_covered_by(&empty));

        let cover = HashSet::from([id(1), id(3)]);
        assert!(graph.uncovered(&cover).is_empty());
        assert!(graph.is_covered_by(&cover));
    }
}
