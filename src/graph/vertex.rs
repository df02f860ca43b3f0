//! Vertex storage for follows networks.
//!
//! A [`Vertex`] owns everything known about the edges that end at it: the ordered list of
//! incoming edges, the deduplicated set of vertices those edges come from, and how many
//! edges each of those sources contributed. Multi-edges are legal; they lengthen the edge
//! list and raise the per-source count but leave the source set unchanged.
//!
//! # Invariants
//!
//! - `source_counts` has exactly the keys in `sources`
//! - the values of `source_counts` sum to the length of `incoming`

use std::{
    collections::{HashMap, HashSet},
    hash::{Hash, Hasher},
};

use crate::{
    graph::{Edge, VertexId},
    Error, Result,
};

/// A user in the follows network together with its incoming edges.
///
/// Vertices handed out by [`FollowGraph::vertex`](crate::FollowGraph::vertex) are owned
/// snapshots. Mutating a snapshot, for example through [`Vertex::add_incoming_edge`], never
/// changes the graph it came from.
///
/// Equality and hashing use the [`VertexId`] only, so a snapshot stays interchangeable
/// with the vertex it was taken from.
///
/// # Examples
///
/// ```rust
/// use followcover::{Vertex, VertexId};
///
/// let mut vertex = Vertex::new(VertexId::new(1));
/// vertex.add_incoming_edge(VertexId::new(2));
/// vertex.add_incoming_edge(VertexId::new(2));
///
/// assert_eq!(vertex.in_degree(), 2);
/// assert_eq!(vertex.sources().len(), 1);
/// assert_eq!(vertex.edge_count_from(VertexId::new(2))?, 2);
/// # Ok::<(), followcover::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    /// Edges ending at this vertex, in insertion order
    incoming: Vec<Edge>,
    /// Distinct vertices with at least one edge into this vertex
    sources: HashSet<VertexId>,
    /// Edge multiplicity per source
    source_counts: HashMap<VertexId, usize>,
}

impl Vertex {
    /// Creates a vertex with no incoming edges.
    #[must_use]
    pub fn new(id: VertexId) -> Self {
        Vertex {
            id,
            incoming: Vec::new(),
            sources: HashSet::new(),
            source_counts: HashMap::new(),
        }
    }

    /// Returns the identity of this vertex.
    #[must_use]
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Records a new edge from `from` into this vertex.
    ///
    /// Appends the edge, adds `from` to the source set and bumps its multiplicity.
    /// `from` itself is not touched.
    pub fn add_incoming_edge(&mut self, from: VertexId) {
        self.incoming.push(Edge::new(from, self.id));
        self.sources.insert(from);
        *self.source_counts.entry(from).or_insert(0) += 1;
    }

    /// Returns how many edges `other` has into this vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeCountNotFound`] if `other` never pointed to this vertex.
    pub fn edge_count_from(&self, other: VertexId) -> Result<usize> {
        self.source_counts
            .get(&other)
            .copied()
            .ok_or(Error::EdgeCountNotFound {
                target: self.id,
                from: other,
            })
    }

    /// Returns a copy of the incoming edge list, in insertion order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.incoming.clone()
    }

    /// Returns a copy of the set of distinct source vertices.
    #[must_use]
    pub fn sources(&self) -> HashSet<VertexId> {
        self.sources.clone()
    }

    /// Returns a copy of the per-source edge multiplicities.
    #[must_use]
    pub fn source_counts(&self) -> HashMap<VertexId, usize> {
        self.source_counts.clone()
    }

    /// Returns `true` if `other` has at least one edge into this vertex.
    #[must_use]
    pub fn has_source(&self, other: VertexId) -> bool {
        self.sources.contains(&other)
    }

    /// Returns the number of incoming edges, multiplicities included.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Iterates the distinct sources without copying the set.
    pub(crate) fn source_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.sources.iter().copied()
    }

    /// Iterates the incoming edges without copying the list.
    pub(crate) fn incoming(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.incoming.iter()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> VertexId {
        VertexId::new(n)
    }

    #[test]
    fn test_new_vertex_is_empty() {
        let vertex = Vertex::new(id(3));
        assert_eq!(vertex.id(), id(3));
        assert_eq!(vertex.in_degree(), 0);
        assert!(vertex.edges().is_empty());
        assert!(vertex.sources().is_empty());
        assert!(vertex.source_counts().is_empty());
    }

    #[test]
    fn test_add_incoming_edge() {
        let mut vertex = Vertex::new(id(1));
        vertex.add_incoming_edge(id(0));
        vertex.add_incoming_edge(id(2));
        vertex.add_incoming_edge(id(2));

        let edges = vertex.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], Edge::new(id(0), id(1)));
        assert_eq!(edges[1].start(), id(2));
        assert!(edges.iter().all(|e| e.end() == id(1)));

        assert_eq!(vertex.sources(), HashSet::from([id(0), id(2)]));
        assert_eq!(vertex.edge_count_from(id(2)).unwrap(), 2);
        assert_eq!(vertex.edge_count_from(id(0)).unwrap(), 1);
    }

    #[test]
    fn test_counts_match_edges() {
        let mut vertex = Vertex::new(id(9));
        for from in [1, 2, 2, 3, 3, 3, 9] {
            vertex.add_incoming_edge(id(from));
        }

        let counts = vertex.source_counts();
        assert_eq!(counts.values().sum::<usize>(), vertex.edges().len());

        let keys: HashSet<VertexId> = counts.keys().copied().collect();
        assert_eq!(keys, vertex.sources());
    }

    #[test]
    fn test_edge_count_from_unknown_source() {
        let mut vertex = Vertex::new(id(1));
        vertex.add_incoming_edge(id(0));

        let err = vertex.edge_count_from(id(4)).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(
            err,
            Error::EdgeCountNotFound { target, from } if target == id(1) && from == id(4)
        ));
    }

    #[test]
    fn test_returned_collections_are_copies() {
        let mut vertex = Vertex::new(id(1));
        vertex.add_incoming_edge(id(0));

        let mut edges = vertex.edges();
        edges.push(Edge::new(id(7), id(1)));
        let mut sources = vertex.sources();
        sources.insert(id(7));
        let mut counts = vertex.source_counts();
        counts.insert(id(7), 5);

        assert_eq!(vertex.edges().len(), 1);
        assert!(!vertex.has_source(id(7)));
        assert!(vertex.edge_count_from(id(7)).is_err());
    }

    #[test]
    fn test_identity_by_id() {
        let mut original = Vertex::new(id(5));
        let snapshot = original.clone();
        original.add_incoming_edge(id(6));

        assert_eq!(original, snapshot);

        let set: HashSet<Vertex> = [original, snapshot].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_self_edge() {
        let mut vertex = Vertex::new(id(2));
        vertex.add_incoming_edge(id(2));

        assert!(vertex.has_source(id(2)));
        assert!(vertex.edges()[0].is_self_loop());
    }
}
