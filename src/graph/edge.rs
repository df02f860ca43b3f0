//! Directed follow relation between two vertices.
//!
//! An [`Edge`] records that its `start` vertex follows its `end` vertex. Edges are stored
//! on their target vertex (see [`Vertex::edges`](crate::Vertex::edges)) and are immutable
//! once created.

use std::fmt;

use crate::graph::VertexId;

/// An immutable directed link from `start` to `end`.
///
/// The endpoints are held as [`VertexId`] values. [`Edge::start`] and [`Edge::end`] hand out
/// fresh copies on every call, so nothing a caller does with the returned value can reach
/// the edge itself. Use [`FollowGraph::vertex`](crate::FollowGraph::vertex) to obtain a full
/// snapshot of either endpoint.
///
/// # Examples
///
/// ```rust
/// use followcover::{Edge, VertexId};
///
/// let edge = Edge::new(VertexId::new(2), VertexId::new(1));
/// assert_eq!(edge.start(), VertexId::new(2));
/// assert_eq!(edge.end(), VertexId::new(1));
/// assert_eq!(edge.to_string(), "2 -> 1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The follower
    start: VertexId,
    /// The followed vertex, which gains in-degree
    end: VertexId,
}

impl Edge {
    /// Creates an edge from `from` to `to`.
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId) -> Self {
        Edge {
            start: from,
            end: to,
        }
    }

    /// Returns the source vertex of this edge.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> VertexId {
        self.start
    }

    /// Returns the target vertex of this edge.
    #[must_use]
    #[inline]
    pub const fn end(&self) -> VertexId {
        self.end
    }

    /// Returns `true` if the edge starts and ends at the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
