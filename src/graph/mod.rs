//! Follows-network model and greedy covering.
//!
//! # Key Components
//!
//! - [`VertexId`] - Integer identity key of a user
//! - [`Edge`] - Immutable directed follow relation
//! - [`Vertex`] - A user with its incoming edges, distinct sources and per-source counts
//! - [`FollowGraph`] - Vertex registry, in-degree index and the greedy cover
//! - [`GraphBuilder`] - The seam through which loaders populate a graph
//!
//! # Examples
//!
//! ```rust
//! use followcover::{FollowGraph, VertexId};
//!
//! let mut graph = FollowGraph::new();
//! for n in 0..7 {
//!     graph.add_vertex(VertexId::new(n));
//! }
//! for (from, to) in [(1, 0), (2, 0), (3, 0), (4, 0), (5, 4), (6, 4)] {
//!     graph.add_edge(VertexId::new(from), VertexId::new(to))?;
//! }
//!
//! let cover = graph.find_minimum_cover();
//! assert!(cover.contains(&VertexId::new(4)));
//! assert!(!cover.contains(&VertexId::new(6)));
//! # Ok::<(), followcover::Error>(())
//! ```

mod cover;
mod edge;
mod id;
mod network;
mod vertex;

pub use edge::Edge;
pub use id::VertexId;
pub use network::FollowGraph;
pub use vertex::Vertex;

use crate::Result;

/// Receives vertices and edges from a loader.
///
/// Implementors must accept `add_vertex` for ids that are already registered and must
/// reject `add_edge` for ids that are not. The edge-list loader in [`crate::loader`] only
/// talks to this trait, so it can populate a [`FollowGraph`] or any other sink.
pub trait GraphBuilder {
    /// Registers `id`; a no-op if it is already present.
    fn add_vertex(&mut self, id: VertexId);

    /// Adds the directed edge `from -> to` between two registered vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not registered.
    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()>;
}
