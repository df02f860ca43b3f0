//! # followcover Prelude
//!
//! The most commonly used types and functions from the followcover library. Import this
//! module to build, load and cover a follows network with a single `use`.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all followcover operations
pub use crate::Error;

/// The result type used throughout followcover
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Vertex identity, edges, vertex snapshots and the network itself
pub use crate::graph::{Edge, FollowGraph, GraphBuilder, Vertex, VertexId};

// ================================================================================================
// Loading
// ================================================================================================

/// Edge-list parsing and loading
pub use crate::loader::{load_graph, load_graph_from_mem, EdgeLines, EdgeListLoader, LoadStats};

// ================================================================================================
// Utilities
// ================================================================================================

/// Ordering helpers for in-degree rankings
pub use crate::utils::{sort_by_value, SortOrder};
