// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'loader/mod.rs' uses mmap to map an edge list into memory

//! # followcover
//!
//! A directed "follows" network of users and a greedy approximation of its dominating
//! set: a small group of users such that every other user follows at least one member.
//!
//! Users are identified by integers. An edge `a -> b` means *a follows b*; parallel
//! edges are kept and counted, and self-follows are accepted like any other edge.
//!
//! ## Features
//!
//! - **Multigraph bookkeeping** - Incoming edges, distinct followers and per-follower edge
//!   counts for every user
//! - **In-degree index** - Maintained incrementally in first-observation order
//! - **Greedy cover** - One pass over users ranked by in-degree
//! - **Edge-list loading** - Memory-mapped SNAP-style `<from> <to>` files
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use followcover::prelude::*;
//!
//! let graph = load_graph_from_mem(b"1 0\n2 0\n3 0\n")?;
//! let cover = graph.find_minimum_cover();
//! assert_eq!(cover.len(), 1);
//! assert!(graph.is_covered_by(&cover));
//! # Ok::<(), followcover::Error>(())
//! ```
//!
//! ### Building a Graph by Hand
//!
//! Vertices must be registered before edges may reference them:
//!
//! ```rust
//! use followcover::{Error, FollowGraph, VertexId};
//!
//! let (a, b) = (VertexId::new(0), VertexId::new(1));
//! let mut graph = FollowGraph::new();
//! graph.add_vertex(a);
//!
//! assert!(matches!(graph.add_edge(a, b), Err(Error::InvalidArgument(_))));
//!
//! graph.add_vertex(b);
//! graph.add_edge(a, b)?;
//! graph.add_edge(a, b)?;
//!
//! assert_eq!(graph.in_degree(b)?, 2);
//! assert_eq!(graph.vertex(b)?.edge_count_from(a)?, 2);
//! # Ok::<(), followcover::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - [`VertexId`], [`Edge`], [`Vertex`], [`FollowGraph`] and the greedy cover
//! - [`loader`] - Edge-list parsing and loading through the [`GraphBuilder`] seam
//! - [`utils`] - Stable value sorting and DOT rendering
//! - [`prelude`] - Convenient re-exports
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! ```rust
//! use followcover::{Error, FollowGraph, VertexId};
//!
//! let graph = FollowGraph::new();
//! match graph.in_degree(VertexId::new(42)) {
//!     Ok(degree) => println!("in-degree {degree}"),
//!     Err(Error::InDegreeNotFound(id)) => println!("{id} never received an edge"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo install cargo-fuzz
//! cargo +nightly fuzz run edgelist --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use followcover::prelude::*;
///
/// let mut graph = FollowGraph::new();
/// graph.add_vertex(VertexId::new(7));
/// assert_eq!(graph.vertex_count(), 1);
/// ```
pub mod prelude;

/// Follows-network model and the greedy cover.
///
/// See [`FollowGraph`] for the main entry point.
pub mod graph;

/// Edge-list loading.
///
/// Parses `<from> <to>` lines and feeds them to any [`GraphBuilder`].
pub mod loader;

/// Shared helpers: stable sorting by value and DOT rendering.
pub mod utils;

/// `followcover` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `followcover` Error type
///
/// The main error type for all operations in this crate.
///
/// # Examples
///
/// ```rust
/// use followcover::{loader::load_graph_from_mem, Error};
///
/// match load_graph_from_mem(b"0 1\nnot an edge\n") {
///     Ok(_) => unreachable!(),
///     Err(Error::Malformed { line, message }) => println!("line {line}: {message}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
pub use error::Error;

/// Core graph types.
pub use graph::{Edge, FollowGraph, GraphBuilder, Vertex, VertexId};
