//! Vertex identifier for follows networks.
//!
//! This module provides the [`VertexId`] type, the integer identity key of a user in a
//! [`FollowGraph`](crate::FollowGraph). Identifiers are assigned externally (typically the
//! user ids found in an edge list) and are unique within a graph.

use std::{fmt, str::FromStr};

/// The identity of a vertex within a follows network.
///
/// `VertexId` wraps an `i64` user id. All maps and sets in this crate are keyed by
/// `VertexId` rather than by vertex snapshots, so two snapshots of the same user always
/// compare and hash identically no matter when they were taken.
///
/// # Examples
///
/// ```rust
/// use followcover::VertexId;
/// use std::collections::HashMap;
///
/// let alice = VertexId::new(42);
/// let bob = VertexId::new(7);
/// assert_ne!(alice, bob);
///
/// let mut followers: HashMap<VertexId, usize> = HashMap::new();
/// followers.insert(alice, 3);
/// assert_eq!(followers.get(&VertexId::new(42)), Some(&3));
/// ```
///
/// # Thread Safety
///
/// `VertexId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(i64);

impl VertexId {
    /// Creates a new `VertexId` from a raw user id.
    #[must_use]
    #[inline]
    pub const fn new(id: i64) -> Self {
        VertexId(id)
    }

    /// Returns the raw user id.
    #[must_use]
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    /// Formats the vertex as its bare user id.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VertexId {
    #[inline]
    fn from(id: i64) -> Self {
        VertexId(id)
    }
}

impl From<VertexId> for i64 {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

impl FromStr for VertexId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(VertexId)
    }
}
