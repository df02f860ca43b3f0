use thiserror::Error;

use crate::graph::VertexId;

macro_rules! malformed_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            line: $line,
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            line: $line,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Failures fall into two kinds that callers are expected to branch on: an operation received
/// an argument it cannot act upon ([`Error::InvalidArgument`]), or a query referenced something
/// that was never registered or never observed ([`Error::VertexNotFound`],
/// [`Error::InDegreeNotFound`], [`Error::EdgeCountNotFound`]). [`Error::is_not_found`] groups
/// the latter. None of these signal corruption; graph state is unchanged after any failure.
///
/// # Error Categories
///
/// ## Graph Errors
/// - [`Error::InvalidArgument`] - Missing identifier or edge between unregistered vertices
/// - [`Error::VertexNotFound`] - Lookup of an id that was never registered
/// - [`Error::InDegreeNotFound`] - In-degree query for a vertex that never received an edge
/// - [`Error::EdgeCountNotFound`] - Multiplicity query for a vertex pair with no edge
///
/// ## Loading Errors
/// - [`Error::Malformed`] - An edge-list line could not be parsed
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// # Examples
///
/// ```rust
/// use followcover::{Error, FollowGraph, VertexId};
///
/// let mut graph = FollowGraph::new();
/// graph.add_vertex(VertexId::new(1));
///
/// match graph.in_degree(VertexId::new(1)) {
///     Ok(degree) => println!("in-degree: {degree}"),
///     Err(Error::InDegreeNotFound(id)) => println!("{id} has no followers yet"),
///     Err(e) => println!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An operation was given an argument it cannot act upon.
    ///
    /// Raised for a missing vertex identifier and for [`crate::FollowGraph::add_edge`]
    /// calls naming a vertex that has not been registered.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// The requested vertex is not registered in the graph.
    #[error("Vertex {0} is not registered in the graph")]
    VertexNotFound(VertexId),

    /// The vertex has never been the target of an edge.
    ///
    /// In-degrees are recorded lazily; an absent entry is reported instead of
    /// being read as zero.
    #[error("No in-degree has been recorded for vertex {0}")]
    InDegreeNotFound(VertexId),

    /// No edge from `from` into `target` has ever been added.
    #[error("Vertex {target} has no incoming edge from vertex {from}")]
    EdgeCountNotFound {
        /// The vertex whose incoming edges were queried
        target: VertexId,
        /// The queried source vertex
        from: VertexId,
    },

    /// An edge list could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `line` - 1-based line number in the input
    #[error("Malformed edge list - line {line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The input line on which the error was detected
        line: usize,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while opening or mapping
    /// an edge-list file.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for the not-found kind: a query referenced a vertex or relation
    /// that was never registered or observed.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::VertexNotFound(_) | Error::InDegreeNotFound(_) | Error::EdgeCountNotFound { .. }
        )
    }

    /// Returns `true` if this is an [`Error::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kind() {
        assert!(Error::VertexNotFound(VertexId::new(1)).is_not_found());
        assert!(Error::InDegreeNotFound(VertexId::new(1)).is_not_found());
        assert!(Error::EdgeCountNotFound {
            target: VertexId::new(1),
            from: VertexId::new(2),
        }
        .is_not_found());
        assert!(!Error::InvalidArgument("x".to_string()).is_not_found());
    }

    #[test]
    fn test_invalid_argument_kind() {
        assert!(Error::InvalidArgument("x".to_string()).is_invalid_argument());
        assert!(!Error::VertexNotFound(VertexId::new(3)).is_invalid_argument());
    }

    #[test]
    fn test_malformed_macro() {
        let err = malformed_error!(7, "expected {} fields", 2);
        match err {
            Error::Malformed { message, line } => {
                assert_eq!(line, 7);
                assert_eq!(message, "expected 2 fields");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_messages() {
        let err = Error::EdgeCountNotFound {
            target: VertexId::new(1),
            from: VertexId::new(2),
        };
        assert_eq!(
            err.to_string(),
            "Vertex 1 has no incoming edge from vertex 2"
        );
        assert_eq!(
            Error::VertexNotFound(VertexId::new(5)).to_string(),
            "Vertex 5 is not registered in the graph"
        );
    }
}
