//! DOT format utilities for graph visualization.
//!
//! This module renders adjacency mappings (as produced by
//! [`FollowGraph::export`](crate::FollowGraph::export)) in DOT format, which can be
//! rendered using Graphviz tools.

use std::{
    collections::{HashMap, HashSet},
    fmt::Write,
};

use crate::graph::VertexId;

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// This function handles all characters that have special meaning in DOT format,
/// including quotes, backslashes, newlines, and angle brackets.
///
/// # Examples
///
/// ```rust
/// use followcover::utils::escape_dot;
///
/// let escaped = escape_dot("followers<2024>");
/// assert_eq!(escaped, "followers\\<2024\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Renders an adjacency mapping as a DOT digraph.
///
/// Vertices and their edges are emitted in ascending id order so output is stable across
/// runs. Vertices contained in `highlight` are drawn filled.
///
/// # Arguments
///
/// * `name` - Graph label, escaped before use
/// * `adjacency` - Mapping from each vertex to the vertices it links to
/// * `highlight` - Vertices to emphasise, typically a cover
#[must_use]
pub fn render_dot(
    name: &str,
    adjacency: &HashMap<VertexId, HashSet<VertexId>>,
    highlight: &HashSet<VertexId>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph \"{}\" {{", escape_dot(name));
    let _ = writeln!(out, "    node [shape=circle];");

    let mut ids: Vec<VertexId> = adjacency.keys().copied().collect();
    ids.sort_unstable();

    for id in &ids {
        if highlight.contains(id) {
            let _ = writeln!(out, "    \"{id}\" [style=filled, fillcolor=lightblue];");
        } else {
            let _ = writeln!(out, "    \"{id}\";");
        }
    }

    for id in &ids {
        let mut targets: Vec<VertexId> = adjacency[id].iter().copied().collect();
        targets.sort_unstable();
        for target in targets {
            let _ = writeln!(out, "    \"{id}\" -> \"{target}\";");
        }
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dot_basic() {
        assert_eq!(escape_dot("hello"), "hello");
    }

    #[test]
    fn test_escape_dot_quotes() {
        assert_eq!(escape_dot("say \"hello\""), "say \\\"hello\\\"");
    }

    #[test]
    fn test_escape_dot_newlines() {
        assert_eq!(escape_dot("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_dot("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn test_render_dot() {
        let a = VertexId::new(1);
        let b = VertexId::new(2);
        let adjacency = HashMap::from([(b, HashSet::new()), (a, HashSet::from([b]))]);
        let highlight = HashSet::from([b]);

        let dot = render_dot("net \"x\"", &adjacency, &highlight);
        assert_eq!(
            dot,
            "digraph \"net \\\"x\\\"\" {\n    node [shape=circle];\n    \"1\";\n    \"2\" [style=filled, fillcolor=lightblue];\n    \"1\" -> \"2\";\n}\n"
        );
    }
}
