//! Supporting utilities shared by the graph, the loader and reporting code.
//!
//! - [`sort_by_value`] / [`SortOrder`] - stable ranking of `(key, value)` pairs
//! - [`render_dot`] / [`escape_dot`] - Graphviz output

mod dot;
mod sort;

pub use dot::{escape_dot, render_dot};
pub use sort::{sort_by_value, SortOrder};
