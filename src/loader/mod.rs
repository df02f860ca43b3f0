//! Edge-list loading.
//!
//! This module turns a line-oriented edge list into [`GraphBuilder`] calls. For every edge
//! line `<from> <to>` the loader registers both endpoints and then adds the edge, so a
//! builder always sees a vertex before any edge that touches it.
//!
//! # Key Components
//!
//! - [`EdgeListLoader`] - Owns the input, either memory-mapped from disk or held in memory
//! - [`EdgeLines`] - Streaming line parser yielding [`Edge`]s
//! - [`LoadStats`] - Counters reported after a load
//! - [`load_graph`] - One-call path-to-[`FollowGraph`] convenience
//!
//! # Examples
//!
//! ```rust
//! use followcover::{loader::EdgeListLoader, FollowGraph, VertexId};
//!
//! let loader = EdgeListLoader::from_mem(b"0 1\n2 1\n2 1\n".to_vec());
//! let mut graph = FollowGraph::new();
//! let stats = loader.load_into(&mut graph)?;
//!
//! assert_eq!(stats.edges, 3);
//! assert_eq!(graph.in_degree(VertexId::new(1))?, 3);
//! # Ok::<(), followcover::Error>(())
//! ```
//!
//! # Failure Behaviour
//!
//! Loading stops at the first malformed line. Edges read before it remain in the builder;
//! each individual `add_edge` is still all-or-nothing.

mod parser;

pub use parser::EdgeLines;

use memmap2::Mmap;
use std::{fs, io::Read, path::Path};

use crate::{
    graph::{Edge, FollowGraph, GraphBuilder},
    Error::FileError,
    Result,
};

/// Backing storage of an edge list.
#[derive(Debug)]
enum Source {
    /// Memory-mapped file data
    Mapped(Mmap),
    /// Owned in-memory buffer
    Memory(Vec<u8>),
}

/// Counters collected while loading an edge list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of edge lines applied to the builder
    pub edges: usize,
    /// Number of blank and comment lines
    pub skipped: usize,
    /// Number of lines read in total
    pub lines: usize,
}

/// An edge list ready to be loaded into a [`GraphBuilder`].
///
/// Files are memory-mapped rather than read up front, which keeps the footprint of large
/// follower dumps down to the pages the parser is currently touching.
///
/// # Examples
///
/// ```rust,no_run
/// use followcover::{loader::EdgeListLoader, FollowGraph};
///
/// let loader = EdgeListLoader::from_path("data/twitter_higgs.txt")?;
/// let mut graph = FollowGraph::new();
/// loader.load_into(&mut graph)?;
/// println!("{} users", graph.vertex_count());
/// # Ok::<(), followcover::Error>(())
/// ```
#[derive(Debug)]
pub struct EdgeListLoader {
    source: Source,
}

impl EdgeListLoader {
    /// Memory-maps the edge list at `path`.
    ///
    /// # Arguments
    /// * `path` - Path to the edge list. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// Anything that is not a regular file (a FIFO, `/dev/stdin`, a process substitution)
    /// cannot be mapped and is read into memory instead.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened, read or mapped.
    pub fn from_path(path: impl AsRef<Path>) -> Result<EdgeListLoader> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(FileError)?;
        let metadata = file.metadata().map_err(FileError)?;

        if !metadata.is_file() {
            let mut data = Vec::new();
            file.read_to_end(&mut data).map_err(FileError)?;
            log::debug!("read {} bytes from stream {}", data.len(), path.display());
            return Ok(EdgeListLoader {
                source: Source::Memory(data),
            });
        }

        // Zero-length mappings are rejected by the OS
        if metadata.len() == 0 {
            log::debug!("edge list {} is empty", path.display());
            return Ok(EdgeListLoader {
                source: Source::Memory(Vec::new()),
            });
        }

        let mmap = unsafe { Mmap::map(&file) }.map_err(FileError)?;
        Ok(EdgeListLoader {
            source: Source::Mapped(mmap),
        })
    }

    /// Wraps an in-memory edge list.
    #[must_use]
    pub fn from_mem(data: Vec<u8>) -> EdgeListLoader {
        EdgeListLoader {
            source: Source::Memory(data),
        }
    }

    /// Returns the raw edge-list bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        match &self.source {
            Source::Mapped(mmap) => &mmap[..],
            Source::Memory(data) => data.as_slice(),
        }
    }

    /// Returns the size of the edge list in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns `true` if the edge list holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// Returns a streaming parser over the edge list.
    #[must_use]
    pub fn edges(&self) -> EdgeLines<'_> {
        EdgeLines::new(self.data())
    }

    /// Feeds every edge into `builder`.
    ///
    /// For each edge both endpoints are registered with [`GraphBuilder::add_vertex`] before
    /// [`GraphBuilder::add_edge`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] for the first line that cannot be parsed, or whatever
    /// error the builder reports for an edge.
    pub fn load_into<B: GraphBuilder>(&self, builder: &mut B) -> Result<LoadStats> {
        let mut lines = self.edges();
        let mut edges = 0;

        for edge in lines.by_ref() {
            apply(builder, edge?)?;
            edges += 1;
        }

        let stats = LoadStats {
            edges,
            skipped: lines.skipped(),
            lines: lines.lines(),
        };
        log::debug!(
            "loaded {} edges from {} lines ({} skipped)",
            stats.edges,
            stats.lines,
            stats.skipped
        );
        Ok(stats)
    }
}

fn apply<B: GraphBuilder>(builder: &mut B, edge: Edge) -> Result<()> {
    builder.add_vertex(edge.start());
    builder.add_vertex(edge.end());
    builder.add_edge(edge.start(), edge.end())
}

/// Loads the edge list at `path` into a new [`FollowGraph`].
///
/// # Errors
///
/// Returns [`crate::Error::FileError`] if the file cannot be read and [`crate::Error::Malformed`] if a
/// line cannot be parsed.
pub fn load_graph(path: impl AsRef<Path>) -> Result<FollowGraph> {
    let path = path.as_ref();
    let loader = EdgeListLoader::from_path(path)?;

    let mut graph = FollowGraph::new();
    loader.load_into(&mut graph).map_err(|error| {
        log::debug!("failed to load {}: {}", path.display(), error);
        error
    })?;

    log::info!(
        "loaded {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Convenience for callers holding an edge list in memory.
///
/// # Errors
///
/// Returns [`crate::Error::Malformed`] if a line cannot be parsed.
pub fn load_graph_from_mem(data: &[u8]) -> Result<FollowGraph> {
    let mut graph = FollowGraph::new();
    for edge in EdgeLines::new(data) {
        apply(&mut graph, edge?)?;
    }
    Ok(graph)
}
