//! Line parser for edge-list text.
//!
//! Each data line holds two integer user ids separated by ASCII whitespace: the follower
//! first, the followed user second. Blank lines and comment lines (first non-blank
//! character `#` or `%`, as written by SNAP and KONECT exports) are skipped.

use crate::{
    graph::{Edge, VertexId},
    Result,
};

/// Iterator over the edges in an edge-list buffer.
///
/// Yields one [`Edge`] per data line. The first malformed line produces an
/// [`Error::Malformed`](crate::Error::Malformed) carrying its 1-based line number, after
/// which the iterator is exhausted.
///
/// # Examples
///
/// ```rust
/// use followcover::{loader::EdgeLines, VertexId};
///
/// let mut lines = EdgeLines::new(b"# users\n0 1\n\n2\t1\n");
/// let edges = lines.by_ref().collect::<followcover::Result<Vec<_>>>()?;
///
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[1].start(), VertexId::new(2));
/// assert_eq!(lines.skipped(), 2);
/// # Ok::<(), followcover::Error>(())
/// ```
pub struct EdgeLines<'a> {
    data: &'a [u8],
    /// Offset of the next unread byte
    position: usize,
    /// Number of lines consumed so far
    line: usize,
    skipped: usize,
    failed: bool,
}

impl<'a> EdgeLines<'a> {
    /// Creates a parser over `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        EdgeLines {
            data,
            position: 0,
            line: 0,
            skipped: 0,
            failed: false,
        }
    }

    /// Number of blank and comment lines passed over so far.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.position >= self.data.len() {
            return None;
        }

        let rest = &self.data[self.position..];
        let (line, consumed) = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.position += consumed;
        self.line += 1;
        Some(line)
    }

    fn parse_line(&self, raw: &[u8]) -> Result<Option<Edge>> {
        let text = std::str::from_utf8(raw)
            .map_err(|_| malformed_error!(self.line, "line is not valid UTF-8"))?;
        let text = text.trim();

        if text.is_empty() || text.starts_with('#') || text.starts_with('%') {
            return Ok(None);
        }

        let mut fields = text.split_ascii_whitespace();
        let (Some(from), Some(to), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed_error!(
                self.line,
                "expected 2 fields `<from> <to>`, found `{}`",
                text
            ));
        };

        Ok(Some(Edge::new(self.parse_id(from)?, self.parse_id(to)?)))
    }

    fn parse_id(&self, field: &str) -> Result<VertexId> {
        field
            .parse::<VertexId>()
            .map_err(|e| malformed_error!(self.line, "invalid vertex id `{}`: {}", field, e))
    }
}

impl Iterator for EdgeLines<'_> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while let Some(raw) = self.next_line() {
            match self.parse_line(raw) {
                Ok(Some(edge)) => return Some(Ok(edge)),
                Ok(None) => self.skipped += 1,
                Err(error) => {
                    self.failed = true;
                    return Some(Err(error));
                }
            }
        }
        None
    }
}
