//! Reading and writing graphs in a line-oriented text format.
//!
//! The first line holds the number of vertices, the second line the number of
//! edges `e`, followed by `e` lines, each with two whitespace-separated
//! endpoints. Edges are added in the order in which they appear. Lines after
//! the last edge are ignored.
//!
//! ```text
//! 4
//! 3
//! 0 1
//! 1 2
//! 3 3
//! ```
//!
//! # Examples
//!
//! ```
//! use algraph::{io, Graph};
//!
//! let graph: Graph = "4\n3\n0 1\n1 2\n3 3\n".parse()?;
//! assert_eq!(graph.edge_count(), 3);
//!
//! let mut buffer = Vec::new();
//! io::write_graph(&graph, &mut buffer)?;
//! assert_eq!(io::read_graph(buffer.as_slice())?, graph);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    collections::TryReserveError,
    io::{self, BufRead, Write},
    num::ParseIntError,
    str::FromStr,
};

use thiserror::Error;
use tracing::debug;

use crate::{
    core::{Error, InvalidArgument},
    graph::Graph,
};

/// Error returned when reading a graph fails.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read graph")]
    Io(#[from] io::Error),

    /// The input is well-formed, but describes an invalid graph.
    #[error(transparent)]
    Graph(#[from] Error),

    #[error("unexpected end of input at line {line}, expected {expected}")]
    MissingLine { line: usize, expected: &'static str },

    #[error("invalid integer at line {line}")]
    InvalidNumber {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("expected two endpoints at line {line}, found {found}")]
    MalformedEdge { line: usize, found: usize },

    /// An edge endpoint outside of `[0, bound)`, including negative ones.
    #[error("endpoint {index} out of range (0..{bound}) at line {line}")]
    IndexOutOfRange { line: usize, index: i64, bound: usize },

    /// The declared number of vertices cannot be allocated.
    #[error("cannot allocate {count} vertices")]
    TooLarge {
        count: usize,
        #[source]
        source: TryReserveError,
    },
}

impl From<InvalidArgument> for ParseError {
    fn from(kind: InvalidArgument) -> Self {
        ParseError::Graph(kind.into())
    }
}

struct Lines<R> {
    inner: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<String, ParseError> {
        self.line += 1;
        match self.inner.next() {
            Some(text) => Ok(text?),
            None => Err(ParseError::MissingLine {
                line: self.line,
                expected,
            }),
        }
    }

    fn parse<T: FromStr<Err = ParseIntError>>(&self, token: &str) -> Result<T, ParseError> {
        token.parse().map_err(|source| ParseError::InvalidNumber {
            line: self.line,
            source,
        })
    }

    fn next_count(&mut self, what: &'static str) -> Result<i64, ParseError> {
        let text = self.next_line(what)?;
        self.parse(text.trim())
    }

    fn next_edge(&mut self, bound: usize) -> Result<(usize, usize), ParseError> {
        let text = self.next_line("edge")?;
        let tokens = text.split_whitespace().collect::<Vec<_>>();

        match tokens.as_slice() {
            [a, b] => Ok((self.endpoint(a, bound)?, self.endpoint(b, bound)?)),
            _ => Err(ParseError::MalformedEdge {
                line: self.line,
                found: tokens.len(),
            }),
        }
    }

    fn endpoint(&self, token: &str, bound: usize) -> Result<usize, ParseError> {
        let index = self.parse::<i64>(token)?;

        match usize::try_from(index) {
            Ok(v) if v < bound => Ok(v),
            _ => Err(ParseError::IndexOutOfRange {
                line: self.line,
                index,
                bound,
            }),
        }
    }
}

fn check_count(what: &'static str, count: i64) -> Result<usize, ParseError> {
    usize::try_from(count).map_err(|_| InvalidArgument::NegativeCount { what, count }.into())
}

/// Reads a graph from the text format described in the [module](self)
/// documentation.
///
/// Negative counts fail with [`InvalidArgument::NegativeCount`] wrapped in
/// [`ParseError::Graph`], the edge count being checked first. Endpoints
/// outside of the graph, negative ones included, fail with
/// [`ParseError::IndexOutOfRange`]. A vertex count that cannot be allocated
/// fails with [`ParseError::TooLarge`].
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, ParseError> {
    let mut lines = Lines::new(reader);

    let vertex_count = lines.next_count("vertices")?;
    let edge_count = lines.next_count("edges")?;

    let edge_count = check_count("edges", edge_count)?;
    let vertex_count = check_count("vertices", vertex_count)?;

    // Capped, the edge count is not checked against the input length.
    let mut graph = Graph::try_with_capacity(vertex_count, edge_count.min(1 << 16))
        .map_err(|source| ParseError::TooLarge {
            count: vertex_count,
            source,
        })?;

    for _ in 0..edge_count {
        let (a, b) = lines.next_edge(vertex_count)?;
        graph.add_edge_unchecked(a, b);
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph parsed"
    );

    Ok(graph)
}

/// Writes the graph in the text format described in the [module](self)
/// documentation. Edges are written in the order they were added, so reading
/// the output back produces an equal graph.
pub fn write_graph<W: Write>(graph: &Graph, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", graph.vertex_count())?;
    writeln!(writer, "{}", graph.edge_count())?;

    for (a, b) in graph.edges() {
        writeln!(writer, "{a} {b}")?;
    }

    writer.flush()
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_graph(s.as_bytes())
    }
}
