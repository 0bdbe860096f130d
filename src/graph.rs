//! Undirected, unweighted graph with vertices indexed by `0..vertex_count`.
//!
//! The graph is a multigraph: parallel edges and self-loops are allowed. The
//! number of vertices is fixed when the graph is created and edges can only be
//! added.
//!
//! # Examples
//!
//! ```
//! use algraph::Graph;
//!
//! let mut graph = Graph::new(4);
//!
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 2)?;
//!
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.degree(2)?, 3);
//! assert!(graph.add_edge(3, 4).is_err());
//! # Ok::<(), algraph::core::Error>(())
//! ```

use std::{collections::TryReserveError, fmt, iter::FusedIterator, ops::Range, slice};

use crate::core::{check_index, Error};

/// Undirected multigraph backed by adjacency lists.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    endpoints: Vec<[usize; 2]>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    /// Creates a graph with `vertex_count` vertices and no edges, with space
    /// preallocated for `edge_count` edges.
    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            endpoints: Vec::with_capacity(edge_count),
        }
    }

    /// Like [`with_capacity`](Graph::with_capacity), but reports allocation
    /// failure instead of aborting. Used for vertex counts that come from
    /// untrusted input.
    pub(crate) fn try_with_capacity(
        vertex_count: usize,
        edge_count: usize,
    ) -> Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);

        let mut endpoints = Vec::new();
        endpoints.try_reserve_exact(edge_count)?;

        Ok(Self {
            adjacency,
            endpoints,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, that is, the number of successful
    /// [`add_edge`](Graph::add_edge) calls.
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.vertex_count()
    }

    /// Returns the range of all vertex indices.
    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Returns the endpoints of all edges in the order they were added.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            inner: self.endpoints.iter(),
        }
    }

    /// Adds an edge between `a` and `b`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if any of the endpoints is not a
    /// vertex of the graph, in which case the graph is left unchanged.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<(), Error> {
        let bound = self.vertex_count();
        check_index(a, bound)?;
        check_index(b, bound)?;

        self.add_edge_unchecked(a, b);
        Ok(())
    }

    /// Adds an edge between vertices known to be valid.
    pub(crate) fn add_edge_unchecked(&mut self, a: usize, b: usize) {
        debug_assert!(self.contains_vertex(a) && self.contains_vertex(b));

        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.endpoints.push([a, b]);
    }

    /// Adds all edges from the iterator in order.
    ///
    /// Stops at the first invalid edge. The edges preceding it remain in the
    /// graph.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let edges = edges.into_iter();
        self.endpoints.reserve(edges.size_hint().0);

        for (a, b) in edges {
            self.add_edge(a, b)?;
        }

        Ok(())
    }

    /// Returns an iterator over the neighbors of `v`.
    ///
    /// A neighbor connected by multiple edges is yielded multiple times, a
    /// self-loop yields `v` twice. The order is not specified.
    pub fn adjacent(&self, v: usize) -> Result<Adjacent<'_>, Error> {
        check_index(v, self.vertex_count())?;
        Ok(Adjacent {
            inner: self.adjacency[v].iter(),
        })
    }

    /// Returns the number of edge endpoints incident to `v`. Self-loops are
    /// counted twice.
    pub fn degree(&self, v: usize) -> Result<usize, Error> {
        check_index(v, self.vertex_count())?;
        Ok(self.adjacency[v].len())
    }

    /// Neighbors of a vertex known to be valid.
    pub(crate) fn neighbors_of(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.vertex_count(),
            self.edge_count()
        )?;

        for (v, neighbors) in self.adjacency.iter().enumerate() {
            let mut neighbors = neighbors.clone();
            neighbors.sort_unstable();

            write!(f, "{v}:")?;
            for w in neighbors {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Iterator over neighbors of a vertex.
///
/// Returned by [`Graph::adjacent`].
#[derive(Debug, Clone)]
pub struct Adjacent<'a> {
    inner: slice::Iter<'a, usize>,
}

impl Iterator for Adjacent<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Adjacent<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Adjacent<'_> {}

impl FusedIterator for Adjacent<'_> {}

/// Iterator over edge endpoints.
///
/// Returned by [`Graph::edges`].
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    inner: slice::Iter<'a, [usize; 2]>,
}

impl Iterator for Edges<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|&[a, b]| (a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl FusedIterator for Edges<'_> {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn try_with_capacity() {
        assert_eq!(Graph::try_with_capacity(5, 3), Ok(Graph::new(5)));
        assert!(Graph::try_with_capacity(usize::MAX, 0).is_err());
    }

    #[test]
    fn empty() {
        let graph = Graph::new(0);

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertices().count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn add_edge_basic() {
        let mut graph = Graph::new(5);
        graph.add_edge(1, 2).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(1), Ok(1));
        assert_eq!(graph.degree(2), Ok(1));
        assert_eq!(graph.degree(0), Ok(0));
        assert!(graph.adjacent(1).unwrap().any(|w| w == 2));
        assert!(graph.adjacent(2).unwrap().any(|w| w == 1));
    }

    #[test]
    fn add_edge_out_of_range() {
        let mut graph = Graph::new(5);

        assert_matches!(
            graph.add_edge(5, 0),
            Err(Error::IndexOutOfRange { index: 5, bound: 5 })
        );
        assert_matches!(
            graph.add_edge(0, 7),
            Err(Error::IndexOutOfRange { index: 7, bound: 5 })
        );

        // Failed additions leave the graph untouched.
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(0), Ok(0));
    }

    #[test]
    fn self_loop_counts_twice() {
        let mut graph = Graph::new(3);
        graph.add_edge(1, 1).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(1), Ok(2));
        assert_eq!(graph.adjacent(1).unwrap().collect::<Vec<_>>(), vec![1, 1]);
    }

    #[test]
    fn parallel_edges() {
        let mut graph = Graph::new(2);
        graph.extend_with_edges([(0, 1), (1, 0), (0, 1)]).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(0), Ok(3));
        assert_eq!(graph.degree(1), Ok(3));
        assert!(graph.adjacent(0).unwrap().all(|w| w == 1));
    }

    #[test]
    fn extend_with_edges_stops_at_invalid() {
        let mut graph = Graph::new(3);

        assert_matches!(
            graph.extend_with_edges([(0, 1), (1, 3), (1, 2)]),
            Err(Error::IndexOutOfRange { index: 3, .. })
        );
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn adjacent_is_restartable() {
        let mut graph = Graph::new(4);
        graph.extend_with_edges([(0, 1), (0, 2), (0, 3)]).unwrap();

        let first = graph.adjacent(0).unwrap().collect::<Vec<_>>();
        let second = graph.adjacent(0).unwrap().collect::<Vec<_>>();

        assert_eq!(first, second);
        assert_eq!(graph.adjacent(0).unwrap().len(), 3);
    }

    #[test]
    fn adjacent_and_degree_out_of_range() {
        let graph = Graph::new(2);

        assert_matches!(graph.adjacent(2), Err(Error::IndexOutOfRange { .. }));
        assert_matches!(graph.degree(2), Err(Error::IndexOutOfRange { .. }));
    }

    #[test]
    fn edges_in_insertion_order() {
        let mut graph = Graph::new(4);
        graph.extend_with_edges([(2, 3), (0, 1), (3, 3)]).unwrap();

        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(2, 3), (0, 1), (3, 3)]
        );
    }

    #[test]
    fn display() {
        let mut graph = Graph::new(3);
        graph.extend_with_edges([(0, 2), (0, 1), (1, 1)]).unwrap();

        assert_eq!(
            graph.to_string(),
            "3 vertices, 3 edges\n0: 1 2\n1: 0 1 1\n2: 0\n"
        );
    }
}
