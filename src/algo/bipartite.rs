//! Check whether a graph is [bipartite] and find a two-coloring of its
//! vertices.
//!
//! If the graph is not bipartite, an odd cycle is provided as a proof.
//!
//! See available parameters [here](BipartiteBuilder#implementations).
//!
//! [bipartite]: https://en.wikipedia.org/wiki/Bipartite_graph
//!
//! # Examples
//!
//! ```
//! use algraph::{algo::Bipartite, core::Error, Graph};
//!
//! let mut graph = Graph::new(4);
//! graph.extend_with_edges([(0, 1), (1, 2), (2, 3), (3, 0)])?;
//!
//! let bipartite = Bipartite::on(&graph).run();
//! assert!(bipartite.is_bipartite());
//! assert_ne!(bipartite.color(0)?, bipartite.color(1)?);
//!
//! graph.add_edge(0, 2)?;
//!
//! let bipartite = Bipartite::on(&graph).bfs().run();
//! assert_eq!(bipartite.color(0), Err(Error::NotBipartite));
//! assert_eq!(bipartite.odd_cycle().map(|c| c.len()), Some(4));
//! # Ok::<(), algraph::core::Error>(())
//! ```

use bitvec::vec::BitVec;

use crate::{
    core::{check_index, Error},
    graph::Graph,
};

mod bfs;
mod builder;
mod dfs;

pub use builder::BipartiteBuilder;

/// Two-coloring of a graph or an odd cycle proving there is none.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartite {
    color: BitVec,
    odd_cycle: Option<Vec<usize>>,
}

impl Bipartite {
    pub fn is_bipartite(&self) -> bool {
        self.odd_cycle.is_none()
    }

    /// Returns the side of the bipartition `v` belongs to.
    ///
    /// Fails with [`Error::NotBipartite`] if the graph is not bipartite, and
    /// with [`Error::IndexOutOfRange`] if `v` is not in the graph.
    pub fn color(&self, v: usize) -> Result<bool, Error> {
        if !self.is_bipartite() {
            return Err(Error::NotBipartite);
        }

        let v = check_index(v, self.color.len())?;
        Ok(self.color[v])
    }

    /// Returns a cycle of odd length as a closed walk, that is, the first and
    /// the last vertex are the same and every two consecutive vertices are
    /// adjacent. Returns `None` if the graph is bipartite.
    pub fn odd_cycle(&self) -> Option<&[usize]> {
        self.odd_cycle.as_deref()
    }

    /// Returns vertices colored `false` and vertices colored `true`, in
    /// increasing order, or `None` if the graph is not bipartite.
    pub fn partition(&self) -> Option<(Vec<usize>, Vec<usize>)> {
        if !self.is_bipartite() {
            return None;
        }

        let (ones, zeros): (Vec<_>, Vec<_>) =
            (0..self.color.len()).partition(|&v| self.color[v]);
        Some((zeros, ones))
    }
}

/// Algorithm for [`Bipartite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algo {
    /// Colors the graph during [depth-first
    /// search](https://en.wikipedia.org/wiki/Depth-first_search).
    #[default]
    Dfs,

    /// Colors the graph during [breadth-first
    /// search](https://en.wikipedia.org/wiki/Breadth-first_search). The
    /// reported odd cycle is one of the shortest through the conflicting
    /// edge.
    Bfs,
}

/// Returns `true` if the graph is bipartite.
pub fn is_bipartite(graph: &Graph) -> bool {
    Bipartite::on(graph).run().is_bipartite()
}
