//! Collection of traversal-based graph algorithms.
//!
//! Every algorithm is run through a builder, `Algo::on(&graph)` followed by
//! optional parameters and a terminal `run(..)` call. The result is computed
//! completely by `run` and does not borrow the graph, so all queries on it are
//! cheap.

pub mod bipartite;
pub mod connected_components;
pub mod cycle;
pub mod paths;
pub mod search;

pub use bipartite::{is_bipartite, Bipartite};
pub use connected_components::ConnectedComponents;
pub use cycle::{is_cyclic, Cycle};
pub use paths::{BreadthFirstPaths, DepthFirstPaths};
pub use search::DepthFirstSearch;

/// Iterator over vertices on a path recorded in a traversal tree, walking the
/// predecessor links towards the root.
///
/// The starting vertex itself is not yielded, the root is yielded last.
#[derive(Debug, Clone)]
pub struct PathReconstruction<'a> {
    curr: usize,
    edge_to: &'a [Option<usize>],
}

impl<'a> PathReconstruction<'a> {
    pub(crate) fn new(from: usize, edge_to: &'a [Option<usize>]) -> Self {
        Self {
            curr: from,
            edge_to,
        }
    }
}

impl Iterator for PathReconstruction<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = (*self.edge_to.get(self.curr)?)?;
        Some(self.curr)
    }
}

/// Collects the vertices from `from` up to and including `to` by following
/// predecessor links. `to` must be an ancestor of `from`.
pub(crate) fn walk_up(from: usize, to: usize, edge_to: &[Option<usize>]) -> Vec<usize> {
    let mut chain = vec![from];

    if from != to {
        chain.extend(
            PathReconstruction::new(from, edge_to)
                .take_while(|&v| v != to)
                .chain(std::iter::once(to)),
        );
    }

    chain
}
