//! Find paths from source vertices to every reachable vertex.
//!
//! [`DepthFirstPaths`] records some path from a single source.
//! [`BreadthFirstPaths`] records [shortest paths] (by the number of edges) from
//! one or more sources together with their lengths.
//!
//! See available parameters [here](BreadthFirstPathsBuilder#implementations).
//!
//! [shortest paths]: https://en.wikipedia.org/wiki/Shortest_path_problem
//!
//! # Examples
//!
//! ```
//! use algraph::{algo::BreadthFirstPaths, Graph};
//!
//! let mut graph = Graph::new(6);
//! graph.extend_with_edges([(0, 1), (1, 2), (2, 3), (0, 4), (4, 3), (3, 5)])?;
//!
//! let paths = BreadthFirstPaths::on(&graph).run(0);
//!
//! assert_eq!(paths.distance_to(5), Some(3));
//! assert_eq!(paths.path_to(5), Some(vec![0, 4, 3, 5]));
//!
//! // Multiple sources, the closest one wins.
//! let paths = BreadthFirstPaths::on(&graph).run_multi([0, 5]);
//! assert_eq!(paths.distance_to(3), Some(1));
//! # Ok::<(), algraph::core::Error>(())
//! ```

use fixedbitset::FixedBitSet;

use super::PathReconstruction;

mod bfs;
mod builder;
mod dfs;

pub use builder::{BreadthFirstPathsBuilder, DepthFirstPathsBuilder};

/// Tree of paths found by a traversal.
#[derive(Debug, Clone)]
struct PathTree {
    marked: FixedBitSet,
    edge_to: Vec<Option<usize>>,
}

impl PathTree {
    fn new(vertex_count: usize) -> Self {
        Self {
            marked: FixedBitSet::with_capacity(vertex_count),
            edge_to: vec![None; vertex_count],
        }
    }

    fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.marked.contains(v) {
            return None;
        }

        let mut path = std::iter::once(v)
            .chain(PathReconstruction::new(v, &self.edge_to))
            .collect::<Vec<_>>();
        path.reverse();

        Some(path)
    }
}

/// Paths from a single source found by depth-first search.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: usize,
    tree: PathTree,
}

impl DepthFirstPaths {
    /// Source vertex where the search was started.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns `true` if `v` is reachable from the source. Returns `false` for
    /// a vertex that is not in the graph.
    pub fn marked(&self, v: usize) -> bool {
        self.tree.marked.contains(v)
    }

    /// Alias for [`marked`](DepthFirstPaths::marked).
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked(v)
    }

    /// Returns a path from the source to `v`, both inclusive, or `None` if `v`
    /// is not reachable.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.tree.path_to(v)
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source, in this order. The given vertex is not included.
    pub fn reconstruct(&self, to: usize) -> PathReconstruction<'_> {
        PathReconstruction::new(to, &self.tree.edge_to)
    }
}

/// Shortest paths from one or more sources found by breadth-first search.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    sources: Vec<usize>,
    tree: PathTree,
    dist_to: Vec<usize>,
}

impl BreadthFirstPaths {
    /// Valid sources the search was started from.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Returns `true` if `v` is reachable from any source. Returns `false` for
    /// a vertex that is not in the graph.
    pub fn marked(&self, v: usize) -> bool {
        self.tree.marked.contains(v)
    }

    /// Alias for [`marked`](BreadthFirstPaths::marked).
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked(v)
    }

    /// Returns the number of edges on a shortest path from the closest source
    /// to `v`, or `None` if `v` is not reachable.
    pub fn distance_to(&self, v: usize) -> Option<usize> {
        self.marked(v).then(|| self.dist_to[v])
    }

    /// Returns a shortest path from the closest source to `v`, both inclusive,
    /// or `None` if `v` is not reachable.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.tree.path_to(v)
    }

    /// Returns an iterator over vertices on the shortest path between the given
    /// vertex and the closest source, in this order. The given vertex is not
    /// included.
    pub fn reconstruct(&self, to: usize) -> PathReconstruction<'_> {
        PathReconstruction::new(to, &self.tree.edge_to)
    }
}
