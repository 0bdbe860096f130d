//! Find all vertices [reachable] from a source vertex.
//!
//! [reachable]: https://en.wikipedia.org/wiki/Reachability
//!
//! # Examples
//!
//! ```
//! use algraph::{algo::DepthFirstSearch, Graph};
//!
//! let mut graph = Graph::new(5);
//! graph.extend_with_edges([(0, 1), (1, 2), (3, 4)])?;
//!
//! let search = DepthFirstSearch::on(&graph).run(0)?;
//!
//! assert_eq!(search.count(), 3);
//! assert!(search.marked(2));
//! assert!(!search.marked(3));
//! assert!(!search.marked(42));
//! # Ok::<(), algraph::core::Error>(())
//! ```

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::{
    core::{check_index, Error},
    graph::Graph,
    visit::{Dfs, Visitor},
};

/// Vertices reachable from a single source.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    source: usize,
    marked: FixedBitSet,
    count: usize,
}

impl DepthFirstSearch {
    pub fn on(graph: &Graph) -> DepthFirstSearchBuilder<'_> {
        DepthFirstSearchBuilder { graph }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns `true` if `v` is reachable from the source. Returns `false` for
    /// a vertex that is not in the graph.
    pub fn marked(&self, v: usize) -> bool {
        self.marked.contains(v)
    }

    /// Number of vertices reachable from the source, including the source.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Builder for [`DepthFirstSearch`].
pub struct DepthFirstSearchBuilder<'a> {
    graph: &'a Graph,
}

impl DepthFirstSearchBuilder<'_> {
    /// Runs the search from `source`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `source` is not a vertex of
    /// the graph.
    pub fn run(self, source: usize) -> Result<DepthFirstSearch, Error> {
        let graph = self.graph;
        check_index(source, graph.vertex_count())?;

        let mut marked = FixedBitSet::with_capacity(graph.vertex_count());
        let mut count = 0;

        for v in Dfs::new(graph).start(source).into_iter(graph) {
            marked.insert(v);
            count += 1;
        }

        debug!(source, count, "depth-first search finished");

        Ok(DepthFirstSearch {
            source,
            marked,
            count,
        })
    }
}
