//! Find [connected components] of a graph.
//!
//! [connected components]: https://en.wikipedia.org/wiki/Component_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use algraph::{algo::ConnectedComponents, Graph};
//!
//! let mut graph = Graph::new(6);
//! graph.extend_with_edges([(0, 1), (1, 2), (3, 4)])?;
//!
//! let cc = ConnectedComponents::on(&graph).run();
//!
//! assert_eq!(cc.count(), 3);
//! assert!(cc.connected(0, 2));
//! assert!(!cc.connected(2, 3));
//! assert_eq!(cc.size(4), Some(2));
//! assert_eq!(cc.components(), vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
//! # Ok::<(), algraph::core::Error>(())
//! ```

use tracing::debug;

use crate::{
    graph::Graph,
    visit::{Dfs, VisitSet, Visitor},
};

/// Partition of the vertices into connected components.
///
/// Components are numbered `0..count` in the order of their smallest vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl ConnectedComponents {
    pub fn on(graph: &Graph) -> ConnectedComponentsBuilder<'_> {
        ConnectedComponentsBuilder { graph }
    }

    /// Returns the component id of `v`, or `None` if `v` is not in the graph.
    pub fn id(&self, v: usize) -> Option<usize> {
        self.id.get(v).copied()
    }

    /// Returns the number of vertices in the component of `v`, or `None` if
    /// `v` is not in the graph.
    pub fn size(&self, v: usize) -> Option<usize> {
        self.id(v).map(|id| self.size[id])
    }

    /// Returns `true` if `u` and `w` are in the same component. Returns
    /// `false` if any of them is not in the graph.
    pub fn connected(&self, u: usize, w: usize) -> bool {
        match (self.id(u), self.id(w)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Returns the vertices of every component, indexed by component id. The
    /// vertices are in increasing order.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut components = self
            .size
            .iter()
            .map(|&size| Vec::with_capacity(size))
            .collect::<Vec<_>>();

        for (v, &id) in self.id.iter().enumerate() {
            components[id].push(v);
        }

        components
    }
}

/// Builder for [`ConnectedComponents`].
pub struct ConnectedComponentsBuilder<'a> {
    graph: &'a Graph,
}

impl ConnectedComponentsBuilder<'_> {
    pub fn run(self) -> ConnectedComponents {
        let graph = self.graph;

        let mut id = vec![0; graph.vertex_count()];
        let mut size = Vec::new();
        let mut dfs = Dfs::new(graph);

        for root in graph.vertices() {
            if dfs.visited().is_visited(root) {
                continue;
            }

            let component = size.len();
            let mut count = 0;

            for v in dfs.start(root).into_iter(graph) {
                id[v] = component;
                count += 1;
            }

            size.push(count);
        }

        debug!(count = size.len(), "connected components finished");

        ConnectedComponents { id, size }
    }
}
