use crate::{core::Error, graph::Graph};

use super::{bfs::bfs, dfs::dfs, BreadthFirstPaths, DepthFirstPaths};

/// Builder for [`DepthFirstPaths`].
pub struct DepthFirstPathsBuilder<'a> {
    graph: &'a Graph,
}

impl DepthFirstPaths {
    pub fn on(graph: &Graph) -> DepthFirstPathsBuilder<'_> {
        DepthFirstPathsBuilder { graph }
    }
}

impl DepthFirstPathsBuilder<'_> {
    /// Runs the search from `source`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `source` is not a vertex of
    /// the graph.
    pub fn run(self, source: usize) -> Result<DepthFirstPaths, Error> {
        dfs(self.graph, source)
    }
}

/// Builder for [`BreadthFirstPaths`].
pub struct BreadthFirstPathsBuilder<'a> {
    graph: &'a Graph,
}

impl BreadthFirstPaths {
    pub fn on(graph: &Graph) -> BreadthFirstPathsBuilder<'_> {
        BreadthFirstPathsBuilder { graph }
    }
}

impl BreadthFirstPathsBuilder<'_> {
    /// Runs the search from `source`.
    ///
    /// An invalid source is ignored and the result then has no reachable
    /// vertices.
    pub fn run(self, source: usize) -> BreadthFirstPaths {
        bfs(self.graph, [source])
    }

    /// Runs the search from all `sources` at once, so that every path leads
    /// from the closest source. Invalid sources are ignored.
    pub fn run_multi<I>(self, sources: I) -> BreadthFirstPaths
    where
        I: IntoIterator<Item = usize>,
    {
        bfs(self.graph, sources)
    }
}
