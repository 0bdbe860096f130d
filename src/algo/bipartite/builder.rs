use crate::graph::Graph;

use super::{bfs::bfs, dfs::dfs, Algo, Bipartite};

/// Builder for [`Bipartite`].
pub struct BipartiteBuilder<'a> {
    graph: &'a Graph,
    algo: Algo,
}

impl Bipartite {
    pub fn on(graph: &Graph) -> BipartiteBuilder<'_> {
        BipartiteBuilder {
            graph,
            algo: Algo::default(),
        }
    }
}

impl BipartiteBuilder<'_> {
    /// Chooses [depth-first](Algo::Dfs) coloring. This is the default.
    pub fn dfs(self) -> Self {
        self.using(Algo::Dfs)
    }

    /// Chooses [breadth-first](Algo::Bfs) coloring.
    pub fn bfs(self) -> Self {
        self.using(Algo::Bfs)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    pub fn run(self) -> Bipartite {
        match self.algo {
            Algo::Dfs => dfs(self.graph),
            Algo::Bfs => bfs(self.graph),
        }
    }
}
