use crate::graph::Graph;

use super::{dfs::dfs_find, Cycle};

/// Builder for [`Cycle`].
pub struct CycleBuilder<'a> {
    graph: &'a Graph,
}

impl Cycle {
    pub fn on(graph: &Graph) -> CycleBuilder<'_> {
        CycleBuilder { graph }
    }
}

impl CycleBuilder<'_> {
    pub fn run(self) -> Cycle {
        Cycle {
            cycle: dfs_find(self.graph),
        }
    }
}
