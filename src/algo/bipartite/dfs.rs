use bitvec::vec::BitVec;
use tracing::debug;

use crate::{
    algo::walk_up,
    graph::Graph,
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::Bipartite;

pub fn dfs(graph: &Graph) -> Bipartite {
    let mut color = BitVec::repeat(false, graph.vertex_count());
    let mut edge_to = vec![None; graph.vertex_count()];
    let mut odd_cycle = None;

    let mut dfs = DfsEvents::new(graph);
    for event in dfs.start_all(graph).into_iter(graph) {
        match event {
            DfsEvent::TreeEdge { from, to } => {
                let flipped = !color[from];
                color.set(to, flipped);
                edge_to[to] = Some(from);
            }
            // Back edges lead to ancestors, so the tree path closes the cycle.
            DfsEvent::BackEdge { from, to } if color[from] == color[to] => {
                let mut cycle = walk_up(from, to, &edge_to);
                cycle.push(from);
                odd_cycle = Some(cycle);
                break;
            }
            _ => {}
        }
    }

    debug!(
        bipartite = odd_cycle.is_none(),
        "depth-first bipartite check finished"
    );

    Bipartite { color, odd_cycle }
}
