use bitvec::vec::BitVec;
use tracing::debug;

use crate::{
    graph::Graph,
    visit::{BfsEvent, BfsEvents, Visitor},
};

use super::Bipartite;

pub fn bfs(graph: &Graph) -> Bipartite {
    let mut color = BitVec::repeat(false, graph.vertex_count());
    let mut edge_to = vec![None; graph.vertex_count()];
    let mut odd_cycle = None;

    let mut bfs = BfsEvents::new(graph);
    for event in bfs.start_all(graph).into_iter(graph) {
        match event {
            BfsEvent::TreeEdge { from, to } => {
                let flipped = !color[from];
                color.set(to, flipped);
                edge_to[to] = Some(from);
            }
            BfsEvent::NonTreeEdge { from, to } if color[from] == color[to] => {
                odd_cycle = Some(splice(from, to, &edge_to));
                break;
            }
            _ => {}
        }
    }

    debug!(
        bipartite = odd_cycle.is_none(),
        "breadth-first bipartite check finished"
    );

    Bipartite { color, odd_cycle }
}

// Endpoints of an edge with the same color have the same depth in the
// breadth-first tree, so walking up in lockstep meets at their lowest common
// ancestor.
fn splice(v: usize, w: usize, edge_to: &[Option<usize>]) -> Vec<usize> {
    let mut v_side = vec![v];
    let mut w_side = vec![w];
    let (mut x, mut y) = (v, w);

    while x != y {
        match (edge_to[x], edge_to[y]) {
            (Some(px), Some(py)) => {
                x = px;
                y = py;
                v_side.push(x);
                w_side.push(y);
            }
            _ => break,
        }
    }

    // Both sides end with the common ancestor.
    w_side.pop();
    w_side.extend(v_side.into_iter().rev());
    w_side.push(w);
    w_side
}
