use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    algo::walk_up,
    graph::Graph,
    visit::{DfsEvent, DfsEvents, VisitSet, Visitor},
};

pub fn dfs_find(graph: &Graph) -> Option<Vec<usize>> {
    let cycle = self_loop(graph)
        .or_else(|| parallel_edges(graph))
        .or_else(|| back_edge(graph));

    debug!(found = cycle.is_some(), "cycle search finished");

    cycle
}

fn self_loop(graph: &Graph) -> Option<Vec<usize>> {
    graph
        .vertices()
        .find(|&v| graph.neighbors_of(v).contains(&v))
        .map(|v| vec![v, v])
}

fn parallel_edges(graph: &Graph) -> Option<Vec<usize>> {
    let mut marked = FxHashSet::default();

    for v in graph.vertices() {
        marked.reset_visited();

        for &w in graph.neighbors_of(v) {
            if !marked.visit(w) {
                return Some(vec![v, w, v]);
            }
        }
    }

    None
}

fn back_edge(graph: &Graph) -> Option<Vec<usize>> {
    let mut edge_to = vec![None; graph.vertex_count()];
    let mut dfs = DfsEvents::new(graph);

    for event in dfs.start_all(graph).into_iter(graph) {
        match event {
            DfsEvent::TreeEdge { from, to } => edge_to[to] = Some(from),
            DfsEvent::BackEdge { from, to } => {
                // The target of a back edge is an ancestor of its source.
                let mut cycle = walk_up(from, to, &edge_to);
                cycle.push(from);
                return Some(cycle);
            }
            _ => {}
        }
    }

    None
}
