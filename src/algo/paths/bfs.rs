use tracing::debug;

use crate::{
    graph::Graph,
    visit::{BfsEvent, BfsEvents, Visitor},
};

use super::{BreadthFirstPaths, PathTree};

pub fn bfs<I>(graph: &Graph, sources: I) -> BreadthFirstPaths
where
    I: IntoIterator<Item = usize>,
{
    let sources = sources
        .into_iter()
        .filter(|&source| {
            let valid = graph.contains_vertex(source);
            if !valid {
                debug!(source, "ignoring invalid breadth-first source");
            }
            valid
        })
        .collect::<Vec<_>>();

    let mut tree = PathTree::new(graph.vertex_count());
    let mut dist_to = vec![0; graph.vertex_count()];

    let mut bfs = BfsEvents::new(graph);
    for event in bfs.start_multi(sources.iter().copied()).into_iter(graph) {
        match event {
            BfsEvent::Root { vertex } => tree.marked.insert(vertex),
            BfsEvent::TreeEdge { from, to } => {
                tree.marked.insert(to);
                tree.edge_to[to] = Some(from);
                dist_to[to] = dist_to[from] + 1;
            }
            BfsEvent::NonTreeEdge { .. } => {}
        }
    }

    debug!(
        sources = sources.len(),
        reachable = tree.marked.count_ones(..),
        "breadth-first paths finished"
    );

    BreadthFirstPaths {
        sources,
        tree,
        dist_to,
    }
}
