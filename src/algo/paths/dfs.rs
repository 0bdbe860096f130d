use tracing::debug;

use crate::{
    core::{check_index, Error},
    graph::Graph,
    visit::{DfsEvent, DfsEvents, Visitor},
};

use super::{DepthFirstPaths, PathTree};

pub fn dfs(graph: &Graph, source: usize) -> Result<DepthFirstPaths, Error> {
    check_index(source, graph.vertex_count())?;

    let mut tree = PathTree::new(graph.vertex_count());

    for event in DfsEvents::new(graph).start(source).into_iter(graph) {
        match event {
            DfsEvent::Open { vertex } => tree.marked.insert(vertex),
            DfsEvent::TreeEdge { from, to } => tree.edge_to[to] = Some(from),
            _ => {}
        }
    }

    debug!(
        source,
        reachable = tree.marked.count_ones(..),
        "depth-first paths finished"
    );

    Ok(DepthFirstPaths { source, tree })
}
