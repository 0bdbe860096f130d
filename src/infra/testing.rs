use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    algo::{
        Bipartite, BreadthFirstPaths, ConnectedComponents, Cycle, DepthFirstPaths,
        DepthFirstSearch,
    },
    core::Error,
    graph::Graph,
    union_find::{QuickFind, QuickUnion, UnionFind, WeightedQuickUnion},
};

/// Computes distances from the nearest of `sources` by relaxing all edges
/// until nothing changes. Slow, but independent of any traversal.
pub fn bfs_distances(graph: &Graph, sources: &[usize]) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.vertex_count()];

    for &s in sources {
        if graph.contains_vertex(s) {
            dist[s] = Some(0);
        }
    }

    let mut changed = true;
    while changed {
        changed = false;

        for (a, b) in graph.edges() {
            for (u, w) in [(a, b), (b, a)] {
                if let Some(d) = dist[u] {
                    if dist[w].map_or(true, |current| d + 1 < current) {
                        dist[w] = Some(d + 1);
                        changed = true;
                    }
                }
            }
        }
    }

    dist
}

/// Asserts that `walk` is a closed walk in the graph that does not use any
/// edge more times than the edge is present.
pub fn assert_closed_walk(graph: &Graph, walk: &[usize]) {
    assert!(walk.len() >= 2, "walk {walk:?} is too short");
    assert_eq!(walk.first(), walk.last(), "walk {walk:?} is not closed");

    let mut available = FxHashMap::<_, usize>::default();
    for (a, b) in graph.edges() {
        *available.entry((a.min(b), a.max(b))).or_default() += 1;
    }

    for pair in walk.windows(2) {
        let (a, b) = (pair[0].min(pair[1]), pair[0].max(pair[1]));

        match available.get_mut(&(a, b)) {
            Some(count) if *count > 0 => *count -= 1,
            _ => panic!("walk {walk:?} uses edge ({a}, {b}) which is missing or used up"),
        }
    }
}

/// Asserts that `cycle` is a [closed walk](assert_closed_walk) with an odd
/// number of edges.
pub fn assert_odd_cycle(graph: &Graph, cycle: &[usize]) {
    assert_closed_walk(graph, cycle);
    assert!(
        (cycle.len() - 1) % 2 == 1,
        "cycle {cycle:?} has even length"
    );
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error(transparent)]
    Graph(#[from] Error),
    #[error("component count ({0}) is not equal to union-find count ({1})")]
    ComponentCount(usize, usize),
    #[error("union-find variants disagree on connectivity of {0} and {1}")]
    UnionFindMismatch(usize, usize),
    #[error("reachability of {0} from {1} differs from components")]
    Reachability(usize, usize),
    #[error("depth-first and breadth-first paths disagree on reachability of {0}")]
    PathsReachability(usize),
    #[error("distance to {0} is {1:?}, expected {2:?}")]
    Distance(usize, Option<usize>, Option<usize>),
    #[error("cycle found ({0}) although the graph is a forest ({1})")]
    Cycle(bool, bool),
    #[error("depth-first ({0}) and breadth-first ({1}) bipartite checks disagree")]
    BipartiteMismatch(bool, bool),
    #[error("edge ({0}, {1}) connects vertices of the same color")]
    Coloring(usize, usize),
}

/// Runs all algorithms on the graph and checks that their results agree with
/// each other.
pub fn check_consistency(graph: &Graph) -> Result<(), ConsistencyCheckError> {
    let n = graph.vertex_count();
    let cc = ConnectedComponents::on(graph).run();

    let mut quick_find = QuickFind::new(n);
    let mut quick_union = QuickUnion::new(n);
    let mut weighted = WeightedQuickUnion::new(n);

    for (a, b) in graph.edges() {
        quick_find.union(a, b)?;
        quick_union.union(a, b)?;
        weighted.union(a, b)?;
    }

    if cc.count() != weighted.count() {
        return Err(ConsistencyCheckError::ComponentCount(
            cc.count(),
            weighted.count(),
        ));
    }

    if n > 0 {
        let search = DepthFirstSearch::on(graph).run(0)?;
        let dfs = DepthFirstPaths::on(graph).run(0)?;
        let bfs = BreadthFirstPaths::on(graph).run(0);
        let expected = bfs_distances(graph, &[0]);

        for v in graph.vertices() {
            let connected = weighted.connected(0, v)?;

            if quick_find.connected(0, v)? != connected
                || quick_union.connected(0, v)? != connected
            {
                return Err(ConsistencyCheckError::UnionFindMismatch(0, v));
            }

            if search.marked(v) != cc.connected(0, v) || search.marked(v) != connected {
                return Err(ConsistencyCheckError::Reachability(v, 0));
            }

            if dfs.has_path_to(v) != bfs.has_path_to(v) {
                return Err(ConsistencyCheckError::PathsReachability(v));
            }

            if bfs.distance_to(v) != expected[v] {
                return Err(ConsistencyCheckError::Distance(
                    v,
                    bfs.distance_to(v),
                    expected[v],
                ));
            }
        }
    }

    let is_forest = graph.edge_count() + cc.count() == n;
    let has_cycle = Cycle::on(graph).run().has_cycle();

    if has_cycle == is_forest {
        return Err(ConsistencyCheckError::Cycle(has_cycle, is_forest));
    }

    let dfs = Bipartite::on(graph).dfs().run();
    let bfs = Bipartite::on(graph).bfs().run();

    if dfs.is_bipartite() != bfs.is_bipartite() {
        return Err(ConsistencyCheckError::BipartiteMismatch(
            dfs.is_bipartite(),
            bfs.is_bipartite(),
        ));
    }

    if dfs.is_bipartite() {
        for coloring in [&dfs, &bfs] {
            for (a, b) in graph.edges() {
                if coloring.color(a)? == coloring.color(b)? {
                    return Err(ConsistencyCheckError::Coloring(a, b));
                }
            }
        }
    }

    Ok(())
}
