//! Constructions of structured and random graphs.
//!
//! Randomized constructions take a [`fastrand::Rng`], so that the same seed
//! always produces the same graph. Vertex labels are shuffled, for example the
//! [path](path) does not necessarily go through `0, 1, 2, ...` in this order.
//!
//! # Examples
//!
//! ```
//! use algraph::{algo::is_bipartite, generate};
//!
//! let mut rng = fastrand::Rng::with_seed(42);
//!
//! let graph = generate::simple(10, 20, &mut rng)?;
//! assert_eq!(graph.vertex_count(), 10);
//! assert_eq!(graph.edge_count(), 20);
//!
//! let graph = generate::bipartite(5, 6, 12, &mut rng)?;
//! assert!(is_bipartite(&graph));
//! # Ok::<(), algraph::core::Error>(())
//! ```

use std::{cmp::Reverse, collections::BinaryHeap};

use fastrand::Rng;
use rustc_hash::FxHashSet;

use crate::{
    core::{error::OrderedProbability, Error, InvalidArgument},
    graph::Graph,
};

fn shuffled(v: usize, rng: &mut Rng) -> Vec<usize> {
    let mut vertices = (0..v).collect::<Vec<_>>();
    rng.shuffle(&mut vertices);
    vertices
}

fn check_probability(p: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        let p = OrderedProbability::new(p);
        Err(InvalidArgument::Probability { p }.into())
    }
}

fn check_edges(requested: usize, max: usize) -> Result<(), Error> {
    if requested > max {
        Err(InvalidArgument::TooManyEdges { requested, max }.into())
    } else {
        Ok(())
    }
}

// Undirected edge with the smaller endpoint first.
fn normalized(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// Returns a random simple graph with `v` vertices and `e` edges.
///
/// Fails if `e` is greater than `v * (v - 1) / 2`.
pub fn simple(v: usize, e: usize, rng: &mut Rng) -> Result<Graph, Error> {
    check_edges(e, v.saturating_mul(v.saturating_sub(1)) / 2)?;

    let mut graph = Graph::with_capacity(v, e);
    let mut edges = FxHashSet::default();

    while graph.edge_count() < e {
        let a = rng.usize(..v);
        let b = rng.usize(..v);

        if a != b && edges.insert(normalized(a, b)) {
            graph.add_edge_unchecked(a, b);
        }
    }

    Ok(graph)
}

/// Returns a random simple graph with `v` vertices, with an edge between any
/// two vertices with probability `p`. This is known as the [Erdős–Rényi
/// model](https://en.wikipedia.org/wiki/Erd%C5%91s%E2%80%93R%C3%A9nyi_model).
///
/// Fails if `p` is not in `[0, 1]`.
pub fn erdos_renyi(v: usize, p: f64, rng: &mut Rng) -> Result<Graph, Error> {
    check_probability(p)?;

    let mut graph = Graph::new(v);
    for a in 0..v {
        for b in (a + 1)..v {
            if rng.f64() < p {
                graph.add_edge_unchecked(a, b);
            }
        }
    }

    Ok(graph)
}

/// Returns the complete graph on `v` vertices.
pub fn complete(v: usize) -> Graph {
    let mut graph = Graph::with_capacity(v, v * v.saturating_sub(1) / 2);
    for a in 0..v {
        for b in (a + 1)..v {
            graph.add_edge_unchecked(a, b);
        }
    }

    graph
}

/// Returns a random simple bipartite graph with `v1` vertices in one partition
/// and `v2` vertices in the other, connected by `e` edges.
///
/// Fails if `e` is greater than `v1 * v2`.
pub fn bipartite(v1: usize, v2: usize, e: usize, rng: &mut Rng) -> Result<Graph, Error> {
    check_edges(e, v1.saturating_mul(v2))?;

    let vertices = shuffled(v1 + v2, rng);
    let mut graph = Graph::with_capacity(v1 + v2, e);
    let mut edges = FxHashSet::default();

    while graph.edge_count() < e {
        let a = vertices[rng.usize(..v1)];
        let b = vertices[v1 + rng.usize(..v2)];

        if edges.insert(normalized(a, b)) {
            graph.add_edge_unchecked(a, b);
        }
    }

    Ok(graph)
}

/// Returns a complete bipartite graph with `v1` vertices in one partition and
/// `v2` vertices in the other.
pub fn complete_bipartite(v1: usize, v2: usize, rng: &mut Rng) -> Graph {
    let vertices = shuffled(v1 + v2, rng);
    let mut graph = Graph::with_capacity(v1 + v2, v1 * v2);

    for &a in &vertices[..v1] {
        for &b in &vertices[v1..] {
            graph.add_edge_unchecked(a, b);
        }
    }

    graph
}

/// Returns a random bipartite graph with `v1` vertices in one partition and
/// `v2` vertices in the other, containing each possible edge with probability
/// `p`.
///
/// Fails if `p` is not in `[0, 1]`.
pub fn erdos_renyi_bipartite(
    v1: usize,
    v2: usize,
    p: f64,
    rng: &mut Rng,
) -> Result<Graph, Error> {
    check_probability(p)?;

    let vertices = shuffled(v1 + v2, rng);
    let mut graph = Graph::new(v1 + v2);

    for &a in &vertices[..v1] {
        for &b in &vertices[v1..] {
            if rng.f64() < p {
                graph.add_edge_unchecked(a, b);
            }
        }
    }

    Ok(graph)
}

/// Returns a path graph on `v` vertices.
pub fn path(v: usize, rng: &mut Rng) -> Graph {
    let vertices = shuffled(v, rng);
    let mut graph = Graph::with_capacity(v, v.saturating_sub(1));

    for pair in vertices.windows(2) {
        graph.add_edge_unchecked(pair[0], pair[1]);
    }

    graph
}

/// Returns a complete binary tree on `v` vertices.
pub fn binary_tree(v: usize, rng: &mut Rng) -> Graph {
    let vertices = shuffled(v, rng);
    let mut graph = Graph::with_capacity(v, v.saturating_sub(1));

    for i in 1..v {
        graph.add_edge_unchecked(vertices[i], vertices[(i - 1) / 2]);
    }

    graph
}

/// Returns a cycle graph on `v` vertices.
///
/// The closing edge is added for `v > 1`, so for two vertices the cycle
/// consists of two parallel edges.
pub fn cycle(v: usize, rng: &mut Rng) -> Graph {
    let vertices = shuffled(v, rng);
    let mut graph = Graph::with_capacity(v, v);

    for pair in vertices.windows(2) {
        graph.add_edge_unchecked(pair[0], pair[1]);
    }

    if let [first, .., last] = vertices.as_slice() {
        graph.add_edge_unchecked(*last, *first);
    }

    graph
}

/// Returns a wheel graph on `v` vertices, a hub vertex connected to every
/// vertex of a [cycle](cycle) on the remaining `v - 1` vertices.
///
/// Fails if `v < 2`.
pub fn wheel(v: usize, rng: &mut Rng) -> Result<Graph, Error> {
    if v < 2 {
        return Err(InvalidArgument::NotEnoughVertices {
            requested: v,
            min: 2,
        }
        .into());
    }

    let vertices = shuffled(v, rng);
    let (hub, rim) = (vertices[0], &vertices[1..]);
    let mut graph = Graph::with_capacity(v, 2 * (v - 1));

    for pair in rim.windows(2) {
        graph.add_edge_unchecked(pair[0], pair[1]);
    }

    if let [first, .., last] = rim {
        graph.add_edge_unchecked(*last, *first);
    }

    for &spoke in rim {
        graph.add_edge_unchecked(hub, spoke);
    }

    Ok(graph)
}

/// Returns a star graph on `v` vertices, a center vertex connected to every
/// other vertex.
///
/// Fails if `v < 1`.
pub fn star(v: usize, rng: &mut Rng) -> Result<Graph, Error> {
    if v < 1 {
        return Err(InvalidArgument::NotEnoughVertices {
            requested: v,
            min: 1,
        }
        .into());
    }

    let vertices = shuffled(v, rng);
    let mut graph = Graph::with_capacity(v, v - 1);

    for &leaf in &vertices[1..] {
        graph.add_edge_unchecked(vertices[0], leaf);
    }

    Ok(graph)
}

/// Returns a random `k`-regular graph on `v` vertices using the [pairing
/// model](https://en.wikipedia.org/wiki/Random_regular_graph).
///
/// The graph is not necessarily simple, it may contain self-loops and parallel
/// edges. Every vertex has [degree](Graph::degree) `k`.
///
/// Fails if `v * k` is odd or does not fit into `usize`.
pub fn regular(v: usize, k: usize, rng: &mut Rng) -> Result<Graph, Error> {
    let degree_sum = v.checked_mul(k).ok_or(InvalidArgument::DegreeSumOverflow {
        vertex_count: v,
        degree: k,
    })?;

    if degree_sum % 2 != 0 {
        return Err(InvalidArgument::OddDegreeSum {
            vertex_count: v,
            degree: k,
        }
        .into());
    }

    // Every vertex is represented by k points which are then randomly matched.
    let mut points = (0..k).flat_map(|_| 0..v).collect::<Vec<_>>();
    rng.shuffle(&mut points);

    let mut graph = Graph::with_capacity(v, degree_sum / 2);
    for pair in points.chunks_exact(2) {
        graph.add_edge_unchecked(pair[0], pair[1]);
    }

    Ok(graph)
}

/// Returns a uniformly random labelled tree on `v` vertices.
///
/// The tree is decoded from a random [Prüfer
/// sequence](https://en.wikipedia.org/wiki/Pr%C3%BCfer_sequence) in *O(v log
/// v)* time.
pub fn tree(v: usize, rng: &mut Rng) -> Graph {
    let mut graph = Graph::with_capacity(v, v.saturating_sub(1));
    if v < 2 {
        return graph;
    }

    let sequence = (0..v - 2).map(|_| rng.usize(..v)).collect::<Vec<_>>();

    // Degree of a vertex is one plus the number of its occurrences in the
    // sequence.
    let mut degree = vec![1; v];
    for &i in &sequence {
        degree[i] += 1;
    }

    let mut leaves = (0..v)
        .filter(|&i| degree[i] == 1)
        .map(Reverse)
        .collect::<BinaryHeap<_>>();

    for &b in &sequence {
        let Some(Reverse(a)) = leaves.pop() else {
            break;
        };

        graph.add_edge_unchecked(a, b);
        degree[a] -= 1;
        degree[b] -= 1;

        if degree[b] == 1 {
            leaves.push(Reverse(b));
        }
    }

    if let (Some(Reverse(a)), Some(Reverse(b))) = (leaves.pop(), leaves.pop()) {
        graph.add_edge_unchecked(a, b);
    }

    graph
}

/// Returns a graph on `v` vertices with an [Eulerian
/// path](https://en.wikipedia.org/wiki/Eulerian_path) of `e` edges, that is, a
/// random walk of `e` steps.
///
/// Fails if `v < 1`.
pub fn eulerian_path(v: usize, e: usize, rng: &mut Rng) -> Result<Graph, Error> {
    if v < 1 {
        return Err(InvalidArgument::NotEnoughVertices {
            requested: v,
            min: 1,
        }
        .into());
    }

    let walk = (0..=e).map(|_| rng.usize(..v)).collect::<Vec<_>>();
    let mut graph = Graph::with_capacity(v, e);

    for pair in walk.windows(2) {
        graph.add_edge_unchecked(pair[0], pair[1]);
    }

    Ok(graph)
}

/// Returns a graph on `v` vertices with an Eulerian cycle of `e` edges, that
/// is, a random closed walk of `e` steps.
///
/// Fails if `e < 1` or `v < 1`.
pub fn eulerian_cycle(v: usize, e: usize, rng: &mut Rng) -> Result<Graph, Error> {
    if e < 1 {
        return Err(InvalidArgument::NotEnoughEdges {
            requested: e,
            min: 1,
        }
        .into());
    }

    if v < 1 {
        return Err(InvalidArgument::NotEnoughVertices {
            requested: v,
            min: 1,
        }
        .into());
    }

    let walk = (0..e).map(|_| rng.usize(..v)).collect::<Vec<_>>();
    let mut graph = Graph::with_capacity(v, e);

    for pair in walk.windows(2) {
        graph.add_edge_unchecked(pair[0], pair[1]);
    }

    graph.add_edge_unchecked(walk[0], walk[e - 1]);

    Ok(graph)
}
