use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::graph::Graph;

pub fn graph() -> GraphStrategy {
    GraphStrategy::new()
}

#[derive(Debug, Clone)]
pub struct GraphStrategy {
    params: StrategyParams,
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
            }
        }
    }
}

impl GraphStrategy {
    pub fn new() -> Self {
        Self::with_params(StrategyParams::default())
    }

    pub fn with_params(params: StrategyParams) -> Self {
        Self { params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph().max_size(100).bipartite()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(multi_edge_prob, multi_edge_prob: f32);
    delegate_builder_fn!(bipartite);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

impl Default for GraphStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    multi_edge_prob: f32,
    bipartite: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 512,
            allow_loops: false,
            multi_edge_prob: 0.0,
            bipartite: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn multi_edge_prob(self, multi_edge_prob: f32) -> Self {
        assert!(
            (0.0..=0.1).contains(&multi_edge_prob),
            "multi edge probability must be in [0, 0.1] range"
        );
        Self {
            multi_edge_prob,
            ..self
        }
    }

    /// Only edges between vertices of different parity are generated. Loops
    /// are never generated for bipartite graphs.
    pub fn bipartite(self) -> Self {
        Self {
            bipartite: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl Strategy for GraphStrategy {
    type Tree = GraphValueTree;
    type Value = Graph;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f64>() * self.params.density as f64;

        let mut edges = Vec::new();

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf
        let mut v = 1;
        let mut w = usize::MAX; // -1

        // Skipping is undefined for p = 0, which produces no edges anyway.
        while p > 0.0 && v < n {
            let r = runner.rng().gen::<f64>();
            let skip = ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;
            w = w.wrapping_add(1).saturating_add(skip);

            if self.params.allow_loops && !self.params.bipartite {
                // Using `w > v` instead of `w >= v` to allow loops.
                while w > v && v < n {
                    w -= v;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v < n {
                // If the vertices belong to the same partition, determined by
                // odd/even test, do not add the edge.
                if self.params.bipartite && v % 2 == w % 2 {
                    continue;
                }

                // Vary the order of endpoints so that it does not follow the
                // generation order.
                let edge = if runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push(edge);

                // Possibly add multi edges.
                while runner.rng().gen_bool(self.params.multi_edge_prob as f64) {
                    edges.push(edge);
                }
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            edges,
            state: None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GraphValueTree {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
    state: Option<ShrinkState>,
}

impl ValueTree for GraphValueTree {
    type Value = Graph;

    fn current(&self) -> Self::Value {
        let empty = Removed::default();
        let removed = self.state.as_ref().map_or(&empty, |state| &state.current);

        // Remaining vertices are relabeled to keep the indices contiguous.
        let mut ids = Vec::with_capacity(self.vertex_count);
        let mut next = 0;

        for v in 0..self.vertex_count {
            if removed.vertices.contains(&v) {
                ids.push(None);
            } else {
                ids.push(Some(next));
                next += 1;
            }
        }

        let mut graph = Graph::with_capacity(next, self.edges.len());

        for (e, &(a, b)) in self.edges.iter().enumerate() {
            if removed.edges.contains(&e) {
                continue;
            }

            if let (Some(a), Some(b)) = (ids[a], ids[b]) {
                graph.add_edge_unchecked(a, b);
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        // First, remove all vertices with the lowest degree at once, which
        // quickly gets rid of uninteresting parts of the graph. Then remove
        // vertices one by one and finally edges one by one. Starting with
        // vertices is useful because removing a vertex removes its edges too.
        let state = self.state.get_or_insert_with(ShrinkState::new);
        state.simplify(self.vertex_count, &self.edges)
    }

    fn complicate(&mut self) -> bool {
        match self.state.as_mut() {
            Some(state) => state.complicate(self.vertex_count, &self.edges),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    VertexWithDegree,
    Vertex(usize),
    Edge(usize),
}

#[derive(Debug, Clone, Default)]
struct Removed {
    vertices: FxHashSet<usize>,
    edges: FxHashSet<usize>,
}

#[derive(Debug, Clone)]
struct ShrinkState {
    current: Removed,
    high: Option<Removed>,
    command: Option<Shrink>,
}

impl ShrinkState {
    fn new() -> Self {
        Self {
            current: Removed::default(),
            high: None,
            command: Some(Shrink::VertexWithDegree),
        }
    }

    fn simplify(&mut self, vertex_count: usize, edges: &[(usize, usize)]) -> bool {
        let command = match self.command {
            Some(command) => command,
            None => return false,
        };

        if self.current.vertices.len() == vertex_count {
            // Empty graph.
            return false;
        }

        self.high = Some(self.current.clone());

        match command {
            Shrink::VertexWithDegree => {
                let degrees = self.degrees(vertex_count, edges);

                let min_degree = (0..vertex_count)
                    .filter(|&v| self.vertex_exists(v))
                    .map(|v| degrees[v])
                    .min()
                    .unwrap_or_default();

                let remove = (0..vertex_count)
                    .filter(|&v| self.vertex_exists(v) && degrees[v] == min_degree)
                    .collect::<Vec<_>>();

                self.current.vertices.extend(remove);
            }
            Shrink::Vertex(v) => {
                self.current.vertices.insert(v);
                self.command = self.next_command(vertex_count, edges);
            }
            Shrink::Edge(e) => {
                self.current.edges.insert(e);
                self.command = self.next_command(vertex_count, edges);
            }
        }

        true
    }

    fn complicate(&mut self, vertex_count: usize, edges: &[(usize, usize)]) -> bool {
        self.current = match self.high.take() {
            Some(high) => high,
            None => return false,
        };

        if self.command == Some(Shrink::VertexWithDegree) {
            self.command = self.next_command(vertex_count, edges);
        }

        true
    }

    fn degrees(&self, vertex_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
        let mut degrees = vec![0; vertex_count];

        for (e, &edge) in edges.iter().enumerate() {
            if self.edge_exists(e, edge) {
                degrees[edge.0] += 1;
                degrees[edge.1] += 1;
            }
        }

        degrees
    }

    fn vertex_exists(&self, v: usize) -> bool {
        !self.current.vertices.contains(&v)
    }

    fn edge_exists(&self, e: usize, (a, b): (usize, usize)) -> bool {
        self.vertex_exists(a) && self.vertex_exists(b) && !self.current.edges.contains(&e)
    }

    fn next_edge(&self, from: usize, edges: &[(usize, usize)]) -> Option<Shrink> {
        (from..edges.len())
            .find(|&e| self.edge_exists(e, edges[e]))
            .map(Shrink::Edge)
    }

    fn next_command(&self, vertex_count: usize, edges: &[(usize, usize)]) -> Option<Shrink> {
        match self.command? {
            Shrink::VertexWithDegree => (0..vertex_count)
                .find(|&v| self.vertex_exists(v))
                .map(Shrink::Vertex)
                .or_else(|| self.next_edge(0, edges)),
            Shrink::Vertex(v) => ((v + 1)..vertex_count)
                .find(|&w| self.vertex_exists(w))
                .map(Shrink::Vertex)
                .or_else(|| self.next_edge(0, edges)),
            Shrink::Edge(e) => self.next_edge(e + 1, edges),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::test_runner::{Config, TestRunner};

    use crate::algo::is_bipartite;

    use super::*;

    #[test]
    fn respects_params() {
        let mut runner = TestRunner::new(Config::default());

        for _ in 0..64 {
            let simple = graph()
                .max_size(32)
                .new_tree(&mut runner)
                .unwrap()
                .current();

            assert!(simple.vertex_count() <= 32);
            assert!(simple.edges().all(|(a, b)| a != b));

            let bipartite = graph()
                .max_size(32)
                .allow_loops()
                .bipartite()
                .new_tree(&mut runner)
                .unwrap()
                .current();

            assert!(is_bipartite(&bipartite));
        }
    }

    #[test]
    fn shrinks_to_empty() {
        let mut runner = TestRunner::new(Config::default());
        let mut tree = graph().max_size(32).new_tree(&mut runner).unwrap();

        // Pretend that the test always fails, so every simplification is
        // accepted.
        while tree.simplify() {}

        let shrunk = tree.current();
        assert_eq!(shrunk.vertex_count(), 0);
        assert_eq!(shrunk.edge_count(), 0);
    }

    #[test]
    fn complicate_restores() {
        let mut runner = TestRunner::new(Config::default());

        let mut tree = loop {
            let tree = graph().max_size(32).new_tree(&mut runner).unwrap();
            if tree.current().vertex_count() > 0 {
                break tree;
            }
        };

        let original = tree.current();

        assert!(tree.simplify());
        assert!(tree.current().vertex_count() < original.vertex_count());

        assert!(tree.complicate());
        assert_eq!(tree.current(), original);
    }
}
