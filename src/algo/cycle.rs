//! Find a [cycle] in a graph.
//!
//! Self-loops and parallel edges count as cycles, of length one and two
//! respectively. They are checked before the general depth-first search.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use algraph::{
//!     algo::{is_cyclic, Cycle},
//!     Graph,
//! };
//!
//! let mut graph = Graph::new(4);
//! graph.extend_with_edges([(0, 1), (1, 2), (2, 3)])?;
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(3, 1)?;
//!
//! let cycle = Cycle::on(&graph).run();
//! assert_eq!(cycle.cycle().map(|c| c.len()), Some(4));
//! # Ok::<(), algraph::core::Error>(())
//! ```

use crate::graph::Graph;

mod builder;
mod dfs;

pub use builder::CycleBuilder;

/// Result of a cycle search.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    cycle: Option<Vec<usize>>,
}

impl Cycle {
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the vertices of the found cycle as a closed walk, that is, the
    /// first and the last vertex are the same and every two consecutive
    /// vertices are adjacent.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Returns `true` if the graph contains a cycle, including self-loops and
/// parallel edges.
pub fn is_cyclic(graph: &Graph) -> bool {
    Cycle::on(graph).run().has_cycle()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        algo::ConnectedComponents,
        generate,
        infra::{proptest::graph, testing::assert_closed_walk},
    };

    use super::*;

    #[test]
    fn acyclic_path() {
        let mut graph = Graph::new(4);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 3)]).unwrap();

        let cycle = Cycle::on(&graph).run();
        assert!(!cycle.has_cycle());
        assert_eq!(cycle.cycle(), None);
    }

    #[test]
    fn self_loop_first() {
        let mut graph = Graph::new(4);
        graph
            .extend_with_edges([(0, 1), (1, 2), (2, 0), (3, 3)])
            .unwrap();

        assert_eq!(Cycle::on(&graph).run().cycle(), Some(&[3, 3][..]));
    }

    #[test]
    fn self_loop_alone() {
        let mut graph = Graph::new(1);
        graph.add_edge(0, 0).unwrap();

        assert!(is_cyclic(&graph));
        assert_eq!(Cycle::on(&graph).run().cycle(), Some(&[0, 0][..]));
    }

    #[test]
    fn parallel_edges_second() {
        let mut graph = Graph::new(5);
        graph
            .extend_with_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 3)])
            .unwrap();

        assert_eq!(Cycle::on(&graph).run().cycle(), Some(&[3, 4, 3][..]));
    }

    #[test]
    fn general_cycle() {
        let mut graph = Graph::new(6);
        graph
            .extend_with_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 1), (4, 5)])
            .unwrap();

        let cycle = Cycle::on(&graph).run();
        let walk = cycle.cycle().unwrap();

        assert_closed_walk(&graph, walk);
        assert_eq!(walk.len(), 5);

        let mut vertices = walk[1..].to_vec();
        vertices.sort_unstable();
        assert_eq!(vertices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn cycle_in_later_component() {
        let mut graph = Graph::new(6);
        graph
            .extend_with_edges([(0, 1), (1, 2), (3, 4), (4, 5), (5, 3)])
            .unwrap();

        let cycle = Cycle::on(&graph).run();
        assert_closed_walk(&graph, cycle.cycle().unwrap());
    }

    #[test]
    fn star_is_acyclic() {
        let mut rng = fastrand::Rng::with_seed(0xef6f79ed30ba75a);

        for v in 1..20 {
            let graph = generate::star(v, &mut rng).unwrap();
            assert!(!is_cyclic(&graph));
        }
    }

    #[test]
    fn generated_cycles() {
        let mut rng = fastrand::Rng::with_seed(0xef6f79ed30ba75a);

        for v in 2..10 {
            let graph = generate::cycle(v, &mut rng);
            let cycle = Cycle::on(&graph).run();

            assert_closed_walk(&graph, cycle.cycle().unwrap());
            assert_eq!(cycle.cycle().unwrap().len(), v + 1);
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_cycle_iff_not_forest(graph in graph().max_size(64).multi_edge_prob(0.1).allow_loops()) {
            let cycle = Cycle::on(&graph).run();
            let components = ConnectedComponents::on(&graph).run().count();

            // A graph is a forest if and only if e = v - c.
            let is_forest = graph.edge_count() + components == graph.vertex_count();
            prop_assert_eq!(cycle.has_cycle(), !is_forest);

            if let Some(walk) = cycle.cycle() {
                assert_closed_walk(&graph, walk);
            }
        }
    }
}
