//! Union-find structures and classic traversal algorithms on undirected
//! graphs.
//!
//! # Examples
//!
//! ```
//! use algraph::{algo::ConnectedComponents, Graph};
//!
//! let graph: Graph = "5\n3\n0 1\n1 2\n3 4\n".parse()?;
//! let cc = ConnectedComponents::on(&graph).run();
//!
//! assert_eq!(cc.count(), 2);
//! # Ok::<(), algraph::io::ParseError>(())
//! ```

pub mod algo;
pub mod core;
pub mod generate;
pub mod graph;
pub mod infra;
pub mod io;
pub mod union_find;
pub mod visit;

pub use crate::{core::Error, graph::Graph};

pub mod prelude {
    pub use crate::{
        graph::Graph,
        union_find::UnionFind,
        visit::{VisitSet, Visitor},
    };
}
