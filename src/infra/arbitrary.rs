use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{core::Error, graph::Graph, union_find::UnionFind};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    /// Maps the index into `0..=len`, so that it is out of range once in a
    /// while.
    pub fn bounded(&self, len: usize) -> usize {
        self.0 % (len + 1)
    }
}

#[derive(Debug, Arbitrary, Clone, Copy)]
pub enum UnionFindOp {
    Union(Index, Index),
    Find(Index),
    Connected(Index, Index),
    Count,
}

/// Result of a [`UnionFindOp`]. Representatives returned by `find` are
/// implementation-specific, so only success of the operation is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnionFindOpResult {
    Union(Result<bool, Error>),
    Find(Result<(), Error>),
    Connected(Result<bool, Error>),
    Count(usize),
}

impl UnionFindOp {
    pub fn apply<U: UnionFind>(self, uf: &mut U) -> UnionFindOpResult {
        let n = uf.len();

        match self {
            UnionFindOp::Union(a, b) => {
                UnionFindOpResult::Union(uf.union(a.bounded(n), b.bounded(n)))
            }
            UnionFindOp::Find(i) => UnionFindOpResult::Find(uf.find(i.bounded(n)).map(|_| ())),
            UnionFindOp::Connected(a, b) => {
                UnionFindOpResult::Connected(uf.connected(a.bounded(n), b.bounded(n)))
            }
            UnionFindOp::Count => UnionFindOpResult::Count(uf.count()),
        }
    }
}

pub struct UnionFindOpsSeq {
    pub len: usize,
    pub ops: Vec<UnionFindOp>,
}

impl<'a> Arbitrary<'a> for UnionFindOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=256)?;
        let mut ops = Vec::new();

        while !u.is_empty() {
            match u.arbitrary() {
                Ok(op) => ops.push(op),
                Err(_) => break,
            }
        }

        Ok(UnionFindOpsSeq { len, ops })
    }
}

impl fmt::Debug for UnionFindOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UnionFindOpsSeq {{")?;
        writeln!(f, "    len: {},", self.len)?;
        writeln!(f, "    ops: vec![")?;

        for op in self.ops.iter() {
            writeln!(f, "        UnionFindOp::{:?},", op)?;
        }

        writeln!(f, "    ],")?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_union_find_ops_seq`")
    }
}

/// Multigraph with loops, built from the fuzzer input.
pub struct ArbitraryGraph(pub Graph);

impl<'a> Arbitrary<'a> for ArbitraryGraph {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        const MAX_EDGES: usize = 4096;

        let n = u.int_in_range(0..=256)?;
        let mut graph = Graph::new(n);

        while !u.is_empty() && graph.edge_count() < MAX_EDGES {
            let (a, b) = match <(Index, Index)>::arbitrary(u) {
                Ok(edge) => edge,
                Err(_) => break,
            };

            if let (Some(a), Some(b)) = (a.get(n), b.get(n)) {
                graph.add_edge_unchecked(a, b);
            } else {
                break;
            }
        }

        Ok(ArbitraryGraph(graph))
    }
}

impl fmt::Debug for ArbitraryGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = &self.0;

        writeln!(f, "let graph: Graph = \"\\")?;
        writeln!(f, "{}", graph.vertex_count())?;
        writeln!(f, "{}", graph.edge_count())?;

        for (a, b) in graph.edges() {
            writeln!(f, "{a} {b}")?;
        }

        writeln!(f, "\".parse().unwrap();")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_graph`")
    }
}
