use tracing::trace;

use crate::core::{check_index, Error};

use super::UnionFind;

/// Union-find as a forest of parent links without any balancing.
///
/// Both `find` and `union` take time proportional to the height of the tree,
/// which can degrade to linear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickUnion {
    parent: Vec<usize>,
    count: usize,
}

impl QuickUnion {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            count: len,
        }
    }

    fn root(&self, mut i: usize) -> usize {
        while i != self.parent[i] {
            i = self.parent[i];
        }
        i
    }
}

impl UnionFind for QuickUnion {
    fn with_len(len: usize) -> Self {
        Self::new(len)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, i: usize) -> Result<usize, Error> {
        check_index(i, self.len())?;
        Ok(self.root(i))
    }

    /// The root of `a` is attached under the root of `b`.
    fn union(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        check_index(a, self.len())?;
        check_index(b, self.len())?;

        let root_a = self.root(a);
        let root_b = self.root(b);

        if root_a == root_b {
            return Ok(false);
        }

        self.parent[root_a] = root_b;
        self.count -= 1;
        trace!(a, b, root = root_b, count = self.count, "merged components");

        Ok(true)
    }

    fn count(&self) -> usize {
        self.count
    }
}
