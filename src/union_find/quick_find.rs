use tracing::trace;

use crate::core::{check_index, Error};

use super::UnionFind;

/// Union-find storing the component id of every element directly.
///
/// `find` is a single lookup, while `union` relabels one of the components in
/// linear time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl QuickFind {
    pub fn new(len: usize) -> Self {
        Self {
            id: (0..len).collect(),
            count: len,
        }
    }
}

impl UnionFind for QuickFind {
    fn with_len(len: usize) -> Self {
        Self::new(len)
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn find(&mut self, i: usize) -> Result<usize, Error> {
        check_index(i, self.len())?;
        Ok(self.id[i])
    }

    /// Every element of the component of `a` is relabelled with the id of the
    /// component of `b`.
    fn union(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        let id_a = self.find(a)?;
        let id_b = self.find(b)?;

        if id_a == id_b {
            return Ok(false);
        }

        for id in self.id.iter_mut().filter(|id| **id == id_a) {
            *id = id_b;
        }

        self.count -= 1;
        trace!(a, b, root = id_b, count = self.count, "merged components");

        Ok(true)
    }

    fn count(&self) -> usize {
        self.count
    }
}
