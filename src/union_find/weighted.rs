use std::cmp::Ordering;

use tracing::trace;

use crate::core::{check_index, Error};

use super::UnionFind;

/// Union-find with union by rank and path halving.
///
/// All operations take logarithmic time in the worst case and amortized time
/// proportional to the inverse Ackermann function of the number of elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    // Upper bound on the height of the tree rooted at the element. Meaningful
    // only for roots.
    rank: Vec<u8>,
    count: usize,
}

impl WeightedQuickUnion {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            count: len,
        }
    }
}

impl UnionFind for WeightedQuickUnion {
    fn with_len(len: usize) -> Self {
        Self::new(len)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    /// Every visited element is re-pointed to its grandparent on the way up.
    fn find(&mut self, i: usize) -> Result<usize, Error> {
        let mut i = check_index(i, self.len())?;

        while i != self.parent[i] {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }

        Ok(i)
    }

    /// The root with smaller rank is attached under the other one. On equal
    /// ranks, the root of `b` is attached under the root of `a`.
    fn union(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;

        if root_a == root_b {
            return Ok(false);
        }

        let root = match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => {
                self.parent[root_a] = root_b;
                root_b
            }
            Ordering::Greater => {
                self.parent[root_b] = root_a;
                root_a
            }
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
                root_a
            }
        };

        self.count -= 1;
        trace!(a, b, root, count = self.count, "merged components");

        Ok(true)
    }

    fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use crate::union_find::tests::union_find_tests;

    use super::*;

    union_find_tests!(WeightedQuickUnion);

    #[test]
    fn equal_rank_keeps_first_root() {
        let mut uf = WeightedQuickUnion::new(4);

        uf.union(0, 1).unwrap();
        assert_eq!(uf.find(1), Ok(0));

        uf.union(2, 3).unwrap();
        assert_eq!(uf.find(3), Ok(2));

        // Both trees have rank 1.
        uf.union(2, 0).unwrap();
        for i in 0..4 {
            assert_eq!(uf.find(i), Ok(2));
        }
    }

    #[test]
    fn smaller_rank_goes_under() {
        let mut uf = WeightedQuickUnion::new(5);

        uf.union(0, 1).unwrap();
        uf.union(0, 2).unwrap();

        // Singleton 4 has rank 0, the tree rooted at 0 has rank 1.
        uf.union(4, 0).unwrap();
        assert_eq!(uf.find(4), Ok(0));
    }

    #[test]
    fn rank_stays_logarithmic() {
        let n = 1 << 10;
        let mut uf = WeightedQuickUnion::new(n);

        let mut step = 1;
        while step < n {
            for i in (0..n).step_by(2 * step) {
                uf.union(i, i + step).unwrap();
            }
            step *= 2;
        }

        assert_eq!(uf.count(), 1);
        assert!(uf.rank.iter().all(|&rank| rank <= 10));
    }

    #[test]
    fn path_halving_flattens() {
        let mut uf = WeightedQuickUnion::new(4);

        // Build a chain 3 -> 2 -> 1 -> 0 by hand to observe the compression.
        uf.parent = vec![0, 0, 1, 2];
        uf.rank = vec![3, 2, 1, 0];
        uf.count = 1;

        assert_eq!(uf.find(3), Ok(0));
        assert_eq!(uf.parent[3], 1);
        assert_eq!(uf.find(3), Ok(0));
        assert_eq!(uf.parent[3], 0);
    }
}
