//! [Disjoint-set] structures tracking a partition of `0..len` into
//! components.
//!
//! Three implementations share the [`UnionFind`] interface and differ in their
//! performance characteristics:
//!
//! | | `find` | `union` |
//! | --- | --- | --- |
//! | [`QuickFind`] | *O(1)* | *O(n)* |
//! | [`QuickUnion`] | *O(height)* | *O(height)* |
//! | [`WeightedQuickUnion`] | *O(log n)*, amortized nearly constant | same as `find` |
//!
//! [Disjoint-set]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//!
//! # Examples
//!
//! ```
//! use algraph::union_find::{UnionFind, WeightedQuickUnion};
//!
//! let mut uf = WeightedQuickUnion::new(10);
//!
//! uf.union(0, 1)?;
//! uf.union(0, 2)?;
//!
//! assert_eq!(uf.count(), 8);
//! assert!(uf.connected(1, 2)?);
//! assert!(!uf.connected(2, 3)?);
//! # Ok::<(), algraph::core::Error>(())
//! ```

use crate::core::Error;

mod quick_find;
mod quick_union;
mod weighted;

pub use quick_find::QuickFind;
pub use quick_union::QuickUnion;
pub use weighted::WeightedQuickUnion;

/// Common interface of the disjoint-set implementations.
///
/// All index arguments must be in `[0, len)`, otherwise
/// [`Error::IndexOutOfRange`] is returned and the structure is left
/// unchanged.
pub trait UnionFind {
    /// Creates a structure of `len` singleton components.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the canonical representative of the component containing `i`.
    ///
    /// The representative does not change between two calls unless a
    /// [`union`](UnionFind::union) happened in between.
    fn find(&mut self, i: usize) -> Result<usize, Error>;

    /// Merges the components containing `a` and `b`.
    ///
    /// Returns `true` if two distinct components were merged and `false` if
    /// `a` and `b` were already connected.
    fn union(&mut self, a: usize, b: usize) -> Result<bool, Error>;

    /// Returns `true` if `a` and `b` are in the same component.
    fn connected(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Returns the current number of components.
    #[doc(alias = "size")]
    fn count(&self) -> usize;
}

#[cfg(test)]
pub(crate) mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    pub fn test_new<U: UnionFind>() {
        let uf = U::with_len(10);

        assert_eq!(uf.len(), 10);
        assert_eq!(uf.count(), 10);
        assert!(!uf.is_empty());

        let uf = U::with_len(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
    }

    pub fn test_basic<U: UnionFind>() {
        let mut uf = U::with_len(10);

        assert_eq!(uf.union(0, 1), Ok(true));
        assert_eq!(uf.union(0, 2), Ok(true));

        assert_eq!(uf.count(), 8);
        assert_eq!(uf.connected(1, 2), Ok(true));
        assert_eq!(uf.connected(2, 3), Ok(false));
    }

    pub fn test_reflexive<U: UnionFind>() {
        let mut uf = U::with_len(10);
        uf.union(3, 4).unwrap();
        uf.union(7, 4).unwrap();

        for i in 0..10 {
            assert_eq!(uf.connected(i, i), Ok(true));
        }
    }

    pub fn test_idempotent<U: UnionFind>() {
        let mut uf = U::with_len(10);

        assert_eq!(uf.union(5, 6), Ok(true));
        let count = uf.count();
        let root = uf.find(5).unwrap();

        assert_eq!(uf.union(5, 6), Ok(false));
        assert_eq!(uf.union(6, 5), Ok(false));
        assert_eq!(uf.count(), count);
        assert_eq!(uf.find(5), Ok(root));
        assert_eq!(uf.find(6), Ok(root));
    }

    pub fn test_transitive<U: UnionFind>() {
        let mut uf = U::with_len(8);

        uf.union(0, 1).unwrap();
        uf.union(2, 3).unwrap();
        assert_eq!(uf.connected(0, 3), Ok(false));

        uf.union(1, 2).unwrap();
        assert_eq!(uf.connected(0, 3), Ok(true));
        assert_eq!(uf.count(), 5);
    }

    pub fn test_merge_all<U: UnionFind>() {
        let mut uf = U::with_len(16);

        for i in 1..16 {
            assert_eq!(uf.union(i - 1, i), Ok(true));
            assert_eq!(uf.count(), 16 - i);
        }

        let root = uf.find(0).unwrap();
        for i in 0..16 {
            assert_eq!(uf.find(i), Ok(root));
        }
    }

    pub fn test_out_of_range<U: UnionFind>() {
        let mut uf = U::with_len(10);

        assert_matches!(
            uf.find(10),
            Err(Error::IndexOutOfRange {
                index: 10,
                bound: 10
            })
        );
        assert_matches!(uf.union(0, 10), Err(Error::IndexOutOfRange { .. }));
        assert_matches!(uf.union(10, 0), Err(Error::IndexOutOfRange { .. }));
        assert_matches!(uf.connected(0, 11), Err(Error::IndexOutOfRange { .. }));

        // Failed operations leave the structure untouched.
        assert_eq!(uf.count(), 10);
        assert_eq!(uf.connected(0, 0), Ok(true));
    }

    pub fn test_find_stable<U: UnionFind>() {
        let mut uf = U::with_len(32);

        for i in (0..32).step_by(2) {
            uf.union(i, (i * 7 + 3) % 32).unwrap();
        }
        for i in (0..32).step_by(3) {
            uf.union((i * 5) % 32, i).unwrap();
        }

        let roots = (0..32).map(|i| uf.find(i).unwrap()).collect::<Vec<_>>();
        for _ in 0..3 {
            let again = (0..32).map(|i| uf.find(i).unwrap()).collect::<Vec<_>>();
            assert_eq!(again, roots);
        }
    }

    /// Applies the operations and checks the component count against a naive
    /// labelling.
    pub fn check_against_labels<U: UnionFind>(n: usize, ops: &[(usize, usize)]) {
        let mut uf = U::with_len(n);
        let mut labels = (0..n).collect::<Vec<_>>();

        for &(a, b) in ops {
            let (a, b) = (a % n, b % n);
            let before = uf.count();
            let merged = uf.union(a, b).unwrap();

            let (la, lb) = (labels[a], labels[b]);
            assert_eq!(merged, la != lb);
            if la != lb {
                labels.iter_mut().filter(|l| **l == la).for_each(|l| *l = lb);
                assert_eq!(uf.count(), before - 1);
            } else {
                assert_eq!(uf.count(), before);
            }
        }

        for a in 0..n {
            for b in 0..n {
                assert_eq!(uf.connected(a, b).unwrap(), labels[a] == labels[b]);
            }
        }
    }

    macro_rules! union_find_tests {
        ($ty:ty) => {
            #[test]
            fn new() {
                $crate::union_find::tests::test_new::<$ty>();
            }

            #[test]
            fn basic() {
                $crate::union_find::tests::test_basic::<$ty>();
            }

            #[test]
            fn reflexive() {
                $crate::union_find::tests::test_reflexive::<$ty>();
            }

            #[test]
            fn idempotent() {
                $crate::union_find::tests::test_idempotent::<$ty>();
            }

            #[test]
            fn transitive() {
                $crate::union_find::tests::test_transitive::<$ty>();
            }

            #[test]
            fn merge_all() {
                $crate::union_find::tests::test_merge_all::<$ty>();
            }

            #[test]
            fn out_of_range() {
                $crate::union_find::tests::test_out_of_range::<$ty>();
            }

            #[test]
            fn find_stable() {
                $crate::union_find::tests::test_find_stable::<$ty>();
            }
        };
    }

    pub(crate) use union_find_tests;

    #[test]
    fn variants_agree() {
        let ops = [(0, 1), (2, 3), (4, 5), (1, 3), (6, 7), (5, 7), (0, 7), (8, 8)];

        let mut qf = QuickFind::new(10);
        let mut qu = QuickUnion::new(10);
        let mut wqu = WeightedQuickUnion::new(10);

        for (a, b) in ops {
            let merged = qf.union(a, b).unwrap();
            assert_eq!(qu.union(a, b), Ok(merged));
            assert_eq!(wqu.union(a, b), Ok(merged));
            assert_eq!(qf.count(), qu.count());
            assert_eq!(qf.count(), wqu.count());
        }

        assert_eq!(wqu.count(), 3);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_quick_find(n in 1..64usize, ops in prop::collection::vec((0..64usize, 0..64usize), 0..128)) {
            check_against_labels::<QuickFind>(n, &ops);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_quick_union(n in 1..64usize, ops in prop::collection::vec((0..64usize, 0..64usize), 0..128)) {
            check_against_labels::<QuickUnion>(n, &ops);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_weighted_quick_union(n in 1..64usize, ops in prop::collection::vec((0..64usize, 0..64usize), 0..128)) {
            check_against_labels::<WeightedQuickUnion>(n, &ops);
        }
    }
}
