use std::{collections::HashSet, hash::BuildHasher};

use fixedbitset::FixedBitSet;

/// Set of vertices visited during a traversal.
pub trait VisitSet {
    /// Marks the vertex as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, v: usize) -> bool;
    fn is_visited(&self, v: usize) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<S: BuildHasher> VisitSet for HashSet<usize, S> {
    fn visit(&mut self, v: usize) -> bool {
        self.insert(v)
    }

    fn is_visited(&self, v: usize) -> bool {
        self.contains(&v)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, v: usize) -> bool {
        if self.len() <= v {
            self.grow(v + 1);
        }
        !self.put(v)
    }

    fn is_visited(&self, v: usize) -> bool {
        self.contains(v)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
