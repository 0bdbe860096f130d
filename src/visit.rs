//! Graph traversal engine used by the algorithms in [`algo`](crate::algo).
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; traversal is not limited by the size of the program stack.
//!
//! The depth-first traversals process neighbors one at a time in the same
//! order as a recursive implementation would, so the reported traversal tree
//! is the one a recursive depth-first search builds.
//!
//! The order in which the neighbors of a vertex are discovered is the order of
//! [`Graph::adjacent`], which should not be relied upon.

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::{Bfs, BfsEvents},
    dfs::{Dfs, DfsEvents},
    visit_set::VisitSet,
};

use crate::graph::Graph;

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph. The same graph must be passed to every
    /// call.
    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a Graph) -> Iter<'a, Self>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &Graph) -> IntoIter<'_, Self>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V> {
    visitor: &'a mut V,
    graph: &'a Graph,
}

impl<V> Iterator for Iter<'_, V>
where
    V: Visitor,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V> {
    visitor: V,
    graph: &'a Graph,
}

impl<V> Iterator for IntoIter<'_, V>
where
    V: Visitor,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Depth-first search visitor event.
///
/// Use [`DfsEvents`] visitor to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// A new vertex was discovered. Reported for roots as well as for the
    /// targets of [tree edges](DfsEvent::TreeEdge).
    Open { vertex: usize },

    /// An edge of the tree formed by the traversal. Followed by
    /// [`Open`](DfsEvent::Open) of `to`.
    TreeEdge { from: usize, to: usize },

    /// An edge to a vertex which is discovered, not yet
    /// [closed](DfsEvent::Close) and is not the traversal parent of `from`.
    ///
    /// Such `to` is an ancestor of `from` in the traversal tree (or `from`
    /// itself in case of a self-loop) and the edge closes a cycle. Edges
    /// leading to the parent of `from` are never reported, not even parallel
    /// ones.
    BackEdge { from: usize, to: usize },

    /// All edges from the vertex have been reported.
    Close { vertex: usize },
}

/// Breadth-first search visitor event.
///
/// Use [`BfsEvents`] visitor to traverse a graph by reporting BFS events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BfsEvent {
    /// The traversal was started from the vertex.
    Root { vertex: usize },

    /// An edge to a vertex which was not discovered before.
    TreeEdge { from: usize, to: usize },

    /// An edge to an already discovered vertex, including the edge back to the
    /// vertex `from` was discovered from.
    NonTreeEdge { from: usize, to: usize },
}
