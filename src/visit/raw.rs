use std::{collections::VecDeque, ops::Range};

use fixedbitset::FixedBitSet;

use crate::graph::Graph;

use super::VisitSet;

pub(crate) trait RawVisit {
    fn visited(&self) -> &FixedBitSet;

    /// Starts a new traversal from `root` unless it was visited before.
    /// Returns `true` if the traversal was started.
    fn start(&mut self, root: usize) -> bool;

    fn reset(&mut self);
}

/// Raw depth-first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawDfsEvent {
    Open { vertex: usize, from: Option<usize> },
    Back { from: usize, to: usize },
    Close { vertex: usize },
}

// Stack of (vertex, cursor into its neighbors) pairs. Expanding one neighbor at
// a time keeps the order of a recursive implementation and allows to detect
// back edges, because the vertices on the stack are exactly the open ones.
#[derive(Debug)]
pub(crate) struct RawDfs {
    stack: Vec<(usize, usize)>,
    visited: FixedBitSet,
    closed: FixedBitSet,
    pending: Option<usize>,
}

impl RawDfs {
    pub fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            stack: Vec::new(),
            visited: FixedBitSet::with_capacity(n),
            closed: FixedBitSet::with_capacity(n),
            pending: None,
        }
    }

    pub fn next(&mut self, graph: &Graph) -> Option<RawDfsEvent> {
        if let Some(root) = self.pending.take() {
            return Some(RawDfsEvent::Open {
                vertex: root,
                from: None,
            });
        }

        let top = self.stack.len().checked_sub(1)?;
        let (v, mut cursor) = self.stack[top];
        let parent = top.checked_sub(1).map(|i| self.stack[i].0);
        let neighbors = graph.neighbors_of(v);

        while let Some(&w) = neighbors.get(cursor) {
            cursor += 1;

            if self.visited.visit(w) {
                self.stack[top].1 = cursor;
                self.stack.push((w, 0));
                return Some(RawDfsEvent::Open {
                    vertex: w,
                    from: Some(v),
                });
            }

            // Undirected edge to the parent is the tree edge itself.
            if !self.closed.contains(w) && Some(w) != parent {
                self.stack[top].1 = cursor;
                return Some(RawDfsEvent::Back { from: v, to: w });
            }
        }

        self.stack.pop();
        self.closed.insert(v);
        Some(RawDfsEvent::Close { vertex: v })
    }
}

impl RawVisit for RawDfs {
    fn visited(&self) -> &FixedBitSet {
        &self.visited
    }

    fn start(&mut self, root: usize) -> bool {
        self.stack.clear();
        self.pending = None;

        if root >= self.visited.len() || !self.visited.visit(root) {
            return false;
        }

        self.stack.push((root, 0));
        self.pending = Some(root);
        true
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.pending = None;
        self.visited.reset_visited();
        self.closed.clear();
    }
}

/// Raw breadth-first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawBfsEvent {
    Pop { vertex: usize },
    Push { from: usize, to: usize },
    Skip { from: usize, to: usize },
}

#[derive(Debug)]
pub(crate) struct RawBfs {
    queue: VecDeque<usize>,
    current: Option<(usize, usize)>,
    visited: FixedBitSet,
}

impl RawBfs {
    pub fn new(graph: &Graph) -> Self {
        Self {
            queue: VecDeque::new(),
            current: None,
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
        }
    }

    /// Adds `root` to the queue of the current traversal. Returns `false` for
    /// invalid or already visited vertices.
    pub fn seed(&mut self, root: usize) -> bool {
        if root >= self.visited.len() || !self.visited.visit(root) {
            return false;
        }

        self.queue.push_back(root);
        true
    }

    pub fn next(&mut self, graph: &Graph) -> Option<RawBfsEvent> {
        if let Some((v, cursor)) = &mut self.current {
            if let Some(&w) = graph.neighbors_of(*v).get(*cursor) {
                *cursor += 1;

                let from = *v;
                return if self.visited.visit(w) {
                    self.queue.push_back(w);
                    Some(RawBfsEvent::Push { from, to: w })
                } else {
                    Some(RawBfsEvent::Skip { from, to: w })
                };
            }

            self.current = None;
        }

        let v = self.queue.pop_front()?;
        self.current = Some((v, 0));
        Some(RawBfsEvent::Pop { vertex: v })
    }
}

impl RawVisit for RawBfs {
    fn visited(&self) -> &FixedBitSet {
        &self.visited
    }

    fn start(&mut self, root: usize) -> bool {
        self.queue.clear();
        self.current = None;
        self.seed(root)
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.current = None;
        self.visited.reset_visited();
    }
}

/// Supplies roots for traversals covering the whole graph, one component at a
/// time.
#[derive(Debug, Clone)]
pub(crate) struct RawVisitAll {
    roots: Range<usize>,
}

impl RawVisitAll {
    pub fn new(graph: &Graph) -> Self {
        Self {
            roots: graph.vertices(),
        }
    }

    /// Returns the unvisited vertex with the smallest index not offered
    /// before.
    pub fn next_root(&mut self, visited: &FixedBitSet) -> Option<usize> {
        self.roots.find(|&v| !visited.is_visited(v))
    }

    pub fn next_all<R, T, F>(&mut self, raw: &mut R, mut get_next: F) -> Option<T>
    where
        R: RawVisit,
        F: FnMut(&mut R) -> Option<T>,
    {
        if let Some(next) = get_next(raw) {
            return Some(next);
        }

        // The current component is exhausted, continue with the next one.
        let root = self.next_root(raw.visited())?;
        raw.start(root);
        get_next(raw)
    }
}
