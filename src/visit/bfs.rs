use std::collections::VecDeque;

use crate::graph::Graph;

use super::{
    raw::{RawBfs, RawBfsEvent, RawVisit, RawVisitAll},
    BfsEvent, VisitSet, Visitor,
};

/// Breadth-first traversal yielding vertices in the order they are dequeued.
pub struct Bfs {
    raw: RawBfs,
}

pub struct BfsRooted<'a> {
    raw: &'a mut RawBfs,
}

pub struct BfsAll<'a> {
    raw: &'a mut RawBfs,
    all: RawVisitAll,
}

impl Bfs {
    pub fn new(graph: &Graph) -> Self {
        Self {
            raw: RawBfs::new(graph),
        }
    }

    pub fn start(&mut self, root: usize) -> BfsRooted<'_> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    /// Starts a single traversal from all given roots at once. Invalid and
    /// already visited roots are ignored.
    pub fn start_multi<I>(&mut self, roots: I) -> BfsRooted<'_>
    where
        I: IntoIterator<Item = usize>,
    {
        start_multi(&mut self.raw, roots, |_| {});
        BfsRooted { raw: &mut self.raw }
    }

    pub fn start_all(&mut self, graph: &Graph) -> BfsAll<'_> {
        BfsAll {
            raw: &mut self.raw,
            all: RawVisitAll::new(graph),
        }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet {
        self.raw.visited()
    }
}

fn start_multi<I, F>(raw: &mut RawBfs, roots: I, mut on_seed: F)
where
    I: IntoIterator<Item = usize>,
    F: FnMut(usize),
{
    let mut roots = roots.into_iter();

    // The first root restarts the traversal, the others join it.
    for root in roots.by_ref() {
        if raw.start(root) {
            on_seed(root);
            break;
        }
    }

    for root in roots {
        if raw.seed(root) {
            on_seed(root);
        }
    }
}

fn next_pop(raw: &mut RawBfs, graph: &Graph) -> Option<usize> {
    while let Some(event) = raw.next(graph) {
        if let RawBfsEvent::Pop { vertex } = event {
            return Some(vertex);
        }
    }

    None
}

impl Visitor for BfsRooted<'_> {
    type Item = usize;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        next_pop(self.raw, graph)
    }
}

impl Visitor for BfsAll<'_> {
    type Item = usize;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        self.all.next_all(self.raw, |raw| next_pop(raw, graph))
    }
}

/// Breadth-first traversal reporting [events](BfsEvent).
///
/// Every edge is reported twice, once from each of its endpoints.
pub struct BfsEvents {
    raw: RawBfs,
}

pub struct BfsEventsRooted<'a> {
    raw: &'a mut RawBfs,
    queue: VecDeque<BfsEvent>,
}

pub struct BfsEventsAll<'a> {
    raw: &'a mut RawBfs,
    all: RawVisitAll,
}

impl BfsEvents {
    pub fn new(graph: &Graph) -> Self {
        Self {
            raw: RawBfs::new(graph),
        }
    }

    pub fn start(&mut self, root: usize) -> BfsEventsRooted<'_> {
        self.start_multi([root])
    }

    pub fn start_multi<I>(&mut self, roots: I) -> BfsEventsRooted<'_>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut queue = VecDeque::new();
        start_multi(&mut self.raw, roots, |vertex| {
            queue.push_back(BfsEvent::Root { vertex })
        });

        BfsEventsRooted {
            raw: &mut self.raw,
            queue,
        }
    }

    pub fn start_all(&mut self, graph: &Graph) -> BfsEventsAll<'_> {
        BfsEventsAll {
            raw: &mut self.raw,
            all: RawVisitAll::new(graph),
        }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet {
        self.raw.visited()
    }
}

fn next_edge(raw: &mut RawBfs, graph: &Graph) -> Option<BfsEvent> {
    while let Some(event) = raw.next(graph) {
        match event {
            RawBfsEvent::Pop { .. } => {}
            RawBfsEvent::Push { from, to } => return Some(BfsEvent::TreeEdge { from, to }),
            RawBfsEvent::Skip { from, to } => return Some(BfsEvent::NonTreeEdge { from, to }),
        }
    }

    None
}

impl Visitor for BfsEventsRooted<'_> {
    type Item = BfsEvent;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }

        next_edge(self.raw, graph)
    }
}

impl Visitor for BfsEventsAll<'_> {
    type Item = BfsEvent;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        if let Some(event) = next_edge(self.raw, graph) {
            return Some(event);
        }

        let vertex = self.all.next_root(self.raw.visited())?;
        self.raw.start(vertex);
        Some(BfsEvent::Root { vertex })
    }
}
