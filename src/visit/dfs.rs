use std::collections::VecDeque;

use crate::graph::Graph;

use super::{
    raw::{RawDfs, RawDfsEvent, RawVisit, RawVisitAll},
    DfsEvent, VisitSet, Visitor,
};

/// Depth-first traversal yielding vertices in preorder.
pub struct Dfs {
    raw: RawDfs,
}

pub struct DfsRooted<'a> {
    raw: &'a mut RawDfs,
}

pub struct DfsAll<'a> {
    raw: &'a mut RawDfs,
    all: RawVisitAll,
}

impl Dfs {
    pub fn new(graph: &Graph) -> Self {
        Self {
            raw: RawDfs::new(graph),
        }
    }

    /// Starts the traversal from `root`. Nothing is visited if `root` was
    /// visited before or is not a vertex of the graph.
    pub fn start(&mut self, root: usize) -> DfsRooted<'_> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    /// Traverses the whole graph, starting a new tree from the unvisited
    /// vertex with the smallest index whenever the current one is exhausted.
    pub fn start_all(&mut self, graph: &Graph) -> DfsAll<'_> {
        DfsAll {
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

fn next_open(raw: &mut RawDfs, graph: &Graph) -> Option<usize> {
    while let Some(event) = raw.next(graph) {
        if let RawDfsEvent::Open { vertex, .. } = event {
            return Some(vertex);
        }
    }

    None
}

impl Visitor for DfsRooted<'_> {
    type Item = usize;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        next_open(self.raw, graph)
    }
}

impl Visitor for DfsAll<'_> {
    type Item = usize;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        self.all.next_all(self.raw, |raw| next_open(raw, graph))
    }
}

/// Depth-first traversal reporting [events](DfsEvent).
///
/// # Examples
///
/// ```
/// use algraph::{
///     visit::{DfsEvent, DfsEvents, Visitor},
///     Graph,
/// };
///
/// let mut graph = Graph::new(3);
/// graph.extend_with_edges([(0, 1), (1, 2), (2, 0)])?;
///
/// let back_edges = DfsEvents::new(&graph)
///     .start(0)
///     .into_iter(&graph)
///     .filter(|event| matches!(event, DfsEvent::BackEdge { .. }))
///     .count();
///
/// assert_eq!(back_edges, 1);
/// # Ok::<(), algraph::core::Error>(())
/// ```
pub struct DfsEvents {
    raw: RawDfs,
}

pub struct DfsEventsRooted<'a> {
    raw: &'a mut RawDfs,
    queue: VecDeque<DfsEvent>,
}

pub struct DfsEventsAll<'a> {
    raw: &'a mut RawDfs,
    all: RawVisitAll,
    queue: VecDeque<DfsEvent>,
}

impl DfsEvents {
    pub fn new(graph: &Graph) -> Self {
        Self {
            raw: RawDfs::new(graph),
        }
    }

    pub fn start(&mut self, root: usize) -> DfsEventsRooted<'_> {
        self.raw.start(root);
        DfsEventsRooted {
            raw: &mut self.raw,
            queue: VecDeque::new(),
        }
    }

    pub fn start_all(&mut self, graph: &Graph) -> DfsEventsAll<'_> {
        DfsEventsAll {
            raw: &mut self.raw,
            all: RawVisitAll::new(graph),
            queue: VecDeque::new(),
        }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet {
        self.raw.visited()
    }
}

fn next_event(
    raw: &mut RawDfs,
    graph: &Graph,
    queue: &mut VecDeque<DfsEvent>,
) -> Option<DfsEvent> {
    let event = match raw.next(graph)? {
        RawDfsEvent::Open { vertex, from: None } => DfsEvent::Open { vertex },
        RawDfsEvent::Open {
            vertex,
            from: Some(from),
        } => {
            queue.push_back(DfsEvent::Open { vertex });
            DfsEvent::TreeEdge { from, to: vertex }
        }
        RawDfsEvent::Back { from, to } => DfsEvent::BackEdge { from, to },
        RawDfsEvent::Close { vertex } => DfsEvent::Close { vertex },
    };

    Some(event)
}

impl Visitor for DfsEventsRooted<'_> {
    type Item = DfsEvent;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }

        next_event(self.raw, graph, &mut self.queue)
    }
}

impl Visitor for DfsEventsAll<'_> {
    type Item = DfsEvent;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }

        let queue = &mut self.queue;
        self.all
            .next_all(self.raw, |raw| next_event(raw, graph, queue))
    }
}
