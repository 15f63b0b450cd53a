//! Breadth-first search as a pull-based iterator.

use std::collections::VecDeque;

use super::policy::VisitPolicy;
use super::record::VisitRecord;
use crate::graph::Graph;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields [`VisitRecord`]s in BFS order. State is a FIFO queue of accepted
/// records; each call to `next` dequeues one record, offers its outgoing edges
/// to the visit policy, enqueues the accepted ones and returns the dequeued
/// record. Nothing runs ahead of demand, so this works on infinite graphs as
/// long as the caller bounds consumption.
pub struct Bfs<'g, T, G: ?Sized, P> {
    graph: &'g G,
    queue: VecDeque<VisitRecord<T>>,
    policy: P,
}

impl<'g, T, G, P> Bfs<'g, T, G, P>
where
    G: Graph<T> + ?Sized,
    P: VisitPolicy<T>,
{
    /// Creates a BFS iterator starting from `start`.
    ///
    /// The policy is consulted for the start node as well; if it rejects it,
    /// the search is empty.
    pub fn new(graph: &'g G, start: T, mut policy: P) -> Self {
        let mut queue = VecDeque::new();
        if policy.visit(&start, None, 0) {
            queue.push_back(VisitRecord::root(start));
        }
        Self {
            graph,
            queue,
            policy,
        }
    }

    /// Number of accepted records waiting to be yielded.
    pub fn frontier_len(&self) -> usize {
        self.queue.len()
    }

    /// Returns the visit policy, e.g. to inspect its state.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<'g, T, G, P> Iterator for Bfs<'g, T, G, P>
where
    G: Graph<T> + ?Sized,
    P: VisitPolicy<T>,
{
    type Item = VisitRecord<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.queue.pop_front()?;

        let Self {
            graph,
            queue,
            policy,
        } = self;
        graph.for_each_edge(record.node(), |to, edge_cost| {
            let cost = record.cost().saturating_add(edge_cost);
            if policy.visit(&to, Some(&record), cost) {
                queue.push_back(VisitRecord::new(to, Some(record.clone()), cost));
            }
        });

        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}
