//! Dijkstra's algorithm as a pull-based iterator.
//!
//! Pending records sit in a binary min-heap keyed by `(cost, sequence)`.
//! Improving a node's cost pushes a fresh record instead of updating the old
//! one in place; the superseded entry is dropped when it surfaces (lazy
//! deletion). Nodes are identified by value, never by record equality.

use core::cmp::Ordering;
use core::hash::Hash;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::policy::VisitPolicy;
use super::record::VisitRecord;
use crate::graph::{Cost, Graph};

/// A heap entry. Ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// cost first, and among equal costs the earliest pushed.
struct Pending<T> {
    cost: Cost,
    seq: u64,
    record: VisitRecord<T>,
}

impl<T> PartialEq for Pending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<T> Eq for Pending<T> {}

impl<T> PartialOrd for Pending<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Pending<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// An iterator running Dijkstra's algorithm.
///
/// Yields each reachable node once, in non-decreasing order of its shortest
/// path cost, provided all edge costs are non-negative. Negative costs are a
/// caller error: the iterator still terminates on finite graphs and never
/// panics, but costs and order are unspecified.
///
/// The visit policy is consulted for every candidate that would improve on the
/// best pending cost of a not yet finalized node; rejecting it leaves the node
/// untouched.
pub struct Dijkstra<'g, T, G: ?Sized, P> {
    graph: &'g G,
    heap: BinaryHeap<Pending<T>>,
    best: HashMap<T, Cost>,
    finalized: HashSet<T>,
    seq: u64,
    policy: P,
}

impl<'g, T, G, P> Dijkstra<'g, T, G, P>
where
    T: Clone + Eq + Hash,
    G: Graph<T> + ?Sized,
    P: VisitPolicy<T>,
{
    /// Creates a Dijkstra iterator starting from `start`.
    pub fn new(graph: &'g G, start: T, policy: P) -> Self {
        let mut search = Self {
            graph,
            heap: BinaryHeap::new(),
            best: HashMap::new(),
            finalized: HashSet::new(),
            seq: 0,
            policy,
        };
        if search.policy.visit(&start, None, 0) {
            search.best.insert(start.clone(), 0);
            search.push(VisitRecord::root(start));
        }
        search
    }

    /// Number of nodes already yielded.
    pub fn finalized_len(&self) -> usize {
        self.finalized.len()
    }

    /// Returns `true` if the shortest path to `node` is already known.
    pub fn is_finalized(&self, node: &T) -> bool {
        self.finalized.contains(node)
    }

    /// Returns the visit policy, e.g. to inspect its state.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn push(&mut self, record: VisitRecord<T>) {
        self.heap.push(Pending {
            cost: record.cost(),
            seq: self.seq,
            record,
        });
        self.seq += 1;
    }
}

impl<'g, T, G, P> Iterator for Dijkstra<'g, T, G, P>
where
    T: Clone + Eq + Hash,
    G: Graph<T> + ?Sized,
    P: VisitPolicy<T>,
{
    type Item = VisitRecord<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = loop {
            let Pending { record, .. } = self.heap.pop()?;
            if self.finalized.contains(record.node()) {
                trace_event!(trace, cost = record.cost(), "dijkstra discarded stale heap entry");
                continue;
            }
            break record;
        };

        self.best.remove(record.node());
        self.finalized.insert(record.node().clone());

        let mut improved = Vec::new();
        let Self {
            graph,
            best,
            finalized,
            policy,
            ..
        } = self;
        graph.for_each_edge(record.node(), |to, edge_cost| {
            let cost = record.cost().saturating_add(edge_cost);
            if finalized.contains(&to) {
                return;
            }
            if best.get(&to).is_some_and(|&known| known <= cost) {
                return;
            }
            if policy.visit(&to, Some(&record), cost) {
                best.insert(to.clone(), cost);
                improved.push(VisitRecord::new(to, Some(record.clone()), cost));
            }
        });
        for candidate in improved {
            self.push(candidate);
        }

        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every pending entry may turn out stale
        (0, None)
    }
}
