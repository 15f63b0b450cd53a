//! Visit policies decide which candidate nodes a search accepts.
//!
//! A policy is asked about every candidate, including nodes it has already
//! accepted, so custom policies can allow revisits (for example when the
//! validity of a node depends on the time it is reached). Policies may be
//! stateful; each search owns its policy.

use core::hash::Hash;
use std::collections::HashSet;

use super::record::VisitRecord;
use crate::graph::Cost;

/// Decides whether a candidate node is accepted into a search.
///
/// Accepted nodes are yielded and expanded; rejected ones are dropped.
pub trait VisitPolicy<T> {
    /// Called with the candidate node, the record it would be reached from
    /// (`None` for the root) and the accumulated cost it would have.
    fn visit(&mut self, node: &T, prev: Option<&VisitRecord<T>>, cost: Cost) -> bool;
}

impl<T, F> VisitPolicy<T> for F
where
    F: FnMut(&T, Option<&VisitRecord<T>>, Cost) -> bool,
{
    #[inline]
    fn visit(&mut self, node: &T, prev: Option<&VisitRecord<T>>, cost: Cost) -> bool {
        self(node, prev, cost)
    }
}

/// Accepts each node the first time it is encountered.
///
/// The default policy of [`Graph::bfs`](crate::Graph::bfs) and
/// [`Graph::dfs`](crate::Graph::dfs).
#[derive(Debug, Clone)]
pub struct Distinct<T> {
    seen: HashSet<T>,
}

impl<T> Distinct<T> {
    /// Creates a policy that has seen nothing yet.
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Number of distinct nodes accepted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing was accepted yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<T> Default for Distinct<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> VisitPolicy<T> for Distinct<T> {
    #[inline]
    fn visit(&mut self, node: &T, _prev: Option<&VisitRecord<T>>, _cost: Cost) -> bool {
        if self.seen.contains(node) {
            return false;
        }
        self.seen.insert(node.clone())
    }
}

/// Accepts every candidate.
///
/// The default policy of [`Graph::dijkstra`](crate::Graph::dijkstra), whose
/// own bookkeeping already rejects non-improving candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<T> VisitPolicy<T> for AcceptAll {
    #[inline]
    fn visit(&mut self, _node: &T, _prev: Option<&VisitRecord<T>>, _cost: Cost) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_accepts_once() {
        let mut policy = Distinct::new();
        assert!(policy.visit(&1, None, 0));
        assert!(!policy.visit(&1, None, 5));
        assert!(policy.visit(&2, None, 0));
        assert_eq!(policy.len(), 2);
    }

    #[test]
    fn closures_are_policies() {
        let mut budget = |_: &u8, _: Option<&VisitRecord<u8>>, cost: Cost| cost <= 3;
        assert!(budget.visit(&0, None, 3));
        assert!(!budget.visit(&0, None, 4));
        assert!(AcceptAll.visit(&0u8, None, i64::MAX));
    }
}
