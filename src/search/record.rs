//! `VisitRecord`: a node's discovery during a search, linked to its parent.
//!
//! Records form shared, immutable singly-linked chains back to the search
//! root. A record keeps its whole ancestry alive; cloning one is a reference
//! count bump.

use core::fmt;
use std::rc::Rc;

use crate::graph::Cost;

struct Inner<T> {
    node: T,
    prev: Option<VisitRecord<T>>,
    cost: Cost,
}

/// A visited node, the record it was reached from, and the accumulated cost.
///
/// The predecessor is `None` exactly for the root of the search. For
/// unweighted graphs the cost is the number of edges from the root.
pub struct VisitRecord<T>(Rc<Inner<T>>);

impl<T> VisitRecord<T> {
    /// Creates the root record of a search (no predecessor, cost `0`).
    pub fn root(node: T) -> Self {
        Self::new(node, None, 0)
    }

    /// Creates a record reached from `prev` with accumulated `cost`.
    pub fn new(node: T, prev: Option<VisitRecord<T>>, cost: Cost) -> Self {
        Self(Rc::new(Inner { node, prev, cost }))
    }

    /// The visited node.
    #[inline]
    pub fn node(&self) -> &T {
        &self.0.node
    }

    /// The record this node was reached from, `None` for the root.
    #[inline]
    pub fn prev(&self) -> Option<&VisitRecord<T>> {
        self.0.prev.as_ref()
    }

    /// Accumulated cost from the root.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.0.cost
    }

    /// Cost of the last edge on the path, `None` for the root.
    ///
    /// Derived from the accumulated costs, so it is only exact while those
    /// have not saturated.
    pub fn edge_cost(&self) -> Option<Cost> {
        self.prev().map(|p| self.cost().wrapping_sub(p.cost()))
    }

    /// Returns `true` for the root record.
    pub fn is_root(&self) -> bool {
        self.0.prev.is_none()
    }

    /// Number of edges between the root and this record.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Iterates from this record back to the root, both included.
    pub fn ancestors(&self) -> Ancestors<'_, T> {
        Ancestors {
            current: Some(self),
        }
    }

    /// The records from the root to this one, both included.
    pub fn path(&self) -> Vec<VisitRecord<T>> {
        let mut path: Vec<_> = self.ancestors().cloned().collect();
        path.reverse();
        path
    }

    /// The nodes from the root to this one, both included.
    pub fn path_nodes(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut nodes: Vec<_> = self.ancestors().map(|r| r.node().clone()).collect();
        nodes.reverse();
        nodes
    }

    /// Returns `true` if both handles point to the same record.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for VisitRecord<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Structural equality: same nodes and costs along the whole chain.
impl<T: PartialEq> PartialEq for VisitRecord<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = Some(self);
        let mut b = Some(other);
        loop {
            match (a, b) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    if Self::ptr_eq(x, y) {
                        return true;
                    }
                    if x.cost() != y.cost() || x.node() != y.node() {
                        return false;
                    }
                    a = x.prev();
                    b = y.prev();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for VisitRecord<T> {}

impl<T: fmt::Debug> fmt::Debug for VisitRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The chain is elided; printing it would be quadratic over a search.
        f.debug_struct("VisitRecord")
            .field("node", self.node())
            .field("prev", &self.prev().map(|_| ".."))
            .field("cost", &self.cost())
            .finish()
    }
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        // Unlink iteratively; recursive drops overflow the stack on long chains.
        let mut prev = self.prev.take();
        while let Some(VisitRecord(rc)) = prev {
            match Rc::try_unwrap(rc) {
                Ok(mut inner) => prev = inner.prev.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator from a record back to the root, see [`VisitRecord::ancestors`].
pub struct Ancestors<'a, T> {
    current: Option<&'a VisitRecord<T>>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = &'a VisitRecord<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let record = self.current?;
        self.current = record.prev();
        Some(record)
    }
}

impl<'a, T> core::iter::FusedIterator for Ancestors<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: u32) -> VisitRecord<u32> {
        let mut record = VisitRecord::root(0);
        for i in 1..len {
            record = VisitRecord::new(i, Some(record), Cost::from(i) * 2);
        }
        record
    }

    #[test]
    fn path_and_costs() {
        let tail = chain(4);
        assert_eq!(tail.path_nodes(), vec![0, 1, 2, 3]);
        assert_eq!(tail.depth(), 3);
        assert_eq!(tail.cost(), 6);
        assert_eq!(tail.edge_cost(), Some(2));
        assert!(tail.path()[0].is_root());
        assert_eq!(tail.path()[0].edge_cost(), None);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(chain(5), chain(5));
        assert_ne!(chain(5), chain(4));

        let a = chain(3);
        let b = a.clone();
        assert!(VisitRecord::ptr_eq(&a, &b));
        assert!(!VisitRecord::ptr_eq(&a, &chain(3)));
    }

    #[test]
    fn debug_elides_chain() {
        let r = VisitRecord::new('b', Some(VisitRecord::root('a')), 1);
        assert_eq!(
            format!("{r:?}"),
            r#"VisitRecord { node: 'b', prev: Some(".."), cost: 1 }"#
        );
    }

    #[test]
    fn long_chains_drop_without_recursion() {
        drop(chain(1_000_000));
    }

    #[test]
    fn shared_ancestors_survive_drop() {
        let mid = chain(10);
        let tail = VisitRecord::new(100, Some(mid.clone()), 50);
        drop(tail);
        assert_eq!(mid.depth(), 9);
    }
}
