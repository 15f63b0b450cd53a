//! Lazily forced search results with memoized node lookups.
//!
//! The record stream is held in a [`LazyCache`], so it can be iterated any
//! number of times while the search itself advances only once. Lookups by node
//! go through a `node -> position` index that is extended as records are
//! forced: repeated lookups are O(1), and lookups of different nodes never
//! re-scan a prefix that was already indexed.

use core::cell::{Cell, RefCell};
use core::fmt;
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use super::record::VisitRecord;
use crate::cache::{Cursor, LazyCache};
use crate::error::Result;
use crate::graph::Cost;

/// The lazily evaluated result of a graph search.
///
/// Operations that need the whole stream ([`to_map`](Self::to_map),
/// [`reachable`](Self::reachable), a [`get`](Self::get) for an unreachable
/// node) never return when the search runs over an infinite graph.
pub struct SearchResult<T, I>
where
    I: Iterator<Item = VisitRecord<T>>,
{
    records: LazyCache<I>,
    /// First position of each indexed node; `None` marks a node known absent.
    index: RefCell<HashMap<T, Option<usize>>>,
    /// Number of leading records already in `index`.
    indexed: Cell<usize>,
}

impl<T, I> SearchResult<T, I>
where
    T: Clone + Eq + Hash,
    I: Iterator<Item = VisitRecord<T>>,
{
    /// Wraps a stream of visit records. Nothing is forced.
    pub fn new<S>(records: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            records: LazyCache::new(records),
            index: RefCell::new(HashMap::new()),
            indexed: Cell::new(0),
        }
    }

    /// Returns the first record of `node`, forcing the search until it is
    /// found or the search ends.
    pub fn get(&self, node: &T) -> Option<&VisitRecord<T>> {
        if let Some(&hit) = self.index.borrow().get(node) {
            return hit.and_then(|pos| self.records.try_get(pos));
        }

        let mut pos = self.indexed.get();
        while let Some(record) = self.records.try_get(pos) {
            pos += 1;
            self.indexed.set(pos);
            let found = record.node() == node;
            self.index
                .borrow_mut()
                .entry(record.node().clone())
                .or_insert(Some(pos - 1));
            if found {
                return Some(record);
            }
        }

        self.index.borrow_mut().insert(node.clone(), None);
        None
    }

    /// Returns `true` if the search reaches `node`.
    pub fn contains(&self, node: &T) -> bool {
        self.get(node).is_some()
    }

    /// Cost of the first record of `node`.
    pub fn cost_to(&self, node: &T) -> Option<Cost> {
        self.get(node).map(VisitRecord::cost)
    }

    /// Nodes on the path to the first record of `node`, root first.
    pub fn path_to(&self, node: &T) -> Option<Vec<T>> {
        self.get(node).map(VisitRecord::path_nodes)
    }

    /// Returns the record at position `index` in visiting order.
    pub fn record(&self, index: usize) -> Result<&VisitRecord<T>> {
        self.records.get(index)
    }

    /// Returns whether the search yields at least `n` records.
    pub fn has_at_least(&self, n: usize) -> bool {
        self.records.has_at_least(n)
    }

    /// Number of records forced so far.
    pub fn forced_len(&self) -> usize {
        self.records.cached_len()
    }

    /// Returns `true` once the underlying search has ended.
    pub fn is_complete(&self) -> bool {
        self.records.is_exhausted()
    }

    /// Iterates over the records in visiting order.
    pub fn iter(&self) -> Cursor<'_, I> {
        self.records.iter()
    }

    /// Iterates over the visited nodes in visiting order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(VisitRecord::node)
    }

    /// Forces the whole search and maps each node to its last record.
    pub fn to_map(&self) -> HashMap<T, VisitRecord<T>> {
        self.iter()
            .map(|r| (r.node().clone(), r.clone()))
            .collect()
    }

    /// Forces the whole search and returns the set of visited nodes.
    pub fn reachable(&self) -> HashSet<T> {
        self.nodes().cloned().collect()
    }
}

impl<'a, T, I> IntoIterator for &'a SearchResult<T, I>
where
    T: Clone + Eq + Hash,
    I: Iterator<Item = VisitRecord<T>>,
{
    type Item = &'a VisitRecord<T>;
    type IntoIter = Cursor<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, I> fmt::Debug for SearchResult<T, I>
where
    T: fmt::Debug,
    I: Iterator<Item = VisitRecord<T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResult")
            .field("records", &self.records)
            .field("indexed", &self.indexed.get())
            .finish_non_exhaustive()
    }
}
