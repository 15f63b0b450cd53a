//! The graph capability and closure-backed graphs.
//!
//! A graph is nothing more than a pure function from a node to its outgoing
//! edges. No node set is stored, which is what allows infinite graphs: the
//! traversals only ever ask for the edges of nodes they actually reach.

use core::hash::Hash;
use core::marker::PhantomData;

use super::adapters::{FilterEdges, FilterNodes, Weighted};
use super::edge::{Cost, Edge};
use crate::error::Result;
use crate::flow::{self, MinCut};
use crate::search::{AcceptAll, Bfs, Dfs, Dijkstra, Distinct, SearchResult, VisitPolicy};

/// A directed graph over nodes of type `T`, possibly infinite.
///
/// Unweighted graphs are weighted graphs whose edges all cost `1`; see
/// [`from_fn`] and [`Edge::unit`].
///
/// Implementations must be pure: calling [`edges`](Self::edges) twice for the
/// same node must yield the same edges in the same order. Traversal results are
/// cached and replayed on that assumption.
pub trait Graph<T> {
    /// Iterator over the outgoing edges of one node.
    type Edges<'a>: Iterator<Item = Edge<T>>
    where
        Self: 'a;

    /// Returns the edges going out from `node`.
    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a>;

    /// Returns the targets of the edges going out from `node`.
    fn neighbors<'a>(&'a self, node: &T) -> Neighbors<Self::Edges<'a>> {
        Neighbors {
            edges: self.edges(node),
        }
    }

    /// Calls `f(to, cost)` for every edge going out from `node`.
    ///
    /// Semantically identical to iterating [`edges`](Self::edges); implementors
    /// may override it when internal iteration is cheaper.
    fn for_each_edge<F>(&self, node: &T, mut f: F)
    where
        F: FnMut(T, Cost),
    {
        for Edge { to, cost } in self.edges(node) {
            f(to, cost);
        }
    }

    /// Restricts the graph to edges whose target satisfies `predicate`.
    fn filter_nodes<P>(self, predicate: P) -> FilterNodes<Self, P>
    where
        Self: Sized,
        P: Fn(&T) -> bool,
    {
        FilterNodes::new(self, predicate)
    }

    /// Restricts the graph to edges `(from, to)` that satisfy `predicate`.
    fn filter_edges<P>(self, predicate: P) -> FilterEdges<Self, P>
    where
        Self: Sized,
        P: Fn(&T, &T) -> bool,
    {
        FilterEdges::new(self, predicate)
    }

    /// Replaces the cost of every edge `(from, to)` with `cost(from, to)`.
    fn weighted<C>(self, cost: C) -> Weighted<Self, C>
    where
        Self: Sized,
        C: Fn(&T, &T) -> Cost,
    {
        Weighted::new(self, cost)
    }

    /// Borrows the graph, so adapters can wrap it without taking ownership.
    fn by_ref(&self) -> &Self
    where
        Self: Sized,
    {
        self
    }

    /// Breadth-first search from `start`, visiting every node once.
    ///
    /// The result is lazy; on an infinite graph, consuming all of it never
    /// returns.
    fn bfs(&self, start: T) -> SearchResult<T, Bfs<'_, T, Self, Distinct<T>>>
    where
        T: Clone + Eq + Hash,
    {
        self.bfs_with(start, Distinct::new())
    }

    /// Breadth-first search with a custom visit policy.
    fn bfs_with<P>(&self, start: T, policy: P) -> SearchResult<T, Bfs<'_, T, Self, P>>
    where
        T: Clone + Eq + Hash,
        P: VisitPolicy<T>,
    {
        SearchResult::new(Bfs::new(self, start, policy))
    }

    /// Pre-order depth-first search from `start`, visiting every node once.
    ///
    /// The result is lazy; on an infinite graph, consuming all of it never
    /// returns.
    fn dfs(&self, start: T) -> SearchResult<T, Dfs<'_, T, Self, Distinct<T>>>
    where
        T: Clone + Eq + Hash,
    {
        self.dfs_with(start, Distinct::new())
    }

    /// Depth-first search with a custom visit policy.
    fn dfs_with<P>(&self, start: T, policy: P) -> SearchResult<T, Dfs<'_, T, Self, P>>
    where
        T: Clone + Eq + Hash,
        P: VisitPolicy<T>,
    {
        SearchResult::new(Dfs::new(self, start, policy))
    }

    /// Dijkstra's algorithm from `start`.
    ///
    /// Requires non-negative edge costs; negative costs give unspecified (but
    /// memory-safe) results. The result is lazy; on an infinite graph,
    /// consuming all of it never returns.
    fn dijkstra(&self, start: T) -> SearchResult<T, Dijkstra<'_, T, Self, AcceptAll>>
    where
        T: Clone + Eq + Hash,
    {
        self.dijkstra_with(start, AcceptAll)
    }

    /// Dijkstra's algorithm, consulting `policy` before each improving
    /// relaxation.
    fn dijkstra_with<P>(&self, start: T, policy: P) -> SearchResult<T, Dijkstra<'_, T, Self, P>>
    where
        T: Clone + Eq + Hash,
        P: VisitPolicy<T>,
    {
        SearchResult::new(Dijkstra::new(self, start, policy))
    }

    /// Minimum `s`-`t` cut, treating edge costs as capacities.
    ///
    /// See [`min_cut`](crate::min_cut).
    fn min_cut(&self, s: T, t: T) -> Result<MinCut<'_, T, Self>>
    where
        T: Clone + Eq + Hash,
    {
        flow::min_cut(self, s, t)
    }
}

impl<'g, T, G> Graph<T> for &'g G
where
    G: Graph<T> + ?Sized,
{
    type Edges<'a>
        = G::Edges<'a>
    where
        Self: 'a;

    #[inline]
    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a> {
        (**self).edges(node)
    }

    #[inline]
    fn for_each_edge<F>(&self, node: &T, f: F)
    where
        F: FnMut(T, Cost),
    {
        (**self).for_each_edge(node, f);
    }
}

/// Iterator over edge targets, see [`Graph::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<J> {
    edges: J,
}

impl<T, J> Iterator for Neighbors<J>
where
    J: Iterator<Item = Edge<T>>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.edges.next().map(|e| e.to)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

/// An unweighted graph backed by a closure, see [`from_fn`].
pub struct FnGraph<T, F, I> {
    f: F,
    _marker: PhantomData<fn(&T) -> I>,
}

/// Creates an unweighted graph from a function returning the neighbors of a
/// node. Every edge costs `1`.
///
/// ```rust
/// use graphwalk::{graph, Graph};
///
/// let ring = graph::from_fn(|&n: &u8| [(n + 1) % 4]);
/// let order: Vec<u8> = ring.bfs(0).nodes().copied().collect();
/// assert_eq!(order, [0, 1, 2, 3]);
/// ```
pub fn from_fn<T, F, I>(f: F) -> FnGraph<T, F, I>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    FnGraph {
        f,
        _marker: PhantomData,
    }
}

impl<T, F, I> Graph<T> for FnGraph<T, F, I>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    type Edges<'a>
        = UnitEdges<I::IntoIter>
    where
        Self: 'a;

    #[inline]
    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a> {
        UnitEdges {
            targets: (self.f)(node).into_iter(),
        }
    }

    #[inline]
    fn for_each_edge<G>(&self, node: &T, mut g: G)
    where
        G: FnMut(T, Cost),
    {
        for to in (self.f)(node) {
            g(to, 1);
        }
    }
}

/// Edges of a [`FnGraph`]: every target at cost `1`.
#[derive(Debug, Clone)]
pub struct UnitEdges<J> {
    targets: J,
}

impl<J: Iterator> Iterator for UnitEdges<J> {
    type Item = Edge<J::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.targets.next().map(Edge::unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

/// A weighted graph backed by a closure, see [`from_weighted_fn`].
pub struct WeightedFnGraph<T, F, I> {
    f: F,
    _marker: PhantomData<fn(&T) -> I>,
}

/// Creates a weighted graph from a function returning the outgoing edges of a
/// node.
///
/// ```rust
/// use graphwalk::{graph, Edge, Graph};
///
/// let g = graph::from_weighted_fn(|&n: &u32| {
///     if n < 3 { vec![Edge::new(n + 1, 5)] } else { vec![] }
/// });
/// assert_eq!(g.dijkstra(0).cost_to(&3), Some(15));
/// ```
pub fn from_weighted_fn<T, F, I>(f: F) -> WeightedFnGraph<T, F, I>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = Edge<T>>,
{
    WeightedFnGraph {
        f,
        _marker: PhantomData,
    }
}

impl<T, F, I> Graph<T> for WeightedFnGraph<T, F, I>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = Edge<T>>,
{
    type Edges<'a>
        = I::IntoIter
    where
        Self: 'a;

    #[inline]
    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a> {
        (self.f)(node).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unweighted_edges_cost_one() {
        let g = from_fn(|&n: &i32| vec![n - 1, n + 1]);
        let edges: Vec<_> = g.edges(&5).collect();
        assert_eq!(edges, vec![Edge::unit(4), Edge::unit(6)]);
        assert_eq!(g.neighbors(&5).collect::<Vec<_>>(), vec![4, 6]);
    }

    #[test]
    fn for_each_edge_matches_edges() {
        let g = from_weighted_fn(|&n: &i32| vec![Edge::new(n * 2, 3), Edge::new(n * 3, 4)]);
        let mut seen = Vec::new();
        g.for_each_edge(&2, |to, cost| seen.push(Edge::new(to, cost)));
        assert_eq!(seen, g.edges(&2).collect::<Vec<_>>());
    }

    #[test]
    fn references_are_graphs() {
        let g = from_fn(|&n: &u8| [n.wrapping_add(1)]);
        let r = &g;
        assert_eq!(r.neighbors(&1).next(), Some(2));
        assert_eq!(g.by_ref().neighbors(&255).next(), Some(0));
    }
}
