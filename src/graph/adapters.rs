//! Lazy graph combinators.
//!
//! Each adapter wraps the edge function of its inner graph; nothing is
//! precomputed or cached, the predicate or cost function runs on every
//! [`Graph::edges`] call.

use super::edge::{Cost, Edge};
use super::model::Graph;

/// Graph restricted to edges whose target passes a predicate.
///
/// Created by [`Graph::filter_nodes`].
#[derive(Debug, Clone)]
pub struct FilterNodes<G, P> {
    graph: G,
    predicate: P,
}

impl<G, P> FilterNodes<G, P> {
    pub(crate) fn new(graph: G, predicate: P) -> Self {
        Self { graph, predicate }
    }

    /// Unwraps the inner graph.
    pub fn into_inner(self) -> G {
        self.graph
    }
}

impl<T, G, P> Graph<T> for FilterNodes<G, P>
where
    G: Graph<T>,
    P: Fn(&T) -> bool,
{
    type Edges<'a>
        = FilterNodesIter<'a, G::Edges<'a>, P>
    where
        Self: 'a;

    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a> {
        FilterNodesIter {
            inner: self.graph.edges(node),
            predicate: &self.predicate,
        }
    }

    fn for_each_edge<F>(&self, node: &T, mut f: F)
    where
        F: FnMut(T, Cost),
    {
        let predicate = &self.predicate;
        self.graph.for_each_edge(node, |to, cost| {
            if predicate(&to) {
                f(to, cost);
            }
        });
    }
}

/// Edge iterator of [`FilterNodes`].
pub struct FilterNodesIter<'a, J, P> {
    inner: J,
    predicate: &'a P,
}

impl<'a, T, J, P> Iterator for FilterNodesIter<'a, J, P>
where
    J: Iterator<Item = Edge<T>>,
    P: Fn(&T) -> bool,
{
    type Item = Edge<T>;

    #[inline]
    fn next(&mut self) -> Option<Edge<T>> {
        let predicate = self.predicate;
        self.inner.find(|e| predicate(&e.to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Graph restricted to edges `(from, to)` that pass a predicate.
///
/// Created by [`Graph::filter_edges`].
#[derive(Debug, Clone)]
pub struct FilterEdges<G, P> {
    graph: G,
    predicate: P,
}

impl<G, P> FilterEdges<G, P> {
    pub(crate) fn new(graph: G, predicate: P) -> Self {
        Self { graph, predicate }
    }

    /// Unwraps the inner graph.
    pub fn into_inner(self) -> G {
        self.graph
    }
}

impl<T, G, P> Graph<T> for FilterEdges<G, P>
where
    T: Clone,
    G: Graph<T>,
    P: Fn(&T, &T) -> bool,
{
    type Edges<'a>
        = FilterEdgesIter<'a, T, G::Edges<'a>, P>
    where
        Self: 'a;

    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a> {
        FilterEdgesIter {
            from: node.clone(),
            inner: self.graph.edges(node),
            predicate: &self.predicate,
        }
    }

    fn for_each_edge<F>(&self, node: &T, mut f: F)
    where
        F: FnMut(T, Cost),
    {
        let predicate = &self.predicate;
        self.graph.for_each_edge(node, |to, cost| {
            if predicate(node, &to) {
                f(to, cost);
            }
        });
    }
}

/// Edge iterator of [`FilterEdges`].
pub struct FilterEdgesIter<'a, T, J, P> {
    from: T,
    inner: J,
    predicate: &'a P,
}

impl<'a, T, J, P> Iterator for FilterEdgesIter<'a, T, J, P>
where
    J: Iterator<Item = Edge<T>>,
    P: Fn(&T, &T) -> bool,
{
    type Item = Edge<T>;

    #[inline]
    fn next(&mut self) -> Option<Edge<T>> {
        let from = &self.from;
        let predicate = self.predicate;
        self.inner.find(|e| predicate(from, &e.to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Graph whose edge costs are computed by a function of `(from, to)`.
///
/// Created by [`Graph::weighted`]. Lifts unweighted graphs into weighted
/// ones, and replaces existing costs on weighted graphs.
#[derive(Debug, Clone)]
pub struct Weighted<G, C> {
    graph: G,
    cost: C,
}

impl<G, C> Weighted<G, C> {
    pub(crate) fn new(graph: G, cost: C) -> Self {
        Self { graph, cost }
    }

    /// Unwraps the inner graph.
    pub fn into_inner(self) -> G {
        self.graph
    }
}

impl<T, G, C> Graph<T> for Weighted<G, C>
where
    T: Clone,
    G: Graph<T>,
    C: Fn(&T, &T) -> Cost,
{
    type Edges<'a>
        = WeightedIter<'a, T, G::Edges<'a>, C>
    where
        Self: 'a;

    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a> {
        WeightedIter {
            from: node.clone(),
            inner: self.graph.edges(node),
            cost: &self.cost,
        }
    }

    fn for_each_edge<F>(&self, node: &T, mut f: F)
    where
        F: FnMut(T, Cost),
    {
        let cost = &self.cost;
        self.graph.for_each_edge(node, |to, _| {
            let c = cost(node, &to);
            f(to, c);
        });
    }
}

/// Edge iterator of [`Weighted`].
pub struct WeightedIter<'a, T, J, C> {
    from: T,
    inner: J,
    cost: &'a C,
}

impl<'a, T, J, C> Iterator for WeightedIter<'a, T, J, C>
where
    J: Iterator<Item = Edge<T>>,
    C: Fn(&T, &T) -> Cost,
{
    type Item = Edge<T>;

    #[inline]
    fn next(&mut self) -> Option<Edge<T>> {
        let Edge { to, .. } = self.inner.next()?;
        let cost = (self.cost)(&self.from, &to);
        Some(Edge { to, cost })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{from_fn, Edge, Graph};

    fn line() -> impl Graph<i32> {
        from_fn(|&n: &i32| vec![n - 1, n + 1])
    }

    #[test]
    fn filter_nodes_drops_targets() {
        let g = line().filter_nodes(|&n| n >= 0);
        assert_eq!(g.neighbors(&0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.neighbors(&3).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn filter_edges_sees_both_ends() {
        let g = line().filter_edges(|&from, &to| to > from);
        assert_eq!(g.neighbors(&7).collect::<Vec<_>>(), vec![8]);

        let mut via_callback = Vec::new();
        g.for_each_edge(&7, |to, _| via_callback.push(to));
        assert_eq!(via_callback, vec![8]);
    }

    #[test]
    fn weighted_replaces_costs() {
        let g = line().weighted(|&from, &to| i64::from(from * 10 + to));
        assert_eq!(
            g.edges(&2).collect::<Vec<_>>(),
            vec![Edge::new(1, 21), Edge::new(3, 23)]
        );
    }

    #[test]
    fn adapters_compose_over_borrowed_graphs() {
        let base = line();
        let positive = base.by_ref().filter_nodes(|&n: &i32| n > 0);
        let doubled = base.by_ref().weighted(|_: &i32, _: &i32| 2);

        assert_eq!(positive.neighbors(&1).collect::<Vec<_>>(), vec![2]);
        assert_eq!(doubled.edges(&1).map(|e| e.cost).sum::<i64>(), 4);
        // the base graph is untouched
        assert_eq!(base.neighbors(&1).count(), 2);
    }
}
