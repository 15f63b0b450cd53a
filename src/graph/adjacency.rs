//! `AdjacencyGraph`: a finite graph with an explicit edge table.
//!
//! Built once from edge lists and immutable afterwards. Useful when the edges
//! come from parsed input rather than from a rule, and as a serializable
//! graph description.

use core::hash::Hash;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::edge::{Cost, Edge};
use super::model::Graph;

/// A finite directed graph stored as `node -> outgoing edges`.
///
/// Edge order per node is insertion order, which makes traversal order
/// deterministic.
///
/// ```rust
/// use graphwalk::{AdjacencyGraph, Graph};
///
/// let g = AdjacencyGraph::from_undirected([("a", "b"), ("b", "c")]);
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.bfs("a").cost_to(&"c"), Some(2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize + Eq + Hash",
    deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct AdjacencyGraph<T> {
    edges: HashMap<T, Vec<Edge<T>>>,
}

impl<T: Clone + Eq + Hash> AdjacencyGraph<T> {
    /// Builds a graph from `(from, to, cost)` triples. Every mentioned node is
    /// part of the graph, even without outgoing edges.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (T, T, Cost)>,
    {
        let mut table: HashMap<T, Vec<Edge<T>>> = HashMap::new();
        for (from, to, cost) in edges {
            table.entry(to.clone()).or_default();
            table.entry(from).or_default().push(Edge::new(to, cost));
        }
        Self { edges: table }
    }

    /// Builds an unweighted undirected graph: each pair becomes two edges of
    /// cost `1`.
    pub fn from_undirected<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self::from_edges(
            pairs
                .into_iter()
                .flat_map(|(a, b)| [(a.clone(), b.clone(), 1), (b, a, 1)]),
        )
    }

    /// Builds an unweighted graph from `node -> neighbors` entries.
    pub fn from_neighbors<I, N>(table: I) -> Self
    where
        I: IntoIterator<Item = (T, N)>,
        N: IntoIterator<Item = T>,
    {
        let mut edges: Vec<(T, T, Cost)> = Vec::new();
        let mut isolated = Vec::new();
        for (from, neighbors) in table {
            let before = edges.len();
            edges.extend(neighbors.into_iter().map(|to| (from.clone(), to, 1)));
            if edges.len() == before {
                isolated.push(from);
            }
        }
        let mut graph = Self::from_edges(edges);
        for node in isolated {
            graph.edges.entry(node).or_default();
        }
        graph
    }
}

impl<T: Eq + Hash> AdjacencyGraph<T> {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Iterates over all nodes, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.edges.keys()
    }

    /// Returns `true` if `node` is part of the graph.
    pub fn contains(&self, node: &T) -> bool {
        self.edges.contains_key(node)
    }
}

impl<T: Eq + Hash> PartialEq for AdjacencyGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<T: Eq + Hash> Eq for AdjacencyGraph<T> {}

impl<T> Default for AdjacencyGraph<T> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> FromIterator<(T, T, Cost)> for AdjacencyGraph<T> {
    fn from_iter<I: IntoIterator<Item = (T, T, Cost)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<T: Clone + Eq + Hash> Graph<T> for AdjacencyGraph<T> {
    type Edges<'a>
        = core::iter::Cloned<core::slice::Iter<'a, Edge<T>>>
    where
        Self: 'a;

    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a> {
        self.edges
            .get(node)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .cloned()
    }
}
