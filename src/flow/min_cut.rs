//! Minimum s-t cut via Edmonds-Karp maximum flow.
//!
//! Edge costs are read as capacities. The residual graph is itself a
//! [`Graph`], so augmenting paths are found with the crate's own BFS: the
//! first record of `t` in a breadth-first search over positive residual
//! capacities is a shortest augmenting path. The bottleneck is read back from
//! the residual table along its ancestor chain.

use core::fmt;
use core::hash::Hash;
use std::cell::OnceCell;
use std::collections::{hash_map, HashMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::{Cost, Edge, Graph};

/// Remaining capacity per directed node pair. Parallel edges are merged.
struct Residual<T> {
    capacity: HashMap<T, HashMap<T, Cost>>,
}

impl<T: Clone + Eq + Hash> Residual<T> {
    /// Builds the table from every node reachable from `s`.
    fn build<G>(graph: &G, s: &T) -> Self
    where
        G: Graph<T> + ?Sized,
    {
        let mut capacity = HashMap::new();
        for node in graph.bfs(s.clone()).nodes() {
            let mut row: HashMap<T, Cost> = HashMap::new();
            graph.for_each_edge(node, |to, cost| {
                let slot = row.entry(to).or_insert(0);
                *slot = slot.saturating_add(cost);
            });
            capacity.insert(node.clone(), row);
        }
        Self { capacity }
    }

    /// Pushes `amount` units from `from` to `to`.
    fn push(&mut self, from: &T, to: &T, amount: Cost) {
        if let Some(forward) = self
            .capacity
            .get_mut(from)
            .and_then(|row| row.get_mut(to))
        {
            *forward -= amount;
        }
        let reverse = self
            .capacity
            .entry(to.clone())
            .or_default()
            .entry(from.clone())
            .or_insert(0);
        *reverse = reverse.saturating_add(amount);
    }

    /// Remaining capacity from `from` to `to`.
    fn capacity(&self, from: &T, to: &T) -> Option<Cost> {
        self.capacity.get(from)?.get(to).copied()
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    fn node_count(&self) -> usize {
        self.capacity.len()
    }
}

impl<T: Clone + Eq + Hash> Graph<T> for Residual<T> {
    type Edges<'a>
        = ResidualEdges<'a, T>
    where
        Self: 'a;

    fn edges<'a>(&'a self, node: &T) -> Self::Edges<'a> {
        ResidualEdges {
            row: self.capacity.get(node).map(HashMap::iter),
        }
    }
}

/// Residual edges with capacity left.
struct ResidualEdges<'a, T> {
    row: Option<hash_map::Iter<'a, T, Cost>>,
}

impl<T: Clone> Iterator for ResidualEdges<'_, T> {
    type Item = Edge<T>;

    fn next(&mut self) -> Option<Edge<T>> {
        self.row
            .as_mut()?
            .find(|(_, capacity)| **capacity > 0)
            .map(|(to, &capacity)| Edge::new(to.clone(), capacity))
    }
}

/// Computes a minimum `s`-`t` cut of `graph`, reading edge costs as
/// capacities.
///
/// Only the part of the graph reachable from `s` is explored, so it must be
/// finite. Capacities are expected to be non-negative; non-positive edges
/// never carry flow.
///
/// # Errors
///
/// Returns [`GraphError::InvalidArgument`] if `s == t`.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{AdjacencyGraph, Graph};
///
/// // two triangles joined by a single bridge 2 - 3
/// let g = AdjacencyGraph::from_undirected([
///     (0, 1), (1, 2), (2, 0),
///     (3, 4), (4, 5), (5, 3),
///     (2, 3),
/// ]);
/// let cut = g.min_cut(0, 5)?;
/// assert_eq!(cut.max_flow(), 1);
/// assert_eq!(cut.removed_edges(), &[(2, 3)]);
/// # Ok::<(), graphwalk::GraphError>(())
/// ```
pub fn min_cut<T, G>(graph: &G, s: T, t: T) -> Result<MinCut<'_, T, G>>
where
    T: Clone + Eq + Hash,
    G: Graph<T> + ?Sized,
{
    if s == t {
        return Err(GraphError::InvalidArgument("source and sink must differ"));
    }

    let mut residual = Residual::build(graph, &s);
    let mut max_flow: Cost = 0;

    loop {
        let Some(sink) = residual.bfs(s.clone()).get(&t).cloned() else {
            break;
        };
        let Some(bottleneck) = sink
            .ancestors()
            .filter_map(|record| residual.capacity(record.prev()?.node(), record.node()))
            .min()
        else {
            break;
        };
        trace_event!(
            trace,
            bottleneck,
            path_len = sink.depth(),
            "min cut augmenting path"
        );

        for record in sink.ancestors() {
            if let Some(parent) = record.prev() {
                residual.push(parent.node(), record.node(), bottleneck);
            }
        }
        max_flow = max_flow.saturating_add(bottleneck);
    }

    let reachable_from_s = residual.bfs(s.clone()).reachable();
    trace_event!(
        debug,
        max_flow,
        explored = residual.node_count(),
        source_side = reachable_from_s.len(),
        "min cut complete"
    );

    Ok(MinCut {
        graph,
        s,
        t,
        reachable_from_s,
        max_flow,
        removed_edges: OnceCell::new(),
    })
}

/// A minimum `s`-`t` cut, see [`min_cut`].
///
/// By max-flow/min-cut duality the edges leaving the source side cost
/// [`max_flow`](Self::max_flow) in total, and removing them disconnects the
/// sink from the source.
pub struct MinCut<'g, T, G: ?Sized> {
    graph: &'g G,
    s: T,
    t: T,
    reachable_from_s: HashSet<T>,
    max_flow: Cost,
    removed_edges: OnceCell<Vec<(T, T)>>,
}

impl<'g, T, G> MinCut<'g, T, G>
where
    T: Clone + Eq + Hash,
    G: Graph<T> + ?Sized,
{
    /// The graph the cut was computed on.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The source node `s`.
    pub fn source(&self) -> &T {
        &self.s
    }

    /// The sink node `t`.
    pub fn sink(&self) -> &T {
        &self.t
    }

    /// Nodes still reachable from `s` once the maximum flow saturates the
    /// graph: the source side of the cut.
    pub fn reachable_from_s(&self) -> &HashSet<T> {
        &self.reachable_from_s
    }

    /// Number of nodes on the source side.
    pub fn source_side_len(&self) -> usize {
        self.reachable_from_s.len()
    }

    /// Value of the maximum flow from `s` to `t`.
    pub fn max_flow(&self) -> Cost {
        self.max_flow
    }

    /// Every graph edge `(from, to)` leaving the source side, computed on
    /// first access. Parallel edges appear once per edge; order is
    /// unspecified.
    pub fn removed_edges(&self) -> &[(T, T)] {
        self.removed_edges.get_or_init(|| {
            let mut crossing = Vec::new();
            self.for_each_crossing(|from, to, _| crossing.push((from.clone(), to)));
            crossing
        })
    }

    /// Total cost of the removed edges.
    pub fn cut_cost(&self) -> Cost {
        let mut total = 0;
        self.for_each_crossing(|_, _, cost| total = Cost::saturating_add(total, cost));
        total
    }

    fn for_each_crossing<F>(&self, mut f: F)
    where
        F: FnMut(&T, T, Cost),
    {
        for from in &self.reachable_from_s {
            self.graph.for_each_edge(from, |to, cost| {
                if !self.reachable_from_s.contains(&to) {
                    f(from, to, cost);
                }
            });
        }
    }
}

impl<T: fmt::Debug, G: ?Sized> fmt::Debug for MinCut<'_, T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinCut")
            .field("s", &self.s)
            .field("t", &self.t)
            .field("max_flow", &self.max_flow)
            .field("source_side", &self.reachable_from_s.len())
            .finish_non_exhaustive()
    }
}
