//! Costed edges.

use serde::{Deserialize, Serialize};

/// Cost type for edges and accumulated path costs.
///
/// Costs are signed; nothing in the model forbids negative values, but
/// [`Dijkstra`](crate::Dijkstra) and [`min_cut`](crate::min_cut) only give
/// meaningful answers for non-negative ones.
///
/// Accumulated path costs and flow totals saturate at [`Cost::MAX`] and
/// [`Cost::MIN`] instead of overflowing.
pub type Cost = i64;

/// The target and cost of an outgoing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge<T> {
    /// Target node.
    pub to: T,
    /// Cost of traversing this edge.
    pub cost: Cost,
}

impl<T> Edge<T> {
    /// Creates an edge to `to` with the given cost.
    #[inline]
    pub const fn new(to: T, cost: Cost) -> Self {
        Self { to, cost }
    }

    /// Creates an edge of an unweighted graph (cost `1`).
    #[inline]
    pub const fn unit(to: T) -> Self {
        Self { to, cost: 1 }
    }
}

impl<T> From<(T, Cost)> for Edge<T> {
    fn from((to, cost): (T, Cost)) -> Self {
        Self { to, cost }
    }
}
