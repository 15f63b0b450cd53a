//! # `graphwalk` - Lazy Graph Traversal Toolkit
//!
//! Pull-based graph searches over graphs described by pure edge functions.
//! Nothing is computed ahead of demand, so graphs may be infinite: a search
//! only expands as many nodes as the caller actually consumes.
//!
//! ## Architecture
//!
//! The crate is layered leaf-first:
//!
//! 1. **Lazy cache** ([`LazyCache`]):
//!    - Memoizes a one-shot iterator in an append-only store
//!    - Random access and repeatable iteration without re-driving the producer
//!    - References stay valid while more elements are forced
//!
//! 2. **Graph model** ([`Graph`]):
//!    - One capability trait yielding costed [`Edge`]s
//!    - Unweighted graphs are weighted graphs whose edges cost `1`
//!    - Lazy combinators: `filter_nodes`, `filter_edges`, `weighted`
//!
//! 3. **Traversals** ([`Bfs`], [`Dfs`], [`Dijkstra`]):
//!    - Explicit queue / stack / heap state machines
//!    - Pluggable [`VisitPolicy`] to control revisiting
//!    - Produce [`VisitRecord`] chains linking back to the root
//!
//! 4. **Search results** ([`SearchResult`]):
//!    - A lazy cache over visit records with a memoized node index
//!
//! 5. **Flow** ([`min_cut`]):
//!    - Edmonds-Karp maximum flow / minimum s-t cut on top of BFS
//!
//! ## Termination
//!
//! Traversing an infinite graph yields an infinite stream. Any operation that
//! consumes the whole stream (`count`, `to_map`, `reachable`, a failing
//! `get`, ...) never returns on such a graph. Bound the consumption instead
//! (`find`, `take_while`, indexed access).
//!
//! ## Example
//!
//! ```rust
//! use graphwalk::{graph, Graph};
//!
//! // 0 -> 1 -> 2 -> ... forever
//! let g = graph::from_fn(|&n: &u64| [n + 1]);
//!
//! let result = g.bfs(0);
//! let hit = result.iter().find(|r| *r.node() > 100).unwrap();
//! assert_eq!(*hit.node(), 101);
//! assert_eq!(hit.cost(), 101);
//!
//! // Lookups by node reuse everything forced so far.
//! assert_eq!(result.get(&50).map(|r| r.cost()), Some(50));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod cache;
pub mod error;
pub mod flow;
pub mod graph;
pub mod search;

pub use cache::{Cursor, LazyCache};
pub use error::{GraphError, Result};
pub use flow::{min_cut, MinCut};
pub use graph::{AdjacencyGraph, Cost, Edge, Graph};
pub use search::{AcceptAll, Bfs, Dfs, Dijkstra, Distinct, SearchResult, VisitPolicy, VisitRecord};

// Compile-time assertions for layout claims made in the docs.
const _: () = {
    use core::mem;

    // A visit record is a single shared pointer.
    assert!(mem::size_of::<VisitRecord<u64>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<VisitRecord<u64>>>() == mem::size_of::<usize>());
};
