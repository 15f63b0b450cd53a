//! The graph model: one capability trait plus lazy adapters.
//!
//! Graphs are organized into:
//! - `model`: the [`Graph`] trait and closure-backed graphs
//! - `adapters`: node/edge filters and cost functions
//! - `adjacency`: an explicit, finite edge table

pub mod adapters;
pub mod adjacency;
pub mod edge;
pub mod model;

pub use adapters::{FilterEdges, FilterNodes, Weighted};
pub use adjacency::AdjacencyGraph;
pub use edge::{Cost, Edge};
pub use model::{from_fn, from_weighted_fn, FnGraph, Graph, Neighbors, UnitEdges, WeightedFnGraph};
