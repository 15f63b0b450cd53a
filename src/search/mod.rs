//! Lazy graph searches.
//!
//! Each search is a plain [`Iterator`] over [`VisitRecord`]s that does work
//! only when pulled. The `Graph` search methods wrap them in a
//! [`SearchResult`] so the visited records can be replayed and looked up by
//! node.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod policy;
pub mod record;
pub mod result;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use policy::{AcceptAll, Distinct, VisitPolicy};
pub use record::{Ancestors, VisitRecord};
pub use result::SearchResult;
