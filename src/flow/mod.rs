//! Flow algorithms built on the lazy traversals.

pub mod min_cut;

pub use min_cut::{min_cut, MinCut};
