//! Memoization of one-shot, possibly infinite producers.

mod chunks;
pub mod lazy;

pub use lazy::{Cursor, LazyCache};
