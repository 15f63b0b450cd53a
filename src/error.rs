//! Error types shared by the cache, search and flow layers.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

/// Failures surfaced to callers.
///
/// Non-termination on infinite graphs is deliberately not represented here:
/// the engine cannot detect it, and consuming an unbounded stream is a caller
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An index past the end of a finite lazy sequence was requested.
    #[error("index {index} out of range: sequence ended after {len} elements")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The total number of elements the producer yielded.
        len: usize,
    },

    /// The arguments of an operation are inconsistent.
    #[error("invalid arguments: {0}")]
    InvalidArgument(&'static str),
}
