//! Internal logging shim.
//!
//! `trace_event!` forwards to `tracing` when the `tracing` feature is enabled and
//! expands to nothing otherwise, so hot loops carry no logging cost in builds
//! that opt out.

/// Emits a `tracing` event at the given level.
///
/// ```ignore
/// trace_event!(debug, flow = 3, "min cut complete");
/// ```
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    (trace, $($arg:tt)+) => { ::tracing::trace!($($arg)+) };
    (debug, $($arg:tt)+) => { ::tracing::debug!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{}};
}
