//! Crate-internal macros.

/// Records that a traversal stopped at the left produced for element `$index`.
///
/// Expands to a `tracing` trace event when the `tracing` feature is enabled,
/// and to nothing otherwise.
macro_rules! trace_short_circuit {
    ($index:expr) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(index = $index, "traversal short-circuited on a left value");
        #[cfg(not(feature = "tracing"))]
        let _ = $index;
    }};
}

pub(crate) use trace_short_circuit;
