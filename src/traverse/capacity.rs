//! Accumulator pre-sizing.
//!
//! Capacities computed here are performance hints only and never change what
//! a traversal returns.

/// Capacity used when the source cannot report its length cheaply and the
/// caller gave no estimate.
pub const DEFAULT_ESTIMATED_COUNT: usize = 10;

/// Upper bound on any pre-allocation, so a huge exact hint on a source that
/// short-circuits early does not reserve memory it will never use.
pub const MAX_PREALLOCATED: usize = 4096;

/// Picks the initial accumulator capacity for a source with the given
/// `size_hint`.
///
/// An exact hint (`lower == upper`) wins; otherwise `estimate`, otherwise
/// [`DEFAULT_ESTIMATED_COUNT`].
///
/// # Examples
///
/// ```
/// use either_rail::traverse::capacity::{initial_capacity, DEFAULT_ESTIMATED_COUNT};
///
/// assert_eq!(initial_capacity((3, Some(3)), None), 3);
/// assert_eq!(initial_capacity((0, None), Some(50)), 50);
/// assert_eq!(initial_capacity((1, Some(8)), None), DEFAULT_ESTIMATED_COUNT);
/// ```
#[must_use]
#[inline]
pub fn initial_capacity(size_hint: (usize, Option<usize>), estimate: Option<usize>) -> usize {
    let capacity = match size_hint {
        (lower, Some(upper)) if lower == upper => lower,
        _ => estimate.unwrap_or(DEFAULT_ESTIMATED_COUNT),
    };
    capacity.min(MAX_PREALLOCATED)
}

/// Returns `true` when an accumulator used less than a third of the capacity
/// it was created with, and should give the rest back.
#[must_use]
#[inline]
pub(crate) fn should_shrink(len: usize, initial: usize) -> bool {
    len < initial / 3
}
