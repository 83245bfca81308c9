//! Short-circuiting traversals over sequences and keyed collections.
//!
//! A traversal applies a projection `A -> Either<L, R>` to every element of a
//! source and folds the results into one `Either<L, Collection<R>>`:
//!
//! - the first left ends the traversal and is returned as-is; no later element
//!   is pulled from the source or projected;
//! - otherwise every right is collected, in source order for sequences and
//!   under its key for keyed collections.
//!
//! [`partition_eithers`] is the counterpart that never stops early.
//! Asynchronous variants live in `async_ext` (feature `async`).
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//!
//! use either_rail::prelude::*;
//!
//! let calls = Cell::new(0);
//! let parse = |s: &str| {
//!     calls.set(calls.get() + 1);
//!     s.parse::<i32>().map_or_else(|_| Either::left(format!("Fail {s}")), Either::right)
//! };
//!
//! let result = ["5", "3", "x", "9"].traverse(parse);
//! assert_eq!(result, Either::left("Fail x".to_string()));
//! assert_eq!(calls.get(), 3);
//! ```
pub mod capacity;
pub mod keyed;
pub mod partition;
pub mod seq;

pub use self::capacity::DEFAULT_ESTIMATED_COUNT;
pub use self::keyed::{traverse_values, KeyedSource};
pub use self::partition::{lefts, partition_eithers, rights, EitherIteratorExt, Lefts, Rights};
pub use self::seq::{traverse, traverse_with_estimate, try_traverse, TraverseExt};
