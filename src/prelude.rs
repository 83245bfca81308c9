//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use either_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Either`]
//! - **Traits**: [`TraverseExt`], [`EitherIteratorExt`], [`KeyedSource`], [`IntoEither`]
//! - **Strategies**: [`EqualityComparer`], [`Comparer`], [`EitherEqualityComparer`], [`EitherComparer`]
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use either_rail::prelude::*;
//!
//! let limits = BTreeMap::from([("cpu", "4"), ("memory", "16")]);
//! let parsed = limits.traverse_values(|v| v.parse::<u32>().into_either());
//! assert_eq!(parsed, Either::right(BTreeMap::from([("cpu", 4), ("memory", 16)])));
//! ```
//!
//! ```
//! use either_rail::prelude::*;
//!
//! let doubled = vec![1, 2, 3].traverse(|x| {
//!     if x > 0 { Either::<&str, i32>::right(x * 2) } else { Either::left("non-positive") }
//! });
//! assert_eq!(doubled, Either::right(vec![2, 4, 6]));
//! ```

pub use crate::compare::{Comparer, EitherComparer, EitherEqualityComparer, EqualityComparer};
pub use crate::either::Either;
pub use crate::traits::IntoEither;
pub use crate::traverse::{EitherIteratorExt, KeyedSource, TraverseExt};
