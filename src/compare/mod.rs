//! Pluggable equality and ordering strategies.
//!
//! [`Either`](crate::Either) derives structural `PartialEq`, `Ord` and a
//! payload-only `Hash`. When a payload type only has partial support (floats),
//! or a caller wants different semantics on one side (case-insensitive text),
//! a strategy object is injected instead:
//!
//! - [`EqualityComparer`] / [`Comparer`] - The strategy traits
//! - [`Natural`] - The payload type's own `Eq`, `Hash` and `Ord`
//! - [`ByKey`] / [`FnComparer`] - Strategies built from closures
//! - [`EitherEqualityComparer`] / [`EitherComparer`] - Per-side composition for `Either`
//!
//! # Examples
//!
//! ```
//! use either_rail::compare::{ByKey, Comparer, EitherComparer};
//! use either_rail::Either;
//! use core::cmp::Ordering;
//!
//! let cmp = EitherComparer::with_left(ByKey(|s: &String| s.to_lowercase()));
//! let a = Either::<String, i32>::left("apple".into());
//! let b = Either::<String, i32>::left("Banana".into());
//!
//! assert_eq!(cmp.compare(&a, &b), Ordering::Less);
//! assert_eq!(cmp.compare(&b, &Either::right(0)), Ordering::Less);
//! ```
pub mod either;
pub mod strategy;

pub use self::either::{EitherComparer, EitherEqualityComparer};
pub use self::strategy::{ByKey, Comparer, EqualityComparer, FnComparer, Natural};
