//! A two-sided value type and a short-circuiting traversal engine.
//!
//! [`Either<L, R>`](Either) holds exactly one of two payloads. By convention
//! the left side carries failure-like or alternative data and the right side
//! the main-path value. On top of it the crate offers traversals that project
//! every element of a sequence or keyed collection into an `Either` and stop
//! at the first left.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `either_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Combinators
//!
//! ```
//! use either_rail::Either;
//!
//! let port: Either<String, u16> = Either::right(8080);
//! let described = port
//!     .map_right(|p| p + 1)
//!     .fold(|err| format!("invalid: {err}"), |p| format!("listening on {p}"));
//!
//! assert_eq!(described, "listening on 8081");
//! ```
//!
//! ## Short-Circuiting Traversal
//!
//! ```
//! use either_rail::{traverse, Either};
//!
//! let parse = |s: &str| {
//!     s.parse::<i32>().map_or_else(|_| Either::left(format!("Fail {s}")), Either::right)
//! };
//!
//! assert_eq!(traverse(["1", "2"], parse), Either::right(vec![1, 2]));
//! assert_eq!(traverse(["1", "x", "y"], parse), Either::left("Fail x".to_string()));
//! ```
//!
//! ## Partitioning
//!
//! ```
//! use either_rail::{partition_eithers, Either};
//!
//! let checks = vec![Either::right(1), Either::left("disk"), Either::right(2)];
//! let (failed, passed) = partition_eithers(checks);
//!
//! assert_eq!(failed, vec!["disk"]);
//! assert_eq!(passed, vec![1, 2]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Pluggable equality and ordering strategies
pub mod compare;
/// Conversions between Either, Result and Option
pub mod convert;
/// The Either type, its iterators and formatting
pub mod either;
/// Crate-internal macros
mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for turning standard types into Either
pub mod traits;
/// Short-circuiting traversals and partitioning
pub mod traverse;
/// Allocation-aware collection aliases
pub mod types;

/// Async traversals and combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use either::{DisplayNullable, Either};
pub use traits::IntoEither;
pub use traverse::{
    lefts, partition_eithers, rights, traverse, traverse_values, traverse_with_estimate,
    try_traverse, EitherIteratorExt, KeyedSource, TraverseExt,
};
