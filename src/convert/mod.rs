//! Conversion helpers between `Either`, `Result` and `Option`.
//!
//! `Result<R, L>` and `Either<L, R>` carry the same information with the same
//! bias: `Ok` maps to `Right` and `Err` to `Left`. These adapters make it
//! straightforward to move between `?`-based code and `Either`-based traversal.
//!
//! # Examples
//!
//! ```
//! use either_rail::convert::*;
//! use either_rail::Either;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let either = result_to_either(result);
//! assert_eq!(either, Either::right(42));
//! assert_eq!(either_to_result(either), Ok(42));
//! ```

use crate::either::Either;

/// Converts an `Either` into a `Result`, right becoming `Ok`.
///
/// # Examples
///
/// ```
/// use either_rail::convert::either_to_result;
/// use either_rail::Either;
///
/// assert_eq!(either_to_result(Either::<&str, i32>::left("bad")), Err("bad"));
/// ```
#[inline]
pub fn either_to_result<L, R>(either: Either<L, R>) -> Result<R, L> {
    either.try_extract()
}

/// Converts a `Result` into an `Either`, `Err` becoming left.
#[inline]
pub fn result_to_either<L, R>(result: Result<R, L>) -> Either<L, R> {
    Either::from(result)
}

/// Converts an `Option` into an `Either`, using `left` when it is `None`.
///
/// # Arguments
///
/// * `option` - The optional right payload
/// * `left` - Left payload used for `None`
///
/// # Examples
///
/// ```
/// use either_rail::convert::option_to_either;
/// use either_rail::Either;
///
/// assert_eq!(option_to_either(Some(3), "missing"), Either::right(3));
/// assert_eq!(option_to_either(None::<i32>, "missing"), Either::left("missing"));
/// ```
#[inline]
pub fn option_to_either<L, R>(option: Option<R>, left: L) -> Either<L, R> {
    match option {
        Some(right) => Either::Right(right),
        None => Either::Left(left),
    }
}

/// Keeps the right payload of an `Either`, discarding a left.
#[inline]
pub fn either_to_option<L, R>(either: Either<L, R>) -> Option<R> {
    either.into_right()
}
