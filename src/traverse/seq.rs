use core::iter;

use crate::either::Either;
use crate::macros::trace_short_circuit;
use crate::traverse::capacity::initial_capacity;
use crate::types::alloc_type::Vec;

/// The one short-circuiting fold every synchronous traversal runs.
///
/// Projects each item in order and extends `acc` with right payloads. The
/// first left stops iteration on the spot and is returned; `acc` is dropped
/// without being exposed.
pub(crate) fn short_circuit<I, L, T, C, F>(source: I, mut f: F, mut acc: C) -> Either<L, C>
where
    I: Iterator,
    C: Extend<T>,
    F: FnMut(I::Item) -> Either<L, T>,
{
    for (index, item) in source.enumerate() {
        match f(item) {
            Either::Right(value) => acc.extend(iter::once(value)),
            Either::Left(left) => {
                trace_short_circuit!(index);
                return Either::Left(left);
            },
        }
    }
    Either::Right(acc)
}

/// Applies `f` to every item and collects the rights, stopping at the first left.
///
/// Items are consumed in order and each is projected at most once; after a
/// left no further item is pulled from `source`. On success the rights keep
/// the source order.
///
/// # Arguments
///
/// * `source` - Any single-pass source of items
/// * `f` - Projection returning an [`Either`] per item
///
/// # Examples
///
/// ```
/// use either_rail::{traverse, Either};
///
/// fn parse(s: &str) -> Either<String, i32> {
///     s.parse().map_or_else(|_| Either::left(format!("Fail {s}")), Either::right)
/// }
///
/// assert_eq!(traverse(["5", "3", "9"], parse), Either::right(vec![5, 3, 9]));
/// assert_eq!(traverse(["5", "x", "9"], parse), Either::left("Fail x".to_string()));
/// ```
pub fn traverse<I, L, R, F>(source: I, f: F) -> Either<L, Vec<R>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Either<L, R>,
{
    let source = source.into_iter();
    let capacity = initial_capacity(source.size_hint(), None);
    short_circuit(source, f, Vec::with_capacity(capacity))
}

/// Like [`traverse`], pre-sizing the accumulator with `estimated_count` when
/// the source cannot report an exact length.
///
/// The estimate only affects allocation, never the result.
pub fn traverse_with_estimate<I, L, R, F>(
    source: I,
    f: F,
    estimated_count: usize,
) -> Either<L, Vec<R>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Either<L, R>,
{
    let source = source.into_iter();
    let capacity = initial_capacity(source.size_hint(), Some(estimated_count));
    short_circuit(source, f, Vec::with_capacity(capacity))
}

/// Traversal whose projection can also fail abnormally.
///
/// A left is a domain result and ends the traversal as `Ok(Either::Left(_))`.
/// An `Err` is a different failure channel: it ends the traversal at once and
/// is returned unchanged, never turned into a left.
///
/// # Examples
///
/// ```
/// use either_rail::{try_traverse, Either};
///
/// let lookup = |id: u32| -> Result<Either<&'static str, u32>, String> {
///     match id {
///         0 => Err("storage offline".to_string()),
///         1 => Ok(Either::left("missing")),
///         n => Ok(Either::right(n * 10)),
///     }
/// };
///
/// assert_eq!(try_traverse([2, 3], lookup), Ok(Either::right(vec![20, 30])));
/// assert_eq!(try_traverse([2, 1, 0], lookup), Ok(Either::left("missing")));
/// assert_eq!(try_traverse([2, 0, 1], lookup), Err("storage offline".to_string()));
/// ```
pub fn try_traverse<I, L, R, E, F>(source: I, mut f: F) -> Result<Either<L, Vec<R>>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<Either<L, R>, E>,
{
    let source = source.into_iter();
    let mut rights = Vec::with_capacity(initial_capacity(source.size_hint(), None));
    for (index, item) in source.enumerate() {
        match f(item)? {
            Either::Right(right) => rights.push(right),
            Either::Left(left) => {
                trace_short_circuit!(index);
                return Ok(Either::Left(left));
            },
        }
    }
    Ok(Either::Right(rights))
}

/// Method-call syntax for the sequence traversals.
///
/// Implemented for every [`IntoIterator`].
///
/// # Examples
///
/// ```
/// use either_rail::prelude::*;
///
/// let doubled = vec![1, 2, 3].traverse(|x| Either::<&str, i32>::right(x * 2));
/// assert_eq!(doubled, Either::right(vec![2, 4, 6]));
/// ```
pub trait TraverseExt: IntoIterator + Sized {
    /// See [`traverse`].
    fn traverse<L, R, F>(self, f: F) -> Either<L, Vec<R>>
    where
        F: FnMut(Self::Item) -> Either<L, R>,
    {
        traverse(self, f)
    }

    /// See [`traverse_with_estimate`].
    fn traverse_with_estimate<L, R, F>(self, f: F, estimated_count: usize) -> Either<L, Vec<R>>
    where
        F: FnMut(Self::Item) -> Either<L, R>,
    {
        traverse_with_estimate(self, f, estimated_count)
    }

    /// See [`try_traverse`].
    fn try_traverse<L, R, E, F>(self, f: F) -> Result<Either<L, Vec<R>>, E>
    where
        F: FnMut(Self::Item) -> Result<Either<L, R>, E>,
    {
        try_traverse(self, f)
    }
}

impl<I: IntoIterator> TraverseExt for I {}
