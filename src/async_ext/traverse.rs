//! Async traversals.
//!
//! Every variant runs the same sequential algorithm as the synchronous
//! [`traverse`](crate::traverse()): pull the next item, await its projection,
//! keep the right or stop at the left. A projection is never started before
//! the previous one has resolved, and after a left no further item is pulled
//! from the source.
//!
//! Synchronous sources are wrapped in [`IterStream`](super::IterStream) and
//! synchronous projections in [`core::future::ready`], so there is only one
//! code path.

use core::future::{ready, Future};
use core::iter;
use core::pin::pin;

use futures_core::stream::Stream;

use super::stream::{iter_stream, next};
use crate::either::Either;
use crate::macros::trace_short_circuit;
use crate::traverse::capacity::initial_capacity;
use crate::traverse::KeyedSource;
use crate::types::alloc_type::Vec;

/// The one short-circuiting fold every async traversal runs.
async fn short_circuit<S, L, T, C, F, Fut>(source: S, mut f: F, mut acc: C) -> Either<L, C>
where
    S: Stream,
    C: Extend<T>,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = Either<L, T>>,
{
    let mut source = pin!(source);
    let mut index = 0usize;

    while let Some(item) = next(source.as_mut()).await {
        match f(item).await {
            Either::Right(value) => acc.extend(iter::once(value)),
            Either::Left(left) => {
                trace_short_circuit!(index);
                return Either::Left(left);
            },
        }
        index += 1;
    }

    Either::Right(acc)
}

/// Traverses a stream with an async projection, stopping at the first left.
///
/// # Arguments
///
/// * `source` - A single-pass stream of items
/// * `f` - Async projection returning an [`Either`] per item
///
/// # Example
///
/// ```rust
/// use either_rail::async_ext::{iter_stream, traverse_stream_await};
/// use either_rail::Either;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let result = traverse_stream_await(iter_stream([1, 2, 3]), |x| async move {
///     if x < 3 { Either::right(x * 10) } else { Either::left(format!("{x} is too big")) }
/// })
/// .await;
///
/// assert_eq!(result, Either::left("3 is too big".to_string()));
/// # }
/// ```
pub async fn traverse_stream_await<S, L, R, F, Fut>(source: S, f: F) -> Either<L, Vec<R>>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = Either<L, R>>,
{
    let capacity = initial_capacity(source.size_hint(), None);
    short_circuit(source, f, Vec::with_capacity(capacity)).await
}

/// Like [`traverse_stream_await`], pre-sizing the accumulator with
/// `estimated_count` when the stream cannot report an exact length.
pub async fn traverse_stream_await_with_estimate<S, L, R, F, Fut>(
    source: S,
    f: F,
    estimated_count: usize,
) -> Either<L, Vec<R>>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = Either<L, R>>,
{
    let capacity = initial_capacity(source.size_hint(), Some(estimated_count));
    short_circuit(source, f, Vec::with_capacity(capacity)).await
}

/// Traverses a stream with a synchronous projection.
pub async fn traverse_stream<S, L, R, F>(source: S, mut f: F) -> Either<L, Vec<R>>
where
    S: Stream,
    F: FnMut(S::Item) -> Either<L, R>,
{
    traverse_stream_await(source, move |item| ready(f(item))).await
}

/// Traverses a synchronous source with an async projection.
///
/// # Example
///
/// ```rust
/// use either_rail::async_ext::traverse_async_await;
/// use either_rail::Either;
///
/// async fn fetch(id: u32) -> Either<String, &'static str> {
///     match id {
///         1 => Either::right("alice"),
///         2 => Either::right("bob"),
///         _ => Either::left(format!("user {id} not found")),
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// assert_eq!(traverse_async_await([1, 2], fetch).await, Either::right(vec!["alice", "bob"]));
/// assert_eq!(
///     traverse_async_await([1, 7, 2], fetch).await,
///     Either::left("user 7 not found".to_string())
/// );
/// # }
/// ```
pub async fn traverse_async_await<I, L, R, F, Fut>(source: I, f: F) -> Either<L, Vec<R>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Either<L, R>>,
{
    traverse_stream_await(iter_stream(source), f).await
}

/// Traverses a keyed collection with an async projection.
///
/// The output map is prepared by [`KeyedSource::split_entries`], so a
/// `HashMap` result keeps the source's hasher.
pub async fn traverse_values_async<M, L, R, F, Fut>(source: M, mut f: F) -> Either<L, M::Output<R>>
where
    M: KeyedSource,
    F: FnMut(M::Value) -> Fut,
    Fut: Future<Output = Either<L, R>>,
{
    let (entries, output) = source.split_entries();
    short_circuit(
        iter_stream(entries),
        |(key, value)| {
            let projected = f(value);
            async move { projected.await.map_right(|right| (key, right)) }
        },
        output,
    )
    .await
}

/// Async traversal over a fallible source with a fallible projection.
///
/// A left ends the traversal as `Ok(Either::Left(_))`. An `Err`, whether
/// yielded by the source or returned by the projection, ends it at once and
/// is returned unchanged.
///
/// # Example
///
/// ```rust
/// use either_rail::async_ext::{iter_stream, try_traverse_stream};
/// use either_rail::Either;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = iter_stream([Ok(1), Err("connection reset"), Ok(3)]);
/// let result = try_traverse_stream(source, |x: i32| async move {
///     Ok::<_, &str>(Either::<String, i32>::right(x))
/// })
/// .await;
///
/// assert_eq!(result, Err("connection reset"));
/// # }
/// ```
pub async fn try_traverse_stream<S, A, L, R, E, F, Fut>(
    source: S,
    mut f: F,
) -> Result<Either<L, Vec<R>>, E>
where
    S: Stream<Item = Result<A, E>>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Result<Either<L, R>, E>>,
{
    let mut rights = Vec::with_capacity(initial_capacity(source.size_hint(), None));
    let mut source = pin!(source);
    let mut index = 0usize;

    while let Some(item) = next(source.as_mut()).await {
        match f(item?).await? {
            Either::Right(right) => rights.push(right),
            Either::Left(left) => {
                trace_short_circuit!(index);
                return Ok(Either::Left(left));
            },
        }
        index += 1;
    }

    Ok(Either::Right(rights))
}
