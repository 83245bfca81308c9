//! Stream plumbing shared by the async traversals.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::stream::Stream;
use pin_project_lite::pin_project;

pin_project! {
    /// A [`Stream`] that yields the items of a synchronous iterator.
    ///
    /// Every poll is immediately ready, so wrapping an iterator lets it run
    /// through the same traversal as a genuinely asynchronous source. The
    /// iterator is walked once, front to back.
    ///
    /// Created by [`iter_stream`].
    #[derive(Debug, Clone)]
    #[must_use = "streams do nothing unless polled"]
    pub struct IterStream<I> {
        iter: I,
    }
}

/// Wraps a synchronous iterator in a stream that never suspends.
///
/// The stream reports the iterator's `size_hint`, so traversals can pre-size
/// their accumulators exactly as the synchronous versions do.
///
/// # Examples
///
/// ```
/// use either_rail::async_ext::{iter_stream, traverse_stream};
/// use either_rail::Either;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let parsed = traverse_stream(iter_stream(["1", "2"]), |s| {
///     s.parse::<i32>().map_or(Either::left(s), Either::right)
/// })
/// .await;
/// assert_eq!(parsed, Either::right(vec![1, 2]));
/// # }
/// ```
pub fn iter_stream<I: IntoIterator>(iter: I) -> IterStream<I::IntoIter> {
    IterStream { iter: iter.into_iter() }
}

impl<I: Iterator> Stream for IterStream<I> {
    type Item = I::Item;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.project().iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Future resolving to the next item of a pinned stream.
#[must_use = "futures do nothing unless polled"]
pub(crate) struct Next<'a, S: ?Sized> {
    stream: Pin<&'a mut S>,
}

impl<S: Stream + ?Sized> Future for Next<'_, S> {
    type Output = Option<S::Item>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.stream.as_mut().poll_next(cx)
    }
}

/// Pulls the next item from `stream`, suspending until it is available.
pub(crate) fn next<S: Stream + ?Sized>(stream: Pin<&mut S>) -> Next<'_, S> {
    Next { stream }
}
