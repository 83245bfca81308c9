//! Tracing integration for either-rail.
//!
//! Tags left values with the name of the `tracing` span they were produced
//! in. Right values pass through untouched.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! either-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::{self, Display};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::either::Either;

/// A left payload together with the span it was observed in.
///
/// `span` is `"unknown"` when the span is disabled or there is no active
/// subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpanContext<L> {
    pub value: L,
    pub span: &'static str,
}

impl<L> SpanContext<L> {
    /// Drops the span tag and returns the payload.
    #[inline]
    pub fn into_inner(self) -> L {
        self.value
    }
}

impl<L: Display> Display for SpanContext<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (in span '{}')", self.value, self.span)
    }
}

/// Extension trait tagging the left side of an [`Either`] with span context.
///
/// # Example
///
/// ```rust
/// use either_rail::async_ext::EitherSpanExt;
/// use either_rail::Either;
/// use tracing::Span;
///
/// let tagged = Either::<&str, i32>::left("missing").with_span(&Span::none());
/// let context = tagged.into_left().unwrap();
/// assert_eq!(context.value, "missing");
/// assert_eq!(context.span, "unknown");
/// ```
pub trait EitherSpanExt<L, R> {
    /// Tags a left with the current span.
    fn with_current_span(self) -> Either<SpanContext<L>, R>;

    /// Tags a left with `span`.
    fn with_span(self, span: &Span) -> Either<SpanContext<L>, R>;
}

impl<L, R> EitherSpanExt<L, R> for Either<L, R> {
    fn with_current_span(self) -> Either<SpanContext<L>, R> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Either<SpanContext<L>, R> {
        self.map_left(|value| attach(value, span))
    }
}

/// Extension trait for futures resolving to an [`Either`].
///
/// # Example
///
/// ```rust
/// use either_rail::async_ext::FutureSpanExt;
/// use either_rail::Either;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let outcome = async { Either::<&str, i32>::right(7) }.with_span_context().await;
/// assert_eq!(outcome, Either::right(7));
/// # }
/// ```
pub trait FutureSpanExt<L, R>: Future<Output = Either<L, R>> + Sized {
    /// Tags a left outcome with the span current at construction time.
    fn with_span_context(self) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span: Span::current() }
    }

    /// Tags a left outcome with `span`.
    fn with_span(self, span: Span) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span }
    }
}

impl<F, L, R> FutureSpanExt<L, R> for F where F: Future<Output = Either<L, R>> {}

pin_project! {
    /// Future returned by [`FutureSpanExt::with_span_context`] and
    /// [`FutureSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanContextFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, L, R> Future for SpanContextFuture<F>
where
    F: Future<Output = Either<L, R>>,
{
    type Output = Either<SpanContext<L>, R>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Either::Right(value)) => Poll::Ready(Either::Right(value)),
            Poll::Ready(Either::Left(value)) => Poll::Ready(Either::Left(attach(value, this.span))),
            Poll::Pending => Poll::Pending,
        }
    }
}

fn attach<L>(value: L, span: &Span) -> SpanContext<L> {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    tracing::debug!(span_name = name, "left value tagged with span context");
    SpanContext { value, span: name }
}
