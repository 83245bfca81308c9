//! Async extensions for either-rail.
//!
//! Async counterparts of the traversal engine and of the [`Either`]
//! combinators. Traversals stay strictly sequential: one projection is
//! awaited at a time and a left stops the source from being pulled again.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! either-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use either_rail::prelude_async::*;
//!
//! async fn lookup(id: u32) -> Either<String, u32> {
//!     if id % 2 == 0 { Either::right(id / 2) } else { Either::left(format!("odd id {id}")) }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! assert_eq!(traverse_async_await([2, 4], lookup).await, Either::right(vec![1, 2]));
//! # }
//! ```
//!
//! [`Either`]: crate::Either

mod either_async;
mod stream;
mod traverse;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use stream::{iter_stream, IterStream};
pub use traverse::{
    traverse_async_await, traverse_stream, traverse_stream_await,
    traverse_stream_await_with_estimate, traverse_values_async, try_traverse_stream,
};

#[cfg(feature = "tracing")]
pub use tracing_ext::{EitherSpanExt, FutureSpanExt, SpanContext, SpanContextFuture};
