//! Async prelude - all async utilities in one import.
//!
//! It re-exports everything from the sync [`prelude`](crate::prelude) plus async-specific items.
//!
//! # Usage
//!
//! ```rust
//! use either_rail::prelude_async::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let names = traverse_stream(iter_stream(["ada", "", "linus"]), |name: &str| {
//!     if name.is_empty() { Either::left("empty name") } else { Either::right(name.len()) }
//! })
//! .await;
//! assert_eq!(names, Either::left("empty name"));
//! # }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Types**: [`Either`]
//! - **Traits**: [`TraverseExt`], [`EitherIteratorExt`], [`KeyedSource`], [`IntoEither`]
//!
//! ## Async-Specific
//!
//! - **Functions**: [`traverse_stream_await`], [`traverse_stream`], [`traverse_async_await`],
//!   [`traverse_values_async`], [`try_traverse_stream`], [`iter_stream`]
//! - **Traits** (feature `tracing`): `EitherSpanExt`, `FutureSpanExt`

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{
    iter_stream, traverse_async_await, traverse_stream, traverse_stream_await,
    traverse_values_async, try_traverse_stream, IterStream,
};

#[cfg(feature = "tracing")]
pub use crate::async_ext::{EitherSpanExt, FutureSpanExt, SpanContext};
