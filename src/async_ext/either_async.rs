//! Async twins of the [`Either`] combinators.
//!
//! Each method awaits at most one projection: the one matching the active
//! side. The untouched side is moved through as-is.

use core::future::Future;

use crate::either::Either;

impl<L, R> Either<L, R> {
    /// Async case analysis; awaits exactly one of the projections.
    ///
    /// # Example
    ///
    /// ```rust
    /// use either_rail::Either;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let e = Either::<&str, u32>::right(3);
    /// let len = e
    ///     .fold_async(|l| async move { l.len() }, |r| async move { r as usize })
    ///     .await;
    /// assert_eq!(len, 3);
    /// # }
    /// ```
    pub async fn fold_async<T, F, G, FutL, FutR>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> FutL,
        G: FnOnce(R) -> FutR,
        FutL: Future<Output = T>,
        FutR: Future<Output = T>,
    {
        match self {
            Self::Left(left) => on_left(left).await,
            Self::Right(right) => on_right(right).await,
        }
    }

    /// Async [`map_left`](Self::map_left).
    pub async fn map_left_async<L2, F, Fut>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = L2>,
    {
        match self {
            Self::Left(left) => Either::Left(f(left).await),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Async [`map_right`](Self::map_right).
    pub async fn map_right_async<R2, F, Fut>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = R2>,
    {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(f(right).await),
        }
    }

    /// Async [`map_both`](Self::map_both).
    pub async fn map_both_async<L2, R2, F, G, FutL, FutR>(
        self,
        on_left: F,
        on_right: G,
    ) -> Either<L2, R2>
    where
        F: FnOnce(L) -> FutL,
        G: FnOnce(R) -> FutR,
        FutL: Future<Output = L2>,
        FutR: Future<Output = R2>,
    {
        match self {
            Self::Left(left) => Either::Left(on_left(left).await),
            Self::Right(right) => Either::Right(on_right(right).await),
        }
    }

    /// Async [`bind_right`](Self::bind_right).
    ///
    /// # Example
    ///
    /// ```rust
    /// use either_rail::Either;
    ///
    /// async fn load(id: u32) -> Either<&'static str, String> {
    ///     if id == 0 { Either::left("no such record") } else { Either::right(format!("record {id}")) }
    /// }
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// assert_eq!(Either::right(4).bind_right_async(load).await, Either::right("record 4".to_string()));
    /// assert_eq!(Either::right(0).bind_right_async(load).await, Either::left("no such record"));
    /// # }
    /// ```
    pub async fn bind_right_async<R2, F, Fut>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, R2>>,
    {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => f(right).await,
        }
    }
}
