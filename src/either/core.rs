use core::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is exclusively one of two possibilities.
///
/// `Either<L, R>` holds either a "left" `L` or a "right" `R`. By convention the
/// left side carries a failure-like value and the right side carries the value
/// a computation continues with ("right" as in "correct"), which is why the
/// combinators that chain work ([`bind_right`](Self::bind_right), traversal)
/// are right-biased.
///
/// # Equality, Ordering and Hashing
///
/// * Two values are equal iff they are on the same side and the active
///   payloads are equal. `Left(x)` never equals `Right(y)`.
/// * Every `Left` orders before every `Right`; values on the same side order
///   by their payload.
/// * The hash is computed from the active payload only.
///
/// Use [`EitherEqualityComparer`](crate::compare::EitherEqualityComparer) and
/// [`EitherComparer`](crate::compare::EitherComparer) to plug in custom
/// per-side semantics.
///
/// # Serde Support
///
/// With the `serde` feature, `Either` serializes externally tagged, as
/// `{"Left": ..}` or `{"Right": ..}`.
///
/// # Type Parameters
///
/// * `L` - The left payload type
/// * `R` - The right payload type
///
/// # Examples
///
/// ```
/// use either_rail::Either;
///
/// fn parse(input: &str) -> Either<String, i32> {
///     input
///         .parse()
///         .map_or_else(|_| Either::left(format!("Fail {input}")), Either::right)
/// }
///
/// assert_eq!(parse("5"), Either::Right(5));
/// assert_eq!(parse("x"), Either::Left("Fail x".to_string()));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Creates a left value.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<i32, &str>::left(1);
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a right value.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<i32, &str>::right("ok");
    /// assert!(e.is_right());
    /// ```
    #[inline]
    pub fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if the value is a left.
    #[must_use]
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if the value is a right.
    #[must_use]
    #[inline]
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Extracts the active payload.
    ///
    /// Returns `Ok` with the right payload or `Err` with the left payload, so
    /// `try_extract().is_ok()` tells whether the value was a right. Every
    /// other accessor is a thin layer over this.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<&str, i32>::right(42);
    /// match e.try_extract() {
    ///     Ok(right) => assert_eq!(right, 42),
    ///     Err(left) => panic!("unexpected left: {left}"),
    /// }
    /// ```
    #[must_use]
    #[inline]
    pub fn try_extract(self) -> Result<R, L> {
        match self {
            Self::Left(left) => Err(left),
            Self::Right(right) => Ok(right),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Converts from `&mut Either<L, R>` to `Either<&mut L, &mut R>`.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Returns the left payload, or `None` for a right.
    #[must_use]
    #[inline]
    pub fn into_left(self) -> Option<L> {
        self.try_extract().err()
    }

    /// Returns the right payload, or `None` for a left.
    #[must_use]
    #[inline]
    pub fn into_right(self) -> Option<R> {
        self.try_extract().ok()
    }

    /// Borrows the left payload, if active.
    #[must_use]
    #[inline]
    pub fn as_left(&self) -> Option<&L> {
        self.as_ref().into_left()
    }

    /// Borrows the right payload, if active.
    #[must_use]
    #[inline]
    pub fn as_right(&self) -> Option<&R> {
        self.as_ref().into_right()
    }

    /// Returns the left payload, or `L::default()` for a right.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::left(7).left_or_default(), 7);
    /// assert_eq!(Either::<i32, &str>::right("x").left_or_default(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn left_or_default(self) -> L
    where
        L: Default,
    {
        self.into_left().unwrap_or_default()
    }

    /// Returns the right payload, or `R::default()` for a left.
    #[must_use]
    #[inline]
    pub fn right_or_default(self) -> R
    where
        R: Default,
    {
        self.into_right().unwrap_or_default()
    }

    /// Returns the left payload, or `fallback` for a right.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<&str, i32>::right(1);
    /// assert_eq!(e.left_or("Error"), "Error");
    /// ```
    #[must_use]
    #[inline]
    pub fn left_or(self, fallback: L) -> L {
        self.into_left().unwrap_or(fallback)
    }

    /// Returns the right payload, or `fallback` for a left.
    #[must_use]
    #[inline]
    pub fn right_or(self, fallback: R) -> R {
        self.into_right().unwrap_or(fallback)
    }

    /// Returns the left payload, or computes one from the right payload.
    #[must_use]
    #[inline]
    pub fn left_or_else<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(left) => left,
            Self::Right(right) => f(right),
        }
    }

    /// Returns the right payload, or computes one from the left payload.
    #[must_use]
    #[inline]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(left) => f(left),
            Self::Right(right) => right,
        }
    }

    /// Swaps the sides, keeping the same payload active.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<i32, &str>::left(1);
    /// assert_eq!(e.flip(), Either::<&str, i32>::right(1));
    /// assert_eq!(e.flip().flip(), e);
    /// ```
    #[inline]
    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(left) => Either::Right(left),
            Self::Right(right) => Either::Left(right),
        }
    }

    /// Case analysis: calls exactly one of the projections and returns its result.
    ///
    /// # Arguments
    ///
    /// * `on_left` - Called with the payload when the value is a left
    /// * `on_right` - Called with the payload when the value is a right
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<&str, i32>::right(21);
    /// let text = e.fold(|l| l.to_string(), |r| (r * 2).to_string());
    /// assert_eq!(text, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
        }
    }

    /// Maps the left payload, passing a right through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<i32, &str>::left(404);
    /// assert_eq!(e.map_left(|code| format!("HTTP {code}")), Either::left("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(left) => Either::Left(f(left)),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Maps the right payload, passing a left through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<&str, i32>::right(21);
    /// assert_eq!(e.map_right(|x| x * 2), Either::right(42));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(f(right)),
        }
    }

    /// Maps whichever payload is active with the matching projection.
    #[inline]
    pub fn map_both<L2, R2, F, G>(self, on_left: F, on_right: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(left) => Either::Left(on_left(left)),
            Self::Right(right) => Either::Right(on_right(right)),
        }
    }

    /// Replaces a right with the result of `f`; a left passes through.
    ///
    /// The result of `f` may itself be a left or a right. There is no
    /// `bind_left`: the right side is the continuation path.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// fn half(x: i32) -> Either<&'static str, i32> {
    ///     if x % 2 == 0 { Either::right(x / 2) } else { Either::left("odd") }
    /// }
    ///
    /// assert_eq!(Either::right(8).bind_right(half), Either::right(4));
    /// assert_eq!(Either::right(3).bind_right(half), Either::left("odd"));
    /// assert_eq!(Either::<&str, i32>::left("early").bind_right(half), Either::left("early"));
    /// ```
    #[inline]
    pub fn bind_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => f(right),
        }
    }

    /// Builds a left of a new left type, keeping `R` as the right type.
    ///
    /// The current payload is not used; this exists to re-type a value while
    /// keeping the static information about the untouched side.
    #[inline]
    pub fn with_left<L2>(&self, value: L2) -> Either<L2, R> {
        Either::Left(value)
    }

    /// Builds a right of a new right type, keeping `L` as the left type.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let e = Either::<&str, i32>::left("bad");
    /// let retyped: Either<&str, String> = e.with_right("fresh".to_string());
    /// assert_eq!(retyped, Either::right("fresh".to_string()));
    /// ```
    #[inline]
    pub fn with_right<R2>(&self, value: R2) -> Either<L, R2> {
        Either::Right(value)
    }

    /// Returns `self` if it is a right, otherwise `other`.
    ///
    /// First right wins; when neither is a right the result is `other`. Not
    /// commutative, and both operands are already evaluated.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let l1 = Either::<i32, &str>::left(1);
    /// let l2 = Either::<i32, &str>::left(2);
    /// assert_eq!(l1.combine(Either::right("ok")), Either::right("ok"));
    /// assert_eq!(Either::<i32, &str>::right("a").combine(Either::right("b")), Either::right("a"));
    /// assert_eq!(l1.combine(l2), l2);
    /// ```
    #[inline]
    pub fn combine(self, other: Self) -> Self {
        if self.is_right() {
            self
        } else {
            other
        }
    }
}

impl<T> Either<T, T> {
    /// Returns whichever payload is active.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::left(1).into_inner(), 1);
    /// assert_eq!(Either::<i32, i32>::right(2).into_inner(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }

    /// Borrows whichever payload is active.
    #[must_use]
    #[inline]
    pub fn as_inner(&self) -> &T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting on the right.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.bind_right(|inner| inner)
    }
}

// Only the active payload feeds the hasher; the discriminant does not.
impl<L: Hash, R: Hash> Hash for Either<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Left(left) => left.hash(state),
            Self::Right(right) => right.hash(state),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(right) => Self::Right(right),
            Err(left) => Self::Left(left),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.try_extract()
    }
}
