use core::cmp::Ordering;
use core::hash::Hasher;

use crate::compare::strategy::{Comparer, EqualityComparer, Natural};
use crate::either::Either;

/// Equality for [`Either`] built from one equality strategy per side.
///
/// Two values are equal iff they are on the same side and that side's
/// comparer reports their payloads equal. Hashing delegates to the active
/// side's comparer only.
///
/// # Type Parameters
///
/// * `LC` - Strategy for left payloads
/// * `RC` - Strategy for right payloads
///
/// # Examples
///
/// ```
/// use either_rail::compare::{ByKey, EitherEqualityComparer, EqualityComparer};
/// use either_rail::Either;
///
/// let cmp = EitherEqualityComparer::with_right(ByKey(|s: &&str| s.to_lowercase()));
///
/// let a = Either::<i32, &str>::right("Hello");
/// let b = Either::<i32, &str>::right("HELLO");
/// assert!(cmp.equals(&a, &b));
/// assert!(!cmp.equals(&Either::left(1), &b));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherEqualityComparer<LC, RC> {
    left: LC,
    right: RC,
}

impl<LC, RC> EitherEqualityComparer<LC, RC> {
    /// Creates a comparer from explicit per-side strategies.
    #[inline]
    pub fn new(left: LC, right: RC) -> Self {
        Self { left, right }
    }

    /// Strategy used for left payloads.
    #[inline]
    pub fn left_comparer(&self) -> &LC {
        &self.left
    }

    /// Strategy used for right payloads.
    #[inline]
    pub fn right_comparer(&self) -> &RC {
        &self.right
    }
}

impl EitherEqualityComparer<Natural, Natural> {
    /// Uses each payload type's own `Eq` and `Hash`.
    #[inline]
    pub fn natural() -> Self {
        Self::new(Natural, Natural)
    }
}

impl<LC> EitherEqualityComparer<LC, Natural> {
    /// Custom strategy on the left, natural equality on the right.
    #[inline]
    pub fn with_left(left: LC) -> Self {
        Self::new(left, Natural)
    }
}

impl<RC> EitherEqualityComparer<Natural, RC> {
    /// Natural equality on the left, custom strategy on the right.
    #[inline]
    pub fn with_right(right: RC) -> Self {
        Self::new(Natural, right)
    }
}

impl<L, R, LC, RC> EqualityComparer<Either<L, R>> for EitherEqualityComparer<LC, RC>
where
    LC: EqualityComparer<L>,
    RC: EqualityComparer<R>,
{
    fn equals(&self, a: &Either<L, R>, b: &Either<L, R>) -> bool {
        match (a, b) {
            (Either::Left(a), Either::Left(b)) => self.left.equals(a, b),
            (Either::Right(a), Either::Right(b)) => self.right.equals(a, b),
            _ => false,
        }
    }

    fn hash<H: Hasher>(&self, value: &Either<L, R>, state: &mut H) {
        match value {
            Either::Left(left) => self.left.hash(left, state),
            Either::Right(right) => self.right.hash(right, state),
        }
    }
}

/// Ordering for [`Either`] built from one ordering strategy per side.
///
/// Every left orders before every right; values on the same side are ordered
/// by that side's comparer.
///
/// # Examples
///
/// ```
/// use either_rail::compare::{EitherComparer, FnComparer};
/// use either_rail::Either;
///
/// let cmp = EitherComparer::with_right(FnComparer(|a: &f64, b: &f64| a.total_cmp(b)));
///
/// let mut values = vec![
///     Either::<i32, f64>::right(2.5),
///     Either::left(7),
///     Either::right(-1.0),
///     Either::left(3),
/// ];
/// cmp.sort(&mut values);
/// assert_eq!(
///     values,
///     vec![Either::left(3), Either::left(7), Either::right(-1.0), Either::right(2.5)]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherComparer<LC, RC> {
    left: LC,
    right: RC,
}

impl<LC, RC> EitherComparer<LC, RC> {
    /// Creates a comparer from explicit per-side strategies.
    #[inline]
    pub fn new(left: LC, right: RC) -> Self {
        Self { left, right }
    }

    /// Strategy used for left payloads.
    #[inline]
    pub fn left_comparer(&self) -> &LC {
        &self.left
    }

    /// Strategy used for right payloads.
    #[inline]
    pub fn right_comparer(&self) -> &RC {
        &self.right
    }

    /// Sorts `values` in place with this comparer. The sort is stable.
    pub fn sort<L, R>(&self, values: &mut [Either<L, R>])
    where
        Self: Comparer<Either<L, R>>,
    {
        values.sort_by(|a, b| self.compare(a, b));
    }
}

impl EitherComparer<Natural, Natural> {
    /// Uses each payload type's own `Ord`.
    #[inline]
    pub fn natural() -> Self {
        Self::new(Natural, Natural)
    }
}

impl<LC> EitherComparer<LC, Natural> {
    /// Custom ordering on the left, natural ordering on the right.
    #[inline]
    pub fn with_left(left: LC) -> Self {
        Self::new(left, Natural)
    }
}

impl<RC> EitherComparer<Natural, RC> {
    /// Natural ordering on the left, custom ordering on the right.
    #[inline]
    pub fn with_right(right: RC) -> Self {
        Self::new(Natural, right)
    }
}

impl<L, R, LC, RC> Comparer<Either<L, R>> for EitherComparer<LC, RC>
where
    LC: Comparer<L>,
    RC: Comparer<R>,
{
    fn compare(&self, a: &Either<L, R>, b: &Either<L, R>) -> Ordering {
        match (a, b) {
            (Either::Left(a), Either::Left(b)) => self.left.compare(a, b),
            (Either::Right(a), Either::Right(b)) => self.right.compare(a, b),
            (Either::Left(_), Either::Right(_)) => Ordering::Less,
            (Either::Right(_), Either::Left(_)) => Ordering::Greater,
        }
    }
}
