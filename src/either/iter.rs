use core::iter::FusedIterator;

use crate::either::core::Either;

/// Borrowing zero-or-one element view over one side of an [`Either`].
///
/// Created by [`Either::left_iter`] and [`Either::right_iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning zero-or-one element view over one side of an [`Either`].
///
/// Created by [`Either::into_left_iter`], [`Either::into_right_iter`] and the
/// [`IntoIterator`] impl, which yields the right payload.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.right_iter()
    }
}

impl<L, R> Either<L, R> {
    /// Lazily yields the left payload once, or nothing for a right.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let items = [Either::<i32, &str>::left(1), Either::right("a"), Either::left(2)];
    /// let lefts: Vec<_> = items.iter().flat_map(Either::left_iter).collect();
    /// assert_eq!(lefts, vec![&1, &2]);
    /// ```
    pub fn left_iter(&self) -> Iter<'_, L> {
        Iter { inner: self.as_left() }
    }

    /// Lazily yields the right payload once, or nothing for a left.
    pub fn right_iter(&self) -> Iter<'_, R> {
        Iter { inner: self.as_right() }
    }

    /// Consuming counterpart of [`left_iter`](Self::left_iter).
    pub fn into_left_iter(self) -> IntoIter<L> {
        IntoIter { inner: self.into_left() }
    }

    /// Consuming counterpart of [`right_iter`](Self::right_iter).
    pub fn into_right_iter(self) -> IntoIter<R> {
        IntoIter { inner: self.into_right() }
    }
}
