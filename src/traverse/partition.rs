use core::iter::FusedIterator;

use crate::either::Either;
use crate::traverse::capacity::{initial_capacity, should_shrink};
use crate::types::alloc_type::Vec;

/// Splits a sequence of [`Either`] into all lefts and all rights.
///
/// Unlike [`traverse`](crate::traverse()), this never stops early: the whole
/// source is consumed and both sides keep their source order.
///
/// # Examples
///
/// ```
/// use either_rail::{partition_eithers, Either};
///
/// let items = vec![Either::left(1), Either::right("a"), Either::left(2), Either::right("b")];
/// let (lefts, rights) = partition_eithers(items);
/// assert_eq!(lefts, vec![1, 2]);
/// assert_eq!(rights, vec!["a", "b"]);
/// ```
pub fn partition_eithers<I, L, R>(source: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let source = source.into_iter();
    let capacity = initial_capacity(source.size_hint(), None);
    let mut lefts = Vec::with_capacity(capacity);
    let mut rights = Vec::with_capacity(capacity);

    for either in source {
        match either {
            Either::Left(left) => lefts.push(left),
            Either::Right(right) => rights.push(right),
        }
    }

    if should_shrink(lefts.len(), capacity) {
        lefts.shrink_to_fit();
    }
    if should_shrink(rights.len(), capacity) {
        rights.shrink_to_fit();
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(lefts = lefts.len(), rights = rights.len(), "partitioned eithers");

    (lefts, rights)
}

/// Lazily yields the left payloads of a sequence, in order.
///
/// # Examples
///
/// ```
/// use either_rail::{lefts, Either};
///
/// let items = vec![Either::left(1), Either::right("a"), Either::left(2)];
/// assert_eq!(lefts(items).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn lefts<I, L, R>(source: I) -> Lefts<I::IntoIter>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    Lefts { iter: source.into_iter() }
}

/// Lazily yields the right payloads of a sequence, in order.
pub fn rights<I, L, R>(source: I) -> Rights<I::IntoIter>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    Rights { iter: source.into_iter() }
}

/// Iterator returned by [`lefts`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Lefts<I> {
    iter: I,
}

impl<I, L, R> Iterator for Lefts<I>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = L;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.by_ref().find_map(Either::into_left)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, L, R> DoubleEndedIterator for Lefts<I>
where
    I: DoubleEndedIterator<Item = Either<L, R>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(either) = self.iter.next_back() {
            if let Either::Left(left) = either {
                return Some(left);
            }
        }
        None
    }
}

impl<I, L, R> FusedIterator for Lefts<I> where I: FusedIterator<Item = Either<L, R>> {}

/// Iterator returned by [`rights`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Rights<I> {
    iter: I,
}

impl<I, L, R> Iterator for Rights<I>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.by_ref().find_map(Either::into_right)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, L, R> DoubleEndedIterator for Rights<I>
where
    I: DoubleEndedIterator<Item = Either<L, R>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(either) = self.iter.next_back() {
            if let Either::Right(right) = either {
                return Some(right);
            }
        }
        None
    }
}

impl<I, L, R> FusedIterator for Rights<I> where I: FusedIterator<Item = Either<L, R>> {}

/// Adapters for iterators of [`Either`].
///
/// # Examples
///
/// ```
/// use either_rail::prelude::*;
///
/// let items = vec![Either::<i32, &str>::right("a"), Either::left(1), Either::right("b")];
/// let rights: Vec<_> = items.clone().into_iter().rights().collect();
/// assert_eq!(rights, vec!["a", "b"]);
///
/// let (lefts, rights) = items.into_iter().partition_eithers();
/// assert_eq!((lefts, rights), (vec![1], vec!["a", "b"]));
/// ```
pub trait EitherIteratorExt<L, R>: Iterator<Item = Either<L, R>> + Sized {
    /// See [`lefts`].
    fn lefts(self) -> Lefts<Self> {
        Lefts { iter: self }
    }

    /// See [`rights`].
    fn rights(self) -> Rights<Self> {
        Rights { iter: self }
    }

    /// See [`partition_eithers`].
    fn partition_eithers(self) -> (Vec<L>, Vec<R>) {
        partition_eithers(self)
    }
}

impl<I, L, R> EitherIteratorExt<L, R> for I where I: Iterator<Item = Either<L, R>> {}

/// Feeds right payloads to a collector and parks the first left.
struct LeftShunt<'a, I, L> {
    iter: I,
    residual: &'a mut Option<L>,
}

impl<I, L, R> Iterator for LeftShunt<'_, I, L>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        if self.residual.is_some() {
            return None;
        }
        match self.iter.next()? {
            Either::Right(right) => Some(right),
            Either::Left(left) => {
                *self.residual = Some(left);
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.residual.is_some() {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

/// Collects rights into `C`, stopping at the first left.
///
/// Mirrors `FromIterator` for `Result`: the first left is returned and no
/// further element is pulled from the source.
///
/// # Examples
///
/// ```
/// use either_rail::Either;
///
/// let ok: Either<&str, Vec<i32>> = vec![Either::right(1), Either::right(2)].into_iter().collect();
/// assert_eq!(ok, Either::right(vec![1, 2]));
///
/// let failed: Either<&str, Vec<i32>> =
///     vec![Either::right(1), Either::left("bad"), Either::left("worse")].into_iter().collect();
/// assert_eq!(failed, Either::left("bad"));
/// ```
impl<L, R, C> FromIterator<Either<L, R>> for Either<L, C>
where
    C: FromIterator<R>,
{
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        let mut residual = None;
        let collected: C = LeftShunt { iter: iter.into_iter(), residual: &mut residual }.collect();
        match residual {
            Some(left) => Either::Left(left),
            None => Either::Right(collected),
        }
    }
}
