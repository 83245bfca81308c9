use core::iter::Map;

use crate::either::Either;
use crate::traverse::seq::short_circuit;
use crate::types::alloc_type::BTreeMap;

#[cfg(feature = "std")]
use core::hash::{BuildHasher, Hash};
#[cfg(feature = "std")]
use crate::types::alloc_type::HashMap;

/// A keyed collection that can be traversed value by value.
///
/// Splitting a source yields its entries together with an empty output map of
/// the same kind, already configured like the source: a `HashMap` output
/// reuses a clone of the source's hasher, so keys are addressed exactly as in
/// the source. Key equality itself is the key type's `Eq`/`Hash`/`Ord`, which
/// carries over unchanged.
///
/// Entry order is whatever the source yields; the output is key-addressed only.
pub trait KeyedSource: Sized {
    /// Key type, shared by the source and the output.
    type Key;
    /// Value handed to the projection.
    type Value;
    /// Iterator over the source's entries.
    type Entries: Iterator<Item = (Self::Key, Self::Value)>;
    /// Output map holding projected values of type `R`.
    type Output<R>: Extend<(Self::Key, R)>;

    /// Splits the source into its entries and an empty output map.
    fn split_entries<R>(self) -> (Self::Entries, Self::Output<R>);

    /// See [`traverse_values`].
    fn traverse_values<L, R, F>(self, f: F) -> Either<L, Self::Output<R>>
    where
        F: FnMut(Self::Value) -> Either<L, R>,
    {
        traverse_values(self, f)
    }
}

/// Projects every value of a keyed collection, stopping at the first left.
///
/// On success the output maps each source key to its projected right. On
/// failure the first left is returned and the remaining entries are never
/// projected.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use either_rail::{traverse_values, Either};
///
/// fn parse(s: &str) -> Either<String, i32> {
///     s.parse().map_or_else(|_| Either::left(format!("Fail {s}")), Either::right)
/// }
///
/// let source = BTreeMap::from([("a", "1"), ("b", "2")]);
/// let parsed = traverse_values(&source, |v| parse(v));
/// assert_eq!(parsed, Either::right(BTreeMap::from([("a", 1), ("b", 2)])));
/// ```
pub fn traverse_values<M, L, R, F>(source: M, mut f: F) -> Either<L, M::Output<R>>
where
    M: KeyedSource,
    F: FnMut(M::Value) -> Either<L, R>,
{
    let (entries, output) = source.split_entries();
    short_circuit(entries, |(key, value)| f(value).map_right(|right| (key, right)), output)
}

impl<K: Ord, V> KeyedSource for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries = <BTreeMap<K, V> as IntoIterator>::IntoIter;
    type Output<R> = BTreeMap<K, R>;

    fn split_entries<R>(self) -> (Self::Entries, Self::Output<R>) {
        (self.into_iter(), BTreeMap::new())
    }
}

impl<'a, K: Ord + Clone, V> KeyedSource for &'a BTreeMap<K, V> {
    type Key = K;
    type Value = &'a V;
    type Entries = ClonedKeys<'a, <&'a BTreeMap<K, V> as IntoIterator>::IntoIter, K, V>;
    type Output<R> = BTreeMap<K, R>;

    fn split_entries<R>(self) -> (Self::Entries, Self::Output<R>) {
        let clone: fn((&'a K, &'a V)) -> (K, &'a V) = clone_key;
        (self.iter().map(clone), BTreeMap::new())
    }
}

#[cfg(feature = "std")]
impl<K, V, S> KeyedSource for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = V;
    type Entries = std::collections::hash_map::IntoIter<K, V>;
    type Output<R> = HashMap<K, R, S>;

    fn split_entries<R>(self) -> (Self::Entries, Self::Output<R>) {
        let output = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        (self.into_iter(), output)
    }
}

#[cfg(feature = "std")]
impl<'a, K, V, S> KeyedSource for &'a HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = &'a V;
    type Entries = ClonedKeys<'a, std::collections::hash_map::Iter<'a, K, V>, K, V>;
    type Output<R> = HashMap<K, R, S>;

    fn split_entries<R>(self) -> (Self::Entries, Self::Output<R>) {
        let output = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        let clone: fn((&'a K, &'a V)) -> (K, &'a V) = clone_key;
        (self.iter().map(clone), output)
    }
}

/// Entries of a borrowed map with owned keys, as produced by [`clone_key`].
type ClonedKeys<'a, I, K, V> = Map<I, fn((&'a K, &'a V)) -> (K, &'a V)>;

fn clone_key<'a, K: Clone, V>((key, value): (&'a K, &'a V)) -> (K, &'a V) {
    (key.clone(), value)
}
