use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Equality strategy for values of type `T`.
///
/// Implementations must keep [`hash`](Self::hash) consistent with
/// [`equals`](Self::equals): values that compare equal feed the same data to
/// the hasher.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if `a` and `b` are equal under this strategy.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Feeds `value` into `state` consistently with [`equals`](Self::equals).
    fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

/// Total ordering strategy for values of type `T`.
pub trait Comparer<T: ?Sized> {
    /// Compares `a` with `b` under this strategy.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &C {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    #[inline]
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (**self).hash(value, state)
    }
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// The payload type's own `Eq`, `Hash` and `Ord`.
///
/// # Examples
///
/// ```
/// use either_rail::compare::{Comparer, EqualityComparer, Natural};
/// use core::cmp::Ordering;
///
/// assert!(Natural.equals("a", "a"));
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for Natural {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        Hash::hash(value, state);
    }
}

impl<T: Ord + ?Sized> Comparer<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Compares, orders and hashes values through a projected key.
///
/// Useful for payloads whose own equality is not what the caller wants
/// (case-insensitive text), or which only have partial equality (floats keyed
/// by their bit pattern).
///
/// # Examples
///
/// ```
/// use either_rail::compare::{ByKey, EqualityComparer};
///
/// let case_insensitive = ByKey(|s: &String| s.to_lowercase());
/// assert!(case_insensitive.equals(&"Hello".to_string(), &"hELLO".to_string()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> EqualityComparer<T> for ByKey<F>
where
    T: ?Sized,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.0)(a) == (self.0)(b)
    }

    #[inline]
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        Hash::hash(&(self.0)(value), state);
    }
}

impl<T, K, F> Comparer<T> for ByKey<F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Ordering supplied directly as a closure.
///
/// # Examples
///
/// ```
/// use either_rail::compare::{Comparer, FnComparer};
/// use core::cmp::Ordering;
///
/// let floats = FnComparer(|a: &f64, b: &f64| a.total_cmp(b));
/// assert_eq!(floats.compare(&1.5, &f64::NAN), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnComparer<F>(pub F);

impl<T, F> Comparer<T> for FnComparer<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
