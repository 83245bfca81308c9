use crate::either::Either;

/// Abstraction over standard containers that can be viewed as an [`Either`].
///
/// The right side always receives the success-like payload.
///
/// # Associated Types
///
/// * `Left` - The payload that becomes the left side
/// * `Right` - The payload that becomes the right side
///
/// # Examples
///
/// ```
/// use either_rail::traits::IntoEither;
/// use either_rail::Either;
///
/// let result: Result<i32, &str> = Err("original error");
/// assert_eq!(result.into_either(), Either::left("original error"));
///
/// // `None` carries no payload, so its left is the unit placeholder.
/// let missing: Option<i32> = None;
/// assert_eq!(missing.into_either(), Either::left(()));
/// ```
pub trait IntoEither {
    type Left;

    type Right;

    /// Converts the container into an `Either`.
    fn into_either(self) -> Either<Self::Left, Self::Right>;
}

impl<T, E> IntoEither for Result<T, E> {
    type Left = E;
    type Right = T;

    #[inline]
    fn into_either(self) -> Either<E, T> {
        Either::from(self)
    }
}

impl<T> IntoEither for Option<T> {
    type Left = ();
    type Right = T;

    #[inline]
    fn into_either(self) -> Either<(), T> {
        crate::convert::option_to_either(self, ())
    }
}
