use core::fmt::{self, Display};

use crate::either::core::Either;

/// Formats as `Left:<payload>` or `Right:<payload>`.
///
/// # Examples
///
/// ```
/// use either_rail::Either;
///
/// assert_eq!(Either::<i32, &str>::left(3).to_string(), "Left:3");
/// assert_eq!(Either::<i32, &str>::right("ok").to_string(), "Right:ok");
/// ```
impl<L: Display, R: Display> Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(left) => write!(f, "Left:{left}"),
            Either::Right(right) => write!(f, "Right:{right}"),
        }
    }
}

/// Display adapter returned by [`Either::display_nullable`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayNullable<'a, L, R> {
    either: &'a Either<Option<L>, Option<R>>,
}

impl<L: Display, R: Display> Display for DisplayNullable<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (side, payload) = match self.either {
            Either::Left(left) => ("Left", left.as_ref().map(|v| v as &dyn Display)),
            Either::Right(right) => ("Right", right.as_ref().map(|v| v as &dyn Display)),
        };
        match payload {
            Some(value) => write!(f, "{side}:{value}"),
            None => write!(f, "{side}:null"),
        }
    }
}

impl<L, R> Either<Option<L>, Option<R>> {
    /// Formats like [`Display`], writing `null` for an absent payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use either_rail::Either;
    ///
    /// let absent = Either::<Option<i32>, Option<&str>>::right(None);
    /// assert_eq!(absent.display_nullable().to_string(), "Right:null");
    ///
    /// let present = Either::<Option<i32>, Option<&str>>::left(Some(5));
    /// assert_eq!(present.display_nullable().to_string(), "Left:5");
    /// ```
    pub fn display_nullable(&self) -> DisplayNullable<'_, L, R> {
        DisplayNullable { either: self }
    }
}
