//! Extension traits for moving standard types into [`Either`](crate::Either).
//!
//! - [`IntoEither`]: `Result<T, E>` into `Either<E, T>`, `Option<T>` into
//!   `Either<(), T>`
//!
//! # Examples
//!
//! ```
//! use either_rail::traits::IntoEither;
//! use either_rail::Either;
//!
//! let parsed = "12".parse::<i32>().into_either();
//! assert_eq!(parsed.map_left(|e| e.to_string()), Either::right(12));
//! ```

pub mod into_either;

pub use into_either::IntoEither;
