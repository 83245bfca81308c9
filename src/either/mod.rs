//! The [`Either`] type and its combinators.
//!
//! # Key Components
//!
//! - [`Either`] - A value that is exclusively a left `L` or a right `R`
//! - [`Iter`] / [`IntoIter`] - Lazy zero-or-one element views over one side
//! - [`DisplayNullable`] - `null`-aware formatting for optional payloads
//!
//! # Examples
//!
//! ```
//! use either_rail::Either;
//!
//! let e: Either<&str, i32> = Either::right(20);
//! let e = e.map_right(|x| x + 1).bind_right(|x| {
//!     if x > 0 { Either::right(x * 2) } else { Either::left("negative") }
//! });
//! assert_eq!(e, Either::right(42));
//! assert_eq!(e.to_string(), "Right:42");
//! ```
pub mod core;
pub mod fmt;
pub mod iter;

pub use self::core::*;
pub use self::fmt::DisplayNullable;
pub use self::iter::{IntoIter, Iter};
