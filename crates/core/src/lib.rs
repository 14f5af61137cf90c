//! # Outcome Core
//!
//! An immutable value that holds either a success payload or a failure
//! payload, with checked extraction that never panics.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` - misuse returns [`InvalidUnwrap`]
//! - No `unsafe` - safe Rust only
//! - No mutation - the variant is fixed when the [`Outcome`] is built
//!
//! ## Error Handling
//!
//! Two kinds of error never mix:
//! - [`InvalidUnwrap`]: the caller extracted from the wrong variant
//! - `E`: the caller's own error, handed back verbatim by
//!   [`Outcome::unwrap_error`] and [`Outcome::throw_error`]
//!
//! ```
//! use outcome_core::{InvalidUnwrap, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32, std::num::ParseIntError> {
//!     input.parse::<i32>().into()
//! }
//!
//! fn run() -> Result<i32, std::num::ParseIntError> {
//!     let parsed = parse("2");
//!     let doubled = parsed.clone().map(|x| x * 2);
//!     parsed.throw_error()?;
//!     Ok(doubled.value().copied().unwrap_or_default())
//! }
//!
//! assert_eq!(run(), Ok(4));
//! assert_eq!(
//!     parse("x").unwrap(),
//!     Err(InvalidUnwrap::unwrap_on_failure("invalid digit found in string"))
//! );
//! ```

mod error;
mod result;

pub use error::InvalidUnwrap;
pub use result::{Outcome, UnwrapResult};
