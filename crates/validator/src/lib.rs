//! # tagcheck
//!
//! Declarative field validation: rules live next to the fields they guard,
//! as short strings, and a single call reports every violation at once.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "derive")] {
//! use tagcheck::prelude::*;
//!
//! #[derive(Validate)]
//! pub struct Signup {
//!     #[validate("len:4")]
//!     pub code: String,
//!     #[validate("in:active,inactive")]
//!     pub status: String,
//!     #[validate("min:18;max:65")]
//!     pub age: i32,
//! }
//!
//! let signup = Signup {
//!     code: "abc".into(),
//!     status: "paused".into(),
//!     age: 30,
//! };
//!
//! let err = signup.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "code: should have length 4\nstatus: should be one of active,inactive"
//! );
//! # }
//! ```
//!
//! ## Rule strings
//!
//! A rule string is a `;`-separated list of `kind:argument` directives:
//!
//! - `len:N`: string is exactly `N` bytes long
//! - `in:a,b,c`: value equals one of the literals
//! - `min:N` / `max:N`: string length or integer value bound
//!
//! A malformed directive is reported as `invalid validator syntax` and the
//! remaining directives still run. A directive on a value kind it does not
//! understand (say `len` on an integer, or anything on a `bool`) passes.
//!
//! ## Without the derive
//!
//! Implement [`Inspect`] with a [`FieldTable`], or wrap JSON in
//! [`json::JsonRecord`].

// Lets the derive's `::tagcheck::` paths resolve inside this crate's own tests.
extern crate self as tagcheck;

pub mod foundation;
pub mod inspect;
#[cfg(feature = "serde")]
pub mod json;
pub mod prelude;
pub mod rules;
pub mod validators;

#[doc(hidden)]
pub mod __private;

pub use foundation::{
    AsFieldValue, Error, FieldValue, Inspect, Rule, Shape, ValidateExt, ValidationError,
    ValidationErrors, ValidationResult, codes,
};
pub use inspect::{FieldDescriptor, FieldTable, Visibility, validate, validate_fields};

#[cfg(feature = "derive")]
pub use tagcheck_macros::Validate;
