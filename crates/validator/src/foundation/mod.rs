//! Core validation types and traits
//!
//! - **Traits**: [`Inspect`], [`ValidateExt`], [`Rule`], [`AsFieldValue`]
//! - **Values**: [`FieldValue`], [`Shape`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`Error`]

pub mod error;
pub mod traits;
pub mod value;

pub use error::{
    Error, INVALID_SYNTAX_MESSAGE, UNEXPORTED_FIELD_MESSAGE, ValidationError, ValidationErrors,
    codes,
};
pub use traits::{Inspect, Rule, Shape, ValidateExt};
pub use value::{AsFieldValue, FieldValue};

/// A result carrying the aggregate of a validation call.
pub type ValidationResult<T = ()> = Result<T, Error>;
