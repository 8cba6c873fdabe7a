//! Prelude module for convenient imports.
//!
//! ```rust
//! use tagcheck::prelude::*;
//!
//! assert!(validate(&1u8).unwrap_err().is_not_a_record());
//! ```

pub use crate::foundation::{
    AsFieldValue, Error, FieldValue, Inspect, Rule, Shape, ValidateExt, ValidationError,
    ValidationErrors,
};
pub use crate::inspect::{FieldDescriptor, FieldTable, Visibility, validate};
pub use crate::validators::{ExactLength, Max, Min, OneOf};

#[cfg(feature = "derive")]
pub use tagcheck_macros::Validate;

#[cfg(feature = "serde")]
pub use crate::json::JsonRecord;
