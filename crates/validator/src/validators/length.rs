//! String length validators
//!
//! Length is measured in bytes, matching the directive contract.

use crate::foundation::{FieldValue, Rule, ValidationError};

/// Byte length of `input` widened for comparison with directive arguments.
#[inline]
pub(crate) fn byte_len(input: &str) -> i128 {
    input.len() as i128
}

/// `len:N`: a string must be exactly `N` bytes long.
///
/// Integers and unsupported kinds pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExactLength {
    len: i64,
}

impl ExactLength {
    /// Creates the rule.
    #[must_use]
    pub fn new(len: i64) -> Self {
        Self { len }
    }

    /// The required length.
    #[must_use]
    pub fn expected(&self) -> i64 {
        self.len
    }
}

impl Rule for ExactLength {
    fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
        match value {
            FieldValue::Str(s) if byte_len(s) != i128::from(self.len) => {
                Err(ValidationError::length(self.len, s.len()))
            }
            _ => Ok(()),
        }
    }
}

/// Shorthand for [`ExactLength::new`].
#[must_use]
pub fn exact_length(len: i64) -> ExactLength {
    ExactLength::new(len)
}
