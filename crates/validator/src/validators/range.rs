//! Lower and upper bound validators
//!
//! Strings are bounded by byte length, integers by value.

use super::length::byte_len;
use crate::foundation::{FieldValue, Rule, ValidationError};

// ============================================================================
// MIN
// ============================================================================

/// `min:N`: string length or integer value must be at least `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Min {
    min: i64,
}

impl Min {
    /// Creates the rule.
    #[must_use]
    pub fn new(min: i64) -> Self {
        Self { min }
    }

    /// The lower bound.
    #[must_use]
    pub fn bound(&self) -> i64 {
        self.min
    }
}

impl Rule for Min {
    fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
        let min = i128::from(self.min);
        match value {
            FieldValue::Str(s) if byte_len(s) < min => {
                Err(ValidationError::min_length(self.min, s.len()))
            }
            FieldValue::Int(n) if n < min => Err(ValidationError::at_least(self.min, n)),
            _ => Ok(()),
        }
    }
}

/// Shorthand for [`Min::new`].
#[must_use]
pub fn min(min: i64) -> Min {
    Min::new(min)
}

// ============================================================================
// MAX
// ============================================================================

/// `max:N`: string length or integer value must be at most `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Max {
    max: i64,
}

impl Max {
    /// Creates the rule.
    #[must_use]
    pub fn new(max: i64) -> Self {
        Self { max }
    }

    /// The upper bound.
    #[must_use]
    pub fn bound(&self) -> i64 {
        self.max
    }
}

impl Rule for Max {
    fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
        let max = i128::from(self.max);
        match value {
            FieldValue::Str(s) if byte_len(s) > max => {
                Err(ValidationError::max_length(self.max, s.len()))
            }
            FieldValue::Int(n) if n > max => Err(ValidationError::at_most(self.max, n)),
            _ => Ok(()),
        }
    }
}

/// Shorthand for [`Max::new`].
#[must_use]
pub fn max(max: i64) -> Max {
    Max::new(max)
}
