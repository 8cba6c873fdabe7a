//! Set membership validator

use crate::foundation::{FieldValue, Rule, ValidationError};
use crate::rules::SyntaxError;
use smallvec::SmallVec;

/// `in:a,b,c`: the value must equal one of the listed literals.
///
/// Strings compare as text, integers through their decimal form, so
/// `in:1,2` accepts `2` but `in:+2` does not. Other kinds pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf<'a> {
    raw: &'a str,
    values: SmallVec<[&'a str; 4]>,
}

impl<'a> OneOf<'a> {
    /// Parses a comma-separated list. Any empty entry is a syntax error.
    ///
    /// ```rust
    /// use tagcheck::validators::OneOf;
    ///
    /// assert!(OneOf::parse("active,inactive").is_ok());
    /// assert!(OneOf::parse(",a,b").is_err());
    /// assert!(OneOf::parse("a,,b").is_err());
    /// assert!(OneOf::parse("").is_err());
    /// ```
    pub fn parse(raw: &'a str) -> Result<Self, SyntaxError> {
        let values: SmallVec<[&'a str; 4]> = raw.split(',').collect();
        if values.iter().any(|v| v.is_empty()) {
            return Err(SyntaxError::EmptyLiteral(raw.to_owned()));
        }
        Ok(Self { raw, values })
    }

    /// The list as written in the directive.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// The individual literals.
    #[must_use]
    pub fn values(&self) -> &[&'a str] {
        &self.values
    }

    fn contains(&self, candidate: &str) -> bool {
        self.values.iter().any(|v| *v == candidate)
    }
}

impl Rule for OneOf<'_> {
    fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
        let found = match value {
            FieldValue::Str(s) => self.contains(s),
            FieldValue::Int(n) => self.contains(&n.to_string()),
            FieldValue::Other(_) => true,
        };

        if found {
            Ok(())
        } else {
            Err(ValidationError::one_of(self.raw, value))
        }
    }
}

/// Shorthand for [`OneOf::parse`].
pub fn one_of(raw: &str) -> Result<OneOf<'_>, SyntaxError> {
    OneOf::parse(raw)
}
