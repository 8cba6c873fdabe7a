//! Error types for validation failures
//!
//! A single [`ValidationError`] describes one violated directive (or one
//! rejected field). [`ValidationErrors`] is the ordered aggregate returned
//! by a validation call, and [`Error`] is the top-level result type that
//! also covers inputs which are not records at all.
//!
//! All string fields use `Cow<'static, str>` so that the fixed messages and
//! codes never allocate.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Machine-readable error codes carried by [`ValidationError::code`].
pub mod codes {
    /// Metadata declared on a field that is not `pub`.
    pub const UNEXPORTED_FIELD: &str = "unexported_field";
    /// A directive that could not be parsed.
    pub const INVALID_SYNTAX: &str = "invalid_syntax";
    /// `len` directive failed.
    pub const LEN: &str = "len";
    /// `in` directive failed.
    pub const IN: &str = "in";
    /// `min` directive failed.
    pub const MIN: &str = "min";
    /// `max` directive failed.
    pub const MAX: &str = "max";
}

/// Message reported for a field that declares rules but is not `pub`.
pub const UNEXPORTED_FIELD_MESSAGE: &str = "validation for unexported field is not allowed";

/// Message reported for a malformed directive.
pub const INVALID_SYNTAX_MESSAGE: &str = "invalid validator syntax";

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One violation: which field, what went wrong, and the numbers behind it.
///
/// # Examples
///
/// ```rust
/// use tagcheck::ValidationError;
///
/// let error = ValidationError::length(4, 3).with_field("Code");
/// assert_eq!(error.message, "should have length 4");
/// assert_eq!(error.param("actual"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling, see [`codes`].
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Name of the field this violation belongs to.
    ///
    /// Rules produce errors without a field; the inspector fills it in.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key/value parameters, e.g. `[("min", "18"), ("actual", "10")]`.
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the field name, if one was attached.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns true if this error comes from a malformed directive.
    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        self.code == codes::INVALID_SYNTAX
    }

    /// Converts the error to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "field": self.field,
            "code": self.code,
            "message": self.message,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeStruct};

        struct ParamMap<'a>(&'a Params);

        impl serde::Serialize for ParamMap<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (k, v) in self.0 {
                    map.serialize_entry(k.as_ref(), v.as_ref())?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("ValidationError", 4)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("params", &ParamMap(&self.params))?;
        state.end()
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A field that declares rules but is not `pub`.
    pub fn unexported_field() -> Self {
        Self::new(codes::UNEXPORTED_FIELD, UNEXPORTED_FIELD_MESSAGE)
    }

    /// A directive that could not be parsed. `reason` is kept as a param.
    pub fn invalid_syntax(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::INVALID_SYNTAX, INVALID_SYNTAX_MESSAGE).with_param("reason", reason)
    }

    /// A `len` failure.
    pub fn length(expected: i64, actual: usize) -> Self {
        Self::new(codes::LEN, format!("should have length {expected}"))
            .with_param("len", expected.to_string())
            .with_param("actual", actual.to_string())
    }

    /// An `in` failure. `allowed` is the directive argument as written.
    pub fn one_of(allowed: &str, actual: impl fmt::Display) -> Self {
        Self::new(codes::IN, format!("should be one of {allowed}"))
            .with_param("in", allowed.to_owned())
            .with_param("actual", actual.to_string())
    }

    /// A `min` failure on a string.
    pub fn min_length(min: i64, actual: usize) -> Self {
        Self::new(codes::MIN, format!("should have length at least {min}"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A `min` failure on an integer.
    pub fn at_least(min: i64, actual: i128) -> Self {
        Self::new(codes::MIN, format!("should be at least {min}"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A `max` failure on a string.
    pub fn max_length(max: i64, actual: usize) -> Self {
        Self::new(codes::MAX, format!("should have length at most {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A `max` failure on an integer.
    pub fn at_most(max: i64, actual: i128) -> Self {
        Self::new(codes::MAX, format!("should be at most {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered aggregate of every violation found in one validation call.
///
/// Rendering follows two forms: a single violation renders as its bare
/// message, several render as `"<field>: <message>"` lines joined by `\n`.
///
/// ```rust
/// use tagcheck::{ValidationError, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.add(ValidationError::length(4, 3).with_field("Code"));
/// assert_eq!(errors.to_string(), "should have length 4");
///
/// errors.add(ValidationError::at_least(18, 10).with_field("Age"));
/// assert_eq!(
///     errors.to_string(),
///     "Code: should have length 4\nAge: should be at least 18"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection, keeping their order.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in reporting order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in reporting order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Iterates over the errors reported for one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field() == Some(field))
    }

    /// `Ok(ok_value)` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// Converts the collection to a JSON array.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.errors
                .iter()
                .map(ValidationError::to_json_value)
                .collect(),
        )
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.errors.as_slice() {
            return f.write_str(&only.message);
        }

        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(
                f,
                "{}: {}",
                error.field.as_deref().unwrap_or_default(),
                error.message
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.errors)
    }
}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// The error returned by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a record. Nothing was inspected.
    #[error("wrong argument given, should be a struct (got {kind})")]
    NotARecord {
        /// Kind name of the rejected input, e.g. `"i32"` or `"array"`.
        kind: &'static str,
    },

    /// One or more fields violated their rules.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// Returns the violations, if this is not a `NotARecord` failure.
    #[must_use]
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotARecord { .. } => None,
        }
    }

    /// Consumes the error and returns the violations, if any.
    #[must_use]
    pub fn into_violations(self) -> Option<ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotARecord { .. } => None,
        }
    }

    /// Returns true if the input was rejected for not being a record.
    #[must_use]
    pub fn is_not_a_record(&self) -> bool {
        matches!(self, Self::NotARecord { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
