//! Record inspector
//!
//! Walks a record's field table in declaration order, skips fields without
//! rules, rejects rules on private fields, and hands everything else to the
//! rule engine. All violations end up in one [`ValidationErrors`].

mod field;

pub use field::{FieldDescriptor, FieldTable, Visibility};

use crate::foundation::{
    Error, Inspect, Shape, ValidationError, ValidationErrors, ValidationResult,
};
use crate::rules;

/// Validates every field of `value` and reports all violations at once.
///
/// Returns [`Error::NotARecord`] without looking further when `value` is not
/// a record, and [`Error::Invalid`] with every collected violation when at
/// least one rule failed.
///
/// # Examples
///
/// ```rust
/// use tagcheck::{FieldTable, Inspect, Shape, validate};
///
/// struct Account {
///     status: String,
/// }
///
/// impl Inspect for Account {
///     fn shape(&self) -> Shape<'_> {
///         FieldTable::new()
///             .field("Status", &self.status, "in:active,inactive")
///             .into()
///     }
/// }
///
/// assert!(validate(&Account { status: "active".into() }).is_ok());
///
/// let err = validate(&Account { status: "paused".into() }).unwrap_err();
/// assert_eq!(err.to_string(), "should be one of active,inactive");
///
/// assert!(validate("not a record").unwrap_err().is_not_a_record());
/// ```
pub fn validate<T>(value: &T) -> ValidationResult
where
    T: Inspect + ?Sized,
{
    match value.shape() {
        Shape::Record(fields) => validate_fields(&fields).map_err(Error::Invalid),
        Shape::Value(kind) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind, "rejected non-record input");
            Err(Error::NotARecord { kind })
        }
    }
}

/// Runs the per-field loop over an already obtained descriptor table.
pub fn validate_fields(fields: &[FieldDescriptor<'_>]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for field in fields {
        if !field.has_rules() {
            continue;
        }

        if !field.visibility.is_public() {
            errors.add(ValidationError::unexported_field().with_field(field.name.clone()));
            continue;
        }

        errors.extend(rules::evaluate(field.name.clone(), &field.metadata, field.value));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        fields = fields.len(),
        violations = errors.len(),
        "validated record"
    );

    errors.into_result(())
}
