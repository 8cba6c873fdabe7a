//! Core traits for the validation system
//!
//! [`Inspect`] is the seam between a value and the record inspector: it
//! reports the value's [`Shape`], which is either a record with a table of
//! field descriptors or a plain value that cannot be validated.

use crate::foundation::{FieldValue, ValidationError, ValidationResult};
use crate::inspect::{FieldDescriptor, FieldTable};

// ============================================================================
// RULE
// ============================================================================

/// One compiled directive, checked against a single field value.
///
/// Implementations must accept value kinds they do not understand: a
/// length rule handed an integer, or any rule handed
/// [`FieldValue::Other`], returns `Ok(())`.
///
/// ```rust
/// use tagcheck::{FieldValue, Rule, ValidationError};
///
/// struct NonBlank;
///
/// impl Rule for NonBlank {
///     fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
///         match value {
///             FieldValue::Str(s) if s.trim().is_empty() => {
///                 Err(ValidationError::new("non_blank", "should not be blank"))
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NonBlank.check(FieldValue::Str("  ")).is_err());
/// assert!(NonBlank.check(FieldValue::Int(0)).is_ok());
/// ```
pub trait Rule {
    /// Checks `value`, returning a field-less error on failure.
    fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError>;
}

impl<R: Rule + ?Sized> Rule for &R {
    #[inline]
    fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
        (**self).check(value)
    }
}

// ============================================================================
// SHAPE
// ============================================================================

/// What the inspector sees when it looks at a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// A composite value with named fields, in declaration order.
    Record(Vec<FieldDescriptor<'a>>),
    /// Anything else. Holds a short kind name for error reporting.
    Value(&'static str),
}

impl<'a> Shape<'a> {
    /// Returns the field table if this is a record.
    #[must_use]
    pub fn fields(&self) -> Option<&[FieldDescriptor<'a>]> {
        match self {
            Shape::Record(fields) => Some(fields),
            Shape::Value(_) => None,
        }
    }

    /// Returns true for [`Shape::Record`].
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self, Shape::Record(_))
    }
}

impl<'a> From<FieldTable<'a>> for Shape<'a> {
    fn from(table: FieldTable<'a>) -> Self {
        Shape::Record(table.into_fields())
    }
}

// ============================================================================
// INSPECT
// ============================================================================

/// Types whose fields can be enumerated for validation.
///
/// `#[derive(Validate)]` implements this for structs with named fields.
/// Implement it by hand with a [`FieldTable`] when a derive does not fit:
///
/// ```rust
/// use tagcheck::{FieldTable, Inspect, Shape, validate};
///
/// struct Login {
///     user: String,
///     pin: u32,
/// }
///
/// impl Inspect for Login {
///     fn shape(&self) -> Shape<'_> {
///         FieldTable::new()
///             .field("User", &self.user, "min:3;max:16")
///             .field("Pin", &self.pin, "min:1000;max:9999")
///             .into()
///     }
/// }
///
/// let err = validate(&Login { user: "al".into(), pin: 12 }).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "User: should have length at least 3\nPin: should be at least 1000"
/// );
/// ```
///
/// Primitive, string and collection types implement it as
/// [`Shape::Value`], so passing them to [`validate`](crate::validate)
/// fails with [`Error::NotARecord`](crate::Error::NotARecord).
pub trait Inspect {
    /// Describes the value for the inspector.
    fn shape(&self) -> Shape<'_>;
}

impl<T: Inspect + ?Sized> Inspect for &T {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for std::rc::Rc<T> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for std::sync::Arc<T> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

macro_rules! impl_value_shape {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn shape(&self) -> Shape<'_> {
                    Shape::Value($name)
                }
            }
        )*
    };
}

impl_value_shape!(
    str => "str",
    String => "string",
    bool => "bool",
    char => "char",
    f32 => "f32",
    f64 => "f64",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    () => "unit",
);

impl<T> Inspect for Option<T> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Value("option")
    }
}

impl<T> Inspect for Vec<T> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Value("vec")
    }
}

impl<T> Inspect for [T] {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Value("slice")
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Value("array")
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Method-call form of [`validate`](crate::validate).
///
/// Automatically implemented for every [`Inspect`] type.
///
/// ```rust
/// use tagcheck::ValidateExt;
///
/// assert!(42i32.validate().unwrap_err().is_not_a_record());
/// ```
pub trait ValidateExt: Inspect {
    /// Validates every field of `self` and reports all violations.
    fn validate(&self) -> ValidationResult {
        crate::inspect::validate(self)
    }
}

impl<T: Inspect + ?Sized> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
