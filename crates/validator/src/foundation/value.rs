//! Runtime field values
//!
//! Directives only understand two kinds of value: text and integers.
//! [`AsFieldValue`] maps a Rust field onto a [`FieldValue`]; anything
//! that is neither text nor an integer becomes [`FieldValue::Other`],
//! which every directive accepts without complaint.

use std::borrow::Cow;
use std::fmt;

/// The runtime value of one field, as seen by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Text. Length-based directives count bytes.
    Str(&'a str),
    /// Any primitive integer that fits in `i128`.
    Int(i128),
    /// A value of a kind no directive supports. Holds its type name.
    Other(&'static str),
}

impl FieldValue<'_> {
    /// Short name of the value kind, used in logs and `NotARecord` errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "string",
            FieldValue::Int(_) => "integer",
            FieldValue::Other(name) => *name,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Other(name) => write!(f, "<{name}>"),
        }
    }
}

// ============================================================================
// CONVERSION TRAIT
// ============================================================================

/// Types that can be read as a [`FieldValue`].
///
/// Implemented for the string and integer types directives act on, and for
/// the common scalar types they ignore. Implement it for your own newtypes
/// to make them visible to the rule engine:
///
/// ```rust
/// use tagcheck::{AsFieldValue, FieldValue};
///
/// struct Sku(String);
///
/// impl AsFieldValue for Sku {
///     fn as_field_value(&self) -> FieldValue<'_> {
///         FieldValue::Str(&self.0)
///     }
/// }
/// ```
pub trait AsFieldValue {
    /// Borrows `self` as a field value.
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for String {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl AsFieldValue for Box<str> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for Cow<'_, str> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_ref())
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

macro_rules! impl_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(*self as i128)
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AsFieldValue for i128 {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self)
    }
}

macro_rules! impl_other {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Other($name)
                }
            }
        )*
    };
}

impl_other!(
    bool => "bool",
    char => "char",
    f32 => "f32",
    f64 => "f64",
    u128 => "u128",
);

impl<T> AsFieldValue for Option<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Other("option")
    }
}

impl<T> AsFieldValue for Vec<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Other("vec")
    }
}
