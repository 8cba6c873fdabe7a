//! Support code for `#[derive(Validate)]`. Not public API.
//!
//! The derive reads each field through `(&&Probe(&self.field)).field_value()`.
//! Method resolution tries `&Probe` first, which only applies when the field
//! type implements [`AsFieldValue`]; otherwise it falls back to `Probe`,
//! which reports the field as [`FieldValue::Other`] with its type name.
//! That keeps directives on arbitrary field types permissive instead of a
//! compile error.

use crate::foundation::{AsFieldValue, FieldValue};

pub use crate::foundation::{Inspect, Shape};
pub use crate::inspect::{FieldDescriptor, Visibility};

pub struct Probe<'a, T: ?Sized>(pub &'a T);

pub trait ViaAsFieldValue<'a> {
    fn field_value(&self) -> FieldValue<'a>;
}

impl<'a, T: AsFieldValue + ?Sized> ViaAsFieldValue<'a> for &Probe<'a, T> {
    #[inline]
    fn field_value(&self) -> FieldValue<'a> {
        let value: &'a T = self.0;
        value.as_field_value()
    }
}

pub trait ViaFallback<'a> {
    fn field_value(&self) -> FieldValue<'a>;
}

impl<'a, T: ?Sized> ViaFallback<'a> for Probe<'a, T> {
    #[inline]
    fn field_value(&self) -> FieldValue<'a> {
        FieldValue::Other(std::any::type_name::<T>())
    }
}
