//! Field descriptors and the manual registration table.

use crate::foundation::{AsFieldValue, FieldValue};
use std::borrow::Cow;

// ============================================================================
// VISIBILITY
// ============================================================================

/// Whether a field is visible outside the module that declares its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// `pub` field. Its rules are evaluated.
    #[default]
    Public,
    /// Private or restricted field. Declaring rules on it is a violation.
    Private,
}

impl Visibility {
    /// Returns true for [`Visibility::Public`].
    #[inline]
    #[must_use]
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// Everything the inspector needs to know about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    /// Name reported in violations.
    pub name: Cow<'static, str>,
    /// Accessibility of the field.
    pub visibility: Visibility,
    /// Raw rule string, e.g. `"min:18;max:65"`. Empty means "no rules".
    pub metadata: Cow<'a, str>,
    /// The field's current value.
    pub value: FieldValue<'a>,
}

impl<'a> FieldDescriptor<'a> {
    /// Creates a descriptor.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        visibility: Visibility,
        metadata: impl Into<Cow<'a, str>>,
        value: FieldValue<'a>,
    ) -> Self {
        Self {
            name: name.into(),
            visibility,
            metadata: metadata.into(),
            value,
        }
    }

    /// Returns true if the field declares any rules.
    #[inline]
    #[must_use]
    pub fn has_rules(&self) -> bool {
        !self.metadata.is_empty()
    }
}

// ============================================================================
// FIELD TABLE
// ============================================================================

/// A builder for field descriptor tables, for records without a derive.
///
/// Fields are reported in the order they are added.
///
/// ```rust
/// use tagcheck::{FieldTable, Visibility};
///
/// let code = String::from("abc");
/// let age = 30;
/// let table = FieldTable::new()
///     .field("Code", &code, "len:4")
///     .field("Age", &age, "")
///     .private_field("secret", &age, "min:1");
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.fields()[2].visibility, Visibility::Private);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable<'a> {
    fields: Vec<FieldDescriptor<'a>>,
}

impl<'a> FieldTable<'a> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates an empty table with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Adds a public field.
    pub fn field<T>(
        self,
        name: impl Into<Cow<'static, str>>,
        value: &'a T,
        rules: impl Into<Cow<'a, str>>,
    ) -> Self
    where
        T: AsFieldValue + ?Sized,
    {
        self.push(name, Visibility::Public, value, rules)
    }

    /// Adds a private field. Any rules on it are reported as a violation.
    pub fn private_field<T>(
        self,
        name: impl Into<Cow<'static, str>>,
        value: &'a T,
        rules: impl Into<Cow<'a, str>>,
    ) -> Self
    where
        T: AsFieldValue + ?Sized,
    {
        self.push(name, Visibility::Private, value, rules)
    }

    /// Adds a prepared descriptor.
    pub fn descriptor(mut self, descriptor: FieldDescriptor<'a>) -> Self {
        self.fields.push(descriptor);
        self
    }

    fn push<T>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        visibility: Visibility,
        value: &'a T,
        rules: impl Into<Cow<'a, str>>,
    ) -> Self
    where
        T: AsFieldValue + ?Sized,
    {
        self.fields.push(FieldDescriptor::new(
            name,
            visibility,
            rules,
            value.as_field_value(),
        ));
        self
    }

    /// Returns the descriptors in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<'a>] {
        &self.fields
    }

    /// Number of fields in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the table has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the table and returns the descriptors.
    #[must_use]
    pub fn into_fields(self) -> Vec<FieldDescriptor<'a>> {
        self.fields
    }
}
