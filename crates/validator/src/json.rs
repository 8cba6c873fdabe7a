//! JSON records
//!
//! Deserialized JSON is the most common source of untrusted input, so
//! `serde_json::Value` plugs into the inspector directly:
//!
//! - objects are records whose fields carry no rules (always valid on their
//!   own), every other JSON kind is rejected with `NotARecord`;
//! - [`JsonRecord`] attaches rule strings to top-level keys, the manual
//!   registration counterpart of `#[derive(Validate)]` for dynamic data.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tagcheck::json::JsonRecord;
//! use tagcheck::validate;
//!
//! let body = json!({ "code": "abc", "age": 10 });
//! let record = JsonRecord::new(&body)
//!     .rule("code", "len:4")
//!     .rule("age", "min:18;max:65");
//!
//! let err = validate(&record).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "code: should have length 4\nage: should be at least 18"
//! );
//! ```

use crate::foundation::{AsFieldValue, FieldValue, Inspect, Shape};
use crate::inspect::{FieldDescriptor, FieldTable, Visibility};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Short kind name of a JSON value.
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl AsFieldValue for Value {
    /// Strings map to text, numbers that fit an integer map to integers,
    /// everything else (floats included) is unsupported.
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Value::String(s) => FieldValue::Str(s),
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .map_or(FieldValue::Other("number"), FieldValue::Int),
            other => FieldValue::Other(kind_of(other)),
        }
    }
}

impl Inspect for Map<String, Value> {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(
            self.iter()
                .map(|(key, value)| {
                    FieldDescriptor::new(
                        key.clone(),
                        Visibility::Public,
                        "",
                        value.as_field_value(),
                    )
                })
                .collect(),
        )
    }
}

impl Inspect for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Object(map) => map.shape(),
            other => Shape::Value(kind_of(other)),
        }
    }
}

// ============================================================================
// JSON RECORD
// ============================================================================

/// A JSON object paired with rule strings for some of its keys.
///
/// Fields are reported in the order rules were added. A key that is absent
/// from the object is treated as an unsupported value, so its rules pass.
#[derive(Debug, Clone)]
pub struct JsonRecord<'a> {
    value: &'a Value,
    rules: Vec<(Cow<'static, str>, Cow<'a, str>)>,
}

impl<'a> JsonRecord<'a> {
    /// Wraps a JSON value. Non-objects are rejected at validation time.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            rules: Vec::new(),
        }
    }

    /// Attaches a rule string to a top-level key.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(
        mut self,
        key: impl Into<Cow<'static, str>>,
        rules: impl Into<Cow<'a, str>>,
    ) -> Self {
        self.rules.push((key.into(), rules.into()));
        self
    }

    /// The wrapped JSON value.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }
}

impl Inspect for JsonRecord<'_> {
    fn shape(&self) -> Shape<'_> {
        let Value::Object(map) = self.value else {
            return Shape::Value(kind_of(self.value));
        };

        self.rules
            .iter()
            .fold(FieldTable::with_capacity(self.rules.len()), |table, (key, rules)| {
                let value = map
                    .get(key.as_ref())
                    .map_or(FieldValue::Other("missing"), AsFieldValue::as_field_value);
                table.descriptor(FieldDescriptor::new(
                    key.clone(),
                    Visibility::Public,
                    rules.as_ref(),
                    value,
                ))
            })
            .into()
    }
}
