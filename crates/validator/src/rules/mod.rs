//! Rule engine
//!
//! Parses a field's rule string into directives, compiles each directive
//! into a [`Check`], and runs it against the field value. Malformed
//! directives and failed checks both become violations; neither stops the
//! directives that follow.

mod parse;

pub use parse::{Directive, SyntaxError, parse, parse_directive};

use crate::foundation::{FieldValue, Rule, ValidationError};
use crate::validators::{ExactLength, Max, Min, OneOf};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// RULE KIND
// ============================================================================

/// The directive kinds understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `len:N`: exact string length.
    Len,
    /// `in:a,b,c`: membership in a literal list.
    In,
    /// `min:N`: lower bound on string length or integer value.
    Min,
    /// `max:N`: upper bound on string length or integer value.
    Max,
}

impl RuleKind {
    /// All kinds, in documentation order.
    pub const ALL: [RuleKind; 4] = [RuleKind::Len, RuleKind::In, RuleKind::Min, RuleKind::Max];

    /// The keyword used in rule strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Len => "len",
            RuleKind::In => "in",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SyntaxError::UnknownKind(s.to_owned()))
    }
}

// ============================================================================
// COMPILED CHECK
// ============================================================================

/// A directive with its argument parsed, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check<'a> {
    /// `len`
    Len(ExactLength),
    /// `in`
    In(OneOf<'a>),
    /// `min`
    Min(Min),
    /// `max`
    Max(Max),
}

impl Rule for Check<'_> {
    fn check(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
        match self {
            Check::Len(rule) => rule.check(value),
            Check::In(rule) => rule.check(value),
            Check::Min(rule) => rule.check(value),
            Check::Max(rule) => rule.check(value),
        }
    }
}

impl<'a> Directive<'a> {
    /// Parses the argument and builds the matching check.
    pub fn compile(&self) -> Result<Check<'a>, SyntaxError> {
        match self.kind {
            RuleKind::Len => self.integer().map(|len| Check::Len(ExactLength::new(len))),
            RuleKind::In => OneOf::parse(self.argument).map(Check::In),
            RuleKind::Min => self.integer().map(|min| Check::Min(Min::new(min))),
            RuleKind::Max => self.integer().map(|max| Check::Max(Max::new(max))),
        }
    }

    fn integer(&self) -> Result<i64, SyntaxError> {
        self.argument
            .parse()
            .map_err(|_| SyntaxError::InvalidNumber {
                kind: self.kind,
                argument: self.argument.to_owned(),
            })
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Compiles a whole rule string, one result per directive.
pub fn compile(metadata: &str) -> Vec<Result<Check<'_>, SyntaxError>> {
    parse(metadata)
        .map(|directive| directive.and_then(|d| d.compile()))
        .collect()
}

/// Evaluates every directive of `metadata` against `value`.
///
/// Returns one violation per malformed or failed directive, in directive
/// order, each tagged with `field`.
///
/// ```rust
/// use tagcheck::FieldValue;
/// use tagcheck::rules::evaluate;
///
/// let errors = evaluate("Age".into(), "min:18;max:65;size:3", FieldValue::Int(10));
/// let messages: Vec<_> = errors.iter().map(|e| e.message.as_ref()).collect();
/// assert_eq!(messages, ["should be at least 18", "invalid validator syntax"]);
/// ```
pub fn evaluate(
    field: Cow<'static, str>,
    metadata: &str,
    value: FieldValue<'_>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for directive in parse(metadata) {
        let outcome = directive
            .and_then(|d| d.compile())
            .map_err(|e| ValidationError::invalid_syntax(e.to_string()))
            .and_then(|check| check.check(value));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            field = %field,
            value_kind = value.kind(),
            passed = outcome.is_ok(),
            "evaluated directive"
        );

        if let Err(error) = outcome {
            errors.push(error.with_field(field.clone()));
        }
    }

    errors
}
