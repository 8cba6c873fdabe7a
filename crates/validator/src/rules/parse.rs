//! Rule string parser
//!
//! A rule string is a `;`-separated list of `kind:argument` directives.
//! Every directive is parsed on its own so that one malformed directive
//! never hides the others.

use super::RuleKind;

/// One parsed `kind:argument` unit. The argument is kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Which check to run.
    pub kind: RuleKind,
    /// Everything after the first `:`.
    pub argument: &'a str,
}

/// Why a directive could not be turned into a check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// No `:` between kind and argument (this includes empty directives).
    #[error("directive `{0}` is not of the form `kind:argument`")]
    MissingSeparator(String),

    /// The kind is not one of `len`, `in`, `min`, `max`.
    #[error("unknown validator `{0}`")]
    UnknownKind(String),

    /// `len`, `min` or `max` with an argument that is not an integer.
    #[error("`{kind}` expects an integer argument, got `{argument}`")]
    InvalidNumber {
        /// The directive kind.
        kind: RuleKind,
        /// The argument as written.
        argument: String,
    },

    /// `in` with an empty entry in its list.
    #[error("`in` list `{0}` contains an empty value")]
    EmptyLiteral(String),
}

/// Splits a rule string into directives, in order.
///
/// ```rust
/// use tagcheck::rules::{RuleKind, SyntaxError, parse};
///
/// let parsed: Vec<_> = parse("min:18; max:65;oops").collect();
/// assert_eq!(parsed[0].as_ref().unwrap().kind, RuleKind::Min);
/// assert_eq!(parsed[1].as_ref().unwrap().argument, "65");
/// assert!(matches!(parsed[2], Err(SyntaxError::MissingSeparator(_))));
/// ```
pub fn parse(metadata: &str) -> impl Iterator<Item = Result<Directive<'_>, SyntaxError>> + '_ {
    metadata.split(';').map(parse_directive)
}

/// Parses a single directive.
///
/// Leading whitespace is ignored so `"min:1; max:3"` reads naturally. The
/// argument is everything after the first `:`, trailing whitespace included.
pub fn parse_directive(raw: &str) -> Result<Directive<'_>, SyntaxError> {
    let raw = raw.trim_start();
    let (kind, argument) = raw
        .split_once(':')
        .ok_or_else(|| SyntaxError::MissingSeparator(raw.to_owned()))?;

    Ok(Directive {
        kind: kind.parse()?,
        argument,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_first_colon() {
        let directive = parse_directive("in:a:b,c").unwrap();
        assert_eq!(directive.kind, RuleKind::In);
        assert_eq!(directive.argument, "a:b,c");
    }

    #[test]
    fn test_leading_whitespace_is_skipped() {
        let parsed: Vec<_> = parse("len:4;  max:9").collect();
        assert_eq!(
            parsed,
            [
                Ok(Directive { kind: RuleKind::Len, argument: "4" }),
                Ok(Directive { kind: RuleKind::Max, argument: "9" }),
            ]
        );
    }

    #[test]
    fn test_trailing_whitespace_stays_in_argument() {
        assert_eq!(parse_directive("len:4 ").unwrap().argument, "4 ");
        assert_eq!(parse_directive(" in:a,b ").unwrap().argument, "a,b ");
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_directive("len4"),
            Err(SyntaxError::MissingSeparator("len4".into()))
        );
    }

    #[test]
    fn test_trailing_semicolon_is_an_empty_directive() {
        let parsed: Vec<_> = parse("len:4;").collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], Err(SyntaxError::MissingSeparator(String::new())));
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            parse_directive("regexp:\\d+"),
            Err(SyntaxError::UnknownKind("regexp".into()))
        );
        assert_eq!(
            parse_directive("LEN:4"),
            Err(SyntaxError::UnknownKind("LEN".into()))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SyntaxError::InvalidNumber {
            kind: RuleKind::Min,
            argument: "ten".into(),
        };
        assert_eq!(err.to_string(), "`min` expects an integer argument, got `ten`");
    }
}
