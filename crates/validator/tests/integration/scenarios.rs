//! Derived records against the directive kinds.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tagcheck::prelude::*;
use tagcheck::codes;

#[derive(Validate)]
pub struct Code {
    #[validate("len:4", rename = "Code")]
    pub code: String,
}

#[derive(Validate)]
pub struct Status {
    #[validate("in:active,inactive", rename = "Status")]
    pub status: String,
}

#[derive(Validate)]
pub struct Age {
    #[validate("min:18;max:65", rename = "Age")]
    pub age: i64,
}

#[derive(Validate)]
pub struct Name {
    #[validate("min:2;max:5", rename = "Name")]
    pub name: String,
}

#[derive(Validate)]
pub struct Level {
    #[validate("in:1,2,3", rename = "Level")]
    pub level: u8,
}

fn messages(result: Result<(), Error>) -> Vec<String> {
    match result {
        Ok(()) => Vec::new(),
        Err(Error::Invalid(errors)) => errors.iter().map(|e| e.message.to_string()).collect(),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case("abcd", &[])]
#[case("abc", &["should have length 4"])]
#[case("abcde", &["should have length 4"])]
#[case("", &["should have length 4"])]
fn len_directive(#[case] code: &str, #[case] expected: &[&str]) {
    let record = Code { code: code.into() };
    assert_eq!(messages(validate(&record)), expected);
}

#[test]
fn len_counts_bytes() {
    // "é" is two bytes in UTF-8.
    let record = Code { code: "éé".into() };
    assert!(validate(&record).is_ok());
}

#[rstest]
#[case("active", &[])]
#[case("inactive", &[])]
#[case("paused", &["should be one of active,inactive"])]
#[case("Active", &["should be one of active,inactive"])]
#[case("", &["should be one of active,inactive"])]
fn in_directive(#[case] status: &str, #[case] expected: &[&str]) {
    let record = Status {
        status: status.into(),
    };
    assert_eq!(messages(validate(&record)), expected);
}

#[rstest]
#[case(18, &[])]
#[case(65, &[])]
#[case(30, &[])]
#[case(17, &["should be at least 18"])]
#[case(66, &["should be at most 65"])]
#[case(-1, &["should be at least 18"])]
fn integer_bounds(#[case] age: i64, #[case] expected: &[&str]) {
    assert_eq!(messages(validate(&Age { age })), expected);
}

#[rstest]
#[case("ab", &[])]
#[case("abcde", &[])]
#[case("a", &["should have length at least 2"])]
#[case("abcdef", &["should have length at most 5"])]
fn string_bounds(#[case] name: &str, #[case] expected: &[&str]) {
    let record = Name { name: name.into() };
    assert_eq!(messages(validate(&record)), expected);
}

#[rstest]
#[case(1, true)]
#[case(3, true)]
#[case(4, false)]
fn in_on_integers_compares_decimal_text(#[case] level: u8, #[case] ok: bool) {
    assert_eq!(validate(&Level { level }).is_ok(), ok);
}

#[test]
fn violations_carry_field_and_params() {
    let err = validate(&Age { age: 10 }).unwrap_err();
    let violations = err.violations().unwrap();

    assert_eq!(violations.len(), 1);
    let violation = &violations.errors()[0];
    assert_eq!(violation.field(), Some("Age"));
    assert_eq!(violation.code, codes::MIN);
    assert_eq!(violation.param("min"), Some("18"));
    assert_eq!(violation.param("actual"), Some("10"));
}

#[derive(Validate)]
pub struct Mixed {
    #[validate("len:3")]
    pub flag: bool,
    #[validate("min:1;max:2;in:x")]
    pub ratio: f64,
    #[validate("len:1")]
    pub tags: Vec<String>,
    #[validate("len:10")]
    pub count: u32,
    pub untouched: String,
}

#[test]
fn unsupported_kinds_pass() {
    let record = Mixed {
        flag: true,
        ratio: 99.5,
        tags: vec![],
        count: 7,
        untouched: String::new(),
    };
    assert!(validate(&record).is_ok());
}

#[derive(Validate)]
pub struct Broken {
    #[validate("len:x;size:3;min:2", rename = "Name")]
    pub name: String,
}

#[test]
fn syntax_errors_do_not_stop_later_directives() {
    let err = validate(&Broken { name: "a".into() }).unwrap_err();
    let violations = err.violations().unwrap();

    let seen: Vec<_> = violations.iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(seen, [codes::INVALID_SYNTAX, codes::INVALID_SYNTAX, codes::MIN]);
    assert!(violations.errors()[0].is_syntax_error());
}

#[derive(Validate)]
pub struct WithSecret {
    #[validate("len:4")]
    pub code: String,
    #[validate("len:4;min:100")]
    secret: String,
}

impl WithSecret {
    fn new(secret: &str) -> Self {
        Self {
            code: "abcd".into(),
            secret: secret.into(),
        }
    }
}

#[test]
fn private_field_with_rules_is_reported_once() {
    // Reported even though the value would satisfy `len:4`.
    let err = validate(&WithSecret::new("wxyz")).unwrap_err();
    assert_eq!(err.to_string(), "validation for unexported field is not allowed");

    let violations = err.violations().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations.errors()[0].field(), Some("secret"));
    assert_eq!(violations.errors()[0].code, codes::UNEXPORTED_FIELD);
}

#[derive(Validate)]
pub struct Signup {
    #[validate("len:4")]
    pub code: String,
    #[validate("in:active,inactive")]
    pub status: String,
    #[validate("min:18")]
    #[validate("max:65")]
    pub age: i32,
}

#[test]
fn multiple_attributes_are_joined() {
    let record = Signup {
        code: "abcd".into(),
        status: "active".into(),
        age: 70,
    };
    assert_eq!(
        validate(&record).unwrap_err().to_string(),
        "should be at most 65"
    );
}

#[test]
fn method_form_matches_function_form() {
    let record = Signup {
        code: "abc".into(),
        status: "paused".into(),
        age: 12,
    };
    assert_eq!(record.validate(), validate(&record));
    assert_eq!(record.validate().unwrap_err().violations().unwrap().len(), 3);
}

#[test]
fn validation_is_repeatable() {
    let record = Signup {
        code: "abc".into(),
        status: "active".into(),
        age: 30,
    };
    let first = validate(&record);
    let second = validate(&record);
    assert_eq!(first, second);
}

#[test]
fn non_records_are_rejected() {
    assert_eq!(validate(&5i32), Err(Error::NotARecord { kind: "i32" }));
    assert_eq!(validate("text"), Err(Error::NotARecord { kind: "str" }));
    assert!(validate(&vec![Code { code: "abcd".into() }])
        .unwrap_err()
        .is_not_a_record());
}

#[test]
fn references_and_boxes_are_followed() {
    let record = Box::new(Code { code: "abc".into() });
    assert!(validate(&record).is_err());
    assert!(validate(&&*record).is_err());
}

#[derive(Validate)]
pub struct Short {
    #[validate("min:2;max:4", rename = "Name")]
    pub name: String,
}

#[derive(Validate)]
pub struct Tag {
    #[validate("in:,a,b", rename = "Tag")]
    pub tag: String,
}

#[test]
fn reference_scenarios() {
    let too_long = validate(&Short {
        name: "abcdef".into(),
    })
    .unwrap_err();
    let violation = &too_long.violations().unwrap().errors()[0];
    assert_eq!(violation.to_string(), "Name: should have length at most 4");

    let empty_literal = validate(&Tag { tag: "a".into() }).unwrap_err();
    let violation = &empty_literal.violations().unwrap().errors()[0];
    assert_eq!(violation.to_string(), "Tag: invalid validator syntax");
}
