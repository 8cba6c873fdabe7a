//! How aggregated violations read as text.

use pretty_assertions::assert_eq;
use tagcheck::prelude::*;

struct Pair<'a> {
    code: &'a str,
    age: i32,
}

impl Inspect for Pair<'_> {
    fn shape(&self) -> Shape<'_> {
        FieldTable::new()
            .field("Code", self.code, "len:4")
            .field("Age", &self.age, "min:18")
            .into()
    }
}

#[test]
fn single_violation_renders_bare_message() {
    let err = validate(&Pair { code: "abc", age: 30 }).unwrap_err();
    assert_eq!(err.to_string(), "should have length 4");
}

#[test]
fn several_violations_render_one_line_each() {
    let err = validate(&Pair { code: "abc", age: 10 }).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Code: should have length 4\nAge: should be at least 18"
    );
}

#[test]
fn not_a_record_names_the_kind() {
    let err = validate(&3.5f64).unwrap_err();
    assert_eq!(
        err.to_string(),
        "wrong argument given, should be a struct (got f64)"
    );
}

#[test]
fn syntax_violation_renders_generic_message() {
    struct Odd(String);

    impl Inspect for Odd {
        fn shape(&self) -> Shape<'_> {
            FieldTable::new().field("Odd", &self.0, "len").into()
        }
    }

    let err = validate(&Odd("x".into())).unwrap_err();
    assert_eq!(err.to_string(), "invalid validator syntax");

    let violations = err.violations().unwrap();
    assert!(violations.errors()[0].param("reason").is_some());
}
