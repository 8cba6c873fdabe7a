//! Records described by hand with `FieldTable`.

use pretty_assertions::assert_eq;
use tagcheck::prelude::*;

struct Account {
    id: u64,
    email: String,
    role: String,
    pin: String,
}

impl Inspect for Account {
    fn shape(&self) -> Shape<'_> {
        FieldTable::with_capacity(4)
            .field("ID", &self.id, "min:1")
            .field("Email", self.email.as_str(), "min:3;max:64")
            .field("Role", &self.role, "in:admin,member")
            .private_field("pin", &self.pin, "")
            .into()
    }
}

fn account() -> Account {
    Account {
        id: 7,
        email: "a@b.c".into(),
        role: "member".into(),
        pin: "0000".into(),
    }
}

#[test]
fn valid_account_passes() {
    assert_eq!(validate(&account()), Ok(()));
}

#[test]
fn private_field_without_rules_is_ignored() {
    let record = account();
    let shape = record.shape();
    let fields = shape.fields().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[3].visibility, Visibility::Private);
    assert!(!fields[3].has_rules());
}

#[test]
fn every_violation_is_collected_in_order() {
    let record = Account {
        id: 0,
        email: "ab".into(),
        role: "owner".into(),
        ..account()
    };

    let errors = validate(&record).unwrap_err().into_violations().unwrap();
    let fields: Vec<_> = errors.iter().filter_map(ValidationError::field).collect();
    assert_eq!(fields, ["ID", "Email", "Role"]);
    assert_eq!(errors.for_field("Email").count(), 1);
}

struct Locked {
    token: String,
}

impl Inspect for Locked {
    fn shape(&self) -> Shape<'_> {
        FieldTable::new()
            .private_field("token", &self.token, "len:8")
            .into()
    }
}

#[test]
fn private_field_with_rules_fails_regardless_of_value() {
    let ok_value = Locked {
        token: "12345678".into(),
    };
    let bad_value = Locked { token: "1".into() };

    assert_eq!(validate(&ok_value), validate(&bad_value));
    assert_eq!(
        validate(&ok_value).unwrap_err().to_string(),
        "validation for unexported field is not allowed"
    );
}

#[test]
fn descriptors_can_be_validated_directly() {
    let fields = [
        FieldDescriptor::new("Flag", Visibility::Public, "in:yes", FieldValue::Other("bool")),
        FieldDescriptor::new("Code", Visibility::Public, "len:2", FieldValue::Str("abc")),
    ];

    let errors = tagcheck::validate_fields(&fields).unwrap_err();
    assert_eq!(errors.to_string(), "should have length 2");
}

#[test]
fn rules_can_be_checked_one_by_one() {
    assert!(ExactLength::new(3).check(FieldValue::Str("abc")).is_ok());
    assert!(Min::new(18).check(FieldValue::Int(17)).is_err());
    assert!(Max::new(2).check(FieldValue::Str("abc")).is_err());
    assert!(OneOf::parse("a,b").unwrap().check(FieldValue::Str("b")).is_ok());
}
