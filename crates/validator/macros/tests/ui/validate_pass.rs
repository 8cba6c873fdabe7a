use tagcheck::{Error, Validate, validate};

#[derive(Validate)]
pub struct Signup {
    #[validate("len:4")]
    pub code: String,

    #[validate("in:active,inactive", rename = "Status")]
    pub status: String,

    #[validate = "min:18"]
    #[validate(rules = "max:65")]
    pub age: u8,

    #[validate("min:1")]
    secret: String,

    pub r#type: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Validate)]
pub struct Empty {}

fn main() {
    let signup = Signup {
        code: "1234".into(),
        status: "active".into(),
        age: 30,
        secret: String::new(),
        r#type: None,
        tags: vec![],
    };

    match validate(&signup) {
        Err(Error::Invalid(errors)) => assert_eq!(errors.len(), 1),
        _ => panic!("private field with rules should be reported"),
    }

    assert!(validate(&Empty {}).is_ok());
}
