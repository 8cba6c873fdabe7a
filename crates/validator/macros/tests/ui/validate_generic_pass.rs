use tagcheck::{AsFieldValue, Validate, validate};

#[derive(Validate)]
pub struct Wrapper<T: AsFieldValue> {
    #[validate("len:2")]
    pub inner: T,
}

#[derive(Validate)]
pub struct Opaque<U> {
    #[validate("len:2")]
    pub inner: U,
}

#[derive(Validate)]
pub struct Borrowed<'a> {
    #[validate("max:5")]
    pub name: &'a str,
}

fn main() {
    assert!(validate(&Wrapper { inner: "ok" }).is_ok());
    assert!(validate(&Wrapper { inner: "toolong" }).is_err());

    // Without a bound the field is unsupported, and unsupported values pass.
    assert!(validate(&Opaque { inner: "toolong" }).is_ok());

    assert!(validate(&Borrowed { name: "short" }).is_ok());
}
