//! End-to-end tests for record validation.

mod manual;
mod rendering;
#[cfg(feature = "derive")]
mod scenarios;
