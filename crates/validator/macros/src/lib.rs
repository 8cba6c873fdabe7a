//! # tagcheck-macros
//!
//! `#[derive(Validate)]` for [tagcheck](https://docs.rs/tagcheck). Use it
//! through the `tagcheck` crate (`derive` feature), not directly.
//!
//! ```ignore
//! use tagcheck::Validate;
//!
//! #[derive(Validate)]
//! pub struct User {
//!     #[validate("len:4")]
//!     pub code: String,
//!
//!     #[validate("min:18;max:65", rename = "Age")]
//!     pub age: i32,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod support;
mod validate;

/// Derive macro generating the field table `tagcheck::validate` walks.
///
/// Implements `tagcheck::Inspect` for a struct with named fields. Every
/// field is listed in declaration order with its name, whether it is `pub`,
/// its rule string, and its current value.
///
/// # Field attributes
///
/// - `#[validate("rules")]` or `#[validate = "rules"]` - rule string
/// - `#[validate(rules = "...")]` - same, in key-value form
/// - `#[validate(rename = "Name")]` - name reported in violations
///   (default: the field identifier)
///
/// Several rule strings on one field, across one or more attributes, are
/// joined with `;` in order. Fields without rules are listed but never
/// checked. Rules on a field that is not `pub` are reported as a violation
/// at validation time.
///
/// Field types implementing `tagcheck::AsFieldValue` (strings and integers
/// among them) are read as such; any other type is passed to the rules as
/// an unsupported value, which every directive accepts. In generic structs,
/// add a `T: tagcheck::AsFieldValue` bound for a type parameter to be read.
///
/// # Example
///
/// ```ignore
/// #[derive(Validate)]
/// pub struct Order {
///     #[validate("in:new,paid,shipped")]
///     pub status: String,
///
///     #[validate("min:1")]
///     #[validate("max:100")]
///     pub quantity: u32,
///
///     pub notes: Vec<String>,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    validate::derive(input)
}
