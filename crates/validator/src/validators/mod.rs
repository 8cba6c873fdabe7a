//! Built-in directive validators
//!
//! One type per directive kind. Each implements [`Rule`](crate::Rule) and
//! can also be used directly, without going through a rule string.
//!
//! | kind | type | strings | integers |
//! |------|------|---------|----------|
//! | `len` | [`ExactLength`] | byte length == N | passes |
//! | `in` | [`OneOf`] | text equality | decimal text equality |
//! | `min` | [`Min`] | byte length ≥ N | value ≥ N |
//! | `max` | [`Max`] | byte length ≤ N | value ≤ N |

mod length;
mod membership;
mod range;

pub use length::{ExactLength, exact_length};
pub use membership::{OneOf, one_of};
pub use range::{Max, Min, max, min};
