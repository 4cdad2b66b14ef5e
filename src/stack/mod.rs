//! Bounded LIFO storage
//!
//! [`BoundedStack`] is the fixed-capacity implementation of the [`Stack`]
//! trait. Deep copies go through the [`DeepClone`] capability so element
//! types decide at compile time whether they can be copied, and may still
//! refuse at runtime.

mod bounded;
mod traits;

pub use bounded::{BoundedStack, IntoIter, Iter};
pub use traits::{DeepClone, Stack};
