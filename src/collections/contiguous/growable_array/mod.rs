//! A module containing [`GrowableArray`] and associated types.
//!
//! Other than the array itself, this module provides the errors returned by its checked
//! operations and [`IntoIter`] for owned iteration. Borrowed iteration goes through the slice
//! returned by [`Deref`](std::ops::Deref).
//!
//! [`GrowableArray`] is also re-exported under the parent module.

mod error;
mod growable_array;
mod iter;

pub use error::*;
pub use growable_array::*;
pub use iter::*;
