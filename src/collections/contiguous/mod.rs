//! Contiguous collection types. Currently this is just [`GrowableArray`], a sequence backed by a
//! single allocation whose capacity is tracked and resized explicitly.

pub mod growable_array;

#[doc(inline)]
pub use growable_array::{EmptyArray, EmptyAtIndex, GrowableArray, IndexOutOfBounds, InsertError};
