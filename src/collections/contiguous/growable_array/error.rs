use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// An insertion at an index was attempted on an array with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unable to insert at an index into an empty array!")]
pub struct EmptyArray;

/// A read found no element at the requested index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Array with {len} elements is empty at index {index}!")]
pub struct EmptyAtIndex {
    pub index: usize,
    pub len: usize,
}

/// The ways in which a checked [`try_insert`](super::GrowableArray::try_insert) can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum InsertError {
    Empty(EmptyArray),
    IndexOutOfBounds(IndexOutOfBounds),
}
