//! General-purpose collection types.
//!
//! # Purpose
//! Each type here is written to show the invariant it maintains: ordering for
//! [`BinaryTree`](binary_tree::BinaryTree) and amortized resizing for
//! [`GrowableArray`](contiguous::GrowableArray).
//!
//! # Method
//! [`GrowableArray`](contiguous::GrowableArray) implements [`Deref<Target = [T]>`](std::ops::Deref)
//! (and DerefMut), which saves writing some of the more repetitive functionality.

#[cfg(feature = "tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
