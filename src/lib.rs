//! A pair of textbook collections, written out by hand: an ordered binary search tree and a
//! growable array with explicit capacity tracking.
//!
//! # Purpose
//! Both types exist to make their invariants visible rather than to compete with [`std`]. The
//! tree never rebalances, so inserting sorted values produces a tree shaped like a linked list.
//! The array reports its capacity exactly and follows a fixed doubling / halving policy, so the
//! effect of every insertion and deletion on the backing storage can be observed.
//!
//! # Error Handling
//! Recoverable conditions are reported through [`Result`]s carrying small error structs that
//! implement [`Error`](std::error::Error), such as
//! [`IndexOutOfBounds`](collections::contiguous::IndexOutOfBounds). Where a method has a
//! precondition that the caller is trusted to uphold, it panics on violation and documents this
//! under `# Panics`; a `try_` variant returns the error instead.
//!
//! Recoverable conditions are additionally emitted as [`tracing`] warnings, and reallocations as
//! trace events. This crate never installs a subscriber, that is left to the binary.
//!
//! # Features
//! - `tree`: [`BinaryTree`](collections::binary_tree::BinaryTree).
//! - `contiguous`: [`GrowableArray`](collections::contiguous::GrowableArray).
//! - `collections-all` (default): both of the above.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![warn(missing_debug_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
