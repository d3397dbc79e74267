//! A module containing [`BinaryTree`] and associated types.
//!
//! Other than the tree itself, this module provides [`NodeRef`], a borrowed view of a single node
//! returned by lookups, as well as [`Iter`] and [`IntoIter`] for borrowed and owned in-order
//! traversal.

mod binary_tree;
mod iter;
mod node;
mod tests;

pub use binary_tree::*;
pub use iter::*;
pub(crate) use node::{Branch, Drawing, Node};
pub use node::NodeRef;
