use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Rev;

use super::{Branch, Drawing, Iter, NodeRef};

/// An ordered set of values stored in an unbalanced binary search tree.
///
/// Every node owns its two subtrees. All values in a node's left subtree are strictly less than
/// the node's value and all values in its right subtree are strictly greater, so duplicates are
/// discarded on insertion.
///
/// No rebalancing is ever performed. Inserting values in sorted order produces a tree with one
/// node per level, and every operation then degrades to `O(n)`.
///
/// # Teardown
/// Dropping the tree (or calling [`clear`](BinaryTree::clear)) releases every node exactly once, in
/// post-order: a node's left subtree is released, then its right subtree, then the node itself.
/// The walk keeps its own stack on the heap, as do insertion, lookup and iteration, so a tree with
/// one node per level is handled no matter how deep it gets.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the BinaryTree.
/// - `h`: The height of the BinaryTree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `find` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `take_first/last` | `O(h)` |
/// | `height` | `O(n)` |
/// | `clear` | `O(n)` |
#[derive(Clone)]
pub struct BinaryTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinaryTree<T> {
    /// Creates a new, empty BinaryTree. No nodes are allocated until a value is inserted.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinaryTree;
    /// let tree: BinaryTree<i32> = BinaryTree::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_none());
    /// ```
    pub const fn new() -> BinaryTree<T> {
        BinaryTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the BinaryTree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BinaryTree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` into the BinaryTree, descending right past smaller values and left past
    /// greater ones until an empty branch is found.
    ///
    /// Returns true if the value was added, or false if an equal value was already present, in
    /// which case the tree is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinaryTree;
    /// let mut tree = BinaryTree::new();
    /// assert!(tree.insert(4));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(4));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Finds the node holding a value equal to `value`, following the same comparisons as
    /// [`insert`](BinaryTree::insert).
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinaryTree;
    /// let tree: BinaryTree<_> = [0, 1, 4, 7, 3, 5].into_iter().collect();
    /// let node = tree.find(&4).unwrap();
    /// assert_eq!(*node.value(), 4);
    /// assert_eq!(node.left().map(|n| *n.value()), Some(3));
    /// assert_eq!(node.right().map(|n| *n.value()), Some(7));
    /// assert!(tree.find(&2).is_none());
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Option<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get(value).map(NodeRef)
    }

    /// Returns true if the BinaryTree contains a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get(value).is_some()
    }

    /// Returns the root node, or None if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(NodeRef)
    }

    /// Returns the smallest value in the BinaryTree.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the greatest value in the BinaryTree.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Removes and returns the smallest value in the BinaryTree. The removed node's right subtree
    /// takes its place.
    pub fn take_first(&mut self) -> Option<T> {
        let value = self.root.take_first();
        if value.is_some() {
            self.len -= 1;
        }
        value
    }

    /// Removes and returns the greatest value in the BinaryTree. The removed node's left subtree
    /// takes its place.
    pub fn take_last(&mut self) -> Option<T> {
        let value = self.root.take_last();
        if value.is_some() {
            self.len -= 1;
        }
        value
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 for an empty
    /// tree.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinaryTree;
    /// let sorted: BinaryTree<_> = (0..10).collect();
    /// assert_eq!(sorted.height(), 10);
    ///
    /// let mixed: BinaryTree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// assert_eq!(mixed.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Releases every node in the BinaryTree, leaving it empty.
    pub fn clear(&mut self) {
        // Assigning drops the previous root, and with it every node in post-order.
        self.root = Branch(None);
        self.len = 0;
    }

    /// Returns an iterator over all values in ascending order. The iterator is double-ended, so
    /// it can also be consumed in descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all values in ascending order, visiting each node's left subtree,
    /// then the node, then its right subtree.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinaryTree;
    /// let tree: BinaryTree<_> = [0, 1, 4, 7, 3, 5].into_iter().collect();
    /// assert!(tree.ascending().eq([0, 1, 3, 4, 5, 7].iter()));
    /// ```
    pub fn ascending(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Returns an iterator over all values in descending order, visiting each node's right
    /// subtree, then the node, then its left subtree.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinaryTree;
    /// let tree: BinaryTree<_> = [0, 1, 4, 7, 3, 5].into_iter().collect();
    /// assert!(tree.descending().eq([7, 5, 4, 3, 1, 0].iter()));
    /// ```
    pub fn descending(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }
}

impl<T: Ord> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinaryTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PartialEq for BinaryTree<T> {
    /// Two trees are equal if they hold the same values, regardless of their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for BinaryTree<T> {}

impl<T: Ord + Debug> Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("nodes", &Drawing(&self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Ord + Display> Display for BinaryTree<T> {
    /// Writes all values in ascending order, separated by spaces.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for value in iter {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}
