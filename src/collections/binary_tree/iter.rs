use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::{BinaryTree, Branch, Node};

impl<T: Ord> IntoIterator for BinaryTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            tree: self,
        }
    }
}

/// An owned iterator over the values of a [`BinaryTree`], in ascending order.
pub struct IntoIter<T: Ord> {
    // Each step detaches an extreme node, which takes O(h) rather than amortized O(1), but avoids
    // keeping a separate stack of owned subtrees.
    tree: BinaryTree<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.take_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T: Ord> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.take_last()
    }
}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<T: Ord + Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.tree.iter()).finish()
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.root, self.len)
    }
}

/// A borrowed iterator over the values of a [`BinaryTree`]. Iterating forwards yields an in-order
/// traversal (ascending) and iterating backwards yields a reverse in-order traversal (descending).
pub struct Iter<'a, T: Ord> {
    // Nodes whose value and right subtree are still to be yielded from the front.
    front: Vec<&'a Node<T>>,
    // Nodes whose value and left subtree are still to be yielded from the back.
    back: Vec<&'a Node<T>>,
    // Both stacks walk the whole tree independently, this stops them once they meet.
    remaining: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> Iter<'a, T> {
        let mut iter = Iter {
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter.descend_right(root);
        iter
    }

    fn descend_left(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.as_deref() {
            self.front.push(node);
            branch = &node.left;
        }
    }

    fn descend_right(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.as_deref() {
            self.back.push(node);
            branch = &node.right;
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.front.pop()?;
        self.descend_left(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Ord> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.back.pop()?;
        self.descend_right(&node.left);
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: Ord> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: Ord + Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
