use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;

/// An owned, possibly empty, subtree.
///
/// Every walk over a branch loops with a cursor or an explicit stack instead of recursing, so a
/// tree degraded into one node per level is limited by the heap rather than the call stack.
pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl<T: Ord> Branch<T> {
    /// Inserts `value` below this branch, returning false if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut cur = &mut self.0;
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left.0,
                Ordering::Greater => &mut node.right.0,
                Ordering::Equal => return false,
            };
        }

        *cur = Some(Box::new(Node::leaf(value)));
        true
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.as_deref();
        while let Some(node) = cur {
            cur = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    pub fn first(&self) -> Option<&T> {
        let mut node = self.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut node = self.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    pub fn take_first(&mut self) -> Option<T> {
        let mut cur = self;
        while cur.0.as_ref()?.left.is_some() {
            cur = &mut cur.0.as_mut()?.left;
        }
        cur.unlink()
    }

    pub fn take_last(&mut self) -> Option<T> {
        let mut cur = self;
        while cur.0.as_ref()?.right.is_some() {
            cur = &mut cur.0.as_mut()?.right;
        }
        cur.unlink()
    }

    /// The number of nodes on the longest path from this branch down to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        if let Some(root) = self.as_deref() {
            stack.push((root, 1));
        }

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [&node.left, &node.right] {
                if let Some(child) = child.as_deref() {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Detaches the node at the top of this branch and moves its only child (if any) up into its
    /// place.
    fn unlink(&mut self) -> Option<T> {
        let Node { left, right, value } = *self.0.take()?;
        debug_assert!(left.is_none() || right.is_none());

        *self = if left.is_some() { left } else { right };
        Some(value)
    }
}

impl<T: Ord> Drop for Branch<T> {
    /// Releases every node in post-order: the left subtree, then the right, then the node.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.0.take().into_iter().collect();

        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.0.take() {
                stack.push(node);
                stack.push(left);
            } else if let Some(right) = node.right.0.take() {
                stack.push(node);
                stack.push(right);
            } else {
                // Both children are gone, so only the value is left to drop.
                drop(node);
            }
        }
    }
}

impl<T: Ord + Clone> Clone for Branch<T> {
    /// Copies the branch node for node, keeping its exact shape.
    fn clone(&self) -> Self {
        // Nodes are built bottom-up, each one after both of its subtrees.
        let mut pending = vec![(self, false)];
        let mut built: Vec<Branch<T>> = Vec::new();

        while let Some((branch, expanded)) = pending.pop() {
            match branch.as_deref() {
                None => built.push(Branch(None)),
                Some(node) if !expanded => {
                    pending.push((branch, true));
                    pending.push((&node.right, false));
                    pending.push((&node.left, false));
                },
                Some(node) => {
                    let right = built.pop().unwrap_or(Branch(None));
                    let left = built.pop().unwrap_or(Branch(None));
                    built.push(Branch(Some(Box::new(Node {
                        left,
                        right,
                        value: node.value.clone(),
                    }))));
                },
            }
        }

        built.pop().unwrap_or(Branch(None))
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

enum DrawStep<'a, T: Ord> {
    Subtree(&'a Branch<T>, String),
    Value(&'a T, String),
}

impl<T: Ord + Debug> Debug for Branch<T> {
    /// Draws the branch sideways, one line per node or empty branch. Each level adds a `┌` prefix
    /// to lines from the left subtree and a `└` prefix to lines from the right.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = vec![DrawStep::Subtree(self, String::new())];
        let mut separator = "";

        while let Some(step) = stack.pop() {
            match step {
                DrawStep::Subtree(branch, prefix) => match branch.as_deref() {
                    Some(node) => {
                        stack.push(DrawStep::Subtree(&node.right, prefix.clone() + "└    "));
                        stack.push(DrawStep::Value(&node.value, prefix.clone()));
                        stack.push(DrawStep::Subtree(&node.left, prefix + "┌    "));
                    },
                    None => write!(f, "{separator}{prefix}-")?,
                },
                DrawStep::Value(value, prefix) => write!(f, "{separator}{prefix}({value:?})")?,
            }
            separator = "\n";
        }
        Ok(())
    }
}

/// Draws a branch sideways on its own lines, for use as a field in other Debug output.
pub(crate) struct Drawing<'a, T: Ord>(pub &'a Branch<T>);

impl<T: Ord + Debug> Debug for Drawing<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\n{:?}\n", self.0)
    }
}

/// A borrowed view of a single node in a [`BinaryTree`](super::BinaryTree), as returned by
/// [`find`](super::BinaryTree::find).
pub struct NodeRef<'a, T: Ord>(pub(crate) &'a Node<T>);

impl<'a, T: Ord> NodeRef<'a, T> {
    /// Returns the value stored in this node.
    pub const fn value(&self) -> &'a T {
        &self.0.value
    }

    /// Returns the root of this node's left subtree, holding only smaller values.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.0.left.as_deref().map(NodeRef)
    }

    /// Returns the root of this node's right subtree, holding only greater values.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.0.right.as_deref().map(NodeRef)
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.0.left.is_none() && self.0.right.is_none()
    }
}

impl<T: Ord> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Ord> Copy for NodeRef<'_, T> {}

impl<T: Ord + Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", &self.0.value)
            .field("left", &self.left().map(|n| n.value()))
            .field("right", &self.right().map(|n| n.value()))
            .finish()
    }
}
