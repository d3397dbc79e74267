#![cfg(test)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::DropLog;

fn demo_tree() -> BinaryTree<i32> {
    // 0
    //  \
    //   1
    //    \
    //     4
    //    / \
    //   3   7
    //      /
    //     5
    let mut tree = BinaryTree::new();
    tree.insert(0);
    for i in (1..10).step_by(3) {
        tree.insert(i);
    }
    tree.insert(3);
    tree.insert(5);
    tree
}

#[test]
fn test_demo_traversals() {
    let tree = demo_tree();

    assert_eq!(tree.len(), 6);
    assert_eq!(
        tree.ascending().copied().collect::<Vec<_>>(),
        [0, 1, 3, 4, 5, 7],
        "In-order traversal should yield ascending values."
    );
    assert_eq!(
        tree.descending().copied().collect::<Vec<_>>(),
        [7, 5, 4, 3, 1, 0],
        "Reverse in-order traversal should yield descending values."
    );
    assert_eq!(tree.to_string(), "0 1 3 4 5 7");
}

#[test]
fn test_demo_shape() {
    let tree = demo_tree();

    let root = tree.root().expect("tree isn't empty");
    assert_eq!(*root.value(), 0);
    assert!(root.left().is_none());

    let node = tree.find(&4).expect("4 was inserted");
    assert_eq!(*node.value(), 4);
    assert_eq!(node.left().map(|n| *n.value()), Some(3));
    assert!(node.left().is_some_and(|n| n.is_leaf()));

    let seven = node.right().expect("7 is right of 4");
    assert_eq!(*seven.value(), 7);
    assert_eq!(seven.left().map(|n| *n.value()), Some(5));
    assert!(seven.right().is_none());

    assert_eq!(tree.height(), 5);
}

#[test]
fn test_empty_tree() {
    let mut tree = BinaryTree::<i32>::new();

    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert!(tree.find(&0).is_none());
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.descending().next(), None);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.take_last(), None);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.to_string(), "");

    assert!(tree.insert(42), "Inserting into an empty tree should create the root.");
    assert_eq!(tree.root().map(|n| *n.value()), Some(42));
}

#[test]
fn test_duplicates_are_discarded() {
    let mut tree = demo_tree();
    let before = tree.clone();

    assert!(!tree.insert(4));
    assert!(!tree.insert(0));
    assert_eq!(tree.len(), 6);
    assert_eq!(tree, before, "Duplicate insertion should leave the tree unchanged.");

    let log = DropLog::new();
    let mut tree = BinaryTree::new();
    assert!(tree.insert(log.track(1)));
    assert!(!tree.insert(log.track(1)));
    assert_eq!(
        log.take(),
        [1],
        "The rejected duplicate should be dropped immediately, keeping the existing node."
    );
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_sorted_insertion_is_not_rebalanced() {
    let tree: BinaryTree<_> = (0..100).collect();
    assert_eq!(tree.height(), 100, "Sorted insertion should degrade into a list.");

    let mut node = tree.root();
    let mut expected = 0;
    while let Some(n) = node {
        assert_eq!(*n.value(), expected);
        assert!(n.left().is_none());
        node = n.right();
        expected += 1;
    }
    assert_eq!(expected, 100);
}

// Deep enough that following one stack frame per level would overflow a test thread's stack.
// Building it takes quadratic time, so it is kept well short of anything slow.
const DEPTH: i32 = 40_000;

#[test]
fn test_deep_sorted_tree() {
    let mut tree = BinaryTree::new();
    for i in 0..DEPTH {
        assert!(tree.insert(i));
    }
    assert!(!tree.insert(DEPTH - 1), "Duplicates should be found at the bottom of the list.");
    assert_eq!(tree.len(), DEPTH as usize);
    assert_eq!(tree.height(), DEPTH as usize);

    assert_eq!(tree.find(&(DEPTH - 1)).map(|n| *n.value()), Some(DEPTH - 1));
    assert!(tree.find(&(DEPTH - 1)).is_some_and(|n| n.is_leaf()));
    assert!(tree.find(&DEPTH).is_none());
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.last(), Some(&(DEPTH - 1)));

    assert!(tree.ascending().copied().eq(0..DEPTH));
    assert!(tree.descending().copied().eq((0..DEPTH).rev()));

    let copy = tree.clone();
    assert_eq!(copy.height(), DEPTH as usize, "Cloning should keep the shape.");
    assert!(copy == tree, "A clone should hold the same values.");
    drop(copy);

    assert_eq!(tree.take_last(), Some(DEPTH - 1));
    assert_eq!(tree.take_first(), Some(0));
    assert_eq!(tree.len(), DEPTH as usize - 2);

    drop(tree);

    // Descending insertion builds the mirror image, all left children.
    let mut tree: BinaryTree<_> = (0..DEPTH).rev().collect();
    assert_eq!(tree.height(), DEPTH as usize);
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.take_first(), Some(0));
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn test_deep_teardown_order() {
    let log = DropLog::new();
    let mut tree = BinaryTree::new();
    for id in 0..DEPTH {
        tree.insert(log.track(id));
    }

    drop(tree);
    assert!(
        log.take().into_iter().eq((0..DEPTH).rev()),
        "A right-leaning list should be released from the bottom up, each node exactly once."
    );
}

#[test]
fn test_teardown_order() {
    let log = DropLog::new();
    let mut tree = BinaryTree::new();
    for id in [0, 1, 4, 7, 3, 5] {
        tree.insert(log.track(id));
    }

    drop(tree);
    assert_eq!(
        log.take(),
        [3, 5, 7, 4, 1, 0],
        "Nodes should be released in post-order, left before right, each exactly once."
    );

    let mut tree = BinaryTree::new();
    for id in [2, 1, 3] {
        tree.insert(log.track(id));
    }
    tree.clear();
    assert_eq!(log.take(), [1, 3, 2]);
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
}

#[test]
fn test_take_extremes() {
    // 1 has a right subtree (3, with children 2 and 4) which must survive its removal.
    let mut tree: BinaryTree<_> = [5, 1, 3, 2, 4, 8, 6].into_iter().collect();

    assert_eq!(tree.first(), Some(&1));
    assert_eq!(tree.last(), Some(&8));

    assert_eq!(tree.take_first(), Some(1));
    assert_eq!(tree.take_last(), Some(8));
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5, 6]);

    assert_eq!(tree.take_last(), Some(6));
    assert_eq!(tree.take_last(), Some(5));
    assert_eq!(tree.root().map(|n| *n.value()), Some(3));
}

#[test]
fn test_iterators() {
    let tree: BinaryTree<_> = [50, 30, 70, 20, 40, 60, 80, 35].into_iter().collect();

    let mut iter = tree.iter();
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.next(), Some(&20));
    assert_eq!(iter.next_back(), Some(&80));
    assert_eq!(iter.next(), Some(&30));
    assert_eq!(iter.next_back(), Some(&70));
    assert_eq!(iter.next_back(), Some(&60));
    assert_eq!(iter.next(), Some(&35));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&40));
    assert_eq!(iter.next_back(), Some(&50));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    assert_eq!(
        tree.clone().into_iter().collect::<Vec<_>>(),
        [20, 30, 35, 40, 50, 60, 70, 80],
        "Owned iteration should yield ascending values."
    );
    assert_eq!(
        tree.into_iter().rev().collect::<Vec<_>>(),
        [80, 70, 60, 50, 40, 35, 30, 20]
    );
}

#[test]
fn test_borrowed_lookup() {
    let tree: BinaryTree<String> =
        ["pear", "apple", "quince"].map(String::from).into_iter().collect();

    assert!(tree.contains("apple"));
    assert!(!tree.contains("banana"));
    assert_eq!(tree.find("quince").map(|n| n.value().as_str()), Some("quince"));
}

#[test]
fn test_debug_drawing() {
    let tree: BinaryTree<_> = [2, 1, 3].into_iter().collect();
    let drawing = format!("{tree:?}");

    assert!(drawing.starts_with("BinaryTree { nodes: \n"));
    assert!(drawing.contains("┌    (1)\n"), "{drawing}");
    assert!(drawing.contains("\n(2)\n"), "{drawing}");
    assert!(drawing.contains("└    (3)\n"), "{drawing}");
    assert!(drawing.ends_with("len: 3 }"));
    assert_eq!(
        drawing,
        "BinaryTree { nodes: \n\
         ┌    ┌    -\n┌    (1)\n┌    └    -\n\
         (2)\n\
         └    ┌    -\n└    (3)\n└    └    -\n\
         , len: 3 }",
        "Empty branches should be drawn as dashes under their parent's prefix."
    );
}

proptest! {
    #[test]
    fn prop_ascending_is_sorted_set(values in proptest::collection::vec(any::<i32>(), 0..256)) {
        let tree: BinaryTree<_> = values.iter().copied().collect();
        let expected: BTreeSet<_> = values.iter().copied().collect();

        prop_assert_eq!(tree.len(), expected.len());
        prop_assert!(tree.ascending().eq(expected.iter()));
        prop_assert!(tree.descending().eq(expected.iter().rev()));
    }

    #[test]
    fn prop_find_matches_membership(
        values in proptest::collection::vec(-100_i32..100, 0..128),
        lookups in proptest::collection::vec(-120_i32..120, 0..64),
    ) {
        let tree: BinaryTree<_> = values.iter().copied().collect();

        for v in &values {
            prop_assert_eq!(tree.find(v).map(|n| *n.value()), Some(*v));
        }
        for p in &lookups {
            prop_assert_eq!(tree.find(p).is_some(), values.contains(p));
        }
    }

    #[test]
    fn prop_reinsert_is_idempotent(
        values in proptest::collection::vec(any::<i16>(), 1..128),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: BinaryTree<_> = values.iter().copied().collect();
        let before: Vec<_> = tree.iter().copied().collect();

        prop_assert!(!tree.insert(*pick.get(values.as_slice())));
        prop_assert!(tree.iter().copied().eq(before));
    }
}
