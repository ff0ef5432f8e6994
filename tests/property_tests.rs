//! Property-based tests for RbTree.
//!
//! Random sequences of insert and delete are applied to a tree and to a
//! `BTreeMap` model, the tree must agree with the model and keep its
//! red-black shape after every operation.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use proptest::prelude::*;
use rbtree_index::{RbTree, BLACK_HEIGHT_MISMATCH};

type Tree = RbTree<i32, i32, fn(&i32, &i32) -> Ordering>;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32, i32),
    Delete(i32),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..64_i32, any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        (0..64_i32).prop_map(Op::Delete),
    ]
}

fn new_tree() -> Tree {
    RbTree::new("prop-rbtree", i32::cmp as fn(&i32, &i32) -> Ordering)
}

fn apply(tree: &mut Tree, model: &mut BTreeMap<i32, i32>, op: &Op) {
    match op {
        Op::Insert(k, v) => {
            let old = tree.insert(*k, *v).unwrap();
            assert_eq!(old, model.insert(*k, *v));
        }
        Op::Delete(k) => {
            assert_eq!(tree.delete(k), model.remove(k));
        }
    }
}

fn has_red_red(tree: &Tree) -> bool {
    let mut found = false;
    tree.traverse_breadth_first(|node| {
        if node.is_red() && tree.parent(node).map_or(false, |p| p.is_red()) {
            found = true;
        }
    });
    found
}

fn shape(tree: &Tree) -> Vec<(i32, bool)> {
    let mut acc = vec![];
    tree.traverse_breadth_first(|node| acc.push((*node.key(), node.is_black())));
    acc
}

proptest! {
    /// Root is black, no red-red edge, black-height is well defined.
    #[test]
    fn prop_invariants_hold(ops in prop::collection::vec(arbitrary_op(), 0..200)) {
        let (mut tree, mut model) = (new_tree(), BTreeMap::new());
        for op in ops.iter() {
            apply(&mut tree, &mut model, op);
            prop_assert!(tree.root().map_or(true, |root| root.is_black()));
            prop_assert!(!has_red_red(&tree));
            prop_assert_ne!(tree.black_height(tree.root()), BLACK_HEIGHT_MISMATCH);
            prop_assert!(tree.validate().is_ok());
        }
    }

    /// In-order walk yields strictly ascending keys, same as the model.
    #[test]
    fn prop_iter_sorted(ops in prop::collection::vec(arbitrary_op(), 0..200)) {
        let (mut tree, mut model) = (new_tree(), BTreeMap::new());
        for op in ops.iter() {
            apply(&mut tree, &mut model, op);
        }
        let items: Vec<(i32, i32)> = tree.iter().collect();
        prop_assert!(items.windows(2).all(|w| w[0].0 < w[1].0));
        let expected: Vec<(i32, i32)> = model.into_iter().collect();
        prop_assert_eq!(items, expected);
    }

    /// search after insert returns the value, overwrite keeps the shape.
    #[test]
    fn prop_insert_search(
        keys in prop::collection::vec(0..1000_i32, 1..100),
        v1: i32,
        v2: i32
    ) {
        let mut tree = new_tree();
        for key in keys.iter() {
            tree.insert(*key, v1).unwrap();
            prop_assert_eq!(tree.search(key), Some(v1));
        }
        let before = shape(&tree);
        tree.insert(keys[0], v2).unwrap();
        prop_assert_eq!(tree.search(&keys[0]), Some(v2));
        prop_assert_eq!(shape(&tree), before);
    }

    /// After delete the key is gone, every other key keeps its value.
    #[test]
    fn prop_delete_search(
        ops in prop::collection::vec(arbitrary_op(), 0..200),
        key in 0..64_i32
    ) {
        let (mut tree, mut model) = (new_tree(), BTreeMap::new());
        for op in ops.iter() {
            apply(&mut tree, &mut model, op);
        }
        tree.delete(&key);
        model.remove(&key);
        prop_assert_eq!(tree.search(&key), None);
        prop_assert_eq!(tree.len(), model.len());
        for (k, v) in model.iter() {
            prop_assert_eq!(tree.search(k), Some(*v));
        }
    }

    /// Deleting twice is same as deleting once.
    #[test]
    fn prop_delete_idempotent(
        ops in prop::collection::vec(arbitrary_op(), 0..200),
        key in 0..64_i32
    ) {
        let (mut tree, mut model) = (new_tree(), BTreeMap::new());
        for op in ops.iter() {
            apply(&mut tree, &mut model, op);
        }
        tree.delete(&key);
        let once = shape(&tree);
        prop_assert_eq!(tree.delete(&key), None);
        prop_assert_eq!(shape(&tree), once);
    }
}
