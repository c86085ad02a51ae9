//! Rotations and the AVL rebalancing policy built on them.

use crate::node::{balance_factor, Node};

/// Rotates the right child up to become the subtree root. The old root becomes the new root's left
/// child and adopts the new root's former left subtree as its right child.
pub(crate) fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = old_root.right.take() else {
        // We only rotate left if the right subtree is taller than the left subtree.
        unreachable!("`balance` saw right child taller than left child.");
    };
    old_root.right = new_root.left.take();
    old_root.update_height();

    new_root.left = Some(old_root);
    new_root.update_height();
    new_root
}

/// Mirror of [`rotate_left`]: rotates the left child up to become the subtree root.
pub(crate) fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = old_root.left.take() else {
        unreachable!("`balance` saw left child taller than right child.");
    };
    old_root.left = new_root.right.take();
    old_root.update_height();

    new_root.right = Some(old_root);
    new_root.update_height();
    new_root
}

/// Restores the AVL invariant at `node`, assuming both of its subtrees already satisfy it and
/// differ in height by at most 2. Returns the root of the repaired subtree.
pub(crate) fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let factor = node.balance_factor();

    let return_node = if factor > 1 {
        // Left-right case: straighten the left child first.
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if factor < -1 {
        // Right-left case.
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    };

    // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
    if cfg!(test) {
        assert!(return_node.balance_factor().abs() <= 1);
    }
    return_node
}

/// Refreshes the height of a node whose children just changed and rebalances it.
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    balance(node)
}
