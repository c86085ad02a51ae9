//! Invariant checks. These walk the whole tree and are meant for tests and debugging; normal
//! operations never call them.

use std::cmp;

use crate::node::{height, Link};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Whether every node's children differ in height by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..100 {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert!(tree.is_balanced());
    /// assert!(tree.is_height_correct());
    /// ```
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.root).is_some()
    }

    /// Whether every node's cached height is one more than the taller of its children.
    pub fn is_height_correct(&self) -> bool {
        is_height_correct(&self.root)
    }

    /// Whether an in-order walk yields strictly increasing values, i.e. the binary search tree
    /// invariant holds and no value is stored twice.
    pub fn is_ordered(&self) -> bool
    where
        T: Ord,
    {
        let mut previous: Option<&T> = None;
        is_ordered(&self.root, &mut previous)
    }
}

/// Returns the recomputed height of a balanced subtree, or `None` if some node is out of balance.
/// Heights are recomputed rather than read from the nodes so a stale cached height can't hide an
/// imbalance.
fn is_balanced<T>(link: &Link<T>) -> Option<usize> {
    match link {
        None => Some(0),
        Some(n) => {
            let left = is_balanced(&n.left)?;
            let right = is_balanced(&n.right)?;
            if left.abs_diff(right) > 1 {
                return None;
            }
            Some(1 + cmp::max(left, right))
        }
    }
}

fn is_height_correct<T>(link: &Link<T>) -> bool {
    match link {
        None => true,
        Some(n) => {
            n.height == 1 + cmp::max(height(&n.left), height(&n.right))
                && is_height_correct(&n.left)
                && is_height_correct(&n.right)
        }
    }
}

fn is_ordered<'a, T: Ord>(link: &'a Link<T>, previous: &mut Option<&'a T>) -> bool {
    match link {
        None => true,
        Some(n) => {
            if !is_ordered(&n.left, previous) {
                return false;
            }
            if previous.map_or(false, |p| p >= &n.value) {
                return false;
            }
            *previous = Some(&n.value);
            is_ordered(&n.right, previous)
        }
    }
}
