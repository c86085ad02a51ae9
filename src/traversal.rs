//! Read-only walks over a [`Tree`]. Each walk hands every stored value to a visitor exactly once;
//! call the method again to walk again.

use std::collections::VecDeque;

use crate::node::{Link, Node};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Visits each node before its subtrees: node, left, right.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.pre_order(|x| seen.push(*x));
    /// assert_eq!(seen, [2, 1, 3]);
    /// ```
    pub fn pre_order<F: FnMut(&T)>(&self, mut visit: F) {
        pre_order(&self.root, &mut visit);
    }

    /// Visits values in ascending order: left, node, right.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 1, 4, 2, 3] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.in_order(|x| seen.push(*x));
    /// assert_eq!(seen, [1, 2, 3, 4, 5]);
    /// ```
    pub fn in_order<F: FnMut(&T)>(&self, mut visit: F) {
        in_order(&self.root, &mut visit);
    }

    /// Visits each node after its subtrees: left, right, node.
    pub fn post_order<F: FnMut(&T)>(&self, mut visit: F) {
        post_order(&self.root, &mut visit);
    }

    /// Visits nodes breadth first, one level at a time and left to right within a level.
    pub fn level_order<F: FnMut(&T)>(&self, mut visit: F) {
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
    }
}

fn pre_order<T, F: FnMut(&T)>(link: &Link<T>, visit: &mut F) {
    if let Some(n) = link {
        visit(&n.value);
        pre_order(&n.left, visit);
        pre_order(&n.right, visit);
    }
}

fn in_order<T, F: FnMut(&T)>(link: &Link<T>, visit: &mut F) {
    if let Some(n) = link {
        in_order(&n.left, visit);
        visit(&n.value);
        in_order(&n.right, visit);
    }
}

fn post_order<T, F: FnMut(&T)>(link: &Link<T>, visit: &mut F) {
    if let Some(n) = link {
        post_order(&n.left, visit);
        post_order(&n.right, visit);
        visit(&n.value);
    }
}
