//! The owning AVL tree and its structural operations.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1).unwrap();
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again is an error and changes nothing.
//! assert!(tree.insert(1).is_err());
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting is silent, whether or not the value was there.
//! tree.delete(&1);
//! tree.delete(&1);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::balance::rebalance;
use crate::config::DuplicatePolicy;
use crate::error::DuplicateValueError;
use crate::node::{height, Link, Node};
use crate::util::Insertion;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) storing a set of distinct
/// values. This can be used for inserting, finding, and deleting values.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    len: usize,
    policy: DuplicatePolicy,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree` that rejects duplicate values.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Generate a new, empty `Tree` handling duplicate inserts according to `policy`.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            root: None,
            len: 0,
            policy,
        }
    }

    /// The duplicate policy this tree was built with.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: the number of nodes on the longest root-to-leaf path, 0 when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// for x in [10, 20, 30, 40, 50] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// // A plain BST would have degenerated into a chain of height 5.
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The smallest value in the tree, if any.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|n| &n.min_value_node().value)
    }

    /// The largest value in the tree, if any.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(|n| &n.max_value_node().value)
    }

    /// Inserts `value` into the tree, rebalancing on the way back up.
    ///
    /// If an equal value is already stored the tree is left unchanged and, under
    /// [`DuplicatePolicy::Reject`], [`DuplicateValueError`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{DuplicateValueError, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1).unwrap();
    /// assert!(tree.contains(&1));
    ///
    /// assert_eq!(tree.insert(1), Err(DuplicateValueError));
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateValueError>
    where
        T: Ord,
    {
        let (root, insertion) = insert(self.root.take(), value);
        self.root = Some(root);

        match (insertion, self.policy) {
            (Insertion::Added, _) => {
                self.len += 1;
                Ok(())
            }
            (Insertion::Present, DuplicatePolicy::Ignore) => Ok(()),
            (Insertion::Present, DuplicatePolicy::Reject) => Err(DuplicateValueError),
        }
    }

    /// Whether an equal value is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [20, 25, 21, 100, 80] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert!(tree.contains(&80));
    /// assert!(!tree.contains(&90));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        contains(&self.root, value)
    }

    /// Deletes `value` from the tree if it is present. Deleting a missing value does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10).unwrap();
    /// tree.insert(20).unwrap();
    ///
    /// tree.delete(&10);
    /// tree.delete(&42);
    ///
    /// assert!(!tree.contains(&10));
    /// assert!(tree.contains(&20));
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        self.take(value);
    }

    /// Like [`delete`][Tree::delete] but hands back the stored value that was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("a")).unwrap();
    ///
    /// assert_eq!(tree.take(&String::from("a")), Some(String::from("a")));
    /// assert_eq!(tree.take(&String::from("a")), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = delete(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}

/// Inserts `value` below `link` and returns the root of the resulting (rebalanced) subtree.
fn insert<T: Ord>(link: Link<T>, value: T) -> (Box<Node<T>>, Insertion) {
    let mut node = match link {
        Some(n) => n,
        None => return (Node::new_boxed(value), Insertion::Added),
    };

    let insertion = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, insertion) = insert(node.left.take(), value);
            node.left = Some(left);
            insertion
        }
        Ordering::Greater => {
            let (right, insertion) = insert(node.right.take(), value);
            node.right = Some(right);
            insertion
        }
        Ordering::Equal => Insertion::Present,
    };

    match insertion {
        Insertion::Added => (rebalance(node), insertion),
        Insertion::Present => (node, insertion),
    }
}

fn contains<T: Ord>(link: &Link<T>, value: &T) -> bool {
    match link {
        None => false,
        Some(n) => match value.cmp(&n.value) {
            Ordering::Less => contains(&n.left, value),
            Ordering::Equal => true,
            Ordering::Greater => contains(&n.right, value),
        },
    }
}

/// Deletes `value` from the subtree at `link`, returning the new subtree root and the removed
/// value, if any.
fn delete<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, Option<T>) {
    let mut node = match link {
        Some(n) => n,
        None => return (None, None),
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = delete(node.left.take(), value);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = delete(node.right.take(), value);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(node.value)),
            (Some(child), None) | (None, Some(child)) => return (Some(child), Some(node.value)),

            // With two children the in-order successor (the smallest value of the right
            // subtree) moves up into this node.
            (Some(left), Some(right)) => {
                let (successor, right) = delete_min(right);
                node.left = Some(left);
                node.right = right;
                Some(mem::replace(&mut node.value, successor))
            }
        },
    };

    match removed {
        Some(_) => (Some(rebalance(node)), removed),
        None => (Some(node), None),
    }
}

/// Removes the leftmost node of the subtree. Returns its value and the rebalanced remainder.
fn delete_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, left) = delete_min(left);
            node.left = left;
            (min, Some(rebalance(node)))
        }
    }
}
