//! This crate provides an AVL tree: a self-balancing Binary Search Tree
//! storing a set of distinct, ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`).
//!
//! ## AVL balancing
//!
//! An AVL tree adds a third invariant: for every `Node`, the heights of its two
//! subtrees differ by at most one. Each `Node` caches its height, and after every
//! insert or delete the nodes on the path back to the root are repaired with
//! rotations. This keeps the height within `O(lg N)` where `N` is the number of
//! nodes in the tree.
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [10, 20, 30, 40, 50] {
//!     tree.insert(x).unwrap();
//! }
//!
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//!
//! let mut sorted = Vec::new();
//! tree.in_order(|x| sorted.push(*x));
//! assert_eq!(sorted, [10, 20, 30, 40, 50]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod config;
mod diagnostics;
pub mod display;
mod error;
mod node;
mod traversal;
mod tree;
mod util;

pub use config::DuplicatePolicy;
pub use error::DuplicateValueError;
pub use tree::Tree;
