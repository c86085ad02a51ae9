//! The owned building block of a [`Tree`][crate::Tree] and its height bookkeeping.

use std::cmp;

/// An owning, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one value and exclusively owns its (up to) two children.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

/// Gets the cached height of a slot, counting an empty slot as 0.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// `height(left) - height(right)` of the node in this slot, 0 when empty.
pub(crate) fn balance_factor<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Recomputes this node's height from its children's cached heights. Children must already be
    /// up to date.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    /// The leftmost node of this subtree, i.e. the one holding its smallest value.
    pub(crate) fn min_value_node(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// The rightmost node of this subtree, i.e. the one holding its largest value.
    pub(crate) fn max_value_node(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        current
    }
}
