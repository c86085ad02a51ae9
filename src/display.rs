//! Text rendering of a [`Tree`]. Values are produced by [`Tree::level_order`]; this module only
//! formats them.

use std::fmt;
use std::io;

use crate::tree::Tree;

/// Formats a tree as its level-order values separated by single spaces, or `Tree is empty.` when
/// there is nothing to show.
///
/// # Examples
///
/// ```
/// use avl::{display::LevelOrder, Tree};
///
/// let mut tree = Tree::new();
/// assert_eq!(LevelOrder(&tree).to_string(), "Tree is empty.");
///
/// for x in [1, 2, 3] {
///     tree.insert(x).unwrap();
/// }
/// assert_eq!(LevelOrder(&tree).to_string(), "2 1 3");
/// ```
pub struct LevelOrder<'a, T>(pub &'a Tree<T>);

impl<T: fmt::Display> fmt::Display for LevelOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("Tree is empty.");
        }

        let mut result = Ok(());
        let mut separator = "";
        self.0.level_order(|value| {
            if result.is_ok() {
                result = write!(f, "{}{}", separator, value);
                separator = " ";
            }
        });
        result
    }
}

/// Writes [`LevelOrder`] of `tree` to `out` as a single line.
///
/// # Examples
///
/// ```
/// use avl::{display, Tree};
///
/// let mut tree = Tree::new();
/// for x in [20, 25, 21, 100, 80] {
///     tree.insert(x).unwrap();
/// }
///
/// let mut out = Vec::new();
/// display::print_tree(&tree, &mut out).unwrap();
/// assert_eq!(out, b"21 20 80 25 100\n");
/// ```
pub fn print_tree<T, W>(tree: &Tree<T>, out: &mut W) -> io::Result<()>
where
    T: fmt::Display,
    W: io::Write + ?Sized,
{
    writeln!(out, "{}", LevelOrder(tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_message() {
        let tree: Tree<i32> = Tree::new();

        let mut out = Vec::new();
        print_tree(&tree, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Tree is empty.\n");
    }

    #[test]
    fn single_value_has_no_separator() {
        let mut tree = Tree::new();
        tree.insert("only").unwrap();

        assert_eq!(LevelOrder(&tree).to_string(), "only");
    }

    #[test]
    fn writes_level_by_level() {
        let mut tree = Tree::new();
        for x in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert(x).unwrap();
        }

        let mut out = Vec::new();
        print_tree(&tree, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "4 2 6 1 3 5 7\n");
    }
}
