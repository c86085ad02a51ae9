//! Errors surfaced by [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// Returned by [`Tree::insert`][crate::Tree::insert] when the value is already present and the
/// tree rejects duplicates. The tree is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duplicate values are not allowed")]
pub struct DuplicateValueError;
