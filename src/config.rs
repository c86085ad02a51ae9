//! Construction-time settings for a [`Tree`][crate::Tree].

/// What [`Tree::insert`][crate::Tree::insert] does when the value is already stored.
///
/// # Examples
///
/// ```
/// use avl::{DuplicatePolicy, Tree};
///
/// let mut strict = Tree::new();
/// strict.insert(1).unwrap();
/// assert!(strict.insert(1).is_err());
///
/// let mut lenient = Tree::with_policy(DuplicatePolicy::Ignore);
/// lenient.insert(1).unwrap();
/// assert!(lenient.insert(1).is_ok());
/// assert_eq!(lenient.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`DuplicateValueError`][crate::DuplicateValueError].
    #[default]
    Reject,
    /// Keep the stored value and report success.
    Ignore,
}
