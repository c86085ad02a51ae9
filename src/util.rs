/// What happened to a value handed to the recursive insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Insertion {
    /// A new leaf was created for the value.
    Added,
    /// An equal value is already stored. Nothing changed and the new value was dropped.
    Present,
}
