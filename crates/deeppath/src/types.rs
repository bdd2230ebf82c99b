//! Path command and repetition reference types.

/// One traversal command compiled from a path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathCommand {
    /// Descend into a mapping by key: `name`
    DictKey(String),
    /// Descend into a sequence by position: `[0]`, `[-1]`
    ListIndex(isize),
    /// Fan out over every value of a mapping: `*`
    DictFlat,
    /// Fan out over every element of a sequence: `[*]`
    ListFlat,
}

impl PathCommand {
    /// Whether this command widens the batch (wildcard fan-out).
    pub fn is_flat(&self) -> bool {
        matches!(self, PathCommand::DictFlat | PathCommand::ListFlat)
    }
}

/// A sequence index attached to a mapping key, parsed from a single
/// segment of the form `name[2]` or `*[0]`.
///
/// Used by the strict reader and the writer. The compiled-command path
/// splits the same syntax into a [`PathCommand::DictKey`] followed by a
/// [`PathCommand::ListIndex`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition<'a> {
    /// The key part: one or more word characters, or `*`.
    pub key: &'a str,
    /// The bracketed index, possibly negative.
    pub index: isize,
}
