//! Errors surfaced by [`OrderedTree`][crate::OrderedTree] queries.

use thiserror::Error;

/// Returned by [`find_min`][crate::OrderedTree::find_min] and
/// [`find_max`][crate::OrderedTree::find_max] when the tree has no nodes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the tree is empty")]
pub struct EmptyTreeError;
