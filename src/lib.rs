//! This crate exposes an unbalanced Binary Search Tree (BST) for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and owns zero, one, or two child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` comparisons (where `height` is
//! the longest path from the root `Node` to a leaf `Node`). The tree in this
//! crate never rebalances itself, so inserting sorted input produces a chain
//! whose height equals its node count. For that reason every recursive
//! mutation has an iterative twin (see [`OrderedTree::insert_iterative`]) and
//! dropping a tree never recurses.
//!
//! Besides the usual set operations the tree supports structural queries:
//! counting nodes, checking fullness, comparing shapes with another tree,
//! deep copies, and left/right mirroring.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{EmptyTreeError, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! assert_eq!(tree.find_min(), Err(EmptyTreeError));
//!
//! for x in [5, 3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.in_order_traversal(), vec![&1, &3, &4, &5, &8]);
//! assert_eq!(tree.breadth_first_traversal(), vec![&5, &3, &8, &1, &4]);
//!
//! let mirrored = tree.mirror();
//! assert!(tree.is_mirror(&mirrored));
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod ordered;


pub use error::EmptyTreeError;
pub use ordered::OrderedTree;
