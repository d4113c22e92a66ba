//! Loop-based versions of the mutations and lookup. They walk child slots with a
//! cursor instead of recursing, so their stack use doesn't grow with the height of the
//! tree. For the same sequence of operations they build exactly the same trees as
//! [`insert`][OrderedTree::insert] and [`remove`][OrderedTree::remove].

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

use super::{OrderedTree, Subtree};

impl<T> OrderedTree<T> {
    /// Same as [`insert`][Self::insert] without recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// // Sorted input builds a chain as tall as the tree is large.
    /// let mut tree = OrderedTree::new();
    /// for x in 0..2_000 {
    ///     tree.insert_iterative(x);
    /// }
    ///
    /// assert_eq!(tree.height(), 1_999);
    /// assert!(tree.contains_iterative(&1_999));
    /// ```
    pub fn insert_iterative(&mut self, element: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Subtree::Node(n) = slot {
            slot = match element.cmp(&n.element) {
                Ordering::Less => &mut n.left,
                Ordering::Equal => return,
                Ordering::Greater => &mut n.right,
            };
        }
        *slot = Subtree::leaf_node(element);
    }

    /// Same as [`remove`][Self::remove] without recursion.
    pub fn remove_iterative(&mut self, element: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot {
                Subtree::Leaf => return None,
                Subtree::Node(n) => element.cmp(&n.element),
            };
            slot = match (ordering, slot) {
                (Ordering::Equal, found) => return found.unlink(),
                (Ordering::Less, Subtree::Node(n)) => &mut n.left,
                (Ordering::Greater, Subtree::Node(n)) => &mut n.right,
                (_, Subtree::Leaf) => return None,
            };
        }
    }

    /// Same as [`contains`][Self::contains] without recursion.
    pub fn contains_iterative(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let mut current = &self.root;
        while let Subtree::Node(n) = current {
            current = match element.cmp(&n.element) {
                Ordering::Less => &n.left,
                Ordering::Equal => return true,
                Ordering::Greater => &n.right,
            };
        }
        false
    }
}

impl<T> Subtree<T> {
    /// Removes the node occupying this slot, returning its element. A node with two
    /// children takes over its in-order successor's element instead of being unlinked.
    fn unlink(&mut self) -> Option<T> {
        let mut n = match mem::take(self) {
            Self::Leaf => return None,
            Self::Node(n) => n,
        };

        let (removed, replacement) = match (mem::take(&mut n.left), mem::take(&mut n.right)) {
            (Self::Leaf, child) => (n.element, child),
            (left, mut right) => match right.take_min() {
                Some(successor) => {
                    trace!("promoting in-order successor into a node with two children");
                    let removed = mem::replace(&mut n.element, successor);
                    n.left = left;
                    n.right = right;
                    (removed, Self::Node(n))
                }
                None => (n.element, left),
            },
        };

        *self = replacement;
        Some(removed)
    }

    /// Unlinks the leftmost node under this slot and returns its element.
    fn take_min(&mut self) -> Option<T> {
        let mut slot = self;
        loop {
            let has_left = match slot {
                Self::Leaf => return None,
                Self::Node(n) => !n.left.is_leaf(),
            };
            if !has_left {
                break;
            }
            slot = match slot {
                Self::Node(n) => &mut n.left,
                Self::Leaf => return None,
            };
        }

        match mem::take(slot) {
            Self::Leaf => None,
            Self::Node(n) => {
                let n = *n;
                *slot = n.right;
                Some(n.element)
            }
        }
    }
}
