//! An unbalanced BST owning its nodes through plain `Box`es. Each node is owned by
//! exactly one child slot of its parent (or by the tree's root slot) and has no
//! pointer back to that parent.
//!
//! Mutations are written the way one would in a functional language: the recursive
//! step takes ownership of a subtree and hands back whatever should now occupy that
//! slot. No rebalancing ever happens.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting an equal element is a no-op.
//! tree.insert(1);
//! assert_eq!(tree.node_count(), 1);
//!
//! // Removing an element hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

use crate::error::EmptyTreeError;

mod iterative;
mod structure;
mod traversal;

/// An unbalanced Binary Search Tree of unique elements. Elements are ordered by their
/// [`Ord`] implementation and an element equal to one already present is never stored
/// twice.
pub struct OrderedTree<T> {
    root: Subtree<T>,
}

/// A child slot: either empty or owning a [`Node`].
enum Subtree<T> {
    Leaf,
    Node(Box<Node<T>>),
}

struct Node<T> {
    element: T,
    left: Subtree<T>,
    right: Subtree<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.make_empty();
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> PartialEq for OrderedTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.structural_equals(other)
    }
}

impl<T> Eq for OrderedTree<T> where T: Eq {}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root)
            .finish()
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: Subtree::Leaf,
        }
    }

    /// Inserts `element` unless an equal element is already stored, in which case
    /// the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.in_order_traversal(), vec![&1, &2]);
    /// ```
    pub fn insert(&mut self, element: T)
    where
        T: Ord,
    {
        self.root = mem::take(&mut self.root).insert(element);
    }

    /// Removes the element equal to `element` and returns it. If the tree holds no
    /// such element nothing happens and `None` is returned.
    ///
    /// A node with two children takes over the smallest element of its right subtree,
    /// which is then unlinked from that subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.breadth_first_traversal(), vec![&3, &1]);
    /// ```
    pub fn remove(&mut self, element: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = mem::take(&mut self.root).remove(element);
        self.root = root;
        removed
    }

    /// Returns whether an element equal to `element` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        self.root.contains(element)
    }

    /// Returns the smallest element, or [`EmptyTreeError`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{EmptyTreeError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.find_min(), Err(EmptyTreeError));
    ///
    /// tree.extend(vec![3, 1, 2]);
    /// assert_eq!(tree.find_min(), Ok(&1));
    /// ```
    pub fn find_min(&self) -> Result<&T, EmptyTreeError> {
        match self.root.node() {
            Some(root) => Ok(&root.leftmost().element),
            None => {
                debug!("find_min called on an empty tree");
                Err(EmptyTreeError)
            }
        }
    }

    /// Returns the largest element, or [`EmptyTreeError`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{EmptyTreeError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.find_max(), Err(EmptyTreeError));
    ///
    /// tree.extend(vec![3, 1, 2]);
    /// assert_eq!(tree.find_max(), Ok(&3));
    /// ```
    pub fn find_max(&self) -> Result<&T, EmptyTreeError> {
        match self.root.node() {
            Some(root) => Ok(&root.rightmost().element),
            None => {
                debug!("find_max called on an empty tree");
                Err(EmptyTreeError)
            }
        }
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Discards every node of the tree.
    ///
    /// Nodes are released from an explicit work list, so even a tree built from sorted
    /// input (a single long chain) is dropped without recursing once per level.
    pub fn make_empty(&mut self) {
        let mut pending = vec![mem::take(&mut self.root)];
        let mut released = 0usize;
        while let Some(subtree) = pending.pop() {
            if let Subtree::Node(mut node) = subtree {
                pending.push(mem::take(&mut node.left));
                pending.push(mem::take(&mut node.right));
                released += 1;
            }
        }

        if released > 0 {
            trace!(released, "released tree nodes");
        }
    }

    /// Gets the height of this tree: `-1` for an empty tree, `0` for a lone root, and
    /// one more than the taller child's height otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend(vec![1, 2, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        self.root.height()
    }
}

impl<T> Default for Subtree<T> {
    fn default() -> Self {
        Self::Leaf
    }
}

impl<T> fmt::Debug for Subtree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("Leaf"),
            Self::Node(n) => f
                .debug_struct("Node")
                .field("element", &n.element)
                .field("left", &n.left)
                .field("right", &n.right)
                .finish(),
        }
    }
}

impl<T> Subtree<T> {
    fn leaf_node(element: T) -> Self {
        Self::Node(Box::new(Node {
            element,
            left: Self::Leaf,
            right: Self::Leaf,
        }))
    }

    fn node(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&**n),
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    fn height(&self) -> isize {
        match self {
            Self::Leaf => -1,
            Self::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    fn insert(self, element: T) -> Self
    where
        T: Ord,
    {
        match self {
            Self::Leaf => Self::leaf_node(element),
            Self::Node(mut n) => {
                match element.cmp(&n.element) {
                    Ordering::Less => n.left = mem::take(&mut n.left).insert(element),
                    Ordering::Equal => {}
                    Ordering::Greater => n.right = mem::take(&mut n.right).insert(element),
                }
                Self::Node(n)
            }
        }
    }

    /// Returns what should replace this subtree after removing `element`, along with
    /// the removed element if there was one.
    fn remove(self, element: &T) -> (Self, Option<T>)
    where
        T: Ord,
    {
        let mut n = match self {
            Self::Leaf => return (Self::Leaf, None),
            Self::Node(n) => n,
        };

        match element.cmp(&n.element) {
            Ordering::Less => {
                let (left, removed) = mem::take(&mut n.left).remove(element);
                n.left = left;
                (Self::Node(n), removed)
            }
            Ordering::Greater => {
                let (right, removed) = mem::take(&mut n.right).remove(element);
                n.right = right;
                (Self::Node(n), removed)
            }
            Ordering::Equal => match (mem::take(&mut n.left), mem::take(&mut n.right)) {
                (Self::Leaf, child) | (child, Self::Leaf) => (child, Some(n.element)),
                (left, Self::Node(right)) => {
                    trace!("promoting in-order successor into a node with two children");
                    let (successor, right) = right.remove_min();
                    let removed = mem::replace(&mut n.element, successor);
                    n.left = left;
                    n.right = right;
                    (Self::Node(n), Some(removed))
                }
            },
        }
    }

    fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        match self {
            Self::Leaf => false,
            Self::Node(n) => match element.cmp(&n.element) {
                Ordering::Less => n.left.contains(element),
                Ordering::Equal => true,
                Ordering::Greater => n.right.contains(element),
            },
        }
    }
}

impl<T> Node<T> {
    fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Subtree::Node(left) = &current.left {
            current = &**left;
        }
        current
    }

    fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Subtree::Node(right) = &current.right {
            current = &**right;
        }
        current
    }

    /// Unlinks the smallest node of the subtree rooted here. Returns its element and
    /// whatever should now occupy this node's slot.
    fn remove_min(mut self: Box<Self>) -> (T, Subtree<T>) {
        match mem::take(&mut self.left) {
            Subtree::Leaf => {
                let Node { element, right, .. } = *self;
                (element, right)
            }
            Subtree::Node(left) => {
                let (min, left) = left.remove_min();
                self.left = left;
                (min, Subtree::Node(self))
            }
        }
    }
}
