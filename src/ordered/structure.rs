//! Queries and transforms that look at the shape of the node graph rather than at the
//! ordering of its elements. All of them recurse once per level.

use super::{Node, OrderedTree, Subtree};

impl<T> OrderedTree<T> {
    /// Counts the nodes in the tree. An empty tree has zero nodes.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Returns `true` if no node has exactly one child. An empty tree has no such node
    /// so it counts as full.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.is_full());
    ///
    /// tree.extend(vec![2, 1]);
    /// assert!(!tree.is_full());
    ///
    /// tree.insert(3);
    /// assert!(tree.is_full());
    /// ```
    pub fn is_full(&self) -> bool {
        self.root.is_full()
    }

    /// Returns `true` if both trees have the same shape, ignoring the elements stored in
    /// the nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let small: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let large: OrderedTree<_> = vec![20, 10, 30].into_iter().collect();
    ///
    /// assert!(small.compare_structure(&large));
    /// assert!(!small.compare_structure(&OrderedTree::new()));
    /// ```
    pub fn compare_structure(&self, other: &Self) -> bool {
        self.root.same_shape(&other.root)
    }

    /// Returns `true` if both trees have the same shape and every pair of corresponding
    /// nodes holds equal elements.
    pub fn structural_equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.root.structural_equals(&other.root)
    }

    /// Builds an independent deep copy of this tree. The copy shares no nodes with the
    /// original, so mutating one never affects the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let mut copy = tree.copy();
    /// assert!(tree.structural_equals(&copy));
    ///
    /// copy.insert(4);
    /// assert_eq!(tree.node_count(), 3);
    /// assert_eq!(copy.node_count(), 4);
    /// ```
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: self.root.copy(),
        }
    }

    /// Builds a new tree that is the left/right reflection of this one.
    ///
    /// **Note** The result is a structural transform and is generally *not* a valid BST
    /// under `T`'s ordering: its in-order traversal is descending. Searching or
    /// mutating it through the ordered operations is meaningless.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let mirrored = tree.mirror();
    ///
    /// assert_eq!(mirrored.in_order_traversal(), vec![&3, &2, &1]);
    /// assert!(mirrored.mirror().structural_equals(&tree));
    /// ```
    pub fn mirror(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: self.root.mirror(),
        }
    }

    /// Returns `true` if `other` is the left/right reflection of this tree with equal
    /// elements in reflected positions. Two empty trees mirror each other.
    pub fn is_mirror(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.root.mirrors(&other.root)
    }
}

impl<T> Subtree<T> {
    fn node_count(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.node_count() + n.right.node_count(),
        }
    }

    fn is_full(&self) -> bool {
        match self {
            Self::Leaf => true,
            Self::Node(n) => match (&n.left, &n.right) {
                (Self::Leaf, Self::Leaf) => true,
                (Self::Node(_), Self::Node(_)) => n.left.is_full() && n.right.is_full(),
                _ => false,
            },
        }
    }

    fn same_shape(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf, Self::Leaf) => true,
            (Self::Node(a), Self::Node(b)) => {
                a.left.same_shape(&b.left) && a.right.same_shape(&b.right)
            }
            _ => false,
        }
    }

    fn structural_equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Self::Leaf, Self::Leaf) => true,
            (Self::Node(a), Self::Node(b)) => {
                a.element == b.element
                    && a.left.structural_equals(&b.left)
                    && a.right.structural_equals(&b.right)
            }
            _ => false,
        }
    }

    fn copy(&self) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(Box::new(Node {
                element: n.element.clone(),
                left: n.left.copy(),
                right: n.right.copy(),
            })),
        }
    }

    fn mirror(&self) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(Box::new(Node {
                element: n.element.clone(),
                left: n.right.mirror(),
                right: n.left.mirror(),
            })),
        }
    }

    fn mirrors(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Self::Leaf, Self::Leaf) => true,
            (Self::Node(a), Self::Node(b)) => {
                a.element == b.element && a.left.mirrors(&b.right) && a.right.mirrors(&b.left)
            }
            _ => false,
        }
    }
}
