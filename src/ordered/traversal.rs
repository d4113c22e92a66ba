//! Read-only walks over the tree. Each call collects references into a fresh `Vec`, so
//! a traversal can be repeated any number of times and never touches the tree itself.

use std::collections::VecDeque;

use super::{Node, OrderedTree, Subtree};

impl<T> OrderedTree<T> {
    /// Returns the elements in ascending order (left subtree, node, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 3, 1].into_iter().collect();
    /// assert_eq!(tree.in_order_traversal(), vec![&1, &2, &3]);
    /// ```
    pub fn in_order_traversal(&self) -> Vec<&T> {
        let mut elements = Vec::new();
        self.root.in_order(&mut elements);
        elements
    }

    /// Returns the elements level by level, starting from the root and going left to
    /// right within each level. An empty tree yields an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![5, 3, 8, 1].into_iter().collect();
    /// assert_eq!(tree.breadth_first_traversal(), vec![&5, &3, &8, &1]);
    /// ```
    pub fn breadth_first_traversal(&self) -> Vec<&T> {
        let mut elements = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root.node().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            elements.push(&node.element);
            queue.extend(node.children());
        }

        elements
    }

    /// Same visiting order as [`breadth_first_traversal`][Self::breadth_first_traversal],
    /// but the elements are grouped by depth. Each entry pairs a level (the root is
    /// level `0`) with that level's elements from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![5, 3, 8, 1].into_iter().collect();
    /// assert_eq!(
    ///     tree.leveled_traversal(),
    ///     vec![(0, vec![&5]), (1, vec![&3, &8]), (2, vec![&1])],
    /// );
    /// ```
    pub fn leveled_traversal(&self) -> Vec<(usize, Vec<&T>)> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root.node().into_iter().collect();

        while !queue.is_empty() {
            // Only the nodes queued before this level started belong to it.
            let width = queue.len();
            let mut elements = Vec::with_capacity(width);
            for _ in 0..width {
                if let Some(node) = queue.pop_front() {
                    elements.push(&node.element);
                    queue.extend(node.children());
                }
            }
            levels.push((levels.len(), elements));
        }

        levels
    }
}

impl<T> Subtree<T> {
    fn in_order<'a>(&'a self, elements: &mut Vec<&'a T>) {
        if let Self::Node(n) = self {
            n.left.in_order(elements);
            elements.push(&n.element);
            n.right.in_order(elements);
        }
    }
}

impl<T> Node<T> {
    /// The present children of this node, left before right.
    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left.node().into_iter().chain(self.right.node())
    }
}
