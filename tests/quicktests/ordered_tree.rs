use unbalanced_bst::OrderedTree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut OrderedTree<T>, set: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

/// Same as [`do_ops`] but through the loop-based operations.
fn do_ops_iterative<T>(ops: &[Op<T>], bst: &mut OrderedTree<T>)
where
    T: Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(x) => bst.insert_iterative(x.clone()),
            Op::Remove(x) => {
                bst.remove_iterative(x);
            }
        }
    }
}

fn strictly_ascending<T: Ord>(xs: &[&T]) -> bool {
    xs.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set);
        set.iter().all(|x| tree.contains(x))
            && tree.node_count() == set.len()
            && strictly_ascending(&tree.in_order_traversal())
    }

    fn iterative_matches_recursive(ops: Vec<Op<i8>>) -> bool {
        let mut recursive = OrderedTree::new();
        let mut iterative = OrderedTree::new();

        do_ops(&ops, &mut recursive, &mut HashSet::new());
        do_ops_iterative(&ops, &mut iterative);
        recursive.structural_equals(&iterative)
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x) && !tree.contains_iterative(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }

    fn duplicate_insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: OrderedTree<_> = xs.into_iter().collect();
        tree.insert(x);
        let count = tree.node_count();
        let before: Vec<i8> = tree.in_order_traversal().into_iter().copied().collect();

        tree.insert(x);
        count == tree.node_count()
            && before.iter().collect::<Vec<_>>() == tree.in_order_traversal()
    }

    fn copy_is_independent(xs: Vec<i8>, extra: i8) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let before: Vec<i8> = tree.in_order_traversal().into_iter().copied().collect();
        let mut copy = tree.copy();
        let equal_before = tree.structural_equals(&copy);

        copy.insert(extra);
        copy.remove(&extra);
        copy.insert(extra.wrapping_add(1));
        equal_before
            && tree.node_count() == before.len()
            && before.iter().collect::<Vec<_>>() == tree.in_order_traversal()
    }

    fn double_mirror_restores(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();
        let mirrored = tree.mirror();

        tree.is_mirror(&mirrored)
            && mirrored.is_mirror(&tree)
            && mirrored.mirror().structural_equals(&tree)
    }

    fn mirror_reverses_in_order(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();
        let mut reversed = tree.in_order_traversal();
        reversed.reverse();

        tree.mirror().in_order_traversal() == reversed
    }

    fn leveled_flattens_to_breadth_first(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();
        let levels = tree.leveled_traversal();
        let flattened: Vec<&i8> = levels
            .iter()
            .flat_map(|(_, level)| level.iter().copied())
            .collect();

        flattened == tree.breadth_first_traversal()
            && levels.iter().enumerate().all(|(i, (level, _))| i == *level)
            && levels.len() as isize == tree.height() + 1
    }
}
