use std::collections::BTreeSet;

use ordered_tree::{Tree, Value};

quickcheck::quickcheck! {
    /// The in-order traversal of a built tree is the deduplicated
    /// ascending sort of whatever input it was built from.
    fn build_in_order_is_sorted_dedup(xs: Vec<Value>) -> bool {
        let tree = Tree::build(&xs);
        let expected: Vec<Value> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        tree.in_order() == expected && tree.sorted_values() == expected.as_slice()
    }
}

quickcheck::quickcheck! {
    /// Built trees are balanced at every node, whatever the input.
    fn build_is_balanced(xs: Vec<Value>) -> bool {
        Tree::build(&xs).is_balanced()
    }
}

quickcheck::quickcheck! {
    /// Everything inserted can be found, and each find returns the node
    /// holding the exact value.
    fn insert_then_find(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(Value::from(*x));
        }

        xs.iter()
            .all(|x| tree.find(Value::from(*x)).map(|n| n.value()) == Some(Value::from(*x)))
    }
}

quickcheck::quickcheck! {
    /// Values that were never inserted are not found.
    fn find_misses_absent_values(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(Value::from(*x));
        }
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(Value::from(*x)).is_none())
    }
}

quickcheck::quickcheck! {
    /// After a batch of deletions, deleted values are gone, the rest
    /// remain, and BST ordering still holds.
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(Value::from(*x));
        }
        for delete in &deletes {
            tree.delete(Value::from(*delete));
        }

        let deleted: BTreeSet<_> = deletes.iter().copied().collect();
        let still_present: BTreeSet<_> = xs
            .iter()
            .copied()
            .filter(|x| !deleted.contains(x))
            .collect();

        let in_order = tree.in_order();
        let ascending = in_order.windows(2).all(|w| w[0] < w[1]);

        ascending
            && deleted.iter().all(|x| tree.find(Value::from(*x)).is_none())
            && still_present
                .iter()
                .all(|x| tree.find(Value::from(*x)).is_some())
    }
}

quickcheck::quickcheck! {
    /// Rebalancing any tree restores full balance without touching the
    /// stored values.
    fn rebalance_preserves_values(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(Value::from(*x));
        }
        for delete in &deletes {
            tree.delete(Value::from(*delete));
        }
        let before = tree.in_order();

        tree.rebalance();

        tree.is_balanced() && tree.in_order() == before
    }
}
