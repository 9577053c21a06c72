//! A binary search tree of numeric values that is height-balanced when
//! built and can be re-balanced on demand. Mutations (`insert`/`delete`)
//! deliberately do *not* re-balance; after a run of mutations the caller
//! decides when to pay for [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::build(&[5, 3, 8, 1, 4, 7, 9]);
//!
//! // Built trees are minimal-height: the middle value is the root.
//! assert_eq!(tree.root().map(|n| n.value()), Some(5));
//! assert!(tree.is_balanced());
//!
//! // In-order traversal of a BST is ascending.
//! assert_eq!(tree.in_order(), vec![1, 3, 4, 5, 7, 8, 9]);
//!
//! // Mutations keep the ordering invariant but may lose balance.
//! for v in 10..15 {
//!     tree.insert(v);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::Value;

type Link = Option<Box<Node>>;

/// A node of a [`Tree`]. Owns its two children exclusively; there are no
/// parent pointers and no sharing, so the structure is a strict tree.
#[derive(Clone, Debug)]
pub struct Node {
    value: Value,
    left: Link,
    right: Link,
}

impl Node {
    fn new(value: Value) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> Value {
        self.value
    }

    /// This node's left child, holding only smaller values.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// This node's right child, holding only larger values.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The number of edges on the longest downward path from this node to
    /// a leaf. A leaf has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        height_of(&self.left).max(height_of(&self.right)) + 1
    }

    /// Breadth-first traversal of the subtree rooted at this node: a node
    /// is visited before its children, children left before right.
    pub fn level_order(&self) -> Vec<Value> {
        let mut out = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(self);
        while let Some(node) = queue.pop_front() {
            out.push(node.value);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
        out
    }

    /// Depth-first traversal, node before children. Iterative: the right
    /// child is pushed before the left so the left side pops first.
    pub fn pre_order(&self) -> Vec<Value> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.value);
            if let Some(right) = node.right() {
                stack.push(right);
            }
            if let Some(left) = node.left() {
                stack.push(left);
            }
        }
        out
    }

    /// Depth-first traversal, left subtree then node then right subtree.
    /// For any subtree of a BST this yields ascending order.
    pub fn in_order(&self) -> Vec<Value> {
        let mut out = Vec::new();
        self.in_order_into(&mut out);
        out
    }

    fn in_order_into(&self, out: &mut Vec<Value>) {
        if let Some(left) = self.left() {
            left.in_order_into(out);
        }
        out.push(self.value);
        if let Some(right) = self.right() {
            right.in_order_into(out);
        }
    }

    /// Depth-first traversal, both subtrees before the node.
    pub fn post_order(&self) -> Vec<Value> {
        let mut out = Vec::new();
        self.post_order_into(&mut out);
        out
    }

    fn post_order_into(&self, out: &mut Vec<Value>) {
        if let Some(left) = self.left() {
            left.post_order_into(out);
        }
        if let Some(right) = self.right() {
            right.post_order_into(out);
        }
        out.push(self.value);
    }
}

/// Height of a possibly-empty subtree. An empty subtree has height -1 so
/// that a leaf comes out at 0.
fn height_of(link: &Link) -> isize {
    link.as_deref().map_or(-1, Node::height)
}

/// Height of a subtree if every node in it satisfies the balance property
/// (child heights differ by at most 1), `None` as soon as one doesn't.
/// Single pass, short-circuits on the first violation.
fn balanced_height(link: &Link) -> Option<isize> {
    match link.as_deref() {
        None => Some(-1),
        Some(node) => {
            let left = balanced_height(&node.left)?;
            let right = balanced_height(&node.right)?;
            if (left - right).abs() <= 1 {
                Some(left.max(right) + 1)
            } else {
                None
            }
        }
    }
}

/// A Binary Search Tree of [`Value`]s. This can be used for inserting,
/// finding, and deleting values, for the four classic traversals, and for
/// height/depth/balance queries.
///
/// Two invariants hold after every public operation:
///
/// 1. For every node, all values in its left subtree are strictly less
///    than the node's value and all values in its right subtree are
///    strictly greater.
/// 2. No value is stored twice. [`Tree::build`] deduplicates its input and
///    inserting a present value is a no-op.
///
/// Balance is *not* an invariant: it holds right after [`Tree::build`] or
/// [`Tree::rebalance`] and can be lost by any mutation in between.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    root: Link,
    /// The deduplicated, ascending sequence the tree was last built from.
    /// Not kept in sync by `insert`/`delete`; refreshed by `rebalance`.
    sorted_values: Vec<Value>,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a minimal-height tree from `values`. Duplicates are dropped
    /// and the input order is irrelevant. An empty input yields an empty
    /// tree.
    ///
    /// The resulting tree is balanced at every node: the sub-root of each
    /// sorted sub-slice is its middle element (the lower of the two
    /// middles on even lengths), so sibling heights never differ by more
    /// than 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(&[3, 1, 3, 2, 1]);
    ///
    /// assert_eq!(tree.in_order(), vec![1, 2, 3]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn build(values: &[Value]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let root = Self::build_balanced(&sorted);
        Self {
            root,
            sorted_values: sorted,
        }
    }

    /// Recursive half of [`Tree::build`]. `values` must be sorted and
    /// deduplicated.
    fn build_balanced(values: &[Value]) -> Link {
        if values.is_empty() {
            return None;
        }
        let mid = (values.len() - 1) / 2;
        Some(Box::new(Node {
            value: values[mid],
            left: Self::build_balanced(&values[..mid]),
            right: Self::build_balanced(&values[mid + 1..]),
        }))
    }

    /// The top node of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// The deduplicated ascending sequence this tree was last built from
    /// (by [`Tree::build`] or [`Tree::rebalance`]). Later `insert`/`delete`
    /// calls do not update it.
    pub fn sorted_values(&self) -> &[Value] {
        &self.sorted_values
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        fn count(link: &Link) -> usize {
            match link.as_deref() {
                None => 0,
                Some(n) => 1 + count(&n.left) + count(&n.right),
            }
        }
        count(&self.root)
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree, descending from the root and
    /// attaching a new leaf at the missing slot. Inserting a value that is
    /// already present is a no-op. Does not rebalance.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2); // already present, nothing changes
    ///
    /// assert_eq!(tree.in_order(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, value: Value) {
        Self::insert_node(&mut self.root, value);
    }

    fn insert_node(link: &mut Link, value: Value) {
        match link {
            None => *link = Some(Box::new(Node::new(value))),
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_node(&mut node.left, value),
                Ordering::Equal => {}
                Ordering::Greater => Self::insert_node(&mut node.right, value),
            },
        }
    }

    /// Deletes `value` from the tree. Deleting a value that is not present
    /// is a no-op. Does not rebalance.
    ///
    /// A node with two children is not unlinked: its value is overwritten
    /// with its in-order successor (the minimum of its right subtree) and
    /// the successor is deleted from the right subtree instead. That
    /// recursion terminates because the left-most node of a subtree has at
    /// most one child.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::build(&[1, 2, 3]);
    ///
    /// tree.delete(2);
    /// tree.delete(42); // absent, nothing changes
    ///
    /// assert_eq!(tree.in_order(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, value: Value) {
        self.root = Self::delete_node(self.root.take(), value);
    }

    fn delete_node(link: Link, value: Value) -> Link {
        let mut node = link?;
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::delete_node(node.left.take(), value);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::delete_node(node.right.take(), value);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (left, Some(right)) => {
                    let successor = Self::min_value(&right);
                    node.value = successor;
                    node.left = left;
                    node.right = Self::delete_node(Some(right), successor);
                    Some(node)
                }
            },
        }
    }

    /// The smallest value in the subtree rooted at `node`: follow left
    /// children until there are none.
    fn min_value(node: &Node) -> Value {
        let mut current = node;
        while let Some(left) = current.left() {
            current = left;
        }
        current.value
    }

    /// Finds the node holding `value`, or `None` if the value is absent
    /// (including from an empty tree).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3]);
    ///
    /// assert_eq!(tree.find(3).map(|n| n.value()), Some(3));
    /// assert!(tree.find(42).is_none());
    /// ```
    pub fn find(&self, value: Value) -> Option<&Node> {
        Self::find_node(&self.root, value)
    }

    fn find_node(link: &Link, value: Value) -> Option<&Node> {
        let node = link.as_deref()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::find_node(&node.left, value),
            Ordering::Equal => Some(node),
            Ordering::Greater => Self::find_node(&node.right, value),
        }
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: Value) -> bool {
        self.find(value).is_some()
    }

    /// Breadth-first traversal from the root. Empty tree yields an empty
    /// vec. See [`Node::level_order`] to start below the root.
    pub fn level_order(&self) -> Vec<Value> {
        self.root().map_or_else(Vec::new, Node::level_order)
    }

    /// Depth-first pre-order traversal from the root (node before
    /// children).
    pub fn pre_order(&self) -> Vec<Value> {
        self.root().map_or_else(Vec::new, Node::pre_order)
    }

    /// Depth-first in-order traversal from the root. Always ascending for
    /// this tree.
    pub fn in_order(&self) -> Vec<Value> {
        self.root().map_or_else(Vec::new, Node::in_order)
    }

    /// Depth-first post-order traversal from the root (children before
    /// node).
    pub fn post_order(&self) -> Vec<Value> {
        self.root().map_or_else(Vec::new, Node::post_order)
    }

    /// The height of the whole tree: -1 when empty, 0 for a single node,
    /// otherwise the longest root-to-leaf edge count.
    pub fn height(&self) -> isize {
        height_of(&self.root)
    }

    /// The height of the node holding `value`, resolved via [`Tree::find`].
    /// `None` when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3]);
    ///
    /// assert_eq!(tree.height_of_value(2), Some(1));
    /// assert_eq!(tree.height_of_value(1), Some(0));
    /// assert_eq!(tree.height_of_value(42), None);
    /// ```
    pub fn height_of_value(&self, value: Value) -> Option<isize> {
        self.find(value).map(Node::height)
    }

    /// The number of edges from the root to the node holding `value`, or
    /// `None` when the value is absent. The walk stops at the first empty
    /// branch, so an absent value fails fast instead of descending
    /// forever.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(&[1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(2), Some(0));
    /// assert_eq!(tree.depth(3), Some(1));
    /// assert_eq!(tree.depth(42), None);
    /// ```
    pub fn depth(&self, value: Value) -> Option<usize> {
        let mut edges = 0;
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Equal => return Some(edges),
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
            }
            edges += 1;
        }
        None
    }

    /// Whether every node in the tree satisfies the balance property: the
    /// heights of its left and right subtrees differ by at most 1. An
    /// empty tree is balanced (both child heights are -1).
    ///
    /// This is the full recursive definition, not just a check of the
    /// root's children.
    pub fn is_balanced(&self) -> bool {
        balanced_height(&self.root).is_some()
    }

    /// Rebuilds the tree at minimal height from its own in-order sequence
    /// (already ascending and duplicate-free), restoring balance no matter
    /// how skewed prior mutations left it. Also refreshes
    /// [`Tree::sorted_values`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in 0..10 {
    ///     tree.insert(v); // ascending inserts degenerate into a list
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    ///
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.in_order(), (0..10).collect::<Vec<_>>());
    /// ```
    pub fn rebalance(&mut self) {
        let sorted = self.in_order();
        self.root = Self::build_balanced(&sorted);
        self.sorted_values = sorted;
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and an ordered set.
    /// This way we can ensure that after a random smattering of inserts,
    /// deletes, and rebalances we have the same values in both.
    fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<Value>) {
        for op in ops {
            match *op {
                Op::Insert(v) => {
                    tree.insert(Value::from(v));
                    set.insert(Value::from(v));
                }
                Op::Delete(v) => {
                    tree.delete(Value::from(v));
                    set.remove(&Value::from(v));
                }
                Op::Rebalance => tree.rebalance(),
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_matches_ordered_set(ops: Vec<Op>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            let expected: Vec<Value> = set.iter().copied().collect();
            tree.in_order() == expected && set.iter().all(|v| tree.contains(*v))
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_rebalance_always_restores_balance(ops: Vec<Op>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            let before = tree.in_order();
            tree.rebalance();
            tree.is_balanced() && tree.in_order() == before
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_depth_and_find_agree(ops: Vec<Op>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            (-128..128).all(|v| {
                let present = set.contains(&v);
                tree.find(v).is_some() == present && tree.depth(v).is_some() == present
            })
        }
    }
}
