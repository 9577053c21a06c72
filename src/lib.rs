//! This crate exposes a Binary Search Tree (BST) of numeric values that
//! is height-balanced when built and re-balanced only on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have
//!    a value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have
//!    a value greater than its own value.
//!
//! Searching such a tree takes `O(height)`, so keeping the height near
//! `lg N` matters. This crate's [`Tree`] does that by construction:
//! [`Tree::build`] always produces a minimal-height tree, and a tree that
//! later insertions and deletions have skewed can be restored with
//! [`Tree::rebalance`]. In between those two points the tree is an
//! ordinary, possibly unbalanced BST; mutations never rotate or rebuild
//! on their own.
//!
//! A balanced tree here means the full recursive property: *every* node's
//! left and right subtree heights differ by at most 1, which is what
//! [`Tree::is_balanced`] reports.

#![deny(missing_docs)]

pub mod tree;

pub use tree::{Node, Tree};

/// The totally-ordered numeric value type stored by [`Tree`].
pub type Value = i64;
