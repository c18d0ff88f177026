//! This crate exposes an ordered, comparison-based Binary Search Tree (BST)
//! storing unique elements.
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively using the notion of a `Node`. A `Node`
//! stores one element and sometimes has child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! These invariants make searching for an element take `O(height)` (where
//! `height` is the longest path from the root `Node` to a leaf `Node`), and
//! they make inorder traversal - left subtree, then the subtree root, then
//! the right subtree - yield the elements in ascending sorted order.
//!
//! The tree here does no rebalancing, so its height is set entirely by the
//! insertion order: random orders tend to stay near `O(lg N)` levels while
//! sorted input degrades the shape to a list. Alongside inorder traversal
//! the tree offers preorder, postorder, and breadth-first (level-order)
//! traversals, plus structural queries for its size, height, and the depth
//! of a stored element.

#![deny(missing_docs)]

pub mod error;
pub mod tree;

pub use crate::error::TreeError;
pub use crate::tree::Tree;

#[cfg(test)]
pub(crate) mod test;
