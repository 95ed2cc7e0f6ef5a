//! This crate exposes a Binary Search Tree with lazy deletion.
//!
//! Every element sits in a `Node` whose left subtree holds only smaller
//! elements and whose right subtree holds only larger ones, so a lookup walks
//! a single path from the root.
//!
//! ## Lazy deletion
//!
//! A [`LazyTree`] never unlinks a `Node`. Removing a value flags its `Node`
//! as deleted so that searches and soft traversals skip it, but the `Node`
//! keeps its place and the ordering keeps holding for every `Node`,
//! deleted or not. Inserting an equal value later clears the flag again
//! rather than adding a second `Node`. Only [`LazyTree::clear`] gives the
//! memory back.
//!
//! Because of this the tree keeps two sizes: the soft size ([`LazyTree::size`])
//! counts live values and the hard size ([`LazyTree::size_hard`]) counts every
//! `Node` in the tree.
//!
//! ```
//! use lazy_bst::LazyTree;
//!
//! let mut tree: LazyTree<_> = [5, 3, 8, 1].into_iter().collect();
//! tree.remove(&3);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 5, 8]);
//! assert_eq!(tree.iter_hard().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
//! ```
//!
//! The tree does not rebalance. Inserting sorted values produces a tree as
//! tall as it is large, which the iterators, `Clone` and `Drop` cope with by
//! walking it with an explicit stack.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod lazy;

pub use error::{Error, Result};
pub use lazy::LazyTree;
