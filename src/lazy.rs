//! A Binary Search Tree with lazy deletion. Removing an element only marks
//! its node as deleted; the node keeps its place in the tree and can be
//! brought back by inserting an equal element. The tree never rebalances, so
//! its shape depends only on insertion order and only ever grows until it is
//! cleared.
//!
//! # Examples
//!
//! ```
//! use lazy_bst::{Error, LazyTree};
//!
//! let mut tree = LazyTree::new();
//! for x in [5, 3, 8, 1] {
//!     tree.insert(x);
//! }
//! assert_eq!((tree.size(), tree.size_hard()), (4, 4));
//!
//! // Removing only hides the element.
//! assert!(tree.remove(&3));
//! assert!(!tree.contains(&3));
//! assert_eq!(tree.find(&3), Err(Error::NotFound));
//! assert_eq!((tree.size(), tree.size_hard()), (3, 4));
//!
//! // Printing each live element followed by a space.
//! let mut printed = String::new();
//! tree.traverse_soft(|x| printed.push_str(&format!("{} ", x)));
//! assert_eq!(printed, "1 5 8 ");
//!
//! // Inserting it again revives the old node instead of adding one.
//! assert!(tree.insert(3));
//! assert_eq!((tree.size(), tree.size_hard()), (4, 4));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{Iter, IterHard};

type Link<E> = Option<Box<Node<E>>>;

/// A plain (unbalanced) Binary Search Tree whose removals are soft.
///
/// The tree tracks two sizes: [`size`][LazyTree::size] counts live elements
/// and [`size_hard`][LazyTree::size_hard] counts every node physically in the
/// tree, removed or not.
pub struct LazyTree<E> {
    root: Link<E>,
    soft_size: usize,
    hard_size: usize,
}

impl<E> Default for LazyTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for LazyTree<E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: clone_nodes(self.root.as_deref()),
            soft_size: self.soft_size,
            hard_size: self.hard_size,
        }
    }
}

impl<E> Drop for LazyTree<E> {
    fn drop(&mut self) {
        self.drop_nodes();
    }
}

impl<E> fmt::Debug for LazyTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyTree")
            .field("live", &self.iter().collect::<Vec<_>>())
            .field("soft_size", &self.soft_size)
            .field("hard_size", &self.hard_size)
            .finish()
    }
}

impl<E> LazyTree<E> {
    /// Generates a new, empty `LazyTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            soft_size: 0,
            hard_size: 0,
        }
    }

    /// Discards every node, removed or not, and resets both sizes to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_bst::{Error, LazyTree};
    ///
    /// let mut tree: LazyTree<_> = [2, 1, 3].into_iter().collect();
    /// tree.remove(&1);
    /// tree.clear();
    ///
    /// assert_eq!((tree.size(), tree.size_hard()), (0, 0));
    /// assert_eq!(tree.find_min(), Err(Error::EmptyTree));
    /// ```
    pub fn clear(&mut self) {
        debug!(
            soft_size = self.soft_size,
            hard_size = self.hard_size,
            "clearing tree"
        );
        self.drop_nodes();
        self.soft_size = 0;
        self.hard_size = 0;
    }

    /// Number of live (not removed) elements.
    pub fn size(&self) -> usize {
        self.soft_size
    }

    /// Number of nodes in the tree including the removed ones.
    pub fn size_hard(&self) -> usize {
        self.hard_size
    }

    /// Whether the tree has no live elements. A tree whose elements were all
    /// removed is empty even though it still holds nodes.
    pub fn is_empty(&self) -> bool {
        self.soft_size == 0
    }

    /// Returns the smallest element physically in the tree. Removed elements
    /// are not skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_bst::{Error, LazyTree};
    ///
    /// let mut tree = LazyTree::new();
    /// assert_eq!(tree.find_min(), Err(Error::EmptyTree));
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.remove(&1);
    /// assert_eq!(tree.find_min(), Ok(&1));
    /// ```
    pub fn find_min(&self) -> Result<&E> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.item)
    }

    /// Returns the largest element physically in the tree. Removed elements
    /// are not skipped.
    pub fn find_max(&self) -> Result<&E> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.item)
    }

    /// Finds the stored element equal to `item`. Fails with
    /// [`Error::NotFound`] if there is none or if it has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_bst::{Error, LazyTree};
    ///
    /// let mut tree = LazyTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Ok(&1));
    /// assert_eq!(tree.find(&42), Err(Error::NotFound));
    /// ```
    pub fn find(&self, item: &E) -> Result<&E>
    where
        E: Ord,
    {
        self.find_live(item)
            .map(|node| &node.item)
            .ok_or(Error::NotFound)
    }

    /// Whether a live element equal to `item` is in the tree.
    pub fn contains(&self, item: &E) -> bool
    where
        E: Ord,
    {
        self.find_live(item).is_some()
    }

    /// Inserts `item`, returning whether the number of live elements grew.
    ///
    /// If an equal element was removed earlier its node is revived (the
    /// element already stored there is kept) and no node is added. Inserting
    /// an element that is already live does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_bst::LazyTree;
    ///
    /// let mut tree = LazyTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    ///
    /// tree.remove(&1);
    /// assert!(tree.insert(1));
    /// assert_eq!((tree.size(), tree.size_hard()), (1, 1));
    /// ```
    pub fn insert(&mut self, item: E) -> bool
    where
        E: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match item.cmp(&node.item) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal if node.deleted => {
                    node.deleted = false;
                    self.soft_size += 1;
                    trace!(
                        soft_size = self.soft_size,
                        hard_size = self.hard_size,
                        "insert resurrected"
                    );
                    return true;
                }
                Ordering::Equal => {
                    trace!(
                        soft_size = self.soft_size,
                        hard_size = self.hard_size,
                        "insert duplicate"
                    );
                    return false;
                }
            }
        }

        *link = Some(Box::new(Node::new(item)));
        self.soft_size += 1;
        self.hard_size += 1;
        trace!(
            soft_size = self.soft_size,
            hard_size = self.hard_size,
            "insert created"
        );
        true
    }

    /// Marks the live element equal to `item` as removed, returning whether
    /// the number of live elements shrank. The node stays in the tree.
    /// Removing a missing or already removed element does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_bst::LazyTree;
    ///
    /// let mut tree = LazyTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(!tree.remove(&99));
    /// assert_eq!((tree.size(), tree.size_hard()), (0, 1));
    /// ```
    pub fn remove(&mut self, item: &E) -> bool
    where
        E: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match item.cmp(&node.item) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal if node.deleted => {
                    trace!(soft_size = self.soft_size, "remove already deleted");
                    return false;
                }
                Ordering::Equal => {
                    node.deleted = true;
                    self.soft_size -= 1;
                    trace!(
                        soft_size = self.soft_size,
                        hard_size = self.hard_size,
                        "remove deleted"
                    );
                    return true;
                }
            }
        }

        trace!(soft_size = self.soft_size, "remove missing");
        false
    }

    /// Calls `visitor` on every element in the tree in ascending order,
    /// including removed ones.
    pub fn traverse_hard<F>(&self, visitor: F)
    where
        F: FnMut(&E),
    {
        self.iter_hard().for_each(visitor);
    }

    /// Calls `visitor` on every live element in ascending order. Removed
    /// elements are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_bst::LazyTree;
    ///
    /// let mut tree: LazyTree<_> = [5, 3, 8, 1].into_iter().collect();
    /// tree.remove(&3);
    ///
    /// let mut soft = Vec::new();
    /// tree.traverse_soft(|x| soft.push(*x));
    /// let mut hard = Vec::new();
    /// tree.traverse_hard(|x| hard.push(*x));
    ///
    /// assert_eq!(soft, [1, 5, 8]);
    /// assert_eq!(hard, [1, 3, 5, 8]);
    /// ```
    pub fn traverse_soft<F>(&self, visitor: F)
    where
        F: FnMut(&E),
    {
        self.iter().for_each(visitor);
    }

    /// Like [`traverse_hard`][LazyTree::traverse_hard] but stops at, and
    /// returns, the first error `visitor` reports.
    pub fn try_traverse_hard<F, Err>(&self, visitor: F) -> std::result::Result<(), Err>
    where
        F: FnMut(&E) -> std::result::Result<(), Err>,
    {
        self.iter_hard().try_for_each(visitor)
    }

    /// Like [`traverse_soft`][LazyTree::traverse_soft] but stops at, and
    /// returns, the first error `visitor` reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::fmt::Write;
    ///
    /// use lazy_bst::LazyTree;
    ///
    /// let tree: LazyTree<_> = [2, 1, 3].into_iter().collect();
    /// let mut out = String::new();
    ///
    /// tree.try_traverse_soft(|x| write!(out, "{} ", x)).unwrap();
    /// assert_eq!(out, "1 2 3 ");
    /// ```
    pub fn try_traverse_soft<F, Err>(&self, visitor: F) -> std::result::Result<(), Err>
    where
        F: FnMut(&E) -> std::result::Result<(), Err>,
    {
        self.iter().try_for_each(visitor)
    }

    /// Iterates over the live elements in ascending order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.root.as_deref(), self.soft_size)
    }

    /// Iterates over every element in the tree in ascending order, including
    /// removed ones.
    pub fn iter_hard(&self) -> IterHard<'_, E> {
        IterHard::new(self.root.as_deref(), self.hard_size)
    }

    fn find_live(&self, item: &E) -> Option<&Node<E>>
    where
        E: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match item.cmp(&node.item) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
                Ordering::Equal => return (!node.deleted).then_some(node),
            }
        }
        None
    }

    /// Frees the nodes with an explicit stack. Dropping the `Box`es
    /// recursively would overflow on tall trees.
    fn drop_nodes(&mut self) {
        let mut stack: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<'a, E> IntoIterator for &'a LazyTree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> FromIterator<E> for LazyTree<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<E> for LazyTree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

/// A `Node` holds one element and owns its two (possibly missing) children.
/// `deleted` marks a soft removal; the node keeps its position either way.
pub(crate) struct Node<E> {
    pub(crate) item: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
    pub(crate) deleted: bool,
}

impl<E> Node<E> {
    fn new(item: E) -> Self {
        Self {
            item,
            left: None,
            right: None,
            deleted: false,
        }
    }
}

/// Which child of its parent a copied node becomes.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Deep copies a subtree without recursing.
///
/// Nodes are copied childless in pre-order, remembering the index of their
/// parent's copy. A parent always sits before its children, so linking the
/// copies back to front hands every parent finished children.
fn clone_nodes<E>(root: Option<&Node<E>>) -> Link<E>
where
    E: Clone,
{
    let mut copies: Vec<(Node<E>, Option<(usize, Side)>)> = Vec::new();
    let mut stack: Vec<(&Node<E>, Option<(usize, Side)>)> =
        root.map(|root| (root, None)).into_iter().collect();

    while let Some((node, parent)) = stack.pop() {
        let index = copies.len();
        copies.push((
            Node {
                item: node.item.clone(),
                left: None,
                right: None,
                deleted: node.deleted,
            },
            parent,
        ));
        if let Some(right) = node.right.as_deref() {
            stack.push((right, Some((index, Side::Right))));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, Some((index, Side::Left))));
        }
    }

    while let Some((node, parent)) = copies.pop() {
        match parent {
            Some((index, Side::Left)) => copies[index].0.left = Some(Box::new(node)),
            Some((index, Side::Right)) => copies[index].0.right = Some(Box::new(node)),
            None => return Some(Box::new(node)),
        }
    }
    None
}
