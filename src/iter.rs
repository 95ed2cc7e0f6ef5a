//! In-order iterators over a [`LazyTree`][crate::LazyTree].
//!
//! Both iterators walk the tree with an explicit stack of pending ancestors
//! instead of recursing, so a tree built from sorted input (which degenerates
//! into a list) can be walked no matter how tall it is.

use std::iter::FusedIterator;

use crate::lazy::Node;

/// Walks every physical node in ascending order, deleted or not.
struct Nodes<'a, E> {
    /// Nodes whose left subtree has been (or is being) visited but which
    /// haven't been yielded yet. The top of the stack is the next node.
    stack: Vec<&'a Node<E>>,
}

impl<E> Clone for Nodes<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Nodes<'a, E> {
    fn new(root: Option<&'a Node<E>>) -> Self {
        let mut nodes = Self { stack: Vec::new() };
        nodes.push_left_spine(root);
        nodes
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<E>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, E> Iterator for Nodes<'a, E> {
    type Item = &'a Node<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}

/// An iterator over the live elements of a [`LazyTree`][crate::LazyTree] in
/// ascending order. Removed elements are skipped.
///
/// Created by [`LazyTree::iter`][crate::LazyTree::iter].
pub struct Iter<'a, E> {
    nodes: Nodes<'a, E>,
    /// Live elements not yet yielded.
    remaining: usize,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, live: usize) -> Self {
        Self {
            nodes: Nodes::new(root),
            remaining: live,
        }
    }
}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.by_ref().find(|node| !node.deleted)?;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}
impl<E> FusedIterator for Iter<'_, E> {}

/// An iterator over every physical element of a
/// [`LazyTree`][crate::LazyTree] in ascending order, including removed ones.
///
/// Created by [`LazyTree::iter_hard`][crate::LazyTree::iter_hard].
pub struct IterHard<'a, E> {
    nodes: Nodes<'a, E>,
    remaining: usize,
}

impl<'a, E> IterHard<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, physical: usize) -> Self {
        Self {
            nodes: Nodes::new(root),
            remaining: physical,
        }
    }
}

impl<E> Clone for IterHard<'_, E> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for IterHard<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for IterHard<'_, E> {}
impl<E> FusedIterator for IterHard<'_, E> {}
