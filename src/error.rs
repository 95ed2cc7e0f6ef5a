//! Errors returned by the lookups on a [`LazyTree`][crate::LazyTree].

/// Why a lookup on a [`LazyTree`][crate::LazyTree] came back empty handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `find_min` or `find_max` was called on a tree with no nodes at all.
    #[error("the tree has no nodes")]
    EmptyTree,

    /// `find` reached a leaf, or an equal node that has been removed.
    #[error("no live node matches the element")]
    NotFound,
}

/// Shorthand for results of tree lookups.
pub type Result<T> = std::result::Result<T, Error>;
