//! Error types for layout-tree operations
//!
//! Every failure here aborts a single drop's mutation and leaves the
//! prior tree value unchanged; the orchestration layer surfaces a
//! no-op or a message instead of corrupting the tree.

use thiserror::Error;

use super::path::TreePath;
use super::types::NodeKind;

/// Errors that can occur while decoding paths or mutating the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The textual path could not be decoded into index segments.
    #[error("malformed path {path:?}: {reason}")]
    MalformedPath {
        /// The raw path string as received.
        path: String,
        /// Why decoding failed.
        reason: String,
    },

    /// A depth-1 path has no parent to take.
    #[error("path {0} has no parent")]
    NoParent(TreePath),

    /// An index in the path exceeds the addressed container's length.
    #[error(
        "path {path} out of range: index {index} at depth {depth}, container holds {len} children"
    )]
    PathOutOfRange {
        /// The full path being resolved.
        path: TreePath,
        /// The 1-based depth at which resolution failed.
        depth: usize,
        /// The offending index segment.
        index: usize,
        /// The length of the container at that depth.
        len: usize,
    },

    /// The path's depth does not match the expected nesting level.
    #[error("path {path} has depth {actual}, expected {expected}")]
    DepthMismatch {
        /// The offending path.
        path: TreePath,
        /// The depth the operation requires.
        expected: usize,
        /// The depth the path actually has.
        actual: usize,
    },

    /// A node of the wrong kind was about to be placed in a container.
    #[error("cannot place a {found} where a {expected} is expected")]
    KindMismatch {
        /// The kind the destination container accepts.
        expected: NodeKind,
        /// The kind of the node being inserted.
        found: NodeKind,
    },
}

/// Result type for layout operations.
pub type LayoutResult<T> = std::result::Result<T, LayoutError>;
