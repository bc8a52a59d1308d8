//! Tree locator: resolving a path to a node in the current tree
//!
//! Resolution must always run against the current tree value. Indices
//! are positional and shift as siblings are added or removed, so a
//! path captured before an earlier mutation may now address a
//! different node or nothing at all.

use super::error::{LayoutError, LayoutResult};
use super::path::TreePath;
use super::tree::{Column, Layout, LeafRef, Row};
use super::types::{NodeId, NodeKind};

/// Maximum nesting depth of the tree (leaves live at depth 3).
pub const MAX_DEPTH: usize = 3;

/// A borrowed reference to a node of any kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    /// A top-level row.
    Row(&'a Row),
    /// A column inside a row.
    Column(&'a Column),
    /// A component leaf inside a column.
    Leaf(&'a LeafRef),
}

impl NodeRef<'_> {
    /// Returns the kind of the referenced node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Row(_) => NodeKind::Row,
            Self::Column(_) => NodeKind::Column,
            Self::Leaf(_) => NodeKind::Component,
        }
    }

    /// Returns the referenced node's identifier.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        match self {
            Self::Row(row) => row.id,
            Self::Column(column) => column.id,
            Self::Leaf(leaf) => leaf.id,
        }
    }
}

/// A borrowed reference to the container holding a located node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParentRef<'a> {
    /// The root sequence of rows.
    Root(&'a [Row]),
    /// A row, holding columns.
    Row(&'a Row),
    /// A column, holding leaves.
    Column(&'a Column),
}

impl ParentRef<'_> {
    /// Returns the number of children in this container.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Root(rows) => rows.len(),
            Self::Row(row) => row.children.len(),
            Self::Column(column) => column.children.len(),
        }
    }

    /// Returns true if the container has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the node kind this container accepts as children.
    #[must_use]
    pub const fn child_kind(&self) -> NodeKind {
        match self {
            Self::Root(_) => NodeKind::Row,
            Self::Row(_) => NodeKind::Column,
            Self::Column(_) => NodeKind::Component,
        }
    }
}

/// The result of resolving a path: the node, the container that holds
/// it, and the node's index within that container.
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    /// The addressed node.
    pub node: NodeRef<'a>,
    /// The container holding the node.
    pub parent: ParentRef<'a>,
    /// The node's index in the parent's child sequence.
    pub index: usize,
}

fn child_at<'a, T>(
    children: &'a [T],
    index: usize,
    path: &TreePath,
    depth: usize,
) -> LayoutResult<&'a T> {
    children.get(index).ok_or_else(|| LayoutError::PathOutOfRange {
        path: path.clone(),
        depth,
        index,
        len: children.len(),
    })
}

/// Resolves a path against the current tree value.
///
/// # Errors
///
/// - [`LayoutError::DepthMismatch`] if the path is deeper than the
///   tree's three nesting levels.
/// - [`LayoutError::PathOutOfRange`] if any index segment exceeds the
///   corresponding container's length.
pub fn locate<'a>(layout: &'a Layout, path: &TreePath) -> LayoutResult<Located<'a>> {
    let segments = path.segments();
    if segments.len() > MAX_DEPTH {
        return Err(LayoutError::DepthMismatch {
            path: path.clone(),
            expected: MAX_DEPTH,
            actual: segments.len(),
        });
    }

    let rows = layout.rows();
    let row = child_at(rows, segments[0], path, 1)?;
    if segments.len() == 1 {
        return Ok(Located {
            node: NodeRef::Row(row),
            parent: ParentRef::Root(rows),
            index: segments[0],
        });
    }

    let column = child_at(&row.children, segments[1], path, 2)?;
    if segments.len() == 2 {
        return Ok(Located {
            node: NodeRef::Column(column),
            parent: ParentRef::Row(row),
            index: segments[1],
        });
    }

    let leaf = child_at(&column.children, segments[2], path, 3)?;
    Ok(Located {
        node: NodeRef::Leaf(leaf),
        parent: ParentRef::Column(column),
        index: segments[2],
    })
}
