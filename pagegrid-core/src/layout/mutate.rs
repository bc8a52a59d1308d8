//! The four layout mutations
//!
//! Every operation here is pure: it takes the current tree by
//! reference and returns a new tree, leaving the input untouched. A
//! failed operation therefore can never leave a half-applied mutation
//! behind; the caller keeps rendering the prior value.
//!
//! All operations preserve the fixed nesting invariant: rows hold only
//! columns, columns hold only component leaves.

use super::error::{LayoutError, LayoutResult};
use super::locate::MAX_DEPTH;
use super::path::TreePath;
use super::tree::{Column, Layout, LayoutNode, LeafRef, Row};
use super::types::NodeKind;

/// Mutable view over one container's child sequence, at any of the
/// three nesting levels.
enum ContainerMut<'a> {
    Rows(&'a mut Vec<Row>),
    Columns(&'a mut Vec<Column>),
    Leaves(&'a mut Vec<LeafRef>),
}

impl ContainerMut<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Columns(columns) => columns.len(),
            Self::Leaves(leaves) => leaves.len(),
        }
    }

    fn child_kind(&self) -> NodeKind {
        match self {
            Self::Rows(_) => NodeKind::Row,
            Self::Columns(_) => NodeKind::Column,
            Self::Leaves(_) => NodeKind::Component,
        }
    }

    /// Detaches the child at `index`. The caller has bounds-checked.
    fn remove(&mut self, index: usize) -> LayoutNode {
        match self {
            Self::Rows(rows) => LayoutNode::Row(rows.remove(index)),
            Self::Columns(columns) => LayoutNode::Column(columns.remove(index)),
            Self::Leaves(leaves) => LayoutNode::Component(leaves.remove(index)),
        }
    }

    /// Inserts a detached node at `index`. The caller has
    /// bounds-checked `index <= len`.
    fn insert(&mut self, index: usize, node: LayoutNode) -> LayoutResult<()> {
        match (self, node) {
            (Self::Rows(rows), LayoutNode::Row(row)) => {
                rows.insert(index, row);
                Ok(())
            }
            (Self::Columns(columns), LayoutNode::Column(column)) => {
                columns.insert(index, column);
                Ok(())
            }
            (Self::Leaves(leaves), LayoutNode::Component(leaf)) => {
                leaves.insert(index, leaf);
                Ok(())
            }
            (container, node) => Err(LayoutError::KindMismatch {
                expected: container.child_kind(),
                found: node.kind(),
            }),
        }
    }
}

/// Resolves the container whose child sequence a path's last segment
/// indexes into. `parent` is the path's leading segments; `full` is
/// the complete path, used for error reporting.
fn container_mut<'a>(
    layout: &'a mut Layout,
    parent: &[usize],
    full: &TreePath,
) -> LayoutResult<ContainerMut<'a>> {
    match *parent {
        [] => Ok(ContainerMut::Rows(layout.rows_mut())),
        [row_index] => {
            let rows = layout.rows_mut();
            let len = rows.len();
            let row = rows
                .get_mut(row_index)
                .ok_or_else(|| LayoutError::PathOutOfRange {
                    path: full.clone(),
                    depth: 1,
                    index: row_index,
                    len,
                })?;
            Ok(ContainerMut::Columns(&mut row.children))
        }
        [row_index, column_index] => {
            let rows = layout.rows_mut();
            let rows_len = rows.len();
            let row = rows
                .get_mut(row_index)
                .ok_or_else(|| LayoutError::PathOutOfRange {
                    path: full.clone(),
                    depth: 1,
                    index: row_index,
                    len: rows_len,
                })?;
            let columns_len = row.children.len();
            let column =
                row.children
                    .get_mut(column_index)
                    .ok_or_else(|| LayoutError::PathOutOfRange {
                        path: full.clone(),
                        depth: 2,
                        index: column_index,
                        len: columns_len,
                    })?;
            Ok(ContainerMut::Leaves(&mut column.children))
        }
        _ => Err(LayoutError::DepthMismatch {
            path: full.clone(),
            expected: MAX_DEPTH,
            actual: full.depth(),
        }),
    }
}

/// Checks that `index` is a valid insertion gap (0..=len) in the
/// container the path addresses.
fn check_insertion_gap(index: usize, len: usize, path: &TreePath) -> LayoutResult<()> {
    if index > len {
        return Err(LayoutError::PathOutOfRange {
            path: path.clone(),
            depth: path.depth(),
            index,
            len,
        });
    }
    Ok(())
}

/// Checks that `index` addresses an existing child (0..len).
fn check_child_index(index: usize, len: usize, path: &TreePath) -> LayoutResult<()> {
    if index >= len {
        return Err(LayoutError::PathOutOfRange {
            path: path.clone(),
            depth: path.depth(),
            index,
            len,
        });
    }
    Ok(())
}

/// Moves a node to a new position among its current siblings.
///
/// The node at `source`'s final index is removed from the shared
/// parent's child sequence and re-inserted at `destination`'s final
/// index. The destination index counts positions in the sequence as it
/// was offered to the drag (before removal); removing the node shifts
/// trailing siblings one place left, so the end-of-sequence gap lands
/// one short of where it was offered. Reordering a node onto its own
/// position returns a tree structurally equal to the input.
///
/// # Errors
///
/// Returns [`LayoutError::PathOutOfRange`] if either index exceeds the
/// shared container, or [`LayoutError::DepthMismatch`] for a path
/// deeper than the tree nests.
///
/// # Panics
///
/// Panics if the two paths do not share a parent container; the drop
/// dispatcher only routes same-parent drags here.
pub fn reorder_within_parent(
    layout: &Layout,
    destination: &TreePath,
    source: &TreePath,
) -> LayoutResult<Layout> {
    assert!(
        source.same_parent(destination),
        "reorder_within_parent requires paths under the same parent"
    );

    let mut next = layout.clone();
    let mut container = container_mut(&mut next, source.parent_segments(), source)?;
    let len = container.len();
    let source_index = source.last();
    let destination_index = destination.last();
    check_child_index(source_index, len, source)?;
    check_insertion_gap(destination_index, len, destination)?;

    let node = container.remove(source_index);
    let effective = destination_index.min(container.len());
    container.insert(effective, node)?;
    Ok(next)
}

/// Moves a node out of its current parent and into a different one.
///
/// The moved payload is detached from the current tree at `source`;
/// a payload captured at drag time could be stale by the time the drop
/// lands. The payload's kind must match the nesting level of the
/// destination container: columns go into rows, leaves into columns.
///
/// # Errors
///
/// - [`LayoutError::KindMismatch`] if the destination container does
///   not accept the moved node's kind.
/// - [`LayoutError::DepthMismatch`] if either path is deeper than the
///   tree nests.
/// - [`LayoutError::PathOutOfRange`] if either path fails to resolve
///   against the current tree.
pub fn move_to_different_parent(
    layout: &Layout,
    destination: &TreePath,
    source: &TreePath,
) -> LayoutResult<Layout> {
    let found = NodeKind::from_depth(source.depth()).ok_or_else(|| LayoutError::DepthMismatch {
        path: source.clone(),
        expected: MAX_DEPTH,
        actual: source.depth(),
    })?;
    let expected =
        NodeKind::from_depth(destination.depth()).ok_or_else(|| LayoutError::DepthMismatch {
            path: destination.clone(),
            expected: MAX_DEPTH,
            actual: destination.depth(),
        })?;
    if found != expected {
        return Err(LayoutError::KindMismatch { expected, found });
    }

    let mut next = layout.clone();
    let node = {
        let mut container = container_mut(&mut next, source.parent_segments(), source)?;
        check_child_index(source.last(), container.len(), source)?;
        container.remove(source.last())
    };

    // Equal kinds imply equal depths, so the source can never be an
    // ancestor of the destination parent and the removal above cannot
    // shift the destination container's own position.
    let mut container = container_mut(&mut next, destination.parent_segments(), destination)?;
    check_insertion_gap(destination.last(), container.len(), destination)?;
    container.insert(destination.last(), node)?;
    Ok(next)
}

/// Inserts a freshly created leaf where a palette item was dropped.
///
/// The destination must address a leaf position (depth 3); the leaf is
/// inserted into the column addressed by the destination's parent, at
/// the destination's final index. The referenced component instance is
/// created by the catalog collaborator before this call.
///
/// # Errors
///
/// - [`LayoutError::DepthMismatch`] if the destination is not a leaf
///   position.
/// - [`LayoutError::PathOutOfRange`] if the destination column does
///   not exist or the index is past the insertion gap.
pub fn insert_new_leaf(
    layout: &Layout,
    destination: &TreePath,
    leaf: LeafRef,
) -> LayoutResult<Layout> {
    if destination.depth() != NodeKind::Component.depth() {
        return Err(LayoutError::DepthMismatch {
            path: destination.clone(),
            expected: NodeKind::Component.depth(),
            actual: destination.depth(),
        });
    }

    let mut next = layout.clone();
    let mut container = container_mut(&mut next, destination.parent_segments(), destination)?;
    check_insertion_gap(destination.last(), container.len(), destination)?;
    container.insert(destination.last(), LayoutNode::Component(leaf))?;
    Ok(next)
}

/// Removes the node at `target`, returning the new tree and the
/// detached subtree.
///
/// Siblings are untouched apart from shifting left; an emptied column
/// or row stays in place. The detached subtree lets the caller collect
/// the component references whose instances are now unreachable.
///
/// # Errors
///
/// Returns [`LayoutError::PathOutOfRange`] if the path fails to
/// resolve, or [`LayoutError::DepthMismatch`] for a path deeper than
/// the tree nests.
pub fn remove_node(layout: &Layout, target: &TreePath) -> LayoutResult<(Layout, LayoutNode)> {
    let mut next = layout.clone();
    let removed = {
        let mut container = container_mut(&mut next, target.parent_segments(), target)?;
        check_child_index(target.last(), container.len(), target)?;
        container.remove(target.last())
    };
    Ok((next, removed))
}
