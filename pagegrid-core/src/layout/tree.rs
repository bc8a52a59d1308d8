//! Layout tree structure for the page builder
//!
//! A page layout is an ordered sequence of rows; each row holds an
//! ordered sequence of columns and each column an ordered sequence of
//! component leaves. The nesting is fixed at those three levels.
//!
//! ```text
//! Layout
//! ├── Row
//! │   ├── Column
//! │   │   ├── LeafRef -> ComponentInstance
//! │   │   └── LeafRef -> ComponentInstance
//! │   └── Column
//! └── Row
//! ```
//!
//! Sibling order in every child sequence is significant: it is exactly
//! the render order. The whole `Layout` value is replaced wholesale on
//! every successful mutation; nodes are never mutated in place from
//! outside this crate.

use serde::{Deserialize, Serialize};

use super::path::TreePath;
use super::types::{ComponentId, NodeId, NodeKind};

/// A leaf node referencing a component instance owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafRef {
    /// Unique identifier of this tree node.
    pub id: NodeId,
    /// The component instance this leaf renders.
    pub component: ComponentId,
}

impl LeafRef {
    /// Creates a leaf referencing the given component instance.
    #[must_use]
    pub const fn new(id: NodeId, component: ComponentId) -> Self {
        Self { id, component }
    }
}

/// A column inside a row, holding component leaves in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier of this tree node.
    pub id: NodeId,
    /// The column's leaves, in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LeafRef>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub const fn new(id: NodeId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    /// Creates a column with the given leaves.
    #[must_use]
    pub fn with_children(id: NodeId, children: Vec<LeafRef>) -> Self {
        Self { id, children }
    }
}

/// A top-level row, holding columns in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Unique identifier of this tree node.
    pub id: NodeId,
    /// The row's columns, in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Column>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub const fn new(id: NodeId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    /// Creates a row with the given columns.
    #[must_use]
    pub fn with_children(id: NodeId, children: Vec<Column>) -> Self {
        Self { id, children }
    }
}

/// A detached node of any kind, used as the payload of a move or the
/// result of a removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    /// A detached row with its columns.
    Row(Row),
    /// A detached column with its leaves.
    Column(Column),
    /// A detached component leaf.
    Component(LeafRef),
}

impl LayoutNode {
    /// Returns the kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Row(_) => NodeKind::Row,
            Self::Column(_) => NodeKind::Column,
            Self::Component(_) => NodeKind::Component,
        }
    }

    /// Returns this node's identifier.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        match self {
            Self::Row(row) => row.id,
            Self::Column(column) => column.id,
            Self::Component(leaf) => leaf.id,
        }
    }

    /// Returns the number of nodes in this subtree, itself included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Row(row) => {
                1 + row
                    .children
                    .iter()
                    .map(|column| 1 + column.children.len())
                    .sum::<usize>()
            }
            Self::Column(column) => 1 + column.children.len(),
            Self::Component(_) => 1,
        }
    }

    /// Returns the component instances referenced anywhere in this
    /// subtree, in render order.
    #[must_use]
    pub fn component_ids(&self) -> Vec<ComponentId> {
        match self {
            Self::Row(row) => row
                .children
                .iter()
                .flat_map(|column| column.children.iter().map(|leaf| leaf.component))
                .collect(),
            Self::Column(column) => column.children.iter().map(|leaf| leaf.component).collect(),
            Self::Component(leaf) => vec![leaf.component],
        }
    }
}

/// The ordered sequence of root rows for one project.
///
/// Owned exclusively by the project aggregate; every successful
/// mutation replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    rows: Vec<Row>,
}

impl Layout {
    /// Creates an empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a layout from existing rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns the rows, in render order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to the rows for the mutation functions.
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    /// Returns true if the layout has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of top-level rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total number of nodes (rows, columns and leaves).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| {
                1 + row
                    .children
                    .iter()
                    .map(|column| 1 + column.children.len())
                    .sum::<usize>()
            })
            .sum()
    }

    /// Returns the total number of component leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.children.iter())
            .map(|column| column.children.len())
            .sum()
    }

    /// Returns every node ID in the tree, in pre-order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        for row in &self.rows {
            ids.push(row.id);
            for column in &row.children {
                ids.push(column.id);
                for leaf in &column.children {
                    ids.push(leaf.id);
                }
            }
        }
        ids
    }

    /// Returns every referenced component ID, in render order.
    #[must_use]
    pub fn component_ids(&self) -> Vec<ComponentId> {
        self.rows
            .iter()
            .flat_map(|row| row.children.iter())
            .flat_map(|column| column.children.iter())
            .map(|leaf| leaf.component)
            .collect()
    }

    /// Returns true if the tree contains a node with the given ID.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_ids().contains(&id)
    }

    /// Recomputes the path of the node with the given ID against the
    /// current tree value.
    ///
    /// Paths are positional and go stale as soon as siblings shift, so
    /// callers holding a node ID across mutations should re-derive the
    /// path here rather than reuse a captured one.
    #[must_use]
    pub fn path_of(&self, id: NodeId) -> Option<TreePath> {
        for (row_index, row) in self.rows.iter().enumerate() {
            if row.id == id {
                return Some(TreePath::new(vec![row_index]));
            }
            for (column_index, column) in row.children.iter().enumerate() {
                if column.id == id {
                    return Some(TreePath::new(vec![row_index, column_index]));
                }
                for (leaf_index, leaf) in column.children.iter().enumerate() {
                    if leaf.id == id {
                        return Some(TreePath::new(vec![row_index, column_index, leaf_index]));
                    }
                }
            }
        }
        None
    }
}
