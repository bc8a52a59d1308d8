//! Layout tree module
//!
//! This module provides the data model and mutation engine for a page
//! built from rows, columns, and component leaves. Trees are plain
//! values; every mutation takes the current tree by reference and
//! returns a new one, leaving the input untouched on failure.
//!
//! # Architecture
//!
//! - **Fixed nesting**: rows at depth 1, columns at depth 2, component
//!   leaves at depth 3
//! - **Positional addressing**: nodes are addressed by index paths
//!   (`"0-2-1"`), resolved against the current tree value
//! - **Pure mutations**: reorder, reparent, insert, and remove all
//!   return fresh trees
//!
//! # Module Structure
//!
//! - `types` - Identifier newtypes and `NodeKind`
//! - `path` - `TreePath` codec for the `"0-2-1"` wire form
//! - `tree` - Tree value types (`Layout`, `Row`, `Column`, `LeafRef`)
//! - `locate` - Path resolution against a tree
//! - `mutate` - The four tree mutations
//! - `error` - Error types (`LayoutError`)

pub mod error;
pub mod locate;
pub mod mutate;
pub mod path;
pub mod tree;
pub mod types;

pub use error::{LayoutError, LayoutResult};
pub use locate::{Located, MAX_DEPTH, NodeRef, ParentRef, locate};
pub use mutate::{insert_new_leaf, move_to_different_parent, remove_node, reorder_within_parent};
pub use path::{PATH_SEPARATOR, TreePath};
pub use tree::{Column, Layout, LayoutNode, LeafRef, Row};
pub use types::{ComponentId, NodeId, NodeKind, ProjectId};
