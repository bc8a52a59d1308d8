//! Drag-and-drop model for layout-tree operations
//!
//! This module classifies a drop event into one of the tree mutations
//! and applies it, as pure data transforms that can be tested without
//! any rendering layer. Whether the dragged item is an existing node
//! or a palette entry is decided once, at the event boundary, by the
//! [`DraggedItem`] variant; it is never re-inferred downstream.

use crate::catalog::{ComponentDefinition, ComponentInstance};
use crate::id::IdGenerator;
use crate::layout::error::LayoutResult;
use crate::layout::mutate::{
    insert_new_leaf, move_to_different_parent, remove_node, reorder_within_parent,
};
use crate::layout::path::TreePath;
use crate::layout::tree::{Layout, LeafRef};
use crate::layout::types::ComponentId;

/// The item being dragged.
#[derive(Debug, Clone, PartialEq)]
pub enum DraggedItem {
    /// An existing tree node, addressed by its path in the current
    /// tree.
    Existing {
        /// The node's path at drag time.
        path: TreePath,
    },
    /// A palette entry: a component type with no position yet.
    Palette {
        /// The component type to instantiate on drop.
        definition: ComponentDefinition,
    },
}

/// Where the item was dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    /// A drop zone: an insertion point between or after siblings,
    /// addressed by the path the inserted node would take.
    Zone(TreePath),
    /// The trash target; dropping an existing node here deletes it.
    Trash,
}

/// A single drop event, carrying the destination and the dragged item.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    /// Where the item landed.
    pub target: DropTarget,
    /// What was dragged.
    pub item: DraggedItem,
}

/// The mutation a drop event resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum DropAction {
    /// Instantiate a palette entry and insert the new leaf.
    InsertNew {
        /// Leaf position the new node takes.
        destination: TreePath,
        /// The component type to instantiate.
        definition: ComponentDefinition,
    },
    /// Move a node among its current siblings.
    Reorder {
        /// Position the node moves to.
        destination: TreePath,
        /// The node's current path.
        source: TreePath,
    },
    /// Move a node under a different parent container.
    Reparent {
        /// Position the node moves to.
        destination: TreePath,
        /// The node's current path.
        source: TreePath,
    },
    /// Delete the node at the given path.
    Remove {
        /// The node's current path.
        target: TreePath,
    },
    /// Nothing to do (a palette entry dropped on the trash).
    Ignore,
}

/// Classifies a drop event into the mutation it calls for.
///
/// Evaluated in order:
/// 1. any drop on the trash removes the dragged node (a palette entry
///    has no node to remove, so it is ignored);
/// 2. a palette entry dropped on a zone inserts a new leaf;
/// 3. an existing node dropped beside its current siblings reorders;
/// 4. everything else reparents.
#[must_use]
pub fn classify(event: DropEvent) -> DropAction {
    match (event.target, event.item) {
        (DropTarget::Trash, DraggedItem::Existing { path }) => DropAction::Remove { target: path },
        (DropTarget::Trash, DraggedItem::Palette { .. }) => DropAction::Ignore,
        (DropTarget::Zone(destination), DraggedItem::Palette { definition }) => {
            DropAction::InsertNew {
                destination,
                definition,
            }
        }
        (DropTarget::Zone(destination), DraggedItem::Existing { path }) => {
            if path.same_parent(&destination) {
                DropAction::Reorder {
                    destination,
                    source: path,
                }
            } else {
                DropAction::Reparent {
                    destination,
                    source: path,
                }
            }
        }
    }
}

/// The result of applying a drop action.
#[derive(Debug, Clone, PartialEq)]
pub struct DropOutcome {
    /// The new tree value.
    pub layout: Layout,
    /// The component instance minted for an insert-new drop.
    pub created: Option<ComponentInstance>,
    /// Component references detached by a remove drop; their instances
    /// are now unreachable from the tree.
    pub removed_components: Vec<ComponentId>,
}

impl DropOutcome {
    fn unchanged(layout: Layout) -> Self {
        Self {
            layout,
            created: None,
            removed_components: Vec::new(),
        }
    }
}

/// Applies a classified drop action to the current tree.
///
/// Pure apart from drawing fresh ids for insert-new drops; collaborator
/// invocation (persistence, catalog updates) is the orchestration
/// layer's responsibility, strictly after this returns successfully.
///
/// # Errors
///
/// Propagates the mutation's [`crate::layout::LayoutError`]; the input
/// tree is left untouched.
pub fn apply(layout: &Layout, action: DropAction, ids: &dyn IdGenerator) -> LayoutResult<DropOutcome> {
    match action {
        DropAction::InsertNew {
            destination,
            definition,
        } => {
            let instance = ComponentInstance::from_definition(ids.component_id(), &definition);
            let leaf = LeafRef::new(ids.node_id(), instance.id);
            let next = insert_new_leaf(layout, &destination, leaf)?;
            Ok(DropOutcome {
                layout: next,
                created: Some(instance),
                removed_components: Vec::new(),
            })
        }
        DropAction::Reorder {
            destination,
            source,
        } => Ok(DropOutcome::unchanged(reorder_within_parent(
            layout,
            &destination,
            &source,
        )?)),
        DropAction::Reparent {
            destination,
            source,
        } => Ok(DropOutcome::unchanged(move_to_different_parent(
            layout,
            &destination,
            &source,
        )?)),
        DropAction::Remove { target } => {
            let (next, removed) = remove_node(layout, &target)?;
            Ok(DropOutcome {
                layout: next,
                created: None,
                removed_components: removed.component_ids(),
            })
        }
        DropAction::Ignore => Ok(DropOutcome::unchanged(layout.clone())),
    }
}

/// Classifies and applies a drop event in one step.
///
/// # Errors
///
/// Propagates the mutation's [`crate::layout::LayoutError`].
pub fn handle(
    layout: &Layout,
    event: DropEvent,
    ids: &dyn IdGenerator,
) -> LayoutResult<DropOutcome> {
    apply(layout, classify(event), ids)
}
