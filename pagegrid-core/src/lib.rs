//! `PageGrid` Core Library
//!
//! This crate provides the layout engine for a drag-and-drop page
//! builder: a rows/columns/components tree, positional path
//! addressing, pure tree mutations, drop-event classification, and the
//! editor orchestration that wires mutations to persistence.
//!
//! # Crate Structure
//!
//! - [`layout`] - Tree model, path codec, locator, and the four mutations
//! - [`drag_drop`] - Drop-event classification and application
//! - [`catalog`] - Component definitions and per-project instances
//! - [`editor`] - Project editor: local state, generation tracking, autosave
//! - [`store`] - Persistence trait with in-memory and JSON-file backends
//! - [`id`] - Identifier generation seam
//! - [`config`] - Editor behavior settings
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod drag_drop;
pub mod editor;
pub mod id;
pub mod layout;
pub mod store;
pub mod tracing;

// =============================================================================
// Convenience re-exports
//
// Flat re-exports for the common surface; new code may prefer modular
// paths (e.g. `pagegrid_core::layout::TreePath`).
// =============================================================================

pub use catalog::{ComponentCatalog, ComponentDefinition, ComponentInstance};
pub use config::{EditorConfig, RefreshPolicy};
pub use drag_drop::{
    DraggedItem, DropAction, DropEvent, DropOutcome, DropTarget, apply, classify, handle,
};
pub use editor::{DropReport, EditorError, ProjectEditor};
pub use id::{IdGenerator, UuidGenerator};
pub use layout::{
    Column, ComponentId, Layout, LayoutError, LayoutNode, LayoutResult, LeafRef, NodeId, NodeKind,
    ProjectId, Row, TreePath,
};
pub use store::{JsonFileStore, MemoryStore, ProjectSnapshot, ProjectStore, StoreError, StoreResult};
