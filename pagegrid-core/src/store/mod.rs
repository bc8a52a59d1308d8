//! Project persistence
//!
//! The editor talks to storage through the [`ProjectStore`] trait and
//! never waits for it: saves are fired after a mutation has already
//! been applied locally, and a failed save never rolls the local tree
//! back. Two backends are provided, an in-memory store for tests and a
//! JSON-file store for real projects.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{ComponentCatalog, ComponentInstance};
use crate::layout::tree::Layout;
use crate::layout::types::{ComponentId, ProjectId};

/// Errors from a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The project does not exist in this store.
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Underlying I/O failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be decoded.
    #[error("Invalid project document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// Backend-specific failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Everything a store holds for one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Human-readable project name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// The layout tree.
    #[serde(default, skip_serializing_if = "Layout::is_empty")]
    pub layout: Layout,
    /// Component instances referenced by the tree's leaves.
    #[serde(default, skip_serializing_if = "ComponentCatalog::is_empty")]
    pub components: ComponentCatalog,
}

impl ProjectSnapshot {
    /// Creates an empty snapshot with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: Layout::new(),
            components: ComponentCatalog::new(),
        }
    }
}

/// Persistence backend for page projects.
///
/// Layout and component writes are separate operations on purpose: a
/// drop that only moves nodes saves the tree alone, while an insert
/// saves the tree and the new component instance.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Persists the project's layout tree, replacing the stored one.
    async fn save_layout(&self, project: ProjectId, layout: &Layout) -> StoreResult<()>;

    /// Persists one component instance.
    async fn save_component(
        &self,
        project: ProjectId,
        component: &ComponentInstance,
    ) -> StoreResult<()>;

    /// Deletes component instances that are no longer referenced by
    /// the tree.
    async fn remove_components(
        &self,
        project: ProjectId,
        components: &[ComponentId],
    ) -> StoreResult<()>;

    /// Loads the full project snapshot.
    async fn load_project(&self, project: ProjectId) -> StoreResult<ProjectSnapshot>;
}
