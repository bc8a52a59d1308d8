//! In-memory project store
//!
//! Used by tests and as a scratch backend. Supports failure injection
//! so save-failure handling can be exercised without touching a disk.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ProjectSnapshot, ProjectStore, StoreError, StoreResult};
use crate::catalog::ComponentInstance;
use crate::layout::tree::Layout;
use crate::layout::types::{ComponentId, ProjectId};

/// A [`ProjectStore`] holding snapshots in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: RwLock<HashMap<ProjectId, ProjectSnapshot>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one project.
    pub async fn with_project(project: ProjectId, snapshot: ProjectSnapshot) -> Self {
        let store = Self::new();
        store.projects.write().await.insert(project, snapshot);
        store
    }

    /// When set, every write operation fails with a backend error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns the stored snapshot without going through the trait,
    /// for direct inspection in tests.
    pub async fn snapshot(&self, project: ProjectId) -> Option<ProjectSnapshot> {
        self.projects.read().await.get(&project).cloned()
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("write failure injected".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn save_layout(&self, project: ProjectId, layout: &Layout) -> StoreResult<()> {
        self.check_writable()?;
        let mut projects = self.projects.write().await;
        projects.entry(project).or_default().layout = layout.clone();
        Ok(())
    }

    async fn save_component(
        &self,
        project: ProjectId,
        component: &ComponentInstance,
    ) -> StoreResult<()> {
        self.check_writable()?;
        let mut projects = self.projects.write().await;
        projects
            .entry(project)
            .or_default()
            .components
            .insert(component.clone());
        Ok(())
    }

    async fn remove_components(
        &self,
        project: ProjectId,
        components: &[ComponentId],
    ) -> StoreResult<()> {
        self.check_writable()?;
        let mut projects = self.projects.write().await;
        if let Some(snapshot) = projects.get_mut(&project) {
            for id in components {
                snapshot.components.remove(*id);
            }
        }
        Ok(())
    }

    async fn load_project(&self, project: ProjectId) -> StoreResult<ProjectSnapshot> {
        self.projects
            .read()
            .await
            .get(&project)
            .cloned()
            .ok_or(StoreError::ProjectNotFound(project))
    }
}
