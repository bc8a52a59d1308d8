//! JSON-file project store
//!
//! One pretty-printed JSON document per project, named
//! `<project-id>.json` under the store's root directory. Writes are
//! read-modify-write over the whole document; the document format is
//! [`ProjectSnapshot`]'s serde shape.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{ProjectSnapshot, ProjectStore, StoreError, StoreResult};
use crate::catalog::ComponentInstance;
use crate::layout::tree::Layout;
use crate::layout::types::{ComponentId, ProjectId};

/// A [`ProjectStore`] backed by per-project JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given directory. The directory is
    /// created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory this store writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn project_path(&self, project: ProjectId) -> PathBuf {
        self.root.join(format!("{}.json", project.as_uuid()))
    }

    async fn read_snapshot(&self, project: ProjectId) -> StoreResult<ProjectSnapshot> {
        let path = self.project_path(project);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::ProjectNotFound(project));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn read_or_default(&self, project: ProjectId) -> StoreResult<ProjectSnapshot> {
        match self.read_snapshot(project).await {
            Ok(snapshot) => Ok(snapshot),
            Err(StoreError::ProjectNotFound(_)) => Ok(ProjectSnapshot::default()),
            Err(err) => Err(err),
        }
    }

    async fn write_snapshot(
        &self,
        project: ProjectId,
        snapshot: &ProjectSnapshot,
    ) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.project_path(project);
        let raw = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&path, raw).await?;
        debug!(%project, path = %path.display(), "Project document written");
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for JsonFileStore {
    async fn save_layout(&self, project: ProjectId, layout: &Layout) -> StoreResult<()> {
        let mut snapshot = self.read_or_default(project).await?;
        snapshot.layout = layout.clone();
        self.write_snapshot(project, &snapshot).await
    }

    async fn save_component(
        &self,
        project: ProjectId,
        component: &ComponentInstance,
    ) -> StoreResult<()> {
        let mut snapshot = self.read_or_default(project).await?;
        snapshot.components.insert(component.clone());
        self.write_snapshot(project, &snapshot).await
    }

    async fn remove_components(
        &self,
        project: ProjectId,
        components: &[ComponentId],
    ) -> StoreResult<()> {
        let mut snapshot = match self.read_snapshot(project).await {
            Ok(snapshot) => snapshot,
            Err(StoreError::ProjectNotFound(_)) => return Ok(()),
            Err(err) => return Err(err),
        };
        for id in components {
            snapshot.components.remove(*id);
        }
        self.write_snapshot(project, &snapshot).await
    }

    async fn load_project(&self, project: ProjectId) -> StoreResult<ProjectSnapshot> {
        self.read_snapshot(project).await
    }
}
