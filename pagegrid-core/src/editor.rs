//! Project editor: orchestration over the pure layout engine
//!
//! Owns the in-memory state for one open project (tree, component
//! catalog, generation counter) and wires drop events through
//! classification, mutation, and persistence. Mutations apply locally
//! first; saves run in the background and a failed save never rolls
//! the local state back.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::{ComponentCatalog, ComponentInstance};
use crate::config::{EditorConfig, RefreshPolicy};
use crate::drag_drop::{apply, classify, DropEvent};
use crate::id::IdGenerator;
use crate::layout::error::LayoutError;
use crate::layout::tree::Layout;
use crate::layout::types::{ComponentId, ProjectId};
use crate::store::{ProjectSnapshot, ProjectStore, StoreError};

/// Errors surfaced by editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A drop event resolved to an invalid mutation.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The project could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a handled drop did, for the caller's UI.
#[derive(Debug, Clone, PartialEq)]
pub struct DropReport {
    /// The component instance minted by an insert-new drop.
    pub created: Option<ComponentInstance>,
    /// Component instances detached by a remove drop.
    pub removed_components: Vec<ComponentId>,
    /// The editor's generation after the drop applied. Unchanged when
    /// the drop was a no-op.
    pub generation: u64,
    /// False when the drop classified to nothing (a palette item on
    /// the trash).
    pub changed: bool,
}

/// An open project: local tree state plus its collaborators.
pub struct ProjectEditor {
    project: ProjectId,
    name: String,
    layout: Layout,
    catalog: ComponentCatalog,
    generation: u64,
    store: Arc<dyn ProjectStore>,
    ids: Arc<dyn IdGenerator>,
    config: EditorConfig,
}

impl ProjectEditor {
    /// Loads a project from the store and opens an editor over it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Store`] if the project cannot be loaded.
    pub async fn open(
        project: ProjectId,
        store: Arc<dyn ProjectStore>,
        ids: Arc<dyn IdGenerator>,
        config: EditorConfig,
    ) -> Result<Self, EditorError> {
        let snapshot = store.load_project(project).await?;
        debug!(%project, nodes = snapshot.layout.node_count(), "Project opened");
        Ok(Self {
            project,
            name: snapshot.name,
            layout: snapshot.layout,
            catalog: snapshot.components,
            generation: 0,
            store,
            ids,
            config,
        })
    }

    /// Opens an editor over an empty, unsaved project.
    #[must_use]
    pub fn new_project(
        project: ProjectId,
        name: impl Into<String>,
        store: Arc<dyn ProjectStore>,
        ids: Arc<dyn IdGenerator>,
        config: EditorConfig,
    ) -> Self {
        Self {
            project,
            name: name.into(),
            layout: Layout::new(),
            catalog: ComponentCatalog::new(),
            generation: 0,
            store,
            ids,
            config,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current tree value.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the component catalog.
    #[must_use]
    pub const fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Returns the mutation generation. It increments on every drop
    /// that changed the tree.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles one drop event end to end: classify, mutate, update
    /// local state, then kick off background saves.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Layout`] when the event resolves to an
    /// invalid mutation; local state is untouched in that case.
    pub fn handle_drop(&mut self, event: DropEvent) -> Result<DropReport, EditorError> {
        let action = classify(event);
        debug!(project = %self.project, ?action, "Drop classified");

        let outcome = apply(&self.layout, action, self.ids.as_ref())?;
        let changed = outcome.layout != self.layout
            || outcome.created.is_some()
            || !outcome.removed_components.is_empty();

        self.layout = outcome.layout;
        if let Some(instance) = &outcome.created {
            self.catalog.insert(instance.clone());
        }
        for id in &outcome.removed_components {
            self.catalog.remove(*id);
        }
        if changed {
            self.generation += 1;
        }

        if changed && self.config.autosave {
            self.spawn_save(outcome.created.clone(), outcome.removed_components.clone());
        }

        Ok(DropReport {
            created: outcome.created,
            removed_components: outcome.removed_components,
            generation: self.generation,
            changed,
        })
    }

    /// Persists the current state in the background. Failures are
    /// logged and do not touch local state.
    fn spawn_save(&self, created: Option<ComponentInstance>, removed: Vec<ComponentId>) {
        let store = Arc::clone(&self.store);
        let project = self.project;
        let layout = self.layout.clone();
        tokio::spawn(async move {
            if let Some(instance) = created {
                if let Err(err) = store.save_component(project, &instance).await {
                    warn!(%project, component = %instance.id, %err, "Component save failed");
                }
            }
            if !removed.is_empty() {
                if let Err(err) = store.remove_components(project, &removed).await {
                    warn!(%project, count = removed.len(), %err, "Component removal save failed");
                }
            }
            if let Err(err) = store.save_layout(project, &layout).await {
                warn!(%project, %err, "Layout save failed");
            }
        });
    }

    /// Persists the current state and waits for the result, for
    /// explicit save points.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Store`] if any write fails.
    pub async fn save_now(&self) -> Result<(), EditorError> {
        for instance in self.catalog.instances() {
            self.store.save_component(self.project, instance).await?;
        }
        self.store.save_layout(self.project, &self.layout).await?;
        Ok(())
    }

    /// Returns a token identifying the current local state. Capture it
    /// before starting a background reload and pass it to
    /// [`Self::apply_refresh`].
    #[must_use]
    pub const fn refresh_token(&self) -> u64 {
        self.generation
    }

    /// Reconciles a freshly loaded snapshot with local state.
    ///
    /// Under [`RefreshPolicy::TrustLocal`] the snapshot is discarded
    /// when local edits happened after `token` was captured; under
    /// [`RefreshPolicy::TrustRemote`] it is always adopted. Returns
    /// true if the snapshot was adopted.
    pub fn apply_refresh(&mut self, snapshot: ProjectSnapshot, token: u64) -> bool {
        let stale = token != self.generation;
        if stale && self.config.refresh_policy == RefreshPolicy::TrustLocal {
            debug!(project = %self.project, token, generation = self.generation,
                "Stale refresh discarded");
            return false;
        }
        self.name = snapshot.name;
        self.layout = snapshot.layout;
        self.catalog = snapshot.components;
        self.generation += 1;
        true
    }
}
