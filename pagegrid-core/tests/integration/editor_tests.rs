//! Editor-level integration tests
//!
//! Drives drop events through a `ProjectEditor` backed by the
//! in-memory store and verifies local state, catalog bookkeeping, and
//! save behavior.

use std::sync::Arc;
use std::time::Duration;

use pagegrid_core::{
    Column, ComponentCatalog, ComponentDefinition, ComponentInstance, DraggedItem, DropEvent,
    DropTarget, EditorConfig, IdGenerator, Layout, LeafRef, MemoryStore, NodeId, ProjectEditor,
    ProjectId, ProjectSnapshot, ProjectStore, RefreshPolicy, Row, TreePath, UuidGenerator,
};

fn path(raw: &str) -> TreePath {
    TreePath::parse(raw).unwrap()
}

fn palette(kind: &str) -> DraggedItem {
    DraggedItem::Palette {
        definition: ComponentDefinition::new(kind),
    }
}

fn existing(raw: &str) -> DraggedItem {
    DraggedItem::Existing { path: path(raw) }
}

fn zone(raw: &str) -> DropTarget {
    DropTarget::Zone(path(raw))
}

/// Builds the snapshot used throughout: one row with two columns, the
/// first holding two leaves and the second holding one, with matching
/// catalog instances.
fn seeded_snapshot(ids: &dyn IdGenerator) -> ProjectSnapshot {
    let mut catalog = ComponentCatalog::new();
    let mut leaf = |kind: &str| {
        let instance =
            ComponentInstance::from_definition(ids.component_id(), &ComponentDefinition::new(kind));
        let leaf = LeafRef::new(ids.node_id(), instance.id);
        catalog.insert(instance);
        leaf
    };
    let c1 = Column::with_children(ids.node_id(), vec![leaf("heading"), leaf("paragraph")]);
    let c2 = Column::with_children(ids.node_id(), vec![leaf("image")]);
    let layout = Layout::from_rows(vec![Row::with_children(ids.node_id(), vec![c1, c2])]);
    ProjectSnapshot {
        name: "landing".into(),
        layout,
        components: catalog,
    }
}

async fn open_seeded(
    config: EditorConfig,
) -> (Arc<MemoryStore>, ProjectId, ProjectEditor) {
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator::new());
    let project = ProjectId::new();
    let memory = Arc::new(
        MemoryStore::with_project(project, seeded_snapshot(ids.as_ref())).await,
    );
    let store: Arc<dyn ProjectStore> = memory.clone();
    let editor = ProjectEditor::open(project, store, ids, config)
        .await
        .unwrap();
    (memory, project, editor)
}

#[tokio::test]
async fn drop_sequence_mutates_tree_and_catalog() {
    let (_, _, mut editor) = open_seeded(EditorConfig::default().with_autosave(false)).await;

    // Reorder the two leaves in the first column.
    let l1 = editor.layout().rows()[0].children[0].children[0].id;
    editor
        .handle_drop(DropEvent {
            target: zone("0-0-1"),
            item: existing("0-0-0"),
        })
        .unwrap();
    assert_eq!(editor.layout().rows()[0].children[0].children[1].id, l1);

    // Move that leaf into the second column.
    editor
        .handle_drop(DropEvent {
            target: zone("0-1-0"),
            item: existing("0-0-1"),
        })
        .unwrap();
    assert_eq!(editor.layout().rows()[0].children[0].children.len(), 1);
    assert_eq!(editor.layout().rows()[0].children[1].children.len(), 2);
    assert_eq!(editor.layout().rows()[0].children[1].children[0].id, l1);

    // Drop a palette item into the now-shorter first column.
    let report = editor
        .handle_drop(DropEvent {
            target: zone("0-0-0"),
            item: palette("button"),
        })
        .unwrap();
    let created = report.created.unwrap();
    assert!(editor.catalog().contains(created.id));
    assert_eq!(editor.layout().leaf_count(), 4);

    // Trash the second column; its leaves leave the catalog.
    let detached: Vec<_> = editor.layout().rows()[0].children[1]
        .children
        .iter()
        .map(|leaf| leaf.component)
        .collect();
    let report = editor
        .handle_drop(DropEvent {
            target: DropTarget::Trash,
            item: existing("0-1"),
        })
        .unwrap();
    assert_eq!(report.removed_components, detached);
    for id in &detached {
        assert!(!editor.catalog().contains(*id));
    }
    assert_eq!(editor.layout().rows()[0].children.len(), 1);
    assert_eq!(editor.generation(), 4);
}

#[tokio::test]
async fn autosave_persists_in_background() {
    let (memory, project, mut editor) = open_seeded(EditorConfig::default()).await;

    let report = editor
        .handle_drop(DropEvent {
            target: zone("0-0-0"),
            item: palette("button"),
        })
        .unwrap();
    let created = report.created.unwrap();
    let expected = editor.layout().clone();

    let mut landed = false;
    for _ in 0..100 {
        if let Some(snapshot) = memory.snapshot(project).await {
            if snapshot.layout == expected && snapshot.components.contains(created.id) {
                landed = true;
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(landed, "background save did not land");
}

#[tokio::test]
async fn save_failure_keeps_local_state() {
    let (memory, project, mut editor) = open_seeded(EditorConfig::default()).await;
    let persisted_before = memory.snapshot(project).await.unwrap();
    memory.set_fail_writes(true);

    editor
        .handle_drop(DropEvent {
            target: zone("0-0-0"),
            item: palette("button"),
        })
        .unwrap();
    assert_eq!(editor.layout().leaf_count(), 4);

    // Give the background save a chance to fail.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(memory.snapshot(project).await.unwrap(), persisted_before);
    assert_eq!(editor.layout().leaf_count(), 4);
}

#[tokio::test]
async fn failed_drop_changes_nothing() {
    let (_, _, mut editor) = open_seeded(EditorConfig::default().with_autosave(false)).await;
    let before = editor.layout().clone();

    let result = editor.handle_drop(DropEvent {
        target: zone("0-0-9"),
        item: existing("0-0-0"),
    });
    assert!(result.is_err());
    assert_eq!(editor.layout(), &before);
    assert_eq!(editor.generation(), 0);
}

#[tokio::test]
async fn stale_refresh_is_discarded_by_default() {
    let (_, _, mut editor) = open_seeded(EditorConfig::default().with_autosave(false)).await;
    let token = editor.refresh_token();

    editor
        .handle_drop(DropEvent {
            target: zone("0-0-1"),
            item: existing("0-0-0"),
        })
        .unwrap();
    let local = editor.layout().clone();

    let adopted = editor.apply_refresh(ProjectSnapshot::new("remote"), token);
    assert!(!adopted);
    assert_eq!(editor.layout(), &local);
}

#[tokio::test]
async fn trust_remote_adopts_stale_snapshot() {
    let config = EditorConfig::default()
        .with_autosave(false)
        .with_refresh_policy(RefreshPolicy::TrustRemote);
    let (_, _, mut editor) = open_seeded(config).await;
    let token = editor.refresh_token();

    editor
        .handle_drop(DropEvent {
            target: zone("0-0-1"),
            item: existing("0-0-0"),
        })
        .unwrap();

    let adopted = editor.apply_refresh(ProjectSnapshot::new("remote"), token);
    assert!(adopted);
    assert_eq!(editor.name(), "remote");
    assert!(editor.layout().is_empty());
}
