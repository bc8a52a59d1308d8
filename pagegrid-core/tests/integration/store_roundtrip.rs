//! Persistence round-trip tests against the JSON-file store

use std::sync::Arc;

use pagegrid_core::{
    ComponentDefinition, DraggedItem, DropEvent, DropTarget, EditorConfig, IdGenerator,
    JsonFileStore, Layout, MemoryStore, NodeId, ProjectEditor, ProjectId, ProjectStore, Row,
    StoreError, TreePath, UuidGenerator,
};

fn collaborators(store: impl ProjectStore + 'static) -> (Arc<dyn ProjectStore>, Arc<dyn IdGenerator>) {
    (Arc::new(store), Arc::new(UuidGenerator::new()))
}

/// Seeds a one-row, one-column layout directly through the store.
async fn seed_project(store: &dyn ProjectStore, project: ProjectId) {
    use pagegrid_core::Column;
    let column = Column::new(NodeId::new());
    let row = Row::with_children(NodeId::new(), vec![column]);
    store
        .save_layout(project, &Layout::from_rows(vec![row]))
        .await
        .unwrap();
}

#[tokio::test]
async fn file_store_roundtrips_an_edit_session() {
    let dir = tempfile::tempdir().unwrap();
    let (store, ids) = collaborators(JsonFileStore::new(dir.path()));
    let project = ProjectId::new();
    seed_project(store.as_ref(), project).await;

    let mut editor = ProjectEditor::open(
        project,
        store.clone(),
        ids.clone(),
        EditorConfig::default().with_autosave(false),
    )
    .await
    .unwrap();

    editor
        .handle_drop(DropEvent {
            target: DropTarget::Zone(TreePath::parse("0-0-0").unwrap()),
            item: DraggedItem::Palette {
                definition: ComponentDefinition::new("image"),
            },
        })
        .unwrap();
    editor.save_now().await.unwrap();

    // A second editor opened over the same file sees the same state.
    let reopened = ProjectEditor::open(project, store, ids, EditorConfig::default())
        .await
        .unwrap();
    assert_eq!(reopened.layout(), editor.layout());
    assert_eq!(reopened.catalog().len(), 1);
}

#[tokio::test]
async fn file_store_survives_process_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let project = ProjectId::new();

    {
        let store = JsonFileStore::new(dir.path());
        seed_project(&store, project).await;
    }

    // A brand-new store over the same directory reads the document.
    let store = JsonFileStore::new(dir.path());
    let snapshot = store.load_project(project).await.unwrap();
    assert_eq!(snapshot.layout.row_count(), 1);
}

#[tokio::test]
async fn missing_project_is_not_found_in_both_backends() {
    let dir = tempfile::tempdir().unwrap();
    let file_store = JsonFileStore::new(dir.path());
    let memory_store = MemoryStore::new();
    let project = ProjectId::new();

    assert!(matches!(
        file_store.load_project(project).await,
        Err(StoreError::ProjectNotFound(_))
    ));
    assert!(matches!(
        memory_store.load_project(project).await,
        Err(StoreError::ProjectNotFound(_))
    ));
}
