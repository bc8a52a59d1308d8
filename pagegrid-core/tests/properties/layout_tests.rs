//! Property-based tests for layout-tree mutations
//!
//! These tests verify conservation laws: a reorder or move never
//! creates or destroys nodes, an insert adds exactly one leaf, and a
//! remove subtracts exactly the detached subtree.

use proptest::prelude::*;

use pagegrid_core::layout::{
    insert_new_leaf, move_to_different_parent, remove_node, reorder_within_parent,
};
use pagegrid_core::{Column, ComponentId, Layout, LeafRef, NodeId, Row, TreePath};

fn leaf() -> LeafRef {
    LeafRef::new(NodeId::new(), ComponentId::new())
}

fn column(leaves: usize) -> Column {
    Column::with_children(NodeId::new(), (0..leaves).map(|_| leaf()).collect())
}

/// Strategy for generating layouts of varying shape: 1-3 rows, each
/// with 0-3 columns holding 0-4 leaves.
fn layout_strategy() -> impl Strategy<Value = Layout> {
    prop::collection::vec(prop::collection::vec(0usize..5, 0..4), 1..4).prop_map(|rows| {
        Layout::from_rows(
            rows.into_iter()
                .map(|columns| {
                    Row::with_children(
                        NodeId::new(),
                        columns.into_iter().map(column).collect(),
                    )
                })
                .collect(),
        )
    })
}

fn sorted_ids(layout: &Layout) -> Vec<NodeId> {
    let mut ids = layout.node_ids();
    ids.sort_unstable();
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reordering rows permutes them: same id multiset, same count.
    #[test]
    fn row_reorder_preserves_id_multiset(
        layout in layout_strategy(),
        raw_src in 0usize..16,
        raw_dest in 0usize..16,
    ) {
        let len = layout.row_count();
        let src = TreePath::new(vec![raw_src % len]);
        let dest = TreePath::new(vec![raw_dest % (len + 1)]);

        let next = reorder_within_parent(&layout, &dest, &src).unwrap();
        prop_assert_eq!(next.node_count(), layout.node_count());
        prop_assert_eq!(sorted_ids(&next), sorted_ids(&layout));
    }

    /// Reordering a row onto its own slot is the identity.
    #[test]
    fn row_reorder_onto_own_slot_is_identity(
        layout in layout_strategy(),
        raw in 0usize..16,
    ) {
        let index = raw % layout.row_count();
        let path = TreePath::new(vec![index]);
        let next = reorder_within_parent(&layout, &path, &path).unwrap();
        prop_assert_eq!(next, layout);
    }

    /// Moving a leaf between two columns conserves every node id.
    #[test]
    fn leaf_move_conserves_node_ids(
        source_leaves in 1usize..5,
        dest_leaves in 0usize..5,
        raw_src in 0usize..16,
        raw_dest in 0usize..16,
    ) {
        let layout = Layout::from_rows(vec![
            Row::with_children(NodeId::new(), vec![column(source_leaves)]),
            Row::with_children(NodeId::new(), vec![column(dest_leaves)]),
        ]);
        let src = TreePath::new(vec![0, 0, raw_src % source_leaves]);
        let dest = TreePath::new(vec![1, 0, raw_dest % (dest_leaves + 1)]);

        let next = move_to_different_parent(&layout, &dest, &src).unwrap();
        prop_assert_eq!(next.node_count(), layout.node_count());
        prop_assert_eq!(sorted_ids(&next), sorted_ids(&layout));
        prop_assert_eq!(next.rows()[0].children[0].children.len(), source_leaves - 1);
        prop_assert_eq!(next.rows()[1].children[0].children.len(), dest_leaves + 1);
    }

    /// Inserting a new leaf adds exactly one leaf at the given slot.
    #[test]
    fn insert_adds_exactly_one_leaf(
        existing in 0usize..5,
        raw_dest in 0usize..16,
    ) {
        let layout = Layout::from_rows(vec![Row::with_children(
            NodeId::new(),
            vec![column(existing)],
        )]);
        let new_leaf = leaf();
        let id = new_leaf.id;
        let dest = TreePath::new(vec![0, 0, raw_dest % (existing + 1)]);

        let next = insert_new_leaf(&layout, &dest, new_leaf).unwrap();
        prop_assert_eq!(next.leaf_count(), layout.leaf_count() + 1);
        prop_assert!(next.contains_node(id));
        prop_assert!(!layout.contains_node(id));
    }

    /// Removing a node subtracts exactly its subtree from the count,
    /// and the node is no longer addressable.
    #[test]
    fn remove_subtracts_detached_subtree(
        layout in layout_strategy(),
        raw in 0usize..16,
    ) {
        let index = raw % layout.row_count();
        let target = TreePath::new(vec![index]);

        let (next, removed) = remove_node(&layout, &target).unwrap();
        prop_assert_eq!(next.node_count(), layout.node_count() - removed.node_count());
        prop_assert!(!next.contains_node(removed.id()));
    }

    /// Every node's computed path resolves back to that node.
    #[test]
    fn path_of_inverts_location(layout in layout_strategy()) {
        for id in layout.node_ids() {
            let path = layout.path_of(id).unwrap();
            let located = pagegrid_core::layout::locate(&layout, &path).unwrap();
            prop_assert_eq!(located.node.id(), id);
        }
    }
}
