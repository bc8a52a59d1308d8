//! Property-based tests for the tree-path codec

use proptest::prelude::*;

use pagegrid_core::TreePath;

/// Strategy for generating valid path segment lists
fn segments_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..100, 1..=3)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rendering a path and parsing it back yields the same segments.
    #[test]
    fn display_parse_identity(segments in segments_strategy()) {
        let path = TreePath::new(segments.clone());
        let parsed = TreePath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(parsed.segments(), segments.as_slice());
    }

    /// Parsing never panics, whatever the input string.
    #[test]
    fn parse_is_total(raw in ".*") {
        let _ = TreePath::parse(&raw);
    }

    /// A child path's parent is the path it was derived from.
    #[test]
    fn child_then_parent_roundtrips(
        segments in prop::collection::vec(0usize..100, 1..=2),
        index in 0usize..100,
    ) {
        let path = TreePath::new(segments);
        let child = path.child(index);
        prop_assert_eq!(child.parent().unwrap(), path);
    }

    /// Sibling paths share a parent; paths of different depth never do.
    #[test]
    fn same_parent_requires_equal_depth(
        segments in segments_strategy(),
        index in 0usize..100,
    ) {
        let path = TreePath::new(segments);
        let deeper = path.child(index);
        prop_assert!(!path.same_parent(&deeper));
        prop_assert!(path.same_parent(&path));
    }
}
