//! Id-generation collaborator
//!
//! Mutations never mint identifiers themselves; they receive them from
//! an [`IdGenerator`]. The trait seam lets tests pin ids while the
//! default generator draws random UUIDs, which never collide with any
//! id already present in a tree or catalog.

use crate::layout::types::{ComponentId, NodeId};

/// Source of fresh identifiers for inserted nodes and the component
/// instances they reference.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh node identifier.
    fn node_id(&self) -> NodeId;

    /// Returns a fresh component-instance identifier.
    fn component_id(&self) -> ComponentId;
}

/// The default generator: random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Creates a new UUID-backed generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn node_id(&self) -> NodeId {
        NodeId::new()
    }

    fn component_id(&self) -> ComponentId {
        ComponentId::new()
    }
}
