//! Core identifier types for the layout tree
//!
//! This module contains the fundamental identifier newtypes and the
//! node-kind enum used throughout the layout engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node in the layout tree.
///
/// Every row, column and leaf carries a `NodeId` that persists
/// throughout its lifetime, even as the node is moved around the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Creates a new random node ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a node ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Unique identifier for a component instance.
///
/// A component instance is the configured record a leaf node refers
/// to; it is owned by the catalog, not by the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub Uuid);

impl ComponentId {
    /// Creates a new random component ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a component ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({})", self.0)
    }
}

/// Unique identifier for a project.
///
/// Each project owns exactly one layout and one component catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    /// Creates a new random project ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a project ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project({})", self.0)
    }
}

/// The kind of a node in the layout tree.
///
/// The tree nests at exactly three levels: rows at the top, columns
/// inside rows, and component leaves inside columns. A path's depth
/// therefore determines the kind of the node it addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A top-level row containing columns.
    Row,
    /// A column inside a row, containing component leaves.
    Column,
    /// A leaf referencing a component instance.
    Component,
}

impl NodeKind {
    /// Returns the path depth at which this kind of node lives.
    ///
    /// Rows sit at depth 1, columns at depth 2, leaves at depth 3.
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Row => 1,
            Self::Column => 2,
            Self::Component => 3,
        }
    }

    /// Returns the node kind addressed by a path of the given depth.
    ///
    /// Returns `None` for depth 0 or any depth beyond the leaf level.
    #[must_use]
    pub const fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(Self::Row),
            2 => Some(Self::Column),
            3 => Some(Self::Component),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
            Self::Component => write!(f, "component"),
        }
    }
}
