//! Editor configuration

use serde::{Deserialize, Serialize};

/// How a remote snapshot is reconciled with local edits that were made
/// while the load was in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Discard a remote snapshot when the local tree changed after the
    /// load started. This is the default: local edits win.
    #[default]
    TrustLocal,
    /// Always adopt the remote snapshot, replacing local edits.
    TrustRemote,
}

/// Behavioral settings for a [`crate::editor::ProjectEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Whether mutations are persisted automatically after they apply.
    #[serde(default = "default_autosave")]
    pub autosave: bool,
    /// Stale-snapshot handling on refresh.
    #[serde(default)]
    pub refresh_policy: RefreshPolicy,
}

const fn default_autosave() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave: true,
            refresh_policy: RefreshPolicy::TrustLocal,
        }
    }
}

impl EditorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether mutations persist automatically.
    #[must_use]
    pub const fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Sets the refresh reconciliation policy.
    #[must_use]
    pub const fn with_refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.refresh_policy = policy;
        self
    }
}
