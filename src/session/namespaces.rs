//! Namespace rename editor
//!
//! Accumulates operator-entered replacement names keyed by the original
//! namespace. A removable mapping rather than a nullable value: clearing an
//! entry deletes the key, so an empty-string rename can never persist.

use std::collections::HashMap;

use serde::Serialize;

/// Operator-entered namespace renames for the current session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceRenames {
    renames: HashMap<String, String>,
}

impl NamespaceRenames {
    /// Create an empty rename set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or clear the rename for one namespace.
    ///
    /// A non-empty `new_name` records or overwrites the rename; an empty one
    /// removes the entry, leaving the namespace on its original name.
    /// Idempotent, and atomic with respect to the single key it touches.
    pub fn set(&mut self, namespace: &str, new_name: &str) {
        if new_name.is_empty() {
            self.renames.remove(namespace);
        } else {
            self.renames
                .insert(namespace.to_string(), new_name.to_string());
        }
    }

    /// Current replacement for a namespace, if one is recorded
    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.renames.get(namespace).map(String::as_str)
    }

    /// Number of recorded renames
    pub fn len(&self) -> usize {
        self.renames.len()
    }

    /// Whether no renames are recorded
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Snapshot of the rename map for the request payload
    pub(crate) fn to_map(&self) -> HashMap<String, String> {
        self.renames.clone()
    }
}

/// One row of the mapping-namespace table the console renders
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceMappingRow {
    /// Namespace captured in the backup
    pub namespace: String,

    /// Replacement entered by the operator, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
}
