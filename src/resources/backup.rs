//! Backup describe payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Resource list key under which the describe payload reports namespaces
pub const NAMESPACE_RESOURCE_KEY: &str = "v1/Namespace";

/// Describe payload for a backup or schedule resource.
///
/// Only the captured resource list is consumed here; the rest of the payload
/// is display material for the console.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BackupDetail {
    /// Resource status as reported by the backup tool
    #[serde(default)]
    pub status: BackupStatus,
}

/// Status subset of the describe payload
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackupStatus {
    /// Captured resource names grouped by apiVersion/Kind
    #[serde(default)]
    pub resource_list: HashMap<String, Vec<String>>,
}

impl BackupDetail {
    /// Namespace names captured in the backup, in recorded order
    pub fn namespaces(&self) -> &[String] {
        self.status
            .resource_list
            .get(NAMESPACE_RESOURCE_KEY)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
