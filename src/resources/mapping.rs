//! Storage class mapping config payloads

use serde::{Deserialize, Serialize};

/// One old-to-new storage class substitution record from the mapping config.
///
/// The config is an ordered list; when two records carry the same old class,
/// the later one is the active mapping.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageClassMapping {
    /// Storage class name recorded in the backup
    pub old_storage_class: String,

    /// Replacement class to bind on the target cluster
    pub new_storage_class: String,
}
