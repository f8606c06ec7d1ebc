//! Target-cluster storage class payloads

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Storage classes available on the restore-target cluster, keyed by name.
///
/// Only the key set participates in reconciliation; the metadata is carried
/// through for display.
pub type TargetStorageClasses = BTreeMap<String, StorageClassMetadata>;

/// Metadata the cluster reports for a single storage class
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorageClassMetadata {
    /// Class name as reported by the cluster
    #[serde(default)]
    pub name: String,

    /// Provisioner backing the class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioner: Option<String>,

    /// Provisioner-specific parameters, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}
