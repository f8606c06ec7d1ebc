//! Backed-up persistent volume claim payloads

use serde::{Deserialize, Serialize};

/// Storage class value marking a claim with no provisioner-backed class.
///
/// Such claims are exempt from compatibility checks. An empty class name is
/// an ordinary name, not this sentinel.
pub const MANUAL_STORAGE_CLASS: &str = "manual";

/// A persistent volume claim captured in the backup
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PvcDescriptor {
    /// Object metadata (only the name is consumed)
    #[serde(default)]
    pub metadata: PvcMetadata,

    /// Claim spec (only the storage class is consumed)
    #[serde(default)]
    pub spec: PvcSpec,
}

/// Metadata subset of the claim payload
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PvcMetadata {
    /// Claim name
    #[serde(default)]
    pub name: String,
}

/// Spec subset of the claim payload
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PvcSpec {
    /// Storage class the claim was bound to when it was backed up
    #[serde(default)]
    pub storage_class_name: String,
}

impl PvcDescriptor {
    /// Claim name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Storage class recorded in the backup
    pub fn storage_class(&self) -> &str {
        &self.spec.storage_class_name
    }

    /// Whether the claim is exempt from storage class reconciliation
    pub fn is_manual(&self) -> bool {
        self.spec.storage_class_name == MANUAL_STORAGE_CLASS
    }
}
