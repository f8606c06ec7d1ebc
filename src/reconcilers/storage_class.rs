//! Storage class reconciler
//!
//! Decides, for each PVC captured in a backup, whether its storage class can
//! be honored on the restore-target cluster, must be substituted via the
//! mapping config, or has no resolution yet.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::resources::{
    PvcDescriptor, StorageClassMapping, TargetStorageClasses, MANUAL_STORAGE_CLASS,
};

/// Per-PVC reconciliation verdict
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "verdict")]
pub enum Verdict {
    /// The backed-up class exists on the target cluster
    Compatible,

    /// The backed-up class is substituted via the mapping config.
    ///
    /// The replacement is reported even when it does not itself exist on the
    /// target cluster; the console surfaces that as informational.
    #[serde(rename_all = "camelCase")]
    Remapped {
        /// Replacement class taken from the mapping config
        new_storage_class: String,
    },

    /// The backed-up class neither exists on the target nor has a mapping
    Incompatible,

    /// The claim has no provisioner-backed class and is never checked
    Exempt,
}

/// Reconciliation outcome for one backed-up PVC
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PvcAssessment {
    /// Claim name from the backup
    pub pvc_name: String,

    /// Storage class recorded in the backup
    pub storage_class: String,

    /// Verdict for this claim
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Compatibility report, one entry per backed-up PVC in backup order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    /// Per-claim outcomes
    pub entries: Vec<PvcAssessment>,
}

impl CompatibilityReport {
    /// Whether every claim is restorable without further operator action
    pub fn is_clean(&self) -> bool {
        !self
            .entries
            .iter()
            .any(|e| matches!(e.verdict, Verdict::Incompatible))
    }
}

/// A storage class that needs a mapping before the restore can bind it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmappedClass {
    /// Class recorded in the backup with no resolution on the target
    pub old_storage_class: String,

    /// Suggested replacement: the class itself when it already exists on the
    /// target, otherwise empty for the operator to fill in
    pub new_storage_class: String,
}

/// Reconcile backed-up PVCs against the target cluster's storage classes.
///
/// Pure over its inputs; identical inputs yield identical, order-stable
/// output. Report entries follow backup order, unmapped classes follow first
/// appearance among the claims. Duplicate old classes in the mapping config
/// are not an error: the last record in config order wins.
pub fn reconcile(
    target_classes: &TargetStorageClasses,
    mapped_classes: &[StorageClassMapping],
    pvcs: &[PvcDescriptor],
) -> (CompatibilityReport, Vec<UnmappedClass>) {
    let active: HashMap<&str, &str> = mapped_classes
        .iter()
        .map(|m| (m.old_storage_class.as_str(), m.new_storage_class.as_str()))
        .collect();

    let mut entries = Vec::with_capacity(pvcs.len());
    let mut unmapped: Vec<UnmappedClass> = Vec::new();
    let mut seen = HashSet::new();

    for pvc in pvcs {
        let class = pvc.storage_class();

        let verdict = if pvc.is_manual() {
            Verdict::Exempt
        } else if target_classes.contains_key(class) {
            Verdict::Compatible
        } else if let Some(new_class) = active.get(class) {
            Verdict::Remapped {
                new_storage_class: (*new_class).to_string(),
            }
        } else {
            if seen.insert(class.to_string()) {
                unmapped.push(UnmappedClass {
                    old_storage_class: class.to_string(),
                    new_storage_class: if target_classes.contains_key(class) {
                        class.to_string()
                    } else {
                        String::new()
                    },
                });
            }
            Verdict::Incompatible
        };

        entries.push(PvcAssessment {
            pvc_name: pvc.name().to_string(),
            storage_class: class.to_string(),
            verdict,
        });
    }

    debug!(
        pvcs = entries.len(),
        unmapped = unmapped.len(),
        "Reconciled backup storage classes against target cluster"
    );

    (CompatibilityReport { entries }, unmapped)
}
