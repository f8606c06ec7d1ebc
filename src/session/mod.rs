//! Restore configuration session
//!
//! One session per in-progress restore dialog. Collaborators fill the input
//! slots as their fetches complete; derived reports are recomputed whenever a
//! slot changes, and only once every contributing input is present, so a
//! fetch still in flight reads as "not yet available" rather than empty.

mod namespaces;

pub use namespaces::{NamespaceMappingRow, NamespaceRenames};

use tracing::{debug, info};

use crate::adapters::build_restore_request;
use crate::error::{Error, Result};
use crate::reconcilers::storage_class::{self, CompatibilityReport, UnmappedClass};
use crate::resources::{
    BackupDetail, PvcDescriptor, RestoreRequest, StorageClassMapping, TargetStorageClasses,
};

/// In-progress restore configuration for a single backup resource.
///
/// Holds no state across restore attempts; dropping the session discards all
/// operator edits.
#[derive(Clone, Debug)]
pub struct RestoreSession {
    resource_name: String,
    resource_type: String,

    target_classes: Option<TargetStorageClasses>,
    class_mappings: Option<Vec<StorageClassMapping>>,
    backup_pvcs: Option<Vec<PvcDescriptor>>,
    backup_namespaces: Option<Vec<String>>,

    renames: NamespaceRenames,
    parameters: String,

    report: Option<(CompatibilityReport, Vec<UnmappedClass>)>,
}

impl RestoreSession {
    /// Open a session for the given backup or schedule resource
    pub fn new(resource_name: impl Into<String>, resource_type: impl Into<String>) -> Self {
        let resource_name = resource_name.into();
        let resource_type = resource_type.into();

        info!(
            resource_name = %resource_name,
            resource_type = %resource_type,
            "Opened restore configuration session"
        );

        Self {
            resource_name,
            resource_type,
            target_classes: None,
            class_mappings: None,
            backup_pvcs: None,
            backup_namespaces: None,
            renames: NamespaceRenames::new(),
            parameters: String::new(),
            report: None,
        }
    }

    /// Name of the resource being restored
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Kind of the resource being restored
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Record the storage classes available on the target cluster
    pub fn set_target_classes(&mut self, classes: TargetStorageClasses) {
        self.target_classes = Some(classes);
        self.recompute();
    }

    /// Record the old-to-new storage class mapping config
    pub fn set_class_mappings(&mut self, mappings: Vec<StorageClassMapping>) {
        self.class_mappings = Some(mappings);
        self.recompute();
    }

    /// Record the PVCs captured in the backup
    pub fn set_backup_pvcs(&mut self, pvcs: Vec<PvcDescriptor>) {
        self.backup_pvcs = Some(pvcs);
        self.recompute();
    }

    /// Record the namespaces captured in the backup
    pub fn set_backup_namespaces(&mut self, namespaces: Vec<String>) {
        self.backup_namespaces = Some(namespaces);
    }

    /// Record the namespace list from a backup describe payload
    pub fn set_backup_detail(&mut self, detail: &BackupDetail) {
        self.set_backup_namespaces(detail.namespaces().to_vec());
    }

    // Re-derive the storage class reports. Runs only once all three
    // contributing inputs are present: a partially loaded input set must
    // never masquerade as an empty one.
    fn recompute(&mut self) {
        let (Some(targets), Some(mappings), Some(pvcs)) = (
            self.target_classes.as_ref(),
            self.class_mappings.as_deref(),
            self.backup_pvcs.as_deref(),
        ) else {
            return;
        };

        self.report = Some(storage_class::reconcile(targets, mappings, pvcs));
        debug!(
            resource_name = %self.resource_name,
            "Recomputed storage class compatibility"
        );
    }

    /// Per-PVC compatibility report.
    ///
    /// Unavailable until the target classes, the mapping config, and the
    /// backup PVC list have all loaded.
    pub fn compatibility_report(&self) -> Result<&CompatibilityReport> {
        self.report
            .as_ref()
            .map(|(report, _)| report)
            .ok_or_else(|| self.missing_input())
    }

    /// Storage classes that still need a mapping before restore
    pub fn unmapped_classes(&self) -> Result<&[UnmappedClass]> {
        self.report
            .as_ref()
            .map(|(_, unmapped)| unmapped.as_slice())
            .ok_or_else(|| self.missing_input())
    }

    /// Active mapping records followed by suggestions for the unmapped
    /// classes: the combined list the operator writes back to the mapping
    /// config.
    pub fn mapping_candidates(&self) -> Result<Vec<StorageClassMapping>> {
        let unmapped = self.unmapped_classes()?;

        let mut candidates = self.class_mappings.clone().unwrap_or_default();
        candidates.extend(unmapped.iter().map(|u| StorageClassMapping {
            old_storage_class: u.old_storage_class.clone(),
            new_storage_class: u.new_storage_class.clone(),
        }));

        Ok(candidates)
    }

    fn missing_input(&self) -> Error {
        if self.target_classes.is_none() {
            Error::InputUnavailable("target storage classes")
        } else if self.class_mappings.is_none() {
            Error::InputUnavailable("storage class mapping config")
        } else {
            Error::InputUnavailable("backup PVC list")
        }
    }

    /// Mapping-namespace table: one row per backup namespace, in backup
    /// order, with the operator's current replacement if any.
    ///
    /// Unavailable until the backup namespace list has loaded.
    pub fn namespace_table(&self) -> Result<Vec<NamespaceMappingRow>> {
        let namespaces = self
            .backup_namespaces
            .as_ref()
            .ok_or(Error::InputUnavailable("backup namespace list"))?;

        Ok(namespaces
            .iter()
            .map(|ns| NamespaceMappingRow {
                namespace: ns.clone(),
                new_name: self.renames.get(ns).map(str::to_string),
            })
            .collect())
    }

    /// Record or clear the rename for one namespace; an empty replacement
    /// clears it.
    pub fn set_namespace_rename(&mut self, namespace: &str, new_name: &str) {
        self.renames.set(namespace, new_name);
    }

    /// Operator-entered namespace renames
    pub fn namespace_renames(&self) -> &NamespaceRenames {
        &self.renames
    }

    /// Set the free-text extra parameters forwarded with the request
    pub fn set_parameters(&mut self, parameters: impl Into<String>) {
        self.parameters = parameters.into();
    }

    /// Free-text extra parameters
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    /// Validate the session and assemble the restore creation request
    pub fn build_request(&self) -> Result<RestoreRequest> {
        build_restore_request(self)
    }
}
