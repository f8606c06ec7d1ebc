//! Restore submission payload

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Resource kinds a restore can be created from
pub const RESTORABLE_RESOURCE_TYPES: &[&str] = &["backup", "schedule"];

/// Restore creation request accepted by the API.
///
/// Assembled once at submit time and immutable afterwards; the submission
/// collaborator sends it verbatim.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RestoreRequest {
    /// Name of the backup or schedule being restored
    pub resource_name: String,

    /// Kind of the source resource
    pub resource_type: String,

    /// Namespace renames to apply, original name to replacement
    pub mapping_namespaces: HashMap<String, String>,

    /// Free-text extra parameters forwarded to the restore tool
    pub parameters: String,
}
