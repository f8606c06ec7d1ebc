//! Restore submission reconciler
//!
//! Validates the operator's restore configuration before the request payload
//! is built. Storage class incompatibilities do not block submission; the
//! console surfaces them as feedback only.

use crate::error::{Error, Result};
use crate::resources::RESTORABLE_RESOURCE_TYPES;
use crate::session::RestoreSession;

/// Validate the restore session ahead of submission
pub fn validate(session: &RestoreSession) -> Result<()> {
    if session.resource_name().is_empty() {
        return Err(Error::validation(
            "A backup resource name must be specified",
        ));
    }

    if !RESTORABLE_RESOURCE_TYPES
        .iter()
        .any(|t| *t == session.resource_type())
    {
        return Err(Error::validation(format!(
            "Cannot restore from resource type '{}'",
            session.resource_type()
        )));
    }

    Ok(())
}
