//! Restore request adapter
//!
//! Converts the operator's session state to the restore creation payload.

use tracing::info;

use crate::error::Result;
use crate::reconcilers::restore;
use crate::resources::RestoreRequest;
use crate::session::RestoreSession;

/// Build the restore creation request from the current session state.
///
/// Validates the session first. The returned payload is complete; nothing
/// mutates it between here and submission.
pub fn build_restore_request(session: &RestoreSession) -> Result<RestoreRequest> {
    restore::validate(session)?;

    let request = RestoreRequest {
        resource_name: session.resource_name().to_string(),
        resource_type: session.resource_type().to_string(),
        mapping_namespaces: session.namespace_renames().to_map(),
        parameters: session.parameters().to_string(),
    };

    info!(
        resource_name = %request.resource_name,
        resource_type = %request.resource_type,
        namespace_renames = request.mapping_namespaces.len(),
        "Built restore request"
    );

    Ok(request)
}
