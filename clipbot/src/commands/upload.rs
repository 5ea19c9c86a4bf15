//! Upload handling - binds a received clip to the pending name

use super::Reply;
use crate::error::ClipError;
use crate::pending::{PendingRegistrations, RequesterId};
use crate::registry::ClipRegistry;

pub fn execute(
    requester: RequesterId,
    remote_handle: &str,
    pending: &PendingRegistrations,
    registry: &ClipRegistry,
) -> Result<Reply, ClipError> {
    let Some(name) = pending.consume_pending(requester) else {
        log::warn!(
            "Commands: Upload from requester {} with nothing pending",
            requester
        );
        return Err(ClipError::NoPendingRegistration);
    };

    let record = registry.put(&name, remote_handle)?;
    log::info!(
        "Commands: Requester {} saved clip '{}'",
        requester,
        record.name
    );

    Ok(Reply::Text(format!(
        "✅ Clip '{}' saved! Play it with /send {}",
        record.name, record.name
    )))
}
