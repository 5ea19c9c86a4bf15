//! Add command - remembers the name for the requester's next upload

use super::Reply;
use crate::error::ClipError;
use crate::pending::{PendingRegistrations, RequesterId};
use crate::registry::normalize_name;

pub fn execute(
    requester: RequesterId,
    name: Option<&str>,
    pending: &PendingRegistrations,
) -> Result<Reply, ClipError> {
    let name = name.map(normalize_name).filter(|n| !n.is_empty()).ok_or(
        ClipError::Usage {
            command: "add",
            example: "hello",
        },
    )?;

    pending.begin_registration(requester, &name);
    log::info!(
        "Commands: Requester {} started registering '{}'",
        requester,
        name
    );

    Ok(Reply::Text(format!(
        "🎤 Now send a voice note or audio file and I'll save it as: {}",
        name
    )))
}
