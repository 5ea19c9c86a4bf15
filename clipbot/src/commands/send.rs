//! Send command - plays a clip by name

use super::Reply;
use crate::error::ClipError;
use crate::registry::{normalize_name, ClipRegistry};

pub fn execute(name: Option<&str>, registry: &ClipRegistry) -> Result<Reply, ClipError> {
    let name = name.map(normalize_name).filter(|n| !n.is_empty()).ok_or(
        ClipError::Usage {
            command: "send",
            example: "hello",
        },
    )?;

    let record = registry.get(&name).ok_or(ClipError::NotFound(name))?;

    Ok(Reply::Clip {
        remote_handle: record.remote_handle,
        caption: None,
    })
}
