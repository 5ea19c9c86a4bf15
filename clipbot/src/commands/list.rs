//! List command - shows every registered clip name

use super::Reply;
use crate::error::ClipError;
use crate::registry::ClipRegistry;

pub fn execute(registry: &ClipRegistry) -> Result<Reply, ClipError> {
    let names = registry.list();
    if names.is_empty() {
        return Ok(Reply::Text(
            "🗂 No clips yet. Add one with /add <name>.".to_string(),
        ));
    }

    let mut msg = String::from("🎵 Saved clips:\n");
    for name in names {
        msg.push_str(&format!("• {}\n", name));
    }
    Ok(Reply::Text(msg))
}
