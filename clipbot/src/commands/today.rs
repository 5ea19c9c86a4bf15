//! Today command - clip of the day

use super::Reply;
use crate::daily_pick::DailyPickCache;
use crate::error::ClipError;
use crate::registry::ClipRegistry;
use teloxide::utils::html;

pub fn execute(daily: &DailyPickCache, registry: &ClipRegistry) -> Result<Reply, ClipError> {
    let name = daily.pick_for_today(registry)?;
    let record = registry.get(&name).ok_or(ClipError::NotFound(name))?;

    Ok(Reply::Clip {
        caption: Some(format!(
            "🎧 Clip of the day: {}",
            html::bold(&html::escape(&record.title))
        )),
        remote_handle: record.remote_handle,
    })
}
