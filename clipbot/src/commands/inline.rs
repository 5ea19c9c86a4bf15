//! Inline search - suggests clips matching the typed text

use super::{InlineClip, Reply};
use crate::registry::ClipRegistry;
use sha2::{Digest, Sha256};

/// Maximum number of suggestions returned for one inline query
pub const INLINE_RESULT_LIMIT: usize = 10;

/// How long Telegram may cache an inline answer
pub const INLINE_CACHE_SECONDS: u32 = 1;

pub fn execute(query: &str, registry: &ClipRegistry) -> Reply {
    let query = query.to_lowercase();
    log::debug!("Commands: Inline query '{}'", query);

    let results: Vec<InlineClip> = registry
        .search(&query)
        .into_iter()
        .take(INLINE_RESULT_LIMIT)
        .map(|record| InlineClip {
            id: result_id(&record.name),
            remote_handle: record.remote_handle,
            title: record.title,
        })
        .collect();

    log::debug!("Commands: Inline query matched {} clips", results.len());

    Reply::Inline {
        results,
        cache_time: INLINE_CACHE_SECONDS,
    }
}

/// Telegram caps result ids at 64 bytes, so names are hashed rather than
/// used directly.
fn result_id(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    format!("clip_{}", &hex::encode(digest)[..32])
}
