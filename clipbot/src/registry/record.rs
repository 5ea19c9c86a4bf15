use serde::{Deserialize, Serialize};

/// A named clip. The audio itself lives on Telegram's side; we only keep
/// the `file_id` handle it gave us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRecord {
    pub name: String,
    pub remote_handle: String,
    pub title: String,
}

impl ClipRecord {
    pub fn new(name: &str, remote_handle: &str) -> Self {
        Self {
            name: name.to_string(),
            remote_handle: remote_handle.to_string(),
            title: name.to_string(),
        }
    }

    pub(super) fn from_stored(name: String, stored: StoredClip) -> Self {
        let title = if stored.title.is_empty() {
            name.clone()
        } else {
            stored.title
        };
        Self {
            name,
            remote_handle: stored.remote_handle,
            title,
        }
    }

    pub(super) fn to_stored(&self) -> StoredClip {
        StoredClip {
            remote_handle: self.remote_handle.clone(),
            title: self.title.clone(),
        }
    }
}

/// On-disk shape of a record. The name is the map key, so it isn't repeated.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct StoredClip {
    #[serde(rename = "remoteHandle", alias = "file_id")]
    pub remote_handle: String,
    #[serde(default)]
    pub title: String,
}

/// Lowercase and trim a clip name so lookups and writes agree on the key
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
