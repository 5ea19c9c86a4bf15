//! Pending registration tracking
//!
//! `/add <name>` records which name the requester's next voice or audio
//! upload should be saved under. The entry is consumed by that upload.
//! Entries never expire; they live until consumed or the process exits.

use dashmap::DashMap;

/// Telegram user id of whoever issued the command
pub type RequesterId = u64;

pub struct PendingRegistrations {
    /// Map of requester -> name awaiting an upload
    pending: DashMap<RequesterId, String>,
}

impl PendingRegistrations {
    pub fn new() -> Self {
        Self {
            pending: DashMap::new(),
        }
    }

    /// Record `name` for the requester's next upload, replacing any earlier one
    pub fn begin_registration(&self, requester: RequesterId, name: &str) {
        if let Some(previous) = self.pending.insert(requester, name.to_string()) {
            log::debug!(
                "Pending: Requester {} replaced pending name '{}' with '{}'",
                requester,
                previous,
                name
            );
        }
    }

    /// Remove and return the pending name, if any
    pub fn consume_pending(&self, requester: RequesterId) -> Option<String> {
        self.pending.remove(&requester).map(|(_, name)| name)
    }

    #[cfg(test)]
    pub fn pending_for(&self, requester: RequesterId) -> Option<String> {
        self.pending.get(&requester).map(|entry| entry.clone())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Default for PendingRegistrations {
    fn default() -> Self {
        Self::new()
    }
}
