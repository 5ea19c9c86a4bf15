//! Error taxonomy for the clip registry and its command handlers.
//!
//! User-facing variants are turned into replies at the router boundary via
//! [`ClipError::user_message`]. Persistence variants are fatal at startup and
//! reported as a failed operation everywhere else.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    /// A command was issued without its required argument
    #[error("usage: /{command} <name>")]
    Usage {
        command: &'static str,
        example: &'static str,
    },

    #[error("no clip named '{0}'")]
    NotFound(String),

    /// An upload arrived from a requester with no pending registration
    #[error("no pending registration")]
    NoPendingRegistration,

    #[error("registry is empty")]
    EmptyRegistry,

    #[error("failed to access registry file {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("registry file {} is not valid: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ClipError {
    /// Whether this error comes from the backing file rather than the request
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. } | Self::Corrupt { .. })
    }

    /// Text shown to the requester in place of the normal reply
    pub fn user_message(&self) -> String {
        match self {
            Self::Usage { command, example } => {
                format!("❗ Give a name: /{} {}", command, example)
            }
            Self::NotFound(_) => "🚫 No clip with that name was found.".to_string(),
            Self::NoPendingRegistration => "❗ Register a name first: /add <name>".to_string(),
            Self::EmptyRegistry => "📭 There are no clips yet.".to_string(),
            Self::Persistence { .. } | Self::Corrupt { .. } => {
                "⚠️ Could not save the clip registry. Please try again later.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message_names_command() {
        let err = ClipError::Usage {
            command: "send",
            example: "hello",
        };
        assert_eq!(err.user_message(), "❗ Give a name: /send hello");
        assert_eq!(err.to_string(), "usage: /send <name>");
    }

    #[test]
    fn test_persistence_classification() {
        let io = ClipError::Persistence {
            path: PathBuf::from("/tmp/x.json"),
            source: std::io::Error::other("disk full"),
        };
        assert!(io.is_persistence());
        assert!(io.to_string().contains("/tmp/x.json"));
        assert!(!ClipError::EmptyRegistry.is_persistence());
        assert!(!ClipError::NotFound("a".into()).is_persistence());
    }
}
