//! Command routing for the clip bot
//!
//! Requests arrive already stripped of transport details (see
//! `channels::telegram`). The router classifies them, runs the matching
//! handler and always hands back a [`Reply`]; user-facing errors become
//! text replies here and never reach the transport.

mod add;
mod help;
mod inline;
mod list;
mod send;
mod today;
mod upload;


use crate::daily_pick::DailyPickCache;
use crate::error::ClipError;
use crate::pending::{PendingRegistrations, RequesterId};
use crate::registry::ClipRegistry;
use std::sync::Arc;

/// Text commands understood by the bot
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `/start` or `/help`
    Help,
    /// Begin registration: `/add <name>`
    Add(Option<String>),
    /// Play a clip: `/send <name>`
    Send(Option<String>),
    /// `/list`
    List,
    /// Clip of the day: `/today`
    Today,
}

/// Parse a command from message text. Returns `None` for plain text,
/// unknown commands and commands addressed to another bot.
///
/// `bot_username` is this bot's username without the `@`. When it is `None`
/// any `@mention` suffix is accepted.
pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Command> {
    let text = text.trim();
    let mut parts = text.split_whitespace();

    // "/add@clipbot alarm" in group chats carries the bot's username
    let head = parts.next()?.strip_prefix('/')?;
    let (head, mention) = match head.split_once('@') {
        Some((head, mention)) => (head, Some(mention)),
        None => (head, None),
    };
    if let (Some(mention), Some(ours)) = (mention, bot_username) {
        if !mention.eq_ignore_ascii_case(ours) {
            log::debug!("Commands: Ignoring command for @{}", mention);
            return None;
        }
    }
    let command = head.to_lowercase();
    let argument = parts.next().map(|arg| arg.to_string());

    log::debug!(
        "Commands: Parsing '{}' -> command '{}', argument {:?}",
        text,
        command,
        argument
    );

    match command.as_str() {
        "start" | "help" => Some(Command::Help),
        "add" | "register" => Some(Command::Add(argument)),
        "send" | "play" => Some(Command::Send(argument)),
        "list" => Some(Command::List),
        "today" | "daily" => Some(Command::Today),
        _ => {
            log::debug!("Commands: Unknown command '{}'", command);
            None
        }
    }
}

/// An inbound request with transport details removed
#[derive(Debug)]
pub enum Request {
    Command {
        requester: RequesterId,
        command: Command,
    },
    /// A message that may carry a voice note or audio file. `remote_handle`
    /// is `None` when it carries neither.
    Upload {
        requester: RequesterId,
        remote_handle: Option<String>,
    },
    InlineQuery { query: String },
}

/// An inline search suggestion pointing at an already-uploaded clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineClip {
    pub id: String,
    pub remote_handle: String,
    pub title: String,
}

/// What the transport should send back
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to send
    Nothing,
    Text(String),
    /// Play a stored clip. The caption, when present, is HTML.
    Clip {
        remote_handle: String,
        caption: Option<String>,
    },
    Inline {
        results: Vec<InlineClip>,
        cache_time: u32,
    },
}

/// Routes requests to handlers over the shared registry state.
///
/// All three stores live for the whole process and are shared with nothing
/// else; the router is the only thing that mutates them.
pub struct ClipRouter {
    registry: Arc<ClipRegistry>,
    pending: Arc<PendingRegistrations>,
    daily: Arc<DailyPickCache>,
}

impl ClipRouter {
    pub fn new(
        registry: Arc<ClipRegistry>,
        pending: Arc<PendingRegistrations>,
        daily: Arc<DailyPickCache>,
    ) -> Self {
        Self {
            registry,
            pending,
            daily,
        }
    }

    #[cfg(test)]
    pub fn registry(&self) -> &ClipRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn pending(&self) -> &PendingRegistrations {
        &self.pending
    }

    /// Handle a request and return the reply
    pub fn handle(&self, request: Request) -> Reply {
        let result = match request {
            Request::Command { requester, command } => self.execute(requester, command),
            Request::Upload {
                requester,
                remote_handle,
            } => match remote_handle {
                Some(handle) => upload::execute(requester, &handle, &self.pending, &self.registry),
                None => Ok(Reply::Nothing),
            },
            Request::InlineQuery { query } => Ok(inline::execute(&query, &self.registry)),
        };

        result.unwrap_or_else(|e| {
            if e.is_persistence() {
                log::error!("Commands: Registry write failed: {}", e);
            } else {
                log::debug!("Commands: Request rejected: {}", e);
            }
            Reply::Text(e.user_message())
        })
    }

    fn execute(&self, requester: RequesterId, command: Command) -> Result<Reply, ClipError> {
        match command {
            Command::Help => Ok(Reply::Text(help::execute())),
            Command::Add(name) => add::execute(requester, name.as_deref(), &self.pending),
            Command::Send(name) => send::execute(name.as_deref(), &self.registry),
            Command::List => list::execute(&self.registry),
            Command::Today => today::execute(&self.daily, &self.registry),
        }
    }
}
