//! Store error taxonomy.
//!
//! DESIGN
//! ======
//! Every failure is a not-found of some kind: an id the roster doesn't know,
//! or a required selection that hasn't been made. Errors surface to the
//! caller unchanged; nothing is recovered internally. Blank message
//! submissions are deliberately NOT errors — the send operation treats them
//! as a silent no-op.

use crate::model::{ChannelId, UserId};

/// Grepable error code for structured error reporting.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Failures surfaced by [`crate::ChatSessionStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("channel not found: {0}")]
    ChannelNotFound(ChannelId),
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    #[error("no channel is currently selected")]
    NoActiveChannel,
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ChannelNotFound(_) => "E_CHANNEL_NOT_FOUND",
            Self::UserNotFound(_) => "E_USER_NOT_FOUND",
            Self::NoActiveChannel => "E_NO_ACTIVE_CHANNEL",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
