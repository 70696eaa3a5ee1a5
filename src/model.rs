//! Entity types shared between the store and a presentation layer.
//!
//! DESIGN
//! ======
//! Channels and users are created at store initialization and never change
//! for the lifetime of a session; messages are created only by the send
//! operation and are append-only. Everything derives serde so snapshots can
//! cross the presentation boundary as plain values.

use serde::{Deserialize, Serialize};

/// Channel identifier. Stable for the session.
pub type ChannelId = u32;

/// User identifier. Stable for the session.
pub type UserId = u32;

/// Message identifier. Monotonically increasing within a channel.
pub type MessageId = u64;

/// A named topic partitioning the message history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    /// Display name, non-empty.
    pub name: String,
}

/// Role a user holds in the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Instructor,
    Student,
}

impl Role {
    /// Stable string form, matching the serde rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instructor => "instructor",
            Self::Student => "student",
        }
    }

    /// Parse the string form back. Returns `None` for anything else.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "instructor" => Some(Self::Instructor),
            "student" => Some(Self::Student),
            _ => None,
        }
    }
}

/// A member of the session's online-user roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name, non-empty.
    pub name: String,
    pub role: Role,
    /// Opaque avatar reference; the store never interprets it.
    pub avatar_ref: String,
}

/// One chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within the owning channel, strictly increasing in append order.
    pub id: MessageId,
    pub channel_id: ChannelId,
    /// Author display name, captured at send time.
    pub author_name: String,
    /// Raw content as submitted. Guaranteed non-empty after trimming.
    pub content: String,
    /// Localized `HH:MM` display string captured at send time.
    pub timestamp: String,
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
