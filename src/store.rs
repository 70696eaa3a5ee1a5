//! Chat session store — all session state and its operations.
//!
//! DESIGN
//! ======
//! The store exclusively owns channels, users, and per-channel history.
//! Mutation points are exactly three: channel selection (which may seed a
//! channel's canned transcript on first touch), user selection, and message
//! append. History is append-only and per-channel message ids strictly
//! increase, so a channel's sequence is always its exact append order.
//!
//! ERROR HANDLING
//! ==============
//! Unknown ids and sending with no selection fail with [`StoreError`] and
//! leave every field untouched. A blank message (empty after trimming) is a
//! silent no-op by contract, not an error.

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::model::{Channel, ChannelId, Message, MessageId, User, UserId};
use crate::seed::{self, SeedMessage};

// =============================================================================
// STORE
// =============================================================================

/// In-memory session store backing a chat presentation layer.
pub struct ChatSessionStore {
    /// Channel roster, in display order. Fixed for the session.
    channels: Vec<Channel>,
    /// Online-user roster, in display order. Fixed for the session.
    users: Vec<User>,
    /// Per-channel history. Keys are exactly the known channel ids.
    history: HashMap<ChannelId, Vec<Message>>,
    /// Channels whose seed transcript has already been installed.
    seeded: HashSet<ChannelId>,
    /// Canned transcript installed on a channel's first selection.
    transcript: Vec<SeedMessage>,
    active_channel: Option<ChannelId>,
    active_user: Option<UserId>,
    clock: Box<dyn Clock>,
}

impl ChatSessionStore {
    /// Build a store over an explicit roster.
    ///
    /// Every channel starts with an empty history; `transcript` is installed
    /// lazily, once per channel, on first selection. No channel or user is
    /// active until explicitly selected.
    #[must_use]
    pub fn new(
        channels: Vec<Channel>,
        users: Vec<User>,
        transcript: Vec<SeedMessage>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let history = channels.iter().map(|c| (c.id, Vec::new())).collect();
        Self {
            channels,
            users,
            history,
            seeded: HashSet::new(),
            transcript,
            active_channel: None,
            active_user: None,
            clock,
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Channel roster, in display order. Never fails.
    #[must_use]
    pub fn list_channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Online-user roster, in display order. Never fails.
    #[must_use]
    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    /// Look up a channel by id.
    #[must_use]
    pub fn channel(&self, channel_id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == channel_id)
    }

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Currently selected channel, if any.
    #[must_use]
    pub fn active_channel(&self) -> Option<&Channel> {
        self.active_channel.and_then(|id| self.channel(id))
    }

    /// Currently selected user, if any.
    #[must_use]
    pub fn active_user(&self) -> Option<&User> {
        self.active_user.and_then(|id| self.user(id))
    }

    // =========================================================================
    // SELECT
    // =========================================================================

    /// Select a channel and return a snapshot of its ordered history.
    ///
    /// First selection of a channel installs its seed transcript exactly
    /// once; every later selection is a pure read. A failed select leaves
    /// the active channel unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ChannelNotFound`] for an unknown id.
    pub fn select_channel(&mut self, channel_id: ChannelId) -> Result<Vec<Message>, StoreError> {
        if self.channel(channel_id).is_none() {
            return Err(StoreError::ChannelNotFound(channel_id));
        }

        let newly_seeded = self.seeded.insert(channel_id);
        if newly_seeded {
            self.seed_channel(channel_id);
        }
        self.active_channel = Some(channel_id);

        let history = self.history.entry(channel_id).or_default();
        info!(channel_id, seeded = newly_seeded, messages = history.len(), "channel selected");
        Ok(history.clone())
    }

    /// Select the active user.
    ///
    /// A failed select leaves the active user unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UserNotFound`] for an unknown id.
    pub fn select_user(&mut self, user_id: UserId) -> Result<(), StoreError> {
        if self.user(user_id).is_none() {
            return Err(StoreError::UserNotFound(user_id));
        }
        self.active_user = Some(user_id);
        info!(user_id, "user selected");
        Ok(())
    }

    // =========================================================================
    // SEND
    // =========================================================================

    /// Append a message to the active channel and return it.
    ///
    /// Content that trims to empty is ignored: the operation returns
    /// `Ok(None)` without validating anything else, mirroring the blank
    /// check the original submit handler runs first. Successful sends store
    /// the content as given (untrimmed) with a freshly assigned id strictly
    /// greater than any existing id in the channel and a timestamp captured
    /// from the clock at call time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UserNotFound`] for an unknown author and
    /// [`StoreError::NoActiveChannel`] when no channel is selected. Failed
    /// sends leave all history untouched.
    pub fn send_message(&mut self, author: UserId, content: &str) -> Result<Option<Message>, StoreError> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let author_name = self
            .user(author)
            .ok_or(StoreError::UserNotFound(author))?
            .name
            .clone();
        let channel_id = self.active_channel.ok_or(StoreError::NoActiveChannel)?;

        let timestamp = self.clock.timestamp();
        let messages = self.history.entry(channel_id).or_default();
        let message = Message {
            id: next_id(messages),
            channel_id,
            author_name,
            content: content.to_string(),
            timestamp,
        };
        messages.push(message.clone());

        info!(channel_id, message_id = message.id, author, "message appended");
        Ok(Some(message))
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Install the seed transcript into a channel. Called at most once per
    /// channel, guarded by the `seeded` set.
    fn seed_channel(&mut self, channel_id: ChannelId) {
        let messages = self.history.entry(channel_id).or_default();
        for seed in &self.transcript {
            messages.push(Message {
                id: next_id(messages),
                channel_id,
                author_name: seed.author_name.to_string(),
                content: seed.content.to_string(),
                timestamp: seed.timestamp.to_string(),
            });
        }
    }
}

impl Default for ChatSessionStore {
    /// Store over the default school roster with the system clock.
    fn default() -> Self {
        Self::new(
            seed::default_channels(),
            seed::default_users(),
            seed::default_transcript(),
            Box::new(SystemClock),
        )
    }
}

/// Next message id for a channel: strictly greater than any existing id.
/// History is append-only in ascending id order, so the last element holds
/// the current maximum.
fn next_id(messages: &[Message]) -> MessageId {
    messages.last().map_or(1, |m| m.id + 1)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
