//! escola-chat — in-process session store for a school chat frontend.
//!
//! ARCHITECTURE
//! ============
//! One owned store ([`ChatSessionStore`]) holds the channel roster, the
//! online-user list, and per-channel message history. A presentation layer
//! is an external collaborator: it calls the store's operations and renders
//! the returned snapshots, owning no chat state of its own beyond transient
//! input text.
//!
//! DESIGN
//! ======
//! - Synchronous and single-owner: every operation takes `&self`/`&mut self`
//!   and runs to completion. Callers sharing the store across threads must
//!   serialize access themselves (a single mutex is enough).
//! - Append-only history: messages are never edited, deleted, or reordered.
//! - Lazy seeding: a channel's canned transcript is installed exactly once,
//!   on first selection, never on later switches back to the channel.

pub mod clock;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::{ErrorCode, StoreError};
pub use model::{Channel, ChannelId, Message, MessageId, Role, User, UserId};
pub use store::ChatSessionStore;
