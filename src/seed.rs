//! Deterministic default roster and seed transcript.
//!
//! DESIGN
//! ======
//! The default session mirrors the school-chat mock data: four channels,
//! three users, and one canned three-message transcript. The transcript is
//! channel-independent — every channel seeds the same opening exchange on
//! first selection, exactly once.

use crate::model::{Channel, Role, User};

/// Author/content/timestamp triple installed by first-touch seeding.
///
/// Not a full [`crate::Message`]: the store assigns ids and the channel id
/// at seed time so per-channel ordering invariants hold.
#[derive(Debug, Clone)]
pub struct SeedMessage {
    pub author_name: &'static str,
    pub content: &'static str,
    pub timestamp: &'static str,
}

const AVATAR_PLACEHOLDER: &str = "/placeholder.svg?height=32&width=32";

/// Default channel roster, in display order.
#[must_use]
pub fn default_channels() -> Vec<Channel> {
    vec![
        Channel { id: 1, name: "geral".into() },
        Channel { id: 2, name: "matemática".into() },
        Channel { id: 3, name: "português".into() },
        Channel { id: 4, name: "história".into() },
    ]
}

/// Default online-user roster, in display order.
#[must_use]
pub fn default_users() -> Vec<User> {
    vec![
        User { id: 1, name: "João Silva".into(), role: Role::Instructor, avatar_ref: AVATAR_PLACEHOLDER.into() },
        User { id: 2, name: "Maria Santos".into(), role: Role::Student, avatar_ref: AVATAR_PLACEHOLDER.into() },
        User { id: 3, name: "Pedro Oliveira".into(), role: Role::Student, avatar_ref: AVATAR_PLACEHOLDER.into() },
    ]
}

/// Canned opening transcript, seeded into each channel on first selection.
#[must_use]
pub fn default_transcript() -> Vec<SeedMessage> {
    vec![
        SeedMessage { author_name: "João Silva", content: "Olá, turma!", timestamp: "10:00" },
        SeedMessage { author_name: "Maria Santos", content: "Olá, professor!", timestamp: "10:01" },
        SeedMessage { author_name: "Pedro Oliveira", content: "Bom dia a todos!", timestamp: "10:02" },
    ]
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
