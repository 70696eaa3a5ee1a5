//! Wall-clock seam for message timestamps.
//!
//! DESIGN
//! ======
//! Timestamps are display strings (`HH:MM`, local time), not instants — the
//! store never does arithmetic on them. Capture goes through the [`Clock`]
//! trait so tests can pin time to a canned value.

use time::OffsetDateTime;
use time::macros::format_description;

/// Source of message timestamps.
pub trait Clock {
    /// Current time rendered as a zero-padded local `HH:MM` string.
    fn timestamp(&self) -> String;
}

/// Production clock reading the system wall clock.
///
/// Falls back to UTC when the local offset cannot be determined (common in
/// multi-threaded processes on Unix, where `time` refuses to read the
/// environment).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        format_hhmm(now)
    }
}

fn format_hhmm(at: OffsetDateTime) -> String {
    let format = format_description!("[hour]:[minute]");
    // Safety: formatting hour/minute components into a String is infallible;
    // `time` only errors on I/O writers or insufficient component data.
    at.format(&format).unwrap_or_else(|_| String::from("00:00"))
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "clock_test.rs"]
mod tests;
