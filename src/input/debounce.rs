//! Time-window debouncer for a single active-low button.
//!
//! Every raw change restarts the window. Once the raw level has held for
//! longer than the window and differs from the last accepted level, it
//! becomes the new stable level. A stable `High -> Low` transition yields
//! one [`ButtonEvent::Pressed`], however much the contacts chatter.
//!
//! The debouncer never reads a clock: the caller passes a millisecond
//! timestamp on each poll, which keeps it usable from a hardware tick, a
//! test harness, or a simulated clock.

use super::{ButtonEvent, Level};
use crate::config::DEBOUNCE_MS;

/// Debounce tracker state.
#[derive(Clone, Debug)]
pub struct Debouncer {
    /// Last raw reading seen.
    last_raw: Level,
    /// Last accepted (stable) reading.
    stable: Level,
    /// Timestamp of the last raw change (ms).
    last_change_ms: u64,
    /// Window a raw reading must outlast before it is accepted (ms).
    window_ms: u64,
}

impl Debouncer {
    /// Tracker at rest (released), using [`DEBOUNCE_MS`].
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_MS)
    }

    /// Tracker at rest with a custom window.
    pub const fn with_window(window_ms: u64) -> Self {
        Self {
            last_raw: Level::High,
            stable: Level::High,
            last_change_ms: 0,
            window_ms,
        }
    }

    /// Feed one raw sample taken at `now_ms`.
    ///
    /// Returns `Some(ButtonEvent::Pressed)` on the poll where a press
    /// becomes stable, `None` otherwise.
    pub fn poll(&mut self, raw: Level, now_ms: u64) -> Option<ButtonEvent> {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change_ms = now_ms;
        }

        if now_ms.wrapping_sub(self.last_change_ms) <= self.window_ms || raw == self.stable {
            return None;
        }

        self.stable = raw;
        if raw.is_pressed() {
            debug!("Button: press accepted at {} ms", now_ms);
            Some(ButtonEvent::Pressed)
        } else {
            None
        }
    }

    /// Last accepted level.
    pub fn stable(&self) -> Level {
        self.stable
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
