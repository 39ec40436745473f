//! Line-oriented text protocol spoken over the serial link.
//!
//! ## Inbound
//!
//! - `DONE` - the host finished its job; return to idle.
//!
//! Anything else is dropped without comment.
//!
//! ## Outbound
//!
//! - `START`        - recording began
//! - `STOP`         - recording stopped, waiting for the host
//! - `DONE -> IDLE` - acknowledged the host's `DONE`
//!
//! Each outbound line is followed by [`LINE_ENDING`](crate::config::LINE_ENDING).

pub mod line_reader;

pub use line_reader::{Line, LineReader};

use crate::config::DONE_COMMAND;

/// Recognised inbound commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Done,
}

impl Command {
    /// Match a trimmed line against the command vocabulary.
    ///
    /// Case-sensitive and exact: `done` or `DONE!` are not commands.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            DONE_COMMAND => Some(Command::Done),
            _ => None,
        }
    }
}

/// Outbound status lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Start,
    Stop,
    DoneIdle,
}

impl Status {
    /// Wire text, without the line terminator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Start => "START",
            Status::Stop => "STOP",
            Status::DoneIdle => "DONE -> IDLE",
        }
    }
}

/// Receives status lines as transitions produce them.
pub trait StatusSink {
    fn emit(&mut self, status: Status);

    /// Whether one more line can be accepted. The controller stops taking
    /// input while this is `false`, so no transition loses its line.
    fn has_room(&self) -> bool {
        true
    }
}

/// Fixed-capacity queue of pending status lines.
///
/// The main loop drains it to the UART after every poll step. The
/// controller checks [`StatusSink::has_room`] before each event, so a full
/// outbox holds input back instead of dropping lines.
pub struct Outbox<const N: usize> {
    queue: heapless::Deque<Status, N>,
}

impl<const N: usize> Outbox<N> {
    pub const fn new() -> Self {
        Self {
            queue: heapless::Deque::new(),
        }
    }

    /// Take the oldest pending line.
    pub fn pop(&mut self) -> Option<Status> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<const N: usize> Default for Outbox<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StatusSink for Outbox<N> {
    fn emit(&mut self, status: Status) {
        if self.queue.push_back(status).is_err() {
            warn!("Outbox full - dropping {}", status.as_str());
        }
    }

    fn has_room(&self) -> bool {
        !self.queue.is_full()
    }
}
