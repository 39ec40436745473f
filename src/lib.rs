//! Host-testable library for rectrigger.
//!
//! Everything with a decision in it lives here: the button debouncer, the
//! serial line reader, the session state machine, the view → segment
//! table, and the controller that ties them into one poll step. None of
//! it touches hardware, so it all runs under `cargo test` on the host.
//!
//! The embedded binary (`main.rs`, `#![no_std]` + `#![no_main]`, behind
//! the `embedded` feature) supplies the pin, the UART and the display
//! driver, and calls [`Controller::step`] in a loop.
//!
//! Usage: `cargo test`

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod serial;
pub mod session;
pub mod ui;

pub use controller::{Controller, Step};
pub use error::Error;
pub use input::{ButtonEvent, Level};
pub use serial::{Command, Outbox, Status, StatusSink};
pub use session::{State, Transition};
pub use ui::{Frame, SegmentDisplay, View};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
