//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters, and protocol constants live
//! here so they can be tuned in one place. Nothing is read at runtime.

// Button

/// A raw reading must hold for longer than this before it is accepted (ms).
pub const DEBOUNCE_MS: u64 = 50;

// Serial link

/// UART baud rate shared with the host.
pub const SERIAL_BAUD: u32 = 9600;

/// The only inbound command the session reacts to.
pub const DONE_COMMAND: &str = "DONE";

/// Longest inbound line kept in the command buffer (bytes, excluding terminator).
pub const MAX_COMMAND_LEN: usize = 32;

/// Terminator appended to every outbound status line.
pub const LINE_ENDING: &str = "\r\n";

/// Status lines buffered between a poll step and the UART flush.
pub const STATUS_QUEUE_DEPTH: usize = 4;

// Display

/// Brightness level applied at init (driver range 0..=7).
pub const DISPLAY_BRIGHTNESS: u8 = 7;

/// Number shown by the power-on self-test, rendered with leading zeros ("0123").
pub const SELF_TEST_VALUE: u16 = 123;

/// How long the self-test pattern stays on screen (ms).
pub const SELF_TEST_MS: u64 = 1000;

// Main loop

/// Pause between poll cycles (ms).
pub const POLL_INTERVAL_MS: u64 = 1;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the `embassy_nrf::peripherals::*` singletons
// are picked in `main.rs`. Adjust for your own wiring.
//
//   Button (active-low, pull-up) → P0.11
//   Display CLK                  → P0.02
//   Display DIO                  → P0.03
//   UART RX                      → P0.08
//   UART TX                      → P0.06
