//! Error type for the hardware boundary.
//!
//! The session logic itself cannot fail. These variants describe what the
//! collaborators around it can report; callers log them and keep polling.
//! All variants are fixed-size so the enum works without `alloc`.

/// Top-level error type used by the drivers and the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The segment display did not acknowledge a transfer.
    Display,

    /// UART transfer failed.
    Serial,

    /// An inbound line was longer than the command buffer.
    LineOverflow,
}
