//! Button input - raw pin levels in, debounced press events out.
//!
//! The button is a momentary switch to ground with a pull-up, so the
//! line rests `High` and reads `Low` while held.

pub mod debounce;

pub use debounce::Debouncer;

/// Instantaneous logical level of the input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// Active-low: the button is pressed while the line reads `Low`.
    pub fn is_pressed(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    /// `true` maps to `High`, matching `is_high()` on a GPIO input.
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Debounced button events.
///
/// Only the press edge is reported; releases settle silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
}
