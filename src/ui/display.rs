//! Segment display boundary and renderer.
//!
//! The renderer has no state of its own beyond the frame it last wrote:
//! every call replaces the whole frame. Driver errors are logged and
//! dropped; a missed frame is corrected by the next transition.

use super::segments::{number_frame, Frame, View};
use crate::config::{DISPLAY_BRIGHTNESS, SELF_TEST_VALUE};

/// Operations the 4-digit display driver exposes.
///
/// The bus protocol behind it is the driver's business.
pub trait SegmentDisplay {
    type Error: core::fmt::Debug;

    /// Set brightness, 0 (dimmest) ..= 7 (brightest).
    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Replace all four cells with raw segment bytes.
    fn write_segments(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Show a decimal number, right-aligned.
    fn write_number(&mut self, value: u16, leading_zeros: bool) -> Result<(), Self::Error> {
        self.write_segments(&number_frame(value, leading_zeros))
    }
}

/// Writes views to a [`SegmentDisplay`].
pub struct Renderer<D> {
    display: D,
    frame: Frame,
}

impl<D: SegmentDisplay> Renderer<D> {
    /// Wrap a driver. Nothing is written until [`init`](Self::init).
    pub fn new(display: D) -> Self {
        Self {
            display,
            frame: View::Blank.frame(),
        }
    }

    /// Set full brightness.
    pub fn init(&mut self) {
        if let Err(e) = self.display.set_brightness(DISPLAY_BRIGHTNESS) {
            warn!("Display: brightness failed: {}", defmt_debug(&e));
        }
    }

    /// Power-on pattern: "0123". The caller decides how long it stays up.
    pub fn show_self_test(&mut self) {
        info!("Display: self-test");
        match self.display.write_number(SELF_TEST_VALUE, true) {
            Ok(()) => self.frame = number_frame(SELF_TEST_VALUE, true),
            Err(e) => warn!("Display: self-test write failed: {}", defmt_debug(&e)),
        }
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.show(View::Blank);
    }

    /// Replace the whole display with `view`.
    pub fn show(&mut self, view: View) {
        let frame = view.frame();
        match self.display.write_segments(&frame) {
            Ok(()) => self.frame = frame,
            Err(e) => warn!("Display: {} write failed: {}", view, defmt_debug(&e)),
        }
    }

    /// Frame most recently written successfully.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

#[cfg(feature = "defmt")]
fn defmt_debug<T: core::fmt::Debug>(value: &T) -> defmt::Debug2Format<'_, T> {
    defmt::Debug2Format(value)
}

#[cfg(not(feature = "defmt"))]
fn defmt_debug<T: core::fmt::Debug>(value: &T) -> &T {
    value
}
