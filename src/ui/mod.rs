//! User interface subsystem - 4-digit segment display.
//!
//! ## Components
//!
//! - **Segments**: glyph encodings and the view → frame table
//! - **Display**: the driver boundary and the renderer that writes frames
//!
//! The button lives in [`crate::input`]; it has no UI logic of its own.

pub mod display;
pub mod segments;

pub use display::{Renderer, SegmentDisplay};
pub use segments::{Frame, View};
