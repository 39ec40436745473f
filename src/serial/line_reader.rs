//! Byte-at-a-time line assembly for the command channel.
//!
//! Bytes accumulate until `\n`. The completed line is trimmed of
//! surrounding ASCII whitespace (which also removes a `\r` from CRLF
//! senders) and handed back; the buffer then starts over. Partial lines
//! survive across poll cycles.
//!
//! A line that outgrows the buffer is discarded whole: the reader skips
//! everything up to the next `\n` and resumes cleanly after it.

use crate::config::MAX_COMMAND_LEN;
use crate::error::Error;

/// A completed, trimmed line.
pub type Line = heapless::String<MAX_COMMAND_LEN>;

/// Command buffer for one serial channel.
#[derive(Clone, Debug, Default)]
pub struct LineReader {
    buf: heapless::Vec<u8, MAX_COMMAND_LEN>,
    /// Set while skipping the rest of an overlong line.
    discarding: bool,
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
            discarding: false,
        }
    }

    /// Feed one received byte.
    ///
    /// Returns the trimmed line when `byte` completes one. Lines that are
    /// not valid UTF-8 or that overflowed the buffer never come back.
    pub fn push(&mut self, byte: u8) -> Option<Line> {
        if byte == b'\n' {
            let line = if self.discarding {
                None
            } else {
                trimmed(&self.buf)
            };
            self.buf.clear();
            self.discarding = false;
            return line;
        }

        if self.discarding {
            return None;
        }

        if self.buf.push(byte).is_err() {
            warn!("Command line dropped: {}", Error::LineOverflow);
            self.buf.clear();
            self.discarding = true;
        }
        None
    }

    /// Bytes held for the current partial line.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}

fn trimmed(raw: &[u8]) -> Option<Line> {
    let Ok(text) = core::str::from_utf8(raw) else {
        debug!("Command line dropped: not UTF-8 ({} bytes)", raw.len());
        return None;
    };
    let mut line = Line::new();
    // Trimming only shrinks, so the copy always fits.
    line.push_str(text.trim()).ok()?;
    Some(line)
}
