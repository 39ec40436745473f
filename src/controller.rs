//! One poll cycle: sample inputs, run the session, apply effects.
//!
//! The controller owns every piece of mutable state (debounce tracker,
//! command buffer, session, renderer) and is driven from outside by
//! [`Controller::step`]. The host loop supplies the time, the pin level,
//! and whatever bytes the UART has buffered; nothing here blocks or
//! reads a clock.
//!
//! Within a cycle the button is checked before the serial bytes, so a
//! press and a `DONE` that arrive together are always handled in that
//! order.

use crate::input::{Debouncer, Level};
use crate::serial::{Command, LineReader, StatusSink};
use crate::session::{Effect, Event, Session, State, Transition};
use crate::ui::{Frame, Renderer, SegmentDisplay};

/// What one [`Controller::step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Step {
    /// Session transitions taken.
    pub transitions: usize,
    /// Bytes of `rx` read; the caller releases exactly this many.
    pub consumed: usize,
}

/// Recording-trigger controller.
pub struct Controller<D> {
    debouncer: Debouncer,
    reader: LineReader,
    session: Session,
    renderer: Renderer<D>,
}

impl<D: SegmentDisplay> Controller<D> {
    /// Build a controller around a display driver. Starts in
    /// [`State::Idle`]; the display is not touched until
    /// [`power_on`](Self::power_on).
    pub fn new(display: D) -> Self {
        Self {
            debouncer: Debouncer::new(),
            reader: LineReader::new(),
            session: Session::new(),
            renderer: Renderer::new(display),
        }
    }

    /// Set brightness and show the self-test pattern.
    ///
    /// Call [`finish_self_test`](Self::finish_self_test) once the pattern
    /// has been visible long enough.
    pub fn power_on(&mut self) {
        self.renderer.init();
        self.renderer.show_self_test();
    }

    /// Clear the self-test pattern.
    pub fn finish_self_test(&mut self) {
        self.renderer.clear();
    }

    /// Run one poll cycle.
    ///
    /// `rx` holds the bytes received and not yet consumed. Bytes are taken
    /// in order until `out` has no room for another status line; the rest
    /// must be offered again on the next call. The button is not sampled
    /// while `out` is full, and a press still in the debounce window is
    /// picked up on a later cycle.
    pub fn step(
        &mut self,
        now_ms: u64,
        button: Level,
        rx: &[u8],
        out: &mut impl StatusSink,
    ) -> Step {
        let mut step = Step::default();

        if out.has_room() {
            if let Some(press) = self.debouncer.poll(button, now_ms) {
                step.transitions += self.dispatch(press.into(), out);
            }
        }

        for &byte in rx {
            if !out.has_room() {
                break;
            }
            step.consumed += 1;
            let Some(line) = self.reader.push(byte) else {
                continue;
            };
            match Command::parse(&line) {
                Some(cmd) => step.transitions += self.dispatch(cmd.into(), out),
                None => debug!("Serial: ignoring line {=str}", line.as_str()),
            }
        }

        step
    }

    fn dispatch(&mut self, event: Event, out: &mut impl StatusSink) -> usize {
        match self.session.handle(event) {
            Some(transition) => {
                self.apply(&transition, out);
                1
            }
            None => 0,
        }
    }

    fn apply(&mut self, transition: &Transition, out: &mut impl StatusSink) {
        for effect in transition.effects {
            match effect {
                Effect::Emit(status) => out.emit(status),
                Effect::Render(view) => self.renderer.show(view),
            }
        }
    }

    /// Current session state.
    pub fn state(&self) -> State {
        self.session.state()
    }

    /// Frame currently on the display.
    pub fn frame(&self) -> Frame {
        self.renderer.frame()
    }

    pub fn display(&self) -> &D {
        self.renderer.display()
    }

    /// Bytes waiting for a line terminator.
    pub fn pending_input(&self) -> usize {
        self.reader.pending()
    }
}
