//! Recording session state machine.
//!
//! ```text
//!            press               press
//!   Idle ──────────► Recording ──────────► Locked ◄─┐
//!    ▲                                       │ press │ (ignored)
//!    │                  DONE (from any state)└───────┘
//!    └───────────────────────────────────────────────
//! ```
//!
//! [`Session::handle`] is the only place state changes. It is a pure
//! function of (state, event): the returned [`Transition`] lists the side
//! effects in the order they must be applied, and the caller applies them.

use crate::input::ButtonEvent;
use crate::serial::{Command, Status};
use crate::ui::View;

/// Session states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Waiting for the operator to start.
    #[default]
    Idle,
    /// Recording in progress.
    Recording,
    /// Stopped; only the host's `DONE` unlocks it.
    Locked,
}

impl State {
    /// Screen that represents this state after a transition into it.
    pub const fn view(self) -> View {
        match self {
            State::Idle => View::Ready,
            State::Recording => View::Recording,
            State::Locked => View::Waiting,
        }
    }
}

/// Inputs the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Button(ButtonEvent),
    Command(Command),
}

impl From<ButtonEvent> for Event {
    fn from(e: ButtonEvent) -> Self {
        Event::Button(e)
    }
}

impl From<Command> for Event {
    fn from(c: Command) -> Self {
        Event::Command(c)
    }
}

/// A side effect requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Send a status line to the host.
    Emit(Status),
    /// Replace the display contents.
    Render(View),
}

/// Outcome of an accepted event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: State,
    pub to: State,
    /// Effects in application order.
    pub effects: [Effect; 2],
}

/// Owner of the current session state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: State,
}

impl Session {
    /// Start in [`State::Idle`].
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Apply one event.
    ///
    /// Returns `None` when the event is a no-op (a press while locked).
    pub fn handle(&mut self, event: Event) -> Option<Transition> {
        let from = self.state;
        let (to, effects) = match (from, event) {
            (State::Idle, Event::Button(ButtonEvent::Pressed)) => (
                State::Recording,
                [
                    Effect::Emit(Status::Start),
                    Effect::Render(State::Recording.view()),
                ],
            ),
            (State::Recording, Event::Button(ButtonEvent::Pressed)) => (
                State::Locked,
                [
                    Effect::Emit(Status::Stop),
                    Effect::Render(State::Locked.view()),
                ],
            ),
            // Only the host can release the lock.
            (State::Locked, Event::Button(ButtonEvent::Pressed)) => {
                debug!("Session: press ignored while locked");
                return None;
            }
            (_, Event::Command(Command::Done)) => (
                State::Idle,
                [
                    Effect::Render(State::Idle.view()),
                    Effect::Emit(Status::DoneIdle),
                ],
            ),
        };

        self.state = to;
        info!("Session: {} -> {}", from, to);
        Some(Transition { from, to, effects })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESS: Event = Event::Button(ButtonEvent::Pressed);
    const DONE: Event = Event::Command(Command::Done);

    fn in_state(state: State) -> Session {
        Session { state }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(Session::new().state(), State::Idle);
        assert_eq!(Session::default().state(), State::Idle);
    }

    #[test]
    fn press_in_idle_starts_recording() {
        let mut s = in_state(State::Idle);
        let t = s.handle(PRESS).unwrap();
        assert_eq!(s.state(), State::Recording);
        assert_eq!(
            t.effects,
            [Effect::Emit(Status::Start), Effect::Render(View::Recording)]
        );
    }

    #[test]
    fn press_in_recording_locks() {
        let mut s = in_state(State::Recording);
        let t = s.handle(PRESS).unwrap();
        assert_eq!(s.state(), State::Locked);
        assert_eq!(
            t.effects,
            [Effect::Emit(Status::Stop), Effect::Render(View::Waiting)]
        );
    }

    #[test]
    fn press_in_locked_is_a_no_op() {
        let mut s = in_state(State::Locked);
        assert_eq!(s.handle(PRESS), None);
        assert_eq!(s.handle(PRESS), None);
        assert_eq!(s.state(), State::Locked);
    }

    #[test]
    fn done_returns_to_idle_from_every_state() {
        for start in [State::Idle, State::Recording, State::Locked] {
            let mut s = in_state(start);
            let t = s.handle(DONE).unwrap();
            assert_eq!(t.from, start);
            assert_eq!(t.to, State::Idle);
            assert_eq!(s.state(), State::Idle);
            assert_eq!(
                t.effects,
                [Effect::Render(View::Ready), Effect::Emit(Status::DoneIdle)]
            );
        }
    }

    #[test]
    fn state_views() {
        assert_eq!(State::Idle.view(), View::Ready);
        assert_eq!(State::Recording.view(), View::Recording);
        assert_eq!(State::Locked.view(), View::Waiting);
    }
}
