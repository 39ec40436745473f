//! Integration tests for rectrigger host-testable logic.

use proptest::prelude::*;
use rectrigger::config::{DEBOUNCE_MS, STATUS_QUEUE_DEPTH};
use rectrigger::input::Debouncer;
use rectrigger::{
    ButtonEvent, Controller, Frame, Level, Outbox, SegmentDisplay, State, Status, StatusSink, View,
};

#[derive(Default)]
struct MockDisplay {
    frames: Vec<Frame>,
}

impl SegmentDisplay for MockDisplay {
    type Error = core::convert::Infallible;

    fn set_brightness(&mut self, _level: u8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_segments(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.frames.push(*frame);
        Ok(())
    }
}

#[derive(Default)]
struct Wire(Vec<Status>);

impl StatusSink for Wire {
    fn emit(&mut self, status: Status) {
        self.0.push(status);
    }
}

/// Hold `level` for `ms` one-millisecond polls starting after `*now`.
fn hold(ctl: &mut Controller<MockDisplay>, wire: &mut Wire, now: &mut u64, level: Level, ms: u64) {
    for _ in 0..ms {
        *now += 1;
        ctl.step(*now, level, &[], wire);
    }
}

fn press(ctl: &mut Controller<MockDisplay>, wire: &mut Wire, now: &mut u64) {
    hold(ctl, wire, now, Level::Low, DEBOUNCE_MS + 20);
    hold(ctl, wire, now, Level::High, DEBOUNCE_MS + 20);
}

#[test]
fn record_stop_done_scenario() {
    let mut ctl = Controller::new(MockDisplay::default());
    let mut wire = Wire::default();
    let mut now = 0;

    ctl.power_on();
    ctl.finish_self_test();
    assert_eq!(ctl.state(), State::Idle);

    press(&mut ctl, &mut wire, &mut now);
    assert_eq!(ctl.state(), State::Recording);
    assert_eq!(wire.0, [Status::Start]);

    press(&mut ctl, &mut wire, &mut now);
    assert_eq!(ctl.state(), State::Locked);
    assert_eq!(wire.0, [Status::Start, Status::Stop]);

    now += 1;
    ctl.step(now, Level::High, b"DONE\n", &mut wire);
    assert_eq!(ctl.state(), State::Idle);
    assert_eq!(wire.0, [Status::Start, Status::Stop, Status::DoneIdle]);
    assert_eq!(ctl.frame(), View::Ready.frame());

    // Power-on pattern, blank, then one frame per transition.
    assert_eq!(
        ctl.display().frames,
        [
            [0x3F, 0x06, 0x5B, 0x4F],
            View::Blank.frame(),
            View::Recording.frame(),
            View::Waiting.frame(),
            View::Ready.frame(),
        ]
    );
}

#[test]
fn locked_ignores_repeated_presses() {
    let mut ctl = Controller::new(MockDisplay::default());
    let mut wire = Wire::default();
    let mut now = 0;

    press(&mut ctl, &mut wire, &mut now);
    press(&mut ctl, &mut wire, &mut now);
    press(&mut ctl, &mut wire, &mut now);
    press(&mut ctl, &mut wire, &mut now);

    assert_eq!(ctl.state(), State::Locked);
    assert_eq!(wire.0, [Status::Start, Status::Stop]);
    assert_eq!(ctl.frame(), View::Waiting.frame());
}

#[test]
fn garbage_bytes_do_not_poison_the_next_command() {
    let mut ctl = Controller::new(MockDisplay::default());
    let mut wire = Wire::default();

    ctl.step(1, Level::High, &[0xFF, 0x00, 0x80, b'\n'], &mut wire);
    ctl.step(2, Level::High, &[b'x'; 100], &mut wire);
    ctl.step(3, Level::High, b"\nDONE\n", &mut wire);

    assert_eq!(wire.0, [Status::DoneIdle]);
}

#[test]
fn every_done_in_a_backlog_is_acknowledged() {
    let mut ctl = Controller::new(MockDisplay::default());
    let mut outbox: Outbox<STATUS_QUEUE_DEPTH> = Outbox::new();
    let done_lines = STATUS_QUEUE_DEPTH + 2;

    // What the UART buffer holds after the loop spent a while transmitting.
    let mut rx = b"DONE\n".repeat(done_lines);
    let mut transitions = 0;
    let mut sent = Vec::new();
    let mut now = 0;

    while !rx.is_empty() {
        now += 1;
        let step = ctl.step(now, Level::High, &rx, &mut outbox);
        rx = rx.split_off(step.consumed);
        transitions += step.transitions;
        while let Some(status) = outbox.pop() {
            sent.push(status);
        }
    }

    assert_eq!(transitions, done_lines);
    assert_eq!(sent, vec![Status::DoneIdle; done_lines]);
    assert_eq!(ctl.state(), State::Idle);
}

proptest! {
    /// Any bounce pattern shorter than the window, followed by a steady
    /// hold, yields exactly one press.
    #[test]
    fn bounce_then_hold_fires_exactly_once(
        toggles in proptest::collection::vec(1u64..=DEBOUNCE_MS, 0..20),
        start in 0u64..10_000,
    ) {
        let mut db = Debouncer::new();
        let mut now = start;
        let mut presses = 0;
        let mut level = Level::Low;

        for run in toggles {
            for _ in 0..run {
                if db.poll(level, now) == Some(ButtonEvent::Pressed) {
                    presses += 1;
                }
                now += 1;
            }
            level = if level == Level::Low { Level::High } else { Level::Low };
        }
        // Settle pressed.
        for _ in 0..=DEBOUNCE_MS + 1 {
            if db.poll(Level::Low, now) == Some(ButtonEvent::Pressed) {
                presses += 1;
            }
            now += 1;
        }

        prop_assert_eq!(presses, 1);
    }

    /// Lines other than exactly "DONE" never change state or emit.
    #[test]
    fn non_done_lines_are_inert(line in "[ -~]{0,24}") {
        prop_assume!(line.trim() != "DONE");

        let mut ctl = Controller::new(MockDisplay::default());
        let mut wire = Wire::default();
        let mut bytes = line.into_bytes();
        bytes.push(b'\n');

        ctl.step(1, Level::High, &bytes, &mut wire);

        prop_assert_eq!(ctl.state(), State::Idle);
        prop_assert!(wire.0.is_empty());
        prop_assert!(ctl.display().frames.is_empty());
    }
}
