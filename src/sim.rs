//! Host stand-ins for the hardware: simulated clock, recording strip,
//! scripted input, recording feedback and fake GPIO pins.

use std::{
    cell::{
        Cell,
        RefCell,
    },
    collections::VecDeque,
    convert::Infallible,
    rc::Rc,
    vec::Vec,
};

use embedded_hal::digital::{
    ErrorType,
    InputPin,
    OutputPin,
};
use embedded_hal_async::delay::DelayNs;
use fugit::MillisDurationU32 as Millis;

use crate::{
    clock::{
        Clock,
        Instant,
    },
    display::{
        Frame,
        StripTransmitter,
    },
    feedback::FeedbackUnit,
    input::{
        AxisReading,
        InputReader,
        JoystickAxes,
    },
    sequence::{
        Color,
        Direction,
    },
};

// ── Clock ───────────────────────────────────────────────────────────────────

/// Time only moves when something sleeps on it. Clones share the same time.
#[derive(Clone, Default)]
pub(crate) struct SimClock {
    nanos: Rc<Cell<u64>>,
}

impl SimClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn now_ms(&self) -> u64 {
        self.nanos.get() / 1_000_000
    }
}

impl DelayNs for SimClock {
    async fn delay_ns(&mut self, ns: u32) {
        self.nanos.set(self.nanos.get() + u64::from(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.nanos.set(self.nanos.get() + u64::from(ms) * 1_000_000);
    }
}

impl Clock for SimClock {
    fn now(&self) -> Instant {
        Instant::from_ticks(self.now_ms())
    }
}

// ── Strip ───────────────────────────────────────────────────────────────────

/// Keeps every transmitted frame.
#[derive(Clone, Default)]
pub(crate) struct RecordingStrip {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl RecordingStrip {
    pub(crate) fn frames(&self) -> Vec<Frame> {
        self.frames.borrow().clone()
    }
}

impl StripTransmitter for RecordingStrip {
    async fn transmit(&mut self, frame: &Frame) {
        self.frames.borrow_mut().push(*frame);
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Script {
    directions: VecDeque<Direction>,
    buttons: VecDeque<(bool, bool)>,
    pause: VecDeque<bool>,
    second_button: bool,
    direction_reads: usize,
}

/// Replays queued samples, one per poll. An empty queue reads as no input.
#[derive(Clone, Default)]
pub(crate) struct ScriptedInput {
    script: Rc<RefCell<Script>>,
}

impl ScriptedInput {
    pub(crate) fn push_direction(&self, direction: Direction) -> &Self {
        self.script.borrow_mut().directions.push_back(direction);
        self
    }

    pub(crate) fn idle_directions(&self, polls: usize) -> &Self {
        for _ in 0..polls {
            self.push_direction(Direction::Neutral);
        }
        self
    }

    pub(crate) fn push_buttons(&self, first: bool, second: bool) -> &Self {
        self.script.borrow_mut().buttons.push_back((first, second));
        self
    }

    pub(crate) fn idle_buttons(&self, polls: usize) -> &Self {
        for _ in 0..polls {
            self.push_buttons(false, false);
        }
        self
    }

    /// A direction followed by the button for `color`, both on the first poll.
    pub(crate) fn answer(&self, direction: Direction, color: Color) -> &Self {
        self.push_direction(direction);
        match color {
            Color::One => self.push_buttons(true, false),
            Color::Two => self.push_buttons(false, true),
        }
    }

    pub(crate) fn push_pause(&self, pressed: bool) -> &Self {
        self.script.borrow_mut().pause.push_back(pressed);
        self
    }

    pub(crate) fn direction_reads(&self) -> usize {
        self.script.borrow().direction_reads
    }

    pub(crate) fn remaining_directions(&self) -> usize {
        self.script.borrow().directions.len()
    }
}

impl InputReader for ScriptedInput {
    fn direction(&mut self) -> Direction {
        let mut script = self.script.borrow_mut();
        script.direction_reads += 1;
        script.directions.pop_front().unwrap_or(Direction::Neutral)
    }

    /// Consumes one queued button pair; the second half is served by the
    /// following `color_button_2` call of the same poll.
    fn color_button_1(&mut self) -> bool {
        let mut script = self.script.borrow_mut();
        let (first, second) = script.buttons.pop_front().unwrap_or((false, false));
        script.second_button = second;
        first
    }

    fn color_button_2(&mut self) -> bool {
        self.script.borrow().second_button
    }

    fn pause_toggled(&mut self) -> bool {
        self.script.borrow_mut().pause.pop_front().unwrap_or(false)
    }
}

/// Joystick that never moves.
pub(crate) struct FixedAxes(pub AxisReading);

impl JoystickAxes for FixedAxes {
    fn read_axes(&mut self) -> AxisReading {
        self.0
    }
}

// ── Feedback ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FeedbackEvent {
    Success(u32),
    Failure(u32),
}

#[derive(Clone, Default)]
pub(crate) struct RecordingFeedback {
    events: Rc<RefCell<Vec<FeedbackEvent>>>,
}

impl RecordingFeedback {
    pub(crate) fn events(&self) -> Vec<FeedbackEvent> {
        self.events.borrow().clone()
    }
}

impl FeedbackUnit for RecordingFeedback {
    async fn signal_success(&mut self, hold: Millis) {
        self.events
            .borrow_mut()
            .push(FeedbackEvent::Success(hold.to_millis()));
    }

    async fn signal_failure(&mut self, hold: Millis) {
        self.events
            .borrow_mut()
            .push(FeedbackEvent::Failure(hold.to_millis()));
    }
}

// ── GPIO ────────────────────────────────────────────────────────────────────

/// Input pin whose level the test sets. Clones share the level.
#[derive(Clone)]
pub(crate) struct FakeInputPin {
    high: Rc<Cell<bool>>,
}

impl FakeInputPin {
    pub(crate) fn new(high: bool) -> Self {
        Self {
            high: Rc::new(Cell::new(high)),
        }
    }

    pub(crate) fn set_high(&self, high: bool) {
        self.high.set(high);
    }
}

impl ErrorType for FakeInputPin {
    type Error = Infallible;
}

impl InputPin for FakeInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

/// `(ms, pin, high)` for every level change.
#[derive(Clone, Default)]
pub(crate) struct PinLog {
    events: Rc<RefCell<Vec<(u64, &'static str, bool)>>>,
}

impl PinLog {
    pub(crate) fn events(&self) -> Vec<(u64, &'static str, bool)> {
        self.events.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// Output pin that timestamps its level changes against a [`SimClock`].
pub(crate) struct FakeOutputPin {
    name: &'static str,
    log: PinLog,
    clock: SimClock,
}

impl FakeOutputPin {
    pub(crate) fn new(name: &'static str, log: &PinLog, clock: &SimClock) -> Self {
        Self {
            name,
            log: log.clone(),
            clock: clock.clone(),
        }
    }

    fn record(&self, high: bool) {
        self.log
            .events
            .borrow_mut()
            .push((self.clock.now_ms(), self.name, high));
    }
}

impl ErrorType for FakeOutputPin {
    type Error = Infallible;
}

impl OutputPin for FakeOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }
}
