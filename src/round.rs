//! One round: generate, reveal, capture, judge.
//!
//! The round walks an explicit state machine. Capture states poll the input
//! reader every `poll_interval` against a per-input deadline and paint the
//! elapsed share of that deadline as a progress sweep while they wait.

use rand::RngCore;

use crate::{
    clock::{
        Clock,
        elapsed_ms,
        sleep,
    },
    config::GameConfig,
    display::StripTransmitter,
    fmt::{
        debug,
        info,
        warning,
    },
    glyphs::Symbol,
    input::InputReader,
    renderer::Renderer,
    sequence::{
        Color,
        Direction,
        Sequence,
        SequenceElement,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailureReason {
    DirectionTimeout,
    ColorTimeout,
    WrongDirection { expected: Direction, got: Direction },
    WrongColor { expected: Color, got: Color },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Failure {
    /// Element the player got wrong or ran out of time on.
    pub index: usize,
    pub reason: FailureReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundOutcome {
    Passed,
    Failed(Failure),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Revealing,
    AwaitingDirection(usize),
    AwaitingColor(usize, Direction),
    Evaluating(usize, Direction, Color),
    Done(RoundOutcome),
}

/// Everything a round needs to talk to the outside world.
pub struct RoundIo<'a, T, I, C> {
    pub renderer: &'a mut Renderer<T>,
    pub input: &'a mut I,
    pub clock: &'a mut C,
}

/// A single round over a fixed sequence. Holds nothing across rounds.
pub struct Round<'c> {
    sequence: Sequence,
    config: &'c GameConfig,
}

impl<'c> Round<'c> {
    /// Draw a fresh sequence of `level` elements.
    pub fn generate<R: RngCore>(level: u8, rng: &mut R, config: &'c GameConfig) -> Self {
        Self::with_sequence(Sequence::generate(usize::from(level), rng), config)
    }

    pub const fn with_sequence(sequence: Sequence, config: &'c GameConfig) -> Self {
        Self { sequence, config }
    }

    pub const fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Reveal the sequence, then capture and judge the player's answers.
    pub async fn play<T, I, C>(&self, io: RoundIo<'_, T, I, C>) -> RoundOutcome
    where
        T: StripTransmitter,
        I: InputReader,
        C: Clock,
    {
        let RoundIo {
            renderer,
            input,
            clock,
        } = io;

        let mut state = State::Revealing;
        loop {
            state = match state {
                State::Revealing => {
                    self.reveal(renderer, clock).await;
                    sleep(clock, self.config.timing.get_ready).await;
                    info!("Your turn");
                    State::AwaitingDirection(0)
                }
                State::AwaitingDirection(index) if index == self.sequence.len() => {
                    State::Done(RoundOutcome::Passed)
                }
                State::AwaitingDirection(index) => {
                    debug!("Waiting for direction {}", index + 1);
                    let captured = self
                        .capture(renderer, clock, || {
                            let direction = input.direction();
                            (!direction.is_neutral()).then_some(direction)
                        })
                        .await;
                    match captured {
                        Some(direction) => State::AwaitingColor(index, direction),
                        None => {
                            warning!("Timed out waiting for direction {}", index + 1);
                            self.fail(renderer, index, FailureReason::DirectionTimeout)
                                .await
                        }
                    }
                }
                State::AwaitingColor(index, direction) => {
                    debug!("Waiting for colour {}", index + 1);
                    // Colour one wins when both buttons are down in the same poll.
                    let captured = self
                        .capture(renderer, clock, || {
                            if input.color_button_1() {
                                Some(Color::One)
                            } else if input.color_button_2() {
                                Some(Color::Two)
                            } else {
                                None
                            }
                        })
                        .await;
                    match captured {
                        Some(color) => State::Evaluating(index, direction, color),
                        None => {
                            warning!("Timed out waiting for colour {}", index + 1);
                            self.fail(renderer, index, FailureReason::ColorTimeout)
                                .await
                        }
                    }
                }
                State::Evaluating(index, direction, color) => {
                    let expected = self.expected(index);
                    info!(
                        "Entered {} {}, expected {} {}",
                        direction,
                        color,
                        expected.direction,
                        expected.color
                    );
                    if direction != expected.direction {
                        let reason = FailureReason::WrongDirection {
                            expected: expected.direction,
                            got: direction,
                        };
                        self.fail(renderer, index, reason).await
                    } else if color != expected.color {
                        let reason = FailureReason::WrongColor {
                            expected: expected.color,
                            got: color,
                        };
                        self.fail(renderer, index, reason).await
                    } else {
                        renderer.clear();
                        renderer.flush().await;
                        State::AwaitingDirection(index + 1)
                    }
                }
                State::Done(outcome) => return outcome,
            };
        }
    }

    fn expected(&self, index: usize) -> SequenceElement {
        match self.sequence.get(index) {
            Some(element) => element,
            None => unreachable!("capture index past the end of the sequence"),
        }
    }

    /// Show each element as a coloured arrow, blanking between them.
    async fn reveal<T, C>(&self, renderer: &mut Renderer<T>, clock: &mut C)
    where
        T: StripTransmitter,
        C: Clock,
    {
        let timing = &self.config.timing;
        for element in self.sequence.iter() {
            let color = match element.color {
                Color::One => renderer.palette().color_one,
                Color::Two => renderer.palette().color_two,
            };
            renderer.paint_symbol(Symbol::Arrow(element.direction), color);
            renderer.flush().await;
            sleep(clock, timing.reveal_on).await;

            renderer.clear();
            renderer.flush().await;
            sleep(clock, timing.reveal_gap).await;
        }
    }

    /// Poll `sample` until it yields a value or the input deadline passes.
    async fn capture<T, C, V>(
        &self,
        renderer: &mut Renderer<T>,
        clock: &mut C,
        mut sample: impl FnMut() -> Option<V>,
    ) -> Option<V>
    where
        T: StripTransmitter,
        C: Clock,
    {
        let timeout = u64::from(self.config.timing.input_timeout.to_millis());
        let start = clock.now();
        loop {
            let elapsed = elapsed_ms(clock, start);
            if elapsed >= timeout {
                return None;
            }
            if let Some(value) = sample() {
                return Some(value);
            }

            // elapsed < timeout, so this is always below 100.
            let percent = u8::try_from(elapsed * 100 / timeout).unwrap_or(100);
            renderer.paint_progress(percent);
            renderer.flush().await;
            sleep(clock, self.config.timing.poll_interval).await;
        }
    }

    async fn fail<T: StripTransmitter>(
        &self,
        renderer: &mut Renderer<T>,
        index: usize,
        reason: FailureReason,
    ) -> State {
        renderer.paint_progress(0);
        renderer.flush().await;
        State::Done(RoundOutcome::Failed(Failure { index, reason }))
    }
}
