//! Outer game loop: level counter, pause, win handling and feedback.

use rand::RngCore;

use crate::{
    clock::{
        Clock,
        sleep,
    },
    config::{
        ConfigError,
        GameConfig,
        WinBehavior,
    },
    display::StripTransmitter,
    feedback::FeedbackUnit,
    fmt::info,
    glyphs::Symbol,
    input::InputReader,
    renderer::Renderer,
    round::{
        Failure,
        Round,
        RoundIo,
        RoundOutcome,
    },
};

/// State that outlives a single round.
pub struct GameState<R> {
    pub level: u8,
    pub paused: bool,
    /// Set after a win with [`WinBehavior::Halt`]; never cleared.
    pub halted: bool,
    pub rng: R,
}

impl<R: RngCore> GameState<R> {
    pub const fn new(rng: R) -> Self {
        Self {
            level: 1,
            paused: false,
            halted: false,
            rng,
        }
    }
}

/// What one pass of the loop did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Paused; nothing was rendered.
    Paused,
    /// Round cleared; `level` is the level to play next.
    Passed { level: u8 },
    Failed(Failure),
    /// Last level cleared.
    Won,
    /// Game over for good; the matrix was refreshed blank.
    Halted,
}

pub struct Game<T, I, F, C, R> {
    config: GameConfig,
    state: GameState<R>,
    renderer: Renderer<T>,
    input: I,
    feedback: F,
    clock: C,
}

impl<T, I, F, C, R> Game<T, I, F, C, R>
where
    T: StripTransmitter,
    I: InputReader,
    F: FeedbackUnit,
    C: Clock,
    R: RngCore,
{
    pub fn new(
        config: GameConfig,
        renderer: Renderer<T>,
        input: I,
        feedback: F,
        clock: C,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: GameState::new(rng),
            renderer,
            input,
            feedback,
            clock,
        })
    }

    pub const fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub const fn renderer(&self) -> &Renderer<T> {
        &self.renderer
    }

    pub const fn input(&self) -> &I {
        &self.input
    }

    pub const fn feedback(&self) -> &F {
        &self.feedback
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Play forever.
    pub async fn run(&mut self) -> ! {
        info!("Game started, {} levels", self.config.max_level);
        loop {
            self.tick().await;
        }
    }

    /// One pass of the loop: pause check, then one full round unless paused.
    pub async fn tick(&mut self) -> Tick {
        if self.state.halted {
            self.renderer.clear();
            self.renderer.flush().await;
            sleep(&mut self.clock, self.config.timing.paused_idle).await;
            return Tick::Halted;
        }

        let timing = self.config.timing;
        if self.input.pause_toggled() {
            self.state.paused = !self.state.paused;
            if self.state.paused {
                info!("Game paused");
            } else {
                info!("Game resumed");
                sleep(&mut self.clock, timing.resume_delay).await;
            }
            sleep(&mut self.clock, timing.pause_debounce).await;
        }

        if self.state.paused {
            sleep(&mut self.clock, timing.paused_idle).await;
            return Tick::Paused;
        }

        let level = self.state.level;
        info!("Level {}", level);
        if self.config.show_level {
            let color = self.renderer.palette().level_digit;
            self.renderer.paint_symbol(Symbol::Digit(level), color);
            self.renderer.flush().await;
            sleep(&mut self.clock, timing.level_hold).await;
        }

        let round = Round::generate(level, &mut self.state.rng, &self.config);
        let outcome = round
            .play(RoundIo {
                renderer: &mut self.renderer,
                input: &mut self.input,
                clock: &mut self.clock,
            })
            .await;

        match outcome {
            RoundOutcome::Passed => self.advance().await,
            RoundOutcome::Failed(failure) => {
                info!("Wrong! Game over at level {}: {}", level, failure);
                self.feedback.signal_failure(timing.failure_hold).await;
                sleep(&mut self.clock, timing.result_pause).await;
                self.state.level = 1;
                Tick::Failed(failure)
            }
        }
    }

    async fn advance(&mut self) -> Tick {
        let timing = self.config.timing;
        info!("Well done! Next level");
        self.feedback.signal_success(timing.success_hold).await;
        self.state.level += 1;
        sleep(&mut self.clock, timing.result_pause).await;

        if self.state.level <= self.config.max_level {
            return Tick::Passed {
                level: self.state.level,
            };
        }

        info!("You won the game!");
        let color = self.renderer.palette().checkmark;
        self.renderer.paint_symbol(Symbol::Checkmark, color);
        self.renderer.flush().await;
        sleep(&mut self.clock, timing.win_hold).await;
        self.renderer.clear();
        self.renderer.flush().await;

        match self.config.on_win {
            WinBehavior::Reset => self.state.level = 1,
            WinBehavior::Halt => self.state.halted = true,
        }
        Tick::Won
    }
}
