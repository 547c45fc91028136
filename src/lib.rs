//! # memory-matrix
//!
//! Repeat-the-sequence memory game for a 5×5 WS2812 matrix.
//!
//! Each round the matrix flashes a sequence of coloured arrows. The player
//! repeats it: push the joystick the way each arrow pointed, then press the
//! button for its colour. Clearing a round adds one element; a wrong answer
//! or a timeout sends the player back to level 1.
//!
//! The game core is hardware independent and talks to the board through a
//! handful of traits:
//! - [`StripTransmitter`]: pushes a finished frame to the LEDs
//! - [`InputReader`]: joystick direction, colour buttons, pause edge
//! - [`FeedbackUnit`]: success / failure tones and indicator LEDs
//! - [`Clock`]: monotonic time plus async sleeping
//!
//! With the `badge` feature the [`board`] module provides ESP32-S3
//! implementations of all four, and the `memory-matrix` binary runs the game.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = memory_matrix::board::init();
//! let resources = memory_matrix::split_resources!(peripherals);
//!
//! let mut game = Game::new(
//!     GameConfig::STANDARD,
//!     Renderer::new(DisplaySurface::new(Ws2812Strip::from(resources.matrix)), GameConfig::STANDARD.palette),
//!     BoardInput::with_calibration(resources.input, GameConfig::STANDARD.joystick),
//!     BoardFeedback::from(resources.feedback),
//!     EmbassyClock,
//!     SmallRng::seed_from_u64(board::hardware_seed()),
//! )?;
//! game.run().await
//! ```

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod clock;
pub mod config;
pub mod display;
pub mod feedback;
pub mod game;
pub mod glyphs;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod round;
pub mod sequence;

#[cfg(feature = "badge")]
pub mod board;

#[cfg(test)]
mod sim;

pub use clock::{
    Clock,
    Instant,
};
pub use config::{
    ConfigError,
    GameConfig,
    Palette,
    Timing,
    WinBehavior,
};
pub use display::{
    DisplaySurface,
    Frame,
    Pixel,
    StripTransmitter,
};
pub use feedback::{
    BuzzerFeedback,
    FeedbackUnit,
};
pub use game::{
    Game,
    GameState,
    Tick,
};
pub use glyphs::Symbol;
pub use grid::{
    CELL_COUNT,
    GRID_SIZE,
};
pub use input::{
    InputReader,
    JoystickAxes,
    JoystickCalibration,
    PanelInput,
};
pub use renderer::Renderer;
pub use round::{
    Failure,
    FailureReason,
    Round,
    RoundOutcome,
};
pub use sequence::{
    Color,
    Direction,
    Sequence,
    SequenceElement,
};
