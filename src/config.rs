//! Game configuration and the two shipped presets.

use core::fmt;

use fugit::MillisDurationU32 as Millis;
use palette::Srgb;

use crate::{
    display::{
        OFF,
        Pixel,
    },
    input::JoystickCalibration,
    sequence::SEQUENCE_CAPACITY,
};

/// What happens after the last level is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WinBehavior {
    /// Show the win screen, then start over from level 1.
    Reset,
    /// Show the win screen, then keep the matrix blank until power-cycled.
    Halt,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub color_one: Pixel,
    pub color_two: Pixel,
    pub off: Pixel,
    pub progress: Pixel,
    pub level_digit: Pixel,
    pub checkmark: Pixel,
}

impl Palette {
    pub const DIM: Self = Self {
        color_one: Srgb::new(32, 0, 0),
        color_two: Srgb::new(0, 32, 0),
        off: OFF,
        progress: Srgb::new(0, 0, 32),
        level_digit: Srgb::new(0, 0, 32),
        checkmark: Srgb::new(0, 32, 0),
    };

    pub const BRIGHT: Self = Self {
        color_one: Srgb::new(255, 0, 0),
        color_two: Srgb::new(0, 255, 0),
        off: OFF,
        progress: Srgb::new(0, 0, 255),
        level_digit: Srgb::new(0, 0, 255),
        checkmark: Srgb::new(0, 255, 0),
    };
}

/// Every fixed wait in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// How long each revealed arrow stays lit.
    pub reveal_on: Millis,
    /// Blank gap between revealed arrows.
    pub reveal_gap: Millis,
    /// Pause between the end of the reveal and the first capture.
    pub get_ready: Millis,
    /// Per-input deadline.
    pub input_timeout: Millis,
    pub poll_interval: Millis,
    pub level_hold: Millis,
    pub success_hold: Millis,
    pub failure_hold: Millis,
    /// Pause after feedback before the next round.
    pub result_pause: Millis,
    pub win_hold: Millis,
    pub pause_debounce: Millis,
    pub resume_delay: Millis,
    pub paused_idle: Millis,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        reveal_on: Millis::millis(500),
        reveal_gap: Millis::millis(250),
        get_ready: Millis::millis(500),
        input_timeout: Millis::millis(5000),
        poll_interval: Millis::millis(50),
        level_hold: Millis::millis(2000),
        success_hold: Millis::millis(200),
        failure_hold: Millis::millis(500),
        result_pause: Millis::millis(2000),
        win_hold: Millis::millis(5000),
        pause_debounce: Millis::millis(200),
        resume_delay: Millis::millis(1000),
        paused_idle: Millis::millis(100),
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    /// Level (and sequence length) that wins the game once cleared.
    pub max_level: u8,
    pub on_win: WinBehavior,
    /// Show the level number before each round.
    pub show_level: bool,
    pub palette: Palette,
    pub timing: Timing,
    pub joystick: JoystickCalibration,
}

impl GameConfig {
    /// Nine levels, dim palette, level shown, restart after winning.
    pub const STANDARD: Self = Self {
        max_level: 9,
        on_win: WinBehavior::Reset,
        show_level: true,
        palette: Palette::DIM,
        timing: Timing::DEFAULT,
        joystick: JoystickCalibration::DEFAULT,
    };

    /// Ten levels, full brightness, no level digit, stop after winning.
    pub const ENDURANCE: Self = Self {
        max_level: 10,
        on_win: WinBehavior::Halt,
        show_level: false,
        palette: Palette::BRIGHT,
        timing: Timing::DEFAULT,
        joystick: JoystickCalibration::DEFAULT,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::NoLevels);
        }
        if usize::from(self.max_level) > SEQUENCE_CAPACITY {
            return Err(ConfigError::MaxLevelTooHigh(self.max_level));
        }
        if self.show_level && self.max_level > 9 {
            return Err(ConfigError::LevelNotDisplayable(self.max_level));
        }
        if self.timing.input_timeout.ticks() == 0 {
            return Err(ConfigError::ZeroInputTimeout);
        }
        if self.timing.poll_interval.ticks() == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    NoLevels,
    MaxLevelTooHigh(u8),
    LevelNotDisplayable(u8),
    ZeroInputTimeout,
    ZeroPollInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLevels => write!(f, "max level must be at least 1"),
            Self::MaxLevelTooHigh(level) => {
                write!(f, "max level {level} exceeds the sequence capacity of {SEQUENCE_CAPACITY}")
            }
            Self::LevelNotDisplayable(level) => {
                write!(f, "level {level} has no single-digit glyph; disable show_level")
            }
            Self::ZeroInputTimeout => write!(f, "input timeout must be non-zero"),
            Self::ZeroPollInterval => write!(f, "poll interval must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}
