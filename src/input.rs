//! Player input: analog joystick, colour buttons and the pause button.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::sequence::Direction;

/// Raw analog reading of both joystick axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisReading {
    pub x: u16,
    pub y: u16,
}

/// Where the joystick rests and how far it must travel to count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickCalibration {
    pub center: u16,
    pub deadzone: u16,
}

impl JoystickCalibration {
    /// Mid-scale of a 12-bit ADC.
    pub const DEFAULT: Self = Self {
        center: 2048,
        deadzone: 200,
    };
}

/// Reduce a raw reading to one direction.
///
/// The x axis wins when both axes are deflected. Readings inside the
/// deadzone, edges included, are [`Direction::Neutral`].
pub const fn quantize(reading: AxisReading, calibration: JoystickCalibration) -> Direction {
    let low = calibration.center.saturating_sub(calibration.deadzone);
    let high = calibration.center.saturating_add(calibration.deadzone);

    if reading.x < low {
        Direction::Left
    } else if reading.x > high {
        Direction::Right
    } else if reading.y > high {
        Direction::Up
    } else if reading.y < low {
        Direction::Down
    } else {
        Direction::Neutral
    }
}

/// Source of raw joystick samples.
pub trait JoystickAxes {
    fn read_axes(&mut self) -> AxisReading;
}

/// Discrete reads the round engine and game loop poll.
pub trait InputReader {
    /// Current quantized joystick direction.
    fn direction(&mut self) -> Direction;
    /// Colour-one button is held.
    fn color_button_1(&mut self) -> bool;
    /// Colour-two button is held.
    fn color_button_2(&mut self) -> bool;
    /// The pause button went from released to pressed since the last call.
    fn pause_toggled(&mut self) -> bool;
}

/// Joystick plus three active-low buttons.
pub struct PanelInput<A, P> {
    axes: A,
    calibration: JoystickCalibration,
    color_1: P,
    color_2: P,
    pause: P,
    pause_was_pressed: bool,
}

impl<A, P> PanelInput<A, P>
where
    A: JoystickAxes,
    P: InputPin<Error = Infallible>,
{
    pub const fn new(
        axes: A,
        calibration: JoystickCalibration,
        color_1: P,
        color_2: P,
        pause: P,
    ) -> Self {
        Self {
            axes,
            calibration,
            color_1,
            color_2,
            pause,
            pause_was_pressed: false,
        }
    }

    fn pressed(pin: &mut P) -> bool {
        let Ok(low) = pin.is_low();
        low
    }
}

impl<A, P> InputReader for PanelInput<A, P>
where
    A: JoystickAxes,
    P: InputPin<Error = Infallible>,
{
    fn direction(&mut self) -> Direction {
        quantize(self.axes.read_axes(), self.calibration)
    }

    fn color_button_1(&mut self) -> bool {
        Self::pressed(&mut self.color_1)
    }

    fn color_button_2(&mut self) -> bool {
        Self::pressed(&mut self.color_2)
    }

    fn pause_toggled(&mut self) -> bool {
        let pressed = Self::pressed(&mut self.pause);
        let edge = pressed && !self.pause_was_pressed;
        self.pause_was_pressed = pressed;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{
        FakeInputPin,
        FixedAxes,
    };

    const CAL: JoystickCalibration = JoystickCalibration::DEFAULT;

    fn at(x: u16, y: u16) -> Direction {
        quantize(AxisReading { x, y }, CAL)
    }

    #[test]
    fn centre_and_deadzone_are_neutral() {
        assert_eq!(at(2048, 2048), Direction::Neutral);
        assert_eq!(at(1848, 2248), Direction::Neutral);
        assert_eq!(at(2248, 1848), Direction::Neutral);
    }

    #[test]
    fn each_axis_maps_to_its_directions() {
        assert_eq!(at(1847, 2048), Direction::Left);
        assert_eq!(at(2249, 2048), Direction::Right);
        assert_eq!(at(2048, 2249), Direction::Up);
        assert_eq!(at(2048, 1847), Direction::Down);
        assert_eq!(at(0, 2048), Direction::Left);
        assert_eq!(at(2048, 4095), Direction::Up);
    }

    #[test]
    fn x_axis_takes_priority_on_diagonals() {
        assert_eq!(at(0, 4095), Direction::Left);
        assert_eq!(at(4095, 0), Direction::Right);
    }

    #[test]
    fn buttons_are_active_low() {
        let color_1 = FakeInputPin::new(false);
        let color_2 = FakeInputPin::new(true);
        let mut input = PanelInput::new(
            FixedAxes(AxisReading { x: 2048, y: 2048 }),
            CAL,
            color_1.clone(),
            color_2.clone(),
            FakeInputPin::new(true),
        );

        assert!(input.color_button_1());
        assert!(!input.color_button_2());
        assert_eq!(input.direction(), Direction::Neutral);
    }

    #[test]
    fn panel_quantizes_against_its_calibration() {
        let calibration = JoystickCalibration {
            center: 1000,
            deadzone: 100,
        };
        let mut input = PanelInput::new(
            FixedAxes(AxisReading { x: 1150, y: 1000 }),
            calibration,
            FakeInputPin::new(true),
            FakeInputPin::new(true),
            FakeInputPin::new(true),
        );
        assert_eq!(input.direction(), Direction::Right);

        // Under the default calibration the same reading points the other way.
        assert_eq!(at(1150, 1000), Direction::Left);
    }

    #[test]
    fn pause_reports_only_the_press_edge() {
        let pause = FakeInputPin::new(true);
        let mut input = PanelInput::new(
            FixedAxes(AxisReading { x: 2048, y: 2048 }),
            CAL,
            FakeInputPin::new(true),
            FakeInputPin::new(true),
            pause.clone(),
        );

        assert!(!input.pause_toggled());
        pause.set_high(false);
        assert!(input.pause_toggled());
        assert!(!input.pause_toggled(), "held button must not toggle again");
        pause.set_high(true);
        assert!(!input.pause_toggled());
        pause.set_high(false);
        assert!(input.pause_toggled());
    }
}
