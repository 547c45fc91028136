//! Two-axis analog joystick on ADC1.

use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcPin,
    },
    peripherals::{
        ADC1,
        GPIO1,
        GPIO2,
    },
};

use crate::{
    fmt::error,
    input::{
        AxisReading,
        JoystickAxes,
    },
};

pub struct AdcJoystick<'a> {
    adc: Adc<'a, ADC1<'a>, Blocking>,
    x: AdcPin<GPIO1<'a>, ADC1<'a>>,
    y: AdcPin<GPIO2<'a>, ADC1<'a>>,
    /// Reported for an axis whose conversion failed.
    center: u16,
}

impl<'a> AdcJoystick<'a> {
    pub const fn new(
        adc: Adc<'a, ADC1<'a>, Blocking>,
        x: AdcPin<GPIO1<'a>, ADC1<'a>>,
        y: AdcPin<GPIO2<'a>, ADC1<'a>>,
        center: u16,
    ) -> Self {
        Self { adc, x, y, center }
    }
}

impl JoystickAxes for AdcJoystick<'_> {
    fn read_axes(&mut self) -> AxisReading {
        // A failed conversion reads as a centred stick.
        let center = self.center;
        let x = nb::block!(self.adc.read_oneshot(&mut self.x)).unwrap_or_else(|()| {
            error!("ADC read failed on x axis");
            center
        });
        let y = nb::block!(self.adc.read_oneshot(&mut self.y)).unwrap_or_else(|()| {
            error!("ADC read failed on y axis");
            center
        });
        AxisReading { x, y }
    }
}
