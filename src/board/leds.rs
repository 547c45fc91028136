//! WS2812 strip driver for the matrix, using the RMT peripheral.

extern crate alloc;

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};

use crate::{
    display::{
        Frame,
        StripTransmitter,
    },
    fmt::error,
};

/// Line must stay low this long after a frame before the strip latches it.
const RESET_QUIET: Duration = Duration::from_micros(100);

/// Shifts frames out to the 25 LEDs in strip address order.
pub struct Ws2812Strip<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
}

impl<'a> Ws2812Strip<'a> {
    pub const fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
        }
    }

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        let mut pulses = [PulseCode::default(); 8];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            *pulse = Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0);
        }
        pulses
    }
}

impl StripTransmitter for Ws2812Strip<'_> {
    async fn transmit(&mut self, frame: &Frame) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        let pulses = frame
            .iter()
            .flat_map(|pixel| {
                // GRB on the wire
                [
                    Self::byte_to_pulses(pixel.green),
                    Self::byte_to_pulses(pixel.red),
                    Self::byte_to_pulses(pixel.blue),
                ]
                .into_iter()
                .flatten()
            })
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<alloc::vec::Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });

        Timer::after(RESET_QUIET).await;
    }
}
