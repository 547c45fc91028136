//! [`Clock`] backed by the embassy time driver.

use embassy_time::Timer;
use embedded_hal_async::delay::DelayNs;

use crate::clock::{
    Clock,
    Instant,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl DelayNs for EmbassyClock {
    async fn delay_ns(&mut self, ns: u32) {
        Timer::after_nanos(u64::from(ns)).await;
    }

    async fn delay_us(&mut self, us: u32) {
        Timer::after_micros(u64::from(us)).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await;
    }
}

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::from_ticks(embassy_time::Instant::now().as_millis())
    }
}
