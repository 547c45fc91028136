//! Time source for polling deadlines.

use embedded_hal_async::delay::DelayNs;
use fugit::MillisDurationU32 as Millis;

/// Millisecond timestamp.
pub type Instant = fugit::TimerInstantU64<1000>;

/// A monotonic clock that can also sleep.
///
/// Sleeping goes through [`DelayNs`]; the game never sleeps any other way, so
/// a simulated clock only has to advance `now` inside `delay_ns`.
pub trait Clock: DelayNs {
    fn now(&self) -> Instant;
}

/// Milliseconds from `start` to now, zero if the clock went backwards.
pub(crate) fn elapsed_ms<C: Clock>(clock: &C, start: Instant) -> u64 {
    clock
        .now()
        .checked_duration_since(start)
        .map_or(0, |elapsed| elapsed.to_millis())
}

pub(crate) async fn sleep<C: Clock>(clock: &mut C, duration: Millis) {
    clock.delay_ms(duration.to_millis()).await;
}
