//! Success and failure signals: buzzer patterns plus an indicator LED.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use fugit::MillisDurationU32 as Millis;

/// Tells the player how the round went.
#[allow(async_fn_in_trait)]
pub trait FeedbackUnit {
    /// Play the success pattern and hold the success LED for `hold`.
    async fn signal_success(&mut self, hold: Millis);
    /// Play the failure pattern and hold the failure LED for `hold`.
    async fn signal_failure(&mut self, hold: Millis);
}

const ECHO_FIRST_MS: u32 = 100;
const ECHO_GAP_MS: u32 = 50;
const ECHO_SECOND_MS: u32 = 150;
const CHORUS_MS: u32 = 200;

/// Two active-high buzzers and two indicator LEDs.
pub struct BuzzerFeedback<P, D> {
    buzzer_a: P,
    buzzer_b: P,
    success_led: P,
    failure_led: P,
    delay: D,
}

impl<P, D> BuzzerFeedback<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    pub fn new(buzzer_a: P, buzzer_b: P, success_led: P, failure_led: P, delay: D) -> Self {
        let mut feedback = Self {
            buzzer_a,
            buzzer_b,
            success_led,
            failure_led,
            delay,
        };
        set(&mut feedback.buzzer_a, false);
        set(&mut feedback.buzzer_b, false);
        set(&mut feedback.success_led, false);
        set(&mut feedback.failure_led, false);
        feedback
    }

    /// Buzzer A, short gap, then buzzer B.
    async fn echo(&mut self) {
        set(&mut self.buzzer_a, true);
        self.delay.delay_ms(ECHO_FIRST_MS).await;
        set(&mut self.buzzer_a, false);
        self.delay.delay_ms(ECHO_GAP_MS).await;
        set(&mut self.buzzer_b, true);
        self.delay.delay_ms(ECHO_SECOND_MS).await;
        set(&mut self.buzzer_b, false);
    }

    /// Both buzzers at once.
    async fn chorus(&mut self) {
        set(&mut self.buzzer_a, true);
        set(&mut self.buzzer_b, true);
        self.delay.delay_ms(CHORUS_MS).await;
        set(&mut self.buzzer_a, false);
        set(&mut self.buzzer_b, false);
    }
}

impl<P, D> FeedbackUnit for BuzzerFeedback<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    async fn signal_success(&mut self, hold: Millis) {
        self.echo().await;
        set(&mut self.success_led, true);
        self.delay.delay_ms(hold.to_millis()).await;
        set(&mut self.success_led, false);
    }

    async fn signal_failure(&mut self, hold: Millis) {
        self.chorus().await;
        set(&mut self.failure_led, true);
        self.delay.delay_ms(hold.to_millis()).await;
        set(&mut self.failure_led, false);
    }
}

fn set<P: OutputPin<Error = Infallible>>(pin: &mut P, high: bool) {
    let Ok(()) = pin.set_state(high.into());
}
