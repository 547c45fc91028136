//! ESP32-S3 wiring for the game: matrix on RMT, joystick on ADC1, buttons,
//! buzzers and indicator LEDs on plain GPIO.

mod clock;
mod joystick;
mod leds;

use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcConfig,
        Attenuation,
    },
    assign_resources,
    clock::CpuClock,
    gpio::{
        Input,
        InputConfig,
        Level,
        Output,
        OutputConfig,
        Pull,
    },
    rmt::{
        Rmt,
        Tx,
        TxChannelConfig,
        TxChannelCreator as _,
    },
    rng::Rng,
    time::Rate,
};

pub use self::{
    clock::EmbassyClock,
    joystick::AdcJoystick,
    leds::Ws2812Strip,
};
use crate::{
    feedback::BuzzerFeedback,
    input::{
        JoystickCalibration,
        PanelInput,
    },
};

/// Joystick and buttons as wired on the board.
pub type BoardInput = PanelInput<AdcJoystick<'static>, Input<'static>>;

/// Buzzers and indicator LEDs as wired on the board.
pub type BoardFeedback = BuzzerFeedback<Output<'static>, embassy_time::Delay>;

/// StaticCell helper: allocates a value into a `static` exactly once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        matrix: MatrixResources<'d> {
            power: GPIO17,
            io: GPIO18,
            rmt: RMT,
        },
        input: InputResources<'d> {
            x: GPIO1,
            y: GPIO2,
            adc: ADC1,
            stick: GPIO14,
            color_1: GPIO13,
            color_2: GPIO38,
        },
        feedback: FeedbackResources<'d> {
            buzzer_a: GPIO10,
            buzzer_b: GPIO21,
            success_led: GPIO11,
            failure_led: GPIO12,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Initialise the chip and return the raw peripheral set.
///
/// Call this once at the top of `main`, then use [`split_resources!`] to
/// break the peripherals into typed resource groups.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

/// 64 bits from the hardware RNG, for seeding the sequence generator once at
/// boot.
pub fn hardware_seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}

// ── Resource → peripheral conversions ───────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

impl<'a> From<MatrixResources<'a>> for esp_hal::rmt::Channel<'a, Blocking, Tx> {
    fn from(res: MatrixResources<'a>) -> Self {
        let _ws_power = Output::new(res.power, Level::High, OutputConfig::default());
        let rmt = Rmt::new(res.rmt, Rate::from_mhz(40)).unwrap();
        let tx_config = TxChannelConfig::default().with_clk_divider(1);
        rmt.channel0.configure_tx(res.io, tx_config).unwrap()
    }
}

impl<'a> From<MatrixResources<'a>> for Ws2812Strip<'a> {
    fn from(res: MatrixResources<'a>) -> Self {
        Ws2812Strip::new(res.into())
    }
}

impl BoardInput {
    /// Joystick and buttons, quantized with `calibration`.
    pub fn with_calibration(res: InputResources<'static>, calibration: JoystickCalibration) -> Self {
        let mut adc_config = AdcConfig::new();
        let x = adc_config.enable_pin(res.x, Attenuation::_11dB);
        let y = adc_config.enable_pin(res.y, Attenuation::_11dB);
        let adc = Adc::new(res.adc, adc_config);

        let pull_up = InputConfig::default().with_pull(Pull::Up);
        PanelInput::new(
            AdcJoystick::new(adc, x, y, calibration.center),
            calibration,
            Input::new(res.color_1, pull_up),
            Input::new(res.color_2, pull_up),
            Input::new(res.stick, pull_up),
        )
    }
}

impl From<FeedbackResources<'static>> for BoardFeedback {
    fn from(res: FeedbackResources<'static>) -> Self {
        let config = OutputConfig::default();
        BuzzerFeedback::new(
            Output::new(res.buzzer_a, Level::Low, config),
            Output::new(res.buzzer_b, Level::Low, config),
            Output::new(res.success_led, Level::Low, config),
            Output::new(res.failure_led, Level::Low, config),
            embassy_time::Delay,
        )
    }
}
