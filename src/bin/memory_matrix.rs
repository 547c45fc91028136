//! Memory Matrix on the ESP32-S3 board.
//!
//! Build with `--features endurance` for the ten-level bright variant.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use memory_matrix::{
    board::*,
    *,
};
use rand::{
    SeedableRng,
    rngs::SmallRng,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

#[cfg(not(feature = "endurance"))]
const CONFIG: GameConfig = GameConfig::STANDARD;
#[cfg(feature = "endurance")]
const CONFIG: GameConfig = GameConfig::ENDURANCE;

type BadgeGame = Game<Ws2812Strip<'static>, BoardInput, BoardFeedback, EmbassyClock, SmallRng>;

#[embassy_executor::task]
async fn game_task(game: &'static mut BadgeGame) {
    info!("Game task started");
    game.run().await
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = memory_matrix::board::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 16 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let seed = hardware_seed();
    info!("Seeding sequence generator with {=u64:x}", seed);

    let strip = Ws2812Strip::from(resources.matrix);
    let renderer = Renderer::new(DisplaySurface::new(strip), CONFIG.palette);
    let game = defmt::unwrap!(Game::new(
        CONFIG,
        renderer,
        BoardInput::with_calibration(resources.input, CONFIG.joystick),
        BoardFeedback::from(resources.feedback),
        EmbassyClock,
        SmallRng::seed_from_u64(seed),
    ));

    let game = mk_static!(BadgeGame, game);
    spawner.must_spawn(game_task(game));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
