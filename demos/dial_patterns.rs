//! Snake and count-down programs with the step speed on the dial.
//!
//! The dial is read before every step and mapped to one of five speed
//! tiers; either button switches between the two programs.
//!
//! Run with: `cargo run --example dial_patterns --features pico1 --target thumbv6m-none-eabi`
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_time::Timer;
use lab_kit::{
    Button, Hardware, LedBar, LedBarNotifier, Never, PatternKind, Potentiometer, Result,
    SpeedTier, PATTERN_BASE_STEP,
};
use panic_probe as _;

static LED_BAR_NOTIFIER: LedBarNotifier = LedBar::notifier();

const fn other_program(kind: PatternKind) -> PatternKind {
    match kind {
        PatternKind::Snake => PatternKind::BinaryDown,
        _ => PatternKind::Snake,
    }
}

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();
    let led_bar = LedBar::new(hardware.led_bar, &LED_BAR_NOTIFIER, spawner)?;
    let mut pot = Potentiometer::new(hardware.adc, hardware.pot_pin);
    let mut prev_button = Button::new(hardware.button_a);
    let mut next_button = Button::new(hardware.button_b);

    let mut kind = PatternKind::Snake;
    let mut pattern = kind.start();
    info!("program: {:?}", kind);

    loop {
        let tier = SpeedTier::from_level(pot.read_level().await?);
        led_bar.write_bits(pattern.step());

        match select3(
            Timer::after(PATTERN_BASE_STEP * tier.factor()),
            prev_button.wait_for_press(),
            next_button.wait_for_press(),
        )
        .await
        {
            Either3::First(()) => {}
            Either3::Second(()) | Either3::Third(()) => {
                kind = other_program(kind);
                pattern = kind.start();
                info!("program: {:?}", kind);
            }
        }
    }
}
