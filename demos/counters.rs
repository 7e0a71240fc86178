//! All nine LED display programs at the fixed base step.
//!
//! Button A steps to the previous program, button B to the next, with
//! wraparound. Runs on the lab board's 8-LED bar.
//!
//! Run with: `cargo run --example counters --features pico1 --target thumbv6m-none-eabi`
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_time::Timer;
use lab_kit::{
    Button, Hardware, LedBar, LedBarNotifier, Never, PatternKind, Result, PATTERN_BASE_STEP,
};
use panic_probe as _;

static LED_BAR_NOTIFIER: LedBarNotifier = LedBar::notifier();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();
    let led_bar = LedBar::new(hardware.led_bar, &LED_BAR_NOTIFIER, spawner)?;
    let mut prev_button = Button::new(hardware.button_a);
    let mut next_button = Button::new(hardware.button_b);

    let mut kind = PatternKind::BinaryUp;
    let mut pattern = kind.start();
    info!("program: {:?}", kind);

    loop {
        led_bar.write_bits(pattern.step());

        match select3(
            Timer::after(PATTERN_BASE_STEP),
            prev_button.wait_for_press(),
            next_button.wait_for_press(),
        )
        .await
        {
            Either3::First(()) => {}
            Either3::Second(()) => {
                kind = kind.prev();
                pattern = kind.start();
                info!("program: {:?}", kind);
            }
            Either3::Third(()) => {
                kind = kind.next();
                pattern = kind.start();
                info!("program: {:?}", kind);
            }
        }
    }
}
