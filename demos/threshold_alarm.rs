//! Threshold alarm on the LED bar.
//!
//! The dial is sampled on every alarm tick; above the setpoint the first LED
//! blinks, and after five seconds the whole bar latches on. Button A
//! silences the alarm (it re-arms while the level stays high).
//!
//! Run with: `cargo run --example threshold_alarm --features pico1 --target thumbv6m-none-eabi`
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_time::Timer;
use lab_kit::{
    Button, Hardware, LedBar, LedBarNotifier, Never, Potentiometer, Result, ThresholdAlarm,
    ALARM_TICK, DEFAULT_SETPOINT,
};
use panic_probe as _;

static LED_BAR_NOTIFIER: LedBarNotifier = LedBar::notifier();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();
    let led_bar = LedBar::new(hardware.led_bar, &LED_BAR_NOTIFIER, spawner)?;
    let mut pot = Potentiometer::new(hardware.adc, hardware.pot_pin);
    let mut silence_button = Button::new(hardware.button_a);

    let mut alarm = ThresholdAlarm::new(DEFAULT_SETPOINT);

    loop {
        match select(Timer::after(ALARM_TICK), silence_button.wait_for_press()).await {
            Either::First(()) => {
                let level = pot.read_level().await?;
                let before = alarm.state();
                let frame = alarm.tick(level);
                if alarm.state() != before {
                    info!("alarm: {:?} at level {}", alarm.state(), level);
                }
                led_bar.write_bits(frame);
            }
            Either::Second(()) => {
                alarm.silence();
                led_bar.write_bits(0);
                info!("alarm silenced");
            }
        }
    }
}
