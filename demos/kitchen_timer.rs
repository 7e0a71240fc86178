//! Microwave-style countdown timer on the LCD.
//!
//! Button A adds a minute, button B adds ten seconds, button C
//! starts/pauses. The countdown and the paused colon blink both run off one
//! half-second heartbeat so they cannot drift apart.
//!
//! Run with: `cargo run --example kitchen_timer --features pico1 --target thumbv6m-none-eabi`
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select4, Either4};
use embassy_time::{Instant, Timer};
use lab_kit::{
    Button, CharLcd, CharLcdNotifier, Hardware, KitchenTimer, Never, Result, TimerEvent,
    TimerState, BLINK_HALF_PERIOD,
};
use panic_probe as _;

static LCD_NOTIFIER: CharLcdNotifier = CharLcd::notifier();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();
    let lcd = CharLcd::new(
        hardware.i2c0,
        hardware.lcd_scl,
        hardware.lcd_sda,
        &LCD_NOTIFIER,
        spawner,
    )?;
    let mut minute_button = Button::new(hardware.button_a);
    let mut ten_seconds_button = Button::new(hardware.button_b);
    let mut start_button = Button::new(hardware.button_c);

    let mut timer = KitchenTimer::new();
    let mut colon_visible = true;
    let mut half_ticks: u32 = 0;
    let mut next_half_tick = Instant::now() + BLINK_HALF_PERIOD;

    lcd.show(timer.render(colon_visible)?).await;

    loop {
        let repaint = match select4(
            Timer::at(next_half_tick),
            minute_button.wait_for_press(),
            ten_seconds_button.wait_for_press(),
            start_button.wait_for_press(),
        )
        .await
        {
            Either4::First(()) => {
                next_half_tick += BLINK_HALF_PERIOD;
                half_ticks = half_ticks.wrapping_add(1);
                colon_visible = !colon_visible;
                let ticked = if half_ticks % 2 == 0 {
                    timer.tick_second()
                } else {
                    false
                };
                if ticked && timer.is_finished() {
                    info!("countdown finished");
                }
                // Repaint every half tick while paused so the colon blinks.
                ticked || timer.state() == TimerState::Paused
            }
            Either4::Second(()) => timer.handle(TimerEvent::AddMinute),
            Either4::Third(()) => timer.handle(TimerEvent::AddTenSeconds),
            Either4::Fourth(()) => timer.handle(TimerEvent::StartStop),
        };

        if repaint {
            lcd.show(timer.render(colon_visible)?).await;
        }
    }
}
