//! Two-player chess clock on the LCD.
//!
//! While the selection screen is up, the dial picks the time control
//! (5/3/1 minutes). Button A ends player one's move, button B player two's,
//! button C starts/pauses, button D resets. The dial is sampled every
//! 100 ms, but only while selecting; the same heartbeat accumulates the
//! running player's seconds.
//!
//! Run with: `cargo run --example chess_clock --features pico1 --target thumbv6m-none-eabi`
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select, select4, Either, Either4};
use embassy_time::{Instant, Timer};
use lab_kit::{
    Button, CharLcd, CharLcdNotifier, ChessClock, ClockEvent, Hardware, MatchState, Never,
    Potentiometer, Result, SELECT_POLL,
};
use panic_probe as _;

static LCD_NOTIFIER: CharLcdNotifier = CharLcd::notifier();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

// Milliseconds per SELECT_POLL heartbeat.
const POLL_MS: u32 = 100;

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();
    let lcd = CharLcd::new(
        hardware.i2c0,
        hardware.lcd_scl,
        hardware.lcd_sda,
        &LCD_NOTIFIER,
        spawner,
    )?;
    let mut pot = Potentiometer::new(hardware.adc, hardware.pot_pin);
    let mut player_one_button = Button::new(hardware.button_a);
    let mut player_two_button = Button::new(hardware.button_b);
    let mut start_button = Button::new(hardware.button_c);
    let mut reset_button = Button::new(hardware.button_d);

    let mut clock = ChessClock::new();
    let mut ms_in_second: u32 = 0;
    let mut next_poll = Instant::now() + SELECT_POLL;

    lcd.show(clock.render()?).await;

    loop {
        let repaint = match select(
            Timer::at(next_poll),
            select4(
                player_one_button.wait_for_press(),
                player_two_button.wait_for_press(),
                start_button.wait_for_press(),
                reset_button.wait_for_press(),
            ),
        )
        .await
        {
            Either::First(()) => {
                next_poll += SELECT_POLL;
                match clock.state() {
                    MatchState::SelectTime => clock.select_time(pot.read_level().await?),
                    MatchState::Running(_) => {
                        ms_in_second += POLL_MS;
                        if ms_in_second >= 1000 {
                            ms_in_second = 0;
                            let ticked = clock.tick_second();
                            if let MatchState::Over { winner } = clock.state() {
                                info!("flag fell, {:?} wins", winner);
                            }
                            ticked
                        } else {
                            false
                        }
                    }
                    _ => false,
                }
            }
            Either::Second(Either4::First(())) => {
                let changed = clock.handle(ClockEvent::PlayerOne);
                // The opponent's move starts on a fresh second.
                if changed {
                    ms_in_second = 0;
                }
                changed
            }
            Either::Second(Either4::Second(())) => {
                let changed = clock.handle(ClockEvent::PlayerTwo);
                if changed {
                    ms_in_second = 0;
                }
                changed
            }
            Either::Second(Either4::Third(())) => {
                let changed = clock.handle(ClockEvent::StartPause);
                if changed {
                    ms_in_second = 0;
                }
                changed
            }
            Either::Second(Either4::Fourth(())) => {
                ms_in_second = 0;
                clock.handle(ClockEvent::Reset)
            }
        };

        if repaint {
            lcd.show(clock.render()?).await;
        }
    }
}
