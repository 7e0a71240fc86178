//! Shared building blocks for the lab-board exercises.
//!
//! The pure state machines (patterns, alarm, timers, formatting) are always
//! compiled and run on the host; the device layer (pins, buttons, LED bar,
//! dial, LCD) needs a board feature (`pico1` or `pico2`).
#![no_std]

mod chess_clock;
mod error;
mod kitchen_timer;
mod lcd_frame;
mod never;
mod patterns;
mod shared_constants;
mod speed_dial;
mod threshold_alarm;

#[cfg(any(feature = "pico1", feature = "pico2"))]
mod button;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod char_lcd;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod hardware;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod led_bar;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod output_array;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod potentiometer;

// Re-export commonly used items
pub use chess_clock::{ChessClock, ClockEvent, MatchState, Player, TimeOption};
pub use error::{Error, Result};
pub use kitchen_timer::{KitchenTimer, TimerEvent, TimerState, DONE_SCREEN_SECONDS, MAX_SECONDS};
pub use lcd_frame::{write_clock, LcdFrame, LcdLine};
pub use never::Never;
pub use patterns::{Pattern, PatternKind};
pub use shared_constants::*;
pub use speed_dial::SpeedTier;
pub use threshold_alarm::{
    AlarmState, ThresholdAlarm, BLINK_TOGGLE_TICKS, DEFAULT_SETPOINT, ESCALATE_TICKS,
};

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use button::{Button, PressDuration};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use char_lcd::{CharLcd, CharLcdNotifier};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use hardware::Hardware;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use led_bar::{LedBar, LedBarNotifier};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use output_array::OutputArray;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use potentiometer::{Potentiometer, LEVEL_MAX};
