//! Microwave-style countdown timer.

use crate::lcd_frame::{write_clock, LcdFrame};
use crate::Result;

/// Longest settable time, 99:59 on the display.
pub const MAX_SECONDS: u16 = 99 * 60 + 59;

/// How long the done screen stays up before the timer resets.
pub const DONE_SCREEN_SECONDS: u8 = 5;

/// Button events of the timer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerEvent {
    AddMinute,
    AddTenSeconds,
    StartStop,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// The countdown state machine. Callers feed it button events and one
/// `tick_second` per second; `true` return values ask for a repaint.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KitchenTimer {
    state: TimerState,
    remaining: u16,
    finished: bool,
    done_seconds: u8,
}

impl KitchenTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TimerState::Idle,
            remaining: 0,
            finished: false,
            done_seconds: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u16 {
        self.remaining
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Applies a button event; returns `true` when the display changed.
    pub fn handle(&mut self, event: TimerEvent) -> bool {
        match event {
            TimerEvent::AddMinute => self.add(60),
            TimerEvent::AddTenSeconds => self.add(10),
            TimerEvent::StartStop => match self.state {
                TimerState::Idle if self.remaining > 0 => {
                    self.state = TimerState::Running;
                    self.clear_done_screen();
                    true
                }
                // Nothing to cook.
                TimerState::Idle => false,
                TimerState::Running => {
                    self.state = TimerState::Paused;
                    true
                }
                TimerState::Paused => {
                    self.state = TimerState::Running;
                    true
                }
            },
        }
    }

    /// Advances one second of wall time; returns `true` when the display
    /// changed.
    pub fn tick_second(&mut self) -> bool {
        match self.state {
            TimerState::Running => {
                if self.remaining > 0 {
                    self.remaining -= 1;
                }
                if self.remaining == 0 {
                    self.state = TimerState::Idle;
                    self.finished = true;
                    self.done_seconds = 0;
                }
                true
            }
            // The done screen dismisses itself after a few seconds.
            TimerState::Idle if self.finished => {
                self.done_seconds += 1;
                if self.done_seconds >= DONE_SCREEN_SECONDS {
                    self.clear_done_screen();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Renders the two LCD lines. While paused the colon follows
    /// `colon_visible` so the caller can blink it.
    ///
    /// # Errors
    ///
    /// Fails only if a line overflows the panel, which the fixed texts here
    /// never do.
    pub fn render(&self, colon_visible: bool) -> Result<LcdFrame> {
        if self.state == TimerState::Idle && self.finished {
            return LcdFrame::new("Done", "Enjoy!");
        }
        let headline = match self.state {
            TimerState::Idle => "Ready in:",
            TimerState::Running => "Cooking",
            TimerState::Paused => "Paused",
        };
        let mut frame = LcdFrame::new(headline, "Time: ")?;
        let separator = if self.state == TimerState::Paused && !colon_visible {
            ' '
        } else {
            ':'
        };
        write_clock(
            &mut frame.line2,
            self.remaining / 60,
            self.remaining % 60,
            separator,
        )?;
        Ok(frame)
    }

    fn add(&mut self, seconds: u16) -> bool {
        self.remaining = (self.remaining + seconds).min(MAX_SECONDS);
        self.clear_done_screen();
        true
    }

    fn clear_done_screen(&mut self) {
        self.finished = false;
        self.done_seconds = 0;
    }
}

impl Default for KitchenTimer {
    fn default() -> Self {
        Self::new()
    }
}
