//! Alarm driven by periodic dial samples.
//!
//! While the level stays above the setpoint the first LED blinks; if it has
//! not come back down after the blink phase, the whole bar latches on until
//! it does (or until the alarm is silenced).

/// Default setpoint, mid-scale of the 10-bit dial.
pub const DEFAULT_SETPOINT: u16 = 512;

/// Poll ticks between blink toggles (about 2 Hz at the 10 ms alarm tick).
pub const BLINK_TOGGLE_TICKS: u32 = 45;

/// Poll ticks of blinking before the whole bar latches on (5 s).
pub const ESCALATE_TICKS: u32 = 500;

const BLINK_FRAME: u8 = 0b0000_0001;
const FULL_FRAME: u8 = 0b1111_1111;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    Off,
    Blinking,
    FullOn,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdAlarm {
    setpoint: u16,
    state: AlarmState,
    ticks_in_state: u32,
    ticks_since_toggle: u32,
    led_on: bool,
}

impl ThresholdAlarm {
    #[must_use]
    pub const fn new(setpoint: u16) -> Self {
        Self {
            setpoint,
            state: AlarmState::Off,
            ticks_in_state: 0,
            ticks_since_toggle: 0,
            led_on: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> AlarmState {
        self.state
    }

    /// Advances one poll tick with a fresh dial sample; returns the LED frame.
    pub fn tick(&mut self, level: u16) -> u8 {
        match self.state {
            AlarmState::Off => {
                if level > self.setpoint {
                    self.state = AlarmState::Blinking;
                    self.ticks_in_state = 0;
                    self.ticks_since_toggle = 0;
                    self.led_on = false;
                }
                0
            }
            AlarmState::Blinking => {
                if level <= self.setpoint {
                    self.disarm();
                    return 0;
                }
                self.ticks_in_state += 1;
                self.ticks_since_toggle += 1;
                if self.ticks_in_state >= ESCALATE_TICKS {
                    self.state = AlarmState::FullOn;
                    return FULL_FRAME;
                }
                if self.ticks_since_toggle >= BLINK_TOGGLE_TICKS {
                    self.ticks_since_toggle = 0;
                    self.led_on = !self.led_on;
                }
                if self.led_on { BLINK_FRAME } else { 0 }
            }
            AlarmState::FullOn => {
                if level <= self.setpoint {
                    self.disarm();
                    return 0;
                }
                FULL_FRAME
            }
        }
    }

    /// Button override. A silenced alarm re-arms on a later tick if the level
    /// is still above the setpoint.
    pub fn silence(&mut self) {
        self.disarm();
    }

    fn disarm(&mut self) {
        self.state = AlarmState::Off;
        self.ticks_in_state = 0;
        self.ticks_since_toggle = 0;
        self.led_on = false;
    }
}
