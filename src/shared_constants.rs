use embassy_time::Duration;

/// Number of LEDs in the bar.
pub const LED_COUNT: usize = 8;

/// Columns of the character LCD.
pub const LCD_COLS: usize = 16;
/// Rows of the character LCD.
pub const LCD_ROWS: usize = 2;

pub const ONE_SECOND: Duration = Duration::from_secs(1);

/// Base step of the LED pattern programs. The speed dial stretches this by
/// the tier factor, never shrinks it.
pub const PATTERN_BASE_STEP: Duration = Duration::from_millis(250);

/// Poll period of the threshold alarm. `threshold_alarm` counts these ticks.
pub const ALARM_TICK: Duration = Duration::from_millis(10);

/// Poll period of the dial while a selection screen is active.
pub const SELECT_POLL: Duration = Duration::from_millis(100);

/// Half-period of blinking LCD elements (the paused colon).
pub const BLINK_HALF_PERIOD: Duration = Duration::from_millis(500);

pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);
pub const LONG_PRESS_DURATION: Duration = Duration::from_millis(500);
