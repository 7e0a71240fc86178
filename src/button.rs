use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::shared_constants::{BUTTON_DEBOUNCE_DELAY, LONG_PRESS_DURATION};

/// A debounced push button, wired active low with a pull-up (pressed reads
/// low, like the lab board's switches).
pub struct Button<'a> {
    inner: Input<'a>,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(inner: Input<'a>) -> Self {
        Self { inner }
    }

    /// Waits for the next debounced press (the falling edge).
    ///
    /// Mechanical contacts are "noisy": around the moment of touching, the
    /// pin can fluctuate between levels on the microsecond scale. We settle
    /// each edge by ignoring the pin for a short debounce delay.
    pub async fn wait_for_press(&mut self) {
        // Let any previous press finish first.
        self.inner.wait_for_high().await;
        Timer::after(BUTTON_DEBOUNCE_DELAY).await;

        self.inner.wait_for_low().await;
        Timer::after(BUTTON_DEBOUNCE_DELAY).await;
    }

    /// Waits for a full press and reports how long the button was held.
    pub async fn press_duration(&mut self) -> PressDuration {
        self.wait_for_press().await;

        let press_duration =
            match select(self.inner.wait_for_high(), Timer::after(LONG_PRESS_DURATION)).await {
                Either::First(()) => PressDuration::Short,
                Either::Second(()) => PressDuration::Long,
            };
        info!("press duration: {:?}", press_duration);
        press_duration
    }
}

// Instead of describing a short vs a long button-press vaguely with a `bool`,
// an `enum` says what each state means. It compiles down to the same boolean.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressDuration {
    #[default]
    Short,
    Long,
}
