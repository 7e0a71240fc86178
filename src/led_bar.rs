//! The 8-LED bar as a device with a background task.

use core::convert::Infallible;

use embassy_executor::Spawner;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

use crate::output_array::OutputArray;
use crate::shared_constants::LED_COUNT;
use crate::{Error, Result};

/// A handle to the LED bar; frames are painted by a background task.
pub struct LedBar<'a>(&'a LedBarNotifier);

/// Notifier carrying the next frame for the bar.
pub type LedBarNotifier = Signal<CriticalSectionRawMutex, u8>;

impl LedBar<'_> {
    /// Creates the notifier. Assign it to a `static` and pass it to `new`.
    #[must_use]
    pub const fn notifier() -> LedBarNotifier {
        Signal::new()
    }

    /// Starts the device task that owns the pins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if the task cannot be spawned.
    pub fn new(
        pins: OutputArray<'static, LED_COUNT>,
        notifier: &'static LedBarNotifier,
        spawner: Spawner,
    ) -> Result<Self> {
        spawner
            .spawn(device_loop(pins, notifier))
            .map_err(Error::TaskSpawn)?;
        Ok(Self(notifier))
    }

    /// Shows a frame; bit 0 is the lowest LED. When frames arrive faster
    /// than the task paints them, the newest wins, which is what a display
    /// wants.
    pub fn write_bits(&self, bits: u8) {
        self.0.signal(bits);
    }
}

#[embassy_executor::task]
async fn device_loop(pins: OutputArray<'static, LED_COUNT>, notifier: &'static LedBarNotifier) -> ! {
    let err = inner_device_loop(pins, notifier).await.unwrap_err();
    panic!("{err}");
}

async fn inner_device_loop(
    mut pins: OutputArray<'static, LED_COUNT>,
    notifier: &'static LedBarNotifier,
) -> Result<Infallible> {
    let mut frame = 0u8;
    loop {
        pins.set_from_bits(frame)?;
        frame = notifier.wait().await;
    }
}
