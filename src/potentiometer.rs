//! Async reader for the dial on GP26.

use embassy_rp::adc::{Adc, Async, Channel, Config as AdcConfig, InterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::{ADC, PIN_26};
use embassy_rp::Peri;

use crate::{Error, Result};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => InterruptHandler;
});

/// Full scale of [`Potentiometer::read_level`] (10 bits, the range all the
/// exercise thresholds are written against).
pub const LEVEL_MAX: u16 = 1023;

/// The dial. Reads are on demand; no background task.
pub struct Potentiometer {
    adc: Adc<'static, Async>,
    channel: Channel<'static>,
}

impl Potentiometer {
    #[must_use]
    pub fn new(adc: Peri<'static, ADC>, pin: Peri<'static, PIN_26>) -> Self {
        let adc = Adc::new(adc, Irqs, AdcConfig::default());
        let channel = Channel::new_pin(pin, Pull::None);
        Self { adc, channel }
    }

    /// One raw 12-bit sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AdcRead`] when the conversion fails.
    pub async fn read_raw(&mut self) -> Result<u16> {
        self.adc.read(&mut self.channel).await.map_err(Error::AdcRead)
    }

    /// One sample scaled to 0..=[`LEVEL_MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::AdcRead`] when the conversion fails.
    pub async fn read_level(&mut self) -> Result<u16> {
        Ok(self.read_raw().await? >> 2)
    }
}
