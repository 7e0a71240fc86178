use core::convert::Infallible;

use embassy_rp::gpio;
use embedded_hal::digital::OutputPin;

/// A fixed group of output pins driven together.
pub struct OutputArray<'a, const N: usize>([gpio::Output<'a>; N]);

impl<'a, const N: usize> OutputArray<'a, N> {
    #[must_use]
    pub fn new(outputs: [gpio::Output<'a>; N]) -> Self {
        Self(outputs)
    }
}

impl OutputArray<'_, { u8::BITS as usize }> {
    /// Drives the eight pins from one frame byte, bit 0 first.
    #[inline]
    #[must_use = "Possible error result should not be ignored"]
    // on some hardware (but not here), setting a bit can fail, so we return a Result
    pub fn set_from_bits(&mut self, mut bits: u8) -> Result<(), Infallible> {
        for output in &mut self.0 {
            let lit = (bits & 1) == 1;
            output.set_state(lit.into())?;
            bits >>= 1;
        }
        Ok(())
    }
}
