use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` tells `derive_more` that the wrapped type does
    // not implement `core::error::Error` itself.
    /// An Embassy task could not be spawned.
    #[cfg(any(feature = "pico1", feature = "pico2"))]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// Error setting output state
    #[display("Error setting output state")]
    CannotSetOutputState,

    /// Text did not fit the display.
    #[display("Format error")]
    FormatError,

    /// A dial sample could not be read.
    #[cfg(any(feature = "pico1", feature = "pico2"))]
    #[display("ADC read failed: {_0:?}")]
    AdcRead(#[error(not(source))] embassy_rp::adc::Error),
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::CannotSetOutputState
    }
}

// `heapless::String::push_str` reports overflow as `Err(())`.
impl From<()> for Error {
    fn from(_: ()) -> Self {
        Self::FormatError
    }
}

// `core::write!` into a fixed-capacity string reports overflow this way.
impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::FormatError
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl From<embassy_rp::adc::Error> for Error {
    fn from(err: embassy_rp::adc::Error) -> Self {
        Self::AdcRead(err)
    }
}
