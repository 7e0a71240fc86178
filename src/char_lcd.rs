//! A device abstraction for an HD44780 16x2 LCD behind a PCF8574 I2C backpack.

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, Config as I2cConfig, SclPin, SdaPin};
use embassy_rp::peripherals::I2C0;
use embassy_rp::Peri;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Timer;

use crate::lcd_frame::LcdFrame;
use crate::{Error, Result};

/// Notifier type for the `CharLcd` device abstraction.
pub type CharLcdNotifier = Channel<CriticalSectionRawMutex, LcdFrame, 8>;

/// A handle to the character LCD; frames are painted by a background task.
pub struct CharLcd {
    notifier: &'static CharLcdNotifier,
}

impl CharLcd {
    /// Creates the notifier. Assign it to a `static` and pass it to `new`.
    #[must_use]
    pub const fn notifier() -> CharLcdNotifier {
        Channel::new()
    }

    /// Creates the device and spawns its task.
    ///
    /// Note: Hardcoded to the I2C0 peripheral; SCL and SDA can be any pins
    /// compatible with I2C0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if the task cannot be spawned.
    pub fn new<SCL, SDA>(
        i2c_peripheral: Peri<'static, I2C0>,
        scl: Peri<'static, SCL>,
        sda: Peri<'static, SDA>,
        notifier: &'static CharLcdNotifier,
        spawner: Spawner,
    ) -> Result<Self>
    where
        SCL: SclPin<I2C0>,
        SDA: SdaPin<I2C0>,
    {
        // Create the I2C instance and pass it to the task
        let i2c = i2c::I2c::new_blocking(i2c_peripheral, scl, sda, I2cConfig::default());
        spawner
            .spawn(device_loop(i2c, notifier))
            .map_err(Error::TaskSpawn)?;
        Ok(Self { notifier })
    }

    /// Queues a frame, waiting for space in the queue.
    pub async fn show(&self, frame: LcdFrame) {
        self.notifier.send(frame).await;
    }

    /// Queues a frame, dropping it when the queue is full.
    pub fn try_show(&self, frame: LcdFrame) {
        if self.notifier.try_send(frame).is_err() {
            info!("LCD queue full, frame dropped");
        }
    }
}

// Internal LCD driver implementation (used by the background task)
struct LcdDriver {
    i2c: i2c::I2c<'static, I2C0, i2c::Blocking>,
    address: u8,
}

// PCF8574 pin mapping: P0=RS, P1=RW, P2=E, P3=Backlight, P4-P7=Data
const LCD_BACKLIGHT: u8 = 0x08;
const LCD_ENABLE: u8 = 0x04;
const LCD_RS: u8 = 0x01;

impl LcdDriver {
    fn new(i2c: i2c::I2c<'static, I2C0, i2c::Blocking>) -> Self {
        Self { i2c, address: 0x27 }
    }

    async fn init(&mut self) {
        Timer::after_millis(50).await;

        // Initialize in 4-bit mode
        self.write_nibble(0x03, false).await;
        Timer::after_millis(5).await;
        self.write_nibble(0x03, false).await;
        Timer::after_micros(150).await;
        self.write_nibble(0x03, false).await;
        self.write_nibble(0x02, false).await;

        // Function set: 4-bit, 2 lines, 5x8 font
        self.write_byte(0x28, false).await;
        // Display control: display on, cursor off, blink off
        self.write_byte(0x0C, false).await;
        // Clear display
        self.write_byte(0x01, false).await;
        Timer::after_millis(2).await;
        // Entry mode: increment cursor, no shift
        self.write_byte(0x06, false).await;
    }

    async fn write_nibble(&mut self, nibble: u8, rs: bool) {
        let rs_bit = if rs { LCD_RS } else { 0 };
        let data = (nibble << 4) | LCD_BACKLIGHT | rs_bit;

        // Write with enable high
        let _ = self.i2c.blocking_write(self.address, &[data | LCD_ENABLE]);
        Timer::after_micros(1).await;

        // Write with enable low
        let _ = self.i2c.blocking_write(self.address, &[data]);
        Timer::after_micros(50).await;
    }

    async fn write_byte(&mut self, byte: u8, rs: bool) {
        self.write_nibble((byte >> 4) & 0x0F, rs).await;
        self.write_nibble(byte & 0x0F, rs).await;
    }

    async fn clear(&mut self) {
        self.write_byte(0x01, false).await;
        Timer::after_millis(2).await;
    }

    async fn set_cursor(&mut self, row: u8, col: u8) {
        let address = match row {
            1 => 0x40 + col,
            _ => col,
        };
        self.write_byte(0x80 | address, false).await;
    }

    async fn print(&mut self, text: &str) {
        for byte in text.bytes() {
            self.write_byte(byte, true).await;
        }
    }
}

#[embassy_executor::task]
async fn device_loop(
    i2c: i2c::I2c<'static, I2C0, i2c::Blocking>,
    notifier: &'static CharLcdNotifier,
) -> ! {
    let mut driver = LcdDriver::new(i2c);
    driver.init().await;
    info!("LCD ready");

    loop {
        let frame = notifier.receive().await;
        driver.clear().await;
        driver.print(&frame.line1).await;
        driver.set_cursor(1, 0).await;
        driver.print(&frame.line2).await;
    }
}
