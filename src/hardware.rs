use embassy_rp::{
    gpio::{self, Level},
    peripherals::{ADC, I2C0, PIN_16, PIN_17, PIN_26},
    Peri, Peripherals,
};

use crate::output_array::OutputArray;
use crate::shared_constants::LED_COUNT;

/// The lab board's wiring: eight LEDs in a bar, four push buttons, a dial,
/// and a 16x2 LCD.
pub struct Hardware {
    /// The LED bar on GP2..=GP9, bit 0 at GP2.
    pub led_bar: OutputArray<'static, LED_COUNT>,
    /// Active-low push button on GP10.
    pub button_a: gpio::Input<'static>,
    /// Active-low push button on GP11.
    pub button_b: gpio::Input<'static>,
    /// Active-low push button on GP12.
    pub button_c: gpio::Input<'static>,
    /// Active-low push button on GP13.
    pub button_d: gpio::Input<'static>,
    /// The onboard LED.
    pub led: gpio::Output<'static>,
    /// The ADC block, for `Potentiometer::new`.
    pub adc: Peri<'static, ADC>,
    /// The dial's pin (GP26), for `Potentiometer::new`.
    pub pot_pin: Peri<'static, PIN_26>,
    /// The I2C block of the LCD, for `CharLcd::new`.
    pub i2c0: Peri<'static, I2C0>,
    /// LCD SDA (GP16), for `CharLcd::new`.
    pub lcd_sda: Peri<'static, PIN_16>,
    /// LCD SCL (GP17), for `CharLcd::new`.
    pub lcd_scl: Peri<'static, PIN_17>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: Peripherals = embassy_rp::init(embassy_rp::config::Config::default());

        let led_bar = OutputArray::new([
            gpio::Output::new(peripherals.PIN_2, Level::Low),
            gpio::Output::new(peripherals.PIN_3, Level::Low),
            gpio::Output::new(peripherals.PIN_4, Level::Low),
            gpio::Output::new(peripherals.PIN_5, Level::Low),
            gpio::Output::new(peripherals.PIN_6, Level::Low),
            gpio::Output::new(peripherals.PIN_7, Level::Low),
            gpio::Output::new(peripherals.PIN_8, Level::Low),
            gpio::Output::new(peripherals.PIN_9, Level::Low),
        ]);

        let button_a = gpio::Input::new(peripherals.PIN_10, gpio::Pull::Up);
        let button_b = gpio::Input::new(peripherals.PIN_11, gpio::Pull::Up);
        let button_c = gpio::Input::new(peripherals.PIN_12, gpio::Pull::Up);
        let button_d = gpio::Input::new(peripherals.PIN_13, gpio::Pull::Up);

        let led = gpio::Output::new(peripherals.PIN_25, Level::Low);

        Self {
            led_bar,
            button_a,
            button_b,
            button_c,
            button_d,
            led,
            adc: peripherals.ADC,
            pot_pin: peripherals.PIN_26,
            i2c0: peripherals.I2C0,
            lcd_sda: peripherals.PIN_16,
            lcd_scl: peripherals.PIN_17,
        }
    }
}
