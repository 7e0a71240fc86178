//! A 16x2 text frame for the character LCD.

use core::fmt::Write as _;

use heapless::String;

use crate::shared_constants::LCD_COLS;
use crate::Result;

/// One line of the display.
pub type LcdLine = String<LCD_COLS>;

/// The full frame the LCD device paints at once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LcdFrame {
    pub line1: LcdLine,
    pub line2: LcdLine,
}

impl LcdFrame {
    /// Builds a frame from two lines.
    ///
    /// # Errors
    ///
    /// A line longer than the panel is a [`crate::Error::FormatError`], not a
    /// silent truncation.
    pub fn new(line1: &str, line2: &str) -> Result<Self> {
        let mut frame = Self::default();
        frame.line1.push_str(line1)?;
        frame.line2.push_str(line2)?;
        Ok(frame)
    }
}

/// Appends `MM:SS`, with a caller-chosen separator so paused screens can
/// blink the colon.
///
/// # Errors
///
/// Fails with [`crate::Error::FormatError`] when the line is full.
pub fn write_clock(line: &mut LcdLine, minutes: u16, seconds: u16, separator: char) -> Result<()> {
    write!(line, "{minutes:02}{separator}{seconds:02}")?;
    Ok(())
}
