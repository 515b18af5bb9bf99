//! High-level interface for a chain of MAX7219 LED drivers.
//!
//! [`Max7219`] wraps the low-level cascade driver with the power-on
//! sequence, row addressing and argument validation. Every write goes to all
//! chips in the chain, so a chain of identical panels mirrors one image.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::driver::CascadeDriver;
use crate::error::Max7219Error;
use crate::registers::{
    digit_register, DECODE_MODE, DEFAULT_INTENSITY, DISPLAY_TEST, INTENSITY, MAX_INTENSITY,
    NORMAL_OPERATION, NO_DECODE, ROW_COUNT, SCAN_ALL_DIGITS, SCAN_LIMIT, SHUTDOWN, SHUTDOWN_MODE,
};

/// One 8x8 frame: row `n` is the bit pattern for digit register `n`.
pub type Rows = [u8; ROW_COUNT];

/// High-level interface for a chain of MAX7219 drivers on one SPI bus.
///
/// # Example
///
/// ```ignore
/// use max7219_driver::Max7219;
///
/// // `spi` is any `embedded-hal` SPI bus, `cs` an output pin driven high,
/// // `delay` any `DelayNs` source.
/// let mut display = Max7219::new(spi, cs, delay, 1);
///
/// display.init()?;
/// display.clear()?;
/// display.draw_rows(&[0x08, 0x1c, 0x3e, 0x7f, 0x1c, 0x1c, 0x1c, 0x1c])?;
/// ```
pub struct Max7219<SPI, CS, D> {
    driver: CascadeDriver<SPI, CS, D>,
}

impl<SPI, CS, D> Max7219<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a new display interface.
    ///
    /// No SPI traffic is generated. You **must** call [`init()`](Self::init)
    /// before the chips show anything.
    ///
    /// # Arguments
    /// * `spi` — SPI bus (takes ownership for exclusive access)
    /// * `cs` — shared chip-select line, already driven high
    /// * `delay` — delay source for the chip-select settling time
    /// * `chain_len` — number of cascaded chips (0 is treated as 1)
    pub fn new(spi: SPI, cs: CS, delay: D, chain_len: usize) -> Self {
        Self {
            driver: CascadeDriver::new(spi, cs, delay, chain_len),
        }
    }

    /// Number of chips in the cascade.
    pub fn chain_len(&self) -> usize {
        self.driver.chain_len()
    }

    /// Give back the SPI bus, chip-select pin and delay.
    pub fn release(self) -> (SPI, CS, D) {
        self.driver.release()
    }

    // -----------------------------------------------------------------------
    // Raw access
    // -----------------------------------------------------------------------

    /// Write `value` to `register` on every chip in the chain.
    ///
    /// One chip-select window carries one frame per chip.
    pub fn write_all(&mut self, register: u8, value: u8) -> Result<(), Max7219Error<SPI::Error>> {
        self.driver.write_all(register, value)
    }

    // -----------------------------------------------------------------------
    // Bring-up and configuration
    // -----------------------------------------------------------------------

    /// Run the power-on register sequence.
    ///
    /// Order matters: scan limit and decode mode are programmed while the
    /// chip is shut down and out of test mode, then the chip is woken and
    /// set to a low brightness. Always six writes, whatever the chain length.
    ///
    /// # Errors
    /// Returns the first bus error; later registers are not written.
    pub fn init(&mut self) -> Result<(), Max7219Error<SPI::Error>> {
        self.write_all(SHUTDOWN, SHUTDOWN_MODE)?;
        self.write_all(DISPLAY_TEST, 0)?;
        self.write_all(SCAN_LIMIT, SCAN_ALL_DIGITS)?;
        self.write_all(DECODE_MODE, NO_DECODE)?;
        self.write_all(SHUTDOWN, NORMAL_OPERATION)?;
        self.write_all(INTENSITY, DEFAULT_INTENSITY)
    }

    /// Set the brightness (0–15).
    ///
    /// # Errors
    /// * [`Max7219Error::InvalidIntensity`] if `level > 15`; nothing is sent
    /// * [`Max7219Error::Spi`] on communication failure
    pub fn set_intensity(&mut self, level: u8) -> Result<(), Max7219Error<SPI::Error>> {
        if level > MAX_INTENSITY {
            return Err(Max7219Error::InvalidIntensity);
        }
        self.write_all(INTENSITY, level)
    }

    /// Blank the display. Row registers keep their contents.
    pub fn power_off(&mut self) -> Result<(), Max7219Error<SPI::Error>> {
        self.write_all(SHUTDOWN, SHUTDOWN_MODE)
    }

    /// Leave shutdown and show the row registers again.
    pub fn power_on(&mut self) -> Result<(), Max7219Error<SPI::Error>> {
        self.write_all(SHUTDOWN, NORMAL_OPERATION)
    }

    /// Light every LED (`true`) or return to normal output (`false`).
    pub fn set_display_test(&mut self, enabled: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.write_all(DISPLAY_TEST, u8::from(enabled))
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Write one row.
    ///
    /// # Errors
    /// * [`Max7219Error::InvalidRow`] if `row >= 8`; nothing is sent
    /// * [`Max7219Error::Spi`] on communication failure
    pub fn write_row(&mut self, row: u8, value: u8) -> Result<(), Max7219Error<SPI::Error>> {
        if row as usize >= ROW_COUNT {
            return Err(Max7219Error::InvalidRow);
        }
        self.write_all(digit_register(row), value)
    }

    /// Write all eight rows, top to bottom.
    pub fn draw_rows(&mut self, rows: &Rows) -> Result<(), Max7219Error<SPI::Error>> {
        for (row, &value) in (0u8..).zip(rows.iter()) {
            self.write_all(digit_register(row), value)?;
        }
        Ok(())
    }

    /// Turn every LED off by zeroing the eight row registers.
    pub fn clear(&mut self) -> Result<(), Max7219Error<SPI::Error>> {
        self.draw_rows(&[0; ROW_COUNT])
    }
}
