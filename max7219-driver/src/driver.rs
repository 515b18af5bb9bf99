//! Low-level MAX7219 cascade driver.
//!
//! Implements the chip-select framed register write shared by every chip in
//! a daisy chain: CS goes low once, one 2-byte frame is clocked out per chip,
//! the bus is flushed, and CS goes high again so every chip latches the frame
//! sitting in its shift register.
//!
//! This module is crate-private — consumers interact with [`Max7219`]
//! in `display.rs` instead.
//!
//! [`Max7219`]: crate::Max7219

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::error::Max7219Error;
use crate::registers::CS_SETTLE_NS;

/// Low-level cascade driver.
///
/// Owns the SPI bus, the shared active-low chip-select line and a delay
/// source for the CS settling time.
pub(crate) struct CascadeDriver<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
    chain_len: usize,
}

impl<SPI, CS, D> CascadeDriver<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a new cascade driver.
    ///
    /// The chip-select line should already be driven high (inactive).
    /// A `chain_len` of 0 is treated as a single chip.
    pub fn new(spi: SPI, cs: CS, delay: D, chain_len: usize) -> Self {
        Self {
            spi,
            cs,
            delay,
            chain_len: chain_len.max(1),
        }
    }

    pub fn chain_len(&self) -> usize {
        self.chain_len
    }

    /// Write the same `(register, value)` frame to every chip in the chain.
    ///
    /// CS is asserted exactly once for the whole chain, never per chip. The
    /// line is released on every exit path, including SPI errors.
    pub fn write_all(&mut self, register: u8, value: u8) -> Result<(), Max7219Error<SPI::Error>> {
        let frame = [register, value];

        let session = ChipSelect::select::<SPI::Error>(&mut self.cs, &mut self.delay)?;

        for _ in 0..self.chain_len {
            self.spi.write(&frame)?;
        }

        // CS must not rise before the last bit has left the shifter.
        self.spi.flush()?;

        session.release()
    }

    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }
}

// ---------------------------------------------------------------------------
// Chip-select session
// ---------------------------------------------------------------------------

/// Scoped chip-select assertion.
///
/// Created with CS low; dropping it (or calling [`release`](Self::release))
/// drives CS high again.
struct ChipSelect<'a, CS: OutputPin, D: DelayNs> {
    cs: &'a mut CS,
    delay: &'a mut D,
    active: bool,
}

impl<'a, CS: OutputPin, D: DelayNs> ChipSelect<'a, CS, D> {
    fn select<E>(cs: &'a mut CS, delay: &'a mut D) -> Result<Self, Max7219Error<E>> {
        delay.delay_ns(CS_SETTLE_NS);
        cs.set_low().map_err(|_| Max7219Error::ChipSelect)?;
        delay.delay_ns(CS_SETTLE_NS);

        Ok(Self {
            cs,
            delay,
            active: true,
        })
    }

    /// Deselect and report a pin failure, unlike the silent drop path.
    fn release<E>(mut self) -> Result<(), Max7219Error<E>> {
        self.active = false;
        self.deselect().map_err(|_| Max7219Error::ChipSelect)
    }

    fn deselect(&mut self) -> Result<(), CS::Error> {
        self.delay.delay_ns(CS_SETTLE_NS);
        self.cs.set_high()?;
        self.delay.delay_ns(CS_SETTLE_NS);
        Ok(())
    }
}

impl<CS: OutputPin, D: DelayNs> Drop for ChipSelect<'_, CS, D> {
    fn drop(&mut self) {
        if self.active {
            // Error path: the bus error is what gets reported.
            let _ = self.deselect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{bus, BusOp, MockSpiError};

    #[test]
    fn single_chip_write_is_one_framed_frame() {
        let (spi, cs, delay, trace) = bus();
        let mut driver = CascadeDriver::new(spi, cs, delay, 1);

        driver.write_all(0x0C, 0x01).unwrap();

        assert_eq!(
            trace.ops(),
            vec![BusOp::CsLow, BusOp::Frame(0x0C, 0x01), BusOp::Flush, BusOp::CsHigh]
        );
    }

    #[test]
    fn cascade_toggles_select_once_around_all_frames() {
        let (spi, cs, delay, trace) = bus();
        let mut driver = CascadeDriver::new(spi, cs, delay, 4);

        driver.write_all(0x03, 0xAA).unwrap();

        let ops = trace.ops();
        assert_eq!(ops.first(), Some(&BusOp::CsLow));
        assert_eq!(ops.last(), Some(&BusOp::CsHigh));
        assert_eq!(ops.iter().filter(|op| **op == BusOp::CsLow).count(), 1);
        assert_eq!(ops.iter().filter(|op| **op == BusOp::CsHigh).count(), 1);
        assert_eq!(
            ops.iter().filter(|op| **op == BusOp::Frame(0x03, 0xAA)).count(),
            4
        );
    }

    #[test]
    fn zero_chain_length_behaves_as_one_chip() {
        let (spi, cs, delay, trace) = bus();
        let mut driver = CascadeDriver::new(spi, cs, delay, 0);
        assert_eq!(driver.chain_len(), 1);

        driver.write_all(0x01, 0x08).unwrap();
        assert_eq!(trace.frames(), vec![(0x01, 0x08)]);
    }

    #[test]
    fn select_released_when_spi_write_fails() {
        let (mut spi, cs, delay, trace) = bus();
        spi.fail_on_write(1);
        let mut driver = CascadeDriver::new(spi, cs, delay, 3);

        let result = driver.write_all(0x0A, 0x02);

        assert_eq!(result, Err(Max7219Error::Spi(MockSpiError)));
        let ops = trace.ops();
        assert_eq!(
            ops,
            vec![BusOp::CsLow, BusOp::Frame(0x0A, 0x02), BusOp::CsHigh]
        );
    }

    #[test]
    fn settling_delay_brackets_each_transition() {
        let (spi, cs, delay, trace) = bus();
        let mut driver = CascadeDriver::new(spi, cs, delay, 1);

        driver.write_all(0x0F, 0x00).unwrap();

        assert_eq!(trace.delay_ns(), 4 * CS_SETTLE_NS as u64);
    }
}
