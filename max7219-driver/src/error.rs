//! Error types for the MAX7219 driver.

use core::fmt;

/// Errors that can occur when writing to the MAX7219 cascade.
#[derive(Debug, PartialEq, Eq)]
pub enum Max7219Error<E> {
    /// Underlying SPI bus error.
    Spi(E),

    /// The chip-select pin could not be driven.
    ChipSelect,

    /// Row index out of valid range (must be 0-7).
    InvalidRow,

    /// Intensity above the chip's 16 steps (must be 0-15).
    InvalidIntensity,
}

// Allow ergonomic `?` propagation from raw SPI errors.
impl<E> From<E> for Max7219Error<E> {
    fn from(error: E) -> Self {
        Max7219Error::Spi(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Max7219Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Max7219Error::Spi(e) => write!(f, "SPI error: {:?}", e),
            Max7219Error::ChipSelect => write!(f, "Chip-select pin error"),
            Max7219Error::InvalidRow => write!(f, "Invalid row index (must be 0-7)"),
            Max7219Error::InvalidIntensity => write!(f, "Invalid intensity (must be 0-15)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Max7219Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Max7219Error::Spi(e) => defmt::write!(f, "SPI error: {}", e),
            Max7219Error::ChipSelect => defmt::write!(f, "Chip-select pin error"),
            Max7219Error::InvalidRow => defmt::write!(f, "Invalid row index"),
            Max7219Error::InvalidIntensity => defmt::write!(f, "Invalid intensity"),
        }
    }
}
