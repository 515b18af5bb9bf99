//! Blocking SPI driver for cascaded MAX7219 LED drivers.
//!
//! This crate drives one or more daisy-chained MAX7219 chips (8x8 LED
//! matrix or 8-digit 7-segment modules) that share a single SPI bus and a
//! single active-low chip-select line.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`driver`** (crate-private) — the chip-select framed write: CS low,
//!   one 2-byte frame per chip, flush, CS high. The select line is released
//!   on every exit path.
//! - **[`Max7219`]** (public) — power-on sequence, row drawing, brightness
//!   and shutdown control with argument validation.
//!
//! # Quick start
//!
//! ```ignore
//! use max7219_driver::Max7219;
//!
//! // Construct with any `embedded-hal` SPI bus, output pin and delay
//! let mut display = Max7219::new(spi, cs, delay, 1);
//!
//! display.init()?;
//! display.clear()?;
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error types
//!   for embedded logging.
//! - **`mock`** — Expose the recording SPI / pin / delay doubles in
//!   [`mock`] for host tests of downstream crates.

#![cfg_attr(not(test), no_std)]

pub use display::{Max7219, Rows};
pub use error::Max7219Error;
pub use registers::{DEFAULT_INTENSITY, ROW_COUNT, SPI_FREQUENCY_HZ};

mod display;
mod driver;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod registers;
