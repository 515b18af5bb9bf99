//! Static arrow example
//!
//! Demonstrates basic usage of the max7219-driver crate on the Raspberry Pi
//! Pico 2. Initialises the MAX7219, then cycles through the four arrow
//! icons once a second, logging each one via defmt. No joystick needed.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | SPI0 SCK  | GP18       | CLK on the MAX7219 board     |
//! | SPI0 TX   | GP19       | DIN                          |
//! | CS        | GP17       | Active-low, starts high      |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use joystick_arrows::Direction;
use max7219_driver::{Max7219, SPI_FREQUENCY_HZ};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- SPI bus (GP18 = SCK, GP19 = TX) ---
    let mut config = spi::Config::default();
    config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, config);

    // --- Chip select (GP17, active-low) ---
    let cs = Output::new(p.PIN_17, Level::High);

    // --- Single MAX7219 module ---
    let mut display = Max7219::new(spi, cs, Delay, 1);

    display.init().expect("MAX7219 init failed");

    if let Err(e) = display.clear() {
        error!("Clear failed: {}", Debug2Format(&e));
    }

    info!("Static arrow example started");

    // Main loop: draw, log, wait, next arrow.
    for direction in Direction::ALL.iter().cycle() {
        match display.draw_rows(direction.icon()) {
            Ok(()) => info!("Showing {}", direction),
            Err(e) => error!("Draw failed: {}", Debug2Format(&e)),
        }

        Timer::after(Duration::from_millis(1000)).await;
    }
}
