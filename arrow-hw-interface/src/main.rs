//! arrow-hw-interface
//!
//! Joystick → arrow icon firmware for the Raspberry Pi Pico 2. Wires the
//! two library crates into a live loop:
//!
//! 1. Every 100 ms the arrow task samples the joystick's x axis (ADC0) and
//!    y axis (ADC1).
//! 2. If one axis is clearly dominant and outside the deadzone, the matching
//!    arrow is drawn on the MAX7219 matrix.
//! 3. Any edge on the push button (press or release) wakes the button task,
//!    which signals the arrow task to blank the matrix.
//!
//! Only the arrow task touches SPI, so a clear can never land in the middle
//! of an icon write.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use joystick_arrows::{
    arrow_update_task, button_edge_task, AxisReading, AxisSampler, ButtonSignal, PanelConfig,
};
use max7219_driver::{Max7219, SPI_FREQUENCY_HZ};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Wire the ADC FIFO interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Number of MAX7219 modules on the chain.
const CHAIN_LEN: usize = 1;

/// Button edges, posted by the button task and consumed by the arrow task.
static BUTTON_EDGES: ButtonSignal = ButtonSignal::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete SPI type for the MAX7219 (transmit-only, blocking).
type DisplaySpi = Spi<'static, SPI0, spi::Blocking>;

/// Concrete display type: SPI0, GPIO chip select, embassy-time delay.
type ArrowDisplay = Max7219<DisplaySpi, Output<'static>, Delay>;

// ---------------------------------------------------------------------------
// Joystick sampler
// ---------------------------------------------------------------------------

/// Both joystick axes on the RP2350 ADC.
struct JoystickAdc {
    adc: Adc<'static, adc::Async>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl AxisSampler for JoystickAdc {
    type Error = adc::Error;

    async fn sample(&mut self) -> Result<AxisReading, adc::Error> {
        let x = self.adc.read(&mut self.x).await?;
        let y = self.adc.read(&mut self.y).await?;
        Ok(AxisReading::new(x, y))
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `arrow_update_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn arrow_task(display: ArrowDisplay, sampler: JoystickAdc, config: PanelConfig) {
    arrow_update_task(display, sampler, &BUTTON_EDGES, config).await;
}

/// Button edge forwarding. Pull-up input, so pressed reads low.
#[embassy_executor::task]
async fn button_task(button: Input<'static>) {
    button_edge_task(button, &BUTTON_EDGES).await;
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("arrow-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // SPI0_SCK → GP18  (p.PIN_18)  → CLK on the MAX7219 board
    // SPI0_TX  → GP19  (p.PIN_19)  → DIN
    // SPI0_CS  → GP17  (p.PIN_17)  → CS, active-low
    // JOY_X    → GP26  (ADC0)
    // JOY_Y    → GP27  (ADC1)
    // JOY_SW   → GP28  (p.PIN_28)  active-low, pull-up enabled
    //
    // The MAX7219 runs from 5 V; the 3.3 V SPI levels are within its input
    // thresholds.
    // ———————————————————————————————————————————————————————————————————————

    // SPI0 at 10 MHz, transmit only. The MAX7219 has no data out.
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    // Chip select is active-low, so it starts driven high.
    let cs = Output::new(p.PIN_17, Level::High);

    let display = Max7219::new(spi, cs, Delay, CHAIN_LEN);

    let button = Input::new(p.PIN_28, Pull::Up);

    let sampler = JoystickAdc {
        adc: Adc::new(p.ADC, Irqs, adc::Config::default()),
        x: Channel::new_pin(p.PIN_26, Pull::None),
        y: Channel::new_pin(p.PIN_27, Pull::None),
    };

    // —— Spawn tasks ————————————————————————————————————————————————————————

    let config = PanelConfig::default(); // 100 ms polling, UP at boot

    spawner.spawn(arrow_task(display, sampler, config)).unwrap();
    spawner.spawn(button_task(button)).unwrap();

    info!("All tasks spawned");
}
