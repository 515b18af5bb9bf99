//! Arrow update and button edge tasks.
//!
//! Contains the [`arrow_update_task`] polling loop (the only owner of the
//! display bus) and [`button_edge_task`], which turns button edges into
//! [`ButtonEdge`] notifications on a [`ButtonSignal`]. The button never
//! touches the bus itself: the update loop performs the clear.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;
use embedded_hal_async::digital::Wait;

use max7219_driver::Max7219;

use crate::config::PanelConfig;
use crate::input::{AxisSampler, ButtonEdge};
use crate::panel::ArrowPanel;

/// Notification from the button task to the update loop.
///
/// Edges arriving faster than the loop consumes them collapse into one;
/// a single clear covers them all.
pub type ButtonSignal = Signal<CriticalSectionRawMutex, ButtonEdge>;

// ── Arrow update task ────────────────────────────────────────────────────

/// Joystick polling loop.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn arrow_task(
///     display: Max7219<MySpi, Output<'static>, Delay>,
///     sampler: JoystickAdc,
///     button: &'static ButtonSignal,
///     config: PanelConfig,
/// ) {
///     arrow_update_task(display, sampler, button, config).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the chips, blank them and draw `config.initial_icon`.
/// 2. Loop, waking on whichever comes first:
///    - **Tick** (every `config.poll_period_ms`) — sample x then y,
///      classify, and draw the arrow if there is one.
///    - **Button edge** — clear the display.
///
/// # Errors
///
/// * Initialisation failure: logs the error and **returns** (task exits).
/// * Sample or bus failure: logs the error and continues with the next tick.
pub async fn arrow_update_task<SPI, CS, D, S>(
    display: Max7219<SPI, CS, D>,
    mut sampler: S,
    button: &'static ButtonSignal,
    config: PanelConfig,
) where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
    S: AxisSampler,
{
    let mut panel = ArrowPanel::new(display, config.calibration);

    // ── Initialisation ───────────────────────────────────────────────
    if let Err(_e) = panel.start(config.initial_icon) {
        #[cfg(feature = "defmt")]
        defmt::error!("Arrow panel init failed: {}", defmt::Debug2Format(&_e));
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!(
        "Arrow panel initialised, polling every {} ms ({} Hz)",
        config.poll_period_ms,
        config.poll_frequency_hz()
    );

    let mut ticker = Ticker::every(Duration::from_millis(config.poll_period_ms));

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        match select(ticker.next(), button.wait()).await {
            Either::First(()) => {
                let reading = match sampler.sample().await {
                    Ok(reading) => reading,
                    Err(_e) => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("Joystick sample failed: {}", defmt::Debug2Format(&_e));
                        continue;
                    }
                };

                match panel.update(reading) {
                    Ok(Some(_direction)) => {
                        #[cfg(feature = "defmt")]
                        defmt::debug!("{} -> {}", reading, _direction);
                    }
                    Ok(None) => {}
                    Err(_e) => {
                        #[cfg(feature = "defmt")]
                        defmt::error!("Arrow draw failed: {}", defmt::Debug2Format(&_e));
                    }
                }
            }
            Either::Second(_edge) => {
                if let Err(_e) = panel.clear() {
                    #[cfg(feature = "defmt")]
                    defmt::error!("Clear failed: {}", defmt::Debug2Format(&_e));
                    continue;
                }

                #[cfg(feature = "defmt")]
                defmt::info!("Button {}: display cleared", _edge);
            }
        }
    }
}

// ── Button edge task ─────────────────────────────────────────────────────

/// Forward every rising and falling edge on `button` to `signal`.
///
/// No debouncing: each edge the pin reports becomes a notification. Like
/// [`arrow_update_task`], wrap this in a concrete `#[task]`.
pub async fn button_edge_task<P>(mut button: P, signal: &'static ButtonSignal)
where
    P: Wait + InputPin,
{
    #[cfg(feature = "defmt")]
    defmt::info!("Button edge task started");

    loop {
        if let Err(_e) = button.wait_for_any_edge().await {
            #[cfg(feature = "defmt")]
            defmt::warn!("Button wait failed: {}", defmt::Debug2Format(&_e));
            continue;
        }

        // Level right after the edge tells press from release. Either way
        // the edge still clears the display.
        let edge = match button.is_low() {
            Ok(is_low) => ButtonEdge::from_level(is_low),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Button read failed: {}", defmt::Debug2Format(&_e));
                ButtonEdge::Pressed
            }
        };

        signal.signal(edge);
    }
}
