//! Joystick-driven arrow display for a MAX7219 8x8 LED matrix.
//!
//! This crate turns pairs of raw joystick samples into one of four arrow
//! directions and draws the matching icon through [`max7219_driver`].
//! It provides [`ArrowPanel`], the single owner of the display bus, and
//! (with the `task` feature) [`arrow_update_task`] and [`button_edge_task`],
//! the Embassy loops that poll the stick and clear the matrix on button
//! edges.
//!
//! # Quick Start
//!
//! ```ignore
//! use joystick_arrows::{arrow_update_task, button_edge_task, ButtonSignal, PanelConfig};
//! use max7219_driver::Max7219;
//!
//! static BUTTON: ButtonSignal = ButtonSignal::new();
//!
//! // In your Embassy main:
//! let display = Max7219::new(spi, cs, Delay, 1);
//! spawner.spawn(arrow_task(display, sampler, PanelConfig::default())).unwrap();
//! spawner.spawn(button_task(button_pin)).unwrap();
//!
//! // Thin task wrappers (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn arrow_task(
//!     display: Max7219<MySpi, Output<'static>, Delay>,
//!     sampler: MyJoystickAdc,
//!     config: PanelConfig,
//! ) {
//!     arrow_update_task(display, sampler, &BUTTON, config).await;
//! }
//!
//! #[embassy_executor::task]
//! async fn button_task(button: Input<'static>) {
//!     button_edge_task(button, &BUTTON).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].
//! - **`task`** *(default)* — the Embassy update loops (pulls in
//!   `embassy-time`, `embassy-sync`, `embassy-futures` and
//!   `embedded-hal-async`).

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod direction;
pub mod icons;
pub mod input;
pub mod panel;
#[cfg(feature = "task")]
pub mod task;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::PanelConfig;
pub use direction::{Calibration, Direction};
pub use icons::ICONS;
pub use input::{AxisReading, AxisSampler, ButtonEdge};
pub use panel::ArrowPanel;
#[cfg(feature = "task")]
pub use task::{arrow_update_task, button_edge_task, ButtonSignal};
