//! Joystick and button input types.
//!
//! The ADC itself is board-specific, so the update task reads the stick
//! through the [`AxisSampler`] trait and the firmware supplies the
//! implementation.

use crate::direction::{Calibration, Direction};

/// One simultaneous pair of raw joystick samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisReading {
    /// Horizontal axis, sampled first.
    pub x: u16,
    /// Vertical axis.
    pub y: u16,
}

impl AxisReading {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Classify this reading with `calibration`.
    pub fn direction(&self, calibration: &Calibration) -> Option<Direction> {
        calibration.classify(i32::from(self.x), i32::from(self.y))
    }
}

/// Source of joystick readings.
///
/// Implementations sample the x axis, then the y axis, and block (await)
/// until both conversions are done.
#[allow(async_fn_in_trait)]
pub trait AxisSampler {
    type Error: core::fmt::Debug;

    async fn sample(&mut self) -> Result<AxisReading, Self::Error>;
}

/// Which way the button line moved.
///
/// The button is wired active-low with a pull-up, so a falling edge is a
/// press. Both edges clear the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    Pressed,
    Released,
}

impl ButtonEdge {
    /// Edge that left the line at level `is_low`.
    pub const fn from_level(is_low: bool) -> Self {
        if is_low {
            ButtonEdge::Pressed
        } else {
            ButtonEdge::Released
        }
    }
}
