//! Arrow panel configuration.

use crate::direction::{Calibration, Direction};

/// Configuration for the arrow panel and its update task.
///
/// Everything is fixed at construction time; the task never changes it.
/// [`PanelConfig::default()`] reproduces the stock board behaviour
/// (midpoint 2000, deadzone 200, 100 ms polling, UP shown at boot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Joystick centre and deadzone.
    pub calibration: Calibration,
    /// Delay between joystick samples in milliseconds. Default: 100.
    pub poll_period_ms: u64,
    /// Arrow drawn right after initialisation, if any. Default: `Some(Up)`.
    pub initial_icon: Option<Direction>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            calibration: Calibration::default(),
            poll_period_ms: 100,
            initial_icon: Some(Direction::Up),
        }
    }
}

impl PanelConfig {
    /// Polling frequency in Hz, rounded down. Formula: `1000 / poll_period_ms`.
    pub fn poll_frequency_hz(&self) -> u64 {
        1000 / self.poll_period_ms.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = PanelConfig::default();
        assert_eq!(config.calibration.midpoint, 2000);
        assert_eq!(config.calibration.deadzone, 200);
        assert_eq!(config.poll_period_ms, 100);
        assert_eq!(config.initial_icon, Some(Direction::Up));
    }

    #[test]
    fn poll_frequency() {
        let config = PanelConfig::default();
        assert_eq!(config.poll_frequency_hz(), 10);

        let zero = PanelConfig {
            poll_period_ms: 0,
            ..PanelConfig::default()
        };
        assert_eq!(zero.poll_frequency_hz(), 1000);
    }
}
