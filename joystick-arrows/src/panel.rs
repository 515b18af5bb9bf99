//! Arrow panel: the MAX7219 matrix plus the joystick calibration.
//!
//! [`ArrowPanel`] is the single owner of the display bus. Both the polling
//! loop and button clears go through it, so one register write can never be
//! interleaved with another.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use max7219_driver::{Max7219, Max7219Error};

use crate::direction::{Calibration, Direction};
use crate::input::AxisReading;

/// Arrow display driven by joystick readings.
pub struct ArrowPanel<SPI, CS, D> {
    display: Max7219<SPI, CS, D>,
    calibration: Calibration,
}

impl<SPI, CS, D> ArrowPanel<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    /// Wrap an uninitialised display. No SPI traffic is generated.
    pub fn new(display: Max7219<SPI, CS, D>, calibration: Calibration) -> Self {
        Self {
            display,
            calibration,
        }
    }

    /// Bring the chips up, blank them, then draw `initial` if given.
    pub fn start(&mut self, initial: Option<Direction>) -> Result<(), Max7219Error<SPI::Error>> {
        self.display.init()?;
        self.display.clear()?;
        if let Some(direction) = initial {
            self.show(direction)?;
        }
        Ok(())
    }

    /// Draw the arrow for `direction`, rows 0–7 top to bottom.
    pub fn show(&mut self, direction: Direction) -> Result<(), Max7219Error<SPI::Error>> {
        self.display.draw_rows(direction.icon())
    }

    /// Turn every LED off.
    pub fn clear(&mut self) -> Result<(), Max7219Error<SPI::Error>> {
        self.display.clear()
    }

    /// Classify `reading` and draw the resulting arrow.
    ///
    /// Returns the direction drawn, or `None` (and no bus traffic) when the
    /// stick is centred or deflected equally on both axes.
    pub fn update(
        &mut self,
        reading: AxisReading,
    ) -> Result<Option<Direction>, Max7219Error<SPI::Error>> {
        let direction = reading.direction(&self.calibration);
        if let Some(direction) = direction {
            self.show(direction)?;
        }
        Ok(direction)
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn release(self) -> Max7219<SPI, CS, D> {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use max7219_driver::mock::{bus, BusOp, BusTrace, MockCs, MockDelay, MockSpi};
    use max7219_driver::registers::{DIGIT_BASE, INTENSITY, SHUTDOWN};

    type TestPanel = ArrowPanel<MockSpi, MockCs, MockDelay>;

    fn make_panel() -> (TestPanel, BusTrace) {
        let (spi, cs, delay, trace) = bus();
        let display = Max7219::new(spi, cs, delay, 1);
        (ArrowPanel::new(display, Calibration::default()), trace)
    }

    fn digit_frames(trace: &BusTrace) -> Vec<(u8, u8)> {
        trace
            .frames()
            .into_iter()
            .filter(|(register, _)| (DIGIT_BASE..DIGIT_BASE + 8).contains(register))
            .collect()
    }

    fn icon_frames(direction: Direction) -> Vec<(u8, u8)> {
        (DIGIT_BASE..)
            .zip(direction.icon().iter().copied())
            .collect()
    }

    // ── Startup ──────────────────────────────────────────────────────

    #[test]
    fn start_runs_init_then_clear_then_initial_icon() {
        let (mut panel, trace) = make_panel();
        panel.start(Some(Direction::Up)).unwrap();

        let frames = trace.frames();
        assert_eq!(frames.len(), 6 + 8 + 8);
        assert_eq!(frames[0], (SHUTDOWN, 0));
        assert_eq!(frames[5], (INTENSITY, 2));
        assert!(frames[6..14].iter().all(|&(_, value)| value == 0));
        assert_eq!(frames[14..].to_vec(), icon_frames(Direction::Up));
    }

    #[test]
    fn start_without_initial_icon_leaves_display_blank() {
        let (mut panel, trace) = make_panel();
        panel.start(None).unwrap();
        assert_eq!(trace.frames().len(), 6 + 8);
    }

    // ── Drawing ──────────────────────────────────────────────────────

    #[test]
    fn show_after_clear_only_writes_icon_rows() {
        for direction in Direction::ALL {
            let (mut panel, trace) = make_panel();
            panel.clear().unwrap();
            trace.clear();

            panel.show(direction).unwrap();

            assert_eq!(digit_frames(&trace), icon_frames(direction));
            assert_eq!(trace.frames().len(), 8);
        }
    }

    #[test]
    fn clear_writes_eight_zero_rows() {
        let (mut panel, trace) = make_panel();
        panel.clear().unwrap();
        let expected: Vec<(u8, u8)> = (1..=8).map(|register| (register, 0)).collect();
        assert_eq!(trace.frames(), expected);
    }

    #[test]
    fn each_row_is_its_own_select_window() {
        let (mut panel, trace) = make_panel();
        panel.show(Direction::Left).unwrap();

        let ops = trace.ops();
        assert_eq!(ops.iter().filter(|op| **op == BusOp::CsLow).count(), 8);
        assert_eq!(ops.iter().filter(|op| **op == BusOp::CsHigh).count(), 8);
    }

    // ── Updates ──────────────────────────────────────────────────────

    #[test]
    fn update_draws_classified_direction() {
        let (mut panel, trace) = make_panel();

        let drawn = panel.update(AxisReading::new(2500, 1900)).unwrap();

        assert_eq!(drawn, Some(Direction::Right));
        assert_eq!(digit_frames(&trace), icon_frames(Direction::Right));
    }

    #[test]
    fn update_inside_deadzone_is_silent() {
        let (mut panel, trace) = make_panel();

        assert_eq!(panel.update(AxisReading::new(2050, 1980)).unwrap(), None);
        assert_eq!(panel.update(AxisReading::new(2300, 2300)).unwrap(), None);
        assert!(trace.ops().is_empty());
    }

    #[test]
    fn update_surfaces_bus_errors() {
        let (mut spi, cs, delay, _trace) = bus();
        spi.fail_on_write(0);
        let mut panel = ArrowPanel::new(Max7219::new(spi, cs, delay, 1), Calibration::default());

        assert!(panel.update(AxisReading::new(1700, 2600)).is_err());
    }

    #[test]
    fn release_hands_back_display() {
        let (panel, _trace) = make_panel();
        assert_eq!(panel.calibration(), &Calibration::default());
        let display = panel.release();
        assert_eq!(display.chain_len(), 1);
    }
}
