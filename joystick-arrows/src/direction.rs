//! Joystick direction decision.
//!
//! Two raw ADC samples are centred on a calibration midpoint and the axis
//! with the larger deflection wins, provided it clears the deadzone:
//!
//! ```text
//!              UP (dy > 0)
//!                  │
//!   LEFT (dx < 0) ─┼─ RIGHT (dx > 0)
//!                  │
//!             DOWN (dy < 0)
//! ```
//!
//! Equal deflection on both axes is not a diagonal: it produces no
//! direction at all, and the display keeps whatever it last showed.

/// One of the four arrow directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Every direction, in icon-table order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Position of this direction in [`ICONS`](crate::icons::ICONS).
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Joystick calibration.
///
/// Built once at startup and passed by value; nothing mutates it at runtime.
/// [`Calibration::default()`] matches a 12-bit ADC (0–4095) whose resting
/// reading sits near 2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Raw reading of a centred stick.
    pub midpoint: i32,
    /// Deflection that must be exceeded (strictly) before a direction counts.
    pub deadzone: i32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            midpoint: 2000,
            deadzone: 200,
        }
    }
}

impl Calibration {
    pub const fn new(midpoint: i32, deadzone: i32) -> Self {
        Self { midpoint, deadzone }
    }

    /// Classify one pair of raw samples.
    ///
    /// Returns `None` when neither axis clears the deadzone or when both axes
    /// are deflected by exactly the same amount. Pure: the result depends
    /// only on the arguments and `self`.
    pub fn classify(&self, raw_x: i32, raw_y: i32) -> Option<Direction> {
        // Widened so that no i32 input can overflow the subtraction.
        let dx = i64::from(raw_x) - i64::from(self.midpoint);
        let dy = i64::from(raw_y) - i64::from(self.midpoint);
        let (adx, ady) = (dx.abs(), dy.abs());
        let deadzone = i64::from(self.deadzone);

        if adx > ady && adx > deadzone {
            Some(if dx > 0 { Direction::Right } else { Direction::Left })
        } else if ady > adx && ady > deadzone {
            Some(if dy > 0 { Direction::Up } else { Direction::Down })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CAL: Calibration = Calibration::new(2000, 200);

    // ── Worked examples ──────────────────────────────────────────────

    #[test]
    fn strong_positive_x_is_right() {
        assert_eq!(CAL.classify(2500, 1900), Some(Direction::Right));
    }

    #[test]
    fn strong_positive_y_is_up() {
        assert_eq!(CAL.classify(1700, 2600), Some(Direction::Up));
    }

    #[test]
    fn small_wobble_is_ignored() {
        assert_eq!(CAL.classify(2050, 1980), None);
    }

    #[test]
    fn negative_deflections() {
        assert_eq!(CAL.classify(1000, 2100), Some(Direction::Left));
        assert_eq!(CAL.classify(2100, 500), Some(Direction::Down));
        assert_eq!(CAL.classify(0, 2000), Some(Direction::Left));
        assert_eq!(CAL.classify(2000, 4095), Some(Direction::Up));
    }

    // ── Boundaries ───────────────────────────────────────────────────

    #[test]
    fn deadzone_edge_is_exclusive() {
        assert_eq!(CAL.classify(2200, 2000), None);
        assert_eq!(CAL.classify(2201, 2000), Some(Direction::Right));
        assert_eq!(CAL.classify(2000, 1800), None);
        assert_eq!(CAL.classify(2000, 1799), Some(Direction::Down));
    }

    #[test]
    fn exact_tie_gives_no_direction() {
        assert_eq!(CAL.classify(2500, 2500), None);
        assert_eq!(CAL.classify(1500, 2500), None);
        assert_eq!(CAL.classify(4000, 0), None);
    }

    #[test]
    fn centred_stick_gives_no_direction() {
        assert_eq!(CAL.classify(2000, 2000), None);
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let cal = Calibration::new(i32::MAX, 0);
        assert_eq!(cal.classify(i32::MIN, i32::MAX), Some(Direction::Left));
        let cal = Calibration::new(i32::MIN, 0);
        assert_eq!(cal.classify(i32::MIN, i32::MAX), Some(Direction::Up));
    }

    #[test]
    fn default_calibration() {
        assert_eq!(Calibration::default(), CAL);
    }

    #[test]
    fn direction_indices_follow_table_order() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
        }
    }

    // ── Properties ───────────────────────────────────────────────────

    proptest! {
        #[test]
        fn classification_is_deterministic(x in any::<i32>(), y in any::<i32>()) {
            prop_assert_eq!(CAL.classify(x, y), CAL.classify(x, y));
        }

        #[test]
        fn equal_magnitudes_never_pick_a_direction(
            magnitude in 0i32..=2000,
            x_negative in any::<bool>(),
            y_negative in any::<bool>(),
        ) {
            let x = if x_negative { 2000 - magnitude } else { 2000 + magnitude };
            let y = if y_negative { 2000 - magnitude } else { 2000 + magnitude };
            prop_assert_eq!(CAL.classify(x, y), None);
        }

        #[test]
        fn inside_deadzone_never_picks_a_direction(dx in -200i32..=200, dy in -200i32..=200) {
            prop_assert_eq!(CAL.classify(2000 + dx, 2000 + dy), None);
        }

        #[test]
        fn chosen_axis_dominates(x in 0i32..4096, y in 0i32..4096) {
            let (adx, ady) = ((x - 2000).abs(), (y - 2000).abs());
            match CAL.classify(x, y) {
                Some(Direction::Left) | Some(Direction::Right) => {
                    prop_assert!(adx > ady && adx > 200);
                }
                Some(Direction::Up) | Some(Direction::Down) => {
                    prop_assert!(ady > adx && ady > 200);
                }
                None => prop_assert!(adx == ady || adx.max(ady) <= 200),
            }
        }
    }
}
