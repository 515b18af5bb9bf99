//! 8x8 arrow bitmaps.
//!
//! Row 0 is the top of the matrix and is written to the first digit
//! register. Bit 7 is the leftmost column.

use max7219_driver::Rows;

use crate::direction::Direction;

/// Arrow bitmaps indexed by [`Direction::index`].
///
/// ```text
/// Up        Down      Left      Right
/// ....#...  ...###..  ...#....  ....#...
/// ...###..  ...###..  ..##....  ....##..
/// ..#####.  ...###..  .#######  #######.
/// .#######  ...###..  ########  ########
/// ...###..  .#######  .#######  #######.
/// ...###..  ..#####.  ..##....  ....##..
/// ...###..  ...###..  ...#....  ....#...
/// ...###..  ....#...  ........  ........
/// ```
pub static ICONS: [Rows; 4] = [
    [0x08, 0x1c, 0x3e, 0x7f, 0x1c, 0x1c, 0x1c, 0x1c], // Up
    [0x1c, 0x1c, 0x1c, 0x1c, 0x7f, 0x3e, 0x1c, 0x08], // Down
    [0x10, 0x30, 0x7f, 0xff, 0x7f, 0x30, 0x10, 0x00], // Left
    [0x08, 0x0c, 0xfe, 0xff, 0xfe, 0x0c, 0x08, 0x00], // Right
];

impl Direction {
    /// The bitmap drawn for this direction.
    pub fn icon(self) -> &'static Rows {
        &ICONS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_bit_exact() {
        assert_eq!(
            Direction::Up.icon(),
            &[0x08, 0x1c, 0x3e, 0x7f, 0x1c, 0x1c, 0x1c, 0x1c]
        );
        assert_eq!(
            Direction::Left.icon(),
            &[0x10, 0x30, 0x7f, 0xff, 0x7f, 0x30, 0x10, 0x00]
        );
        assert_eq!(
            Direction::Right.icon(),
            &[0x08, 0x0c, 0xfe, 0xff, 0xfe, 0x0c, 0x08, 0x00]
        );
    }

    #[test]
    fn down_is_up_upside_down() {
        let mut flipped = *Direction::Up.icon();
        flipped.reverse();
        assert_eq!(Direction::Down.icon(), &flipped);
    }

    #[test]
    fn every_direction_has_a_distinct_icon() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                if a != b {
                    assert_ne!(a.icon(), b.icon(), "{:?} and {:?} share an icon", a, b);
                }
            }
        }
    }
}
