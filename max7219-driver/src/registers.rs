//! MAX7219 register address and value constants.
//!
//! Every command is a 16-bit frame: the register address in the first byte
//! and the data in the second. Cascaded chips shift frames through to the
//! next device, so one frame per chip is clocked out while CS is held low.

// ---------------------------------------------------------------------------
// Register addresses
// ---------------------------------------------------------------------------

/// No-op register. Used to skip a chip in a cascade (not used in v1).
pub const NOOP: u8 = 0x00;

/// First digit / row register. Row `n` (0–7) lives at `DIGIT_BASE + n`.
pub const DIGIT_BASE: u8 = 0x01;

/// Decode-mode register (BCD decode per digit, or raw segments).
pub const DECODE_MODE: u8 = 0x09;

/// Intensity (brightness) register, 16 steps.
pub const INTENSITY: u8 = 0x0A;

/// Scan-limit register: number of digits refreshed, minus one.
pub const SCAN_LIMIT: u8 = 0x0B;

/// Shutdown register: 0 = shutdown, 1 = normal operation.
pub const SHUTDOWN: u8 = 0x0C;

/// Display-test register: 1 lights every segment.
pub const DISPLAY_TEST: u8 = 0x0F;

// ---------------------------------------------------------------------------
// Register values
// ---------------------------------------------------------------------------

/// `SHUTDOWN` value that blanks the display (register contents retained).
pub const SHUTDOWN_MODE: u8 = 0x00;

/// `SHUTDOWN` value for normal operation.
pub const NORMAL_OPERATION: u8 = 0x01;

/// `DECODE_MODE` value selecting raw segment / matrix row output.
pub const NO_DECODE: u8 = 0x00;

/// `SCAN_LIMIT` value that refreshes all eight digits.
pub const SCAN_ALL_DIGITS: u8 = 0x07;

/// Brightness applied during initialisation.
pub const DEFAULT_INTENSITY: u8 = 0x02;

/// Highest accepted `INTENSITY` value.
pub const MAX_INTENSITY: u8 = 0x0F;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Number of digit / row registers.
pub const ROW_COUNT: usize = 8;

/// Settling time around each chip-select transition, in nanoseconds.
pub const CS_SETTLE_NS: u32 = 50;

/// SPI clock rate the driver is designed for (10 MHz).
pub const SPI_FREQUENCY_HZ: u32 = 10_000_000;

/// Register address of row `row`. Callers must ensure `row < ROW_COUNT`.
pub const fn digit_register(row: u8) -> u8 {
    DIGIT_BASE + row
}
