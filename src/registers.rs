//! Register address constants for the visual rotary encoder module.
//!
//! The module exposes a flat 8-bit register map. Multi-byte values are
//! stored big-endian: the most significant byte lives at the lower
//! address, so a 2-byte field is always read starting at its `_MSB`
//! register.

// ---------------------------------------------------------------------------
// Identity registers (read-only)
// ---------------------------------------------------------------------------

/// Product ID, high byte. Reading 2 bytes here yields the full PID.
pub const PID_MSB: u8 = 0x00;

/// Vendor ID, high byte.
#[allow(dead_code)]
pub const VID_MSB: u8 = 0x02;

/// Firmware version, high byte.
#[allow(dead_code)]
pub const VERSION_MSB: u8 = 0x04;

/// Device bus address (1 byte). Offset 0x06 is reserved.
#[allow(dead_code)]
pub const ADDRESS: u8 = 0x07;

/// Number of bytes covering PID, VID, version and address in one read.
pub const IDENTITY_LEN: usize = 8;

// ---------------------------------------------------------------------------
// Function registers (read-write)
// ---------------------------------------------------------------------------

/// Rotation count, high byte (16-bit, valid range 0–1023).
pub const COUNT_MSB: u8 = 0x08;

/// Button status. Bit 0 is set when the knob was pressed since the last clear.
pub const KEY_STATUS: u8 = 0x0A;

/// Gain coefficient (8-bit, valid range 1–51).
pub const GAIN: u8 = 0x0B;

/// "Pressed since last clear" bit in [`KEY_STATUS`].
pub const KEY_PRESSED: u8 = 0x01;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Product ID reported by the module (SEN0502).
pub const DEVICE_PID: u16 = 0x01F6;

/// Default I2C address (both address switches off).
pub const DEFAULT_ADDRESS: u8 = 0x54;

/// Largest rotation count the module accepts.
pub const COUNT_MAX: u16 = 1023;

/// Smallest accepted gain coefficient (about 2.5 turns per LED step).
pub const GAIN_MIN: u8 = 1;

/// Largest accepted gain coefficient (one detent per LED step).
pub const GAIN_MAX: u8 = 51;

/// Time the module needs after a successful identity check before it
/// answers function-register accesses reliably.
pub const SETTLE_DELAY_MS: u32 = 200;

/// Compute the bus address selected by the CH1/CH2 address switches.
///
/// | CH1 | CH2 | Address |
/// |-----|-----|---------|
/// | 0   | 0   | 0x54    |
/// | 0   | 1   | 0x55    |
/// | 1   | 0   | 0x56    |
/// | 1   | 1   | 0x57    |
pub const fn address_from_switches(ch1: bool, ch2: bool) -> u8 {
    DEFAULT_ADDRESS | ((ch1 as u8) << 1) | (ch2 as u8)
}
