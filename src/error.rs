//! Error types for the rotary encoder driver.

use core::fmt;

/// Errors reported by [`RotaryEncoder`](crate::RotaryEncoder).
///
/// `E` is the error type of the underlying [`RegisterInterface`](crate::RegisterInterface).
/// The silent API only ever returns [`Bus`](EncoderError::Bus) and
/// [`VersionMismatch`](EncoderError::VersionMismatch) (from `initialize`);
/// the other variants come from the `try_` methods.
#[derive(Debug, PartialEq, Eq)]
pub enum EncoderError<E> {
    /// The transport returned no data (or less than a full register).
    Bus,

    /// The product ID register did not hold the expected value.
    VersionMismatch {
        /// PID actually read from the device.
        found: u16,
    },

    /// Value outside the register's valid range; nothing was written.
    OutOfRange,

    /// Underlying transport error.
    Transport(E),
}

// Allow ergonomic `?` propagation from raw transport errors.
impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Transport(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Bus => write!(f, "Data bus error: no data returned"),
            EncoderError::VersionMismatch { found } => {
                write!(f, "Device ID mismatch: found {:#06x}", found)
            }
            EncoderError::OutOfRange => write!(f, "Value out of range"),
            EncoderError::Transport(e) => write!(f, "Transport error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Bus => defmt::write!(f, "Data bus error"),
            EncoderError::VersionMismatch { found } => {
                defmt::write!(f, "Device ID mismatch: found {=u16:#x}", found)
            }
            EncoderError::OutOfRange => defmt::write!(f, "Value out of range"),
            EncoderError::Transport(e) => defmt::write!(f, "Transport error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err: EncoderError<()> = EncoderError::VersionMismatch { found: 0x0001 };
        assert_eq!(err.to_string(), "Device ID mismatch: found 0x0001");

        let err: EncoderError<u8> = EncoderError::Transport(7);
        assert_eq!(err.to_string(), "Transport error: 7");
    }

    #[test]
    fn test_from_transport_error() {
        let err: EncoderError<u8> = 3u8.into();
        assert_eq!(err, EncoderError::Transport(3));
    }
}
