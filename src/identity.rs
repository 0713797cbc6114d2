//! Decoding of the identity block (registers 0x00–0x07).

use core::fmt;

use crate::registers::IDENTITY_LEN;

/// Basic information reported by the module.
///
/// Decoded from a single 8-byte read starting at the PID register. The
/// 2-byte fields are big-endian; byte 6 is reserved and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    /// Product ID, `0x01F6` for this module.
    pub device_kind: u16,
    /// Vendor ID, `0x3343` for stock parts.
    pub vendor_id: u16,
    /// Raw firmware version word; see [`FirmwareVersion`].
    pub firmware_version: u16,
    /// 7-bit bus address the module answers on.
    pub bus_address: u8,
}

impl DeviceIdentity {
    /// Decode the raw identity block.
    ///
    /// # Example
    /// ```
    /// use rotary_encoder_driver::DeviceIdentity;
    ///
    /// let id = DeviceIdentity::from_bytes(&[0x01, 0xF6, 0x33, 0x43, 0x01, 0x00, 0xFF, 0x54]);
    /// assert_eq!(id.device_kind, 0x01F6);
    /// assert_eq!(id.bus_address, 0x54);
    /// ```
    pub fn from_bytes(raw: &[u8; IDENTITY_LEN]) -> Self {
        Self {
            device_kind: u16::from_be_bytes([raw[0], raw[1]]),
            vendor_id: u16::from_be_bytes([raw[2], raw[3]]),
            firmware_version: u16::from_be_bytes([raw[4], raw[5]]),
            bus_address: raw[7],
        }
    }

    /// Product family encoded in the top two PID bits.
    pub fn product_kind(&self) -> ProductKind {
        match self.device_kind >> 14 {
            0b00 => ProductKind::Sensor,
            0b01 => ProductKind::Robot,
            0b10 => ProductKind::Tool,
            _ => ProductKind::Unknown,
        }
    }

    /// Catalogue number encoded in the low 14 PID bits (502 for SEN0502).
    pub fn product_number(&self) -> u16 {
        self.device_kind & 0x3FFF
    }

    /// Firmware version split into its nibbles.
    pub fn firmware(&self) -> FirmwareVersion {
        FirmwareVersion::from(self.firmware_version)
    }
}

/// Product family prefix from the PID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProductKind {
    /// `SEN` — sensors and input modules.
    Sensor,
    /// `DFR` — robotics boards.
    Robot,
    /// `TEL` — tools.
    Tool,
    /// Reserved prefix.
    Unknown,
}

impl ProductKind {
    /// Catalogue prefix, e.g. `"SEN"`.
    pub fn prefix(&self) -> &'static str {
        match self {
            ProductKind::Sensor => "SEN",
            ProductKind::Robot => "DFR",
            ProductKind::Tool => "TEL",
            ProductKind::Unknown => "???",
        }
    }
}

/// Firmware version, one nibble per component: `0x0100` is `V0.1.0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub build: u8,
}

impl From<u16> for FirmwareVersion {
    fn from(raw: u16) -> Self {
        Self {
            major: ((raw >> 12) & 0x0F) as u8,
            minor: ((raw >> 8) & 0x0F) as u8,
            patch: ((raw >> 4) & 0x0F) as u8,
            build: (raw & 0x0F) as u8,
        }
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "V{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FirmwareVersion {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "V{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: [u8; IDENTITY_LEN] = [0x01, 0xF6, 0x33, 0x43, 0x01, 0x00, 0xFF, 0x54];

    #[test]
    fn test_decode_identity_block() {
        let id = DeviceIdentity::from_bytes(&RAW);

        assert_eq!(id.device_kind, 0x01F6);
        assert_eq!(id.vendor_id, 0x3343);
        assert_eq!(id.firmware_version, 0x0100);
        // Byte 6 (0xFF) is reserved and must not leak into the address.
        assert_eq!(id.bus_address, 0x54);
    }

    #[test]
    fn test_product_kind() {
        let id = DeviceIdentity::from_bytes(&RAW);
        assert_eq!(id.product_kind(), ProductKind::Sensor);
        assert_eq!(id.product_kind().prefix(), "SEN");
        assert_eq!(id.product_number(), 502);

        let robot = DeviceIdentity { device_kind: 0x4000 | 123, ..Default::default() };
        assert_eq!(robot.product_kind(), ProductKind::Robot);
        assert_eq!(robot.product_number(), 123);

        let tool = DeviceIdentity { device_kind: 0x8001, ..Default::default() };
        assert_eq!(tool.product_kind(), ProductKind::Tool);

        let reserved = DeviceIdentity { device_kind: 0xC000, ..Default::default() };
        assert_eq!(reserved.product_kind(), ProductKind::Unknown);
    }

    #[test]
    fn test_firmware_version_display() {
        let id = DeviceIdentity::from_bytes(&RAW);
        assert_eq!(id.firmware().to_string(), "V0.1.0.0");
        assert_eq!(FirmwareVersion::from(0x1234).to_string(), "V1.2.3.4");
    }
}
