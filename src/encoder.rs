//! High-level interface for the visual rotary encoder module.
//!
//! [`RotaryEncoder`] owns the register-map semantics: value encoding,
//! range validation and the button edge protocol. Raw byte I/O goes
//! through the injected [`RegisterInterface`].
//!
//! Two flavours of every operation are provided:
//!
//! - the plain methods keep the module's traditional fire-and-forget
//!   contract: out-of-range values are ignored, failed writes are dropped
//!   and failed reads decode as zero;
//! - the `try_` methods report the same conditions as [`EncoderError`].

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::error::EncoderError;
use crate::identity::DeviceIdentity;
use crate::interface::{I2cInterface, RegisterInterface};
use crate::registers::{
    COUNT_MAX, COUNT_MSB, DEVICE_PID, GAIN, GAIN_MAX, GAIN_MIN, IDENTITY_LEN, KEY_PRESSED,
    KEY_STATUS, PID_MSB, SETTLE_DELAY_MS,
};

/// Driver for one visual rotary encoder module.
///
/// Not internally synchronised. If the bus or the handle is shared
/// between tasks, serialise access externally (a mutex, or a single task
/// owning the handle).
///
/// # Example
///
/// ```ignore
/// use rotary_encoder_driver::{RotaryEncoder, DEFAULT_ADDRESS};
///
/// // `i2c` is any `embedded-hal-async` I2C implementation,
/// // `delay` any `embedded-hal-async` delay
/// let mut encoder = RotaryEncoder::new_i2c(i2c, DEFAULT_ADDRESS);
/// encoder.initialize(&mut delay).await?;
///
/// encoder.set_gain(10).await;
/// let count = encoder.rotation_count().await;
/// ```
pub struct RotaryEncoder<T> {
    interface: T,
}

impl<I2C> RotaryEncoder<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Create a driver talking to the module over I2C.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (or a shared-bus device handle)
    /// * `address` — 7-bit I2C device address (typically 0x54)
    pub fn new_i2c(i2c: I2C, address: u8) -> Self {
        Self::new(I2cInterface::new(i2c, address))
    }
}

impl<T> RotaryEncoder<T>
where
    T: RegisterInterface,
{
    /// Create a driver on top of an arbitrary register transport.
    ///
    /// Pass `&mut transport` to keep ownership of the transport.
    pub fn new(interface: T) -> Self {
        Self { interface }
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.interface
    }

    // -----------------------------------------------------------------------
    // Initialization and identity
    // -----------------------------------------------------------------------

    /// Verify the module's identity and wait for it to settle.
    ///
    /// Must succeed before the other methods return meaningful data; this
    /// is not enforced.
    ///
    /// # Errors
    /// * [`EncoderError::Bus`] if the PID read returned no data
    /// * [`EncoderError::VersionMismatch`] if the PID is not `0x01F6`
    pub async fn initialize<D>(&mut self, delay: &mut D) -> Result<(), EncoderError<T::Error>>
    where
        D: DelayNs,
    {
        let mut id = [0u8; 2];
        if self.read_into(PID_MSB, &mut id).await == 0 {
            #[cfg(feature = "defmt")]
            defmt::error!("initialize: no data on identity read");
            return Err(EncoderError::Bus);
        }

        let pid = u16::from_be_bytes(id);
        #[cfg(feature = "defmt")]
        defmt::debug!("initialize: device PID {=u16:#x}", pid);

        if pid != DEVICE_PID {
            #[cfg(feature = "defmt")]
            defmt::error!("initialize: unexpected PID {=u16:#x}", pid);
            return Err(EncoderError::VersionMismatch { found: pid });
        }

        delay.delay_ms(SETTLE_DELAY_MS).await;

        #[cfg(feature = "defmt")]
        defmt::info!("Rotary encoder initialised");
        Ok(())
    }

    /// Read PID, VID, firmware version and bus address in one transaction.
    ///
    /// Fields the transport did not return decode as zero.
    pub async fn read_identity(&mut self) -> DeviceIdentity {
        let mut raw = [0u8; IDENTITY_LEN];
        self.read_into(PID_MSB, &mut raw).await;
        DeviceIdentity::from_bytes(&raw)
    }

    /// Like [`read_identity`](Self::read_identity), but fails on a
    /// transport error or a short read.
    pub async fn try_read_identity(&mut self) -> Result<DeviceIdentity, EncoderError<T::Error>> {
        let mut raw = [0u8; IDENTITY_LEN];
        self.try_read_exact(PID_MSB, &mut raw).await?;
        Ok(DeviceIdentity::from_bytes(&raw))
    }

    // -----------------------------------------------------------------------
    // Rotation count
    // -----------------------------------------------------------------------

    /// Read the accumulated rotation count (0–1023).
    pub async fn rotation_count(&mut self) -> u16 {
        let mut buf = [0u8; 2];
        self.read_into(COUNT_MSB, &mut buf).await;
        u16::from_be_bytes(buf)
    }

    /// Strict version of [`rotation_count`](Self::rotation_count).
    pub async fn try_rotation_count(&mut self) -> Result<u16, EncoderError<T::Error>> {
        let mut buf = [0u8; 2];
        self.try_read_exact(COUNT_MSB, &mut buf).await?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Overwrite the rotation count.
    ///
    /// Values above 1023 are ignored and nothing is sent to the module.
    ///
    /// # Example
    /// ```ignore
    /// // Reset the count to zero
    /// encoder.set_rotation_count(0).await;
    /// ```
    pub async fn set_rotation_count(&mut self, value: u16) {
        if let Err(_e) = self.try_set_rotation_count(value).await {
            #[cfg(feature = "defmt")]
            match _e {
                EncoderError::OutOfRange => {
                    defmt::warn!("set_rotation_count: {} out of range, ignored", value)
                }
                _ => defmt::warn!("set_rotation_count: write failed"),
            };
        }
    }

    /// Strict version of [`set_rotation_count`](Self::set_rotation_count).
    ///
    /// # Errors
    /// * [`EncoderError::OutOfRange`] if `value > 1023` (nothing written)
    /// * [`EncoderError::Transport`] if the write failed
    pub async fn try_set_rotation_count(&mut self, value: u16) -> Result<(), EncoderError<T::Error>> {
        if value > COUNT_MAX {
            return Err(EncoderError::OutOfRange);
        }

        self.interface.write_register(COUNT_MSB, &value.to_be_bytes()).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Gain coefficient
    // -----------------------------------------------------------------------

    /// Read the gain coefficient (1–51).
    ///
    /// At 1 the LED ring advances one step per ~2.5 turns; at 51 it
    /// advances one step per detent.
    pub async fn gain(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        self.read_into(GAIN, &mut buf).await;
        buf[0]
    }

    /// Strict version of [`gain`](Self::gain).
    pub async fn try_gain(&mut self) -> Result<u8, EncoderError<T::Error>> {
        let mut buf = [0u8; 1];
        self.try_read_exact(GAIN, &mut buf).await?;
        Ok(buf[0])
    }

    /// Set the gain coefficient. Values outside 1–51 are ignored.
    pub async fn set_gain(&mut self, value: u8) {
        if let Err(_e) = self.try_set_gain(value).await {
            #[cfg(feature = "defmt")]
            match _e {
                EncoderError::OutOfRange => {
                    defmt::warn!("set_gain: {} out of range, ignored", value)
                }
                _ => defmt::warn!("set_gain: write failed"),
            };
        }
    }

    /// Strict version of [`set_gain`](Self::set_gain).
    ///
    /// # Errors
    /// * [`EncoderError::OutOfRange`] if `value` is not in 1–51 (nothing written)
    /// * [`EncoderError::Transport`] if the write failed
    pub async fn try_set_gain(&mut self, value: u8) -> Result<(), EncoderError<T::Error>> {
        if !(GAIN_MIN..=GAIN_MAX).contains(&value) {
            return Err(EncoderError::OutOfRange);
        }

        self.interface.write_register(GAIN, &[value]).await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Button
    // -----------------------------------------------------------------------

    /// Consume one button-press notification.
    ///
    /// Returns `true` if the knob was pressed since the last call that
    /// returned `true`. Edge, not level: the flag is cleared by writing
    /// 0x00 back to the status register.
    ///
    /// This costs two bus transactions (read, then clear). A press landing
    /// between them is cleared without being reported, and a second
    /// caller reading between them sees the same press again. Only use one
    /// caller at a time.
    pub async fn detect_button_press(&mut self) -> bool {
        let mut status = [0u8; 1];
        self.read_into(KEY_STATUS, &mut status).await;

        if status[0] & KEY_PRESSED == 0 {
            return false;
        }

        if self.interface.write_register(KEY_STATUS, &[0x00]).await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("detect_button_press: clearing status failed");
        }
        true
    }

    /// Strict version of [`detect_button_press`](Self::detect_button_press).
    ///
    /// If the clear-write fails the press is reported as an error and
    /// remains pending on the module.
    pub async fn try_detect_button_press(&mut self) -> Result<bool, EncoderError<T::Error>> {
        let mut status = [0u8; 1];
        self.try_read_exact(KEY_STATUS, &mut status).await?;

        if status[0] & KEY_PRESSED == 0 {
            return Ok(false);
        }

        self.interface.write_register(KEY_STATUS, &[0x00]).await?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Read helpers
    // -----------------------------------------------------------------------

    /// Best-effort read. Bytes past the returned count are zeroed; a
    /// transport error counts as zero bytes.
    async fn read_into(&mut self, register: u8, buffer: &mut [u8]) -> usize {
        let count = match self.interface.read_register(register, buffer).await {
            Ok(count) => count.min(buffer.len()),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("read of register {=u8:#x} failed", register);
                0
            }
        };

        buffer[count..].fill(0);
        count
    }

    async fn try_read_exact(
        &mut self,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), EncoderError<T::Error>> {
        let count = self.interface.read_register(register, buffer).await?;
        if count < buffer.len() {
            return Err(EncoderError::Bus);
        }
        Ok(())
    }
}
