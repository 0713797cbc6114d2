//! Register transport layer.
//!
//! [`RegisterInterface`] is the capability boundary between the
//! device-agnostic register semantics in [`RotaryEncoder`](crate::RotaryEncoder)
//! and a concrete bus. [`I2cInterface`] implements it over any
//! `embedded-hal-async` I2C bus.

use embedded_hal_async::i2c::{I2c, Operation};

use crate::registers::DEFAULT_ADDRESS;

/// Raw register access for the encoder module.
///
/// Implement this to drive the module over a bus other than I2C, or to
/// substitute a simulated register file in tests.
#[allow(async_fn_in_trait)]
pub trait RegisterInterface {
    /// Transport-level error.
    type Error;

    /// Write `data` to consecutive registers starting at `register`.
    async fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read up to `buffer.len()` bytes starting at `register`.
    ///
    /// Returns the number of bytes actually copied into `buffer`. A short
    /// count is allowed; callers must not rely on bytes past it.
    async fn read_register(&mut self, register: u8, buffer: &mut [u8])
        -> Result<usize, Self::Error>;
}

// Lets a handle borrow a transport instead of owning it.
impl<T> RegisterInterface for &mut T
where
    T: RegisterInterface,
{
    type Error = T::Error;

    async fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_register(register, data).await
    }

    async fn read_register(
        &mut self,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error> {
        (**self).read_register(register, buffer).await
    }
}

/// I2C transport for the encoder module.
///
/// Owns an I2C peripheral. To put several devices on one bus, pass a
/// shared-bus device handle (e.g. `embassy_embedded_hal`'s `I2cDevice`)
/// as `I2C`.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2C transport.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral
    /// * `address` — 7-bit I2C device address (0x54–0x57, see
    ///   [`address_from_switches`](crate::address_from_switches))
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Create a transport for a module with both address switches off.
    pub fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    /// Device address this transport talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    /// Send `[register, data...]` as one write transaction.
    ///
    /// Adjacent write operations in a transaction are merged on the wire,
    /// so no intermediate buffer is needed.
    async fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[register]), Operation::Write(data)],
            )
            .await
    }

    /// Write the register address, then read the response.
    ///
    /// Uses separate `write()` and `read()` operations rather than
    /// `write_read()`: the module expects the address phase to be closed
    /// with a STOP before the data is requested.
    async fn read_register(
        &mut self,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.i2c.write(self.address, &[register]).await?;
        self.i2c.read(self.address, buffer).await?;

        Ok(buffer.len())
    }
}
