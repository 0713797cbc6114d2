//! Async driver for the I2C visual rotary encoder module.
//!
//! This crate provides an `embedded-hal-async` driver for the rotary
//! encoder module with LED ring and push button (SEN0502). It reads and
//! writes the rotation count, adjusts the gain coefficient and reports
//! button presses.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **[`RegisterInterface`]** — raw register reads and writes.
//!   [`I2cInterface`] implements it over any `embedded-hal-async` I2C bus;
//!   other buses or test doubles can implement it too.
//! - **[`RotaryEncoder`]** — register-map semantics on top of any
//!   `RegisterInterface`: big-endian encoding, range checks and the
//!   clear-on-detect button protocol.
//!
//! # Quick start
//!
//! ```ignore
//! use rotary_encoder_driver::{RotaryEncoder, DEFAULT_ADDRESS};
//!
//! let mut encoder = RotaryEncoder::new_i2c(i2c, DEFAULT_ADDRESS);
//! encoder.initialize(&mut delay).await?;
//!
//! if encoder.detect_button_press().await {
//!     encoder.set_rotation_count(0).await;
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations and debug
//!   logging via `defmt`.

#![cfg_attr(not(test), no_std)]

pub use encoder::RotaryEncoder;
pub use error::EncoderError;
pub use identity::{DeviceIdentity, FirmwareVersion, ProductKind};
pub use interface::{I2cInterface, RegisterInterface};
pub use registers::{
    address_from_switches, COUNT_MAX, DEFAULT_ADDRESS, DEVICE_PID, GAIN_MAX, GAIN_MIN,
};

mod encoder;
mod error;
mod identity;
mod interface;
mod registers;
