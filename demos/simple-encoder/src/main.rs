//! Simple encoder example
//!
//! Demonstrates basic usage of the rotary-encoder-driver crate on the
//! Raspberry Pi Pico 2. Checks the module identity, configures gain and
//! count, then polls the knob: pressing it resets the count to zero.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                                  |
//! |-----------|------------|----------------------------------------|
//! | I2C0 SDA  | GP20       |                                        |
//! | I2C0 SCL  | GP21       |                                        |
//! | CH1/CH2   | —          | Both off selects address 0x54          |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use rotary_encoder_driver::{address_from_switches, RotaryEncoder};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    let mut encoder = RotaryEncoder::new_i2c(i2c, address_from_switches(false, false));
    let mut delay = Delay;

    // Retry until the module answers with the right ID.
    while let Err(e) = encoder.initialize(&mut delay).await {
        error!("Encoder init failed: {}, check wiring", e);
        Timer::after(Duration::from_secs(3)).await;
    }

    let id = encoder.read_identity().await;
    info!(
        "PID: {=u16:#x} ({}{=u16}), VID: {=u16:#x}, firmware: {}, address: {=u8:#x}",
        id.device_kind,
        id.product_kind().prefix(),
        id.product_number(),
        id.vendor_id,
        id.firmware(),
        id.bus_address,
    );

    // One LED step per detent, start from the middle of the ring.
    encoder.set_gain(51).await;
    encoder.set_rotation_count(512).await;
    info!("Gain: {}", encoder.gain().await);

    info!("Encoder example started — turn the knob, press it to reset");

    let mut last = u16::MAX;
    loop {
        if encoder.detect_button_press().await {
            info!("Button pressed, resetting count");
            encoder.set_rotation_count(0).await;
        }

        let count = encoder.rotation_count().await;
        if count != last {
            info!("Count: {}", count);
            last = count;
        }

        Timer::after(POLL_INTERVAL).await;
    }
}
