//! # mcp23017-expander
//!
//! A Rust crate for driving the Microchip MCP23017 16-bit I/O expander over
//! I²C through a bank/bit addressed view of its register file.
//!
//! ## Features
//!
//! *   Validated construction (`Mcp23017::initialise`) for the eight selectable
//!     bus addresses 0x20-0x27 (`address_from_pins`).
//! *   One generic access path for every register group
//!     ([`RegisterGroup`]): direction, polarity, pull-up, interrupt enable,
//!     interrupt control, default value, expander configuration, interrupt
//!     flag, interrupt capture, input level and output latch.
//!     *   Whole-group words (`get_word`, `set_word`, `update_word`).
//!     *   Single banks (`get_bank`, `set_bank`).
//!     *   Single pins (`get_bit`, `set_bit`), with a read-modify-write that
//!         never disturbs sibling pins and skips the bus write when the bit
//!         already holds the requested value.
//! *   Read-only groups (interrupt flag, interrupt capture, input level) reject
//!     writes before touching the bus.
//! *   Optional shadow cache of bank bytes seen on the bus.
//! *   Typed pin helpers (`gpio_set_direction`, `gpio_write`, `gpio_read`,
//!     `gpio_set_pull`, ...).
//! *   Interrupt-on-change configuration and status snapshots.
//! *   Transport abstraction ([`ByteTransport`]) with an adapter for any
//!     `embedded-hal` 1.0 I²C bus ([`I2cTransport`]).
//!
//! ## Word Layout
//!
//! A group word is `(bankA << 8) | bankB`:
//!
//! *   Pins 0-7 (GPA0-GPA7) are bank A, bits 8-15 of the word (pin 0 at bit 8).
//! *   Pins 8-15 (GPB0-GPB7) are bank B, bits 0-7 of the word (pin 8 at bit 0).
//!
//! Bulk writes send bank A before bank B.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use mcp23017_expander::{
//!     GpioDirection, GpioLevel, GpioPin, I2cTransport, Mcp23017, RegisterGroup, Result,
//! };
//!
//! fn configure<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), I2C::Error> {
//!     let mut expander = Mcp23017::initialise(I2cTransport::new(i2c), 0x20)?;
//!
//!     // Bank A outputs, bank B inputs with pull-ups
//!     expander.set_word(RegisterGroup::Direction, 0x00FF)?;
//!     expander.set_word(RegisterGroup::PullUp, 0x00FF)?;
//!
//!     let led = GpioPin::new(3)?;
//!     expander.gpio_write(led, GpioLevel::High)?;
//!
//!     let button = GpioPin::new(8)?;
//!     assert_eq!(expander.gpio_get_direction(button)?, GpioDirection::Input);
//!     let _pressed = expander.gpio_read(button)? == GpioLevel::Low;
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is blocking and takes `&mut self`. A single-pin write is a
//! read followed by a conditional write; nothing else may touch the same bank
//! in between, so share a device between threads only behind a mutex.
//!
//! ## Logging
//!
//! Register traffic is logged through the `log` facade (`trace` for register
//! access, `debug` for state changes, `warn` for transport failures). Install
//! any logger, e.g. `env_logger`, to see it.
//!
//! ## License
//!
//! This project is licensed under the WTFPL.

mod config;
mod consts;
mod device;
mod error;
pub mod gpio; // Keep gpio public for its enums/structs
mod group;
pub mod interrupt;
mod register;
pub mod transport;

pub use config::{DeviceConfig, ExpanderConfig};
pub use consts::{DEFAULT_ADDRESS, MAX_ADDRESS, MIN_ADDRESS, PIN_COUNT};
pub use device::{address_from_pins, Mcp23017};
pub use error::{Error, InvalidPin, Result, UnsupportedConfig};
pub use gpio::{
    address_of, compose_word, Bank, GpioDirection, GpioLevel, GpioPin, GpioPolarity, GpioPull,
};
pub use interrupt::{InterruptMode, InterruptStatus};
pub use register::RegisterGroup;
pub use transport::{ByteTransport, I2cTransport};
