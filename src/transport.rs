//! Bus transport abstraction and the embedded-hal I2C adapter.
//!
//! The expander is reached through two register-indexed primitives: a
//! pointer-write followed by a read, and a pointer-write followed by data.
//! Anything that can perform those can drive a [`Mcp23017`](crate::Mcp23017).

use embedded_hal::i2c::{I2c, Operation};
use log::trace;
use std::fmt::Debug;

/// Largest payload sent in a single buffered write (the whole register file).
const MAX_BUFFERED_WRITE: usize = 0x16;

/// Blocking, fallible register access on a two-wire bus.
///
/// Implementations own bus claim/release, clock speed and any timeout or
/// retry policy; a timeout must surface as an error, never as a hang.
pub trait ByteTransport {
    /// Error reported by the bus (NACK, timeout, arbitration loss, ...).
    type Error: Debug;

    /// Writes the register pointer without releasing the bus, then reads
    /// `buffer.len()` bytes starting at that register.
    fn write_then_read(
        &mut self,
        bus_address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Writes the register pointer followed by `data`, releasing the bus at the end.
    fn write(&mut self, bus_address: u8, register: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Whether the transport has been set up and can carry transactions.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<T: ByteTransport + ?Sized> ByteTransport for &mut T {
    type Error = T::Error;

    #[inline]
    fn write_then_read(
        &mut self,
        bus_address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).write_then_read(bus_address, register, buffer)
    }

    #[inline]
    fn write(&mut self, bus_address: u8, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(bus_address, register, data)
    }

    #[inline]
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// [`ByteTransport`] over any `embedded_hal::i2c::I2c` bus.
///
/// # Example
/// ```ignore
/// let transport = I2cTransport::new(i2c);
/// let mut expander = Mcp23017::initialise(transport, 0x20)?;
/// ```
#[derive(Debug)]
pub struct I2cTransport<I2C> {
    i2c: I2C,
}

impl<I2C> I2cTransport<I2C> {
    /// Wraps an initialised I2C bus.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the transport and return the I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> ByteTransport for I2cTransport<I2C> {
    type Error = I2C::Error;

    fn write_then_read(
        &mut self,
        bus_address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(bus_address, &[register], buffer)
    }

    fn write(&mut self, bus_address: u8, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        if data.len() <= MAX_BUFFERED_WRITE {
            let mut buffer = [0u8; MAX_BUFFERED_WRITE + 1];
            buffer[0] = register;
            buffer[1..=data.len()].copy_from_slice(data);
            self.i2c.write(bus_address, &buffer[..=data.len()])
        } else {
            // Adjacent writes in one transaction go out without a repeated start.
            trace!(
                "Unbuffered write of {} bytes to register 0x{:02X}",
                data.len(),
                register
            );
            self.i2c.transaction(
                bus_address,
                &mut [Operation::Write(&[register]), Operation::Write(data)],
            )
        }
    }
}
