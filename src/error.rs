use crate::register::RegisterGroup;
use thiserror::Error;

/// Errors that can occur when driving an MCP23017.
///
/// `E` is the error type of the [`ByteTransport`](crate::ByteTransport) the
/// device talks through. Addressing and writability problems are detected
/// before any bus traffic is generated; only `TransportFailure` means a bus
/// transaction was actually attempted.
#[derive(Error, Debug)]
pub enum Error<E> {
    /// Bus address is outside the range selectable with the A2/A1/A0 pins.
    #[error("Invalid MCP23017 bus address 0x{0:02X}: must be within 0x20-0x27")]
    InvalidAddress(u8),
    /// The transport reported that it is not ready for use.
    #[error("Transport is not ready; initialise the bus before creating the device")]
    InvalidTransport,
    /// Logical pin number is outside 0-15.
    #[error("GPIO pin {0} argument out of range (0-15)")]
    InvalidPin(u8),
    /// A write was requested on a register group the hardware treats as read-only.
    #[error("Register group {0:?} is read-only")]
    NotWritable(RegisterGroup),
    /// The transport failed (NACK, timeout, arbitration loss, ...).
    #[error(
        "Transport failure at bus address 0x{bus_address:02X}, register 0x{register:02X}: {cause:?}"
    )]
    TransportFailure {
        /// Bus address of the expander being accessed.
        bus_address: u8,
        /// Register address being read or written.
        register: u8,
        /// Error reported by the transport.
        cause: E,
    },
    /// Configuration value the driver cannot honour.
    #[error("Unsupported expander configuration: {0}")]
    UnsupportedConfig(&'static str),
}

/// Result type alias for MCP23017 operations over a transport with error `E`.
pub type Result<T, E> = std::result::Result<T, Error<E>>;

/// Pin number outside 0-15, independent of any transport.
///
/// Returned by [`GpioPin::new`](crate::GpioPin::new) and converted into
/// [`Error::InvalidPin`] by the `?` operator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("GPIO pin {0} argument out of range (0-15)")]
pub struct InvalidPin(pub u8);

impl<E> From<InvalidPin> for Error<E> {
    fn from(err: InvalidPin) -> Self {
        Error::InvalidPin(err.0)
    }
}

/// Expander configuration the driver cannot honour, independent of any transport.
///
/// Returned by [`ExpanderConfig::from_byte`](crate::ExpanderConfig::from_byte)
/// and converted into [`Error::UnsupportedConfig`] by the `?` operator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported expander configuration: {0}")]
pub struct UnsupportedConfig(pub &'static str);

impl<E> From<UnsupportedConfig> for Error<E> {
    fn from(err: UnsupportedConfig) -> Self {
        Error::UnsupportedConfig(err.0)
    }
}
