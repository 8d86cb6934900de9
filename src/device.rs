//! Device handle: bus address, transport and shadow cache.

use crate::config::DeviceConfig;
use crate::consts::{MAX_ADDRESS, MIN_ADDRESS};
use crate::error::{Error, Result};
use crate::gpio::{compose_word, Bank};
use crate::register::RegisterGroup;
use crate::transport::ByteTransport;
use log::{debug, trace, warn};

/// Composes a bus address from the A2/A1/A0 select pin levels.
pub const fn address_from_pins(a2: bool, a1: bool, a0: bool) -> u8 {
    MIN_ADDRESS | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8)
}

/// Last-known bank bytes per register group. Never authoritative.
#[derive(Debug, Clone, Default)]
struct ShadowCache {
    banks: [[Option<u8>; 2]; RegisterGroup::ALL.len()],
}

impl ShadowCache {
    #[inline]
    fn get(&self, group: RegisterGroup, bank: Bank) -> Option<u8> {
        self.banks[group.index()][bank.index()]
    }
    #[inline]
    fn set(&mut self, group: RegisterGroup, bank: Bank, value: u8) {
        self.banks[group.index()][bank.index()] = Some(value);
    }
    fn clear(&mut self) {
        *self = Self::default();
    }
}

// --- Device Handle ---
/// A handle to one MCP23017 on a bus.
///
/// The handle performs blocking bus transactions through `T` and offers no
/// internal locking: every mutating call takes `&mut self`, so sharing one
/// expander between threads requires an external mutex. `T` may be an owned
/// transport or a `&mut` borrow of one shared with other peripherals.
#[derive(Debug)]
pub struct Mcp23017<T> {
    transport: T,
    address: u8,
    config: DeviceConfig,
    shadow: ShadowCache,
}

impl<T: ByteTransport> Mcp23017<T> {
    // --- Constructors and Info ---
    /// Creates a device at `address` with the default [`DeviceConfig`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTransport`] if the transport reports it is not ready.
    /// - [`Error::InvalidAddress`] if `address` is outside 0x20-0x27.
    ///
    /// No bus traffic is generated; the shadow cache starts empty.
    pub fn initialise(transport: T, address: u8) -> Result<Self, T::Error> {
        Self::initialise_with_config(transport, address, DeviceConfig::default())
    }

    /// Creates a device with an explicit configuration. See [`initialise`](Self::initialise).
    pub fn initialise_with_config(
        transport: T,
        address: u8,
        config: DeviceConfig,
    ) -> Result<Self, T::Error> {
        if !transport.is_ready() {
            warn!("Refusing to initialise MCP23017: transport not ready");
            return Err(Error::InvalidTransport);
        }
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&address) {
            warn!("Refusing to initialise MCP23017 at invalid address 0x{:02X}", address);
            return Err(Error::InvalidAddress(address));
        }
        debug!(
            "Initialised MCP23017 at 0x{:02X} (shadow cache {})",
            address,
            if config.shadow_cache { "on" } else { "off" }
        );
        Ok(Self {
            transport,
            address,
            config,
            shadow: ShadowCache::default(),
        })
    }

    /// Bus address of this expander.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Configuration the device was created with.
    pub fn config(&self) -> DeviceConfig {
        self.config
    }

    /// Shared access to the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exclusive access to the transport. Traffic sent this way bypasses the
    /// shadow cache; call [`invalidate_cache`](Self::invalidate_cache) if it
    /// touched this expander.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the device and return the transport.
    pub fn release(self) -> T {
        self.transport
    }

    // --- Shadow Cache ---
    /// Last bank byte read from or written to the device, if any.
    pub fn cached_bank(&self, group: RegisterGroup, bank: Bank) -> Option<u8> {
        self.shadow.get(group, bank)
    }

    /// Last known group word, if both banks are known.
    pub fn cached_word(&self, group: RegisterGroup) -> Option<u16> {
        Some(compose_word(
            self.shadow.get(group, Bank::A)?,
            self.shadow.get(group, Bank::B)?,
        ))
    }

    /// Forgets every shadow entry; the next access of each group hits the bus.
    pub fn invalidate_cache(&mut self) {
        trace!("Invalidating shadow cache for 0x{:02X}", self.address);
        self.shadow.clear();
    }

    // IOCONA and IOCONB are the same physical register.
    pub(crate) fn remember(&mut self, group: RegisterGroup, bank: Bank, value: u8) {
        if !self.config.shadow_cache {
            return;
        }
        if group == RegisterGroup::ExpanderConfig {
            for bank in Bank::ALL {
                self.shadow.set(group, bank, value);
            }
        } else {
            self.shadow.set(group, bank, value);
        }
    }

    // --- Register Access ---
    // Wrap transport errors with register context
    pub(crate) fn read_register(&mut self, register: u8) -> Result<u8, T::Error> {
        let mut buf = [0u8; 1];
        match self
            .transport
            .write_then_read(self.address, register, &mut buf)
        {
            Ok(()) => {
                trace!(
                    "Read Reg 0x{:02X} @0x{:02X} = 0x{:02X}",
                    register,
                    self.address,
                    buf[0]
                );
                Ok(buf[0])
            }
            Err(cause) => {
                warn!(
                    "Read of register 0x{:02X} @0x{:02X} failed: {:?}",
                    register, self.address, cause
                );
                Err(Error::TransportFailure {
                    bus_address: self.address,
                    register,
                    cause,
                })
            }
        }
    }

    pub(crate) fn write_register(&mut self, register: u8, value: u8) -> Result<(), T::Error> {
        trace!(
            "Write Reg 0x{:02X} @0x{:02X} = 0x{:02X}",
            register,
            self.address,
            value
        );
        self.transport
            .write(self.address, register, &[value])
            .map_err(|cause| {
                warn!(
                    "Write of register 0x{:02X} @0x{:02X} failed: {:?}",
                    register, self.address, cause
                );
                Error::TransportFailure {
                    bus_address: self.address,
                    register,
                    cause,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_from_pins() {
        assert_eq!(address_from_pins(false, false, false), 0x20);
        assert_eq!(address_from_pins(false, false, true), 0x21);
        assert_eq!(address_from_pins(true, false, false), 0x24);
        assert_eq!(address_from_pins(true, true, true), 0x27);
    }

    #[test]
    fn test_shadow_cache_entries_are_independent() {
        let mut cache = ShadowCache::default();
        cache.set(RegisterGroup::Direction, Bank::B, 0x5A);
        assert_eq!(cache.get(RegisterGroup::Direction, Bank::B), Some(0x5A));
        assert_eq!(cache.get(RegisterGroup::Direction, Bank::A), None);
        assert_eq!(cache.get(RegisterGroup::OutputLatch, Bank::B), None);
        cache.clear();
        assert_eq!(cache.get(RegisterGroup::Direction, Bank::B), None);
    }
}
