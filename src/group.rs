//! Generic register-group access: word, bank and bit reads and writes.
//!
//! Every register group goes through the same handful of methods, keyed by
//! [`RegisterGroup`]. Bit operations resolve the bank and bit position through
//! [`GpioPin`] only, and writes to read-only groups are rejected before any
//! bus traffic. So is any IOCON byte with BANK set.

use crate::config::check_bank_mode;
use crate::device::Mcp23017;
use crate::error::{Error, Result};
use crate::gpio::{compose_word, Bank, GpioPin};
use crate::register::RegisterGroup;
use crate::transport::ByteTransport;
use log::{debug, trace};

impl<T: ByteTransport> Mcp23017<T> {
    #[inline]
    fn check_writable(group: RegisterGroup) -> Result<(), T::Error> {
        if group.is_writable() {
            Ok(())
        } else {
            Err(Error::NotWritable(group))
        }
    }

    // The register map is only valid with IOCON.BANK = 0.
    #[inline]
    fn check_value(group: RegisterGroup, byte: u8) -> Result<(), T::Error> {
        if group == RegisterGroup::ExpanderConfig {
            check_bank_mode(byte)?;
        }
        Ok(())
    }

    // --- Bulk Access ---
    /// Reads both banks of `group` and returns them as `(bankA << 8) | bankB`.
    pub fn get_word(&mut self, group: RegisterGroup) -> Result<u16, T::Error> {
        let bank_a = self.get_bank(group, Bank::A)?;
        let bank_b = self.get_bank(group, Bank::B)?;
        let word = compose_word(bank_a, bank_b);
        trace!("Read {:?} word: 0x{:04X}", group, word);
        Ok(word)
    }

    /// Reads one bank byte of `group`.
    pub fn get_bank(&mut self, group: RegisterGroup, bank: Bank) -> Result<u8, T::Error> {
        let value = self.read_register(group.address(bank))?;
        self.remember(group, bank, value);
        Ok(value)
    }

    /// Writes both banks of `group`, bank A (high byte) first.
    ///
    /// Both bytes are always written, regardless of the shadow cache.
    pub fn set_word(&mut self, group: RegisterGroup, value: u16) -> Result<(), T::Error> {
        Self::check_writable(group)?;
        for bank in Bank::ALL {
            Self::check_value(group, bank.byte_of(value))?;
        }
        debug!("Setting {:?} word: 0x{:04X}", group, value);
        for bank in Bank::ALL {
            self.write_bank(group, bank, bank.byte_of(value))?;
        }
        Ok(())
    }

    /// Writes one bank byte of `group` unconditionally.
    pub fn set_bank(&mut self, group: RegisterGroup, bank: Bank, value: u8) -> Result<(), T::Error> {
        Self::check_writable(group)?;
        Self::check_value(group, value)?;
        debug!("Setting {:?} bank {:?}: 0x{:02X}", group, bank, value);
        self.write_bank(group, bank, value)
    }

    /// Writes only the banks of `group` whose shadow entry differs from `value`.
    ///
    /// Banks with no shadow entry (or with the cache disabled) are written.
    /// Returns the number of bus writes issued (0-2).
    pub fn update_word(&mut self, group: RegisterGroup, value: u16) -> Result<usize, T::Error> {
        Self::check_writable(group)?;
        for bank in Bank::ALL {
            Self::check_value(group, bank.byte_of(value))?;
        }
        let mut writes = 0;
        for bank in Bank::ALL {
            let target = bank.byte_of(value);
            if self.cached_bank(group, bank) == Some(target) {
                trace!(
                    "{:?} bank {:?} already 0x{:02X}, skipping write",
                    group,
                    bank,
                    target
                );
                continue;
            }
            self.write_bank(group, bank, target)?;
            writes += 1;
        }
        debug!(
            "Updated {:?} word to 0x{:04X} with {} write(s)",
            group, value, writes
        );
        Ok(writes)
    }

    // Shadow is only touched once the write has succeeded.
    fn write_bank(&mut self, group: RegisterGroup, bank: Bank, value: u8) -> Result<(), T::Error> {
        self.write_register(group.address(bank), value)?;
        self.remember(group, bank, value);
        Ok(())
    }

    // --- Single Pin Access ---
    /// Reads the bit of `group` belonging to logical `pin` (0-15).
    ///
    /// Only the pin's bank is read.
    pub fn get_bit(&mut self, group: RegisterGroup, pin: u8) -> Result<bool, T::Error> {
        let pin = GpioPin::new(pin)?;
        let byte = self.get_bank(group, pin.bank())?;
        Ok(byte & pin.mask() != 0)
    }

    /// Sets or clears the bit of `group` belonging to logical `pin` (0-15).
    ///
    /// Always reads the bank fresh from the device, then writes it back only if
    /// the target bit actually changes. The other seven bits are preserved.
    pub fn set_bit(&mut self, group: RegisterGroup, pin: u8, value: bool) -> Result<(), T::Error> {
        Self::check_writable(group)?;
        let pin = GpioPin::new(pin)?;
        let bank = pin.bank();
        let mask = pin.mask();
        if value {
            Self::check_value(group, mask)?;
        }

        let current = self.get_bank(group, bank)?;
        let new = if value {
            current | mask
        } else {
            current & !mask
        };
        if new != current {
            debug!("Setting {:?} pin {}: {}", group, pin.number(), value);
            self.write_bank(group, bank, new)?;
        } else {
            trace!(
                "{:?} pin {} already set to {}",
                group,
                pin.number(),
                value
            );
        }
        Ok(())
    }
}
