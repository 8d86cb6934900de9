//! Driver configuration and the expander's own IOCON register.

use crate::consts::iocon;
use crate::device::Mcp23017;
use crate::error::{Result, UnsupportedConfig};
use crate::gpio::Bank;
use crate::register::RegisterGroup;
use crate::transport::ByteTransport;
use log::debug;

/// Driver-side options chosen at initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Keep a shadow copy of bank bytes seen on the bus. Used by
    /// [`update_word`](crate::Mcp23017::update_word) to skip redundant writes.
    pub shadow_cache: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self { shadow_cache: true }
    }
}

impl DeviceConfig {
    /// No shadow cache: every bulk update writes both banks.
    pub fn uncached() -> Self {
        Self {
            shadow_cache: false,
        }
    }
}

/// Typed view of the IOCON register.
///
/// The BANK bit is not represented; the register map used throughout this
/// crate is only valid with BANK = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpanderConfig {
    /// MIRROR: INTA and INTB are internally OR-ed.
    pub mirror: bool,
    /// SEQOP set: the address pointer does not increment.
    pub sequential_disabled: bool,
    /// DISSLW: SDA slew rate control disabled.
    pub slew_rate_disabled: bool,
    /// HAEN: hardware address enable (only meaningful on the SPI variant).
    pub hardware_address: bool,
    /// ODR: INT pins are open-drain (overrides `interrupt_active_high`).
    pub open_drain_interrupt: bool,
    /// INTPOL: INT pins are active-high.
    pub interrupt_active_high: bool,
}

impl ExpanderConfig {
    /// Encodes the configuration as an IOCON byte.
    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        for (flag, bit) in [
            (self.mirror, iocon::MIRROR),
            (self.sequential_disabled, iocon::SEQOP),
            (self.slew_rate_disabled, iocon::DISSLW),
            (self.hardware_address, iocon::HAEN),
            (self.open_drain_interrupt, iocon::ODR),
            (self.interrupt_active_high, iocon::INTPOL),
        ] {
            if flag {
                byte |= bit;
            }
        }
        byte
    }

    /// Decodes an IOCON byte. Fails if BANK is set.
    pub fn from_byte(byte: u8) -> std::result::Result<Self, UnsupportedConfig> {
        check_bank_mode(byte)?;
        Ok(Self {
            mirror: byte & iocon::MIRROR != 0,
            sequential_disabled: byte & iocon::SEQOP != 0,
            slew_rate_disabled: byte & iocon::DISSLW != 0,
            hardware_address: byte & iocon::HAEN != 0,
            open_drain_interrupt: byte & iocon::ODR != 0,
            interrupt_active_high: byte & iocon::INTPOL != 0,
        })
    }
}

/// Rejects an IOCON byte with BANK set.
pub(crate) fn check_bank_mode(byte: u8) -> std::result::Result<(), UnsupportedConfig> {
    if byte & iocon::BANK != 0 {
        Err(UnsupportedConfig("IOCON.BANK=1 remaps the register file"))
    } else {
        Ok(())
    }
}

impl<T: ByteTransport> Mcp23017<T> {
    /// Reads IOCON.
    pub fn read_expander_config(&mut self) -> Result<ExpanderConfig, T::Error> {
        let byte = self.get_bank(RegisterGroup::ExpanderConfig, Bank::A)?;
        Ok(ExpanderConfig::from_byte(byte)?)
    }

    /// Writes IOCON. BANK is always written as 0.
    pub fn write_expander_config(&mut self, config: ExpanderConfig) -> Result<(), T::Error> {
        debug!("Writing IOCON @0x{:02X}: {:?}", self.address(), config);
        self.set_bank(RegisterGroup::ExpanderConfig, Bank::A, config.to_byte())
    }
}
