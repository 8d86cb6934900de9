//! Register group table: every named register pair and its writability.

use crate::consts::reg;
use crate::gpio::Bank;

/// A named register pair governing one aspect of all 16 pins.
///
/// Each variant owns one register address per bank; see [`RegisterGroup::addresses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterGroup {
    /// IODIR: 1 = input, 0 = output.
    Direction,
    /// IPOL: 1 = input register reads inverted pin level.
    Polarity,
    /// GPINTEN: interrupt-on-change enable.
    InterruptEnable,
    /// DEFVAL: compare value for interrupt-on-change.
    DefaultValue,
    /// INTCON: 1 = compare against DEFVAL, 0 = compare against previous value.
    InterruptControl,
    /// IOCON: expander configuration (one physical register mirrored at both addresses).
    ExpanderConfig,
    /// GPPU: weak pull-up enable.
    PullUp,
    /// INTF: pins that caused a pending interrupt. Read-only.
    InterruptFlag,
    /// INTCAP: pin levels captured at interrupt time. Read-only.
    InterruptCapture,
    /// GPIO: raw pin level. Read-only here; writes go through `OutputLatch`.
    InputLevel,
    /// OLAT: output latch.
    OutputLatch,
}

impl RegisterGroup {
    /// All groups in register-map order.
    pub const ALL: [RegisterGroup; 11] = [
        RegisterGroup::Direction,
        RegisterGroup::Polarity,
        RegisterGroup::InterruptEnable,
        RegisterGroup::DefaultValue,
        RegisterGroup::InterruptControl,
        RegisterGroup::ExpanderConfig,
        RegisterGroup::PullUp,
        RegisterGroup::InterruptFlag,
        RegisterGroup::InterruptCapture,
        RegisterGroup::InputLevel,
        RegisterGroup::OutputLatch,
    ];

    /// Returns the (bank A, bank B) register addresses of this group.
    pub const fn addresses(self) -> (u8, u8) {
        match self {
            RegisterGroup::Direction => (reg::IODIRA, reg::IODIRB),
            RegisterGroup::Polarity => (reg::IPOLA, reg::IPOLB),
            RegisterGroup::InterruptEnable => (reg::GPINTENA, reg::GPINTENB),
            RegisterGroup::DefaultValue => (reg::DEFVALA, reg::DEFVALB),
            RegisterGroup::InterruptControl => (reg::INTCONA, reg::INTCONB),
            RegisterGroup::ExpanderConfig => (reg::IOCONA, reg::IOCONB),
            RegisterGroup::PullUp => (reg::GPPUA, reg::GPPUB),
            RegisterGroup::InterruptFlag => (reg::INTFA, reg::INTFB),
            RegisterGroup::InterruptCapture => (reg::INTCAPA, reg::INTCAPB),
            RegisterGroup::InputLevel => (reg::GPIOA, reg::GPIOB),
            RegisterGroup::OutputLatch => (reg::OLATA, reg::OLATB),
        }
    }

    /// Returns the register address of one bank of this group.
    #[inline]
    pub const fn address(self, bank: Bank) -> u8 {
        let (a, b) = self.addresses();
        match bank {
            Bank::A => a,
            Bank::B => b,
        }
    }

    /// Whether the hardware accepts writes to this group.
    pub const fn is_writable(self) -> bool {
        !matches!(
            self,
            RegisterGroup::InterruptFlag
                | RegisterGroup::InterruptCapture
                | RegisterGroup::InputLevel
        )
    }

    // Position in `ALL`, used to index the shadow cache.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}
