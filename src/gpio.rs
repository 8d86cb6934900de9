use crate::consts::{PINS_PER_BANK, PIN_COUNT};
use crate::device::Mcp23017;
use crate::error::{InvalidPin, Result};
use crate::register::RegisterGroup;
use crate::transport::ByteTransport;
use log::trace;

/// Pin direction. The direction register stores 1 for input, 0 for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioDirection {
    Input,
    Output,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioLevel {
    Low,
    High,
}
/// Internal pull resistor. The MCP23017 only has weak pull-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioPull {
    None,
    Up,
}
/// Input polarity. `Inverted` makes the input register read the opposite of the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioPolarity {
    Normal,
    Inverted,
}

impl GpioDirection {
    #[inline]
    pub(crate) fn bit(self) -> bool {
        self == GpioDirection::Input
    }
    #[inline]
    pub(crate) fn from_bit(bit: bool) -> Self {
        if bit {
            GpioDirection::Input
        } else {
            GpioDirection::Output
        }
    }
}

impl GpioLevel {
    #[inline]
    pub(crate) fn bit(self) -> bool {
        self == GpioLevel::High
    }
    #[inline]
    pub(crate) fn from_bit(bit: bool) -> Self {
        if bit {
            GpioLevel::High
        } else {
            GpioLevel::Low
        }
    }
}

impl From<bool> for GpioLevel {
    fn from(high: bool) -> Self {
        GpioLevel::from_bit(high)
    }
}

/// One of the two 8-bit register halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    /// Pins 0-7 (GPA0-GPA7). Occupies the high byte of a group word.
    A,
    /// Pins 8-15 (GPB0-GPB7). Occupies the low byte of a group word.
    B,
}

impl Bank {
    /// Both banks in wire order (A is always accessed first).
    pub const ALL: [Bank; 2] = [Bank::A, Bank::B];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Bank::A => 0,
            Bank::B => 1,
        }
    }

    /// Extracts this bank's byte from a group word.
    #[inline]
    pub fn byte_of(self, word: u16) -> u8 {
        match self {
            Bank::A => (word >> 8) as u8,
            Bank::B => (word & 0xFF) as u8,
        }
    }
}

/// Composes a group word from its two bank bytes. Bank A is the high byte.
#[inline]
pub fn compose_word(bank_a: u8, bank_b: u8) -> u16 {
    (u16::from(bank_a) << 8) | u16::from(bank_b)
}

/// Maps a logical pin (0-15) onto its bank and bit position (0-7).
///
/// This is the only place the bank boundary is decided: pin 7 is the last pin
/// of bank A and pin 8 the first of bank B.
pub fn address_of(pin: u8) -> std::result::Result<(Bank, u8), InvalidPin> {
    GpioPin::new(pin).map(|p| (p.bank(), p.bit_index()))
}

/// Represents a valid logical pin number (0-15).
/// Use `GpioPin::new(num)` to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GpioPin(u8);

impl GpioPin {
    /// Creates a new GpioPin, returning an error if the number is out of range (0-15).
    pub fn new(pin_num: u8) -> std::result::Result<Self, InvalidPin> {
        if pin_num < PIN_COUNT {
            Ok(GpioPin(pin_num))
        } else {
            Err(InvalidPin(pin_num))
        }
    }

    /// Returns the underlying pin number (0-15).
    #[inline]
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Returns the bank the pin belongs to.
    #[inline]
    pub fn bank(&self) -> Bank {
        if self.0 < PINS_PER_BANK {
            Bank::A
        } else {
            Bank::B
        }
    }

    /// Returns the bit index (0-7) within the bank's register.
    #[inline]
    pub fn bit_index(&self) -> u8 {
        match self.bank() {
            Bank::A => self.0,
            Bank::B => self.0 - PINS_PER_BANK,
        }
    }

    /// Returns the bit mask (1 << bit_index) for bank register operations.
    #[inline]
    pub fn mask(&self) -> u8 {
        1u8 << self.bit_index()
    }

    /// Returns the bit mask of this pin inside a group word.
    ///
    /// Bank A pins occupy bits 8-15 (pin 0 at bit 8), bank B pins bits 0-7
    /// (pin 8 at bit 0), matching `compose_word`.
    #[inline]
    pub fn word_mask(&self) -> u16 {
        match self.bank() {
            Bank::A => u16::from(self.mask()) << 8,
            Bank::B => u16::from(self.mask()),
        }
    }

    /// Iterates over all 16 pins in ascending order.
    pub fn all() -> impl Iterator<Item = GpioPin> {
        (0..PIN_COUNT).map(GpioPin)
    }
}

impl TryFrom<u8> for GpioPin {
    type Error = InvalidPin;

    fn try_from(pin_num: u8) -> std::result::Result<Self, Self::Error> {
        GpioPin::new(pin_num)
    }
}

// --- Typed Pin Helpers ---
impl<T: ByteTransport> Mcp23017<T> {
    /// Sets the direction (Input or Output) of a single pin.
    pub fn gpio_set_direction(
        &mut self,
        pin: GpioPin,
        direction: GpioDirection,
    ) -> Result<(), T::Error> {
        self.set_bit(RegisterGroup::Direction, pin.number(), direction.bit())
    }
    /// Gets the configured direction of a single pin.
    pub fn gpio_get_direction(&mut self, pin: GpioPin) -> Result<GpioDirection, T::Error> {
        self.get_bit(RegisterGroup::Direction, pin.number())
            .map(GpioDirection::from_bit)
    }
    /// Drives an output pin by updating its output latch bit.
    pub fn gpio_write(&mut self, pin: GpioPin, level: GpioLevel) -> Result<(), T::Error> {
        self.set_bit(RegisterGroup::OutputLatch, pin.number(), level.bit())
    }
    /// Reads the current level of a single pin (after input polarity is applied).
    pub fn gpio_read(&mut self, pin: GpioPin) -> Result<GpioLevel, T::Error> {
        let level = self
            .get_bit(RegisterGroup::InputLevel, pin.number())
            .map(GpioLevel::from_bit)?;
        trace!("Read pin {}: {:?}", pin.number(), level);
        Ok(level)
    }
    /// Enables or disables the weak pull-up of a single pin.
    pub fn gpio_set_pull(&mut self, pin: GpioPin, pull: GpioPull) -> Result<(), T::Error> {
        self.set_bit(RegisterGroup::PullUp, pin.number(), pull == GpioPull::Up)
    }
    pub fn gpio_get_pull(&mut self, pin: GpioPin) -> Result<GpioPull, T::Error> {
        Ok(if self.get_bit(RegisterGroup::PullUp, pin.number())? {
            GpioPull::Up
        } else {
            GpioPull::None
        })
    }
    /// Sets the input polarity of a single pin.
    pub fn gpio_set_polarity(
        &mut self,
        pin: GpioPin,
        polarity: GpioPolarity,
    ) -> Result<(), T::Error> {
        self.set_bit(
            RegisterGroup::Polarity,
            pin.number(),
            polarity == GpioPolarity::Inverted,
        )
    }
    pub fn gpio_get_polarity(&mut self, pin: GpioPin) -> Result<GpioPolarity, T::Error> {
        Ok(if self.get_bit(RegisterGroup::Polarity, pin.number())? {
            GpioPolarity::Inverted
        } else {
            GpioPolarity::Normal
        })
    }

    // --- Bulk Pin Helpers ---
    /// Reads the level of all 16 pins as a group word.
    pub fn gpio_read_all(&mut self) -> Result<u16, T::Error> {
        self.get_word(RegisterGroup::InputLevel)
    }
    /// Writes all 16 output latches at once.
    pub fn gpio_write_all(&mut self, levels: u16) -> Result<(), T::Error> {
        self.set_word(RegisterGroup::OutputLatch, levels)
    }
}
