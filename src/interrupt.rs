//! Interrupt-on-change configuration and status for MCP23017 devices.
//!
//! Only register-level configuration and status reads live here; servicing
//! the INTA/INTB lines is up to the application.

use crate::device::Mcp23017;
use crate::error::Result;
use crate::gpio::{GpioLevel, GpioPin};
use crate::register::RegisterGroup;
use crate::transport::ByteTransport;
use log::{debug, trace};

/// What a pin's level is compared against to raise an interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptMode {
    /// Interrupt whenever the pin changes (INTCON bit 0).
    OnChange,
    /// Interrupt while the pin differs from the given level (INTCON bit 1, DEFVAL).
    CompareToDefault(GpioLevel),
}

/// Snapshot of the interrupt flag and capture registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterruptStatus {
    /// Pins that caused the pending interrupt, as a group word.
    pub flags: u16,
    /// Pin levels captured when the interrupt occurred, as a group word.
    pub captured: u16,
}

impl InterruptStatus {
    /// Whether `pin` is flagged.
    pub fn triggered(&self, pin: GpioPin) -> bool {
        self.flags & pin.word_mask() != 0
    }

    /// Captured level of `pin` at interrupt time.
    pub fn captured_level(&self, pin: GpioPin) -> GpioLevel {
        GpioLevel::from(self.captured & pin.word_mask() != 0)
    }

    /// Flagged pins in ascending order.
    pub fn pins(&self) -> impl Iterator<Item = GpioPin> + '_ {
        GpioPin::all().filter(move |pin| self.triggered(*pin))
    }
}

impl<T: ByteTransport> Mcp23017<T> {
    // --- GPIO Interrupt Handling ---
    /// Configures interrupt-on-change for a pin. `None` disables it.
    ///
    /// The compare settings are written before the enable bit so the pin never
    /// fires with a stale configuration.
    pub fn gpio_configure_interrupt(
        &mut self,
        pin: GpioPin,
        mode: Option<InterruptMode>,
    ) -> Result<(), T::Error> {
        debug!("Configuring interrupt for pin {}: {:?}", pin.number(), mode);
        let Some(mode) = mode else {
            return self.set_bit(RegisterGroup::InterruptEnable, pin.number(), false);
        };
        match mode {
            InterruptMode::OnChange => {
                self.set_bit(RegisterGroup::InterruptControl, pin.number(), false)?;
            }
            InterruptMode::CompareToDefault(level) => {
                self.set_bit(RegisterGroup::DefaultValue, pin.number(), level.bit())?;
                self.set_bit(RegisterGroup::InterruptControl, pin.number(), true)?;
            }
        }
        self.set_bit(RegisterGroup::InterruptEnable, pin.number(), true)
    }

    /// Reads back the interrupt configuration of a pin.
    pub fn gpio_interrupt_mode(&mut self, pin: GpioPin) -> Result<Option<InterruptMode>, T::Error> {
        if !self.get_bit(RegisterGroup::InterruptEnable, pin.number())? {
            return Ok(None);
        }
        if !self.get_bit(RegisterGroup::InterruptControl, pin.number())? {
            return Ok(Some(InterruptMode::OnChange));
        }
        let level = self.get_bit(RegisterGroup::DefaultValue, pin.number())?;
        Ok(Some(InterruptMode::CompareToDefault(GpioLevel::from(level))))
    }

    /// Reads the interrupt flags, then the captured levels.
    ///
    /// Reading the capture registers clears the pending interrupt in hardware,
    /// so the flags are read first.
    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, T::Error> {
        let flags = self.get_word(RegisterGroup::InterruptFlag)?;
        let captured = self.get_word(RegisterGroup::InterruptCapture)?;
        trace!(
            "Interrupt status: flags=0x{:04X}, captured=0x{:04X}",
            flags,
            captured
        );
        Ok(InterruptStatus { flags, captured })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_pin_helpers() {
        // Pin 1 (bank A bit 1) and pin 9 (bank B bit 1) flagged
        let status = InterruptStatus {
            flags: 0x0202,
            captured: 0x0200,
        };
        let pins: Vec<u8> = status.pins().map(|p| p.number()).collect();
        assert_eq!(pins, vec![1, 9]);
        assert_eq!(
            status.captured_level(GpioPin::new(1).unwrap()),
            GpioLevel::High
        );
        assert_eq!(
            status.captured_level(GpioPin::new(9).unwrap()),
            GpioLevel::Low
        );
        assert!(!status.triggered(GpioPin::new(0).unwrap()));
    }

    #[test]
    fn test_empty_status() {
        assert_eq!(InterruptStatus::default().pins().count(), 0);
    }
}
