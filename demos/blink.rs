//! Blinks bank A of an expander while watching bank B for button presses.
//!
//! Runs against a simulated expander so it works without hardware; swap
//! `SimulatedBus` for `I2cTransport::new(i2c)` on a real board.

use log::info;
use mcp23017_expander::{
    ByteTransport, GpioLevel, GpioPin, Mcp23017, RegisterGroup, Result, DEFAULT_ADDRESS,
};
use std::{thread, time::Duration};

/// Register file that answers at one bus address and never fails.
struct SimulatedBus {
    registers: [u8; 0x16],
}

impl ByteTransport for SimulatedBus {
    type Error = std::convert::Infallible;

    fn write_then_read(
        &mut self,
        _bus_address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> std::result::Result<(), Self::Error> {
        for (offset, byte) in buffer.iter_mut().enumerate() {
            *byte = self.registers[register as usize + offset];
        }
        Ok(())
    }

    fn write(
        &mut self,
        _bus_address: u8,
        register: u8,
        data: &[u8],
    ) -> std::result::Result<(), Self::Error> {
        let start = register as usize;
        self.registers[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }
}

fn main() -> Result<(), std::convert::Infallible> {
    env_logger::init();
    let bus = SimulatedBus {
        registers: [0; 0x16],
    };
    let mut expander = Mcp23017::initialise(bus, DEFAULT_ADDRESS)?;

    // Bank A outputs, bank B inputs with pull-ups
    expander.set_word(RegisterGroup::Direction, 0x00FF)?;
    expander.set_word(RegisterGroup::PullUp, 0x00FF)?;

    let button = GpioPin::new(8)?;
    for step in 0..8u8 {
        let led = GpioPin::new(step)?;
        expander.gpio_write(led, GpioLevel::High)?;
        thread::sleep(Duration::from_millis(100));
        expander.gpio_write(led, GpioLevel::Low)?;

        let pressed = expander.gpio_read(button)? == GpioLevel::Low;
        info!("Step {}: button {}", step, if pressed { "pressed" } else { "released" });
    }
    println!(
        "Output latches: 0x{:04X}",
        expander.get_word(RegisterGroup::OutputLatch)?
    );
    Ok(())
}
