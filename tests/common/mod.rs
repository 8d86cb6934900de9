//! In-memory MCP23017 register file used as a test transport.
#![allow(dead_code)]

use mcp23017_expander::{ByteTransport, Mcp23017};

pub const ADDR: u8 = 0x20;

const REG_IODIRA: u8 = 0x00;
const REG_IODIRB: u8 = 0x01;
const REG_IOCONA: u8 = 0x0A;
const REG_IOCONB: u8 = 0x0B;
const REG_INTFA: u8 = 0x0E;
const REG_INTFB: u8 = 0x0F;
const REG_INTCAPA: u8 = 0x10;
const REG_INTCAPB: u8 = 0x11;
const REG_GPIOA: u8 = 0x12;
const REG_GPIOB: u8 = 0x13;
const REG_OLATA: u8 = 0x14;
const REG_OLATB: u8 = 0x15;
const REGISTER_COUNT: usize = 0x16;

/// Errors the fake bus can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeError {
    /// Nobody answered at the bus address.
    Nack,
    /// Injected failure.
    Timeout,
}

/// One recorded bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Read { register: u8, value: u8 },
    Write { register: u8, value: u8 },
}

/// Simulated expander: register file with reset values and hardware read-only rules.
#[derive(Debug)]
pub struct FakeExpander {
    address: u8,
    registers: [u8; REGISTER_COUNT],
    ops: Vec<Op>,
    fail_next: bool,
    ready: bool,
}

impl FakeExpander {
    pub fn new(address: u8) -> Self {
        let mut registers = [0u8; REGISTER_COUNT];
        // Power-on reset: all pins inputs
        registers[REG_IODIRA as usize] = 0xFF;
        registers[REG_IODIRB as usize] = 0xFF;
        Self {
            address,
            registers,
            ops: Vec::new(),
            fail_next: false,
            ready: true,
        }
    }

    pub fn not_ready(address: u8) -> Self {
        Self {
            ready: false,
            ..Self::new(address)
        }
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    /// Pokes a register directly, as if another bus master had written it.
    pub fn poke(&mut self, register: u8, value: u8) {
        match register {
            REG_IOCONA | REG_IOCONB => {
                self.registers[REG_IOCONA as usize] = value;
                self.registers[REG_IOCONB as usize] = value;
            }
            _ => self.registers[register as usize] = value,
        }
    }

    /// Sets the external pin levels seen by the GPIO registers.
    pub fn drive_pins(&mut self, word: u16) {
        self.registers[REG_GPIOA as usize] = (word >> 8) as u8;
        self.registers[REG_GPIOB as usize] = word as u8;
    }

    /// Latches an interrupt as the hardware would.
    pub fn raise_interrupt(&mut self, flags: u16, captured: u16) {
        self.registers[REG_INTFA as usize] = (flags >> 8) as u8;
        self.registers[REG_INTFB as usize] = flags as u8;
        self.registers[REG_INTCAPA as usize] = (captured >> 8) as u8;
        self.registers[REG_INTCAPB as usize] = captured as u8;
    }

    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn transactions(&self) -> usize {
        self.ops.len()
    }

    pub fn reads(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Read { .. }))
            .count()
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Write { register, value } => Some((register, value)),
                Op::Read { .. } => None,
            })
            .collect()
    }

    fn check(&mut self, bus_address: u8, register: u8) -> Result<(), FakeError> {
        if bus_address != self.address {
            return Err(FakeError::Nack);
        }
        if std::mem::take(&mut self.fail_next) {
            return Err(FakeError::Timeout);
        }
        assert!(
            (register as usize) < REGISTER_COUNT,
            "register 0x{:02X} out of range",
            register
        );
        Ok(())
    }
}

impl ByteTransport for FakeExpander {
    type Error = FakeError;

    fn write_then_read(
        &mut self,
        bus_address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), FakeError> {
        self.check(bus_address, register)?;
        for (offset, byte) in buffer.iter_mut().enumerate() {
            let reg = register + offset as u8;
            *byte = self.registers[reg as usize];
            self.ops.push(Op::Read {
                register: reg,
                value: *byte,
            });
            // Reading capture or port clears the interrupt condition
            match reg {
                REG_INTCAPA | REG_GPIOA => self.registers[REG_INTFA as usize] = 0,
                REG_INTCAPB | REG_GPIOB => self.registers[REG_INTFB as usize] = 0,
                _ => {}
            }
        }
        Ok(())
    }

    fn write(&mut self, bus_address: u8, register: u8, data: &[u8]) -> Result<(), FakeError> {
        self.check(bus_address, register)?;
        for (offset, &value) in data.iter().enumerate() {
            let reg = register + offset as u8;
            self.ops.push(Op::Write {
                register: reg,
                value,
            });
            match reg {
                REG_INTFA | REG_INTFB | REG_INTCAPA | REG_INTCAPB => {} // ignored by hardware
                REG_GPIOA => self.registers[REG_OLATA as usize] = value,
                REG_GPIOB => self.registers[REG_OLATB as usize] = value,
                // One physical register at two addresses
                REG_IOCONA | REG_IOCONB => {
                    self.registers[REG_IOCONA as usize] = value;
                    self.registers[REG_IOCONB as usize] = value;
                }
                _ => self.registers[reg as usize] = value,
            }
        }
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Device at [`ADDR`] over a fresh fake, with the operation log empty.
pub fn new_device() -> Mcp23017<FakeExpander> {
    init_logger();
    Mcp23017::initialise(FakeExpander::new(ADDR), ADDR).expect("valid address")
}
