//! Internal constants, register addresses, and bit definitions.

// --- Bus Addressing ---
// Fixed prefix 0b0100 followed by the A2 A1 A0 select pins.
/// Lowest valid MCP23017 bus address (A2=A1=A0=0).
pub const MIN_ADDRESS: u8 = 0x20;
/// Highest valid MCP23017 bus address (A2=A1=A0=1).
pub const MAX_ADDRESS: u8 = 0x27;
/// Address of an expander with all select pins tied low.
pub const DEFAULT_ADDRESS: u8 = MIN_ADDRESS;

/// Number of logical pins across both banks.
pub const PIN_COUNT: u8 = 16;
/// Number of pins in a single bank.
pub const PINS_PER_BANK: u8 = 8;

// --- Register Map (IOCON.BANK = 0, paired A/B addressing) ---
pub mod reg {
    pub const IODIRA: u8 = 0x00; // I/O direction, 1 = input
    pub const IODIRB: u8 = 0x01;
    pub const IPOLA: u8 = 0x02; // Input polarity
    pub const IPOLB: u8 = 0x03;
    pub const GPINTENA: u8 = 0x04; // Interrupt-on-change enable
    pub const GPINTENB: u8 = 0x05;
    pub const DEFVALA: u8 = 0x06; // Default compare value
    pub const DEFVALB: u8 = 0x07;
    pub const INTCONA: u8 = 0x08; // Interrupt control
    pub const INTCONB: u8 = 0x09;
    pub const IOCONA: u8 = 0x0A; // Expander configuration (same register at both addresses)
    pub const IOCONB: u8 = 0x0B;
    pub const GPPUA: u8 = 0x0C; // Pull-up enable
    pub const GPPUB: u8 = 0x0D;
    pub const INTFA: u8 = 0x0E; // Interrupt flag (read-only)
    pub const INTFB: u8 = 0x0F;
    pub const INTCAPA: u8 = 0x10; // Interrupt capture (read-only)
    pub const INTCAPB: u8 = 0x11;
    pub const GPIOA: u8 = 0x12; // Pin level (writes go to OLAT, not used here)
    pub const GPIOB: u8 = 0x13;
    pub const OLATA: u8 = 0x14; // Output latch
    pub const OLATB: u8 = 0x15;
}

// --- IOCON Bits ---
pub mod iocon {
    /// Register addressing mode. The paired register map requires this to stay 0.
    pub const BANK: u8 = 1 << 7;
    pub const MIRROR: u8 = 1 << 6;
    pub const SEQOP: u8 = 1 << 5;
    pub const DISSLW: u8 = 1 << 4;
    pub const HAEN: u8 = 1 << 3;
    pub const ODR: u8 = 1 << 2;
    pub const INTPOL: u8 = 1 << 1;
    // Bit 0 unimplemented, reads as 0
}
