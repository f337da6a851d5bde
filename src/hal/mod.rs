//! Hardware capability traits consumed by the console core.
//!
//! The SoC side (UART driver, CSR accessors, interrupt controller, demo
//! routines) lives outside this crate. The core only needs the call
//! contracts below; a target port implements them over its generated
//! register accessors, and the host simulator implements them in memory.

use core::fmt::Write;

use bitflags::bitflags;

/// Identity string capacity in bytes.
pub const IDENT_SIZE: usize = 256;

bitflags! {
    /// Hardware blocks present on the running board.
    ///
    /// Feature-gated commands are dispatched and listed only when their
    /// block is present.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Features: u32 {
        /// LED output register exists.
        const LEDS = 1 << 0;
        /// CPU has an interrupt line to unmask at startup.
        const CPU_INTERRUPT = 1 << 1;
    }
}

/// Named 32-bit registers the console pokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Reset control; writing 1 resets the SoC.
    CtrlReset,
    /// LED output pattern.
    LedsOut,
    /// DAC data.
    DacData,
    /// DAC data channel A.
    DacDataA,
    /// DAC data channel B.
    DacDataB,
    /// DAC control word.
    DacCw,
}

/// Serial console device: echo/output sink plus non-blocking byte input.
pub trait ConsolePort: Write {
    /// One-time device setup before the service loop starts.
    fn init(&mut self) {}

    /// Fetch one input byte if available. Never blocks.
    fn poll_byte(&mut self) -> Option<u8>;
}

/// Named register file access. Accessors cannot fail; hardware-level
/// errors are unmodeled.
pub trait Registers {
    fn read(&mut self, reg: Register) -> u32;
    fn write(&mut self, reg: Register, value: u32);
}

/// Synchronous, non-yielding delay.
pub trait Delay {
    fn busy_wait_ms(&mut self, ms: u32);
}

/// Interrupt controller, touched once at startup.
pub trait IrqController {
    fn set_mask(&mut self, mask: u32);
    fn set_ie(&mut self, enabled: bool);
}

/// Opaque demo routines. May block until done or loop forever.
pub trait DemoRunner {
    fn donut(&mut self, out: &mut dyn Write);
}

/// System identity string source.
pub trait IdentReader {
    /// Fill `buf` with the identity string, returning the number of
    /// bytes written (at most [`IDENT_SIZE`]).
    fn read_ident(&mut self, buf: &mut [u8]) -> usize;
}

/// Everything a command handler may touch, borrowed for one dispatch.
pub struct Board<'a> {
    pub regs: &'a mut dyn Registers,
    pub delay: &'a mut dyn Delay,
    pub irq: &'a mut dyn IrqController,
    pub demos: &'a mut dyn DemoRunner,
    pub ident: &'a mut dyn IdentReader,
    pub features: Features,
}
