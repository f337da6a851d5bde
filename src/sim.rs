//! In-memory board for host builds.
//!
//! Backs the `demo-app` binary and the integration tests: every [`hal`]
//! capability gets a fake that records what the console did to it.
//!
//! [`hal`]: crate::hal

use std::collections::VecDeque;
use std::fmt::{self, Write};

use log::info;

use crate::hal::{ConsolePort, Delay, DemoRunner, IdentReader, IrqController, Register, Registers};

/// One recorded register access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegOp {
    Read(Register),
    Write(Register, u32),
}

/// Array-backed register file with an access log.
#[derive(Default)]
pub struct SimRegisters {
    leds: u32,
    dac_data: u32,
    dac_data_a: u32,
    dac_data_b: u32,
    dac_cw: u32,
    /// Latched when something writes 1 to the reset control register.
    pub reset_requested: bool,
    /// Every read and write, in order.
    pub ops: Vec<RegOp>,
}

impl SimRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload the DAC registers, for tests that care about values.
    pub fn with_dac(data: u32, data_a: u32, data_b: u32, cw: u32) -> Self {
        Self {
            dac_data: data,
            dac_data_a: data_a,
            dac_data_b: data_b,
            dac_cw: cw,
            ..Self::default()
        }
    }
}

impl Registers for SimRegisters {
    fn read(&mut self, reg: Register) -> u32 {
        self.ops.push(RegOp::Read(reg));
        match reg {
            Register::CtrlReset => 0,
            Register::LedsOut => self.leds,
            Register::DacData => self.dac_data,
            Register::DacDataA => self.dac_data_a,
            Register::DacDataB => self.dac_data_b,
            Register::DacCw => self.dac_cw,
        }
    }

    fn write(&mut self, reg: Register, value: u32) {
        self.ops.push(RegOp::Write(reg, value));
        match reg {
            Register::CtrlReset => {
                if value & 1 != 0 {
                    self.reset_requested = true;
                }
            }
            Register::LedsOut => self.leds = value,
            Register::DacData => self.dac_data = value,
            Register::DacDataA => self.dac_data_a = value,
            Register::DacDataB => self.dac_data_b = value,
            Register::DacCw => self.dac_cw = value,
        }
    }
}

/// Delay that records every wait; sleeps for real only when asked to.
#[derive(Default)]
pub struct SimDelay {
    sleep: bool,
    /// Requested waits, in ms.
    pub waits: Vec<u32>,
}

impl SimDelay {
    /// Recording only, returns immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Actually sleep, for the interactive demo.
    pub fn sleeping() -> Self {
        Self {
            sleep: true,
            waits: Vec::new(),
        }
    }
}

impl Delay for SimDelay {
    fn busy_wait_ms(&mut self, ms: u32) {
        self.waits.push(ms);
        if self.sleep {
            std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
        }
    }
}

/// Interrupt controller that just remembers its settings.
#[derive(Default)]
pub struct SimIrq {
    pub mask: Option<u32>,
    pub ie: bool,
}

impl SimIrq {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IrqController for SimIrq {
    fn set_mask(&mut self, mask: u32) {
        self.mask = Some(mask);
    }

    fn set_ie(&mut self, enabled: bool) {
        self.ie = enabled;
    }
}

/// Fixed identity string.
#[derive(Default)]
pub struct SimIdent {
    ident: String,
}

impl SimIdent {
    pub fn new(ident: &str) -> Self {
        Self {
            ident: ident.to_string(),
        }
    }

    /// A board with no identity configured.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl IdentReader for SimIdent {
    fn read_ident(&mut self, buf: &mut [u8]) -> usize {
        let bytes = self.ident.as_bytes();
        let len = bytes.len().min(buf.len());
        buf[..len].copy_from_slice(&bytes[..len]);
        len
    }
}

/// Stand-in for the external demo routines.
#[derive(Default)]
pub struct SimDemos {
    /// How many times the donut ran.
    pub donut_runs: usize,
}

impl SimDemos {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DemoRunner for SimDemos {
    fn donut(&mut self, out: &mut dyn fmt::Write) {
        self.donut_runs += 1;
        info!("donut demo invoked");
        let _ = writeln!(out, "(the spinning donut lives on real hardware)");
    }
}

/// Console port fed from a pre-scripted byte sequence, capturing all
/// output. The integration tests drive the full service loop with this.
#[derive(Default)]
pub struct ScriptedPort {
    input: VecDeque<u8>,
    /// Everything the console wrote, echo and command output alike.
    pub out: String,
}

impl ScriptedPort {
    pub fn new(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            out: String::new(),
        }
    }

    /// True once the script is exhausted.
    pub fn drained(&self) -> bool {
        self.input.is_empty()
    }
}

impl Write for ScriptedPort {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}

impl ConsolePort for ScriptedPort {
    fn poll_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }
}
