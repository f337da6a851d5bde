//! demo-app - host entry point
//!
//! Runs the console core against the in-memory board from [`sim`],
//! wired to stdin/stdout. On real hardware the same core runs against
//! the SoC's UART and CSR accessors instead; here a simulated reset or
//! stdin EOF ends the process.
//!
//! A cooked-mode terminal line-buffers and echoes by itself, so for the
//! byte-exact editor behavior pipe input in (`printf 'dr\n' | demo-app`).
//!
//! [`sim`]: soc_demo_app::sim

use std::io::{Read, Write as _};

use log::info;

use soc_demo_app::console::print_help;
use soc_demo_app::sim::{SimDelay, SimDemos, SimIdent, SimIrq, SimRegisters};
use soc_demo_app::{Board, Console, ConsolePort, Features};

/// Console port over the process stdio.
struct StdioPort {
    stdin: std::io::Stdin,
    eof: bool,
}

impl StdioPort {
    fn new() -> Self {
        Self {
            stdin: std::io::stdin(),
            eof: false,
        }
    }
}

impl core::fmt::Write for StdioPort {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let mut stdout = std::io::stdout();
        stdout.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)?;
        stdout.flush().map_err(|_| core::fmt::Error)
    }
}

impl ConsolePort for StdioPort {
    /// Blocking single-byte read. The firmware loop polls a UART status
    /// bit instead; blocking is fine for the host demo.
    fn poll_byte(&mut self) -> Option<u8> {
        if self.eof {
            return None;
        }
        let mut byte = [0u8; 1];
        match self.stdin.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => {
                self.eof = true;
                None
            }
        }
    }
}

fn main() {
    env_logger::init();

    let features = Features::LEDS | Features::CPU_INTERRUPT;
    let mut regs = SimRegisters::new();
    let mut delay = SimDelay::sleeping();
    let mut irq = SimIrq::new();
    let mut demos = SimDemos::new();
    let mut ident = SimIdent::new("soc-demo-app simulated board");
    let mut port = StdioPort::new();

    let mut console = Console::new();

    // Same startup sequence as Console::run, inlined so the loop can
    // watch for the simulated reset and for EOF.
    {
        let mut board = Board {
            regs: &mut regs,
            delay: &mut delay,
            irq: &mut irq,
            demos: &mut demos,
            ident: &mut ident,
            features,
        };
        if board.features.contains(Features::CPU_INTERRUPT) {
            board.irq.set_mask(0);
            board.irq.set_ie(true);
        }
    }
    port.init();
    print_help(features, &mut port);
    Console::print_prompt(&mut port);

    loop {
        let mut board = Board {
            regs: &mut regs,
            delay: &mut delay,
            irq: &mut irq,
            demos: &mut demos,
            ident: &mut ident,
            features,
        };
        console.service(&mut port, &mut board);

        if regs.reset_requested {
            info!("reset requested, leaving the simulation");
            break;
        }
        if port.eof {
            break;
        }
    }
}
