//! Command handlers

use core::fmt::Write;

use log::debug;

use super::console::VERSION;
use super::parser::next_token;
use crate::hal::{Board, Features, Register, IDENT_SIZE};

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
    /// Hardware blocks this command needs; dispatch and the help
    /// listing skip it when the board lacks them.
    pub requires: Features,
    pub run: fn(&mut Board<'_>, &mut dyn Write),
}

/// All commands, in dispatch priority order
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "help", brief: "Show this command", requires: Features::empty(), run: cmd_help },
    CommandDescriptor { name: "reboot", brief: "Reboot CPU", requires: Features::empty(), run: cmd_reboot },
    CommandDescriptor { name: "led", brief: "Led demo", requires: Features::LEDS, run: cmd_led },
    CommandDescriptor { name: "donut", brief: "Spinning Donut demo", requires: Features::empty(), run: cmd_donut },
    CommandDescriptor { name: "ident", brief: "Identifier of the system", requires: Features::empty(), run: cmd_ident },
    CommandDescriptor { name: "dwa", brief: "DAC write a (+1)", requires: Features::empty(), run: cmd_dac_write_a },
    CommandDescriptor { name: "dwb", brief: "DAC write b (x2)", requires: Features::empty(), run: cmd_dac_write_b },
    CommandDescriptor { name: "dwcw", brief: "DAC write cw (toggles)", requires: Features::empty(), run: cmd_dac_write_cw },
    CommandDescriptor { name: "dr", brief: "DAC read all", requires: Features::empty(), run: cmd_dac_read_all },
];

/// Dispatch a completed line: exact match on the first token, first hit
/// wins. Unknown commands produce no console output at all; the caller
/// redraws the prompt either way.
pub fn dispatch(line: &str, board: &mut Board<'_>, out: &mut dyn Write) {
    let mut rest = line;
    let token = next_token(&mut rest);
    if token.is_empty() {
        return;
    }

    let hit = COMMANDS
        .iter()
        .find(|c| c.name == token && board.features.contains(c.requires));

    match hit {
        Some(cmd) => {
            debug!("command: {}", cmd.name);
            (cmd.run)(board, out);
        }
        None => debug!("unknown command: {}", token),
    }
}

/// Print the banner and command list for the enabled feature set.
pub fn print_help(features: Features, out: &mut dyn Write) {
    let _ = writeln!(out, "\nSoC minimal demo app v{}\n", VERSION);
    let _ = writeln!(out, "Available commands:");
    for cmd in COMMANDS {
        if features.contains(cmd.requires) {
            let _ = writeln!(out, "{:<19}- {}", cmd.name, cmd.brief);
        }
    }
}

// --- Command Implementations ---

fn cmd_help(board: &mut Board<'_>, out: &mut dyn Write) {
    print_help(board.features, out);
}

fn cmd_reboot(board: &mut Board<'_>, _out: &mut dyn Write) {
    // The reset takes effect in hardware; nothing after this write is
    // ever observed on a real board.
    board.regs.write(Register::CtrlReset, 1);
}

fn cmd_led(board: &mut Board<'_>, out: &mut dyn Write) {
    let _ = writeln!(out, "Led demo...");

    let _ = writeln!(out, "Counter mode...");
    for i in 0..32 {
        board.regs.write(Register::LedsOut, i);
        board.delay.busy_wait_ms(100);
    }

    let _ = writeln!(out, "Shift mode...");
    for i in 0..4 {
        board.regs.write(Register::LedsOut, 1 << i);
        board.delay.busy_wait_ms(200);
    }
    for i in 0..4 {
        board.regs.write(Register::LedsOut, 1 << (3 - i));
        board.delay.busy_wait_ms(200);
    }

    let _ = writeln!(out, "Dance mode...");
    for _ in 0..4 {
        board.regs.write(Register::LedsOut, 0x55);
        board.delay.busy_wait_ms(200);
        board.regs.write(Register::LedsOut, 0xAA);
        board.delay.busy_wait_ms(200);
    }
}

fn cmd_donut(board: &mut Board<'_>, out: &mut dyn Write) {
    let _ = writeln!(out, "Donut demo...");
    board.demos.donut(out);
}

fn cmd_ident(board: &mut Board<'_>, out: &mut dyn Write) {
    let mut buffer = [0u8; IDENT_SIZE];
    let len = board.ident.read_ident(&mut buffer);
    let ident = core::str::from_utf8(&buffer[..len]).unwrap_or("");
    let _ = writeln!(out, "Ident: {}", if ident.is_empty() { "-" } else { ident });
    let _ = writeln!(out, "NICK ER SEJ");
}

/// Print every DAC register. Deliberately re-reads all four, including
/// ones a caller just wrote.
fn dac_read_all(board: &mut Board<'_>, out: &mut dyn Write) {
    let data = board.regs.read(Register::DacData);
    let data_a = board.regs.read(Register::DacDataA);
    let data_b = board.regs.read(Register::DacDataB);
    let cw = board.regs.read(Register::DacCw);
    let _ = writeln!(out, "Data:\t\t0x{:08x}", data);
    let _ = writeln!(out, "Data A:\t\t0x{:08x}", data_a);
    let _ = writeln!(out, "Data B:\t\t0x{:08x}", data_b);
    let _ = writeln!(out, "Data CW:\t0x{:08x}", cw);
}

fn cmd_dac_write_a(board: &mut Board<'_>, out: &mut dyn Write) {
    let a = board.regs.read(Register::DacDataA);
    board.regs.write(Register::DacDataA, a.wrapping_add(1));
    dac_read_all(board, out);
}

fn cmd_dac_write_b(board: &mut Board<'_>, out: &mut dyn Write) {
    let a = board.regs.read(Register::DacDataA);
    board.regs.write(Register::DacDataB, a << 1);
    dac_read_all(board, out);
}

fn cmd_dac_write_cw(board: &mut Board<'_>, out: &mut dyn Write) {
    let cw = board.regs.read(Register::DacCw);
    board.regs.write(Register::DacCw, !cw);
    dac_read_all(board, out);
}

fn cmd_dac_read_all(board: &mut Board<'_>, out: &mut dyn Write) {
    dac_read_all(board, out);
}
