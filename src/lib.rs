//! # soc-demo-app
//!
//! Minimal interactive firmware shell for a soft-SoC demo board.
//!
//! ## Architecture
//!
//! The console core is a single cooperative polling loop:
//! - [`LineEditor`] turns non-blocking UART bytes into completed lines
//! - [`console::parser`] splits a line into tokens
//! - [`console::commands`] maps the first token to a hardware-poking handler
//!
//! Everything hardware-shaped (UART, register file, interrupt controller,
//! demo routines) is injected through the [`hal`] traits; the core never
//! touches a device directly. The `std` feature adds in-memory fakes
//! ([`sim`]) and the host demo binary.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod console;
pub mod hal;
#[cfg(feature = "std")]
pub mod sim;

pub use console::{Console, LineEditor};
pub use hal::{Board, ConsolePort, Delay, DemoRunner, Features, IdentReader, IrqController, Register, Registers};
