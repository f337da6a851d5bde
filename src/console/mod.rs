//! Serial console for the soft-SoC demo board
//!
//! Lazy polling from the main loop - no dedicated task.
//! Zero heap allocation - all fixed buffers.

pub mod commands;
pub mod console;
pub mod editor;
pub mod parser;

pub use commands::{dispatch, print_help, COMMANDS};
pub use console::{Console, PROMPT, VERSION};
pub use editor::{LineEditor, LINE_SIZE};
pub use parser::next_token;
