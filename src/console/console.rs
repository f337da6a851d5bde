//! Console service loop: poll, edit, dispatch, prompt

use log::{debug, info};

use super::commands::{dispatch, print_help};
use super::editor::LineEditor;
use crate::hal::{Board, ConsolePort, Features};

/// Crate version, shown in the help banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prompt string, green and bold on ANSI terminals.
pub const PROMPT: &str = "\x1b[92;1msoc-demo-app\x1b[0m> ";

/// Console state: one line editor, owned by whoever runs the loop.
pub struct Console {
    editor: LineEditor,
}

impl Console {
    /// Create new console
    pub const fn new() -> Self {
        Self {
            editor: LineEditor::new(),
        }
    }

    /// One service iteration: poll at most one byte, feed the editor,
    /// and on a completed line dispatch it and redraw the prompt.
    ///
    /// Returns true when a line was dispatched this iteration.
    pub fn service<P: ConsolePort>(&mut self, port: &mut P, board: &mut Board<'_>) -> bool {
        let Some(byte) = port.poll_byte() else {
            return false;
        };

        if !self.editor.feed(byte, port) {
            return false;
        }

        let line = self.editor.line();
        debug!("line: {:?}", line);
        dispatch(line, board, port);
        Self::print_prompt(port);
        true
    }

    /// Print the prompt
    pub fn print_prompt(port: &mut impl ConsolePort) {
        let _ = port.write_str(PROMPT);
    }

    /// Run the console forever: interrupt setup, port init, banner,
    /// then the polling service loop. Only a reset leaves this.
    pub fn run<P: ConsolePort>(&mut self, port: &mut P, board: &mut Board<'_>) -> ! {
        if board.features.contains(Features::CPU_INTERRUPT) {
            board.irq.set_mask(0);
            board.irq.set_ie(true);
        }

        port.init();
        info!("console up, features {:?}", board.features);

        print_help(board.features, port);
        Self::print_prompt(port);

        loop {
            self.service(port, board);
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
