//! Line editor for console input
//!
//! A full line arrives byte-by-byte across many polls, so the buffer and
//! cursor persist between calls. The editor echoes every accepted
//! keystroke back to the port.

use core::fmt::Write;

/// Line buffer capacity. Lines are capped one short of this, matching
/// the reserved terminator slot on the original target.
pub const LINE_SIZE: usize = 64;

/// Line input editor with backspace handling
pub struct LineEditor {
    buf: [u8; LINE_SIZE],
    cursor: usize,
    /// Length of the last completed line.
    line_len: usize,
}

impl LineEditor {
    /// Create empty editor
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            cursor: 0,
            line_len: 0,
        }
    }

    /// Feed one input byte, echoing to `echo`.
    ///
    /// Returns true when the byte completed a line; fetch it with
    /// [`line`](Self::line). All other branches return false.
    pub fn feed(&mut self, byte: u8, echo: &mut dyn Write) -> bool {
        match byte {
            // Backspace / DEL
            0x7F | 0x08 => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    // Echo: backspace, space, backspace
                    let _ = echo.write_str("\x08 \x08");
                }
                false
            }

            // Bell: no echo, no state change
            0x07 => false,

            // Enter
            b'\r' | b'\n' => {
                let _ = echo.write_str("\n");
                self.line_len = self.cursor;
                self.cursor = 0;
                true
            }

            // Anything else is line content. A full buffer drops the
            // byte silently, without echo.
            _ => {
                if self.cursor < LINE_SIZE - 1 {
                    let _ = echo.write_char(byte as char);
                    self.buf[self.cursor] = byte;
                    self.cursor += 1;
                }
                false
            }
        }
    }

    /// The most recently completed line.
    pub fn line(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.line_len]).unwrap_or("")
    }

    /// Bytes currently pending in the buffer.
    pub fn pending(&self) -> usize {
        self.cursor
    }

    /// Check if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
