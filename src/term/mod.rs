//! Terminal backend abstraction
//!
//! The editor draws through [`TerminalBackend`] only, so the interactive loop
//! runs the same against crossterm and against the scripted mock in tests.
//!
//! ## term/ Invariants
//!
//! - Raw mode is enabled before the first key is read.
//! - `deinit` restores the terminal on every exit path of the session.
//! - Terminal code never depends on editor internals.

use crate::key::Key;

/// Terminal size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Operations the editor needs from a terminal
pub trait TerminalBackend {
    /// Enter raw mode on the alternate screen
    fn init(&mut self) -> Result<(), String>;

    /// Leave raw mode and the alternate screen; never fails
    fn deinit(&mut self);

    /// Block until the next key press or resize
    fn read_key(&mut self) -> Result<Key, String>;

    fn write(&mut self, bytes: &[u8]) -> Result<(), String>;

    fn get_size(&self) -> Result<Size, String>;

    /// Clear everything and home the cursor
    fn clear_screen(&mut self) -> Result<(), String>;

    /// Place the cursor at `(row, col)`, both 0-indexed
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String>;

    fn clear_to_end_of_line(&mut self) -> Result<(), String>;

    /// Draw subsequent writes in reverse video (carets and selections)
    fn set_highlight(&mut self, on: bool) -> Result<(), String>;
}

pub mod crossterm;
