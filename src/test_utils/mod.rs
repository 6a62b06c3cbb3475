//! Test utilities
//! Shared testing helpers and mocks

use std::collections::VecDeque;

use crate::key::Key;
use crate::term::{Size, TerminalBackend};

/// Mock terminal backend for testing
/// Replays scripted keys and records all output for verification
pub struct MockTerminal {
    pub keys: VecDeque<Key>,
    pub writes: Vec<Vec<u8>>,
    pub cursor_moves: Vec<(u16, u16)>,
    pub clear_screen_calls: usize,
    pub highlight_calls: Vec<bool>,
    pub size: (u16, u16),
    pub initialized: bool,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            keys: VecDeque::new(),
            writes: Vec::new(),
            cursor_moves: Vec::new(),
            clear_screen_calls: 0,
            highlight_calls: Vec::new(),
            size: (rows, cols),
            initialized: false,
        }
    }

    /// Mock terminal that will answer `read_key` with `keys`, in order
    pub fn with_keys(rows: u16, cols: u16, keys: impl IntoIterator<Item = Key>) -> Self {
        let mut term = Self::new(rows, cols);
        term.keys.extend(keys);
        term
    }

    /// Get all written bytes as a single vector
    pub fn get_written_bytes(&self) -> Vec<u8> {
        self.writes.iter().flatten().copied().collect()
    }

    /// Get all written bytes as a string (lossy UTF-8 conversion)
    pub fn get_written_string(&self) -> String {
        String::from_utf8_lossy(&self.get_written_bytes()).to_string()
    }

    /// Clear all recorded operations (useful for testing multiple renders)
    pub fn clear(&mut self) {
        self.writes.clear();
        self.cursor_moves.clear();
        self.highlight_calls.clear();
        self.clear_screen_calls = 0;
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<(), String> {
        self.initialized = true;
        Ok(())
    }

    fn deinit(&mut self) {
        self.initialized = false;
    }

    fn read_key(&mut self) -> Result<Key, String> {
        self.keys
            .pop_front()
            .ok_or_else(|| "No more scripted keys".to_string())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), String> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn get_size(&self) -> Result<Size, String> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        self.clear_screen_calls += 1;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        self.cursor_moves.push((row, col));
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn set_highlight(&mut self, on: bool) -> Result<(), String> {
        self.highlight_calls.push(on);
        Ok(())
    }
}
