//! Document state shared by the interactive editor and the command line
//!
//! A [`Session`] owns the buffer, the current selections and the
//! configuration, and runs commands against them. Selections are saved next
//! to every text edit so that undo and redo put the carets back too.

use log::debug;

use crate::buffer::{BufferView, TextBuffer};
use crate::command::{Command, Operation};
use crate::config::Config;
use crate::error::Result;
use crate::operations::{delete_word_part, extend_word_part, move_word_part};
use crate::position::Position;
use crate::selection::Selection;

/// Selections around one recorded edit
#[derive(Debug, Clone)]
struct SelectionStep {
    before: Vec<Selection>,
    after: Vec<Selection>,
}

#[derive(Debug, Clone)]
pub struct Session {
    buffer: TextBuffer,
    selections: Vec<Selection>,
    config: Config,
    undo_steps: Vec<SelectionStep>,
    redo_steps: Vec<SelectionStep>,
}

impl Session {
    /// Session with a single caret at the start of the document
    pub fn new(buffer: TextBuffer, config: Config) -> Self {
        Self {
            buffer,
            selections: vec![Selection::caret(Position::default())],
            config,
            undo_steps: Vec::new(),
            redo_steps: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Replace the selections, clamping them into the document.
    /// An empty list leaves a single caret at the origin.
    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = if selections.is_empty() {
            vec![Selection::caret(Position::default())]
        } else {
            selections
                .into_iter()
                .map(|sel| {
                    Selection::new(self.buffer.clamp(sel.anchor), self.buffer.clamp(sel.active))
                })
                .collect()
        };
    }

    /// Run one word-part command on every selection
    pub fn execute(&mut self, command: Command) -> Result<()> {
        // Read once per invocation
        let separators = self.config.separators();
        let direction = command.direction();
        debug!(
            "execute {command} on {} selection(s)",
            self.selections.len()
        );

        match command.operation() {
            Operation::Move => {
                self.selections =
                    move_word_part(&self.buffer, &self.selections, direction, &separators);
            }
            Operation::Extend => {
                self.selections =
                    extend_word_part(&self.buffer, &self.selections, direction, &separators);
            }
            Operation::Delete => {
                let revision = self.buffer.revision;
                let after =
                    delete_word_part(&mut self.buffer, &self.selections, direction, &separators)?;
                if self.buffer.revision != revision {
                    self.undo_steps.push(SelectionStep {
                        before: std::mem::take(&mut self.selections),
                        after: after.clone(),
                    });
                    self.redo_steps.clear();
                }
                self.selections = after;
            }
        }
        Ok(())
    }

    /// Revert the last edit and restore the selections it started from
    pub fn undo(&mut self) -> Result<()> {
        self.buffer.undo()?;
        if let Some(step) = self.undo_steps.pop() {
            self.selections = step.before.clone();
            self.redo_steps.push(step);
        }
        Ok(())
    }

    /// Reapply the last undone edit and its resulting selections
    pub fn redo(&mut self) -> Result<()> {
        self.buffer.redo()?;
        if let Some(step) = self.redo_steps.pop() {
            self.selections = step.after.clone();
            self.undo_steps.push(step);
        }
        Ok(())
    }

    /// Collapse every selection and move it one character left or right,
    /// wrapping across line ends
    pub fn move_char(&mut self, delta: isize) {
        let buffer = &self.buffer;
        self.selections = self
            .selections
            .iter()
            .map(|sel| {
                let pos = sel.active;
                let target = if delta < 0 {
                    match (pos.column, pos.line) {
                        (0, 0) => pos,
                        (0, line) => Position::new(line - 1, buffer.line_len(line - 1)),
                        (column, line) => Position::new(line, column - 1),
                    }
                } else if pos.column < buffer.line_len(pos.line) {
                    pos.with_column(pos.column + 1)
                } else if pos.line + 1 < buffer.line_count() {
                    Position::new(pos.line + 1, 0)
                } else {
                    pos
                };
                Selection::caret(target)
            })
            .collect();
    }

    /// Collapse every selection and move it `delta` lines, clamping the column
    pub fn move_line(&mut self, delta: isize) {
        let buffer = &self.buffer;
        let last = buffer.line_count().saturating_sub(1);
        self.selections = self
            .selections
            .iter()
            .map(|sel| {
                let line = sel.active.line.saturating_add_signed(delta).min(last);
                Selection::caret(buffer.clamp(Position::new(line, sel.active.column)))
            })
            .collect();
    }

    /// Collapse every selection to the start (`false`) or end (`true`) of its line
    pub fn move_line_edge(&mut self, to_end: bool) {
        let buffer = &self.buffer;
        self.selections = self
            .selections
            .iter()
            .map(|sel| {
                let line = sel.active.line;
                let column = if to_end { buffer.line_len(line) } else { 0 };
                Selection::caret(Position::new(line, column))
            })
            .collect();
    }
}
