//! Text buffer implementation backed by a vector of lines
//!
//! `TextBuffer` is the reference host for the word-part core. It stores each
//! line as a vector of `char`, so a column is simply an index into the line,
//! and records every batch edit in a linear undo history.

use std::fmt::{self, Display};

use log::{debug, warn};

use crate::constants::errors;
use crate::error::{Result, WordPartError};
use crate::history::{EditOperation, EditTransaction, UndoHistory};
use crate::position::{Position, Range};

pub mod api;
pub use api::{BufferEdit, BufferView, TextEdit};

/// Line terminator used when the document is written back out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Pick `\r\n` if the text uses it anywhere, `\n` otherwise
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Length in code points, as counted by document offsets
    pub fn len(self) -> usize {
        match self {
            LineEnding::Lf => 1,
            LineEnding::CrLf => 2,
        }
    }
}

/// Line-oriented text buffer with atomic batch edits and undo/redo.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<Vec<char>>,
    line_ending: LineEnding,
    /// Monotonic revision counter for change detection
    pub revision: u64,
    history: UndoHistory,
}

impl TextBuffer {
    /// Create an empty buffer (one empty line)
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Load `text`, detecting its line ending
    pub fn from_text(text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        let lines = split_lines(text);
        debug!(
            "loaded buffer: {} lines, {:?} line endings",
            lines.len(),
            line_ending
        );
        Self {
            lines,
            line_ending,
            revision: 0,
            history: UndoHistory::new(),
        }
    }

    /// Full document text using the detected line ending
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push_str(self.line_ending.as_str());
            }
            out.extend(line.iter());
        }
        out
    }

    /// Characters of `line`, if it exists
    pub fn line(&self, line: usize) -> Option<&[char]> {
        self.lines.get(line).map(Vec::as_slice)
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revert the most recent batch edit as a whole
    pub fn undo(&mut self) -> Result<()> {
        let ops = match self.history.undo() {
            Some(transaction) => {
                debug!("undo: {}", transaction.description);
                transaction.inverse()
            }
            None => {
                return Err(WordPartError::edit(
                    errors::NOTHING_TO_UNDO,
                    "Already at oldest change",
                ))
            }
        };
        for op in &ops {
            self.apply_operation(op);
        }
        self.revision += 1;
        Ok(())
    }

    /// Reapply the most recently undone batch edit
    pub fn redo(&mut self) -> Result<()> {
        let ops = match self.history.redo() {
            Some(transaction) => {
                debug!("redo: {}", transaction.description);
                transaction.ops.clone()
            }
            None => {
                return Err(WordPartError::edit(
                    errors::NOTHING_TO_REDO,
                    "Already at newest change",
                ))
            }
        };
        for op in &ops {
            self.apply_operation(op);
        }
        self.revision += 1;
        Ok(())
    }

    /// Text covered by a validated range, lines joined with `\n`
    fn slice(&self, range: Range) -> String {
        let (start, end) = (range.start, range.end);
        if start.line == end.line {
            return self.lines[start.line][start.column..end.column]
                .iter()
                .collect();
        }
        let mut out: String = self.lines[start.line][start.column..].iter().collect();
        for line in &self.lines[start.line + 1..end.line] {
            out.push('\n');
            out.extend(line.iter());
        }
        out.push('\n');
        out.extend(self.lines[end.line][..end.column].iter());
        out
    }

    /// Replace a validated range with `text` and return what was removed
    fn replace_range(&mut self, range: Range, text: &str) -> String {
        let removed = self.slice(range);
        let (start, end) = (range.start, range.end);

        let tail = self.lines[end.line][end.column..].to_vec();
        let mut current = self.lines[start.line][..start.column].to_vec();
        let mut replacement = Vec::new();
        for (idx, segment) in text.split('\n').enumerate() {
            if idx > 0 {
                replacement.push(std::mem::take(&mut current));
            }
            current.extend(segment.chars());
        }
        current.extend(tail);
        replacement.push(current);

        self.lines.splice(start.line..=end.line, replacement);
        removed
    }

    fn apply_operation(&mut self, op: &EditOperation) {
        match op {
            EditOperation::Insert { position, text } => {
                self.replace_range(Range::new(*position, *position), text);
            }
            EditOperation::Delete { range, .. } => {
                self.replace_range(*range, "");
            }
            EditOperation::Replace {
                range, new_text, ..
            } => {
                self.replace_range(*range, new_text);
            }
        }
    }

    fn check_position(&self, pos: Position) -> Result<()> {
        if pos.line >= self.lines.len() || pos.column > self.line_len(pos.line) {
            return Err(WordPartError::edit(
                errors::POSITION_OUT_OF_BOUNDS,
                format!("Position {pos} is outside the document"),
            ));
        }
        Ok(())
    }

    fn validate(&self, edit: &TextEdit) -> Result<()> {
        if edit.range.start > edit.range.end {
            return Err(WordPartError::edit(
                errors::INVALID_RANGE,
                format!("Range {} ends before it starts", edit.range),
            ));
        }
        self.check_position(edit.range.start)?;
        self.check_position(edit.range.end)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn split_lines(text: &str) -> Vec<Vec<char>> {
    text.replace("\r\n", "\n")
        .split('\n')
        .map(|line| line.chars().collect())
        .collect()
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl BufferView for TextBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, Vec::len)
    }

    fn char_at(&self, line: usize, column: usize) -> Option<char> {
        self.lines.get(line)?.get(column).copied()
    }

    fn position_to_offset(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        let ending = self.line_ending.len();
        self.lines[..pos.line]
            .iter()
            .map(|line| line.len() + ending)
            .sum::<usize>()
            + pos.column
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        let ending = self.line_ending.len();
        let mut start = 0;
        for (idx, line) in self.lines.iter().enumerate() {
            let end = start + line.len();
            if offset <= end {
                return Position::new(idx, offset - start);
            }
            // Inside a two-character terminator
            if offset < end + ending {
                return Position::new(idx, line.len());
            }
            start = end + ending;
        }
        let last = self.lines.len() - 1;
        Position::new(last, self.lines[last].len())
    }
}

impl BufferEdit for TextBuffer {
    fn apply_edits(&mut self, edits: &[TextEdit]) -> Result<()> {
        if edits.is_empty() {
            return Ok(());
        }
        for edit in edits {
            if let Err(err) = self.validate(edit) {
                warn!("rejected batch edit: {err}");
                return Err(err);
            }
        }

        let mut ordered: Vec<&TextEdit> = edits.iter().collect();
        ordered.sort_by_key(|edit| (edit.range.start, edit.range.end));
        for pair in ordered.windows(2) {
            if pair[0].range.end > pair[1].range.start {
                let err = WordPartError::edit(
                    errors::OVERLAPPING_EDITS,
                    format!("Edits {} and {} overlap", pair[0].range, pair[1].range),
                );
                warn!("rejected batch edit: {err}");
                return Err(err);
            }
        }

        // Back to front so earlier ranges keep their coordinates
        let mut transaction = EditTransaction::new(format!("{} edit(s)", edits.len()));
        for edit in ordered.into_iter().rev() {
            let text = edit.text.replace("\r\n", "\n");
            let removed = self.replace_range(edit.range, &text);
            let op = match (removed.is_empty(), text.is_empty()) {
                (true, true) => continue,
                (false, true) => EditOperation::Delete {
                    range: edit.range,
                    deleted_text: removed,
                },
                (true, false) => EditOperation::Insert {
                    position: edit.range.start,
                    text,
                },
                (false, false) => EditOperation::Replace {
                    range: edit.range,
                    old_text: removed,
                    new_text: text,
                },
            };
            transaction.record(op);
        }

        if transaction.is_empty() {
            return Ok(());
        }
        debug!(
            "applied {} edit(s) as one transaction: {:?}",
            transaction.ops.len(),
            transaction.ops.iter().map(EditOperation::description).collect::<Vec<_>>()
        );
        self.history.push(transaction);
        self.revision += 1;
        Ok(())
    }
}
