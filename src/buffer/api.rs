//! Buffer abstraction layer
//!
//! These traits are the whole contract between the word-part core and the host
//! editor's text storage. The scanner only ever reads through [`BufferView`];
//! the operation layer hands deletions to [`BufferEdit`] as one batch.
//!
//! ## Indexing model
//!
//! Columns are **code‑point based** (Unicode scalar values). Grapheme clusters
//! such as emoji sequences or combining marks count as several columns.
//!
//! Offsets are code‑point offsets from the start of the document and include
//! the line terminators, so their meaning depends on the buffer's line ending.
//!
//! ## Batch semantics
//!
//! `apply_edits` is all-or-nothing: either every edit lands and the batch
//! becomes a single undo step, or nothing changes and an error is returned.

use crate::error::Result;
use crate::position::{Position, Range};

/// Read‑only view of a document.
pub trait BufferView {
    /// Number of logical lines. An empty document has one empty line.
    fn line_count(&self) -> usize;

    /// Length of `line` in code‑points, excluding the line terminator.
    /// Lines past the end have length 0.
    fn line_len(&self, line: usize) -> usize;

    /// Character occupying `(line, column)`, or `None` at end-of-line,
    /// end-of-document, or past either.
    fn char_at(&self, line: usize, column: usize) -> Option<char>;

    /// Code‑point offset of `pos` from the start of the document.
    fn position_to_offset(&self, pos: Position) -> usize;

    /// Inverse of [`BufferView::position_to_offset`]. Offsets past the end
    /// clamp to the end of the document.
    fn offset_to_position(&self, offset: usize) -> Position;

    /// Pull `pos` back inside the document.
    fn clamp(&self, pos: Position) -> Position {
        let line_count = self.line_count();
        if line_count == 0 {
            return Position::default();
        }
        let line = pos.line.min(line_count - 1);
        Position::new(line, pos.column.min(self.line_len(line)))
    }
}

/// A single replacement: the text in `range` becomes `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub text: String,
}

impl TextEdit {
    pub fn new(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    /// Removal of `range`
    pub fn delete(range: Range) -> Self {
        Self::new(range, String::new())
    }
}

/// Mutable side of the host buffer.
pub trait BufferEdit: BufferView {
    /// Apply every edit or none of them.
    ///
    /// Ranges are interpreted against the text as it was before the batch,
    /// must lie inside the document and must not overlap. A successful batch
    /// is recorded as one undo step.
    fn apply_edits(&mut self, edits: &[TextEdit]) -> Result<()>;
}
