//! Undo/Redo history management
//!
//! This module provides a transaction-centric, linear undo history where:
//! - Every command is one atomic undo entry (transaction)
//! - Transactions may contain multiple low-level edits (one per caret)
//! - Recording a new transaction discards everything that could be redone

use std::collections::VecDeque;

use crate::constants::history::DEFAULT_UNDO_DEPTH;
use crate::position::{Position, Range};

// =============================================================================
// Edit Operations
// =============================================================================

/// A single atomic edit operation in the document
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOperation {
    /// Insert text at position
    Insert { position: Position, text: String },

    /// Delete text in range
    Delete { range: Range, deleted_text: String },

    /// Replace text (atomic delete + insert)
    Replace {
        range: Range,
        old_text: String,
        new_text: String,
    },
}

/// Position reached after writing `text` starting at `start`
pub fn end_of_text(start: Position, text: &str) -> Position {
    let newlines = text.chars().filter(|&c| c == '\n').count();
    if newlines == 0 {
        Position::new(start.line, start.column + text.chars().count())
    } else {
        let tail = text.chars().rev().take_while(|&c| c != '\n').count();
        Position::new(start.line + newlines, tail)
    }
}

impl EditOperation {
    /// Get the inverse operation (for undo)
    #[must_use]
    pub fn inverse(&self) -> EditOperation {
        match self {
            EditOperation::Insert { position, text } => EditOperation::Delete {
                range: Range::new(*position, end_of_text(*position, text)),
                deleted_text: text.clone(),
            },

            EditOperation::Delete {
                range,
                deleted_text,
            } => EditOperation::Insert {
                position: range.start,
                text: deleted_text.clone(),
            },

            EditOperation::Replace {
                range,
                old_text,
                new_text,
            } => EditOperation::Replace {
                range: Range::new(range.start, end_of_text(range.start, new_text)),
                old_text: new_text.clone(),
                new_text: old_text.clone(),
            },
        }
    }

    /// Describe operation for UI (e.g., "Delete 42 chars")
    #[must_use]
    pub fn description(&self) -> String {
        let preview = |text: &str| {
            let len = text.chars().count();
            if len <= 20 {
                format!("'{}'", text.replace('\n', "\\n"))
            } else {
                format!("{len} chars")
            }
        };
        match self {
            EditOperation::Insert { text, .. } => format!("Insert {}", preview(text)),
            EditOperation::Delete { deleted_text, .. } => {
                format!("Delete {}", preview(deleted_text))
            }
            EditOperation::Replace {
                old_text, new_text, ..
            } => format!(
                "Replace {} chars with {} chars",
                old_text.chars().count(),
                new_text.chars().count()
            ),
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// Transaction groups multiple edits into one undo entry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditTransaction {
    /// Operations in the order they were applied
    pub ops: Vec<EditOperation>,
    pub description: String,
}

impl EditTransaction {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            ops: Vec::new(),
            description: description.into(),
        }
    }

    /// Record operation within transaction
    pub fn record(&mut self, operation: EditOperation) {
        self.ops.push(operation);
    }

    /// Get inverse operations in REVERSE order (for undo)
    #[must_use]
    pub fn inverse(&self) -> Vec<EditOperation> {
        self.ops.iter().rev().map(EditOperation::inverse).collect()
    }

    /// Check if transaction is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

// =============================================================================
// Undo History
// =============================================================================

/// Linear undo/redo stacks of transactions
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo_stack: VecDeque<EditTransaction>,
    redo_stack: Vec<EditTransaction>,
    max_depth: usize,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_UNDO_DEPTH)
    }

    /// History that keeps at most `max_depth` undo entries (minimum 1)
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record a freshly applied transaction. Empty transactions are ignored.
    pub fn push(&mut self, transaction: EditTransaction) {
        if transaction.is_empty() {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push_back(transaction);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    /// Take the newest transaction for undoing; it moves to the redo stack.
    /// The caller applies [`EditTransaction::inverse`].
    pub fn undo(&mut self) -> Option<&EditTransaction> {
        let transaction = self.undo_stack.pop_back()?;
        self.redo_stack.push(transaction);
        self.redo_stack.last()
    }

    /// Take the most recently undone transaction for reapplying.
    pub fn redo(&mut self) -> Option<&EditTransaction> {
        let transaction = self.redo_stack.pop()?;
        self.undo_stack.push_back(transaction);
        self.undo_stack.back()
    }

    /// Check if we can undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if we can redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of transactions available for undo
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}
