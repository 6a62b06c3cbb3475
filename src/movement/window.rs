//! Three-cell classification window used by the word-part scans

use super::classify::{CharClass, Classifier};
use crate::buffer::api::BufferView;
use crate::position::Position;

/// Classes of the characters at `column - 1`, `column` and `column + 1`.
///
/// A window is a plain value: sliding returns a new window and leaves the old
/// one untouched, so a scan can peek one step aside and keep its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub line: usize,
    pub column: usize,
    pub left: CharClass,
    pub middle: CharClass,
    pub right: CharClass,
}

impl Window {
    pub fn new<V: BufferView + ?Sized>(
        classifier: &Classifier<'_, V>,
        line: usize,
        column: usize,
    ) -> Self {
        let left = column
            .checked_sub(1)
            .map_or(CharClass::Invalid, |col| classifier.class_at(line, col));
        Self {
            line,
            column,
            left,
            middle: classifier.class_at(line, column),
            right: classifier.class_at(line, column + 1),
        }
    }

    /// Window centered `n` columns further left.
    ///
    /// Fails when the new center would be column 0 or less: the left cell must
    /// stay on the line.
    pub fn slide_left<V: BufferView + ?Sized>(
        &self,
        classifier: &Classifier<'_, V>,
        n: usize,
    ) -> Option<Self> {
        if self.column <= n {
            return None;
        }
        Some(Self::new(classifier, self.line, self.column - n))
    }

    /// Window centered `n` columns further right. Fails when no character
    /// occupies the new center.
    pub fn slide_right<V: BufferView + ?Sized>(
        &self,
        classifier: &Classifier<'_, V>,
        n: usize,
    ) -> Option<Self> {
        if classifier.class_at(self.line, self.column + n) == CharClass::Invalid {
            return None;
        }
        Some(Self::new(classifier, self.line, self.column + n))
    }

    /// Position `delta` columns right of the center
    pub fn at(&self, delta: usize) -> Position {
        Position::new(self.line, self.column + delta)
    }

    pub fn center(&self) -> Position {
        self.at(0)
    }
}
