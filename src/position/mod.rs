//! Document coordinates
//!
//! A [`Position`] is a zero-based `(line, column)` pair where the column counts
//! characters (Unicode scalar values), never bytes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::errors;
use crate::error::WordPartError;

/// Position in document (line, column)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Same line, different column
    #[must_use]
    pub const fn with_column(self, column: usize) -> Self {
        Self {
            line: self.line,
            column,
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Parses `LINE:COLUMN`
impl FromStr for Position {
    type Err = WordPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            WordPartError::parse(
                errors::INVALID_POSITION,
                format!("expected LINE:COLUMN, got '{s}'"),
            )
        };
        let (line, column) = s.trim().split_once(':').ok_or_else(invalid)?;
        let line = line.trim().parse().map_err(|_| invalid())?;
        let column = column.trim().parse().map_err(|_| invalid())?;
        Ok(Position::new(line, column))
    }
}

/// Range spanning start to end positions
///
/// `start` is not required to precede `end`; [`Range::normalized`] orders them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Check if range is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Same range with `start <= end`
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self::new(self.end, self.start)
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
