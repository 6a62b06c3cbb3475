//! Carets and selections
//!
//! A [`Selection`] has a fixed `anchor` and a moving `active` end. A caret is
//! a selection whose ends coincide.

use std::fmt;
use std::str::FromStr;

use crate::constants::errors;
use crate::error::WordPartError;
use crate::position::{Position, Range};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Zero-width selection at `pos`
    pub const fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    pub fn is_caret(&self) -> bool {
        self.anchor == self.active
    }

    /// Covered range, ordered start to end
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active).normalized()
    }

    /// Same anchor, new active end
    #[must_use]
    pub fn with_active(self, active: Position) -> Self {
        Self::new(self.anchor, active)
    }
}

impl From<Position> for Selection {
    fn from(pos: Position) -> Self {
        Self::caret(pos)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_caret() {
            write!(f, "{}", self.active)
        } else {
            write!(f, "{}..{}", self.anchor, self.active)
        }
    }
}

/// Parses `LINE:COL` (a caret) or `ANCHOR..ACTIVE`
impl FromStr for Selection {
    type Err = WordPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once("..") {
            Some((anchor, active)) => Ok(Selection::new(anchor.parse()?, active.parse()?)),
            None if s.trim().is_empty() => Err(WordPartError::parse(
                errors::INVALID_POSITION,
                "empty selection",
            )),
            None => Ok(Selection::caret(s.parse()?)),
        }
    }
}
