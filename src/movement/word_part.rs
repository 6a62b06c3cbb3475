//! Word-part boundary scans
//!
//! A word-part is a run of one character class, refined by camelCase rules:
//! `fooBarBAZ` splits into `foo`, `Bar`, `BAZ` and `parseXMLDoc` into `parse`,
//! `XML`, `Doc`. Both scans are pure functions of the document and the caret.
//!
//! The two directions are not mirror images. Whether a capital opens a new
//! part or closes a run of capitals depends on the neighbour *opposite* the
//! scan direction, so the right scan peeks one column back where the left
//! scan simply reads the window's left cell.

use std::fmt;

use log::{trace, warn};

use super::classify::{CharClass, Classifier, SeparatorSet};
use super::window::Window;
use crate::buffer::api::BufferView;
use crate::position::Position;

use CharClass::{Invalid, LowerAlHalf as Lower, UpperAlHalf as Upper};

/// Scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Boundary reached from `caret` in `direction`
pub fn find_boundary<V: BufferView + ?Sized>(
    view: &V,
    caret: Position,
    direction: Direction,
    separators: &SeparatorSet,
) -> Position {
    match direction {
        Direction::Left => word_part_left(view, caret, separators),
        Direction::Right => word_part_right(view, caret, separators),
    }
}

/// Start of the word-part left of `caret`.
///
/// From column 0 the caret wraps to the end of the previous line; the start
/// of the document is a fixed point.
pub fn word_part_left<V: BufferView + ?Sized>(
    view: &V,
    caret: Position,
    separators: &SeparatorSet,
) -> Position {
    let caret = view.clamp(caret);
    let target = match caret.column {
        0 if caret.line > 0 => {
            let offset = view.position_to_offset(caret);
            view.offset_to_position(offset - 1)
        }
        0 => caret,
        1 => caret.with_column(0),
        _ => scan_left(&Classifier::new(view, separators), caret),
    };
    trace!("word_part_left {caret} -> {target}");
    target
}

/// End of the word-part right of `caret`.
///
/// From the end of a line the caret wraps to the start of the next one; the
/// end of the document is a fixed point.
pub fn word_part_right<V: BufferView + ?Sized>(
    view: &V,
    caret: Position,
    separators: &SeparatorSet,
) -> Position {
    let caret = view.clamp(caret);
    let classifier = Classifier::new(view, separators);
    let target = if classifier.class_at(caret.line, caret.column) == Invalid {
        if caret.line + 1 < view.line_count() {
            Position::new(caret.line + 1, 0)
        } else {
            caret
        }
    } else {
        scan_right(&classifier, caret)
    };
    trace!("word_part_right {caret} -> {target}");
    target
}

/// Boundaries of every word-part on `line`, as column ranges.
pub fn line_parts<V: BufferView + ?Sized>(
    view: &V,
    line: usize,
    separators: &SeparatorSet,
) -> Vec<std::ops::Range<usize>> {
    let len = view.line_len(line);
    let mut parts = Vec::new();
    let mut start = 0;
    while start < len {
        let end = word_part_right(view, Position::new(line, start), separators);
        if end.line != line || end.column <= start {
            break;
        }
        parts.push(start..end.column);
        start = end.column;
    }
    parts
}

/// Each loop step moves the window one column, so a line can never need
/// more steps than it has columns.
struct Fuel(usize);

impl Fuel {
    fn for_line<V: BufferView + ?Sized>(classifier: &Classifier<'_, V>, line: usize) -> Self {
        Fuel(classifier.line_len(line) + 1)
    }

    fn burn(&mut self) -> bool {
        match self.0.checked_sub(1) {
            Some(rest) => {
                self.0 = rest;
                true
            }
            None => false,
        }
    }
}

fn out_of_fuel(caret: Position, direction: Direction) -> Position {
    debug_assert!(false, "word-part scan {direction} from {caret} did not terminate");
    warn!("word-part scan {direction} from {caret} ran out of steps");
    match direction {
        Direction::Left => caret.with_column(caret.column.saturating_sub(1)),
        Direction::Right => caret.with_column(caret.column + 1),
    }
}

/// Requires `caret.column >= 2`
fn scan_left<V: BufferView + ?Sized>(classifier: &Classifier<'_, V>, caret: Position) -> Position {
    let mut w = Window::new(classifier, caret.line, caret.column - 2);

    // Two characters left of the caret, at the line start
    if w.left == Invalid {
        if w.middle == w.right || (w.middle == Upper && w.right == Lower) {
            return w.center();
        }
        return w.at(1);
    }

    let mut fuel = Fuel::for_line(classifier, caret.line);
    loop {
        if w.middle == Upper && w.right == Lower {
            // `aBc` starts at B, `ABc` keeps A with the capital run
            return match w.left {
                Upper => w.at(1),
                _ => w.center(),
            };
        }
        if w.middle != w.right {
            return w.at(1);
        }
        if w.left != w.middle && !(w.left == Upper && w.middle == Lower) {
            return w.center();
        }
        w = match w.slide_left(classifier, 1) {
            Some(next) => next,
            None => return Position::new(w.line, w.column - 1),
        };
        if !fuel.burn() {
            return out_of_fuel(caret, Direction::Left);
        }
    }
}

fn scan_right<V: BufferView + ?Sized>(
    classifier: &Classifier<'_, V>,
    caret: Position,
) -> Position {
    let mut w = Window::new(classifier, caret.line, caret.column + 1);

    // One character left on the line
    if w.middle == Invalid {
        return w.center();
    }

    // Two characters left on the line
    if w.right == Invalid {
        if w.left == w.middle {
            return w.at(1);
        }
        return match w.slide_left(classifier, 1) {
            Some(back) if back.left != Upper && back.middle == Upper && back.right == Lower => {
                back.at(2)
            }
            Some(back) => back.at(1),
            None if w.left == Upper && w.middle == Lower => w.at(1),
            None => w.center(),
        };
    }

    let mut fuel = Fuel::for_line(classifier, caret.line);
    loop {
        if w.left == Lower && w.middle == Upper {
            return w.center();
        }

        let next = if w.left == w.middle {
            if w.middle != w.right {
                return w.at(1);
            }
            w.slide_right(classifier, 1)
        } else if !(w.left.is_ascii_alpha() && w.middle.is_ascii_alpha()) {
            return w.center();
        } else if !(w.right.is_ascii_alpha() && w.middle.is_ascii_alpha()) {
            return w.at(1);
        } else {
            // Capital followed by lowercase: the class before the capital
            // decides whether it opens this part or closes a capital run.
            match w.slide_left(classifier, 1) {
                Some(back) if back.left == Upper => return w.center(),
                Some(_) => {
                    let continues = w.middle == w.right || (w.middle == Upper && w.right == Lower);
                    if !continues {
                        return w.at(1);
                    }
                    w.slide_right(classifier, 1)
                }
                None => w.slide_right(classifier, 1),
            }
        };

        w = match next {
            Some(next) => next,
            None => return w.at(1),
        };
        if !fuel.burn() {
            return out_of_fuel(caret, Direction::Right);
        }
    }
}
