//! Key bindings for the interactive session
//! Translates keys into editor actions

use crate::command::Command;
use crate::key::Key;

/// Editor-level intent produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run a word-part command on every selection
    Command(Command),
    /// Move every caret one character left (`-1`) or right (`+1`)
    MoveChar(isize),
    /// Move every caret one line up (`-1`) or down (`+1`)
    MoveLine(isize),
    /// Collapse every caret to the start or end of its line
    LineStart,
    LineEnd,
    Undo,
    Redo,
    Save,
    Quit,
    /// Terminal was resized
    Redraw,
    Noop,
}

/// Translate a key into an action
pub fn translate_key(key: Key) -> Action {
    match key {
        Key::CtrlArrowLeft => Action::Command(Command::MoveLeft),
        Key::CtrlArrowRight => Action::Command(Command::MoveRight),
        Key::CtrlShiftArrowLeft => Action::Command(Command::ExtendLeft),
        Key::CtrlShiftArrowRight => Action::Command(Command::ExtendRight),
        // Many terminals report Ctrl+Backspace as Ctrl+H
        Key::CtrlBackspace | Key::AltBackspace | Key::Ctrl('h') | Key::Ctrl('w') => {
            Action::Command(Command::DeleteLeft)
        }
        Key::CtrlDelete | Key::Alt('d') => Action::Command(Command::DeleteRight),

        Key::ArrowLeft => Action::MoveChar(-1),
        Key::ArrowRight => Action::MoveChar(1),
        Key::ArrowUp => Action::MoveLine(-1),
        Key::ArrowDown => Action::MoveLine(1),
        Key::Home => Action::LineStart,
        Key::End => Action::LineEnd,

        Key::Ctrl('z') => Action::Undo,
        Key::Ctrl('y') => Action::Redo,
        Key::Ctrl('s') => Action::Save,
        Key::Ctrl('q') | Key::Escape => Action::Quit,
        Key::Resize(..) => Action::Redraw,
        _ => Action::Noop,
    }
}
