//! Key representation for editor input

/// Represents a key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+A), lowercase letter
    Ctrl(char),
    /// Alt key combination
    Alt(char),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    CtrlArrowLeft,
    CtrlArrowRight,
    CtrlShiftArrowLeft,
    CtrlShiftArrowRight,
    /// Navigation keys
    Home,
    End,
    /// Editing keys
    Backspace,
    CtrlBackspace,
    AltBackspace,
    Delete,
    CtrlDelete,
    Enter,
    Escape,
    Tab,
    /// System events
    Resize(u16, u16),
    /// Anything the editor has no use for
    Unknown,
}
