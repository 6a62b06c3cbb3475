//! Crossterm-based terminal backend

use std::io::{self, stdout, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, SetAttribute},
    terminal::{self, ClearType},
};

use crate::key::Key;
use crate::term::{Size, TerminalBackend};

/// Writes are queued on stdout and flushed once per `write`
pub struct CrosstermBackend {
    out: Stdout,
    raw_mode: bool,
    alternate_screen: bool,
}

fn failed(what: &'static str) -> impl Fn(io::Error) -> String {
    move |e| format!("Failed to {what}: {e}")
}

impl CrosstermBackend {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            out: stdout(),
            raw_mode: false,
            alternate_screen: false,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<(), String> {
        execute!(self.out, terminal::EnterAlternateScreen)
            .map_err(failed("enter alternate screen"))?;
        self.alternate_screen = true;
        terminal::enable_raw_mode().map_err(failed("enable raw mode"))?;
        self.raw_mode = true;
        // Carets are drawn in reverse video
        execute!(self.out, cursor::Hide).map_err(failed("hide cursor"))
    }

    fn deinit(&mut self) {
        let _ = execute!(self.out, SetAttribute(Attribute::Reset), cursor::Show);
        if std::mem::take(&mut self.raw_mode) {
            let _ = terminal::disable_raw_mode();
        }
        if std::mem::take(&mut self.alternate_screen) {
            let _ = execute!(self.out, terminal::LeaveAlternateScreen);
        }
    }

    fn read_key(&mut self) -> Result<Key, String> {
        loop {
            match event::read().map_err(failed("read event"))? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    return Ok(translate_key_event(key_event));
                }
                Event::Resize(cols, rows) => return Ok(Key::Resize(cols, rows)),
                // Key releases, mouse and focus events
                _ => {}
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), String> {
        self.out.write_all(bytes).map_err(failed("write"))?;
        self.out.flush().map_err(failed("flush"))
    }

    fn get_size(&self) -> Result<Size, String> {
        let (cols, rows) = terminal::size().map_err(failed("get terminal size"))?;
        Ok(Size { rows, cols })
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
            .map_err(failed("clear screen"))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        queue!(self.out, cursor::MoveTo(col, row)).map_err(failed("move cursor"))
    }

    fn clear_to_end_of_line(&mut self) -> Result<(), String> {
        execute!(self.out, terminal::Clear(ClearType::UntilNewLine))
            .map_err(failed("clear line"))
    }

    fn set_highlight(&mut self, on: bool) -> Result<(), String> {
        let attribute = if on {
            Attribute::Reverse
        } else {
            Attribute::NoReverse
        };
        queue!(self.out, SetAttribute(attribute)).map_err(failed("set attribute"))
    }
}

/// Translate a crossterm key event into a [`Key`]
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Key {
    let modifiers = key_event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    match key_event.code {
        // Some terminals send Enter as a character
        KeyCode::Char('\r' | '\n') | KeyCode::Enter => Key::Enter,
        KeyCode::Char(ch) if ctrl => Key::Ctrl(ch.to_ascii_lowercase()),
        KeyCode::Char(ch) if alt => Key::Alt(ch),
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Backspace if ctrl => Key::CtrlBackspace,
        KeyCode::Backspace if alt => Key::AltBackspace,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete if ctrl => Key::CtrlDelete,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left if ctrl && shift => Key::CtrlShiftArrowLeft,
        KeyCode::Left if ctrl => Key::CtrlArrowLeft,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right if ctrl && shift => Key::CtrlShiftArrowRight,
        KeyCode::Right if ctrl => Key::CtrlArrowRight,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        _ => Key::Unknown,
    }
}
