//! Editor core
//! Interactive session that ties the terminal, key bindings and a [`Session`]
//! together

mod session;

pub use session::Session;

use std::path::{Path, PathBuf};

use log::{debug, info};
use unicode_width::UnicodeWidthChar;

use crate::buffer::{BufferView, TextBuffer};
use crate::config::Config;
use crate::constants::errors;
use crate::error::{ErrorType, Result, WordPartError};
use crate::keymap::{translate_key, Action};
use crate::position::Position;
use crate::term::TerminalBackend;

/// Main editor struct
pub struct Editor<T: TerminalBackend> {
    /// Terminal backend
    pub term: T,
    session: Session,
    path: Option<PathBuf>,
    /// Buffer revision at the last load or save
    saved_revision: u64,
    /// First document line on screen
    scroll: usize,
    message: String,
    should_quit: bool,
}

fn terminal_error(message: String) -> WordPartError {
    WordPartError::new(ErrorType::Io, errors::TERMINAL_ERROR, message)
}

/// Display width of `c` when it starts at display column `at`
pub fn char_width(c: char, at: usize, tab_width: usize) -> usize {
    if c == '\t' {
        let tab_width = tab_width.max(1);
        tab_width - at % tab_width
    } else {
        c.width().unwrap_or(1)
    }
}

/// Display column of `column` on `line`, honoring wide characters and tabs
pub fn display_column(line: &[char], column: usize, tab_width: usize) -> usize {
    line.iter()
        .take(column)
        .fold(0, |at, &c| at + char_width(c, at, tab_width))
}

impl<T: TerminalBackend> Editor<T> {
    /// Create a new editor instance over an in-memory session
    pub fn new(terminal: T, session: Session) -> Self {
        let saved_revision = session.buffer().revision;
        Self {
            term: terminal,
            session,
            path: None,
            saved_revision,
            scroll: 0,
            message: String::new(),
            should_quit: false,
        }
    }

    /// Open `path`; a missing file starts an empty document that saves there
    pub fn open(terminal: T, path: &Path, config: Config) -> Result<Self> {
        let buffer = match std::fs::read_to_string(path) {
            Ok(text) => TextBuffer::from_text(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => TextBuffer::new(),
            Err(err) => return Err(err.into()),
        };
        info!("opened {}", path.display());
        let mut editor = Self::new(terminal, Session::new(buffer, config));
        editor.path = Some(path.to_path_buf());
        Ok(editor)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn is_dirty(&self) -> bool {
        self.session.buffer().revision != self.saved_revision
    }

    /// Status message shown on the last row
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Write the document back to its file
    pub fn save(&mut self) -> Result<()> {
        let path = self.path.as_ref().ok_or_else(|| {
            WordPartError::new(ErrorType::Io, errors::IO_ERROR, "No file name")
        })?;
        std::fs::write(path, self.session.buffer().text())?;
        info!("saved {}", path.display());
        self.saved_revision = self.session.buffer().revision;
        Ok(())
    }

    /// Apply one action; failures become the status message
    pub fn handle_action(&mut self, action: Action) {
        let result = match action {
            Action::Command(command) => self.session.execute(command),
            Action::MoveChar(delta) => {
                self.session.move_char(delta);
                Ok(())
            }
            Action::MoveLine(delta) => {
                self.session.move_line(delta);
                Ok(())
            }
            Action::LineStart => {
                self.session.move_line_edge(false);
                Ok(())
            }
            Action::LineEnd => {
                self.session.move_line_edge(true);
                Ok(())
            }
            Action::Undo => self.session.undo(),
            Action::Redo => self.session.redo(),
            Action::Save => self.save().map(|()| {
                self.message = "Saved".to_string();
            }),
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
            Action::Redraw | Action::Noop => Ok(()),
        };
        if let Err(err) = result {
            debug!("action {action:?} failed: {err}");
            self.message = err.message;
        }
    }

    /// Main event loop; the terminal is restored however the loop ends
    pub fn run(&mut self) -> Result<()> {
        self.term.init().map_err(terminal_error)?;
        let result = self.event_loop();
        self.term.deinit();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            self.render()?;
            let key = self.term.read_key().map_err(terminal_error)?;
            self.message.clear();
            self.handle_action(translate_key(key));
        }
        Ok(())
    }

    /// Keep the first selection's active line on screen
    fn update_scroll(&mut self, text_rows: usize) {
        let Some(first) = self.session.selections().first() else {
            return;
        };
        let line = first.active.line;
        if line < self.scroll {
            self.scroll = line;
        } else if text_rows > 0 && line >= self.scroll + text_rows {
            self.scroll = line + 1 - text_rows;
        }
    }

    fn is_highlighted(&self, pos: Position) -> bool {
        self.session.selections().iter().any(|sel| {
            let range = sel.range();
            sel.active == pos || (range.start <= pos && pos < range.end)
        })
    }

    /// Draw the visible lines and the status line
    pub fn render(&mut self) -> Result<()> {
        let size = self.term.get_size().map_err(terminal_error)?;
        let rows = usize::from(size.rows);
        let cols = usize::from(size.cols);
        let text_rows = rows.saturating_sub(1);
        self.update_scroll(text_rows);

        self.term.clear_screen().map_err(terminal_error)?;
        let tab_width = self.session.config().editor.tab_width;
        for row in 0..text_rows {
            let line_idx = self.scroll + row;
            let Some(line) = self.session.buffer().line(line_idx) else {
                break;
            };
            let cells = self.line_cells(line_idx, line, cols, tab_width);
            self.term
                .move_cursor(row as u16, 0)
                .map_err(terminal_error)?;
            self.draw_cells(&cells)?;
            self.term.clear_to_end_of_line().map_err(terminal_error)?;
        }

        let status = self.status_line();
        let status: String = status.chars().take(cols).collect();
        self.term
            .move_cursor(rows.saturating_sub(1) as u16, 0)
            .map_err(terminal_error)?;
        self.draw_cells(&[(status, true)])?;
        self.term.clear_to_end_of_line().map_err(terminal_error)
    }

    /// Runs of text on one screen row, each with its highlight state
    fn line_cells(
        &self,
        line_idx: usize,
        line: &[char],
        cols: usize,
        tab_width: usize,
    ) -> Vec<(String, bool)> {
        let mut cells: Vec<(String, bool)> = Vec::new();
        let mut push = |text: String, highlighted: bool| match cells.last_mut() {
            Some((run, hl)) if *hl == highlighted => run.push_str(&text),
            _ => cells.push((text, highlighted)),
        };

        let mut at = 0;
        for (column, &c) in line.iter().enumerate() {
            let width = char_width(c, at, tab_width);
            if at + width > cols {
                break;
            }
            let text = match c {
                '\t' => " ".repeat(width),
                c if c.is_control() => "?".to_string(),
                c => c.to_string(),
            };
            push(text, self.is_highlighted(Position::new(line_idx, column)));
            at += width;
        }
        // Caret after the last character
        if at < cols && self.is_highlighted(Position::new(line_idx, line.len())) {
            push(" ".to_string(), true);
        }
        cells
    }

    fn draw_cells(&mut self, cells: &[(String, bool)]) -> Result<()> {
        for (text, highlighted) in cells {
            self.term
                .set_highlight(*highlighted)
                .map_err(terminal_error)?;
            self.term.write(text.as_bytes()).map_err(terminal_error)?;
        }
        self.term.set_highlight(false).map_err(terminal_error)
    }

    fn status_line(&self) -> String {
        let name = self
            .path
            .as_ref()
            .map_or_else(|| "[scratch]".to_string(), |p| p.display().to_string());
        let dirty = if self.is_dirty() { " [+]" } else { "" };
        let selections = self.session.selections();
        let first = selections
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        let mut status = format!(
            "{name}{dirty} | {} selection(s) | {first}",
            selections.len()
        );
        if !self.message.is_empty() {
            status.push_str(" | ");
            status.push_str(&self.message);
        }
        status
    }
}
