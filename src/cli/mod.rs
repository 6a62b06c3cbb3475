//! Command-line front end
//!
//! Every non-interactive subcommand returns the text it would print, so the
//! binary only has to write it out.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;

use crate::buffer::{BufferView, TextBuffer};
use crate::command::Command;
use crate::config::Config;
use crate::constants::ui::PART_SEPARATOR;
use crate::editor::{Editor, Session};
use crate::movement::{find_boundary, line_parts, Direction};
use crate::position::Position;
use crate::selection::Selection;
use crate::term::crossterm::CrosstermBackend;

/// Word-part movement for mixed-script text
#[derive(Debug, Parser)]
#[command(name = "wordpart", version, about)]
pub struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/wordpart/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Word separator characters, overriding the configuration
    #[arg(short, long, global = true, value_name = "CHARS")]
    pub separators: Option<String>,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the word-part boundary reached from a caret
    Scan(ScanArgs),

    /// Print every line split into word-parts
    Segment(SourceArgs),

    /// Run word-part commands over a document and print the result
    Apply(ApplyArgs),

    /// Open a file in the interactive editor
    Edit {
        /// File to edit; created on save if missing
        file: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

/// Where the document text comes from
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Document text given inline
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Document read from a file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Left,
    Right,
}

impl From<Side> for Direction {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Direction::Left,
            Side::Right => Direction::Right,
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Scan direction
    #[arg(value_enum)]
    pub direction: Side,

    /// Caret position as LINE:COL
    #[arg(short, long, value_name = "LINE:COL", default_value = "0:0")]
    pub at: Position,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Commands to run in order (e.g. move-right, deleteWordPartLeft)
    #[arg(required = true, value_name = "COMMAND")]
    pub commands: Vec<Command>,

    /// Caret or selection as LINE:COL or ANCHOR..ACTIVE (repeatable)
    #[arg(long = "caret", value_name = "SELECTION")]
    pub carets: Vec<Selection>,

    /// Undo the last edit after running the commands
    #[arg(short, long)]
    pub undo: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl Cli {
    /// Effective configuration: the config file, then command-line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::discover(self.config.as_deref())?;
        if let Some(separators) = &self.separators {
            config.editor.word_separators = separators.clone();
        }
        debug!("configuration: {config:?}");
        Ok(config)
    }

    /// Run the selected command; returns the text to print, if any
    pub fn execute(&self) -> Result<Option<String>> {
        let config = self.load_config()?;
        self.command.execute(config)
    }
}

impl Commands {
    pub fn execute(&self, config: Config) -> Result<Option<String>> {
        match self {
            Commands::Scan(args) => args.execute(&config).map(Some),
            Commands::Segment(source) => segment(&source.read()?, &config).map(Some),
            Commands::Apply(args) => args.execute(config).map(Some),
            Commands::Edit { file } => {
                edit(file, config)?;
                Ok(None)
            }
            Commands::Config => Ok(Some(config.to_toml_string()?)),
        }
    }
}

impl SourceArgs {
    /// Document text from `--text`, `--file` or stdin
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()));
        }
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        Ok(text)
    }
}

impl ScanArgs {
    pub fn execute(&self, config: &Config) -> Result<String> {
        let buffer = TextBuffer::from_text(&self.source.read()?);
        let target = find_boundary(
            &buffer,
            self.at,
            self.direction.into(),
            &config.separators(),
        );
        Ok(target.to_string())
    }
}

impl ApplyArgs {
    /// Final text followed by one line listing the selections
    pub fn execute(&self, config: Config) -> Result<String> {
        let buffer = TextBuffer::from_text(&self.source.read()?);
        let mut session = Session::new(buffer, config);
        if !self.carets.is_empty() {
            session.set_selections(self.carets.clone());
        }
        for &command in &self.commands {
            session.execute(command)?;
        }
        if self.undo {
            session.undo()?;
        }

        let selections: Vec<String> = session
            .selections()
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(format!(
            "{}\n{}",
            session.buffer().text(),
            selections.join(" ")
        ))
    }
}

/// Every line of `text` with its word-parts joined by the part separator
pub fn segment(text: &str, config: &Config) -> Result<String> {
    let buffer = TextBuffer::from_text(text);
    let separators = config.separators();
    let mut lines = Vec::with_capacity(buffer.line_count());
    for idx in 0..buffer.line_count() {
        let line = buffer.line(idx).unwrap_or_default();
        let parts: Vec<String> = line_parts(&buffer, idx, &separators)
            .into_iter()
            .map(|range| line[range].iter().collect())
            .collect();
        lines.push(parts.join(&PART_SEPARATOR.to_string()));
    }
    Ok(lines.join("\n"))
}

fn edit(path: &Path, config: Config) -> Result<()> {
    let backend = CrosstermBackend::new().map_err(|err| anyhow!(err))?;
    let mut editor = Editor::open(backend, path, config)?;
    editor.run()?;
    Ok(())
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
