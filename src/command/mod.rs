//! Word-part commands
//!
//! ## command/ Invariants
//!
//! - `Command` represents editor-level intent, not key-level input.
//! - Commands carry no text, positions or separators; those are read at
//!   execution time.
//! - Every command maps to exactly one operation and one direction.

use std::fmt;
use std::str::FromStr;

use crate::constants::errors;
use crate::error::WordPartError;
use crate::movement::Direction;

/// Prefix of the command identifiers registered with the host editor
pub const COMMAND_NAMESPACE: &str = "skrJpWordHandler.";

/// What a command does to each selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Collapse to the boundary
    Move,
    /// Move the active end only
    Extend,
    /// Remove text up to the boundary
    Delete,
}

/// Word-part commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    ExtendLeft,
    ExtendRight,
    DeleteLeft,
    DeleteRight,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::ExtendLeft,
        Command::ExtendRight,
        Command::DeleteLeft,
        Command::DeleteRight,
    ];

    pub const fn new(operation: Operation, direction: Direction) -> Self {
        match (operation, direction) {
            (Operation::Move, Direction::Left) => Command::MoveLeft,
            (Operation::Move, Direction::Right) => Command::MoveRight,
            (Operation::Extend, Direction::Left) => Command::ExtendLeft,
            (Operation::Extend, Direction::Right) => Command::ExtendRight,
            (Operation::Delete, Direction::Left) => Command::DeleteLeft,
            (Operation::Delete, Direction::Right) => Command::DeleteRight,
        }
    }

    pub const fn operation(self) -> Operation {
        match self {
            Command::MoveLeft | Command::MoveRight => Operation::Move,
            Command::ExtendLeft | Command::ExtendRight => Operation::Extend,
            Command::DeleteLeft | Command::DeleteRight => Operation::Delete,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Command::MoveLeft | Command::ExtendLeft | Command::DeleteLeft => Direction::Left,
            Command::MoveRight | Command::ExtendRight | Command::DeleteRight => Direction::Right,
        }
    }

    /// Whether the command modifies the document
    pub const fn is_edit(self) -> bool {
        matches!(self.operation(), Operation::Delete)
    }

    /// Kebab-case name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::ExtendLeft => "extend-left",
            Command::ExtendRight => "extend-right",
            Command::DeleteLeft => "delete-left",
            Command::DeleteRight => "delete-right",
        }
    }

    /// Identifier the host editor registers, without the namespace
    pub const fn identifier(self) -> &'static str {
        match self {
            Command::MoveLeft => "moveWordPartLeft",
            Command::MoveRight => "moveWordPartRight",
            Command::ExtendLeft => "moveWordPartLeftSelect",
            Command::ExtendRight => "moveWordPartRightSelect",
            Command::DeleteLeft => "deleteWordPartLeft",
            Command::DeleteRight => "deleteWordPartRight",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the kebab-case name or the (optionally namespaced) identifier
impl FromStr for Command {
    type Err = WordPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bare = s.strip_prefix(COMMAND_NAMESPACE).unwrap_or(s);
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.name() == bare || cmd.identifier() == bare)
            .ok_or_else(|| {
                WordPartError::parse(
                    errors::UNKNOWN_COMMAND,
                    format!("unknown command '{s}'"),
                )
            })
    }
}
