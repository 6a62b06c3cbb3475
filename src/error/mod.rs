//! Centralized error handling for wordpart
//! Defines the error type shared by the buffer, configuration and front ends.
//!
//! The word-part scanner itself has no error path: every document edge resolves
//! to a concrete position. Errors only come from collaborators (batch edits,
//! config files, terminal I/O, argument parsing).

use std::fmt;

use crate::constants::errors;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// File system or I/O errors
    Io,
    /// Command, position or argument parsing errors
    Parse,
    /// Configuration file errors
    Config,
    /// Batch edit rejected by the buffer
    Edit,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Parse => write!(f, "Parse"),
            Self::Config => write!(f, "Config"),
            Self::Edit => write!(f, "Edit"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in wordpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPartError {
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (see [`crate::constants::errors`])
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl WordPartError {
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a rejected batch edit
    pub fn edit(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorType::Edit, code, message)
    }

    /// Shorthand for a parse failure
    pub fn parse(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorType::Parse, code, message)
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for WordPartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for WordPartError {}

impl From<std::io::Error> for WordPartError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, errors::IO_ERROR, err.to_string())
    }
}

impl From<toml::de::Error> for WordPartError {
    fn from(err: toml::de::Error) -> Self {
        Self::new(ErrorType::Config, errors::CONFIG_PARSE_FAILED, err.to_string())
    }
}

/// Result alias for wordpart operations
pub type Result<T> = std::result::Result<T, WordPartError>;
