//! wordpart - word-part movement for mixed-script text
//!
//! Moves, extends and deletes by word-part: runs of one character class
//! (Latin letters by case and width, digits, Hiragana, Katakana, Han,
//! punctuation, whitespace) refined at camelCase boundaries.

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod history;
pub mod key;
pub mod keymap;
pub mod movement;
pub mod operations;
pub mod position;
pub mod selection;
pub mod term;
pub mod test_utils;
