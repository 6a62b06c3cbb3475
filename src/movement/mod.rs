//! Word-part movement semantics
//!
//! This module decides where a caret lands when it moves by one word-part.
//!
//! ## Design
//!
//! Movement is based on character classes. Every character maps to exactly one
//! [`CharClass`]; half-width and full-width forms of the same Latin category
//! are distinct classes, as are Hiragana, the two Katakana widths and Han
//! ideographs. A word-part is a run of one class, refined at camelCase
//! adjacencies:
//!
//! - `fooBarBAZ` is THREE parts: `foo`, `Bar`, `BAZ`
//! - `parseXMLDoc` is THREE parts: `parse`, `XML`, `Doc`
//! - `あいうカタカナ漢字` is THREE parts, one per script
//! - user separator characters are their own class and never join letters
//!
//! ## Modules
//!
//! - [`classify`] - Character classification and the separator set
//! - [`window`] - Three-cell window the scans slide along a line
//! - [`word_part`] - The left and right boundary scans

pub mod classify;
pub mod window;
pub mod word_part;

// Re-export commonly used types
pub use classify::{classify_char, CharClass, Classifier, SeparatorSet};
pub use window::Window;
pub use word_part::{find_boundary, line_parts, word_part_left, word_part_right, Direction};
