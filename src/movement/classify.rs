//! Character classification for word-part movement

use std::collections::HashSet;

use crate::buffer::api::BufferView;
use crate::constants::code_points::*;

/// Character categories for word-part boundary detection
///
/// Every Latin category exists twice, once for half-width and once for
/// full-width forms, so that `ｆｏｏＢＡＲ` splits the same way `fooBAR` does
/// but never merges with its half-width neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Half-width space
    SpaceHalf,
    /// Ideographic space
    SpaceFull,
    UpperAlHalf,
    LowerAlHalf,
    UpperAlFull,
    LowerAlFull,
    NumHalf,
    NumFull,
    UnderHalf,
    UnderFull,
    /// Latin-1 supplement letters
    Latin,
    Punctuation,
    Hiragana,
    KatakanaHalf,
    KatakanaFull,
    /// Han ideographs and everything unmatched
    Other,
    /// Member of the user's separator set
    Separator,
    /// No character at this position
    Invalid,
    /// Horizontal tab
    Tab,
}

impl CharClass {
    /// Half-width ASCII letter (the only classes the camelCase rules look at)
    pub fn is_ascii_alpha(self) -> bool {
        matches!(self, CharClass::UpperAlHalf | CharClass::LowerAlHalf)
    }
}

/// Characters that always classify as [`CharClass::Separator`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    pub fn new(separators: &str) -> Self {
        Self {
            chars: separators.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }
}

impl From<&str> for SeparatorSet {
    fn from(separators: &str) -> Self {
        Self::new(separators)
    }
}

fn in_ranges(c: char, ranges: &[(char, char)]) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

fn is_punctuation(c: char) -> bool {
    in_ranges(c, &ASCII_PUNCTUATION)
        || ((IDEOGRAPHIC_COMMA..=IDEOGRAPHIC_HALF_FILL_SPACE).contains(&c)
            && c != IDEOGRAPHIC_ITERATION_MARK)
        || c == KATAKANA_MIDDLE_DOT
        || in_ranges(c, &FULLWIDTH_PUNCTUATION)
}

/// Classify a single character
///
/// Total: never returns [`CharClass::Invalid`]. The separator set is checked
/// before any built-in rule.
pub fn classify_char(c: char, separators: &SeparatorSet) -> CharClass {
    if separators.contains(c) {
        return CharClass::Separator;
    }
    match c {
        HT => CharClass::Tab,
        SPACE => CharClass::SpaceHalf,
        F_SPACE => CharClass::SpaceFull,
        DIGIT_0..=DIGIT_9 => CharClass::NumHalf,
        F_DIGIT_0..=F_DIGIT_9 => CharClass::NumFull,
        UPPER_A..=UPPER_Z => CharClass::UpperAlHalf,
        UNDERSCORE => CharClass::UnderHalf,
        LOWER_A..=LOWER_Z => CharClass::LowerAlHalf,
        LATIN_START..=LATIN_END if c != LATIN_MULTIPLICATION && c != LATIN_DIVISION => {
            CharClass::Latin
        }
        F_UPPER_A..=F_UPPER_Z => CharClass::UpperAlFull,
        F_UNDERSCORE => CharClass::UnderFull,
        F_LOWER_A..=F_LOWER_Z => CharClass::LowerAlFull,
        _ if is_punctuation(c) => CharClass::Punctuation,
        F_KATAKANA_START..=F_KATAKANA_END => CharClass::KatakanaFull,
        HIRAGANA_START..=HIRAGANA_END => CharClass::Hiragana,
        H_KATAKANA_START..=H_KATAKANA_END => CharClass::KatakanaHalf,
        _ => CharClass::Other,
    }
}

/// Classifies positions of one document against one separator set.
pub struct Classifier<'a, V: BufferView + ?Sized> {
    view: &'a V,
    separators: &'a SeparatorSet,
}

impl<V: BufferView + ?Sized> Clone for Classifier<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: BufferView + ?Sized> Copy for Classifier<'_, V> {}

impl<'a, V: BufferView + ?Sized> Classifier<'a, V> {
    pub fn new(view: &'a V, separators: &'a SeparatorSet) -> Self {
        Self { view, separators }
    }

    /// Class of the character at `(line, column)`, or `Invalid` at and past
    /// the end of the line or document.
    pub fn class_at(&self, line: usize, column: usize) -> CharClass {
        self.view
            .char_at(line, column)
            .map_or(CharClass::Invalid, |c| classify_char(c, self.separators))
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.view.line_len(line)
    }

    pub fn view(&self) -> &'a V {
        self.view
    }
}
