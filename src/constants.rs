//! Global constants for wordpart

/// Code points that delimit the character classes used by the word-part scanner.
///
/// Ranges are inclusive on both ends. Single code points that punch holes in a
/// range (the iteration mark, the katakana middle dot, the Latin-1 arithmetic
/// signs) are listed separately.
pub mod code_points {
    /// Horizontal tab
    pub const HT: char = '\u{0009}';
    /// Half-width space
    pub const SPACE: char = '\u{0020}';
    /// Full-width (ideographic) space
    pub const F_SPACE: char = '\u{3000}';

    pub const DIGIT_0: char = '0';
    pub const DIGIT_9: char = '9';
    pub const F_DIGIT_0: char = '\u{FF10}';
    pub const F_DIGIT_9: char = '\u{FF19}';

    pub const UPPER_A: char = 'A';
    pub const UPPER_Z: char = 'Z';
    pub const LOWER_A: char = 'a';
    pub const LOWER_Z: char = 'z';
    pub const F_UPPER_A: char = '\u{FF21}';
    pub const F_UPPER_Z: char = '\u{FF3A}';
    pub const F_LOWER_A: char = '\u{FF41}';
    pub const F_LOWER_Z: char = '\u{FF5A}';

    pub const UNDERSCORE: char = '_';
    pub const F_UNDERSCORE: char = '\u{FF3F}';

    /// Latin-1 supplement letters
    pub const LATIN_START: char = '\u{00C0}';
    pub const LATIN_END: char = '\u{00FF}';
    /// `×`, excluded from the Latin range
    pub const LATIN_MULTIPLICATION: char = '\u{00D7}';
    /// `÷`, excluded from the Latin range
    pub const LATIN_DIVISION: char = '\u{00F7}';

    /// ASCII punctuation blocks: `!`..`/`, `:`..`@`, `[`..`` ` ``, `{`..DEL
    pub const ASCII_PUNCTUATION: [(char, char); 4] = [
        ('\u{0021}', '\u{002F}'),
        ('\u{003A}', '\u{0040}'),
        ('\u{005B}', '\u{0060}'),
        ('\u{007B}', '\u{007F}'),
    ];

    /// CJK symbols and punctuation: `、` .. U+303F
    pub const IDEOGRAPHIC_COMMA: char = '\u{3001}';
    pub const IDEOGRAPHIC_HALF_FILL_SPACE: char = '\u{303F}';
    /// `々` is a letter in practice and stays out of the punctuation class
    pub const IDEOGRAPHIC_ITERATION_MARK: char = '\u{3005}';
    /// `・`
    pub const KATAKANA_MIDDLE_DOT: char = '\u{30FB}';

    /// Full-width forms treated as punctuation. The last block ends at the
    /// half-width katakana middle dot `･`.
    pub const FULLWIDTH_PUNCTUATION: [(char, char); 5] = [
        ('\u{FF01}', '\u{FF0F}'),
        ('\u{FF1A}', '\u{FF20}'),
        ('\u{FF3B}', '\u{FF40}'),
        ('\u{FF5B}', '\u{FF65}'),
        ('\u{FFE0}', '\u{FFEE}'),
    ];

    /// `ァ` .. `ヿ`
    pub const F_KATAKANA_START: char = '\u{30A1}';
    pub const F_KATAKANA_END: char = '\u{30FF}';
    /// `ぁ` .. `ゟ`
    pub const HIRAGANA_START: char = '\u{3041}';
    pub const HIRAGANA_END: char = '\u{309F}';
    /// `ｦ` .. `ﾝ`
    pub const H_KATAKANA_START: char = '\u{FF66}';
    pub const H_KATAKANA_END: char = '\u{FF9D}';
}

pub mod config {
    /// Separator string used when no configuration overrides it
    pub const DEFAULT_WORD_SEPARATORS: &str = "`~!@#$%^&*()-=+[{]}\\|;:'\",.<>/?";

    /// Tab stop width used when drawing the document
    pub const DEFAULT_TAB_WIDTH: usize = 4;

    /// Directory name under the user's config home
    pub const CONFIG_DIR: &str = "wordpart";

    /// File name of the TOML configuration
    pub const CONFIG_FILE: &str = "config.toml";
}

pub mod history {
    /// Maximum number of transactions kept for undo
    pub const DEFAULT_UNDO_DEPTH: usize = 1000;
}

pub mod errors {
    // Error Codes
    pub const INVALID_RANGE: &str = "INVALID_RANGE";
    pub const OVERLAPPING_EDITS: &str = "OVERLAPPING_EDITS";
    pub const POSITION_OUT_OF_BOUNDS: &str = "POSITION_OUT_OF_BOUNDS";
    pub const NOTHING_TO_UNDO: &str = "NOTHING_TO_UNDO";
    pub const NOTHING_TO_REDO: &str = "NOTHING_TO_REDO";
    pub const CONFIG_PARSE_FAILED: &str = "CONFIG_PARSE_FAILED";
    pub const CONFIG_READ_FAILED: &str = "CONFIG_READ_FAILED";
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const INVALID_POSITION: &str = "INVALID_POSITION";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const TERMINAL_ERROR: &str = "TERMINAL_ERROR";
}

pub mod ui {
    /// Separator printed between word-parts by `segment`
    pub const PART_SEPARATOR: char = '|';
}
