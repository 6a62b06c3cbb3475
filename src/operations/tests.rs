use super::*;
use crate::buffer::TextBuffer;
use crate::constants::errors;
use crate::error::WordPartError;
use crate::position::Position;

fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

fn caret(line: usize, column: usize) -> Selection {
    Selection::caret(pos(line, column))
}

fn seps() -> SeparatorSet {
    SeparatorSet::default()
}

/// Delete from a single caret on a one-line text and return the new text
fn delete_once(text: &str, column: usize, direction: Direction) -> String {
    let mut buffer = TextBuffer::from_text(text);
    delete_word_part(&mut buffer, &[caret(0, column)], direction, &seps()).unwrap();
    buffer.text()
}

/// Host buffer that refuses every edit
struct ReadOnlyBuffer(TextBuffer);

impl BufferView for ReadOnlyBuffer {
    fn line_count(&self) -> usize {
        self.0.line_count()
    }
    fn line_len(&self, line: usize) -> usize {
        self.0.line_len(line)
    }
    fn char_at(&self, line: usize, column: usize) -> Option<char> {
        self.0.char_at(line, column)
    }
    fn position_to_offset(&self, pos: Position) -> usize {
        self.0.position_to_offset(pos)
    }
    fn offset_to_position(&self, offset: usize) -> Position {
        self.0.offset_to_position(offset)
    }
}

impl BufferEdit for ReadOnlyBuffer {
    fn apply_edits(&mut self, _edits: &[TextEdit]) -> Result<()> {
        Err(WordPartError::edit(errors::INVALID_RANGE, "read-only"))
    }
}

// =============================================================================
// Move Tests
// =============================================================================

#[test]
fn test_move_collapses_to_boundary() {
    let buffer = TextBuffer::from_text("fooBarBAZ");
    let sel = Selection::new(pos(0, 0), pos(0, 4));
    let moved = move_word_part(&buffer, &[sel], Direction::Right, &seps());
    assert_eq!(moved, vec![caret(0, 6)]);
    let moved = move_word_part(&buffer, &[sel], Direction::Left, &seps());
    assert_eq!(moved, vec![caret(0, 3)]);
}

#[test]
fn test_move_keeps_order_and_duplicates() {
    let buffer = TextBuffer::from_text("fooBar\nbazQux");
    let input = [caret(1, 0), caret(0, 0), caret(0, 1)];
    let moved = move_word_part(&buffer, &input, Direction::Right, &seps());
    assert_eq!(moved, vec![caret(1, 3), caret(0, 3), caret(0, 3)]);
}

#[test]
fn test_move_empty_selection_list() {
    let buffer = TextBuffer::from_text("abc");
    assert!(move_word_part(&buffer, &[], Direction::Left, &seps()).is_empty());
}

// =============================================================================
// Extend Tests
// =============================================================================

#[test]
fn test_extend_keeps_anchor() {
    let buffer = TextBuffer::from_text("fooBarBAZ");
    let start = caret(0, 0);
    let once = extend_word_part(&buffer, &[start], Direction::Right, &seps());
    assert_eq!(once, vec![Selection::new(pos(0, 0), pos(0, 3))]);
    let twice = extend_word_part(&buffer, &once, Direction::Right, &seps());
    assert_eq!(twice, vec![Selection::new(pos(0, 0), pos(0, 6))]);
    let back = extend_word_part(&buffer, &twice, Direction::Left, &seps());
    assert_eq!(back, vec![Selection::new(pos(0, 0), pos(0, 3))]);
}

#[test]
fn test_extend_across_lines() {
    let buffer = TextBuffer::from_text("\n\n");
    let extended = extend_word_part(&buffer, &[caret(1, 0)], Direction::Left, &seps());
    assert_eq!(extended, vec![Selection::new(pos(1, 0), pos(0, 0))]);

    let buffer = TextBuffer::from_text(" \n\n");
    let extended = extend_word_part(&buffer, &[caret(0, 1)], Direction::Right, &seps());
    assert_eq!(extended, vec![Selection::new(pos(0, 1), pos(1, 0))]);
}

#[test]
fn test_extend_matches_move_target() {
    // (text, caret column, expected active column)
    let cases: &[(&str, usize, usize, Direction)] = &[
        ("aAa", 2, 1, Direction::Left),
        ("AAa", 2, 0, Direction::Left),
        (" AaAa ", 4, 3, Direction::Left),
        ("あ亜あ", 2, 1, Direction::Left),
        ("aA", 0, 1, Direction::Right),
        (" AAa ", 1, 3, Direction::Right),
        (" ＡＡあ ", 1, 3, Direction::Right),
        ("ああ亜", 0, 2, Direction::Right),
    ];
    for &(text, start, expected, direction) in cases {
        let buffer = TextBuffer::from_text(text);
        let extended = extend_word_part(&buffer, &[caret(0, start)], direction, &seps());
        assert_eq!(
            extended,
            vec![Selection::new(pos(0, start), pos(0, expected))],
            "extend {direction} in {text:?} from {start}"
        );
    }
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_left_table() {
    // (text, caret column, text after deletion)
    let cases: &[(&str, usize, &str)] = &[
    ("a", 0, "a"),
    ("aa", 1, "a"),
    ("Aa", 1, "a"),
    ("aA", 1, "A"),
    ("AA", 1, "A"),
    (" aa", 2, " a"),
    ("Aaa", 2, "a"),
    ("aaa", 2, "a"),
    (" Aa", 2, " a"),
    ("AAa", 2, "a"),
    ("aAa", 2, "aa"),
    (" aa", 3, " "),
    ("Aaa", 3, ""),
    ("aaa", 3, ""),
    (" Aa", 3, " "),
    ("AAa", 3, "AA"),
    ("aAa", 3, "a"),
    (" aa ", 2, " a "),
    ("Aaa ", 2, "a "),
    ("aaa ", 2, "a "),
    (" Aa ", 2, " a "),
    ("AAa ", 2, "a "),
    ("aAa ", 2, "aa "),
    ("  Aaa ", 4, "  a "),
    (" AAaa ", 4, " AAa "),
    (" aAaa ", 4, " aa "),
    ("  AAa ", 4, "  a "),
    (" AAAa ", 4, " a "),
    (" aAAa ", 4, " aa "),
    ("  aAa ", 4, "  aa "),
    (" AaAa ", 4, " Aaa "),
    (" aaAa ", 4, " aaa "),
    ("  aaa ", 4, "  a "),
    (" Aaaa ", 4, " a "),
    (" aaaa ", 4, " a "),
    (" Aaa ", 3, " a "),
    ("AAaa ", 3, "AAa "),
    ("aAaa ", 3, "aa "),
    (" AAa ", 3, " a "),
    ("AAAa ", 3, "a "),
    ("aAAa ", 3, "aa "),
    (" aAa ", 3, " aa "),
    ("AaAa ", 3, "Aaa "),
    ("aaAa ", 3, "aaa "),
    (" aaa ", 3, " a "),
    ("Aaaa ", 3, "a "),
    ("aaaa ", 3, "a "),
    ("ああ", 1, "あ"),
    ("あ亜", 1, "亜"),
    ("亜あ", 1, "あ"),
    ("亜亜", 1, "亜"),
    ("あああ", 2, "あ"),
    ("ああ亜", 2, "亜"),
    ("あ亜あ", 2, "ああ"),
    ("あ亜亜", 2, "あ亜"),
    ("亜あ亜", 2, "亜亜"),
    ("亜あア", 2, "亜ア"),
    ("あああ ", 2, "あ "),
    ("ああ亜 ", 2, "亜 "),
    ("あ亜あ ", 2, "ああ "),
    ("あ亜亜 ", 2, "あ亜 "),
    ("あ亜ア ", 2, "あア "),
    (" ああああ ", 4, " あ "),
    (" あああ亜 ", 4, " 亜 "),
    (" ああ亜あ ", 4, " あああ "),
    (" ああ亜亜 ", 4, " ああ亜 "),
    (" ああ亜ア ", 4, " ああア "),
    (" あ亜亜あ ", 4, " ああ "),
    (" あａａあ ", 4, " ああ "),
    (" あａＡあ ", 4, " あａあ "),
    (" あＡａあ ", 4, " あＡあ "),
    (" あＡＡあ ", 4, " ああ "),
    ("ああああ ", 3, "あ "),
    ("ああ亜あ ", 3, "あああ "),
    ("あ亜ああ ", 3, "あ亜あ "),
    ("あ亜亜あ ", 3, "ああ "),
    ("あ亜アあ ", 3, "あ亜あ "),
    ];
    for &(text, start, expected) in cases {
        assert_eq!(
            delete_once(text, start, Direction::Left),
            expected,
            "delete left in {text:?} from column {start}"
        );
    }
}

#[test]
fn test_delete_right_table() {
    // (text, caret column, text after deletion)
    let cases: &[(&str, usize, &str)] = &[
    ("a", 0, ""),
    ("a", 1, "a"),
    ("aa", 0, ""),
    ("aA", 0, "A"),
    ("Aa", 0, ""),
    ("AA", 0, ""),
    ("aA ", 1, "a "),
    ("A a", 1, "Aa"),
    (" Aa", 1, " "),
    ("AAa", 1, "Aa"),
    ("aAa", 1, "a"),
    (" a ", 1, "  "),
    (" aA", 1, " A"),
    (" aa", 1, " "),
    (" A ", 1, "  "),
    (" AA", 1, " "),
    (" Aa", 1, " "),
    (" Aa  ", 1, "   "),
    (" AaA ", 1, " A "),
    (" Aaa ", 1, "  "),
    (" AA  ", 1, "   "),
    (" AAA ", 1, "  "),
    (" AAa ", 1, " a "),
    (" aA  ", 1, " A  "),
    (" aAA ", 1, " AA "),
    (" aAa ", 1, " Aa "),
    (" aa  ", 1, "   "),
    (" aaA ", 1, " A "),
    (" aaa ", 1, "  "),
    (" Aa ", 1, "  "),
    (" AaA", 1, " A"),
    (" Aaa", 1, " "),
    (" AA ", 1, "  "),
    (" AAA", 1, " "),
    (" AAa", 1, " a"),
    (" aA ", 1, " A "),
    (" aAA", 1, " AA"),
    (" aAa", 1, " Aa"),
    (" aa ", 1, "  "),
    (" aaA", 1, " A"),
    (" aaa", 1, " "),
    ("あ", 0, ""),
    ("ああ", 0, ""),
    ("亜あ", 0, "あ"),
    ("あ亜", 0, "亜"),
    ("亜亜", 0, ""),
    ("あああ", 0, ""),
    ("亜ああ", 0, "ああ"),
    ("あ亜あ", 0, "亜あ"),
    ("ああ亜", 0, "亜"),
    ("亜あア", 0, "あア"),
    (" ああ", 1, " "),
    (" 亜あ", 1, " あ"),
    (" あ亜", 1, " 亜"),
    (" 亜亜", 1, " "),
    (" あああ ", 1, "  "),
    (" 亜ああ ", 1, " ああ "),
    (" あ亜あ ", 1, " 亜あ "),
    (" ああ亜 ", 1, " 亜 "),
    (" 亜あア ", 1, " あア "),
    (" あああ", 1, " "),
    (" 亜ああ", 1, " ああ"),
    (" あ亜あ", 1, " 亜あ"),
    (" ああ亜", 1, " 亜"),
    (" 亜あア", 1, " あア"),
    (" あａａあ ", 1, " ａａあ "),
    (" あａＡあ ", 1, " ａＡあ "),
    (" あＡａあ ", 1, " Ａａあ "),
    (" あＡＡあ ", 1, " ＡＡあ "),
    (" ａａあ ", 1, " あ "),
    (" ａＡあ ", 1, " Ａあ "),
    (" Ａａあ ", 1, " ａあ "),
    (" ＡＡあ ", 1, " あ "),
    (" ああああ ", 1, "  "),
    ];
    for &(text, start, expected) in cases {
        assert_eq!(
            delete_once(text, start, Direction::Right),
            expected,
            "delete right in {text:?} from column {start}"
        );
    }
}

#[test]
fn test_delete_joins_lines() {
    let mut buffer = TextBuffer::from_text("\n\n");
    delete_word_part(&mut buffer, &[caret(1, 0)], Direction::Left, &seps()).unwrap();
    assert_eq!(buffer.text(), "\n");

    let mut buffer = TextBuffer::from_text(" \n\n");
    delete_word_part(&mut buffer, &[caret(1, 0)], Direction::Left, &seps()).unwrap();
    assert_eq!(buffer.text(), " \n");

    let mut buffer = TextBuffer::from_text("\n\n");
    delete_word_part(&mut buffer, &[caret(0, 0)], Direction::Right, &seps()).unwrap();
    assert_eq!(buffer.text(), "\n");

    let mut buffer = TextBuffer::from_text(" \n\n");
    delete_word_part(&mut buffer, &[caret(0, 1)], Direction::Right, &seps()).unwrap();
    assert_eq!(buffer.text(), " \n");
}

#[test]
fn test_delete_left_undo() {
    let mut buffer = TextBuffer::from_text("abc");
    let after = delete_word_part(&mut buffer, &[caret(0, 3)], Direction::Left, &seps()).unwrap();
    assert_eq!(buffer.text(), "");
    assert_eq!(after, vec![caret(0, 0)]);

    buffer.undo().unwrap();
    assert_eq!(buffer.text(), "abc");
}

#[test]
fn test_delete_right_undo() {
    let mut buffer = TextBuffer::from_text("abc");
    delete_word_part(&mut buffer, &[caret(0, 0)], Direction::Right, &seps()).unwrap();
    assert_eq!(buffer.text(), "");

    buffer.undo().unwrap();
    assert_eq!(buffer.text(), "abc");
}

#[test]
fn test_delete_multiple_carets_single_undo() {
    let mut buffer = TextBuffer::from_text("fooBar bazQux");
    let after = delete_word_part(
        &mut buffer,
        &[caret(0, 6), caret(0, 13)],
        Direction::Left,
        &seps(),
    )
    .unwrap();
    assert_eq!(buffer.text(), "foo baz");
    assert_eq!(after, vec![caret(0, 3), caret(0, 7)]);

    buffer.undo().unwrap();
    assert_eq!(buffer.text(), "fooBar bazQux");
    assert!(!buffer.can_undo());
}

#[test]
fn test_delete_carets_on_different_lines() {
    let mut buffer = TextBuffer::from_text("fooBar\nbazQux");
    let after = delete_word_part(
        &mut buffer,
        &[caret(1, 0), caret(0, 0)],
        Direction::Right,
        &seps(),
    )
    .unwrap();
    assert_eq!(buffer.text(), "Bar\nQux");
    assert_eq!(after, vec![caret(1, 0), caret(0, 0)]);
}

#[test]
fn test_delete_carets_in_same_part_delete_once() {
    let mut buffer = TextBuffer::from_text("fooBarBaz");
    let after = delete_word_part(
        &mut buffer,
        &[caret(0, 4), caret(0, 5)],
        Direction::Left,
        &seps(),
    )
    .unwrap();
    assert_eq!(buffer.text(), "foorBaz");
    assert_eq!(after, vec![caret(0, 3), caret(0, 3)]);

    let mut buffer = TextBuffer::from_text("fooBar");
    let after = delete_word_part(
        &mut buffer,
        &[caret(0, 0), caret(0, 1)],
        Direction::Right,
        &seps(),
    )
    .unwrap();
    assert_eq!(buffer.text(), "Bar");
    assert_eq!(after, vec![caret(0, 0), caret(0, 0)]);
}

#[test]
fn test_delete_from_selection_anchor() {
    let mut buffer = TextBuffer::from_text("fooBarBAZ");
    let sel = Selection::new(pos(0, 9), pos(0, 6));
    let after = delete_word_part(&mut buffer, &[sel], Direction::Left, &seps()).unwrap();
    assert_eq!(buffer.text(), "foo");
    assert_eq!(after, vec![caret(0, 3)]);
}

#[test]
fn test_delete_nothing_is_not_recorded() {
    let mut buffer = TextBuffer::from_text("a");
    let after = delete_word_part(&mut buffer, &[caret(0, 0)], Direction::Left, &seps()).unwrap();
    assert_eq!(buffer.text(), "a");
    assert_eq!(after, vec![caret(0, 0)]);
    assert!(!buffer.can_undo());
    assert_eq!(buffer.revision, 0);
}

#[test]
fn test_delete_failure_leaves_everything_untouched() {
    let mut buffer = ReadOnlyBuffer(TextBuffer::from_text("fooBar"));
    let err = delete_word_part(&mut buffer, &[caret(0, 6)], Direction::Left, &seps())
        .unwrap_err();
    assert!(err.contains_msg("read-only"));
    assert_eq!(buffer.0.text(), "fooBar");
}

#[test]
fn test_delete_with_separators() {
    let mut buffer = TextBuffer::from_text("foo-bar");
    let dash = SeparatorSet::new("-");
    delete_word_part(&mut buffer, &[caret(0, 4)], Direction::Left, &dash).unwrap();
    assert_eq!(buffer.text(), "foobar");
}

// =============================================================================
// Range Helpers
// =============================================================================

#[test]
fn test_delete_ranges_are_normalized() {
    let buffer = TextBuffer::from_text("fooBar");
    let ranges = delete_ranges(&buffer, &[caret(0, 3)], Direction::Right, &seps());
    assert_eq!(ranges, vec![Range::new(pos(0, 3), pos(0, 6))]);
    let ranges = delete_ranges(&buffer, &[caret(0, 3)], Direction::Left, &seps());
    assert_eq!(ranges, vec![Range::new(pos(0, 0), pos(0, 3))]);
}

#[test]
fn test_merge_ranges() {
    let r = |a: usize, b: usize| Range::new(pos(0, a), pos(0, b));
    assert_eq!(
        merge_ranges(vec![r(5, 7), r(0, 2), r(1, 3), r(4, 4), r(3, 4)]),
        vec![r(0, 4), r(5, 7)]
    );
    assert!(merge_ranges(vec![r(2, 2)]).is_empty());
    assert_eq!(merge_ranges(vec![r(0, 9), r(2, 3)]), vec![r(0, 9)]);
}

#[test]
fn test_shift_offset() {
    let spans = [(2, 4), (6, 9)];
    assert_eq!(shift_offset(0, &spans), 0);
    assert_eq!(shift_offset(2, &spans), 2);
    assert_eq!(shift_offset(3, &spans), 2);
    assert_eq!(shift_offset(5, &spans), 3);
    assert_eq!(shift_offset(10, &spans), 5);
}
