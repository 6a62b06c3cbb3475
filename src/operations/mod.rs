//! Word-part operations over a set of selections
//!
//! Each selection is scanned independently from its active end, in the order
//! given, and the results come back in the same order. Deletion scans every
//! selection against the unmodified text before anything is removed, then
//! hands all removals to the buffer as one batch.

use log::debug;

use crate::buffer::api::{BufferEdit, BufferView, TextEdit};
use crate::error::Result;
use crate::movement::{find_boundary, Direction, SeparatorSet};
use crate::position::Range;
use crate::selection::Selection;

/// Collapse every selection to the boundary next to its active end
pub fn move_word_part<V: BufferView + ?Sized>(
    view: &V,
    selections: &[Selection],
    direction: Direction,
    separators: &SeparatorSet,
) -> Vec<Selection> {
    selections
        .iter()
        .map(|sel| Selection::caret(find_boundary(view, sel.active, direction, separators)))
        .collect()
}

/// Move only the active end of every selection; anchors stay put
pub fn extend_word_part<V: BufferView + ?Sized>(
    view: &V,
    selections: &[Selection],
    direction: Direction,
    separators: &SeparatorSet,
) -> Vec<Selection> {
    selections
        .iter()
        .map(|sel| sel.with_active(find_boundary(view, sel.active, direction, separators)))
        .collect()
}

/// Ranges a word-part deletion would remove, one per selection, in order.
///
/// Each range runs from the selection's anchor to the boundary next to its
/// active end, normalized so `start <= end`. Ranges may be empty.
pub fn delete_ranges<V: BufferView + ?Sized>(
    view: &V,
    selections: &[Selection],
    direction: Direction,
    separators: &SeparatorSet,
) -> Vec<Range> {
    selections
        .iter()
        .map(|sel| {
            let anchor = view.clamp(sel.anchor);
            let boundary = find_boundary(view, sel.active, direction, separators);
            Range::new(anchor, boundary).normalized()
        })
        .collect()
}

/// Sort, drop empty ranges and fuse ranges that overlap or touch
pub fn merge_ranges(mut ranges: Vec<Range>) -> Vec<Range> {
    ranges.retain(|r| !r.is_empty());
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Delete from every selection's anchor to the next word-part boundary.
///
/// All removals land as one batch, so a single undo restores them together.
/// On success every selection collapses to its deletion point in the edited
/// text. If the buffer rejects the batch the error is returned and nothing
/// changes; the caller keeps its selections.
pub fn delete_word_part<B: BufferEdit + ?Sized>(
    buffer: &mut B,
    selections: &[Selection],
    direction: Direction,
    separators: &SeparatorSet,
) -> Result<Vec<Selection>> {
    let ranges = delete_ranges(&*buffer, selections, direction, separators);
    let points: Vec<usize> = ranges
        .iter()
        .map(|r| buffer.position_to_offset(r.start))
        .collect();

    let merged = merge_ranges(ranges);
    if merged.is_empty() {
        debug!("delete {direction}: nothing to remove");
        return Ok(carets_at(&*buffer, &points));
    }

    let spans: Vec<(usize, usize)> = merged
        .iter()
        .map(|r| (buffer.position_to_offset(r.start), buffer.position_to_offset(r.end)))
        .collect();
    let edits: Vec<TextEdit> = merged.iter().copied().map(TextEdit::delete).collect();
    debug!(
        "delete {direction}: {} selection(s) -> {} range(s)",
        selections.len(),
        edits.len()
    );
    buffer.apply_edits(&edits)?;

    let shifted: Vec<usize> = points
        .iter()
        .map(|&offset| shift_offset(offset, &spans))
        .collect();
    Ok(carets_at(&*buffer, &shifted))
}

/// Where `offset` ends up once every `(start, end)` span is removed
fn shift_offset(offset: usize, spans: &[(usize, usize)]) -> usize {
    let removed: usize = spans
        .iter()
        .filter(|&&(start, _)| start < offset)
        .map(|&(start, end)| end.min(offset) - start)
        .sum();
    offset - removed
}

fn carets_at<V: BufferView + ?Sized>(view: &V, offsets: &[usize]) -> Vec<Selection> {
    offsets
        .iter()
        .map(|&offset| Selection::caret(view.offset_to_position(offset)))
        .collect()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
