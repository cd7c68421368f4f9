// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::PositionedValue;

/// One step of a rewrite, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The next input character is copied (possibly transformed) to the output.
    Keep(char),
    /// The next input character is removed.
    Drop,
    /// A character without input counterpart is added to the output.
    Insert(char),
}

/// Applies `edits` to a text whose cursor is at `pos` and returns the new
/// text with the cursor moved along.
///
/// Two offsets run in parallel: characters consumed from the input (`Keep`,
/// `Drop`) and characters emitted (`Keep`, `Insert`). A drop left of the
/// original cursor pulls the cursor back by one, an insertion at or left of
/// the already adjusted cursor pushes it forward by one. The result is
/// clamped to the output length. One pass, no lookahead.
pub fn rewrite<I>(pos: usize, edits: I) -> PositionedValue<String>
where
    I: IntoIterator<Item = Edit>,
{
    let mut value = String::new();
    let mut pos_original = 0usize;
    let mut pos_rewritten = 0usize;
    let mut cursor = pos as isize;

    for edit in edits {
        match edit {
            Edit::Keep(c) => {
                value.push(c);
                pos_original += 1;
                pos_rewritten += 1;
            }
            Edit::Drop => {
                if pos_original < pos {
                    cursor -= 1;
                }
                pos_original += 1;
            }
            Edit::Insert(c) => {
                if pos_rewritten as isize <= cursor {
                    cursor += 1;
                }
                value.push(c);
                pos_rewritten += 1;
            }
        }
    }

    let pos = cursor.clamp(0, pos_rewritten as isize) as usize;
    PositionedValue { value, pos }
}

/// Edits copying every character of `s`.
pub(crate) fn keep_all(s: &str) -> impl Iterator<Item = Edit> + '_ {
    s.chars().map(Edit::Keep)
}

/// Edits inserting every character of `s`.
pub(crate) fn insert_all(s: &str) -> impl Iterator<Item = Edit> + '_ {
    s.chars().map(Edit::Insert)
}

/// Edits dropping `count` characters.
pub(crate) fn drop_n(count: usize) -> impl Iterator<Item = Edit> {
    std::iter::repeat(Edit::Drop).take(count)
}

#[cfg(test)]
mod tests {
    use super::{rewrite, Edit};

    fn edits_for_grouping(input: &str) -> Vec<Edit> {
        let mut edits = Vec::new();
        let mut kept = 0;
        for c in input.chars() {
            if c == ' ' {
                edits.push(Edit::Drop);
                continue;
            }
            if kept > 0 && kept % 4 == 0 {
                edits.push(Edit::Insert(' '));
            }
            edits.push(Edit::Keep(c));
            kept += 1;
        }
        edits
    }

    #[test]
    fn keeps_cursor_for_identity() {
        let result = rewrite(3, "12345".chars().map(Edit::Keep));
        assert_eq!("12345", result.value);
        assert_eq!(3, result.pos);
    }

    #[test]
    fn drops_left_of_cursor_pull_it_back() {
        let edits = "1-2-3".chars().map(|c| if c == '-' { Edit::Drop } else { Edit::Keep(c) });
        let result = rewrite(4, edits);
        assert_eq!("123", result.value);
        assert_eq!(2, result.pos);
    }

    #[test]
    fn drops_right_of_cursor_leave_it() {
        let edits = "12-3".chars().map(|c| if c == '-' { Edit::Drop } else { Edit::Keep(c) });
        let result = rewrite(1, edits);
        assert_eq!("123", result.value);
        assert_eq!(1, result.pos);
    }

    #[test]
    fn insert_at_cursor_moves_it_past_separator() {
        let result = rewrite(4, edits_for_grouping("DE167"));
        assert_eq!("DE16 7", result.value);
        assert_eq!(5, result.pos);

        let result = rewrite(5, edits_for_grouping("DE167"));
        assert_eq!(6, result.pos);
    }

    #[test]
    fn regroups_already_grouped_text() {
        let result = rewrite(9, edits_for_grouping("DE16 70 1"));
        assert_eq!("DE16 701", result.value);
        assert_eq!(8, result.pos);

        let result = rewrite(2, edits_for_grouping("DE16 70 1"));
        assert_eq!(2, result.pos);
    }

    #[test]
    fn clamps_cursor() {
        let result = rewrite(42, "12".chars().map(Edit::Keep));
        assert_eq!(2, result.pos);

        let result = rewrite(0, [Edit::Drop, Edit::Drop]);
        assert_eq!("", result.value);
        assert_eq!(0, result.pos);
    }

    #[test]
    fn typing_never_moves_cursor_backwards() {
        let text = "DE1670160000";
        for end in 1..=text.len() {
            let typed = &text[..end];
            let before = rewrite(end - 1, edits_for_grouping(&text[..end - 1]));
            let after = rewrite(end, edits_for_grouping(typed));
            assert!(after.pos >= before.pos, "{typed}");
            assert!(after.pos <= after.value.chars().count());
        }
    }
}
