// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Break offset computation.
//!
//! A break offset marks the start of a word: the character before it is a
//! break unit, the character at it is not. Trailing break units stay glued
//! to the word they follow, which keeps runs contiguous and lets a column
//! end on the spaces without reflowing them.

use tracing::debug;

#[inline]
pub(crate) fn is_break_unit(ch: char) -> bool {
    ch == ' '
}

/// Computes the ordered break offsets for `text`.
///
/// Offsets are byte positions, strictly increasing, each in
/// `(0, text.len())`. Position 0 and `text.len()` are never breaks; a run
/// of consecutive break units produces a single break at the following
/// non-break character.
pub fn compute_breaks(text: &str) -> Vec<usize> {
    let mut breaks = Vec::new();
    let mut prev_was_break = false;
    for (offset, ch) in text.char_indices() {
        if offset > 0 && prev_was_break && !is_break_unit(ch) {
            breaks.push(offset);
        }
        prev_was_break = is_break_unit(ch);
    }
    breaks
}

/// Memoizing wrapper over [`compute_breaks`].
///
/// Keeps the previous `(text, breaks)` pair and skips the scan when the
/// input is identical by value. Changing the text invalidates the memo.
#[derive(Default, Debug)]
pub struct Segmenter {
    memo: Option<(String, Vec<usize>)>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breaks(&mut self, text: &str) -> &[usize] {
        let fresh = matches!(&self.memo, Some((cached, _)) if cached == text);
        if !fresh {
            debug!(len = text.len(), "segmenting text");
            self.memo = Some((text.to_owned(), compute_breaks(text)));
        }
        match &self.memo {
            Some((_, breaks)) => breaks,
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_breaks() {
        assert!(compute_breaks("").is_empty());
    }

    #[test]
    fn unbroken_text_has_no_breaks() {
        assert!(compute_breaks("abcdef").is_empty());
    }

    #[test]
    fn all_spaces_has_no_breaks() {
        assert!(compute_breaks("    ").is_empty());
    }

    #[test]
    fn breaks_land_at_word_starts() {
        // Spaces stay attached to the preceding word.
        assert_eq!(compute_breaks("ab cd ef"), vec![3, 6]);
    }

    #[test]
    fn consecutive_spaces_collapse() {
        assert_eq!(compute_breaks("ab   cd"), vec![5]);
    }

    #[test]
    fn leading_spaces_break_before_first_word() {
        assert_eq!(compute_breaks("  ab"), vec![2]);
    }

    #[test]
    fn trailing_spaces_produce_no_break() {
        assert_eq!(compute_breaks("ab  "), Vec::<usize>::new());
    }

    #[test]
    fn offsets_are_strictly_increasing_and_interior() {
        let text = "one two  three four  ";
        let breaks = compute_breaks(text);
        for pair in breaks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for &offset in &breaks {
            assert!(offset > 0 && offset < text.len());
            let before = text[..offset]
                .chars()
                .next_back()
                .map(is_break_unit)
                .unwrap_or(false);
            let at = text[offset..].chars().next().map(is_break_unit).unwrap_or(true);
            assert!(before && !at);
        }
    }

    #[test]
    fn multibyte_text_breaks_on_char_boundaries() {
        let text = "ᠮᠣᠩᠭᠣᠯ ᠪᠢᠴᠢᠭ";
        let breaks = compute_breaks(text);
        assert_eq!(breaks.len(), 1);
        assert!(text.is_char_boundary(breaks[0]));
    }

    #[test]
    fn segmenter_memoizes_identical_input() {
        let mut segmenter = Segmenter::new();
        let first = segmenter.breaks("ab cd ef").to_vec();
        let second = segmenter.breaks("ab cd ef").to_vec();
        assert_eq!(first, second);

        let changed = segmenter.breaks("ab cd").to_vec();
        assert_eq!(changed, vec![3]);
    }
}
