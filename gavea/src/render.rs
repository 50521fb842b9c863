// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Draw pass: replays packed lines onto a [`DrawSurface`] as columns.
//!
//! The whole coordinate frame is rotated a quarter turn once, up front.
//! In the rotated frame a line is drawn as ordinary horizontal text;
//! on screen it reads top-to-bottom. Advancing by a line's height in the
//! rotated frame moves one column sideways on screen.

use std::f32::consts::FRAC_PI_2;

use crate::layout::{make_range, Paragraph};
use crate::measure::{DrawSurface, TransformScope};
use crate::style::{Alignment, Direction};

pub(crate) fn draw(paragraph: &Paragraph, surface: &mut dyn DrawSurface, origin: (f32, f32)) {
    let mut scope = TransformScope::push(surface);
    scope.translate(origin.0, origin.1);
    scope.rotate(FRAC_PI_2);

    let style = paragraph.style();
    let column = paragraph.column_extent();
    let runs = paragraph.runs();
    let shaped = paragraph.shaped();
    let line_count = paragraph.line_count();

    for (index, line) in paragraph.lines().iter().enumerate() {
        if style.direction == Direction::LeftToRight {
            scope.translate(0.0, -line.height);
        }
        let mut advance = align_offset(style.align, column, line.width);
        for i in make_range(line.runs) {
            scope.draw_shaped(shaped[i].as_ref(), advance, 0.0);
            advance += runs[i].longest_line;
        }
        if paragraph.truncated() && index + 1 == line_count {
            if let Some(marker) = paragraph.ellipsis_shaped() {
                scope.draw_shaped(marker, advance, 0.0);
            }
        }
        if style.direction == Direction::RightToLeft {
            scope.translate(0.0, line.height);
        }
    }
}

#[inline]
fn align_offset(align: Alignment, column: f32, line_width: f32) -> f32 {
    let slack = (column - line_width).max(0.);
    match align {
        Alignment::Start => 0.0,
        Alignment::Middle => slack * 0.5,
        Alignment::End => slack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_alignment_has_no_offset() {
        assert_eq!(align_offset(Alignment::Start, 100., 60.), 0.);
    }

    #[test]
    fn middle_alignment_splits_slack() {
        assert_eq!(align_offset(Alignment::Middle, 100., 60.), 20.);
    }

    #[test]
    fn end_alignment_takes_full_slack() {
        assert_eq!(align_offset(Alignment::End, 100., 60.), 40.);
    }

    #[test]
    fn overflowing_line_never_offsets_backwards() {
        assert_eq!(align_offset(Alignment::End, 50., 80.), 0.);
    }
}
