// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::layout_data::*;

/// Line breaking support for a paragraph.
///
/// Greedy first-fit over the measured runs in order. A line closes when
/// the next run would push its accumulated width past the extent; the
/// check is strict, so a run exactly filling the remaining extent stays.
/// A single run wider than the extent is never split: the non-empty-line
/// guard places it alone on its own overflowing line.
pub struct BreakLines<'a> {
    runs: &'a [RunData],
    lines: &'a mut LineLayoutData,
    max_extent: f32,
    max_lines: Option<usize>,
    state: LineState,
}

#[derive(Copy, Clone, Default)]
struct LineState {
    start: u32,
    end: u32,
    width: f32,
    height: f32,
}

impl<'a> BreakLines<'a> {
    pub(super) fn new(
        runs: &'a [RunData],
        lines: &'a mut LineLayoutData,
        max_extent: f32,
        max_lines: Option<usize>,
    ) -> Self {
        lines.clear();
        Self {
            runs,
            lines,
            max_extent,
            max_lines,
            state: LineState::default(),
        }
    }

    /// Consumes the line breaker and finalizes all line computations.
    pub fn finish(mut self) {
        if self.max_lines == Some(0) {
            self.lines.truncated = !self.runs.is_empty();
            return;
        }
        for (i, run) in self.runs.iter().enumerate() {
            let overflows = self.state.width + run.width > self.max_extent;
            if overflows && self.state.end > self.state.start {
                commit_line(self.lines, &mut self.state);
                if Some(self.lines.lines.len()) == self.max_lines {
                    self.lines.truncated = true;
                    return;
                }
            }
            self.state.end = i as u32 + 1;
            self.state.width += run.width;
            self.state.height = self.state.height.max(run.height);
        }
        if self.state.end > self.state.start {
            commit_line(self.lines, &mut self.state);
        }
    }
}

#[inline]
fn commit_line(lines: &mut LineLayoutData, state: &mut LineState) {
    lines.lines.push(LineData {
        runs: (state.start, state.end),
        width: state.width,
        height: state.height,
    });
    state.start = state.end;
    state.width = 0.;
    state.height = 0.;
}
