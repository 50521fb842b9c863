// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::ops::Range;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::measure::ShapedText;

/// A measured run: one breakable unit of the paragraph.
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct RunData {
    /// Byte range of the run in the source text.
    pub text: (u32, u32),
    /// Natural (unconstrained) advance.
    pub width: f32,
    /// Natural height.
    pub height: f32,
    /// Longest laid-out line; the draw advance between runs.
    pub longest_line: f32,
}

/// A packed line: a contiguous range of run indices.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct LineData {
    /// Range in the paragraph's runs.
    pub runs: (u32, u32),
    /// Accumulated natural width of the constituent runs.
    pub width: f32,
    /// Max natural height of the constituent runs. Becomes the line's
    /// contribution to paragraph width once the line is rotated into a
    /// column.
    pub height: f32,
}

/// Run storage for a paragraph.
#[derive(Debug, Default)]
pub struct LayoutData {
    /// Measured runs, ordered by start offset.
    pub runs: Vec<RunData>,
    /// Shaped handles, parallel to `runs`.
    pub shaped: Vec<Arc<dyn ShapedText>>,
}

impl LayoutData {
    pub fn clear(&mut self) {
        self.runs.clear();
        self.shaped.clear();
    }
}

/// Line storage for a paragraph under one extent.
#[derive(Debug, Default)]
pub struct LineLayoutData {
    pub lines: SmallVec<[LineData; 4]>,
    /// Whether a max-lines limit cut packing short.
    pub truncated: bool,
}

impl LineLayoutData {
    #[inline]
    pub fn clear(&mut self) {
        self.lines.clear();
        self.truncated = false;
    }
}

#[inline]
pub fn make_range(r: (u32, u32)) -> Range<usize> {
    r.0 as usize..r.1 as usize
}
