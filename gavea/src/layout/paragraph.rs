// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Paragraph: text plus style, laid out into runs and lines on demand.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use super::layout_data::{LayoutData, LineData, LineLayoutData, RunData};
use super::line_breaker::BreakLines;
use super::segment::Segmenter;
use crate::measure::{DrawSurface, ShapedText, TextMeasurer};
use crate::render;
use crate::style::{ParagraphStyle, TextStyle};

/// Layout progress of a paragraph.
///
/// Makes the legal call order explicit: runs survive extent changes,
/// lines are bound to the extent they were packed for.
#[derive(Copy, Clone, Debug, PartialEq)]
enum LayoutPhase {
    Empty,
    RunsReady,
    LinesReady { extent: f32 },
}

/// A styled block of vertically-set text.
///
/// Built once via [`ParagraphBuilder`]; [`layout`] derives runs, lines and
/// geometry, [`draw`] replays them onto a [`DrawSurface`]. Repeated
/// `layout` calls with the same extent are no-ops; a new extent repacks
/// lines without re-segmenting or re-shaping.
///
/// [`layout`]: Self::layout
/// [`draw`]: Self::draw
pub struct Paragraph {
    style: ParagraphStyle,
    text_style: TextStyle,
    text: String,
    measurer: Arc<dyn TextMeasurer>,
    segmenter: Segmenter,
    data: LayoutData,
    line_data: LineLayoutData,
    ellipsis_shaped: Option<Arc<dyn ShapedText>>,
    phase: LayoutPhase,
    width: f32,
    height: f32,
    min_intrinsic_height: f32,
    max_intrinsic_height: f32,
}

impl Paragraph {
    /// Lays the paragraph out against `extent`, the available length of a
    /// column before runs wrap to the next one.
    pub fn layout(&mut self, extent: f32) {
        if let LayoutPhase::LinesReady { extent: prev } = self.phase {
            if prev == extent {
                return;
            }
        }
        self.ensure_runs();
        BreakLines::new(
            &self.data.runs,
            &mut self.line_data,
            extent,
            self.style.max_lines,
        )
        .finish();
        if self.line_data.truncated && self.ellipsis_shaped.is_none() {
            if let Some(marker) = &self.style.ellipsis {
                self.ellipsis_shaped = Some(self.measurer.shape(marker, &self.text_style));
            }
        }
        self.compute_geometry();
        self.phase = LayoutPhase::LinesReady { extent };
        debug!(
            extent,
            lines = self.line_data.lines.len(),
            "paragraph laid out"
        );
    }

    /// Draws the laid-out paragraph with its top-left at `origin`.
    ///
    /// Requires a prior successful [`layout`]; calling it earlier is a
    /// programming error.
    ///
    /// [`layout`]: Self::layout
    pub fn draw(&self, surface: &mut dyn DrawSurface, origin: (f32, f32)) {
        assert!(
            matches!(self.phase, LayoutPhase::LinesReady { .. }),
            "draw requires a prior layout"
        );
        render::draw(self, surface, origin);
    }

    /// Overall width: the columns stacked side by side.
    ///
    /// Rounded up to the next whole unit, as are all reported dimensions.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width.ceil()
    }

    /// Overall height: the length of the longest column.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height.ceil()
    }

    /// Height of the narrowest column that still fits every run whole.
    #[inline]
    pub fn min_intrinsic_height(&self) -> f32 {
        self.min_intrinsic_height.ceil()
    }

    /// Height the paragraph would need as one unbroken column.
    #[inline]
    pub fn max_intrinsic_height(&self) -> f32 {
        self.max_intrinsic_height.ceil()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_data.lines.len()
    }

    #[inline]
    pub fn lines(&self) -> &[LineData] {
        &self.line_data.lines
    }

    #[inline]
    pub fn runs(&self) -> &[RunData] {
        &self.data.runs
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }

    /// Whether the last layout hit the max-lines limit before running out
    /// of runs.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.line_data.truncated
    }

    pub(crate) fn shaped(&self) -> &[Arc<dyn ShapedText>] {
        &self.data.shaped
    }

    pub(crate) fn ellipsis_shaped(&self) -> Option<&dyn ShapedText> {
        self.ellipsis_shaped.as_deref()
    }

    /// Unrounded longest-column length; alignment slack is computed
    /// against this.
    pub(crate) fn column_extent(&self) -> f32 {
        self.height
    }

    fn ensure_runs(&mut self) {
        if self.phase != LayoutPhase::Empty {
            return;
        }
        let len = self.text.len() as u32;
        let mut ranges: SmallVec<[(u32, u32); 16]> = SmallVec::new();
        {
            let breaks = self.segmenter.breaks(&self.text);
            let mut prev = 0u32;
            for &offset in breaks {
                ranges.push((prev, offset as u32));
                prev = offset as u32;
            }
            if prev < len {
                ranges.push((prev, len));
            }
        }
        debug!(runs = ranges.len(), "shaping paragraph runs");
        for (start, end) in ranges {
            let fragment = &self.text[start as usize..end as usize];
            let shaped = self.measurer.shape(fragment, &self.text_style);
            self.data.runs.push(RunData {
                text: (start, end),
                width: shaped.width(),
                height: shaped.height(),
                longest_line: shaped.longest_line(),
            });
            self.data.shaped.push(shaped);
        }
        self.phase = LayoutPhase::RunsReady;
    }

    fn compute_geometry(&mut self) {
        let mut width = 0.;
        let mut height: f32 = 0.;
        for line in &self.line_data.lines {
            width += line.height;
            height = height.max(line.width);
        }
        self.width = width;
        self.height = height;

        let mut max_intrinsic = 0.;
        let mut min_intrinsic = f32::INFINITY;
        for run in &self.data.runs {
            max_intrinsic += run.width;
            min_intrinsic = min_intrinsic.min(run.width);
        }
        self.max_intrinsic_height = max_intrinsic;
        self.min_intrinsic_height = if self.data.runs.is_empty() {
            0.
        } else {
            min_intrinsic
        };
    }
}

/// Builds exactly one [`Paragraph`].
///
/// Holds the paragraph style, the run-level style override and the text
/// accumulated so far; consumed by [`build`].
///
/// [`build`]: Self::build
pub struct ParagraphBuilder {
    style: ParagraphStyle,
    text_style: TextStyle,
    text: String,
    measurer: Arc<dyn TextMeasurer>,
}

impl ParagraphBuilder {
    pub fn new(style: ParagraphStyle, measurer: Arc<dyn TextMeasurer>) -> Self {
        Self {
            style,
            text_style: TextStyle::default(),
            text: String::new(),
            measurer,
        }
    }

    /// Replaces the run-level style. The engine shapes the whole
    /// paragraph under one uniform style; the last push wins.
    pub fn push_style(&mut self, style: TextStyle) {
        self.text_style = style;
    }

    pub fn add_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Consumes the builder. Building without any text is a programming
    /// error.
    pub fn build(self) -> Paragraph {
        assert!(!self.text.is_empty(), "paragraph requires text");
        Paragraph {
            style: self.style,
            text_style: self.text_style,
            text: self.text,
            measurer: self.measurer,
            segmenter: Segmenter::new(),
            data: LayoutData::default(),
            line_data: LineLayoutData::default(),
            ellipsis_shaped: None,
            phase: LayoutPhase::Empty,
            width: 0.,
            height: 0.,
            min_intrinsic_height: 0.,
            max_intrinsic_height: 0.,
        }
    }
}
