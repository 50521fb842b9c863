// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Paragraph and text styling inputs.

/// Font size applied when a text style leaves it unset.
pub const DEFAULT_FONT_SIZE: f32 = 30.0;

/// Opaque black, the color applied when a text style leaves it unset.
pub const DEFAULT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Alignment of lines along their column.
#[derive(Copy, Default, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Alignment {
    #[default]
    Start,
    Middle,
    End,
}

/// Column progression direction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Default for Direction {
    fn default() -> Self {
        Self::LeftToRight
    }
}

/// Baseline the shaping engine should position glyphs against.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Baseline {
    Alphabetic,
    Ideographic,
}

impl Default for Baseline {
    fn default() -> Self {
        Self::Alphabetic
    }
}

/// Paragraph-level formatting.
///
/// Unset fields fall back to the documented defaults via [`Default`]:
/// alignment starts at [`Alignment::Start`] and columns progress
/// [`Direction::LeftToRight`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    pub align: Alignment,
    pub direction: Direction,
    /// Maximum number of lines to lay out. `None` means unbounded.
    pub max_lines: Option<usize>,
    /// Marker drawn at the end of the last line when `max_lines` cuts
    /// the paragraph short.
    pub ellipsis: Option<String>,
    /// BCP 47 language tag. Carried for the host; never interpreted here.
    pub locale: Option<String>,
}

/// Run-level formatting handed to the shaping engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub color: [f32; 4],
    pub baseline: Baseline,
    pub font_size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            baseline: Baseline::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_style_defaults() {
        let style = TextStyle::default();
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(style.color, DEFAULT_COLOR);
        assert_eq!(style.baseline, Baseline::Alphabetic);
    }

    #[test]
    fn paragraph_style_defaults() {
        let style = ParagraphStyle::default();
        assert_eq!(style.align, Alignment::Start);
        assert_eq!(style.direction, Direction::LeftToRight);
        assert_eq!(style.max_lines, None);
        assert_eq!(style.ellipsis, None);
        assert_eq!(style.locale, None);
    }
}
