// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Gávea lays out and renders vertically-set text: glyphs read
//! top-to-bottom within a column and columns progress left-to-right,
//! the way traditional Mongolian script is written.
//!
//! The engine is deliberately host-agnostic. Text shaping and canvas
//! drawing stay behind the [`TextMeasurer`] and [`DrawSurface`]
//! capability traits; everything else — word segmentation, greedy line
//! packing, geometry, the rotate-and-place draw pass — lives here and is
//! a pure function of text, style and extent.
//!
//! ```
//! use std::sync::Arc;
//! use gavea::{
//!     DrawSurface, ParagraphBuilder, ParagraphStyle, ShapedText,
//!     TextMeasurer, TextStyle,
//! };
//!
//! #[derive(Debug)]
//! struct Block(f32, f32);
//!
//! impl ShapedText for Block {
//!     fn width(&self) -> f32 { self.0 }
//!     fn height(&self) -> f32 { self.1 }
//!     fn longest_line(&self) -> f32 { self.0 }
//! }
//!
//! struct Monospaced;
//!
//! impl TextMeasurer for Monospaced {
//!     fn shape(&self, text: &str, style: &TextStyle) -> Arc<dyn ShapedText> {
//!         let advance = style.font_size * 0.5;
//!         Arc::new(Block(text.chars().count() as f32 * advance, style.font_size))
//!     }
//! }
//!
//! let mut builder = ParagraphBuilder::new(ParagraphStyle::default(), Arc::new(Monospaced));
//! builder.add_text("ᠮᠣᠩᠭᠣᠯ ᠪᠢᠴᠢᠭ");
//! let mut paragraph = builder.build();
//! paragraph.layout(200.);
//! assert_eq!(paragraph.line_count(), 1);
//! ```

pub mod cache;
pub mod constraints;
pub mod layout;
pub mod measure;
pub mod style;
mod render;

pub use crate::cache::CachedMeasurer;
pub use crate::constraints::{layout_within, ExtentConstraints};
pub use crate::layout::{
    compute_breaks, LineData, Paragraph, ParagraphBuilder, RunData, Segmenter,
};
pub use crate::measure::{DrawSurface, ShapedText, TextMeasurer};
pub use crate::style::{
    Alignment, Baseline, Direction, ParagraphStyle, TextStyle, DEFAULT_COLOR,
    DEFAULT_FONT_SIZE,
};
