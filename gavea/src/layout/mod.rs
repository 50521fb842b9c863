// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Vertical paragraph layout: segmentation, run measurement, line
//! packing and geometry.

mod layout_data;
mod line_breaker;
mod paragraph;
mod segment;

pub use layout_data::{make_range, LineData, RunData};
pub use paragraph::{Paragraph, ParagraphBuilder};
pub use segment::{compute_breaks, Segmenter};
