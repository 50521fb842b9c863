// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Consumer-layer extent negotiation.
//!
//! A host container rarely hands the paragraph a single extent; it hands
//! a range and expects the paragraph to settle on the tightest height
//! within it. [`layout_within`] is that protocol: one pass at the upper
//! bound, clamp the preferred height into the range, and one re-layout if
//! the clamp changed anything.

use crate::layout::Paragraph;

/// Inclusive extent range negotiated with the host container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExtentConstraints {
    pub min: f32,
    pub max: f32,
}

impl ExtentConstraints {
    pub fn new(min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "constraint range is inverted");
        Self { min, max }
    }

    /// A range admitting exactly one extent.
    pub fn tight(extent: f32) -> Self {
        Self::new(extent, extent)
    }

    /// A range bounded only from above.
    pub fn loose(max: f32) -> Self {
        Self::new(0., max)
    }
}

/// Lays `paragraph` out inside `constraints` and returns the negotiated
/// column extent.
///
/// First pass uses the upper bound; the paragraph's preferred height
/// (its max intrinsic height) is then clamped into the range, and the
/// paragraph re-laid-out once if the clamped extent differs from the
/// first-pass one.
pub fn layout_within(paragraph: &mut Paragraph, constraints: ExtentConstraints) -> f32 {
    paragraph.layout(constraints.max);
    let extent = paragraph
        .max_intrinsic_height()
        .clamp(constraints.min, constraints.max);
    if extent != constraints.max {
        paragraph.layout(extent);
    }
    extent
}
