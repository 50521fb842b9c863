// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Capability boundaries to the shaping engine and the drawing surface.
//!
//! The layout core is a pure function of text, style and extent plus these
//! two traits. Hosts plug in their platform text stack; tests plug in
//! deterministic fakes.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::style::TextStyle;

/// Opaque handle to a shaped piece of text.
///
/// Produced once per run by the [`TextMeasurer`] and retained for the
/// lifetime of the paragraph: measurement reads the natural bounds,
/// drawing hands the same handle back to the surface.
pub trait ShapedText: fmt::Debug {
    /// Natural (unconstrained) advance of the shaped text.
    fn width(&self) -> f32;

    /// Natural height of the shaped text.
    fn height(&self) -> f32;

    /// Width of the longest laid-out line. Equal to [`width`] for the
    /// single-line runs this engine produces.
    ///
    /// [`width`]: Self::width
    fn longest_line(&self) -> f32;
}

/// Text shaping oracle.
///
/// Assumed deterministic and pure for a given `(text, style)` pair; the
/// engine calls it once per run and caches the result for as long as the
/// source text is unchanged.
pub trait TextMeasurer {
    fn shape(&self, text: &str, style: &TextStyle) -> Arc<dyn ShapedText>;
}

/// Drawing sink with scoped affine transforms.
///
/// The engine only ever issues `save`/`translate`/`rotate`/`restore`
/// pairs plus [`draw_shaped`] commands; everything else about the canvas
/// stays on the host's side of the boundary.
///
/// [`draw_shaped`]: Self::draw_shaped
pub trait DrawSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, radians: f32);
    fn draw_shaped(&mut self, shaped: &dyn ShapedText, x: f32, y: f32);
}

/// Scoped `save`/`restore` guard over a [`DrawSurface`].
///
/// `restore` runs on drop, so the surface transform stack is balanced
/// even if a draw command unwinds.
pub(crate) struct TransformScope<'a> {
    surface: &'a mut (dyn DrawSurface + 'a),
}

impl<'a> TransformScope<'a> {
    pub(crate) fn push(surface: &'a mut (dyn DrawSurface + 'a)) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<'a> Deref for TransformScope<'a> {
    type Target = dyn DrawSurface + 'a;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl<'a> DerefMut for TransformScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
