// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Deterministic fakes standing in for the platform text stack.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use gavea::{DrawSurface, ShapedText, TextMeasurer, TextStyle};

#[derive(Debug)]
pub struct Block {
    pub width: f32,
    pub height: f32,
}

impl ShapedText for Block {
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
    fn longest_line(&self) -> f32 {
        self.width
    }
}

/// Measures every fragment at the same fixed size.
pub struct FixedMeasurer {
    pub width: f32,
    pub height: f32,
}

impl TextMeasurer for FixedMeasurer {
    fn shape(&self, _text: &str, _style: &TextStyle) -> Arc<dyn ShapedText> {
        Arc::new(Block {
            width: self.width,
            height: self.height,
        })
    }
}

/// Fixed advance per char, fixed height: a monospaced oracle.
pub struct MonoMeasurer {
    pub advance: f32,
    pub height: f32,
}

impl TextMeasurer for MonoMeasurer {
    fn shape(&self, text: &str, _style: &TextStyle) -> Arc<dyn ShapedText> {
        Arc::new(Block {
            width: text.chars().count() as f32 * self.advance,
            height: self.height,
        })
    }
}

/// Counts oracle invocations so tests can prove runs are not re-shaped.
pub struct CountingMeasurer {
    inner: MonoMeasurer,
    calls: AtomicUsize,
}

impl CountingMeasurer {
    pub fn new(advance: f32, height: f32) -> Self {
        Self {
            inner: MonoMeasurer { advance, height },
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl TextMeasurer for CountingMeasurer {
    fn shape(&self, text: &str, style: &TextStyle) -> Arc<dyn ShapedText> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.shape(text, style)
    }
}

/// One recorded surface command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    /// `(run width, x, y)` — the run width identifies which handle was
    /// drawn.
    Draw(f32, f32, f32),
}

/// Records every command for later assertions. The log is shared so it
/// survives a surface that panics mid-draw.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub log: Arc<Mutex<Vec<Command>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.log.lock().unwrap().clone()
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.log.lock().unwrap().push(Command::Save);
    }
    fn restore(&mut self) {
        self.log.lock().unwrap().push(Command::Restore);
    }
    fn translate(&mut self, dx: f32, dy: f32) {
        self.log.lock().unwrap().push(Command::Translate(dx, dy));
    }
    fn rotate(&mut self, radians: f32) {
        self.log.lock().unwrap().push(Command::Rotate(radians));
    }
    fn draw_shaped(&mut self, shaped: &dyn ShapedText, x: f32, y: f32) {
        self.log
            .lock()
            .unwrap()
            .push(Command::Draw(shaped.width(), x, y));
    }
}
