// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Shaped-run cache.
//!
//! Shaping is the expensive step of layout, and the same words keep
//! coming back: wrapping a measurer in [`CachedMeasurer`] lets every
//! paragraph built against it reuse shaped handles for identical
//! `(text, style)` pairs.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use rustc_hash::FxBuildHasher;
use tracing::debug;

use crate::measure::{ShapedText, TextMeasurer};
use crate::style::{Baseline, TextStyle};

/// Maximum number of shaped runs to cache.
const MAX_SHAPE_CACHE_SIZE: usize = 256;

/// Key for shaped-run caching. Floats are scaled to integers to avoid
/// float precision issues.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ShapeKey {
    text: String,
    font_size_scaled: u32,
    color: [u32; 4],
    baseline: u8,
}

impl ShapeKey {
    fn new(text: &str, style: &TextStyle) -> Self {
        Self {
            text: text.to_owned(),
            font_size_scaled: (style.font_size * 64.) as u32,
            color: [
                style.color[0].to_bits(),
                style.color[1].to_bits(),
                style.color[2].to_bits(),
                style.color[3].to_bits(),
            ],
            baseline: match style.baseline {
                Baseline::Alphabetic => 0,
                Baseline::Ideographic => 1,
            },
        }
    }
}

/// A [`TextMeasurer`] decorator with LRU-cached shaped handles.
pub struct CachedMeasurer {
    inner: Arc<dyn TextMeasurer>,
    cache: Mutex<LruCache<ShapeKey, Arc<dyn ShapedText>, FxBuildHasher>>,
}

impl CachedMeasurer {
    pub fn new(inner: Arc<dyn TextMeasurer>) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::with_hasher(
                NonZeroUsize::new(MAX_SHAPE_CACHE_SIZE).unwrap(),
                FxBuildHasher,
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl TextMeasurer for CachedMeasurer {
    fn shape(&self, text: &str, style: &TextStyle) -> Arc<dyn ShapedText> {
        let key = ShapeKey::new(text, style);
        if let Some(hit) = self.cache.lock().get(&key) {
            debug!(text, "shape cache hit");
            return hit.clone();
        }
        debug!(text, "shape cache miss");
        let shaped = self.inner.shape(text, style);
        self.cache.lock().put(key, shaped.clone());
        shaped
    }
}
