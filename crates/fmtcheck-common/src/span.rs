//! Source spans.
//!
//! All host positions are byte offsets into the file text. A `TextRange` is
//! half-open: `pos` is the first byte, `end` is one past the last.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub pos: u32,
    pub end: u32,
}

impl TextRange {
    #[must_use]
    pub const fn new(pos: u32, end: u32) -> Self {
        Self { pos, end }
    }

    /// Length in bytes. A malformed range (`end < pos`) has length zero.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.pos && offset < self.end
    }

    /// Shift the range forward by `delta` bytes, clamping at `u32::MAX`.
    #[must_use]
    pub const fn offset_by(self, delta: u32) -> Self {
        Self::new(self.pos.saturating_add(delta), self.end.saturating_add(delta))
    }
}
