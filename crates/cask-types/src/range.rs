use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A sub-slice request on a stored blob.
///
/// Both bounds are clamped to the blob's actual length on read: an offset at
/// or past the end yields an empty slice, and a length extending past the end
/// is truncated. Out-of-bounds ranges are never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    pub offset: u64,
    pub length: u64,
}

impl ByteRange {
    pub fn new(offset: u64, length: u64) -> Self {
        Self { offset, length }
    }

    /// Resolve this range against a blob of `len` bytes.
    pub fn clamp(&self, len: usize) -> Range<usize> {
        let start = (self.offset as usize).min(len);
        let end = self
            .offset
            .saturating_add(self.length)
            .min(len as u64) as usize;
        start..end.max(start)
    }
}
