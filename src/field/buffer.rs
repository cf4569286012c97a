//! Byte buffer backing an input field.
//!
//! Fields hold display bytes, not UTF-8: π and ÷ are single LCD glyph codes.
//! Length limits are enforced by the owning field through its constraints.

use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    bytes: Vec<u8>,
}

impl FieldBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    #[cfg(test)]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte at offset, None if out of bounds
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Insert bytes at offset, shifting the tail right
    pub fn insert(&mut self, offset: usize, bytes: &[u8]) {
        let offset = offset.min(self.bytes.len());
        self.bytes.splice(offset..offset, bytes.iter().copied());
    }

    /// Remove a byte range, shifting the tail left
    pub fn remove(&mut self, range: Range<usize>) {
        let end = range.end.min(self.bytes.len());
        let start = range.start.min(end);
        self.bytes.drain(start..end);
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}
