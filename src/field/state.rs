//! Editable field state: buffer, cursor, layout and constraints.

use super::buffer::FieldBuffer;
use super::constraints::FieldConstraints;
use crate::glyph;

/// Where a field sits on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub row: u8,
    pub column: u8,
    /// Visible cells, including the scroll marker column
    pub width: u8,
}

impl FieldLayout {
    pub const fn new(row: u8, column: u8, width: u8) -> Self {
        Self { row, column, width }
    }
}

/// Lowercase letters of a function name. `x` is the free variable and never
/// part of a name.
fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() && byte != glyph::VARIABLE
}

/// A single-line input field with a cursor.
///
/// A function name and its opening parenthesis (`sin(`) form one unit:
/// cursor moves skip over it and deleting the parenthesis removes the name.
#[derive(Debug, Clone)]
pub struct Field {
    buffer: FieldBuffer,
    /// Cursor position, 0..=len
    position: usize,
    layout: FieldLayout,
    constraints: FieldConstraints,
    variable_count: usize,
}

impl Field {
    pub fn new(layout: FieldLayout, constraints: FieldConstraints) -> Self {
        Self {
            buffer: FieldBuffer::with_capacity(constraints.capacity),
            position: 0,
            layout,
            constraints,
            variable_count: 0,
        }
    }

    /// Replace the content and put the cursor at the end
    #[cfg(test)]
    pub(crate) fn set_bytes(&mut self, bytes: &[u8]) {
        let limit = self.constraints.capacity.saturating_sub(1);
        let bytes = &bytes[..bytes.len().min(limit)];
        self.buffer = FieldBuffer::from_bytes(bytes);
        self.position = bytes.len();
        self.variable_count = bytes.iter().filter(|&&b| b == glyph::VARIABLE).count();
    }

    // === Accessors ===

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Content as displayed, with glyph codes mapped to characters
    pub fn text(&self) -> String {
        glyph::to_string(self.buffer.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn layout(&self) -> FieldLayout {
        self.layout
    }

    pub fn constraints(&self) -> &FieldConstraints {
        &self.constraints
    }

    /// How many `x` bytes have been inserted and not deleted
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Debug-build check of `position <= len < capacity`
    pub fn assert_invariants(&self, context: &str) {
        debug_assert!(
            self.position <= self.buffer.len(),
            "[{context}] cursor {} past end {}",
            self.position,
            self.buffer.len()
        );
        debug_assert!(
            self.buffer.len() < self.constraints.capacity,
            "[{context}] length {} reached capacity {}",
            self.buffer.len(),
            self.constraints.capacity
        );
    }

    // === Editing ===

    /// Insert one byte at the cursor. Returns false when the byte is
    /// filtered out or the field is full.
    pub fn insert_char(&mut self, byte: u8) -> bool {
        if !self.constraints.is_byte_allowed(byte)
            || !self.constraints.has_room(self.buffer.len(), 1)
        {
            return false;
        }
        self.buffer.insert(self.position, &[byte]);
        self.position += 1;
        true
    }

    /// Insert the free variable and count it
    pub fn insert_variable(&mut self) -> bool {
        let inserted = self.insert_char(glyph::VARIABLE);
        if inserted {
            self.variable_count += 1;
        }
        inserted
    }

    /// Insert a multi-byte unit such as `sin(`, all or nothing
    pub fn insert_atomic(&mut self, unit: &str) -> bool {
        let bytes = unit.as_bytes();
        if !bytes.iter().all(|&b| self.constraints.is_byte_allowed(b))
            || !self.constraints.has_room(self.buffer.len(), bytes.len())
        {
            return false;
        }
        self.buffer.insert(self.position, bytes);
        self.position += bytes.len();
        true
    }

    /// Delete the byte before the cursor. A `(` takes the function name
    /// in front of it along.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        let mut start = self.position - 1;
        match self.buffer.byte_at(start) {
            Some(glyph::OPEN_PAREN) => start = self.name_start(start),
            Some(glyph::VARIABLE) => {
                self.variable_count = self.variable_count.saturating_sub(1);
            }
            _ => {}
        }
        self.buffer.remove(start..self.position);
        self.position = start;
        true
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.position = 0;
        self.variable_count = 0;
    }

    // === Cursor movement ===

    /// Move one unit left, wrapping from the start to the end
    pub fn move_left(&mut self) {
        if self.position == 0 {
            self.position = self.buffer.len();
            return;
        }
        self.position -= 1;
        if self.buffer.byte_at(self.position) == Some(glyph::OPEN_PAREN) {
            self.position = self.name_start(self.position);
        }
    }

    /// Move one unit right, wrapping from the end to the start
    pub fn move_right(&mut self) {
        let len = self.buffer.len();
        if self.position >= len {
            self.position = 0;
            return;
        }
        while self.buffer.byte_at(self.position).is_some_and(is_name_byte) {
            self.position += 1;
        }
        self.position = (self.position + 1).min(len);
    }

    /// Start of the function name run ending just before `paren`
    fn name_start(&self, paren: usize) -> usize {
        let bytes = self.buffer.as_bytes();
        let mut start = paren;
        while start > 0 && is_name_byte(bytes[start - 1]) {
            start -= 1;
        }
        start
    }
}
