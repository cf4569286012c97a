//! Edit constraints for input fields.
//!
//! Constraints define how much a field holds and which bytes it accepts.

/// Byte filter function type. Returns true if the byte is allowed.
pub type ByteFilter = fn(u8) -> bool;

/// Buffer size of the expression field
pub const EXPRESSION_CAPACITY: usize = 256;

/// Buffer size of the table start and step fields
pub const NUMBER_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct FieldConstraints {
    /// Buffer size in bytes. Content stays strictly below this, so the
    /// field holds at most `capacity - 1` bytes.
    pub capacity: usize,

    /// Byte filter (None = all bytes allowed)
    pub byte_filter: Option<ByteFilter>,
}

impl Default for FieldConstraints {
    fn default() -> Self {
        Self::expression()
    }
}

impl FieldConstraints {
    /// The expression field: any glyph, 255 bytes
    pub fn expression() -> Self {
        Self {
            capacity: EXPRESSION_CAPACITY,
            byte_filter: None,
        }
    }

    /// Table settings fields: digits, decimal point and minus sign
    pub fn number() -> Self {
        Self {
            capacity: NUMBER_CAPACITY,
            byte_filter: Some(|b| b.is_ascii_digit() || b == b'.' || b == b'-'),
        }
    }

    /// Check if a byte is allowed by the filter
    pub fn is_byte_allowed(&self, byte: u8) -> bool {
        self.byte_filter.map_or(true, |filter| filter(byte))
    }

    /// Check if `additional` more bytes fit next to `current_len`
    pub fn has_room(&self, current_len: usize, additional: usize) -> bool {
        current_len + additional < self.capacity
    }
}
