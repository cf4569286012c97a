//! Core key types: matrix positions and key events

use std::fmt;

/// Number of drive lines (columns) and sense lines (rows) in the matrix
pub const MATRIX_SIZE: u8 = 4;

/// A position in the 4x4 button matrix.
///
/// Key names are `"{column}_{row}"`, so `0_0` is the top left key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixKey {
    pub column: u8,
    pub row: u8,
}

impl MatrixKey {
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Key for a scan index (bit position in the scanner's state word).
    ///
    /// Lines and senses are wired in reverse, so index 0 is key `3_3` and
    /// index 15 is key `0_0`.
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= MATRIX_SIZE * MATRIX_SIZE {
            return None;
        }
        Some(Self {
            column: MATRIX_SIZE - 1 - index % MATRIX_SIZE,
            row: MATRIX_SIZE - 1 - index / MATRIX_SIZE,
        })
    }

    /// Scan index of this key
    pub fn index(self) -> u8 {
        (MATRIX_SIZE - 1 - self.row) * MATRIX_SIZE + (MATRIX_SIZE - 1 - self.column)
    }

    /// All keys in scan index order
    pub fn all() -> impl Iterator<Item = MatrixKey> {
        (0..MATRIX_SIZE * MATRIX_SIZE).filter_map(Self::from_index)
    }
}

impl fmt::Display for MatrixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.column, self.row)
    }
}

/// A resolved key press: matrix key plus the state of the shift line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: MatrixKey,
    pub shift: bool,
}

impl KeyEvent {
    pub const fn new(key: MatrixKey, shift: bool) -> Self {
        Self { key, shift }
    }

    pub const fn plain(column: u8, row: u8) -> Self {
        Self::new(MatrixKey::new(column, row), false)
    }

    pub const fn shifted(column: u8, row: u8) -> Self {
        Self::new(MatrixKey::new(column, row), true)
    }

    /// Display string like `shift+0_0`
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            write!(f, "shift+{}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}
