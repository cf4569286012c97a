//! Key matrix scanning.
//!
//! The matrix has four drive lines and four sense lines. Each tick the
//! scanner reads the senses of the line it drove on the previous tick,
//! releases that line and drives the next one. After every fourth tick the
//! sixteen collected bits are resolved to at most one key.

use crate::keymap::{KeyEvent, MatrixKey, MATRIX_SIZE};

/// Hardware side of the key matrix
pub trait KeyMatrix {
    /// Activate one drive line
    fn drive_line(&mut self, line: u8);

    fn release_line(&mut self, line: u8);

    /// Sense lines for the currently driven line, bit `n` set when sense
    /// `n` sees a closed switch
    fn read_rows(&mut self) -> u8;

    fn shift_held(&mut self) -> bool;
}

/// Ticks in one full scan cycle
pub const TICKS_PER_CYCLE: u32 = MATRIX_SIZE as u32;

/// Four-phase matrix scanner with edge-triggered key delivery
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Line driven on the previous tick, read on this one
    line: u8,
    /// Sense bits collected this cycle, four per line
    states: u16,
    /// Key resolved by the previous cycle
    last: Option<KeyEvent>,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            line: MATRIX_SIZE - 1,
            states: 0,
            last: None,
        }
    }

    /// Drive the line the first tick reads. Call once before ticking.
    pub fn prime<M: KeyMatrix + ?Sized>(&self, matrix: &mut M) {
        matrix.drive_line(self.line);
    }

    /// Advance one phase. Returns a key event on the cycle in which a key
    /// is first seen after a cycle with no key down.
    pub fn tick<M: KeyMatrix + ?Sized>(&mut self, matrix: &mut M) -> Option<KeyEvent> {
        let rows = matrix.read_rows() & 0x0F;
        self.states |= u16::from(rows) << (MATRIX_SIZE * self.line);
        matrix.release_line(self.line);

        self.line = (self.line + 1) % MATRIX_SIZE;
        matrix.drive_line(self.line);

        if self.line != MATRIX_SIZE - 1 {
            return None;
        }

        let resolved = self.resolve(matrix.shift_held());
        self.states = 0;
        let fresh = resolved.is_some() && self.last.is_none();
        self.last = resolved;

        if fresh {
            tracing::trace!(key = ?resolved, "key pressed");
            resolved
        } else {
            None
        }
    }

    /// Lowest set bit wins
    fn resolve(&self, shift: bool) -> Option<KeyEvent> {
        if self.states == 0 {
            return None;
        }
        let index = self.states.trailing_zeros() as u8;
        MatrixKey::from_index(index).map(|key| KeyEvent::new(key, shift))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
