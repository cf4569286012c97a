//! Simulated key matrix for the host

use super::scanner::KeyMatrix;
use crate::keymap::{KeyEvent, MatrixKey, MATRIX_SIZE};

/// In-memory key matrix. Any number of keys can be held at once.
#[derive(Debug, Clone, Default)]
pub struct SimulatedMatrix {
    /// One bit per key, at the key's scan index
    pressed: u16,
    shift: bool,
    driven: Option<u8>,
}

impl SimulatedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: MatrixKey) {
        self.pressed |= 1 << key.index();
    }

    /// Hold a key, with shift as given by the event
    pub fn press_event(&mut self, event: KeyEvent) {
        self.press(event.key);
        self.set_shift(event.shift);
    }

    pub fn release(&mut self, key: MatrixKey) {
        self.pressed &= !(1 << key.index());
    }

    /// Release every key and the shift line
    pub fn release_all(&mut self) {
        self.pressed = 0;
        self.set_shift(false);
    }

    pub fn set_shift(&mut self, held: bool) {
        self.shift = held;
    }

    pub fn driven_line(&self) -> Option<u8> {
        self.driven
    }
}

impl KeyMatrix for SimulatedMatrix {
    fn drive_line(&mut self, line: u8) {
        self.driven = Some(line);
    }

    fn release_line(&mut self, line: u8) {
        if self.driven == Some(line) {
            self.driven = None;
        }
    }

    fn read_rows(&mut self) -> u8 {
        match self.driven {
            Some(line) => ((self.pressed >> (MATRIX_SIZE * line)) & 0x0F) as u8,
            None => 0,
        }
    }

    fn shift_held(&mut self) -> bool {
        self.shift
    }
}
