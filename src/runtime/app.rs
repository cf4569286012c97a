//! Firmware main loop: scan, dispatch, redraw

use crate::display::Display;
use crate::keymap::{KeyEvent, Keymap};
use crate::model::AppModel;
use crate::update::{enter_entry, update};

use super::matrix::SimulatedMatrix;
use super::scanner::{KeyMatrix, Scanner, TICKS_PER_CYCLE};

/// The calculator as it runs on the device: one scanner tick per timer
/// interrupt, every delivered key goes straight through [`update`].
pub struct Firmware<M: KeyMatrix, D: Display> {
    model: AppModel,
    keymap: Keymap,
    scanner: Scanner,
    matrix: M,
    lcd: D,
}

impl<M: KeyMatrix, D: Display> Firmware<M, D> {
    pub fn new(model: AppModel, keymap: Keymap, matrix: M, lcd: D) -> Self {
        Self {
            model,
            keymap,
            scanner: Scanner::new(),
            matrix,
            lcd,
        }
    }

    /// Show the empty expression editor
    pub fn boot(&mut self) {
        tracing::info!(width = self.model.config.lcd_width, "booting");
        self.scanner.prime(&mut self.matrix);
        enter_entry(&mut self.model, &mut self.lcd);
    }

    /// One scan phase. Returns the key handled on this tick, if any.
    pub fn tick(&mut self) -> Option<KeyEvent> {
        let event = self.scanner.tick(&mut self.matrix)?;
        update(&mut self.model, &self.keymap, event, &mut self.lcd);
        Some(event)
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn lcd(&self) -> &D {
        &self.lcd
    }
}

impl<D: Display> Firmware<SimulatedMatrix, D> {
    /// Hold a key for `hold_cycles` scan cycles, then release it for as
    /// many. Returns the keys the scanner delivered meanwhile.
    pub fn press(&mut self, event: KeyEvent, hold_cycles: u32) -> Vec<KeyEvent> {
        let ticks = hold_cycles.max(1) * TICKS_PER_CYCLE;
        let mut delivered = Vec::new();

        self.matrix.press_event(event);
        delivered.extend((0..ticks).filter_map(|_| self.tick()));
        self.matrix.release_all();
        delivered.extend((0..ticks).filter_map(|_| self.tick()));

        delivered
    }
}
