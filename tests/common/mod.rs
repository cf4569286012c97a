//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tabcalc::config::CalcConfig;
use tabcalc::display::LcdBuffer;
use tabcalc::keymap::{commands_for_text, default_bindings, Command, KeyEvent, Keymap};
use tabcalc::model::{AppModel, Mode};
use tabcalc::update::{enter_entry, update};

/// A booted calculator driven by key events, without the scanner
pub struct Harness {
    pub model: AppModel,
    pub keymap: Keymap,
    pub lcd: LcdBuffer,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(CalcConfig::default())
    }

    pub fn with_config(config: CalcConfig) -> Self {
        let mut harness = Self {
            lcd: LcdBuffer::new(config.lcd_width),
            model: AppModel::new(config),
            keymap: Keymap::with_bindings(default_bindings()),
        };
        enter_entry(&mut harness.model, &mut harness.lcd);
        harness
    }

    pub fn press(&mut self, event: KeyEvent) {
        update(&mut self.model, &self.keymap, event, &mut self.lcd);
    }

    /// Press whichever key produces `command` in the current mode
    pub fn run(&mut self, command: Command) {
        let context = self.model.key_context();
        let Some(event) = self.keymap.key_for(command, &context) else {
            panic!("no key for {command:?} in {}", self.model.mode);
        };
        self.press(event);
    }

    /// Type an expression with the entry keys
    pub fn type_text(&mut self, text: &str) {
        let Some(commands) = commands_for_text(text) else {
            panic!("{text:?} cannot be typed");
        };
        for command in commands {
            self.run(command);
        }
    }

    /// Type into the focused settings field; `-` is the settings minus key
    pub fn type_number(&mut self, text: &str) {
        for ch in text.chars() {
            let command = match ch {
                '0'..='9' => Command::Digit(ch as u8 - b'0'),
                '.' => Command::DecimalPoint,
                '-' => Command::Minus,
                _ => panic!("{ch:?} is not a number key"),
            };
            self.run(command);
        }
    }

    /// Type an expression and commit it
    pub fn enter(&mut self, text: &str) {
        self.type_text(text);
        self.run(Command::Commit);
    }

    /// Commit an expression in `x` and open its table at `start`/`step`
    pub fn open_table(&mut self, text: &str, start: &str, step: &str) {
        self.enter(text);
        assert!(
            matches!(self.model.mode, Mode::Settings(_)),
            "{text:?} did not open the settings: {:?}",
            self.model.mode
        );
        self.run(Command::Clear);
        self.type_number(start);
        self.run(Command::FocusStep);
        self.run(Command::Clear);
        self.type_number(step);
        self.run(Command::Commit);
    }

    pub fn line(&self, row: u8) -> String {
        self.lcd.line(row)
    }

    /// Row text without the right padding
    pub fn trimmed(&self, row: u8) -> String {
        self.lcd.line(row).trim_end().to_string()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
