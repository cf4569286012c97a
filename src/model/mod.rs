//! Application model - the complete state of the calculator
//!
//! One [`AppModel`] is created at startup and owned by the firmware loop.
//! The update functions are its only writers.

pub mod mode;

pub use mode::{Mode, ReturnMode, SettingsFocus, TableConfig, TableView};

use crate::calc::Program;
use crate::config::CalcConfig;
use crate::field::{Field, FieldConstraints, FieldLayout};
use crate::keymap::KeyContext;

/// Label in front of the table start field on row 0
pub const START_LABEL: &str = "START=";
/// Label in front of the table step field on row 1
pub const STEP_LABEL: &str = "STEP=";

#[derive(Debug, Clone)]
pub struct AppModel {
    pub mode: Mode,
    pub expression: Field,
    pub start: Field,
    pub step: Field,
    /// Program compiled on the last commit that used `x`, swept by the table
    pub program: Option<Program>,
    pub config: CalcConfig,
}

impl AppModel {
    /// Out-of-range config values are replaced, see [`CalcConfig::validated`]
    pub fn new(config: CalcConfig) -> Self {
        let config = config.validated();
        let width = config.lcd_width;
        let start_column = START_LABEL.len() as u8;
        let step_column = STEP_LABEL.len() as u8;

        Self {
            mode: Mode::Entry,
            expression: Field::new(FieldLayout::new(0, 0, width), FieldConstraints::expression()),
            start: Field::new(
                FieldLayout::new(0, start_column, width.saturating_sub(start_column)),
                FieldConstraints::number(),
            ),
            step: Field::new(
                FieldLayout::new(1, step_column, width.saturating_sub(step_column)),
                FieldConstraints::number(),
            ),
            program: None,
            config,
        }
    }

    /// Key lookup context for the current mode
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            mode: self.mode.kind(),
            start_focused: self.mode == Mode::Settings(SettingsFocus::Start),
        }
    }

    /// Check field invariants after a dispatch (debug builds)
    pub fn assert_invariants_with_context(&self, context: &str) {
        self.expression.assert_invariants(context);
        self.start.assert_invariants(context);
        self.step.assert_invariants(context);
    }

    pub fn settings_field(&self, focus: SettingsFocus) -> &Field {
        match focus {
            SettingsFocus::Start => &self.start,
            SettingsFocus::Step => &self.step,
        }
    }

    pub fn settings_field_mut(&mut self, focus: SettingsFocus) -> &mut Field {
        match focus {
            SettingsFocus::Start => &mut self.start,
            SettingsFocus::Step => &mut self.step,
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}
