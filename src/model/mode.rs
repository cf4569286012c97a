//! Controller modes and the data each one carries

use std::fmt;

use crate::calc::CalcError;
use crate::keymap::ModeKind;

/// Which settings field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsFocus {
    #[default]
    Start,
    Step,
}

/// Mode an error returns to once acknowledged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnMode {
    Entry,
    Settings,
}

/// Start and step of a table sweep. `step` is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub start: f64,
    pub step: f64,
}

impl TableConfig {
    /// Value of `x` at a table position
    pub fn x_at(&self, position: i32) -> f64 {
        self.start + f64::from(position) * self.step
    }
}

/// The table currently on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableView {
    pub config: TableConfig,
    pub position: i32,
}

impl TableView {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            position: 0,
        }
    }

    pub fn x(&self) -> f64 {
        self.config.x_at(self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mode {
    /// Editing the expression
    #[default]
    Entry,
    /// Showing the value of an expression without `x`
    Result(f64),
    /// Editing the table start and step
    Settings(SettingsFocus),
    Table(TableView),
    Error {
        kind: CalcError,
        previous: ReturnMode,
    },
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Entry => ModeKind::Entry,
            Mode::Result(_) => ModeKind::Result,
            Mode::Settings(_) => ModeKind::Settings,
            Mode::Table(_) => ModeKind::Table,
            Mode::Error { .. } => ModeKind::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Entry => "entry",
            Mode::Result(_) => "result",
            Mode::Settings(_) => "settings",
            Mode::Table(_) => "table",
            Mode::Error { .. } => "error",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
