//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::binding::Keybinding;
use super::command::Command;
use super::context::Condition;
use super::types::{KeyEvent, MatrixKey, MATRIX_SIZE};
use crate::calc::Function;

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub when: Option<Vec<String>>,
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let mut bindings = Vec::with_capacity(config.bindings.len());
    for entry in config.bindings {
        let key = parse_key_string(&entry.key)?;
        let command = parse_command(&entry.command)?;

        let mut binding = Keybinding::new(key, command);
        if let Some(conditions) = parse_conditions(&entry.when)? {
            binding = binding.when(conditions);
        }
        bindings.push(binding);
    }

    Ok(bindings)
}

/// Parse `0_3` or `shift+0_3`. Case and spaces around `+` are ignored.
pub fn parse_key_string(key_str: &str) -> Result<KeyEvent, KeymapError> {
    let parts: Vec<String> = key_str.split('+').map(|p| p.trim().to_lowercase()).collect();
    let (shift, key) = match parts.as_slice() {
        [key] => (false, key),
        [modifier, key] if modifier == "shift" => (true, key),
        _ => {
            return Err(KeymapError::InvalidKey(format!(
                "Expected <col>_<row> or shift+<col>_<row>: {}",
                key_str
            )))
        }
    };
    Ok(KeyEvent::new(parse_matrix_key(key)?, shift))
}

/// Parse `column_row`, each 0..=3
fn parse_matrix_key(key: &str) -> Result<MatrixKey, KeymapError> {
    let invalid = || KeymapError::InvalidKey(format!("Unknown key: {}", key));
    let (column, row) = key.split_once('_').ok_or_else(invalid)?;
    let column: u8 = column.parse().map_err(|_| invalid())?;
    let row: u8 = row.parse().map_err(|_| invalid())?;
    if column >= MATRIX_SIZE || row >= MATRIX_SIZE {
        return Err(invalid());
    }
    Ok(MatrixKey::new(column, row))
}

fn parse_command(cmd: &str) -> Result<Command, KeymapError> {
    Command::from_str(cmd).map_err(|_| KeymapError::InvalidCommand(cmd.to_string()))
}

fn parse_conditions(when: &Option<Vec<String>>) -> Result<Option<Vec<Condition>>, KeymapError> {
    let Some(conditions) = when else {
        return Ok(None);
    };

    conditions
        .iter()
        .map(|c| parse_condition(c))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn parse_condition(cond: &str) -> Result<Condition, KeymapError> {
    match cond.to_lowercase().as_str() {
        "entry" => Ok(Condition::Entry),
        "settings" => Ok(Condition::Settings),
        "table" => Ok(Condition::Table),
        "start_focused" | "startfocused" | "start" => Ok(Condition::StartFocused),
        "step_focused" | "stepfocused" | "step" => Ok(Condition::StepFocused),
        _ => Err(KeymapError::InvalidCondition(cond.to_string())),
    }
}

// Implement FromStr for Command to parse from YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(digit) = s.strip_prefix("Digit") {
            return match digit.parse::<u8>() {
                Ok(d) if d <= 9 => Ok(Command::Digit(d)),
                _ => Err(()),
            };
        }
        if let Some(function) = Function::from_name(s) {
            return Ok(Command::Function(function));
        }

        match s {
            // Insertion
            "DecimalPoint" => Ok(Command::DecimalPoint),
            "OpenParen" => Ok(Command::OpenParen),
            "CloseParen" => Ok(Command::CloseParen),
            "Pi" => Ok(Command::Pi),
            "Variable" => Ok(Command::Variable),
            "Add" => Ok(Command::Add),
            "Subtract" => Ok(Command::Subtract),
            "Multiply" => Ok(Command::Multiply),
            "Divide" => Ok(Command::Divide),
            "Power" => Ok(Command::Power),
            "Minus" => Ok(Command::Minus),

            // Editing
            "Clear" => Ok(Command::Clear),
            "DeleteBackward" => Ok(Command::DeleteBackward),
            "CursorLeft" => Ok(Command::CursorLeft),
            "CursorRight" => Ok(Command::CursorRight),

            // Mode control
            "Commit" => Ok(Command::Commit),
            "Escape" => Ok(Command::Escape),
            "FocusStart" => Ok(Command::FocusStart),
            "FocusStep" => Ok(Command::FocusStep),

            // Table
            "TableExit" => Ok(Command::TableExit),
            "TableStepBack" => Ok(Command::TableStepBack),
            "TableStepForward" => Ok(Command::TableStepForward),
            "TablePageBack" => Ok(Command::TablePageBack),
            "TablePageForward" => Ok(Command::TablePageForward),
            "TableReset" => Ok(Command::TableReset),

            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
