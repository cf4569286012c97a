//! Default keybindings for the calculator
//!
//! The defaults ship as `keymap.yaml` embedded in the binary, with the same
//! table hardcoded below as a fallback.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::KeyEvent;
use crate::calc::Function;
use crate::config_paths;

const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap, for writing a starter override file
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Embedded bindings with the user's `keymap.yaml` merged on top
pub fn load_default_keymap() -> Vec<Keybinding> {
    load_keymap_with(config_paths::keymap_file().as_deref())
}

/// Embedded bindings with `user_path` merged on top, if it is a file.
///
/// A broken user file is logged and ignored; the calculator still boots
/// with the defaults.
pub fn load_keymap_with(user_path: Option<&Path>) -> Vec<Keybinding> {
    let base = parse_keymap_yaml(DEFAULT_KEYMAP_YAML).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "embedded keymap rejected, using built-in table");
        default_bindings()
    });

    let Some(path) = user_path.filter(|p| p.is_file()) else {
        tracing::debug!(bindings = base.len(), "no user keymap");
        return base;
    };

    match load_keymap_file(path) {
        Ok(user) => {
            tracing::info!(path = %path.display(), overrides = user.len(), "user keymap merged");
            merge_bindings(base, user)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "user keymap ignored");
            base
        }
    }
}

/// Apply override bindings to `base`. An override with the same key and
/// the same `when` list replaces the base binding, `Unbound` deletes it,
/// anything else is appended.
pub fn merge_bindings(mut base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    for binding in user {
        let same_slot = |b: &Keybinding| b.key == binding.key && b.when == binding.when;

        if binding.command == Command::Unbound {
            base.retain(|b| !same_slot(b));
        } else if let Some(idx) = base.iter().position(same_slot) {
            base[idx] = binding;
        } else {
            base.push(binding);
        }
    }
    base
}

/// Hardcoded default keybindings, identical to the embedded `keymap.yaml`
pub fn default_bindings() -> Vec<Keybinding> {
    let mut bindings = vec![
        // Number keys, shared by the expression and the table settings
        bind(KeyEvent::plain(0, 0), Command::Digit(1)),
        bind(KeyEvent::plain(1, 0), Command::Digit(2)),
        bind(KeyEvent::plain(2, 0), Command::Digit(3)),
        bind(KeyEvent::plain(3, 0), Command::Clear),
        bind(KeyEvent::plain(0, 1), Command::Digit(4)),
        bind(KeyEvent::plain(1, 1), Command::Digit(5)),
        bind(KeyEvent::plain(2, 1), Command::Digit(6)),
        bind(KeyEvent::plain(3, 1), Command::DeleteBackward),
        bind(KeyEvent::plain(0, 2), Command::Digit(7)),
        bind(KeyEvent::plain(1, 2), Command::Digit(8)),
        bind(KeyEvent::plain(2, 2), Command::Digit(9)),
        bind(KeyEvent::plain(3, 2), Command::DecimalPoint),
        bind(KeyEvent::plain(1, 3), Command::Digit(0)),
        bind(KeyEvent::plain(3, 3), Command::Commit),
        bind(KeyEvent::shifted(0, 1), Command::CursorLeft),
        bind(KeyEvent::shifted(2, 1), Command::CursorRight),
    ];

    let entry = [
        (KeyEvent::plain(0, 3), Command::OpenParen),
        (KeyEvent::plain(2, 3), Command::CloseParen),
        (KeyEvent::shifted(0, 0), Command::Function(Function::Sin)),
        (KeyEvent::shifted(1, 0), Command::Function(Function::Cos)),
        (KeyEvent::shifted(2, 0), Command::Function(Function::Tan)),
        (KeyEvent::shifted(3, 0), Command::Add),
        (KeyEvent::shifted(1, 1), Command::Pi),
        (KeyEvent::shifted(3, 1), Command::Subtract),
        (KeyEvent::shifted(0, 2), Command::Variable),
        (KeyEvent::shifted(1, 2), Command::Power),
        (KeyEvent::shifted(2, 2), Command::Function(Function::Log)),
        (KeyEvent::shifted(3, 2), Command::Multiply),
        (KeyEvent::shifted(0, 3), Command::Function(Function::Asin)),
        (KeyEvent::shifted(1, 3), Command::Function(Function::Acos)),
        (KeyEvent::shifted(2, 3), Command::Function(Function::Atan)),
        (KeyEvent::shifted(3, 3), Command::Divide),
    ];
    bindings.extend(
        entry
            .into_iter()
            .map(|(key, command)| bind(key, command).only_in(Condition::Entry)),
    );

    bindings.extend([
        bind(KeyEvent::shifted(0, 0), Command::Escape).only_in(Condition::Settings),
        bind(KeyEvent::shifted(1, 0), Command::FocusStart).only_in(Condition::Settings),
        bind(KeyEvent::shifted(1, 2), Command::FocusStep).only_in(Condition::Settings),
        bind(KeyEvent::shifted(3, 1), Command::Minus)
            .when(vec![Condition::Settings, Condition::StartFocused]),
    ]);

    let table = [
        ((0, 0), Command::TableExit),
        ((1, 0), Command::TableStepBack),
        ((1, 2), Command::TableStepForward),
        ((0, 1), Command::TablePageBack),
        ((2, 1), Command::TablePageForward),
        ((1, 1), Command::TableReset),
    ];
    for shift in [false, true] {
        bindings.extend(table.iter().map(|&((column, row), command)| {
            let key = KeyEvent::new(super::types::MatrixKey::new(column, row), shift);
            bind(key, command).only_in(Condition::Table)
        }));
    }

    bindings
}

/// Helper to create a keybinding
fn bind(key: KeyEvent, command: Command) -> Keybinding {
    Keybinding::new(key, command)
}
