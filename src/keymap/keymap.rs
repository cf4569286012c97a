//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::KeyEvent;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Indices into `bindings` per key event. Several bindings can share a
    /// key with different conditions.
    lookup: HashMap<KeyEvent, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.key).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Look up the command for a key event in the given context.
    ///
    /// Bindings with conditions that hold are checked before unconditional
    /// ones; within each group the first registered binding wins.
    pub fn lookup(&self, key: &KeyEvent, context: &KeyContext) -> Option<Command> {
        let candidates: Vec<&Keybinding> = self
            .lookup
            .get(key)?
            .iter()
            .map(|&idx| &self.bindings[idx])
            .collect();

        let conditional = candidates.iter().find(|b| {
            b.is_conditional()
                && b.when
                    .as_deref()
                    .is_some_and(|conditions| Condition::evaluate_all(conditions, context))
        });
        conditional
            .or_else(|| candidates.iter().find(|b| !b.is_conditional()))
            .map(|b| b.command)
    }

    /// First key that produces `command` in `context`
    pub fn key_for(&self, command: Command, context: &KeyContext) -> Option<KeyEvent> {
        self.bindings
            .iter()
            .filter(|b| b.command == command)
            .map(|b| b.key)
            .find(|key| self.lookup(key, context) == Some(command))
    }
}
