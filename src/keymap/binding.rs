//! One row of the keymap: a matrix key, the command it sends, and the
//! modes it is limited to

use super::command::Command;
use super::context::Condition;
use super::types::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: KeyEvent,
    pub command: Command,
    /// All of these must hold; `None` binds the key in every mode
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(key: KeyEvent, command: Command) -> Self {
        Self {
            key,
            command,
            when: None,
        }
    }

    pub fn when(self, conditions: Vec<Condition>) -> Self {
        Self {
            when: Some(conditions),
            ..self
        }
    }

    /// Limit the binding to one mode or focus state
    pub fn only_in(self, condition: Condition) -> Self {
        self.when(vec![condition])
    }

    pub fn is_conditional(&self) -> bool {
        self.when.as_ref().is_some_and(|c| !c.is_empty())
    }
}
