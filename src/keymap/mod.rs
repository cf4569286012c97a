//! Key names, commands and the per-mode binding table
//!
//! A key is `<col>_<row>` on the 4x4 matrix, optionally with `shift+`.
//! The same key means different things per mode: `1_2` types an 8 while
//! editing and steps the table forward while tabulating. Bindings carry
//! `when` conditions for that, and conditional matches win over plain ones.
//!
//! ```text
//! Scanner -> KeyEvent -> Keymap::lookup(KeyContext) -> Command -> update
//! ```
//!
//! The built-in table lives in `keymap.yaml` next to this module. A user
//! `keymap.yaml` in the config directory is merged over it, see
//! [`load_default_keymap`].

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::{commands_for_text, Command};
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext, ModeKind};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, load_keymap_with,
    merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyEvent, MatrixKey, MATRIX_SIZE};

#[cfg(test)]
mod tests;
