//! tabcalc - table-plotting scientific calculator
//!
//! This crate provides the firmware core of a two-line LCD calculator:
//! an expression compiler and RPN evaluator, structured text fields, and an
//! Elm-style mode controller driven by a scanned key matrix.

pub mod calc;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod display;
pub mod field;
pub mod glyph;
pub mod keymap;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use calc::{compile, CalcError, Program};
pub use config::CalcConfig;
pub use display::{Display, LcdBuffer};
pub use keymap::{Command, KeyEvent, Keymap};
pub use model::{AppModel, Mode};
pub use runtime::{Firmware, SimulatedMatrix};
