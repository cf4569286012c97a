//! Runtime module - key matrix and main loop
//!
//! This module contains the code that drives the calculator:
//! - `scanner` - Four-phase matrix scan with edge-triggered delivery
//! - `matrix` - Simulated key matrix for running on the host
//! - `app` - Firmware loop tying scanner, keymap, update and display

pub mod app;
pub mod matrix;
pub mod scanner;

pub use app::Firmware;
pub use matrix::SimulatedMatrix;
pub use scanner::{KeyMatrix, Scanner, TICKS_PER_CYCLE};
