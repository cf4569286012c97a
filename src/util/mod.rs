//! Utility modules

pub mod text;

pub use text::{numeric_prefix_len, parse_leading_float};
