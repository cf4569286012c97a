//! Command-line interface for the host simulator
//!
//! Supports:
//! - One-shot evaluation of an expression
//! - Printing a value table for an expression in `x`
//! - Driving the firmware with key names read from stdin
//! - Writing the default config files

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::calc::{compile, CalcError};
use crate::config::CalcConfig;
use crate::config_paths;
use crate::glyph;
use crate::keymap::{
    get_default_keymap_yaml, load_default_keymap, load_keymap_with, parse_key_string, KeyEvent,
    Keymap, KeymapError,
};
use crate::model::TableConfig;

/// Scan cycles a key is held for when no count is given
pub const DEFAULT_HOLD_CYCLES: u32 = 2;

/// Table-plotting scientific calculator
#[derive(Parser, Debug)]
#[command(name = "tabcalc", version, about = "Table-plotting scientific calculator")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Evaluate an expression once
    Eval {
        #[arg(value_name = "EXPR")]
        expression: String,

        /// Value substituted for x
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,
    },

    /// Print a value table for an expression in x
    Table {
        #[arg(value_name = "EXPR")]
        expression: String,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,

        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,

        #[arg(long, default_value_t = 10)]
        rows: u32,
    },

    /// Press keys read from stdin and print the display after each line
    Run {
        /// Scan cycles each key is held down for
        #[arg(long, value_name = "N", default_value_t = DEFAULT_HOLD_CYCLES)]
        hold_cycles: u32,
    },

    /// Write the default config.yaml and keymap.yaml
    Init,
}

impl CliArgs {
    /// Subcommand to run, `run` when none was given
    pub fn command(&self) -> CliCommand {
        self.command.clone().unwrap_or(CliCommand::Run {
            hold_cycles: DEFAULT_HOLD_CYCLES,
        })
    }
}

impl CliCommand {
    /// Only the simulator keeps a log file. `eval` and `table` log to
    /// stderr and leave the config directory alone.
    pub fn logs_to_file(&self) -> bool {
        matches!(self, CliCommand::Run { .. })
    }
}

/// Config and merged keymap, loaded before any subcommand runs
#[derive(Debug, Clone)]
pub struct Session {
    pub config: CalcConfig,
    pub keymap: Keymap,
}

impl Session {
    /// Files from the config directory
    pub fn load() -> Self {
        Self {
            config: CalcConfig::load(),
            keymap: Keymap::with_bindings(load_default_keymap()),
        }
    }

    /// Missing paths or files mean defaults; broken files are logged and
    /// replaced by defaults.
    pub fn load_from(config_path: Option<&Path>, keymap_path: Option<&Path>) -> Self {
        let config = match config_path.filter(|p| p.exists()) {
            Some(path) => CalcConfig::load_from(path),
            None => CalcConfig::default(),
        };
        Self {
            config,
            keymap: Keymap::with_bindings(load_keymap_with(keymap_path)),
        }
    }
}

/// Compile an ASCII expression and evaluate it at `x`
pub fn eval_expression(expression: &str, x: f64) -> Result<f64, CalcError> {
    let program = compile(&glyph::from_text(expression))?;
    let value = program.evaluate(x)?;
    tracing::debug!(%program, x, value, "evaluated");
    Ok(value)
}

/// One printed table row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub x: f64,
    pub y: Result<f64, CalcError>,
}

/// Sweep an ASCII expression over `rows` positions. Compile errors and a
/// zero step fail the whole table; evaluation errors only their row.
pub fn table_rows(
    expression: &str,
    config: TableConfig,
    rows: u32,
) -> Result<Vec<TableRow>, CalcError> {
    if config.step == 0.0 {
        return Err(CalcError::Range);
    }
    let program = compile(&glyph::from_text(expression))?;
    let rows = i32::try_from(rows).unwrap_or(i32::MAX);

    Ok((0..rows)
        .map(|position| {
            let x = config.x_at(position);
            TableRow {
                x,
                y: program.evaluate(x),
            }
        })
        .collect())
}

/// Parse one line of whitespace-separated key names
pub fn parse_key_line(line: &str) -> Result<Vec<KeyEvent>, KeymapError> {
    line.split_whitespace().map(parse_key_string).collect()
}

/// A file written or left alone by [`init_config_dir`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitEntry {
    pub path: PathBuf,
    pub created: bool,
}

/// Write the default config and keymap into `dir`, keeping existing files
pub fn init_config_dir(dir: &Path) -> Result<Vec<InitEntry>, String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;

    let config_path = dir.join(config_paths::CONFIG_FILE_NAME);
    let keymap_path = dir.join(config_paths::KEYMAP_FILE_NAME);

    let config_created = !config_path.exists();
    if config_created {
        CalcConfig::default().save_to(&config_path)?;
    }

    let keymap_created = !keymap_path.exists();
    if keymap_created {
        fs::write(&keymap_path, get_default_keymap_yaml())
            .map_err(|e| format!("Failed to write keymap to {}: {}", keymap_path.display(), e))?;
        tracing::info!("Wrote default keymap to {}", keymap_path.display());
    }

    Ok(vec![
        InitEntry {
            path: config_path,
            created: config_created,
        },
        InitEntry {
            path: keymap_path,
            created: keymap_created,
        },
    ])
}
