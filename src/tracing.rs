//! Logging setup and the model snapshots logged around each key
//!
//! `RUST_LOG` filters the stderr output (default `warn`), for example
//! `RUST_LOG=tabcalc::update=debug` or `RUST_LOG=tabcalc::runtime=trace`
//! to see every key the scanner delivers. With `file_logging` a second
//! layer writes debug output to `logs/tabcalc.log.<date>` under the config
//! directory.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Install the global subscriber. Call once, before anything logs.
///
/// Without `file_logging` nothing is written under the config directory.
pub fn init(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the simulator frames
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match file_logging.then(crate::config_paths::ensure_logs_dir) {
        None => None,
        Some(Ok(logs_dir)) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Some(Err(e)) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of controller state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSnapshot {
    pub mode: &'static str,
    pub expression_len: usize,
    pub expression_position: usize,
    pub variable_count: usize,
    pub start_len: usize,
    pub step_len: usize,
}

impl ModelSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            mode: model.mode.as_str(),
            expression_len: model.expression.len(),
            expression_position: model.expression.position(),
            variable_count: model.expression.variable_count(),
            start_len: model.start.len(),
            step_len: model.step.len(),
        }
    }

    /// `None` when nothing the log cares about changed
    pub fn diff(&self, other: &ModelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!("mode: {} → {}", self.mode, other.mode));
        }
        if self.expression_len != other.expression_len
            || self.expression_position != other.expression_position
        {
            changes.push(format!(
                "expression: {}@{} → {}@{}",
                self.expression_len,
                self.expression_position,
                other.expression_len,
                other.expression_position
            ));
        }
        if self.variable_count != other.variable_count {
            changes.push(format!(
                "x count: {} → {}",
                self.variable_count, other.variable_count
            ));
        }
        if self.start_len != other.start_len {
            changes.push(format!("start: {} → {}", self.start_len, other.start_len));
        }
        if self.step_len != other.step_len {
            changes.push(format!("step: {} → {}", self.step_len, other.step_len));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
