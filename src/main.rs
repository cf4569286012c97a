use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use tabcalc::cli::{
    eval_expression, init_config_dir, parse_key_line, table_rows, CliArgs, CliCommand, Session,
};
use tabcalc::model::TableConfig;
use tabcalc::view::ERROR_MARKER;
use tabcalc::{AppModel, CalcConfig, Firmware, LcdBuffer, SimulatedMatrix};

fn main() -> Result<()> {
    let command = CliArgs::parse().command();
    tabcalc::tracing::init(command.logs_to_file());

    let session = Session::load();

    match command {
        CliCommand::Eval { expression, x } => {
            match eval_expression(&expression, x) {
                Ok(value) => println!("{:.*}", session.config.precision, value),
                Err(err) => println!("{err}"),
            }
            Ok(())
        }
        CliCommand::Table {
            expression,
            start,
            step,
            rows,
        } => print_table(&session.config, &expression, TableConfig { start, step }, rows),
        CliCommand::Run { hold_cycles } => run_simulator(session, hold_cycles),
        CliCommand::Init => {
            let dir = tabcalc::config_paths::config_dir()
                .context("No config directory available")?;
            let entries = init_config_dir(&dir).map_err(anyhow::Error::msg)?;
            for entry in entries {
                let status = if entry.created { "created" } else { "exists" };
                println!("{status:>8}  {}", entry.path.display());
            }
            Ok(())
        }
    }
}

fn print_table(config: &CalcConfig, expression: &str, table: TableConfig, rows: u32) -> Result<()> {
    let rows = match table_rows(expression, table, rows) {
        Ok(rows) => rows,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let precision = config.precision;
    let mut out = io::stdout().lock();
    for row in rows {
        match row.y {
            Ok(y) => writeln!(out, "{:>14.*}  {:>14.*}", precision, row.x, precision, y)?,
            Err(_) => writeln!(out, "{:>14.*}  {:>14}", precision, row.x, ERROR_MARKER)?,
        }
    }
    Ok(())
}

/// Drive the firmware with key names from stdin, one line at a time
fn run_simulator(session: Session, hold_cycles: u32) -> Result<()> {
    let Session { config, keymap } = session;
    let lcd = LcdBuffer::new(config.lcd_width);
    let mut firmware = Firmware::new(AppModel::new(config), keymap, SimulatedMatrix::new(), lcd);
    firmware.boot();

    let mut out = io::stdout().lock();
    writeln!(out, "{}", firmware.lcd())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let keys = match parse_key_line(&line) {
            Ok(keys) => keys,
            Err(err) => {
                tracing::warn!("Skipping line {:?}: {}", line, err);
                continue;
            }
        };
        if keys.is_empty() {
            continue;
        }

        for key in keys {
            firmware.press(key, hold_cycles);
        }
        writeln!(out, "{}", firmware.lcd())?;
    }

    Ok(())
}
