//! Table sweep

use tracing::debug;

use super::enter_entry;
use crate::calc::CalcError;
use crate::display::Display;
use crate::keymap::Command;
use crate::model::{AppModel, Mode, TableConfig, TableView};
use crate::view;

pub fn enter_table(model: &mut AppModel, config: TableConfig, lcd: &mut dyn Display) {
    debug!(start = config.start, step = config.step, "entering table");
    show_row(model, TableView::new(config), lcd);
}

pub fn update_table(
    model: &mut AppModel,
    table: TableView,
    command: Command,
    lcd: &mut dyn Display,
) {
    let page = model.config.table_page_step;
    let position = match command {
        Command::TableExit => return enter_entry(model, lcd),
        Command::TableStepBack => table.position.saturating_sub(1),
        Command::TableStepForward => table.position.saturating_add(1),
        Command::TablePageBack => table.position.saturating_sub(page),
        Command::TablePageForward => table.position.saturating_add(page),
        Command::TableReset => 0,
        _ => return,
    };
    show_row(model, TableView { position, ..table }, lcd);
}

/// Evaluate the program at the table position and draw the row. Failures
/// are shown in the row; the table stays open.
fn show_row(model: &mut AppModel, table: TableView, lcd: &mut dyn Display) {
    let x = table.x();
    let y = model
        .program
        .as_ref()
        .ok_or(CalcError::Syntax)
        .and_then(|program| program.evaluate(x));

    tracing::trace!(position = table.position, x, ?y, "table row");
    model.mode = Mode::Table(table);
    view::render_table(model, x, y, lcd);
}
