//! Expression entry

use tracing::debug;

use super::{enter_error, enter_result, enter_settings};
use crate::calc::{compile, CalcError};
use crate::display::Display;
use crate::keymap::Command;
use crate::model::{AppModel, Mode, ReturnMode};
use crate::view;

pub fn enter_entry(model: &mut AppModel, lcd: &mut dyn Display) {
    model.mode = Mode::Entry;
    view::render_entry(model, lcd);
}

pub fn update_entry(model: &mut AppModel, command: Command, lcd: &mut dyn Display) {
    let field = &mut model.expression;
    match command {
        Command::Commit => return commit(model, lcd),
        Command::Variable => {
            field.insert_variable();
        }
        Command::Function(function) => {
            field.insert_atomic(&function.call_prefix());
        }
        Command::Clear => field.clear(),
        Command::DeleteBackward => {
            field.delete_before_cursor();
        }
        Command::CursorLeft => field.move_left(),
        Command::CursorRight => field.move_right(),
        other => match other.insert_byte() {
            Some(byte) => {
                field.insert_char(byte);
            }
            None => return,
        },
    }
    view::render_text_field(&model.expression, lcd);
}

/// Compile the expression and decide between a result and a table
fn commit(model: &mut AppModel, lcd: &mut dyn Display) {
    let program = match compile(model.expression.as_bytes()) {
        Ok(program) => program,
        Err(kind) => {
            debug!(error = %kind, expression = %model.expression.text(), "compile failed");
            return enter_error(model, kind, ReturnMode::Entry, lcd);
        }
    };

    let outcome = program.evaluate(0.0);
    debug!(
        tokens = program.len(),
        variable_uses = program.variable_uses(),
        ?outcome,
        "expression committed"
    );

    if program.uses_variable() {
        // A math error at x = 0 says nothing about the rest of the table
        match outcome {
            Ok(_) | Err(CalcError::Math) => {
                model.program = Some(program);
                enter_settings(model, lcd);
            }
            Err(kind) => enter_error(model, kind, ReturnMode::Entry, lcd),
        }
    } else {
        match outcome {
            Ok(value) => enter_result(model, value, lcd),
            Err(kind) => enter_error(model, kind, ReturnMode::Entry, lcd),
        }
    }
}
