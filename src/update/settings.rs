//! Table settings: start and step entry

use tracing::debug;

use super::{enter_entry, enter_error, enter_table};
use crate::calc::CalcError;
use crate::display::Display;
use crate::keymap::Command;
use crate::model::{AppModel, Mode, ReturnMode, SettingsFocus, TableConfig};
use crate::util::parse_leading_float;
use crate::view;

/// Show the settings with the start field focused. Field contents are kept
/// from the previous visit.
pub fn enter_settings(model: &mut AppModel, lcd: &mut dyn Display) {
    model.mode = Mode::Settings(SettingsFocus::Start);
    view::render_settings(model, SettingsFocus::Start, lcd);
}

pub fn update_settings(
    model: &mut AppModel,
    focus: SettingsFocus,
    command: Command,
    lcd: &mut dyn Display,
) {
    match command {
        Command::Commit => return commit(model, lcd),
        Command::Escape => return enter_entry(model, lcd),
        Command::FocusStart | Command::FocusStep => {
            let focus = if command == Command::FocusStart {
                SettingsFocus::Start
            } else {
                SettingsFocus::Step
            };
            model.mode = Mode::Settings(focus);
            view::render_text_field(model.settings_field(focus), lcd);
            return;
        }
        _ => {}
    }

    let field = model.settings_field_mut(focus);
    match command {
        Command::Digit(_) | Command::DecimalPoint => {
            if let Some(byte) = command.insert_byte() {
                field.insert_char(byte);
            }
        }
        Command::Minus if focus == SettingsFocus::Start => {
            field.insert_char(b'-');
        }
        Command::Clear => field.clear(),
        Command::DeleteBackward => {
            field.delete_before_cursor();
        }
        Command::CursorLeft => field.move_left(),
        Command::CursorRight => field.move_right(),
        _ => return,
    }
    view::render_text_field(model.settings_field(focus), lcd);
}

/// Read start and step and open the table
fn commit(model: &mut AppModel, lcd: &mut dyn Display) {
    let start = parse_leading_float(model.start.as_bytes());
    let step = parse_leading_float(model.step.as_bytes());

    if step == 0.0 {
        debug!(step = %model.step.text(), "table step is zero");
        return enter_error(model, CalcError::Range, ReturnMode::Settings, lcd);
    }

    enter_table(model, TableConfig { start, step }, lcd);
}
