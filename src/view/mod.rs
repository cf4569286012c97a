//! Rendering for each controller mode.
//!
//! Each function draws one mode onto a [`Display`]. Entry, Settings, Table
//! and Error redraw the whole glass; Result only rewrites row 1 so the
//! expression stays visible above the value.

pub mod number;
pub mod text_field;

pub use number::format_number;
pub use text_field::{render_text_field, visible_window};

use crate::calc::CalcError;
use crate::display::Display;
use crate::model::{AppModel, SettingsFocus, START_LABEL, STEP_LABEL};

pub const PRESS_ANY_KEY: &str = "Press any key";
pub const X_LABEL: &str = "X=";
pub const Y_LABEL: &str = "Y=";
/// Shown in place of Y when the table row fails to evaluate
pub const ERROR_MARKER: &str = "ERROR";

pub fn render_entry(model: &AppModel, lcd: &mut dyn Display) {
    lcd.clear();
    lcd.show_cursor(true);
    render_text_field(&model.expression, lcd);
}

/// Value on row 1, cursor back on the expression row
pub fn render_result(model: &AppModel, value: f64, lcd: &mut dyn Display) {
    let width = model.config.lcd_width;
    lcd.set_cursor(0, 1);
    lcd.write_str(&format_number(
        value,
        usize::from(width),
        model.config.precision,
    ));
    let column = model.expression.position().min(usize::from(width).saturating_sub(1));
    lcd.set_cursor(column as u8, 0);
}

pub fn render_settings(model: &AppModel, focus: SettingsFocus, lcd: &mut dyn Display) {
    lcd.clear();
    lcd.show_cursor(true);
    lcd.set_cursor(0, model.start.layout().row);
    lcd.write_str(START_LABEL);
    lcd.set_cursor(0, model.step.layout().row);
    lcd.write_str(STEP_LABEL);

    // Focused field last so the display cursor ends up in it
    let (other, focused) = match focus {
        SettingsFocus::Start => (&model.step, &model.start),
        SettingsFocus::Step => (&model.start, &model.step),
    };
    render_text_field(other, lcd);
    render_text_field(focused, lcd);
}

/// One table row: `x` and the value of the program there
pub fn render_table(model: &AppModel, x: f64, y: Result<f64, CalcError>, lcd: &mut dyn Display) {
    let value_width = usize::from(model.config.lcd_width) - X_LABEL.len();
    let precision = model.config.precision;

    lcd.clear();
    lcd.show_cursor(false);
    lcd.write_str(X_LABEL);
    lcd.write_str(&format_number(x, value_width, precision));

    lcd.set_cursor(0, 1);
    lcd.write_str(Y_LABEL);
    match y {
        Ok(value) => lcd.write_str(&format_number(value, value_width, precision)),
        Err(_) => lcd.write_str(&format!("{ERROR_MARKER:>value_width$}")),
    }
}

pub fn render_error(kind: CalcError, lcd: &mut dyn Display) {
    lcd.clear();
    lcd.show_cursor(false);
    lcd.write_str(&kind.to_string());
    lcd.set_cursor(0, 1);
    lcd.write_str(PRESS_ANY_KEY);
}
