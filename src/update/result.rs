//! Result display

use super::enter_entry;
use crate::display::Display;
use crate::model::{AppModel, Mode};
use crate::view;

pub fn enter_result(model: &mut AppModel, value: f64, lcd: &mut dyn Display) {
    model.mode = Mode::Result(value);
    view::render_result(model, value, lcd);
}

/// Any key leaves the result for entry. The caller then delivers the same
/// key to the entry handler.
pub fn update_result(model: &mut AppModel, lcd: &mut dyn Display) {
    enter_entry(model, lcd);
}
