//! Error display

use tracing::debug;

use super::{enter_entry, enter_settings};
use crate::calc::CalcError;
use crate::display::Display;
use crate::model::{AppModel, Mode, ReturnMode};
use crate::view;

pub fn enter_error(
    model: &mut AppModel,
    kind: CalcError,
    previous: ReturnMode,
    lcd: &mut dyn Display,
) {
    debug!(error = %kind, ?previous, "entering error mode");
    model.mode = Mode::Error { kind, previous };
    view::render_error(kind, lcd);
}

/// Any key goes back to the mode the error came from
pub fn update_error(model: &mut AppModel, lcd: &mut dyn Display) {
    let Mode::Error { previous, .. } = model.mode else {
        return;
    };
    match previous {
        ReturnMode::Entry => enter_entry(model, lcd),
        ReturnMode::Settings => enter_settings(model, lcd),
    }
}
