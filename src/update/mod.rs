//! Update functions for the Elm-style architecture
//!
//! Every key event flows through [`update`]: the keymap turns it into a
//! [`Command`] for the current mode, and the mode's handler applies it to
//! the model and redraws the display.

mod entry;
mod error;
mod result;
mod settings;
mod table;

use crate::display::Display;
use crate::keymap::{Command, KeyEvent, Keymap};
use crate::model::{AppModel, Mode};

#[cfg(debug_assertions)]
use crate::tracing::ModelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use entry::{enter_entry, update_entry};
pub use error::{enter_error, update_error};
pub use result::{enter_result, update_result};
pub use settings::{enter_settings, update_settings};
pub use table::{enter_table, update_table};

/// Main update function - dispatches a key event to the current mode
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, keymap: &Keymap, event: KeyEvent, lcd: &mut dyn Display) {
    #[cfg(debug_assertions)]
    {
        update_traced(model, keymap, event, lcd)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, keymap, event, lcd)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, keymap: &Keymap, event: KeyEvent, lcd: &mut dyn Display) {
    match model.mode {
        // Any key leaves an error without being replayed
        Mode::Error { .. } => update_error(model, lcd),
        // Any key leaves a result and is then handled as an entry key
        Mode::Result(_) => {
            update_result(model, lcd);
            dispatch(model, keymap, event, lcd);
        }
        Mode::Entry | Mode::Settings(_) | Mode::Table(_) => dispatch(model, keymap, event, lcd),
    }
}

/// Look the key up in the current mode's context and run its handler
fn dispatch(model: &mut AppModel, keymap: &Keymap, event: KeyEvent, lcd: &mut dyn Display) {
    let Some(command) = keymap.lookup(&event, &model.key_context()) else {
        tracing::trace!(key = %event, mode = %model.mode, "unbound key ignored");
        return;
    };
    apply(model, command, lcd);
}

/// Run a command in the current mode
pub fn apply(model: &mut AppModel, command: Command, lcd: &mut dyn Display) {
    match model.mode {
        Mode::Entry => update_entry(model, command, lcd),
        Mode::Settings(focus) => update_settings(model, focus, command, lcd),
        Mode::Table(table) => update_table(model, table, command, lcd),
        Mode::Result(_) | Mode::Error { .. } => {}
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, keymap: &Keymap, event: KeyEvent, lcd: &mut dyn Display) {
    let key_name = event.display_string();
    let _span = span!(Level::DEBUG, "update", key = %key_name, mode = %model.mode).entered();

    let before = ModelSnapshot::from_model(model);
    debug!(target: "message", key = %key_name, "processing");

    update_inner(model, keymap, event, lcd);

    let after = ModelSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "mode", %diff, "state changed");
    }

    model.assert_invariants_with_context(&key_name);
}
