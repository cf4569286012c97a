//! Mode transitions driven by key presses

mod common;

use common::Harness;
use tabcalc::calc::CalcError;
use tabcalc::keymap::{Command, KeyEvent};
use tabcalc::model::{Mode, ReturnMode, SettingsFocus};
use tabcalc::view::PRESS_ANY_KEY;

// ============================================================================
// Result
// ============================================================================

#[test]
fn test_constant_expression_shows_result() {
    let mut harness = Harness::new();
    harness.enter("2+3*4");

    assert_eq!(harness.model.mode, Mode::Result(14.0));
    assert_eq!(harness.trimmed(0), "2+3*4");
    assert_eq!(harness.line(1), format!("{:>16}", "14.0000"));
    assert_eq!(harness.lcd.cursor(), (5, 0));
}

#[test]
fn test_key_after_result_edits_the_expression() {
    let mut harness = Harness::new();
    harness.enter("(2+3)*4");
    assert_eq!(harness.model.mode, Mode::Result(20.0));

    harness.run(Command::Digit(0));
    assert_eq!(harness.model.mode, Mode::Entry);
    assert_eq!(harness.model.expression.text(), "(2+3)*40");
    assert_eq!(harness.trimmed(1), "");
}

#[test]
fn test_commit_after_result_recomputes() {
    let mut harness = Harness::new();
    harness.enter("2^3^2");
    assert_eq!(harness.model.mode, Mode::Result(64.0));
    harness.run(Command::Commit);
    // The commit leaves the result, then commits again in entry
    assert_eq!(harness.model.mode, Mode::Result(64.0));
}

#[test]
fn test_precision_comes_from_config() {
    let config = tabcalc::CalcConfig {
        precision: 2,
        ..Default::default()
    };
    let mut harness = Harness::with_config(config);
    harness.enter("2/3");
    assert_eq!(harness.line(1), format!("{:>16}", "0.67"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_math_error_and_acknowledge() {
    let mut harness = Harness::new();
    harness.enter("1/0");

    assert_eq!(
        harness.model.mode,
        Mode::Error {
            kind: CalcError::Math,
            previous: ReturnMode::Entry
        }
    );
    assert_eq!(harness.trimmed(0), "Math. Error");
    assert_eq!(harness.trimmed(1), PRESS_ANY_KEY);
    assert!(!harness.lcd.cursor_visible());

    // The acknowledging key is swallowed
    harness.run(Command::Digit(7));
    assert_eq!(harness.model.mode, Mode::Entry);
    assert_eq!(harness.model.expression.text(), "1÷0");
    assert!(harness.lcd.cursor_visible());
}

#[test]
fn test_syntax_errors() {
    for text in ["(2+3", ")2+3", "2+", ""] {
        let mut harness = Harness::new();
        harness.enter(text);
        assert_eq!(
            harness.model.mode,
            Mode::Error {
                kind: CalcError::Syntax,
                previous: ReturnMode::Entry
            },
            "{text:?}"
        );
        assert_eq!(harness.trimmed(0), "Syntax Error");
    }
}

#[test]
fn test_too_long_expression_runs_out_of_memory() {
    let mut harness = Harness::new();
    harness.enter(&format!("-{}", vec!["1"; 16].join("+")));
    assert_eq!(
        harness.model.mode,
        Mode::Error {
            kind: CalcError::NoMemory,
            previous: ReturnMode::Entry
        }
    );
    assert_eq!(harness.trimmed(0), "Not enough mem.");
}

#[test]
fn test_syntax_error_in_x_expression_stays_in_entry() {
    let mut harness = Harness::new();
    harness.enter("x+");
    assert!(matches!(
        harness.model.mode,
        Mode::Error {
            kind: CalcError::Syntax,
            previous: ReturnMode::Entry
        }
    ));
    assert!(harness.model.program.is_none());
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_x_expression_opens_settings() {
    let mut harness = Harness::new();
    harness.enter("x^2");

    assert_eq!(harness.model.mode, Mode::Settings(SettingsFocus::Start));
    assert!(harness.model.program.is_some());
    assert!(harness.line(0).starts_with("START="));
    assert!(harness.line(1).starts_with("STEP="));
    assert_eq!(harness.lcd.cursor(), (6, 0));
}

#[test]
fn test_math_error_at_zero_still_opens_settings() {
    let mut harness = Harness::new();
    harness.enter("1/x");
    assert_eq!(harness.model.mode, Mode::Settings(SettingsFocus::Start));
}

#[test]
fn test_focus_moves_between_fields() {
    let mut harness = Harness::new();
    harness.enter("x");
    harness.type_number("12");
    harness.run(Command::FocusStep);
    assert_eq!(harness.model.mode, Mode::Settings(SettingsFocus::Step));
    harness.type_number("3");
    assert_eq!(harness.lcd.cursor(), (6, 1));

    harness.run(Command::FocusStart);
    harness.type_number("4");
    assert_eq!(harness.model.start.text(), "124");
    assert_eq!(harness.model.step.text(), "3");
    assert_eq!(harness.line(0), "START=124       ");
}

#[test]
fn test_minus_only_in_start_field() {
    let mut harness = Harness::new();
    harness.enter("x");
    harness.type_number("-5");
    assert_eq!(harness.model.start.text(), "-5");

    harness.run(Command::FocusStep);
    harness.press(KeyEvent::shifted(3, 1));
    assert!(harness.model.step.is_empty());
}

#[test]
fn test_zero_step_is_a_range_error() {
    for step in ["0", "0.0", ".", ""] {
        let mut harness = Harness::new();
        harness.enter("x");
        harness.run(Command::FocusStep);
        harness.type_number(step);
        harness.run(Command::Commit);

        assert_eq!(
            harness.model.mode,
            Mode::Error {
                kind: CalcError::Range,
                previous: ReturnMode::Settings
            },
            "step {step:?}"
        );
        assert_eq!(harness.trimmed(0), "Range Error");

        // Back to the settings, fields kept, start focused
        harness.run(Command::Digit(1));
        assert_eq!(harness.model.mode, Mode::Settings(SettingsFocus::Start));
        assert_eq!(harness.model.step.text(), step);
    }
}

#[test]
fn test_escape_returns_to_entry() {
    let mut harness = Harness::new();
    harness.enter("x*2");
    harness.run(Command::Escape);
    assert_eq!(harness.model.mode, Mode::Entry);
    assert_eq!(harness.trimmed(0), "x*2");
    assert_eq!(harness.lcd.cursor(), (3, 0));
}

#[test]
fn test_settings_fields_survive_between_visits() {
    let mut harness = Harness::new();
    harness.open_table("x", "2", "0.5");
    harness.run(Command::TableExit);
    harness.run(Command::Commit);

    assert_eq!(harness.model.mode, Mode::Settings(SettingsFocus::Start));
    assert_eq!(harness.model.start.text(), "2");
    assert_eq!(harness.model.step.text(), "0.5");
}

#[test]
fn test_expression_keys_are_ignored_in_settings() {
    let mut harness = Harness::new();
    harness.enter("x");
    // shift+1_1 is pi in entry and unbound in settings
    harness.press(KeyEvent::shifted(1, 1));
    assert!(harness.model.start.is_empty());
    assert_eq!(harness.model.mode, Mode::Settings(SettingsFocus::Start));
}
