//! Integration tests for the keymap system

use super::*;
use crate::calc::Function;

fn keymap() -> Keymap {
    Keymap::with_bindings(default_bindings())
}

#[test]
fn test_embedded_yaml_parses() {
    let bindings = parse_keymap_yaml(get_default_keymap_yaml())
        .expect("Embedded keymap.yaml should parse successfully");

    assert!(!bindings.is_empty(), "Should have bindings");
    assert!(bindings.iter().any(|b| b.command == Command::Commit));
    assert!(bindings.iter().any(|b| b.command == Command::TableExit));
}

#[test]
fn test_entry_digits_and_functions() {
    let keymap = keymap();
    let ctx = KeyContext::entry();

    assert_eq!(
        keymap.lookup(&KeyEvent::plain(0, 0), &ctx),
        Some(Command::Digit(1))
    );
    assert_eq!(
        keymap.lookup(&KeyEvent::plain(1, 3), &ctx),
        Some(Command::Digit(0))
    );
    assert_eq!(
        keymap.lookup(&KeyEvent::shifted(0, 0), &ctx),
        Some(Command::Function(Function::Sin))
    );
    assert_eq!(
        keymap.lookup(&KeyEvent::shifted(3, 3), &ctx),
        Some(Command::Divide)
    );
    assert_eq!(
        keymap.lookup(&KeyEvent::shifted(0, 2), &ctx),
        Some(Command::Variable)
    );
}

#[test]
fn test_settings_reuses_number_keys() {
    let keymap = keymap();
    let ctx = KeyContext::settings(true);

    assert_eq!(
        keymap.lookup(&KeyEvent::plain(2, 2), &ctx),
        Some(Command::Digit(9))
    );
    assert_eq!(
        keymap.lookup(&KeyEvent::shifted(0, 0), &ctx),
        Some(Command::Escape)
    );
    // Parentheses are entry-only
    assert_eq!(keymap.lookup(&KeyEvent::plain(0, 3), &ctx), None);
}

#[test]
fn test_settings_minus_needs_start_focus() {
    let keymap = keymap();
    let minus = KeyEvent::shifted(3, 1);

    assert_eq!(
        keymap.lookup(&minus, &KeyContext::settings(true)),
        Some(Command::Minus)
    );
    assert_eq!(keymap.lookup(&minus, &KeyContext::settings(false)), None);
}

#[test]
fn test_table_ignores_shift() {
    let keymap = keymap();
    let ctx = KeyContext::table();

    for (column, row) in [(0, 0), (1, 0), (1, 2), (0, 1), (2, 1), (1, 1)] {
        assert_eq!(
            keymap.lookup(&KeyEvent::plain(column, row), &ctx),
            keymap.lookup(&KeyEvent::shifted(column, row), &ctx),
            "key {column}_{row}"
        );
    }
    assert_eq!(
        keymap.lookup(&KeyEvent::plain(0, 0), &ctx),
        Some(Command::TableExit)
    );
}

#[test]
fn test_key_for_entry_text() {
    let keymap = keymap();
    let ctx = KeyContext::entry();

    for command in commands_for_text("asin(x)+2^3-pi").unwrap() {
        assert!(
            keymap.key_for(command, &ctx).is_some(),
            "no key produces {command:?}"
        );
    }
}
