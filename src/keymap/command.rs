//! Command enum representing every action a key can trigger
//!
//! Commands are the bridge between key bindings and the mode handlers in
//! `update`. A handler ignores commands that mean nothing in its mode.

use crate::calc::Function;
use crate::glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Character insertion
    // ========================================================================
    /// Insert a decimal digit (0..=9)
    Digit(u8),
    DecimalPoint,
    OpenParen,
    CloseParen,
    Pi,
    /// Insert the free variable `x`
    Variable,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Insert a function name and its opening parenthesis as one unit
    Function(Function),
    /// Leading minus sign in the table start field
    Minus,

    // ========================================================================
    // Field editing
    // ========================================================================
    Clear,
    DeleteBackward,
    CursorLeft,
    CursorRight,

    // ========================================================================
    // Mode control
    // ========================================================================
    /// Evaluate the expression, or accept the table settings
    Commit,
    /// Leave the table settings without building a table
    Escape,
    FocusStart,
    FocusStep,

    // ========================================================================
    // Table navigation
    // ========================================================================
    TableExit,
    TableStepBack,
    TableStepForward,
    TablePageBack,
    TablePageForward,
    TableReset,

    /// Removes a default binding when used in a keymap override
    Unbound,
}

impl Command {
    /// The byte this command inserts into a field, if any.
    ///
    /// Variables and functions are not single plain bytes and return None.
    pub fn insert_byte(self) -> Option<u8> {
        match self {
            Command::Digit(d) if d <= 9 => Some(b'0' + d),
            Command::DecimalPoint => Some(glyph::DECIMAL_POINT),
            Command::OpenParen => Some(glyph::OPEN_PAREN),
            Command::CloseParen => Some(glyph::CLOSE_PAREN),
            Command::Pi => Some(glyph::PI),
            Command::Add => Some(glyph::ADD),
            Command::Subtract | Command::Minus => Some(glyph::SUBTRACT),
            Command::Multiply => Some(glyph::MULTIPLY),
            Command::Divide => Some(glyph::DIVIDE),
            Command::Power => Some(glyph::POWER),
            _ => None,
        }
    }

    /// Name used in keymap files
    pub fn name(self) -> String {
        match self {
            Command::Digit(d) => format!("Digit{d}"),
            Command::Function(f) => {
                let name = f.name();
                let mut chars = name.chars();
                chars
                    .next()
                    .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                    .unwrap_or_default()
            }
            other => format!("{other:?}"),
        }
    }
}

/// Translate typed text into the commands that would enter it in the
/// expression field.
///
/// Function names must be followed by `(`, which is part of the same
/// command. Returns None on a character no key produces.
pub fn commands_for_text(text: &str) -> Option<Vec<Command>> {
    let bytes = glyph::from_text(text);
    let mut commands = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        if let Some(function) = Function::match_call(&bytes[pos..]) {
            commands.push(Command::Function(function));
            pos += function.name().len() + 1;
            continue;
        }
        let command = match bytes[pos] {
            b @ b'0'..=b'9' => Command::Digit(b - b'0'),
            glyph::DECIMAL_POINT => Command::DecimalPoint,
            glyph::OPEN_PAREN => Command::OpenParen,
            glyph::CLOSE_PAREN => Command::CloseParen,
            glyph::PI => Command::Pi,
            glyph::VARIABLE => Command::Variable,
            glyph::ADD => Command::Add,
            glyph::SUBTRACT => Command::Subtract,
            glyph::MULTIPLY => Command::Multiply,
            glyph::DIVIDE => Command::Divide,
            glyph::POWER => Command::Power,
            _ => return None,
        };
        commands.push(command);
        pos += 1;
    }
    Some(commands)
}
