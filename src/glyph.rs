//! Byte values used in field buffers and on the display.
//!
//! The display is an HD44780-compatible character LCD, so π and ÷ are the
//! controller's ROM codes rather than Unicode. Everything else is ASCII.

pub const VARIABLE: u8 = b'x';
pub const DECIMAL_POINT: u8 = b'.';
pub const OPEN_PAREN: u8 = b'(';
pub const CLOSE_PAREN: u8 = b')';
pub const PI: u8 = 0xF7;
pub const ADD: u8 = b'+';
pub const SUBTRACT: u8 = b'-';
pub const MULTIPLY: u8 = b'*';
pub const DIVIDE: u8 = 0xFD;
pub const POWER: u8 = b'^';

/// ASCII slash, accepted by the compiler as an alternative to [`DIVIDE`]
pub const ASCII_DIVIDE: u8 = b'/';

/// Map a display byte to the character it shows on the LCD
pub fn to_char(byte: u8) -> char {
    match byte {
        PI => 'π',
        DIVIDE => '÷',
        b if b.is_ascii() => b as char,
        _ => '?',
    }
}

/// Render a run of display bytes as a `String`
pub fn to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| to_char(b)).collect()
}

/// Convert typed ASCII text into display bytes.
///
/// `/` and `÷` become the division glyph, `pi` and `π` become the π glyph.
/// Whitespace is dropped. Other characters pass through when they are ASCII
/// and are replaced by `?` otherwise, which the compiler rejects.
pub fn from_text(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '/' | '÷' => bytes.push(DIVIDE),
            'π' => bytes.push(PI),
            'p' if chars.peek() == Some(&'i') => {
                chars.next();
                bytes.push(PI);
            }
            c if c.is_whitespace() => {}
            c if c.is_ascii() => bytes.push(c as u8),
            _ => bytes.push(b'?'),
        }
    }
    bytes
}
