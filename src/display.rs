//! Character display sink.
//!
//! The controller only talks to the display through [`Display`]: clear,
//! position the cursor, write bytes, toggle the cursor. [`LcdBuffer`] is an
//! in-memory HD44780-style implementation used by the host simulator and
//! the tests.

use std::fmt;

use crate::glyph;

/// Rows on the character display
pub const LCD_ROWS: u8 = 2;

/// Default display width in cells
pub const LCD_WIDTH: u8 = 16;

pub trait Display {
    /// Blank every cell and home the cursor
    fn clear(&mut self);

    fn set_cursor(&mut self, column: u8, row: u8);

    /// Write one byte at the cursor and advance it
    fn put(&mut self, byte: u8);

    fn show_cursor(&mut self, visible: bool);

    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put(byte);
        }
    }

    fn write_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }
}

/// In-memory character display.
///
/// Writes past the last column are dropped, as on a display whose DDRAM
/// window is wider than the glass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcdBuffer {
    width: u8,
    cells: Vec<u8>,
    cursor: (u8, u8),
    cursor_visible: bool,
}

impl LcdBuffer {
    pub fn new(width: u8) -> Self {
        Self {
            width,
            cells: vec![b' '; usize::from(width) * usize::from(LCD_ROWS)],
            cursor: (0, 0),
            cursor_visible: false,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Cursor position as (column, row)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Raw bytes of one row
    pub fn row_bytes(&self, row: u8) -> &[u8] {
        let width = usize::from(self.width);
        let start = usize::from(row.min(LCD_ROWS - 1)) * width;
        &self.cells[start..start + width]
    }

    /// One row as displayed, glyph codes mapped to characters
    pub fn line(&self, row: u8) -> String {
        glyph::to_string(self.row_bytes(row))
    }

    pub fn lines(&self) -> Vec<String> {
        (0..LCD_ROWS).map(|row| self.line(row)).collect()
    }
}

impl Default for LcdBuffer {
    fn default() -> Self {
        Self::new(LCD_WIDTH)
    }
}

impl Display for LcdBuffer {
    fn clear(&mut self) {
        self.cells.fill(b' ');
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, column: u8, row: u8) {
        self.cursor = (column, row.min(LCD_ROWS - 1));
    }

    fn put(&mut self, byte: u8) {
        let (column, row) = self.cursor;
        if column < self.width {
            let idx = usize::from(row) * usize::from(self.width) + usize::from(column);
            self.cells[idx] = byte;
        }
        self.cursor.0 = column.saturating_add(1);
    }

    fn show_cursor(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }
}

impl fmt::Display for LcdBuffer {
    /// Framed view of the glass, e.g. for the simulator's output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(usize::from(self.width));
        writeln!(f, "+{border}+")?;
        for line in self.lines() {
            writeln!(f, "|{line}|")?;
        }
        write!(f, "+{border}+")
    }
}
