//! Field rendering.
//!
//! A field occupies `width` cells starting at its layout column. While the
//! cursor is left of the last cell the field shows its first bytes; once
//! the cursor reaches the last cell the window scrolls so that the cursor
//! stays pinned there.

use crate::display::Display;
use crate::field::Field;

/// First byte shown and cursor cell offset for a field
pub fn visible_window(field: &Field) -> (usize, usize) {
    let width = usize::from(field.layout().width).max(1);
    let position = field.position();
    if position + 1 < width {
        (0, position)
    } else {
        (position + 1 - width, width - 1)
    }
}

/// Draw a field and leave the display cursor on the field's cursor
pub fn render_text_field(field: &Field, lcd: &mut dyn Display) {
    let layout = field.layout();
    let width = usize::from(layout.width);
    let bytes = field.as_bytes();
    let (start, cursor_offset) = visible_window(field);

    let end = (start + width).min(bytes.len());
    let visible = bytes.get(start..end).unwrap_or_default();

    lcd.set_cursor(layout.column, layout.row);
    lcd.write_bytes(visible);
    for _ in visible.len()..width {
        lcd.put(b' ');
    }
    lcd.set_cursor(layout.column + cursor_offset as u8, layout.row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::LcdBuffer;
    use crate::field::{FieldConstraints, FieldLayout};

    fn field_with(bytes: &[u8], width: u8) -> Field {
        let mut field = Field::new(FieldLayout::new(0, 0, width), FieldConstraints::expression());
        field.set_bytes(bytes);
        field
    }

    #[test]
    fn test_short_field_is_left_aligned() {
        let field = field_with(b"1+2", 16);
        let mut lcd = LcdBuffer::new(16);
        render_text_field(&field, &mut lcd);
        assert_eq!(lcd.line(0), "1+2             ");
        assert_eq!(lcd.cursor(), (3, 0));
    }

    #[test]
    fn test_long_field_scrolls_and_pins_cursor() {
        let field = field_with(b"123456789012345678", 16);
        let mut lcd = LcdBuffer::new(16);
        render_text_field(&field, &mut lcd);
        // Cursor at 18: bytes 3..18 then the blank cursor cell
        assert_eq!(lcd.line(0), "456789012345678 ");
        assert_eq!(lcd.cursor(), (15, 0));
    }

    #[test]
    fn test_cursor_in_middle_of_long_field() {
        let mut field = field_with(b"123456789012345678", 16);
        for _ in 0..3 {
            field.move_left();
        }
        let mut lcd = LcdBuffer::new(16);
        render_text_field(&field, &mut lcd);
        // Cursor at 15: window 0..16, cursor on the last cell
        assert_eq!(lcd.line(0), "1234567890123456");
        assert_eq!(lcd.cursor(), (15, 0));
    }

    #[test]
    fn test_cursor_left_of_last_cell_shows_start() {
        let mut field = field_with(b"123456789012345678", 16);
        for _ in 0..4 {
            field.move_left();
        }
        let mut lcd = LcdBuffer::new(16);
        render_text_field(&field, &mut lcd);
        assert_eq!(lcd.line(0), "1234567890123456");
        assert_eq!(lcd.cursor(), (14, 0));
    }

    #[test]
    fn test_offset_field() {
        let mut field = Field::new(FieldLayout::new(1, 5, 11), FieldConstraints::number());
        field.set_bytes(b"0.5");
        let mut lcd = LcdBuffer::new(16);
        render_text_field(&field, &mut lcd);
        assert_eq!(lcd.line(1), "     0.5        ");
        assert_eq!(lcd.cursor(), (8, 1));
    }
}
