//! Input fields for the expression and the table settings.
//!
//! A [`Field`] is a bounded byte buffer with a cursor and a fixed place on
//! the display. The expression field accepts every glyph and treats
//! `name(` function prefixes as atomic units; the start and step fields
//! accept digits, a decimal point and a minus sign.
//!
//! # Example
//!
//! ```
//! use tabcalc::field::{Field, FieldConstraints, FieldLayout};
//!
//! let mut field = Field::new(FieldLayout::new(0, 0, 16), FieldConstraints::expression());
//! field.insert_atomic("sin(");
//! field.insert_char(b'3');
//! field.move_left();
//! field.move_left();
//! assert_eq!(field.position(), 0);
//! ```

mod buffer;
mod constraints;
mod state;

pub use buffer::FieldBuffer;
pub use constraints::{ByteFilter, FieldConstraints, EXPRESSION_CAPACITY, NUMBER_CAPACITY};
pub use state::{Field, FieldLayout};
