//! Character display abstraction.
//!
//! Defines the [`CharDisplay`] trait the core drives, plus the small value
//! types used to address it.

/// Which memory the display's address counter points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressMode {
    /// Character memory (DDRAM): `put_char` writes a character code at the cursor.
    Character,
    /// Glyph memory (CGRAM): `write_glyph_row` writes successive pixel rows.
    Glyph,
}

/// A cell on the character grid, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    /// Column.
    pub col: u8,
    /// Row.
    pub row: u8,
}

impl Position {
    /// Creates a position.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

/// Trait for abstracting character display hardware.
///
/// Implement this for your display (HD44780 over GPIO, I2C backpack, ...) to
/// allow the stopwatch to drive it. All operations are infallible from the
/// core's point of view. Handle bus errors internally.
///
/// The display is cursor-stateful: a `goto` followed by writes must not be
/// interleaved with another caller's writes. See
/// [`InterruptShared`](crate::InterruptShared) for the locking used when two
/// interrupt handlers share one display.
pub trait CharDisplay {
    /// Switches the address counter between character and glyph memory.
    ///
    /// Switching to [`AddressMode::Glyph`] starts at glyph 0, row 0.
    fn set_mode(&mut self, mode: AddressMode);

    /// Writes one 5-bit pixel row to glyph memory and advances to the next row.
    fn write_glyph_row(&mut self, row: u8);

    /// Moves the cursor to a grid cell.
    fn goto(&mut self, position: Position);

    /// Writes one character code at the cursor and advances it.
    fn put_char(&mut self, code: u8);

    /// Writes a string at the cursor.
    ///
    /// The string may borrow a short-lived formatting buffer and must not be
    /// retained.
    fn put_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.put_char(byte);
        }
    }
}

impl<D: CharDisplay + ?Sized> CharDisplay for &mut D {
    fn set_mode(&mut self, mode: AddressMode) {
        (**self).set_mode(mode);
    }

    fn write_glyph_row(&mut self, row: u8) {
        (**self).write_glyph_row(row);
    }

    fn goto(&mut self, position: Position) {
        (**self).goto(position);
    }

    fn put_char(&mut self, code: u8) {
        (**self).put_char(code);
    }

    fn put_str(&mut self, text: &str) {
        (**self).put_str(text);
    }
}
