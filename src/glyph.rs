//! Custom glyph table and its one-time upload to glyph memory.

use crate::config::StopwatchConfig;
use crate::display::{AddressMode, CharDisplay};
use crate::types::ConfigError;

/// Pixel rows per glyph (5x8 font).
pub const GLYPH_ROWS: usize = 8;

/// Pixel columns per glyph.
pub const GLYPH_COLUMNS: usize = 5;

/// Glyph slots in an HD44780's CGRAM with the 5x8 font.
pub const MAX_GLYPHS: usize = 8;

const ROW_MASK: u8 = 0b1_1111;

/// A fixed set of custom glyphs, immutable once built.
///
/// Glyph `k` is uploaded to slot `k` and shown by writing character code `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable<const N: usize> {
    glyphs: [[u8; GLYPH_ROWS]; N],
}

impl<const N: usize> GlyphTable<N> {
    /// Creates a table from raw row bitmaps. Only the low five bits of a row
    /// are visible.
    ///
    /// # Errors
    /// `TooManyGlyphs` if `N` exceeds the glyph memory.
    pub fn new(glyphs: [[u8; GLYPH_ROWS]; N]) -> Result<Self, ConfigError> {
        if N > MAX_GLYPHS {
            return Err(ConfigError::TooManyGlyphs);
        }
        Ok(Self { glyphs })
    }

    /// Builds horizontal partial blocks: glyph `k` lights its `k + 1` leftmost
    /// columns on every row.
    ///
    /// With `N = 4` this is the quarter, half, three-quarter and full fill set
    /// previewed at start-up.
    ///
    /// # Errors
    /// `TooManyGlyphs` if `N` exceeds the five columns of a cell.
    pub fn partial_blocks() -> Result<Self, ConfigError> {
        if N > GLYPH_COLUMNS {
            return Err(ConfigError::TooManyGlyphs);
        }
        let glyphs = core::array::from_fn(|k| {
            let lit = (ROW_MASK << (GLYPH_COLUMNS - 1 - k)) & ROW_MASK;
            [lit; GLYPH_ROWS]
        });
        Self::new(glyphs)
    }

    /// Number of glyphs.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the table holds no glyphs.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Rows of the glyph at `code`, if present.
    pub fn glyph(&self, code: u8) -> Option<&[u8; GLYPH_ROWS]> {
        self.glyphs.get(usize::from(code))
    }

    /// All rows in upload order.
    pub fn rows(&self) -> impl Iterator<Item = u8> + '_ {
        self.glyphs.iter().flatten().copied()
    }
}

/// Uploads a glyph table and writes the start-up preview.
pub struct GlyphLoader;

impl GlyphLoader {
    /// Writes every glyph row to glyph memory, switches back to character
    /// memory, then shows codes `0..N` at the configured preview position.
    ///
    /// Must complete before either periodic source is enabled; both handlers
    /// assume character addressing.
    ///
    /// # Errors
    /// `TooManyGlyphs` or `PositionOutOfBounds` if the table or its preview
    /// does not fit. Nothing is written in that case.
    pub fn load<D: CharDisplay, const N: usize>(
        display: &mut D,
        table: &GlyphTable<N>,
        config: &StopwatchConfig,
    ) -> Result<(), ConfigError> {
        config.check_glyphs(N)?;

        display.set_mode(AddressMode::Glyph);
        for row in table.rows() {
            display.write_glyph_row(row);
        }
        display.set_mode(AddressMode::Character);

        display.goto(config.preview_position());
        for code in 0..N {
            // Bounded by MAX_GLYPHS above.
            display.put_char(code as u8);
        }

        Ok(())
    }
}
