//! Core types for stopwatch configuration.

use crate::display::Position;

/// What to do with cells left over when a field gets shorter.
///
/// The display has no notion of fields, so a shorter write leaves the tail of
/// the previous, longer write visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Remnants {
    /// Write only the new content; stale trailing cells stay on screen.
    #[default]
    Keep,

    /// Pad with blanks up to the field's maximum width.
    Erase,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Overflows per 100 ms tick must be at least one.
    ZeroOverflowsPerTick,

    /// A field does not fit on the grid.
    PositionOutOfBounds {
        /// Which field.
        field: &'static str,
        /// Where it was placed.
        position: Position,
    },

    /// The tick handler's row and the progress handler's row coincide.
    OverlappingRegions,

    /// The progress bar is empty or wider than the grid.
    BarTooLong,

    /// More glyphs than the display's glyph memory or a cell's columns allow.
    TooManyGlyphs,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroOverflowsPerTick => {
                write!(f, "overflows per tick must be at least 1")
            }
            ConfigError::PositionOutOfBounds { field, position } => {
                write!(
                    f,
                    "{} at column {}, row {} does not fit on the display",
                    field, position.col, position.row
                )
            }
            ConfigError::OverlappingRegions => {
                write!(
                    f,
                    "clock row and progress bar row overlap (both handlers would write the same cells)"
                )
            }
            ConfigError::BarTooLong => {
                write!(f, "progress bar length must be between 1 and the display width")
            }
            ConfigError::TooManyGlyphs => {
                write!(f, "glyph table exceeds the display's glyph memory")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
