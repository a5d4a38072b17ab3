#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TickAccumulator`**: Turns raw ~16 ms timer overflows into a tenths/seconds/minutes clock
//! - **`ClockState`**: The `MM:SS.T` value with its carry and rollover rules
//! - **`SecondsSquared`**: The derived "secPwr" value shown next to the clock
//! - **`DisplayRenderer`**: Writes clock and derived value to fixed grid positions
//! - **`ProgressAnimator`**: Cyclic 1..=5 glyph bar driven by an independent ~1 s source
//! - **`GlyphTable`** / **`GlyphLoader`**: Partial-block custom characters uploaded at start-up
//! - **`Stopwatch`**: Start-up sequencing that hands back one handler per interrupt
//! - **`CharDisplay`**: Trait to implement for your character display
//! - **`PeriodicSource`**: Trait to implement for your hardware timers
//! - **`InterruptShared`**: Critical-section cell for state shared between interrupt handlers
//!
//! The two handlers have no ordering relative to each other. They stay
//! consistent because they write disjoint display rows and each holds the
//! shared display for its whole update.

pub mod clock;
pub mod config;
pub mod display;
pub mod format;
pub mod glyph;
pub mod progress;
pub mod render;
pub mod sec_pwr;
pub mod shared;
pub mod stopwatch;
pub mod tick;
pub mod timer;
pub mod types;

pub use clock::ClockState;
pub use config::{StopwatchConfig, StopwatchConfigBuilder};
pub use display::{AddressMode, CharDisplay, Position};
pub use format::{format_clock, format_sec_pwr, ClockString, SecPwrString};
pub use glyph::{GlyphLoader, GlyphTable, GLYPH_ROWS};
pub use progress::ProgressAnimator;
pub use render::DisplayRenderer;
pub use sec_pwr::SecondsSquared;
pub use shared::{with_both, InterruptShared};
pub use stopwatch::{Handlers, Stopwatch};
pub use tick::{TickAccumulator, TickOutcome};
pub use timer::{Period, PeriodicSource, PROGRESS_PERIOD, TICK_PERIOD};
pub use types::{ConfigError, Remnants};

/// HD44780 ROM code for a fully lit 5x8 cell.
pub const SOLID_BLOCK: u8 = 0xFF;

/// Number of custom glyphs uploaded by the default start-up sequence.
pub const DEFAULT_GLYPH_COUNT: usize = 4;
