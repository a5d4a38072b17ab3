//! Stopwatch layout and timing configuration.

use crate::display::Position;
use crate::format::{CLOCK_LEN, SEC_PWR_WIDTH};
use crate::timer::{Period, PROGRESS_PERIOD, TICK_PERIOD};
use crate::types::{ConfigError, Remnants};
use crate::SOLID_BLOCK;

/// Validated stopwatch configuration.
///
/// Describes where each field lives on the grid, how raw overflows map to
/// 100 ms ticks, and how the progress bar is drawn. Construct one with
/// [`StopwatchConfig::builder`] or take the [`Default`], which matches a
/// 16x2 HD44780 panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopwatchConfig {
    columns: u8,
    rows: u8,
    time_position: Position,
    sec_pwr_position: Position,
    bar_position: Position,
    preview_position: Position,
    overflows_per_tick: u8,
    bar_max_len: u8,
    filler: u8,
    remnants: Remnants,
    tick_period: Period,
    progress_period: Period,
}

impl StopwatchConfig {
    /// Creates a new configuration builder with 16x2 defaults.
    pub fn builder() -> StopwatchConfigBuilder {
        StopwatchConfigBuilder::new()
    }

    /// Grid width in characters.
    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Grid height in characters.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Where `MM:SS.T` starts.
    pub fn time_position(&self) -> Position {
        self.time_position
    }

    /// Where secPwr starts.
    pub fn sec_pwr_position(&self) -> Position {
        self.sec_pwr_position
    }

    /// Where the progress bar starts.
    pub fn bar_position(&self) -> Position {
        self.bar_position
    }

    /// Where the start-up glyph preview is written.
    pub fn preview_position(&self) -> Position {
        self.preview_position
    }

    /// Raw overflows per 100 ms tick.
    pub fn overflows_per_tick(&self) -> u8 {
        self.overflows_per_tick
    }

    /// Longest progress bar, in glyphs.
    pub fn bar_max_len(&self) -> u8 {
        self.bar_max_len
    }

    /// Character code used to draw the bar.
    pub fn filler(&self) -> u8 {
        self.filler
    }

    /// Policy for stale cells when a field shrinks.
    pub fn remnants(&self) -> Remnants {
        self.remnants
    }

    /// Period the tick source is configured with.
    pub fn tick_period(&self) -> Period {
        self.tick_period
    }

    /// Period the progress source is configured with.
    pub fn progress_period(&self) -> Period {
        self.progress_period
    }

    /// Checks that `glyph_count` custom glyphs plus their preview fit.
    pub(crate) fn check_glyphs(&self, glyph_count: usize) -> Result<(), ConfigError> {
        if glyph_count > crate::glyph::MAX_GLYPHS {
            return Err(ConfigError::TooManyGlyphs);
        }
        check_fits(self.columns, self.rows, "glyph preview", self.preview_position, glyph_count)
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            columns: 16,
            rows: 2,
            time_position: Position::new(1, 0),
            sec_pwr_position: Position::new(12, 0),
            bar_position: Position::new(0, 1),
            preview_position: Position::new(7, 1),
            overflows_per_tick: 6,
            bar_max_len: 5,
            filler: SOLID_BLOCK,
            remnants: Remnants::Keep,
            tick_period: TICK_PERIOD,
            progress_period: PROGRESS_PERIOD,
        }
    }
}

/// Builder for constructing validated stopwatch configurations.
#[derive(Debug, Clone, Copy)]
pub struct StopwatchConfigBuilder {
    config: StopwatchConfig,
}

impl StopwatchConfigBuilder {
    /// Creates a builder holding the 16x2 defaults.
    pub fn new() -> Self {
        Self {
            config: StopwatchConfig::default(),
        }
    }

    /// Sets the grid size.
    pub fn grid(mut self, columns: u8, rows: u8) -> Self {
        self.config.columns = columns;
        self.config.rows = rows;
        self
    }

    /// Sets where `MM:SS.T` is drawn.
    pub fn time_position(mut self, position: Position) -> Self {
        self.config.time_position = position;
        self
    }

    /// Sets where secPwr is drawn.
    pub fn sec_pwr_position(mut self, position: Position) -> Self {
        self.config.sec_pwr_position = position;
        self
    }

    /// Sets where the progress bar starts.
    pub fn bar_position(mut self, position: Position) -> Self {
        self.config.bar_position = position;
        self
    }

    /// Sets where the start-up glyph preview goes.
    pub fn preview_position(mut self, position: Position) -> Self {
        self.config.preview_position = position;
        self
    }

    /// Sets how many raw overflows make one 100 ms tick.
    pub fn overflows_per_tick(mut self, count: u8) -> Self {
        self.config.overflows_per_tick = count;
        self
    }

    /// Sets the longest progress bar.
    pub fn bar_max_len(mut self, len: u8) -> Self {
        self.config.bar_max_len = len;
        self
    }

    /// Sets the character code used for the bar.
    pub fn filler(mut self, code: u8) -> Self {
        self.config.filler = code;
        self
    }

    /// Sets the stale-cell policy.
    pub fn remnants(mut self, remnants: Remnants) -> Self {
        self.config.remnants = remnants;
        self
    }

    /// Sets the raw period of the tick source.
    pub fn tick_period(mut self, period: Period) -> Self {
        self.config.tick_period = period;
        self
    }

    /// Sets the raw period of the progress source.
    pub fn progress_period(mut self, period: Period) -> Self {
        self.config.progress_period = period;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// * `ZeroOverflowsPerTick` - `overflows_per_tick` is zero
    /// * `BarTooLong` - bar length is zero or exceeds the grid width
    /// * `PositionOutOfBounds` - a field would run past the grid
    /// * `OverlappingRegions` - the clock row and the bar row coincide, or the
    ///   clock and secPwr fields share cells
    pub fn build(self) -> Result<StopwatchConfig, ConfigError> {
        let c = self.config;

        if c.overflows_per_tick == 0 {
            return Err(ConfigError::ZeroOverflowsPerTick);
        }

        if c.bar_max_len == 0 || c.bar_max_len > c.columns {
            return Err(ConfigError::BarTooLong);
        }

        check_fits(c.columns, c.rows, "clock", c.time_position, CLOCK_LEN)?;
        check_fits(c.columns, c.rows, "secPwr", c.sec_pwr_position, SEC_PWR_WIDTH)?;
        check_fits(c.columns, c.rows, "progress bar", c.bar_position, usize::from(c.bar_max_len))?;

        // The two handlers run unordered and share only the display; they
        // must never write to the same row.
        if c.time_position.row == c.bar_position.row || c.sec_pwr_position.row == c.bar_position.row
        {
            return Err(ConfigError::OverlappingRegions);
        }

        let (clock, sec_pwr) = (c.time_position, c.sec_pwr_position);
        if clock.row == sec_pwr.row
            && spans_overlap(clock.col, CLOCK_LEN, sec_pwr.col, SEC_PWR_WIDTH)
        {
            return Err(ConfigError::OverlappingRegions);
        }

        Ok(c)
    }
}

impl Default for StopwatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_fits(
    columns: u8,
    rows: u8,
    field: &'static str,
    position: Position,
    width: usize,
) -> Result<(), ConfigError> {
    let end = usize::from(position.col) + width;
    if position.row >= rows || end > usize::from(columns) {
        return Err(ConfigError::PositionOutOfBounds { field, position });
    }
    Ok(())
}

fn spans_overlap(a: u8, a_width: usize, b: u8, b_width: usize) -> bool {
    let (a, b) = (usize::from(a), usize::from(b));
    a < b + b_width && b < a + a_width
}
