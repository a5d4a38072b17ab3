//! Start-up sequencing.
//!
//! Provides [`Stopwatch::start`], which brings the display into a known
//! state, arms both periodic sources in the right order and hands back one
//! handler per interrupt.

use crate::config::StopwatchConfig;
use crate::display::CharDisplay;
use crate::glyph::{GlyphLoader, GlyphTable};
use crate::progress::ProgressAnimator;
use crate::tick::TickAccumulator;
use crate::timer::PeriodicSource;
use crate::types::ConfigError;

/// The two interrupt handlers produced by start-up.
///
/// Move each into the storage of the interrupt it serves. They share nothing
/// but the display.
#[derive(Debug, Clone)]
pub struct Handlers {
    /// Handler for the fast (~16 ms) source.
    pub tick: TickAccumulator,
    /// Handler for the slow (~1 s) source.
    pub progress: ProgressAnimator,
}

/// Entry point for bringing up the stopwatch.
pub struct Stopwatch;

impl Stopwatch {
    /// Runs the start-up sequence.
    ///
    /// 1. Uploads `glyphs` and writes the preview.
    /// 2. Configures the progress source, then the tick source.
    /// 3. Enables the progress source, then the tick source.
    ///
    /// The display is left in character addressing. Global interrupts are
    /// the caller's business: unmask them only after the returned handlers
    /// are installed where the interrupt routines can reach them.
    ///
    /// # Errors
    /// Returns the glyph loader's error if the table or its preview does not
    /// fit. No source is configured or enabled in that case.
    pub fn start<D, A, B, const N: usize>(
        config: &StopwatchConfig,
        display: &mut D,
        glyphs: &GlyphTable<N>,
        tick_source: &mut A,
        progress_source: &mut B,
    ) -> Result<Handlers, ConfigError>
    where
        D: CharDisplay,
        A: PeriodicSource,
        B: PeriodicSource,
    {
        GlyphLoader::load(display, glyphs, config)?;

        progress_source.configure(config.progress_period());
        tick_source.configure(config.tick_period());

        progress_source.enable();
        tick_source.enable();

        Ok(Handlers {
            tick: TickAccumulator::new(config),
            progress: ProgressAnimator::new(config),
        })
    }
}
