//! Tick accumulator: the handler for the fast (~16 ms) periodic source.
//!
//! Raw overflows are counted until they add up to one 100 ms tick. Each tick
//! advances the [`ClockState`], recomputes secPwr when seconds moves, and
//! redraws row 0 through the [`DisplayRenderer`].

use crate::clock::{ClockState, SecondsCarry};
use crate::config::StopwatchConfig;
use crate::display::CharDisplay;
use crate::render::DisplayRenderer;
use crate::sec_pwr::SecondsSquared;

/// Result of one raw overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Overflow counted; no 100 ms boundary yet. Nothing was drawn.
    Idle,

    /// A 100 ms tick fired. Holds the clock as rendered.
    Advanced(ClockState),
}

/// Owns the overflow counter, the clock and secPwr.
///
/// The handler is not re-entrant. Call [`on_overflow`](Self::on_overflow)
/// from exactly one interrupt, once per overflow.
#[derive(Debug, Clone)]
pub struct TickAccumulator {
    overflows: u8,
    overflows_per_tick: u8,
    clock: ClockState,
    sec_pwr: SecondsSquared,
    renderer: DisplayRenderer,
}

impl TickAccumulator {
    /// Creates an accumulator at 00:00.0.
    pub fn new(config: &StopwatchConfig) -> Self {
        Self::starting_at(config, ClockState::zero())
    }

    /// Creates an accumulator at an arbitrary reading, with secPwr at zero.
    pub fn starting_at(config: &StopwatchConfig, clock: ClockState) -> Self {
        Self {
            overflows: 0,
            overflows_per_tick: config.overflows_per_tick(),
            clock,
            sec_pwr: SecondsSquared::new(),
            renderer: DisplayRenderer::new(config),
        }
    }

    /// Handles one raw overflow of the fast source.
    pub fn on_overflow<D: CharDisplay>(&mut self, display: &mut D) -> TickOutcome {
        self.overflows += 1;
        if self.overflows < self.overflows_per_tick {
            return TickOutcome::Idle;
        }
        self.overflows = 0;

        if let SecondsCarry::Incremented(seconds) = self.clock.advance() {
            self.sec_pwr.update(seconds);
        }

        self.renderer.render(display, &self.clock, self.sec_pwr.value());
        TickOutcome::Advanced(self.clock)
    }

    /// Current clock reading.
    #[inline]
    pub fn clock(&self) -> ClockState {
        self.clock
    }

    /// secPwr as last rendered.
    #[inline]
    pub fn sec_pwr(&self) -> u16 {
        self.sec_pwr.value()
    }

    /// Overflows counted since the last 100 ms boundary.
    #[inline]
    pub fn overflows(&self) -> u8 {
        self.overflows
    }
}
