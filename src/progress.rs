//! Progress animator: the handler for the slow (~1 s) periodic source.

use crate::config::StopwatchConfig;
use crate::display::{CharDisplay, Position};
use crate::types::Remnants;

/// Cyclic bar of filler glyphs, one step per call.
///
/// The phase is checked before it is incremented, so a fresh animator draws
/// lengths 1, 2, ..., `max_len`, 1, 2, ... and never draws an empty bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressAnimator {
    phase: u8,
    max_len: u8,
    position: Position,
    filler: u8,
    remnants: Remnants,
}

impl ProgressAnimator {
    /// Creates an animator at phase 0.
    pub fn new(config: &StopwatchConfig) -> Self {
        Self {
            phase: 0,
            max_len: config.bar_max_len(),
            position: config.bar_position(),
            filler: config.filler(),
            remnants: config.remnants(),
        }
    }

    /// Advances the phase and returns the new bar length.
    pub fn advance(&mut self) -> u8 {
        if self.phase >= self.max_len {
            self.phase = 0;
        }
        self.phase += 1;
        self.phase
    }

    /// Handles one overflow of the slow source: advances and redraws the bar.
    ///
    /// With [`Remnants::Keep`] cells beyond the new length are left alone, so
    /// a bar that just wrapped from 5 to 1 still shows the old tail.
    pub fn on_overflow<D: CharDisplay>(&mut self, display: &mut D) -> u8 {
        let len = self.advance();

        display.goto(self.position);
        for _ in 0..len {
            display.put_char(self.filler);
        }
        if self.remnants == Remnants::Erase {
            for _ in len..self.max_len {
                display.put_char(b' ');
            }
        }

        len
    }

    /// Bar length as of the last call, 0 before the first.
    #[inline]
    pub fn phase(&self) -> u8 {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_cycle_one_through_five() {
        let mut animator = ProgressAnimator::new(&StopwatchConfig::default());
        let lengths: [u8; 11] = core::array::from_fn(|_| animator.advance());
        assert_eq!(lengths, [1, 2, 3, 4, 5, 1, 2, 3, 4, 5, 1]);
    }

    #[test]
    fn starts_at_phase_zero() {
        let animator = ProgressAnimator::new(&StopwatchConfig::default());
        assert_eq!(animator.phase(), 0);
    }

    #[test]
    fn custom_length_wraps_after_max() {
        let config = StopwatchConfig::builder().bar_max_len(3).build().unwrap();
        let mut animator = ProgressAnimator::new(&config);
        let lengths: [u8; 7] = core::array::from_fn(|_| animator.advance());
        assert_eq!(lengths, [1, 2, 3, 1, 2, 3, 1]);
    }
}
