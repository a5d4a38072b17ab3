//! Renders the clock and secPwr fields onto the character grid.

use crate::clock::ClockState;
use crate::config::StopwatchConfig;
use crate::display::{CharDisplay, Position};
use crate::format::{format_clock, format_sec_pwr, SEC_PWR_WIDTH};
use crate::types::Remnants;

/// Writes the tick handler's fields at fixed positions.
///
/// Every call rewrites both fields in full; there is no partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRenderer {
    time_position: Position,
    sec_pwr_position: Position,
    remnants: Remnants,
}

impl DisplayRenderer {
    /// Creates a renderer using the positions from `config`.
    pub fn new(config: &StopwatchConfig) -> Self {
        Self {
            time_position: config.time_position(),
            sec_pwr_position: config.sec_pwr_position(),
            remnants: config.remnants(),
        }
    }

    /// Writes `MM:SS.T` and then secPwr.
    pub fn render<D: CharDisplay>(&self, display: &mut D, clock: &ClockState, sec_pwr: u16) {
        display.goto(self.time_position);
        display.put_str(&format_clock(clock));

        let text = format_sec_pwr(sec_pwr);
        display.goto(self.sec_pwr_position);
        display.put_str(&text);

        if self.remnants == Remnants::Erase {
            for _ in text.len()..SEC_PWR_WIDTH {
                display.put_char(b' ');
            }
        }
    }
}
