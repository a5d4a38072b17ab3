//! Derived "secPwr" value: the square of the seconds field.

/// Tracks seconds squared, reset to zero at the seconds zero point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecondsSquared {
    value: u16,
}

impl SecondsSquared {
    /// Creates a calculator holding zero.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Recomputes from a just-incremented seconds value.
    ///
    /// `seconds` is sampled before the 60 rollover, so it ranges over `1..=60`
    /// on the tick path. Both zero points map to 0. The `0` arm cannot fire
    /// from the tick path and is kept for callers that pass an already
    /// rolled-over value.
    pub fn update(&mut self, seconds: u8) -> u16 {
        self.value = match seconds {
            0 => 0,
            60 => 0,
            s => u16::from(s) * u16::from(s),
        };
        self.value
    }

    /// The value as of the last update.
    #[inline]
    pub const fn value(&self) -> u16 {
        self.value
    }
}
