//! Stopwatch clock value with tenths/seconds/minutes carry rules.

/// Elapsed time as shown on the display, `MM:SS.T`.
///
/// Every field stays within its bound: tenths `0..=9`, seconds `0..=59`,
/// minutes `0..=59`. Minutes wrap to zero after 59 without carrying further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    tenths: u8,
    seconds: u8,
    minutes: u8,
}

/// What happened to the seconds field during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SecondsCarry {
    /// Tenths advanced without carrying.
    Unchanged,
    /// Seconds was incremented. Holds the value *before* the 60 rollover is
    /// applied, so it ranges over `1..=60`.
    Incremented(u8),
}

impl ClockState {
    /// Largest tenths value.
    pub const MAX_TENTHS: u8 = 9;
    /// Largest seconds value.
    pub const MAX_SECONDS: u8 = 59;
    /// Largest minutes value.
    pub const MAX_MINUTES: u8 = 59;

    /// A clock reading 00:00.0.
    pub const fn zero() -> Self {
        Self {
            tenths: 0,
            seconds: 0,
            minutes: 0,
        }
    }

    /// Creates a clock at the given reading, or `None` if a field is out of range.
    pub const fn new(minutes: u8, seconds: u8, tenths: u8) -> Option<Self> {
        if tenths > Self::MAX_TENTHS || seconds > Self::MAX_SECONDS || minutes > Self::MAX_MINUTES
        {
            return None;
        }
        Some(Self {
            tenths,
            seconds,
            minutes,
        })
    }

    /// Tenths of a second, `0..=9`.
    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.tenths
    }

    /// Seconds, `0..=59`.
    #[inline]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Minutes, `0..=59`.
    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Total tenths since 00:00.0, within one hour.
    pub const fn total_tenths(&self) -> u16 {
        (self.minutes as u16 * 60 + self.seconds as u16) * 10 + self.tenths as u16
    }

    /// Advances by one tenth of a second.
    ///
    /// Returns the carry into the seconds field, sampled after the increment
    /// but before the seconds rollover.
    pub(crate) fn advance(&mut self) -> SecondsCarry {
        self.tenths += 1;

        let mut carry = SecondsCarry::Unchanged;
        if self.tenths > Self::MAX_TENTHS {
            self.tenths = 0;
            self.seconds += 1;
            carry = SecondsCarry::Incremented(self.seconds);
        }

        if self.seconds > Self::MAX_SECONDS {
            self.seconds = 0;
            self.minutes += 1;
        }

        if self.minutes > Self::MAX_MINUTES {
            self.minutes = 0;
        }

        carry
    }

    /// Advances by one tenth of a second, ignoring the seconds carry.
    pub fn tick(&mut self) {
        self.advance();
    }
}
