//! Periodic source abstraction for platform-agnostic timer interrupts.

/// Overflow period of a periodic source, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Period(u32);

impl Period {
    /// Creates a period from microseconds.
    #[inline]
    pub const fn from_micros(micros: u32) -> Self {
        Period(micros)
    }

    /// Creates a period from milliseconds.
    #[inline]
    pub const fn from_millis(millis: u32) -> Self {
        Period(millis.saturating_mul(1_000))
    }

    /// Creates a period from whole seconds.
    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Period(secs.saturating_mul(1_000_000))
    }

    /// Period in microseconds.
    #[inline]
    pub const fn as_micros(&self) -> u32 {
        self.0
    }

    /// Period in whole milliseconds (truncated).
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0 / 1_000
    }

    /// Overflow rate in whole hertz, or `None` for a zero period.
    ///
    /// 16 ms yields 62 Hz; hardware timers that take a rate instead of a
    /// period lose the fractional part.
    pub const fn as_hertz(&self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(1_000_000 / self.0)
        }
    }
}

/// Raw overflow period feeding the tick accumulator.
pub const TICK_PERIOD: Period = Period::from_millis(16);

/// Raw overflow period feeding the progress animator.
pub const PROGRESS_PERIOD: Period = Period::from_secs(1);

/// Trait for abstracting a periodic hardware timer.
///
/// Each source raises its own interrupt on every overflow. The firmware binds
/// that interrupt to exactly one handler object (a `TickAccumulator` or a
/// `ProgressAnimator`), which acts as the registered zero-argument handler.
pub trait PeriodicSource {
    /// Selects the overflow period (prescaler and reload on real hardware).
    fn configure(&mut self, period: Period);

    /// Enables the overflow interrupt. From this point on the handler runs on
    /// every overflow.
    fn enable(&mut self);
}
