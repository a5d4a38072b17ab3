//! Bounded decimal formatting for the display fields.
//!
//! Each formatter writes into a `heapless::String` sized for the largest
//! value its input type can hold, so formatting never truncates.

use core::fmt::Write;

use heapless::String;

use crate::clock::ClockState;

/// Capacity of a formatted clock, `MM:SS.T`.
pub const CLOCK_LEN: usize = 7;

/// Capacity of a formatted secPwr value (`u16::MAX` has five digits).
pub const SEC_PWR_CAPACITY: usize = 5;

/// Widest secPwr the tick path produces: 59² = 3481.
pub const SEC_PWR_WIDTH: usize = 4;

/// A formatted clock reading.
pub type ClockString = String<CLOCK_LEN>;

/// A formatted secPwr value.
pub type SecPwrString = String<SEC_PWR_CAPACITY>;

/// Formats a clock as `MM:SS.T`.
///
/// Minutes and seconds are zero-padded to two digits, tenths is a single
/// digit. `ClockState` bounds every field, so the result is always exactly
/// [`CLOCK_LEN`] characters.
pub fn format_clock(clock: &ClockState) -> ClockString {
    let mut text = ClockString::new();
    // Fields are bounded to 59/59/9, which fits the capacity exactly.
    let _ = write!(
        text,
        "{:02}:{:02}.{}",
        clock.minutes(),
        clock.seconds(),
        clock.tenths()
    );
    text
}

/// Formats secPwr as an unpadded decimal integer.
pub fn format_sec_pwr(value: u16) -> SecPwrString {
    let mut text = SecPwrString::new();
    // u16 needs at most five digits.
    let _ = write!(text, "{}", value);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded() {
        let clock = ClockState::new(7, 3, 5).unwrap();
        assert_eq!(format_clock(&clock).as_str(), "07:03.5");
    }

    #[test]
    fn two_digit_fields_are_not_padded_further() {
        let clock = ClockState::new(59, 42, 9).unwrap();
        assert_eq!(format_clock(&clock).as_str(), "59:42.9");
    }

    #[test]
    fn zero_clock() {
        assert_eq!(format_clock(&ClockState::zero()).as_str(), "00:00.0");
    }

    #[test]
    fn sec_pwr_is_unpadded() {
        assert_eq!(format_sec_pwr(0).as_str(), "0");
        assert_eq!(format_sec_pwr(81).as_str(), "81");
        assert_eq!(format_sec_pwr(3481).as_str(), "3481");
    }

    #[test]
    fn sec_pwr_capacity_holds_u16_max() {
        assert_eq!(format_sec_pwr(u16::MAX).as_str(), "65535");
    }
}
