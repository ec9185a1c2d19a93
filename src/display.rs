//! Digit formatting for a four-digit display.

use crate::types::ElapsedTime;

/// Index of the tenths digit in a [`DigitArray`].
pub const TENTHS_DIGIT: usize = 0;
/// Index of the seconds ones digit.
pub const SECONDS_ONES_DIGIT: usize = 1;
/// Index of the seconds tens digit.
pub const SECONDS_TENS_DIGIT: usize = 2;
/// Index of the minutes digit.
pub const MINUTES_DIGIT: usize = 3;

/// Four display digits, least significant first:
/// `[tenths, seconds % 10, seconds / 10, minutes]`.
///
/// Every element is in 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitArray([u8; 4]);

impl DigitArray {
    /// Projects an elapsed time onto display digits.
    pub const fn from_time(time: &ElapsedTime) -> Self {
        Self([
            time.tenths(),
            time.seconds() % 10,
            time.seconds() / 10,
            time.minutes(),
        ])
    }

    /// The raw digits.
    #[inline]
    pub const fn digits(&self) -> [u8; 4] {
        self.0
    }

    /// Digits as a slice, in display order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<ElapsedTime> for DigitArray {
    fn from(time: ElapsedTime) -> Self {
        Self::from_time(&time)
    }
}

impl core::ops::Index<usize> for DigitArray {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl core::fmt::Display for DigitArray {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}:{}{}.{}",
            self.0[MINUTES_DIGIT],
            self.0[SECONDS_TENS_DIGIT],
            self.0[SECONDS_ONES_DIGIT],
            self.0[TENTHS_DIGIT]
        )
    }
}

/// Trait for abstracting the display hardware.
///
/// Called from the main loop with the latest digits. Implementations typically
/// multiplex a seven-segment display; rendering is entirely up to them.
pub trait DigitDisplay {
    /// Shows the given digits.
    fn show(&mut self, digits: &DigitArray);
}

impl<D: DigitDisplay + ?Sized> DigitDisplay for &mut D {
    fn show(&mut self, digits: &DigitArray) {
        (**self).show(digits)
    }
}
