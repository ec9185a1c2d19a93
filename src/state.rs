//! Mutable stopwatch state and the auxiliary display counter.

use crate::display::DigitArray;
use crate::types::{ElapsedTime, MAX_SUB_TICKS, TimeError};

/// Timekeeping state shared by the mode controller and the timekeeper.
///
/// Mutated only through [`ModeController`](crate::ModeController) and
/// [`Timekeeper`](crate::Timekeeper), both of which take it by exclusive
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchState {
    pub(crate) running: bool,
    pub(crate) reset_requested: bool,
    pub(crate) sub_ticks: u8,
    pub(crate) time: ElapsedTime,
}

impl StopwatchState {
    /// Stopped at `0:00.0` with no reset pending.
    pub const fn new() -> Self {
        Self {
            running: false,
            reset_requested: false,
            sub_ticks: 0,
            time: ElapsedTime::ZERO,
        }
    }

    /// Stopped state positioned at `time`, `sub_ticks` milliseconds into the
    /// current tenth.
    pub const fn from_parts(time: ElapsedTime, sub_ticks: u8) -> Result<Self, TimeError> {
        if sub_ticks > MAX_SUB_TICKS {
            return Err(TimeError::SubTicksOutOfRange(sub_ticks));
        }

        Ok(Self {
            running: false,
            reset_requested: false,
            sub_ticks,
            time,
        })
    }

    /// True while elapsed time advances on each tick.
    #[inline]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// True while a reset is waiting for the timekeeper.
    #[inline]
    pub const fn is_reset_requested(&self) -> bool {
        self.reset_requested
    }

    /// Milliseconds counted within the current 100 ms window, 0..=99.
    #[inline]
    pub const fn sub_ticks(&self) -> u8 {
        self.sub_ticks
    }

    /// Elapsed time.
    #[inline]
    pub const fn time(&self) -> ElapsedTime {
        self.time
    }

    /// Formats the elapsed time as display digits.
    #[inline]
    pub fn digits(&self) -> DigitArray {
        DigitArray::from_time(&self.time)
    }

    pub(crate) fn clear(&mut self) {
        self.reset_requested = false;
        self.running = false;
        self.sub_ticks = 0;
        self.time = ElapsedTime::ZERO;
    }
}

/// Largest value held by [`DisplayCounter`].
pub const COUNTER_MAX: u8 = 15;

/// Four-bit counter driven by the second button source.
///
/// Wraps at both ends: incrementing 15 gives 0 and decrementing 0 gives 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayCounter {
    value: u8,
}

impl DisplayCounter {
    /// Counter at zero.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Counter at `value`.
    ///
    /// # Errors
    /// * `CounterOutOfRange` - `value` exceeds [`COUNTER_MAX`]
    pub const fn with_value(value: u8) -> Result<Self, TimeError> {
        if value > COUNTER_MAX {
            return Err(TimeError::CounterOutOfRange(value));
        }

        Ok(Self { value })
    }

    /// Current value, 0..=15.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Increments, wrapping 15 to 0.
    pub fn increment(&mut self) {
        self.value = if self.value >= COUNTER_MAX { 0 } else { self.value + 1 };
    }

    /// Decrements, wrapping 0 to 15.
    pub fn decrement(&mut self) {
        self.value = if self.value == 0 { COUNTER_MAX } else { self.value - 1 };
    }

    /// Value as a mask for four discrete LEDs, bit 0 on LED0.
    #[inline]
    pub const fn led_pattern(&self) -> u8 {
        self.value & 0x0F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_rejects_sub_ticks_past_window() {
        assert_eq!(
            StopwatchState::from_parts(ElapsedTime::ZERO, 100),
            Err(TimeError::SubTicksOutOfRange(100))
        );
        assert!(StopwatchState::from_parts(ElapsedTime::ZERO, 99).is_ok());
    }

    #[test]
    fn clear_zeroes_everything_and_stops() {
        let mut state =
            StopwatchState::from_parts(ElapsedTime::new(4, 12, 3).unwrap(), 42).unwrap();
        state.running = true;
        state.reset_requested = true;

        state.clear();

        assert_eq!(state, StopwatchState::new());
    }

    #[test]
    fn with_value_rejects_out_of_range() {
        assert_eq!(
            DisplayCounter::with_value(16),
            Err(TimeError::CounterOutOfRange(16))
        );
        assert_eq!(DisplayCounter::with_value(15).map(|c| c.value()), Ok(15));
    }

    #[test]
    fn led_pattern_matches_value() {
        let counter = DisplayCounter::with_value(0b1010).unwrap();
        assert_eq!(counter.led_pattern(), 0b1010);
    }
}
