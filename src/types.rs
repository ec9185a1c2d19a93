//! Core types: elapsed time, button codes and construction errors.

use crate::state::COUNTER_MAX;

/// Maximum value of the tenths-of-a-second digit.
pub const MAX_TENTHS: u8 = 9;

/// Maximum value of the seconds field.
pub const MAX_SECONDS: u8 = 59;

/// Maximum value of the minutes digit. The stopwatch wraps to zero past this.
pub const MAX_MINUTES: u8 = 9;

/// Maximum value of the 1 ms sub-tick counter within a 100 ms window.
pub const MAX_SUB_TICKS: u8 = 99;

/// Time shown by the stopwatch.
///
/// All fields are bounded: `tenths` in 0..=9, `seconds` in 0..=59 and
/// `minutes` in 0..=9. The only way to build one is through [`ElapsedTime::new`]
/// (validated) or [`ElapsedTime::ZERO`], so out-of-range values cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTime {
    pub(crate) tenths: u8,
    pub(crate) seconds: u8,
    pub(crate) minutes: u8,
}

impl ElapsedTime {
    /// `0:00.0`
    pub const ZERO: Self = Self {
        tenths: 0,
        seconds: 0,
        minutes: 0,
    };

    /// Creates an elapsed time, validating every component.
    pub const fn new(minutes: u8, seconds: u8, tenths: u8) -> Result<Self, TimeError> {
        if tenths > MAX_TENTHS {
            return Err(TimeError::TenthsOutOfRange(tenths));
        }
        if seconds > MAX_SECONDS {
            return Err(TimeError::SecondsOutOfRange(seconds));
        }
        if minutes > MAX_MINUTES {
            return Err(TimeError::MinutesOutOfRange(minutes));
        }

        Ok(Self {
            tenths,
            seconds,
            minutes,
        })
    }

    /// Tenths of a second (the hundreds-of-milliseconds digit).
    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.tenths
    }

    /// Seconds, 0..=59.
    #[inline]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Minutes, 0..=9.
    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Total elapsed time in tenths of a second.
    pub const fn as_tenths(&self) -> u32 {
        (self.minutes as u32 * 60 + self.seconds as u32) * 10 + self.tenths as u32
    }
}

/// Raw status codes reported by the control button source (source A).
pub mod control_code {
    /// Start the stopwatch.
    pub const START: u8 = 0x04;
    /// Stop the stopwatch.
    pub const STOP: u8 = 0x08;
    /// Request a reset on the next running tick.
    pub const RESET: u8 = 0x10;
    /// Wired but unassigned.
    pub const RESERVED: u8 = 0x20;
}

/// Raw status codes reported by the counter button source (source B).
pub mod counter_code {
    /// Increment the display counter.
    pub const INCREMENT: u8 = 0x08;
    /// Decrement the display counter.
    pub const DECREMENT: u8 = 0x04;
}

/// Errors from validated time and state constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Sub-tick counter above 99.
    SubTicksOutOfRange(u8),

    /// Tenths digit above 9.
    TenthsOutOfRange(u8),

    /// Seconds above 59.
    SecondsOutOfRange(u8),

    /// Minutes above 9.
    MinutesOutOfRange(u8),

    /// Display counter above 15.
    CounterOutOfRange(u8),
}

impl core::fmt::Display for TimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeError::SubTicksOutOfRange(v) => {
                write!(f, "sub-tick counter {} out of range (max {})", v, MAX_SUB_TICKS)
            }
            TimeError::TenthsOutOfRange(v) => {
                write!(f, "tenths {} out of range (max {})", v, MAX_TENTHS)
            }
            TimeError::SecondsOutOfRange(v) => {
                write!(f, "seconds {} out of range (max {})", v, MAX_SECONDS)
            }
            TimeError::MinutesOutOfRange(v) => {
                write!(f, "minutes {} out of range (max {})", v, MAX_MINUTES)
            }
            TimeError::CounterOutOfRange(v) => {
                write!(f, "display counter {} out of range (max {})", v, COUNTER_MAX)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}

/// Button line configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonError {
    /// Line mask has no bits set.
    EmptyMask,

    /// Line mask overlaps a line that is already registered.
    DuplicateMask(u8),

    /// Button source capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for ButtonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ButtonError::EmptyMask => write!(f, "button line mask must have at least one bit set"),
            ButtonError::DuplicateMask(mask) => {
                write!(f, "button line mask {:#04x} overlaps a registered line", mask)
            }
            ButtonError::CapacityExceeded => write!(f, "button source capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ButtonError {}
