//! Periodic timekeeping.
//!
//! [`Timekeeper::tick`] runs once per millisecond from the timer interrupt.
//! Each call performs, in order:
//!
//! 1. Gate on `running` (a frozen tick changes nothing under the default
//!    [`ResetPolicy::WhileRunning`]).
//! 2. Count the millisecond.
//! 3. Cascade sub-ticks into tenths, tenths into seconds, seconds into minutes.
//! 4. Wrap minutes past 9 back to 0 with no carry.
//! 5. Apply a pending reset.
//!
//! The reset check runs after the cascade, so a reset requested on a rollover
//! tick still leaves the stopwatch at `0:00.0`.

use crate::config::ResetPolicy;
use crate::state::StopwatchState;
use crate::types::{MAX_MINUTES, MAX_SECONDS, MAX_SUB_TICKS, MAX_TENTHS};

/// Receives the periodic timer interrupt.
///
/// Invoked once per period with no arguments. Implementations must not block.
pub trait PeriodicTask {
    /// Runs one period's worth of work.
    fn on_tick(&mut self);
}

impl<F: FnMut()> PeriodicTask for F {
    fn on_tick(&mut self) {
        self()
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Stopwatch not running. Nothing changed.
    Frozen,
    /// Elapsed time advanced by one millisecond.
    Advanced,
    /// A pending reset was applied. The stopwatch is stopped at zero.
    Reset,
}

/// The 1 ms periodic task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timekeeper {
    reset_policy: ResetPolicy,
}

impl Timekeeper {
    /// Creates a timekeeper with the given reset policy.
    pub const fn new(reset_policy: ResetPolicy) -> Self {
        Self { reset_policy }
    }

    /// Reset policy in effect.
    pub const fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    /// Advances `state` by one millisecond.
    ///
    /// Must not be re-entered; callers run it with interrupts that touch the
    /// same state masked.
    pub fn tick(&self, state: &mut StopwatchState) -> TickOutcome {
        if !state.running {
            if self.reset_policy == ResetPolicy::Immediate && state.reset_requested {
                state.clear();
                debug!("reset applied while stopped");
                return TickOutcome::Reset;
            }
            return TickOutcome::Frozen;
        }

        state.sub_ticks += 1;
        if state.sub_ticks > MAX_SUB_TICKS {
            state.sub_ticks = 0;
            state.time.tenths += 1;
        }

        if state.time.tenths > MAX_TENTHS {
            state.time.tenths = 0;
            state.time.seconds += 1;
        }

        if state.time.seconds > MAX_SECONDS {
            state.time.seconds = 0;
            state.time.minutes += 1;
            trace!("minute rollover to {}", state.time.minutes);
        }

        if state.time.minutes > MAX_MINUTES {
            state.time.minutes = 0;
            debug!("elapsed time wrapped past 9:59.9");
        }

        if state.reset_requested {
            state.clear();
            debug!("reset applied");
            return TickOutcome::Reset;
        }

        TickOutcome::Advanced
    }
}
