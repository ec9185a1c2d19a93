//! Stopwatch configuration.
//!
//! [`StopwatchConfig`] is a small `Copy` value with `const` builders, so a
//! board can define its configuration as a `const` and share it between the
//! stopwatch and the button sources.

/// When a pending reset is applied by the timekeeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetPolicy {
    /// Apply a pending reset only on a running tick.
    ///
    /// Pressing reset while stopped has no visible effect until the stopwatch
    /// is started again; the first running tick then zeroes everything and
    /// stops the stopwatch.
    #[default]
    WhileRunning,

    /// Apply a pending reset on the next tick, running or not.
    Immediate,
}

/// Default debounce window for button lines, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 20;

/// Runtime configuration for the stopwatch and its button sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchConfig {
    /// Reset application policy.
    pub reset_policy: ResetPolicy,

    /// Minimum time between two accepted edges on the same button line.
    pub debounce_ms: u32,
}

impl StopwatchConfig {
    /// Default configuration: [`ResetPolicy::WhileRunning`], 20 ms debounce.
    pub const fn new() -> Self {
        Self {
            reset_policy: ResetPolicy::WhileRunning,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Sets the reset policy.
    pub const fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Sets the debounce window. Zero disables debouncing.
    pub const fn debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
