#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`StopwatchState`**: Running/reset flags, the 1 ms sub-tick counter and the `ElapsedTime`
//! - **`Timekeeper`**: The 1 ms periodic task that advances time and applies resets
//! - **`ModeController`**: Turns control button codes into start/stop/reset and drives the indicator
//! - **`DisplayCounter`**: Wrapping 0-15 counter driven by the second button source
//! - **`DigitArray`**: Four display digits projected from the elapsed time
//! - **`Stopwatch`**: Owns all of the above; `SharedStopwatch` makes it interrupt-safe
//! - **`ButtonSource`**: Splits a port interrupt status into debounced per-line codes; `SharedButtonSource` keeps one in a `static`
//! - **`IndicatorLed`** / **`DigitDisplay`**: Traits to implement for your hardware
//! - **`ButtonHandler`** / **`PeriodicTask`**: Handler traits the interrupt handlers call into
//!
//! The indicator uses `Srgb<f32>` (0.0-1.0 range). Only three colors are ever
//! written: green (running), red (stopped) and off (reset requested).

// Must come first so the logging macros are visible to the other modules.
mod fmt;

pub mod button;
pub mod command;
pub mod config;
pub mod controller;
pub mod display;
pub mod indicator;
pub mod state;
pub mod stopwatch;
pub mod time;
pub mod timekeeper;
pub mod types;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub use button::{ButtonHandler, ButtonSource, EdgeDebouncer, SharedButtonSource};
pub use command::{ControlAction, CounterAction};
pub use config::{DEFAULT_DEBOUNCE_MS, ResetPolicy, StopwatchConfig};
pub use controller::{ModeController, handle_counter_action, handle_counter_code};
pub use display::{DigitArray, DigitDisplay};
pub use indicator::{COLOR_GREEN, COLOR_OFF, COLOR_RED, IndicatorColor, IndicatorLed, NoIndicator};
pub use state::{COUNTER_MAX, DisplayCounter, StopwatchState};
pub use stopwatch::{
    ControlButtons, CounterButtons, SharedStopwatch, Stopwatch, TimerTick, run_display_loop,
};
pub use time::{TickClock, TimeSource};
pub use timekeeper::{PeriodicTask, TickOutcome, Timekeeper};
pub use types::{ButtonError, ElapsedTime, TimeError, control_code, counter_code};
