//! Shared test infrastructure for irq-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use irq_stopwatch::{
    DigitArray, DigitDisplay, IndicatorLed, SharedStopwatch, Stopwatch, StopwatchConfig,
    TimeSource, control_code,
};
use palette::Srgb;

// ============================================================================
// Mock Indicator
// ============================================================================

/// Mock indicator LED that records all color changes for testing
pub struct MockIndicator {
    current_color: Srgb,
    color_history: heapless::Vec<Srgb, 32>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0.0, 0.0, 0.0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> Srgb {
        self.current_color
    }

    pub fn color_history(&self) -> &[Srgb] {
        &self.color_history
    }
}

impl IndicatorLed for MockIndicator {
    fn set_color(&mut self, color: Srgb) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// Mock display that records every frame it is asked to show
pub struct MockDisplay {
    frames: heapless::Vec<DigitArray, 16>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
        }
    }

    pub fn frames(&self) -> &[DigitArray] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<DigitArray> {
        self.frames.last().copied()
    }
}

impl DigitDisplay for MockDisplay {
    fn show(&mut self, digits: &DigitArray) {
        let _ = self.frames.push(*digits);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<u32>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(0),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(current.wrapping_add(millis));
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(millis);
    }
}

impl TimeSource for MockTimeSource {
    fn now_millis(&self) -> u32 {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Stopwatch with a recording indicator and the default configuration
pub fn new_stopwatch() -> Stopwatch<MockIndicator> {
    Stopwatch::new(MockIndicator::new())
}

/// Stopwatch with a recording indicator and the given configuration
pub fn stopwatch_with(config: StopwatchConfig) -> Stopwatch<MockIndicator> {
    Stopwatch::with_config(MockIndicator::new(), config)
}

/// Initialized shared stopwatch with a recording indicator
pub fn new_shared() -> SharedStopwatch<MockIndicator> {
    let shared = SharedStopwatch::new();
    shared.init(new_stopwatch());
    shared
}

/// Start the stopwatch and run `ticks` 1 ms ticks
pub fn start_and_run(stopwatch: &mut Stopwatch<MockIndicator>, ticks: u32) {
    stopwatch.on_control_button(control_code::START);
    run_ticks(stopwatch, ticks);
}

/// Run `ticks` 1 ms ticks
pub fn run_ticks(stopwatch: &mut Stopwatch<MockIndicator>, ticks: u32) {
    for _ in 0..ticks {
        stopwatch.on_tick();
    }
}
