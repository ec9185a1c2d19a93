//! The stopwatch aggregate and its interrupt-safe wrapper.
//!
//! [`Stopwatch`] owns every piece of mutable state: the timekeeping state, the
//! display counter, the mode controller (and through it the indicator) and the
//! timekeeper. It is plain data with `&mut self` entry points.
//!
//! [`SharedStopwatch`] wraps one `Stopwatch` so it can sit in a `static` and
//! be reached from several interrupt handlers and the main loop. Every access
//! runs inside a single critical section, so multi-field updates (a tick
//! cascade, a reset) and multi-field reads (the digit snapshot) are never torn.
//! It hands out one handle per interrupt source:
//!
//! - [`ControlButtons`] - start/stop/reset button source
//! - [`CounterButtons`] - display counter button source
//! - [`TimerTick`] - 1 ms periodic timer

use core::cell::RefCell;
use critical_section::Mutex;

use crate::button::ButtonHandler;
use crate::command::{ControlAction, CounterAction};
use crate::config::StopwatchConfig;
use crate::controller::{ModeController, handle_counter_code};
use crate::display::{DigitArray, DigitDisplay};
use crate::indicator::IndicatorLed;
use crate::state::{DisplayCounter, StopwatchState};
use crate::timekeeper::{PeriodicTask, TickOutcome, Timekeeper};

/// Stopwatch with its indicator, display counter and timekeeper.
#[derive(Debug)]
pub struct Stopwatch<L: IndicatorLed> {
    state: StopwatchState,
    counter: DisplayCounter,
    controller: ModeController<L>,
    timekeeper: Timekeeper,
}

impl<L: IndicatorLed> Stopwatch<L> {
    /// Creates a stopped stopwatch at zero with the default configuration.
    pub fn new(indicator: L) -> Self {
        Self::with_config(indicator, StopwatchConfig::new())
    }

    /// Creates a stopped stopwatch at zero.
    pub fn with_config(indicator: L, config: StopwatchConfig) -> Self {
        Self {
            state: StopwatchState::new(),
            counter: DisplayCounter::new(),
            controller: ModeController::new(indicator),
            timekeeper: Timekeeper::new(config.reset_policy),
        }
    }

    /// Handles a code from the control button source.
    pub fn on_control_button(&mut self, code: u8) -> Option<ControlAction> {
        self.controller.handle_code(code, &mut self.state)
    }

    /// Applies a control action directly.
    pub fn apply(&mut self, action: ControlAction) {
        self.controller.handle_action(action, &mut self.state);
    }

    /// Handles a code from the counter button source.
    pub fn on_counter_button(&mut self, code: u8) -> Option<CounterAction> {
        handle_counter_code(code, &mut self.counter)
    }

    /// Runs one 1 ms tick.
    pub fn on_tick(&mut self) -> TickOutcome {
        self.timekeeper.tick(&mut self.state)
    }

    /// Current display digits.
    pub fn digits(&self) -> DigitArray {
        self.state.digits()
    }

    /// Timekeeping state.
    pub fn state(&self) -> &StopwatchState {
        &self.state
    }

    /// Display counter.
    pub fn counter(&self) -> DisplayCounter {
        self.counter
    }

    /// Returns a reference to the indicator.
    pub fn indicator(&self) -> &L {
        self.controller.indicator()
    }

    /// Timekeeper in use.
    pub fn timekeeper(&self) -> &Timekeeper {
        &self.timekeeper
    }
}

/// Interrupt-safe, `static`-friendly owner of a [`Stopwatch`].
///
/// Empty until [`init`](Self::init) is called. Until then every entry point is
/// a no-op and every snapshot returns `None`.
pub struct SharedStopwatch<L: IndicatorLed> {
    inner: Mutex<RefCell<Option<Stopwatch<L>>>>,
}

impl<L: IndicatorLed> SharedStopwatch<L> {
    /// Creates an empty wrapper.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs the stopwatch, returning the one it replaces, if any.
    pub fn init(&self, stopwatch: Stopwatch<L>) -> Option<Stopwatch<L>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(stopwatch))
    }

    /// True once a stopwatch has been installed.
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Runs `f` on the stopwatch inside a critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut Stopwatch<L>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Handles a code from the control button source.
    pub fn on_control_button(&self, code: u8) -> Option<ControlAction> {
        self.with(|stopwatch| stopwatch.on_control_button(code)).flatten()
    }

    /// Handles a code from the counter button source.
    pub fn on_counter_button(&self, code: u8) -> Option<CounterAction> {
        self.with(|stopwatch| stopwatch.on_counter_button(code)).flatten()
    }

    /// Runs one 1 ms tick.
    pub fn on_tick(&self) -> Option<TickOutcome> {
        self.with(|stopwatch| stopwatch.on_tick())
    }

    /// Consistent snapshot of the display digits.
    pub fn digits(&self) -> Option<DigitArray> {
        self.with(|stopwatch| stopwatch.digits())
    }

    /// Consistent snapshot of the timekeeping state.
    pub fn state(&self) -> Option<StopwatchState> {
        self.with(|stopwatch| *stopwatch.state())
    }

    /// Snapshot of the display counter.
    pub fn counter(&self) -> Option<DisplayCounter> {
        self.with(|stopwatch| stopwatch.counter())
    }

    /// One main loop iteration: snapshot the digits, then show them.
    ///
    /// The display is driven outside the critical section. Returns `false`
    /// (and leaves the display alone) before [`init`](Self::init).
    pub fn refresh<D: DigitDisplay + ?Sized>(&self, display: &mut D) -> bool {
        match self.digits() {
            Some(digits) => {
                display.show(&digits);
                true
            }
            None => false,
        }
    }

    /// Handler for the control button source.
    pub fn control_buttons(&self) -> ControlButtons<'_, L> {
        ControlButtons(self)
    }

    /// Handler for the counter button source.
    pub fn counter_buttons(&self) -> CounterButtons<'_, L> {
        CounterButtons(self)
    }

    /// Handler for the periodic timer.
    pub fn timer_tick(&self) -> TimerTick<'_, L> {
        TimerTick(self)
    }
}

impl<L: IndicatorLed> Default for SharedStopwatch<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Control button handler borrowing a [`SharedStopwatch`].
pub struct ControlButtons<'a, L: IndicatorLed>(&'a SharedStopwatch<L>);

/// Counter button handler borrowing a [`SharedStopwatch`].
pub struct CounterButtons<'a, L: IndicatorLed>(&'a SharedStopwatch<L>);

/// Periodic timer handler borrowing a [`SharedStopwatch`].
pub struct TimerTick<'a, L: IndicatorLed>(&'a SharedStopwatch<L>);

impl<L: IndicatorLed> Clone for ControlButtons<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: IndicatorLed> Copy for ControlButtons<'_, L> {}

impl<L: IndicatorLed> Clone for CounterButtons<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: IndicatorLed> Copy for CounterButtons<'_, L> {}

impl<L: IndicatorLed> Clone for TimerTick<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: IndicatorLed> Copy for TimerTick<'_, L> {}

impl<L: IndicatorLed> ButtonHandler for ControlButtons<'_, L> {
    fn on_button(&mut self, code: u8) {
        self.0.on_control_button(code);
    }
}

impl<L: IndicatorLed> ButtonHandler for CounterButtons<'_, L> {
    fn on_button(&mut self, code: u8) {
        self.0.on_counter_button(code);
    }
}

impl<L: IndicatorLed> PeriodicTask for TimerTick<'_, L> {
    fn on_tick(&mut self) {
        self.0.on_tick();
    }
}

/// Runs the main loop forever: format the current time and show it.
pub fn run_display_loop<L: IndicatorLed, D: DigitDisplay>(
    stopwatch: &SharedStopwatch<L>,
    mut display: D,
) -> ! {
    loop {
        stopwatch.refresh(&mut display);
    }
}
