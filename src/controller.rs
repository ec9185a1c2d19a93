//! Button-driven mode control.
//!
//! Provides [`ModeController`], which interprets control button codes against
//! the [`StopwatchState`] and drives the status indicator, and
//! [`handle_counter_code`] for the display counter buttons.
//!
//! Both run in interrupt context. Neither blocks, and unknown codes are
//! ignored.

use crate::command::{ControlAction, CounterAction};
use crate::indicator::{COLOR_OFF, IndicatorColor, IndicatorLed};
use crate::state::{DisplayCounter, StopwatchState};

/// Interprets control button codes.
///
/// Owns the status indicator; start shows green, stop shows red and a reset
/// request turns it off.
#[derive(Debug)]
pub struct ModeController<L: IndicatorLed> {
    indicator: L,
}

impl<L: IndicatorLed> ModeController<L> {
    /// Creates a controller that drives `indicator`, turning it off.
    pub fn new(mut indicator: L) -> Self {
        indicator.set_color(COLOR_OFF);
        Self { indicator }
    }

    /// Handles a raw control source status code.
    ///
    /// Returns the decoded action, or `None` if the code is not recognized
    /// (in which case nothing changes).
    pub fn handle_code(&mut self, code: u8, state: &mut StopwatchState) -> Option<ControlAction> {
        let Some(action) = ControlAction::from_code(code) else {
            trace!("ignoring control code {=u8:#x}", code);
            return None;
        };

        self.handle_action(action, state);
        Some(action)
    }

    /// Applies an already decoded control action.
    pub fn handle_action(&mut self, action: ControlAction, state: &mut StopwatchState) {
        debug!("control action {}", action);

        match action {
            ControlAction::Start => {
                self.indicator.set_color(IndicatorColor::Green.to_srgb());
                state.running = true;
            }
            ControlAction::Stop => {
                self.indicator.set_color(IndicatorColor::Red.to_srgb());
                state.running = false;
            }
            ControlAction::Reset => {
                self.indicator.set_color(IndicatorColor::Off.to_srgb());
                state.reset_requested = true;
            }
            ControlAction::Reserved => {}
        }
    }

    /// Returns a reference to the indicator.
    pub fn indicator(&self) -> &L {
        &self.indicator
    }
}

/// Handles a raw counter source status code.
///
/// Returns the decoded action, or `None` if the code is not recognized.
pub fn handle_counter_code(code: u8, counter: &mut DisplayCounter) -> Option<CounterAction> {
    let Some(action) = CounterAction::from_code(code) else {
        trace!("ignoring counter code {=u8:#x}", code);
        return None;
    };

    handle_counter_action(action, counter);
    Some(action)
}

/// Applies an already decoded counter action.
pub fn handle_counter_action(action: CounterAction, counter: &mut DisplayCounter) {
    match action {
        CounterAction::Increment => counter.increment(),
        CounterAction::Decrement => counter.decrement(),
    }
    trace!("display counter now {=u8}", counter.value());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::{COLOR_GREEN, COLOR_RED};
    use crate::types::control_code;
    use palette::Srgb;

    struct LastColor(Option<Srgb>);

    impl IndicatorLed for LastColor {
        fn set_color(&mut self, color: Srgb) {
            self.0 = Some(color);
        }
    }

    #[test]
    fn new_turns_indicator_off() {
        let controller = ModeController::new(LastColor(Some(COLOR_GREEN)));
        assert_eq!(controller.indicator().0, Some(COLOR_OFF));
    }

    #[test]
    fn start_stop_reset_set_flags_and_colors() {
        let mut controller = ModeController::new(LastColor(None));
        let mut state = StopwatchState::new();

        controller.handle_code(control_code::START, &mut state);
        assert!(state.is_running());
        assert_eq!(controller.indicator().0, Some(COLOR_GREEN));

        controller.handle_code(control_code::STOP, &mut state);
        assert!(!state.is_running());
        assert_eq!(controller.indicator().0, Some(COLOR_RED));

        controller.handle_code(control_code::RESET, &mut state);
        assert!(state.is_reset_requested());
        assert_eq!(controller.indicator().0, Some(COLOR_OFF));
    }

    #[test]
    fn reserved_and_unknown_codes_touch_nothing() {
        let mut controller = ModeController::new(LastColor(None));
        let mut state = StopwatchState::new();

        assert_eq!(
            controller.handle_code(control_code::RESERVED, &mut state),
            Some(ControlAction::Reserved)
        );
        assert_eq!(controller.handle_code(0x40, &mut state), None);

        assert_eq!(state, StopwatchState::new());
        assert_eq!(controller.indicator().0, Some(COLOR_OFF));
    }

    #[test]
    fn reset_request_does_not_touch_counters() {
        let mut controller = ModeController::new(LastColor(None));
        let mut state = StopwatchState::new();
        state.sub_ticks = 17;

        controller.handle_code(control_code::RESET, &mut state);

        assert_eq!(state.sub_ticks(), 17);
        assert!(!state.is_running());
    }
}
