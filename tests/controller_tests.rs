//! Integration tests for mode control and the display counter

mod common;
use common::*;

use irq_stopwatch::{
    COLOR_GREEN, COLOR_OFF, COLOR_RED, ControlAction, CounterAction, DisplayCounter,
    ModeController, StopwatchState, control_code, counter_code, handle_counter_code,
};

#[test]
fn start_stop_reset_drive_indicator_colors_in_order() {
    let mut controller = ModeController::new(MockIndicator::new());
    let mut state = StopwatchState::new();

    controller.handle_code(control_code::START, &mut state);
    controller.handle_code(control_code::STOP, &mut state);
    controller.handle_code(control_code::RESET, &mut state);

    // Construction turns the indicator off first
    assert_eq!(
        controller.indicator().color_history(),
        &[COLOR_OFF, COLOR_GREEN, COLOR_RED, COLOR_OFF]
    );
}

#[test]
fn handle_code_returns_decoded_action() {
    let mut controller = ModeController::new(MockIndicator::new());
    let mut state = StopwatchState::new();

    assert_eq!(
        controller.handle_code(control_code::START, &mut state),
        Some(ControlAction::Start)
    );
    assert_eq!(controller.handle_code(0x01, &mut state), None);
}

#[test]
fn unknown_control_codes_are_silent_no_ops() {
    let mut controller = ModeController::new(MockIndicator::new());
    let mut state = StopwatchState::new();

    for code in [0x00, 0x01, 0x02, 0x0C, 0x40, 0x80, 0xFF, control_code::RESERVED] {
        controller.handle_code(code, &mut state);
    }

    assert_eq!(state, StopwatchState::new());
    assert_eq!(controller.indicator().color_history(), &[COLOR_OFF]);
}

#[test]
fn repeated_start_keeps_running() {
    let mut controller = ModeController::new(MockIndicator::new());
    let mut state = StopwatchState::new();

    controller.handle_action(ControlAction::Start, &mut state);
    controller.handle_action(ControlAction::Start, &mut state);

    assert!(state.is_running());
    assert_eq!(controller.indicator().get_last_color(), COLOR_GREEN);
}

#[test]
fn stop_clears_running_but_keeps_pending_reset() {
    let mut controller = ModeController::new(MockIndicator::new());
    let mut state = StopwatchState::new();

    controller.handle_action(ControlAction::Start, &mut state);
    controller.handle_action(ControlAction::Reset, &mut state);
    controller.handle_action(ControlAction::Stop, &mut state);

    assert!(!state.is_running());
    assert!(state.is_reset_requested());
}

#[test]
fn sixteen_decrements_from_zero_return_to_zero() {
    let mut counter = DisplayCounter::new();

    counter.decrement();
    assert_eq!(counter.value(), 15);

    for _ in 1..16 {
        counter.decrement();
    }
    assert_eq!(counter.value(), 0);
}

#[test]
fn increment_at_fifteen_wraps_to_zero() {
    let mut counter = DisplayCounter::with_value(15).unwrap();
    assert_eq!(
        handle_counter_code(counter_code::INCREMENT, &mut counter),
        Some(CounterAction::Increment)
    );
    assert_eq!(counter.value(), 0);
}

#[test]
fn counter_codes_walk_full_range() {
    let mut counter = DisplayCounter::new();

    for expected in 1..=15 {
        handle_counter_code(counter_code::INCREMENT, &mut counter);
        assert_eq!(counter.value(), expected);
    }

    for expected in (0..15).rev() {
        handle_counter_code(counter_code::DECREMENT, &mut counter);
        assert_eq!(counter.value(), expected);
    }
}

#[test]
fn unknown_counter_codes_are_ignored() {
    let mut counter = DisplayCounter::with_value(7).unwrap();

    for code in [0x00, 0x0C, 0x10, 0x20, 0xFF] {
        assert_eq!(handle_counter_code(code, &mut counter), None);
    }
    assert_eq!(counter.value(), 7);
}

#[test]
fn counter_buttons_do_not_touch_stopwatch_time() {
    let mut stopwatch = new_stopwatch();
    start_and_run(&mut stopwatch, 321);
    let before = *stopwatch.state();

    stopwatch.on_counter_button(counter_code::INCREMENT);
    stopwatch.on_counter_button(counter_code::INCREMENT);
    stopwatch.on_counter_button(counter_code::DECREMENT);

    assert_eq!(*stopwatch.state(), before);
    assert_eq!(stopwatch.counter().value(), 1);
}

#[test]
fn control_codes_on_counter_source_mean_counter_actions() {
    let mut stopwatch = new_stopwatch();

    // 0x04 is START on the control source but DECREMENT on the counter source
    stopwatch.on_counter_button(0x04);

    assert!(!stopwatch.state().is_running());
    assert_eq!(stopwatch.counter().value(), 15);
}
