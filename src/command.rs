//! Typed actions decoded from raw button codes.

use crate::types::{control_code, counter_code};

/// Actions issued by the control button source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlAction {
    /// Start counting.
    Start,
    /// Stop counting. Elapsed time is kept.
    Stop,
    /// Request a reset, applied by the next running tick.
    Reset,
    /// Unassigned line. Has no effect.
    Reserved,
}

impl ControlAction {
    /// Decodes a control source status code. Unknown codes return `None`.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            control_code::START => Some(ControlAction::Start),
            control_code::STOP => Some(ControlAction::Stop),
            control_code::RESET => Some(ControlAction::Reset),
            control_code::RESERVED => Some(ControlAction::Reserved),
            _ => None,
        }
    }

    /// Status code that produces this action.
    pub const fn code(self) -> u8 {
        match self {
            ControlAction::Start => control_code::START,
            ControlAction::Stop => control_code::STOP,
            ControlAction::Reset => control_code::RESET,
            ControlAction::Reserved => control_code::RESERVED,
        }
    }
}

/// Actions issued by the counter button source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterAction {
    /// Increment, wrapping 15 to 0.
    Increment,
    /// Decrement, wrapping 0 to 15.
    Decrement,
}

impl CounterAction {
    /// Decodes a counter source status code. Unknown codes return `None`.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            counter_code::INCREMENT => Some(CounterAction::Increment),
            counter_code::DECREMENT => Some(CounterAction::Decrement),
            _ => None,
        }
    }

    /// Status code that produces this action.
    pub const fn code(self) -> u8 {
        match self {
            CounterAction::Increment => counter_code::INCREMENT,
            CounterAction::Decrement => counter_code::DECREMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_decode_to_none() {
        for code in [0x00, 0x01, 0x02, 0x40, 0x80, 0x0C, 0xFF] {
            assert_eq!(ControlAction::from_code(code), None);
        }
        for code in [0x00, 0x10, 0x20, 0x0C] {
            assert_eq!(CounterAction::from_code(code), None);
        }
    }

    #[test]
    fn sources_share_codes_with_different_meanings() {
        assert_eq!(ControlAction::from_code(0x04), Some(ControlAction::Start));
        assert_eq!(CounterAction::from_code(0x04), Some(CounterAction::Decrement));
        assert_eq!(ControlAction::from_code(0x08), Some(ControlAction::Stop));
        assert_eq!(CounterAction::from_code(0x08), Some(CounterAction::Increment));
    }

    #[test]
    fn code_is_inverse_of_from_code() {
        for action in [
            ControlAction::Start,
            ControlAction::Stop,
            ControlAction::Reset,
            ControlAction::Reserved,
        ] {
            assert_eq!(ControlAction::from_code(action.code()), Some(action));
        }
    }
}
