//! Tri-color status indicator.

use palette::Srgb;

/// Indicator color while running.
pub const COLOR_GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// Indicator color while stopped.
pub const COLOR_RED: Srgb = Srgb::new(1.0, 0.0, 0.0);

/// Indicator off, shown after a reset request.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Trait for abstracting the status LED hardware.
///
/// Implement this for your LED (GPIO, PWM, etc.). Called from interrupt
/// context, so implementations must not block. Handle any hardware errors
/// internally - this method cannot fail.
pub trait IndicatorLed {
    /// Sets the LED to the specified RGB color.
    ///
    /// Color components are in the range 0.0-1.0. A plain on/off RGB LED can
    /// treat any component above 0.5 as on.
    fn set_color(&mut self, color: Srgb);
}

/// The three states the indicator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    /// Stopwatch started.
    Green,
    /// Stopwatch stopped.
    Red,
    /// Reset requested.
    Off,
}

impl IndicatorColor {
    /// RGB value written to the LED.
    pub const fn to_srgb(self) -> Srgb {
        match self {
            IndicatorColor::Green => COLOR_GREEN,
            IndicatorColor::Red => COLOR_RED,
            IndicatorColor::Off => COLOR_OFF,
        }
    }
}

/// Indicator that discards every write, for boards without a status LED.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicator;

impl IndicatorLed for NoIndicator {
    fn set_color(&mut self, _color: Srgb) {}
}
