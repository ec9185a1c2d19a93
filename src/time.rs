//! Millisecond time base for debouncing.

use core::cell::Cell;
use critical_section::Mutex;

/// Trait for abstracting time sources.
pub trait TimeSource {
    /// Milliseconds since an arbitrary epoch. Wraps on overflow.
    fn now_millis(&self) -> u32;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_millis(&self) -> u32 {
        (**self).now_millis()
    }
}

/// Millisecond uptime counter advanced from the periodic timer interrupt.
///
/// Can live in a `static`: construct with [`TickClock::new`] and call
/// [`TickClock::advance`] once per 1 ms tick. Wraps after ~49.7 days.
pub struct TickClock {
    millis: Mutex<Cell<u32>>,
}

impl TickClock {
    /// Clock at zero.
    pub const fn new() -> Self {
        Self {
            millis: Mutex::new(Cell::new(0)),
        }
    }

    /// Advances the clock by one millisecond.
    pub fn advance(&self) {
        critical_section::with(|cs| {
            let millis = self.millis.borrow(cs);
            millis.set(millis.get().wrapping_add(1));
        });
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for TickClock {
    fn now_millis(&self) -> u32 {
        critical_section::with(|cs| self.millis.borrow(cs).get())
    }
}
