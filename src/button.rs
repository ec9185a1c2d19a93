//! Edge-interrupt button sources.
//!
//! A [`ButtonSource`] sits between a GPIO port interrupt and a
//! [`ButtonHandler`]. The interrupt service routine passes in the port's
//! masked interrupt status; the source splits it into registered lines,
//! debounces each line independently and forwards accepted presses to the
//! handler as status codes (the line's mask).
//!
//! Debounce state lives in the source, so a source must outlive the
//! interrupts it serves. [`SharedButtonSource`] holds one in a `static`
//! for interrupt handlers to reach.

use core::cell::RefCell;
use critical_section::Mutex;
use heapless::Vec;

use crate::time::TimeSource;
use crate::types::ButtonError;

/// Receives button status codes from interrupt context.
///
/// Implementations must return quickly and never block.
pub trait ButtonHandler {
    /// Handles a press on the line identified by `code`.
    fn on_button(&mut self, code: u8);
}

impl<F: FnMut(u8)> ButtonHandler for F {
    fn on_button(&mut self, code: u8) {
        self(code)
    }
}

/// Edge debouncer with a fixed lockout window.
///
/// The first edge is always accepted. Later edges are accepted only once
/// `window_ms` has passed since the last accepted one; bounces in between are
/// dropped. Wrapping time is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDebouncer {
    last_accepted: Option<u32>,
    window_ms: u32,
}

impl EdgeDebouncer {
    /// Create a new debouncer
    ///
    /// # Arguments
    /// * `window_ms` - Minimum time between accepted edges in milliseconds
    pub const fn new(window_ms: u32) -> Self {
        Self {
            last_accepted: None,
            window_ms,
        }
    }

    /// Check whether an edge at `now_ms` is a real press
    ///
    /// # Returns
    /// `true` if the edge falls outside the lockout window of the previous
    /// accepted edge
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_accepted
            && now_ms.wrapping_sub(last) < self.window_ms
        {
            return false;
        }

        self.last_accepted = Some(now_ms);
        true
    }
}

#[derive(Debug, Clone, Copy)]
struct ButtonLine {
    mask: u8,
    debouncer: EdgeDebouncer,
}

/// One edge-interrupt source with up to `N` button lines.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `H` - Handler receiving accepted codes
/// * `T` - Time source used for debouncing
/// * `N` - Maximum number of lines
pub struct ButtonSource<'t, H: ButtonHandler, T: TimeSource, const N: usize> {
    handler: H,
    time_source: &'t T,
    lines: Vec<ButtonLine, N>,
    debounce_ms: u32,
}

impl<'t, H: ButtonHandler, T: TimeSource, const N: usize> ButtonSource<'t, H, T, N> {
    /// Creates a source with no lines.
    pub fn new(handler: H, time_source: &'t T, debounce_ms: u32) -> Self {
        Self {
            handler,
            time_source,
            lines: Vec::new(),
            debounce_ms,
        }
    }

    /// Creates a source with the given line masks.
    pub fn with_lines(
        handler: H,
        time_source: &'t T,
        debounce_ms: u32,
        masks: &[u8],
    ) -> Result<Self, ButtonError> {
        let mut source = Self::new(handler, time_source, debounce_ms);
        for &mask in masks {
            source.add_line(mask)?;
        }
        Ok(source)
    }

    /// Registers a line. The mask is also the code passed to the handler.
    ///
    /// # Errors
    /// * `EmptyMask` - `mask` is zero
    /// * `DuplicateMask` - `mask` overlaps an existing line
    /// * `CapacityExceeded` - already `N` lines
    pub fn add_line(&mut self, mask: u8) -> Result<(), ButtonError> {
        if mask == 0 {
            return Err(ButtonError::EmptyMask);
        }

        if self.lines.iter().any(|line| line.mask & mask != 0) {
            return Err(ButtonError::DuplicateMask(mask));
        }

        self.lines
            .push(ButtonLine {
                mask,
                debouncer: EdgeDebouncer::new(self.debounce_ms),
            })
            .map_err(|_| ButtonError::CapacityExceeded)
    }

    /// Handles a port interrupt.
    ///
    /// `status` is the masked interrupt status of the port. Every registered
    /// line present in `status` is debounced and, if accepted, forwarded to
    /// the handler. Bits that belong to no line are ignored.
    ///
    /// # Returns
    /// Number of codes forwarded to the handler.
    pub fn on_interrupt(&mut self, status: u8) -> usize {
        let now = self.time_source.now_millis();
        let mut forwarded = 0;

        for line in self.lines.iter_mut() {
            if status & line.mask == 0 {
                continue;
            }

            if line.debouncer.accept(now) {
                self.handler.on_button(line.mask);
                forwarded += 1;
            } else {
                trace!("debounced edge on line {=u8:#x}", line.mask);
            }
        }

        forwarded
    }

    /// Number of registered lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Interrupt-safe, `static`-friendly owner of a [`ButtonSource`].
///
/// Built empty at compile time and filled once at startup, so the debounce
/// state carries over from one interrupt to the next. Until
/// [`init`](Self::init) is called, interrupts are ignored.
pub struct SharedButtonSource<'t, H: ButtonHandler, T: TimeSource, const N: usize> {
    inner: Mutex<RefCell<Option<ButtonSource<'t, H, T, N>>>>,
}

impl<'t, H: ButtonHandler, T: TimeSource, const N: usize> SharedButtonSource<'t, H, T, N> {
    /// Creates an empty wrapper.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs the source, returning the one it replaces, if any.
    pub fn init(&self, source: ButtonSource<'t, H, T, N>) -> Option<ButtonSource<'t, H, T, N>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(source))
    }

    /// True once a source has been installed.
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Handles a port interrupt through the installed source.
    ///
    /// # Returns
    /// Number of codes forwarded, or `None` before [`init`](Self::init).
    pub fn on_interrupt(&self, status: u8) -> Option<usize> {
        critical_section::with(|cs| {
            self.inner
                .borrow_ref_mut(cs)
                .as_mut()
                .map(|source| source.on_interrupt(status))
        })
    }
}

impl<H: ButtonHandler, T: TimeSource, const N: usize> Default for SharedButtonSource<'_, H, T, N> {
    fn default() -> Self {
        Self::new()
    }
}
