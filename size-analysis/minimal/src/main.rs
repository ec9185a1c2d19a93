#![no_std]
#![no_main]

use cortex_m::peripheral::NVIC;
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use palette::Srgb;
use panic_halt as _;
use stm32f0xx_hal::pac::{self, Interrupt, interrupt};
use irq_stopwatch::{
    ButtonSource, ControlButtons, CounterButtons, DigitArray, DigitDisplay, IndicatorLed,
    SharedButtonSource, SharedStopwatch, Stopwatch, StopwatchConfig, TickClock, control_code,
    counter_code,
};

// ============================================================================
// Minimal Hardware Implementations
// ============================================================================

/// Zero-size indicator implementation for measuring library overhead
pub struct MinimalLed;

impl IndicatorLed for MinimalLed {
    fn set_color(&mut self, color: Srgb) {
        core::hint::black_box(color);
    }
}

/// Zero-size display implementation for measuring library overhead
pub struct MinimalDisplay;

impl DigitDisplay for MinimalDisplay {
    fn show(&mut self, digits: &DigitArray) {
        core::hint::black_box(digits);
    }
}

// ============================================================================
// Shared State
// ============================================================================

const CONFIG: StopwatchConfig = StopwatchConfig::new();

/// Core clock assumed for the SysTick reload value
const SYSCLK_HZ: u32 = 16_000_000;

/// Control buttons on PA2..PA5, so EXTI line n reports bit n
const CONTROL_CODES: [u8; 4] = [
    control_code::START,
    control_code::STOP,
    control_code::RESET,
    control_code::RESERVED,
];
const CONTROL_LINES: u32 = 0x3C;

/// Counter buttons on PA10/PA11, shifted down onto their codes
const COUNTER_CODES: [u8; 2] = [counter_code::INCREMENT, counter_code::DECREMENT];
const COUNTER_SHIFT: u32 = 8;
const COUNTER_LINES: u32 = 0x0C << COUNTER_SHIFT;

static STOPWATCH: SharedStopwatch<MinimalLed> = SharedStopwatch::new();
static CLOCK: TickClock = TickClock::new();

static CONTROL: SharedButtonSource<'static, ControlButtons<'static, MinimalLed>, TickClock, 4> =
    SharedButtonSource::new();
static COUNTER: SharedButtonSource<'static, CounterButtons<'static, MinimalLed>, TickClock, 2> =
    SharedButtonSource::new();

// ============================================================================
// Interrupt Handlers
// ============================================================================

/// SysTick interrupt handler - called every 1ms
#[exception]
fn SysTick() {
    CLOCK.advance();
    STOPWATCH.on_tick();
}

/// PA2/PA3 edges
#[interrupt]
fn EXTI2_3() {
    service_buttons();
}

/// PA4/PA5 and PA10/PA11 edges
#[interrupt]
fn EXTI4_15() {
    service_buttons();
}

/// Clear the pending button lines and hand each port's share to its source
fn service_buttons() {
    // SAFETY: PR is write-one-to-clear, so clearing only the bits read here
    // cannot drop an edge that arrives in between
    let exti = unsafe { &*pac::EXTI::ptr() };
    let pending = exti.pr.read().bits() & (CONTROL_LINES | COUNTER_LINES);
    exti.pr.write(|w| unsafe { w.bits(pending) });

    CONTROL.on_interrupt((pending & CONTROL_LINES) as u8);
    COUNTER.on_interrupt(((pending & COUNTER_LINES) >> COUNTER_SHIFT) as u8);
}

// ============================================================================
// Setup
// ============================================================================

fn configure_button_interrupts(dp: &pac::Peripherals) {
    // Port A is the reset EXTICR selection for every line used here
    dp.RCC.ahbenr.modify(|_, w| w.iopaen().set_bit());
    dp.RCC.apb2enr.modify(|_, w| w.syscfgen().set_bit());

    let lines = CONTROL_LINES | COUNTER_LINES;
    // Buttons pull low when pressed
    dp.EXTI.ftsr.modify(|r, w| unsafe { w.bits(r.bits() | lines) });
    dp.EXTI.imr.modify(|r, w| unsafe { w.bits(r.bits() | lines) });

    unsafe {
        NVIC::unmask(Interrupt::EXTI2_3);
        NVIC::unmask(Interrupt::EXTI4_15);
    }
}

#[entry]
fn main() -> ! {
    STOPWATCH.init(Stopwatch::with_config(MinimalLed, CONFIG));

    // Sources are built once so debounce state survives between interrupts
    if let Ok(source) = ButtonSource::with_lines(
        STOPWATCH.control_buttons(),
        &CLOCK,
        CONFIG.debounce_ms,
        &CONTROL_CODES,
    ) {
        CONTROL.init(source);
    }

    if let Ok(source) = ButtonSource::with_lines(
        STOPWATCH.counter_buttons(),
        &CLOCK,
        CONFIG.debounce_ms,
        &COUNTER_CODES,
    ) {
        COUNTER.init(source);
    }

    if let Some(dp) = pac::Peripherals::take() {
        configure_button_interrupts(&dp);
    }

    if let Some(mut cp) = cortex_m::Peripherals::take() {
        cp.SYST.set_clock_source(SystClkSource::Core);
        cp.SYST.set_reload(SYSCLK_HZ / 1_000 - 1);
        cp.SYST.clear_current();
        cp.SYST.enable_counter();
        cp.SYST.enable_interrupt();
    }

    irq_stopwatch::run_display_loop(&STOPWATCH, MinimalDisplay)
}
