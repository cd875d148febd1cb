//! Concrete [`Clock`] for real Cortex-M4 hardware.
//!
//! Backed by the DWT cycle counter rather than a SysTick reload interrupt:
//! this crate has no preemption to drive off a periodic tick, so all it
//! ever needs is a free-running counter it can read on demand and convert
//! to milliseconds. The only remaining consumer of the `cortex-m`
//! dependency.

use cortex_m::peripheral::{DCB, DWT};

use crate::arch::Clock;
use crate::config::SYSTEM_CLOCK_HZ;

/// Millisecond clock driven by the Cortex-M4 DWT cycle counter.
pub struct Cortex4Clock {
    millis: u32,
    last_cycles: u32,
}

impl Cortex4Clock {
    /// Enables the DWT cycle counter and starts the clock at `0`.
    ///
    /// Takes `dcb`/`dwt` by value (the caller gets them once, out of
    /// `cortex_m::Peripherals::take()`) so two `Cortex4Clock`s can never
    /// both believe they own the counter.
    pub fn new(mut dcb: DCB, mut dwt: DWT) -> Self {
        dcb.enable_trace();
        dwt.enable_cycle_counter();
        Self {
            millis: 0,
            last_cycles: DWT::cycle_count(),
        }
    }
}

impl Clock for Cortex4Clock {
    fn now(&mut self) -> u32 {
        let cycles_per_ms = SYSTEM_CLOCK_HZ / 1_000;
        let cycles = DWT::cycle_count();
        let elapsed = cycles.wrapping_sub(self.last_cycles);
        let ms_elapsed = elapsed / cycles_per_ms;
        if ms_elapsed > 0 {
            self.last_cycles = self.last_cycles.wrapping_add(ms_elapsed * cycles_per_ms);
            self.millis = self.millis.wrapping_add(ms_elapsed);
        }
        self.millis
    }
}
