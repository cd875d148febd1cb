//! # Runtime configuration
//!
//! Compile-time constants governing the scheduler and task-tree depth.
//! There is no environment and no builder: a microcontroller target has
//! neither, so every knob here is a plain `pub const`.

/// Maximum combinator-nesting depth of any task tree rooted at a driver
/// site. Every [`crate::driver::Once`], [`crate::driver::Repeat`] and
/// [`crate::driver::Every`] asserts `F::DEPTH <= MAX_DEPTH` in a `const`
/// block at construction, turning an overly deep tree into a compile
/// error rather than a stack/heap overflow.
///
/// `MAX_DEPTH` bounds combinator *nesting depth*, not a count of distinct
/// task slots in an array — there is no array, so there is nothing else
/// left for it to bound.
pub const MAX_DEPTH: usize = 5;

/// System clock frequency in Hz, used only by the optional `cortex-m4`
/// [`crate::arch::cortex_m4`] clock source (default for an STM32F4 at
/// 16 MHz HSI). Host-driven callers supply their own `now()` and never
/// read this constant.
#[cfg(feature = "cortex-m4")]
pub const SYSTEM_CLOCK_HZ: u32 = 16_000_000;
