//! # Architecture abstraction layer
//!
//! The only thing a host needs to supply: a monotonic millisecond clock.
//! There is no context switching, no PendSV, no stack frame layout to
//! reason about here — the scheduler never touches the hardware
//! directly, because it never switches execution contexts; it just polls
//! whichever task trees the host owns, in the host's own control flow.

/// A monotonic millisecond-resolution clock.
///
/// Implementations must never go backwards except by wraparound at
/// `u32::MAX`, which every deadline comparison in this crate already
/// accounts for via [`crate::task::deadline_reached`].
pub trait Clock {
    fn now(&mut self) -> u32;
}

#[cfg(feature = "cortex-m4")]
pub mod cortex_m4;
