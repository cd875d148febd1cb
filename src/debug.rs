//! # Debug event sink
//!
//! An optional hook for reporting task poll entries/exits and combinator
//! decisions without mandating a rich logging facade. This crate's take:
//! an [`Event`] carrying a task name and a resume-state name (both
//! `&'static str` — there is no allocator to format anything richer with)
//! plus a free-text message, delivered to a single installed callback.
//!
//! Gated entirely behind the `debug-log` feature. With the feature off,
//! [`emit`] is an empty inline function and every call site it appears in
//! — generated by [`crate::task!`] — compiles to nothing; there is no
//! runtime check to elide, because the code simply isn't there.

/// One occurrence worth reporting: a task's poll entry or exit, a
/// combinator branch taken, or anything else a hand-written task chooses
/// to report via [`emit`].
#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub task: &'static str,
    pub state: &'static str,
    pub message: &'static str,
}

#[cfg(feature = "debug-log")]
mod sink {
    use super::Event;

    /// The single installed hook. There is exactly one global sink, not a
    /// registry, kept as a raw `static mut` since nothing in a
    /// single-threaded, non-preemptive, interrupt-free runtime ever races
    /// against it.
    static mut HOOK: Option<fn(Event)> = None;

    /// Install (or replace) the debug sink. Typically called once, during
    /// host startup, before the first driver pass.
    pub fn install(hook: fn(Event)) {
        unsafe {
            HOOK = Some(hook);
        }
    }

    /// Remove any installed sink.
    pub fn uninstall() {
        unsafe {
            HOOK = None;
        }
    }

    pub fn emit(event: Event) {
        unsafe {
            if let Some(hook) = HOOK {
                hook(event);
            }
        }
    }
}

#[cfg(feature = "debug-log")]
pub use sink::{install, uninstall};

#[cfg(feature = "debug-log")]
#[doc(hidden)]
pub fn emit(event: Event) {
    sink::emit(event);
}

#[cfg(not(feature = "debug-log"))]
#[doc(hidden)]
#[inline(always)]
pub fn emit(_event: Event) {}

#[cfg(all(test, feature = "debug-log"))]
mod tests {
    use super::*;

    // A raw static, matching the sink's own pattern: single-threaded host
    // test binary, nothing ever races this.
    static mut LAST_MESSAGE: Option<&'static str> = None;

    fn record(event: Event) {
        unsafe {
            LAST_MESSAGE = Some(event.message);
        }
    }

    #[test]
    fn installed_hook_receives_emitted_events() {
        install(record);
        emit(Event {
            task: "demo",
            state: "cont",
            message: "poll",
        });
        assert_eq!(unsafe { LAST_MESSAGE }, Some("poll"));
        uninstall();
    }

    #[test]
    fn emit_without_install_does_nothing() {
        uninstall();
        // Should not panic even though no hook is installed.
        emit(Event {
            task: "demo",
            state: "cont",
            message: "poll",
        });
    }
}
