//! # Top-level drivers
//!
//! Entry points the host idle loop calls once per pass:
//! [`Once`] runs a task tree to completion and then goes quiet, [`Repeat`]
//! restarts it every time it completes, and [`Every`] restarts it on
//! completion no more often than once every `T` milliseconds. Each owns
//! exactly one task tree instance — there is no registry of drivers and
//! no dynamic spawning; the tree a driver owns is fixed by its generic
//! type at compile time.
//!
//! Every constructor here asserts `F::DEPTH <= config::MAX_DEPTH` in an
//! inline `const` block, so a tree nested deeper than the configured
//! bound fails to compile rather than overflowing anything at runtime.

use crate::config::MAX_DEPTH;
use crate::task::{deadline_reached, Cx, Task, TaskStatus};

// ---------------------------------------------------------------------------
// once — run to completion, then go quiet
// ---------------------------------------------------------------------------

/// `once(f)`. Evaluates `f` every pass until it completes;
/// every pass after that is a no-op and `poll` keeps returning
/// [`TaskStatus::Done`] without touching `f` again.
pub struct Once<F> {
    f: F,
    done: bool,
}

impl<F: Task> Once<F> {
    pub fn new(f: F) -> Self {
        const { assert!(F::DEPTH <= MAX_DEPTH, "task tree exceeds config::MAX_DEPTH") };
        Self { f, done: false }
    }

    /// Run one pass at clock reading `now`.
    pub fn poll(&mut self, now: u32) -> TaskStatus {
        if self.done {
            return TaskStatus::Done;
        }
        let mut cx = Cx::root(now);
        let status = self.f.poll(&mut cx);
        if status.is_done() {
            self.done = true;
        }
        status
    }
}

/// Constructs a [`Once`] driver.
pub fn once<F: Task>(f: F) -> Once<F> {
    Once::new(f)
}

// ---------------------------------------------------------------------------
// repeat — restart on every completion
// ---------------------------------------------------------------------------

/// `repeat(f)`. Like [`Once`], but when the current instance completes,
/// a fresh one is constructed from `make` and takes over on the very next
/// pass.
pub struct Repeat<F, M> {
    current: Option<F>,
    make: M,
}

impl<F, M> Repeat<F, M>
where
    F: Task,
    M: FnMut() -> F,
{
    pub fn new(make: M) -> Self {
        const { assert!(F::DEPTH <= MAX_DEPTH, "task tree exceeds config::MAX_DEPTH") };
        Self { current: None, make }
    }

    /// Run one pass at clock reading `now`.
    pub fn poll(&mut self, now: u32) -> TaskStatus {
        let mut cx = Cx::root(now);
        crate::combinators::poll_child(&mut self.current, &mut self.make, &mut cx)
    }
}

/// Constructs a [`Repeat`] driver from a factory that builds a fresh task
/// instance each time the previous one completes.
pub fn repeat<F, M>(make: M) -> Repeat<F, M>
where
    F: Task,
    M: FnMut() -> F,
{
    Repeat::new(make)
}

// ---------------------------------------------------------------------------
// every — restart on completion, no more often than every T ms
// ---------------------------------------------------------------------------

/// `every(T, f)`. Like [`Repeat`], but a completed instance
/// is only replaced once at least `millis` milliseconds have elapsed since
/// the reference time — which is itself advanced to the moment of each
/// actual restart, not merely to the moment completion was observed. The
/// very first completion always restarts immediately, since there is no
/// reference time yet to measure against.
pub struct Every<F, M> {
    current: Option<F>,
    make: M,
    millis: u32,
    reference: Option<u32>,
}

impl<F, M> Every<F, M>
where
    F: Task,
    M: FnMut() -> F,
{
    pub fn new(millis: u32, make: M) -> Self {
        const { assert!(F::DEPTH <= MAX_DEPTH, "task tree exceeds config::MAX_DEPTH") };
        Self {
            current: None,
            make,
            millis,
            reference: None,
        }
    }

    /// Run one pass at clock reading `now`.
    pub fn poll(&mut self, now: u32) -> TaskStatus {
        let mut cx = Cx::root(now);
        let child = self.current.get_or_insert_with(&mut self.make);
        let status = child.poll(&mut cx);
        if status.is_done() {
            let ready = match self.reference {
                None => true,
                Some(reference) => deadline_reached(now, reference.wrapping_add(self.millis)),
            };
            if ready {
                self.current = None;
                self.reference = Some(now);
            }
        }
        status
    }
}

/// Constructs an [`Every`] driver.
pub fn every<F, M>(millis: u32, make: M) -> Every<F, M>
where
    F: Task,
    M: FnMut() -> F,
{
    Every::new(millis, make)
}
