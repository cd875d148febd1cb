//! # Kernel
//!
//! The public surface of this crate, gathered in one place. Nothing here
//! owns global state — there is no singleton scheduler to `init()`, since
//! every driver owns its own task tree and the host drives it directly
//! from its own idle loop, calling the driver site(s) repeatedly with no
//! lower bound on frequency.
//!
//! ## A host's main loop
//!
//! ```ignore
//! use cotask::prelude::*;
//!
//! let mut blink = repeat(|| andthen(join(delay(500), delay(500))));
//! let mut now: u32 = 0;
//! loop {
//!     blink.poll(now);
//!     now = read_hardware_clock();
//! }
//! ```
//!
//! The one piece of genuinely global, install-once state this crate has
//! is the optional debug sink; [`install_debug_sink`] is its entry
//! point — call it once, before the first driver pass, if at all.

#[cfg(feature = "debug-log")]
pub use crate::debug::install as install_debug_sink;

#[cfg(feature = "debug-log")]
pub use crate::debug::uninstall as uninstall_debug_sink;

/// Re-exports the whole public task-building surface under one `use`.
pub mod prelude {
    pub use crate::combinators::{
        andthen, await_until, delay, join, race, timeout, until, AndThen, AwaitUntil, Delay, Join,
        Race, Timeout, TimeoutOutcome, Until, Winner,
    };
    pub use crate::combinators::{alternate, finish, Alternate, Finish};
    pub use crate::driver::{every, once, repeat, Every, Once, Repeat};
    pub use crate::task::{Cx, Task, TaskStatus};
}
