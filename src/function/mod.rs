//! Function decorators: wrappers that add memory or timing to a function.
//!
//! Each decorator takes a function value and produces a wrapper carrying
//! private state created at wrap time:
//!
//! - [`Once`]: runs the wrapped function at most one time and replays the
//!   cached result.
//! - [`Memoize`]: caches results per argument; at most one underlying call
//!   per distinct argument.
//! - [`delay`]: schedules one fire-and-forget invocation after a wait.
//! - [`Throttle`]: rate-limits execution to once per time window, with
//!   in-window calls coalescing into a single trailing execution.
//!
//! State is never shared between independently created wrappers, even
//! around the same underlying function.
//!
//! Timed behavior ([`delay`], [`Throttle`]) runs on an injected
//! [`Scheduler`] capability. [`VirtualScheduler`] is the deterministic
//! implementation shipped with the crate; production consumers bridge the
//! trait to their own event loop or timer service.
//!
//! # Examples
//!
//! ```rust
//! use funcol::function::Memoize;
//!
//! let expensive = Memoize::new(|n: u64| (1..=n).product::<u64>());
//! assert_eq!(expensive.call(10), 3_628_800);
//! assert_eq!(expensive.call(10), 3_628_800); // cache hit, no recomputation
//! ```

mod delay;
mod memoize;
mod once;
mod scheduler;
mod throttle;

pub use delay::delay;
pub use memoize::Memoize;
pub use once::Once;
pub use scheduler::{Scheduler, VirtualScheduler};
pub use throttle::Throttle;
