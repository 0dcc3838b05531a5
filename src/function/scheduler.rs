//! The scheduler capability behind all timed behavior.
//!
//! [`delay`](super::delay) and [`Throttle`](super::Throttle) never touch
//! wall-clock time directly. They consume a [`Scheduler`] — "tell me the
//! current time" plus "run this closure after a wait" — injected at
//! construction. The crate ships one implementation, [`VirtualScheduler`],
//! a deterministic single-threaded scheduler with a manually advanced
//! clock, which makes every timed test exact. Consumers integrating with a
//! real event loop implement [`Scheduler`] over their own timer service.

use std::cell::{Cell, RefCell};
use std::time::Duration;

/// A capability for reading the current time and deferring work.
///
/// Time is expressed as a [`Duration`] since an arbitrary per-scheduler
/// epoch; only differences between readings are meaningful. Scheduling
/// never fails and offers no cancellation handle — a consumer wanting
/// cancellation wraps its callback with its own guard.
///
/// Implementations must be monotonic (`now` never decreases) and must run
/// callbacks that fall due at the same instant in the order they were
/// scheduled.
pub trait Scheduler {
    /// Returns the time elapsed since this scheduler's epoch.
    fn now(&self) -> Duration;

    /// Arranges for `callback` to run once, `wait` after the current time.
    ///
    /// A zero `wait` runs the callback on the next scheduler tick, never
    /// synchronously inside this call.
    fn schedule(&self, wait: Duration, callback: Box<dyn FnOnce()>);
}

struct ScheduledTask {
    due: Duration,
    sequence: u64,
    callback: Box<dyn FnOnce()>,
}

/// A deterministic, single-threaded [`Scheduler`] with a manually advanced
/// clock.
///
/// Nothing runs until [`advance`](Self::advance) is called; advancing the
/// clock runs every callback whose due time falls within the advanced
/// span, in due-time order (FIFO for equal due times). Callbacks may
/// schedule further work, which runs within the same `advance` call if it
/// falls due.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use funcol::function::{Scheduler, VirtualScheduler};
///
/// let scheduler = VirtualScheduler::new();
///
/// let fired = std::rc::Rc::new(std::cell::Cell::new(false));
/// let handle = std::rc::Rc::clone(&fired);
/// scheduler.schedule(Duration::from_millis(50), Box::new(move || handle.set(true)));
///
/// scheduler.advance(Duration::from_millis(49));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct VirtualScheduler {
    clock: Cell<Duration>,
    queue: RefCell<Vec<ScheduledTask>>,
    next_sequence: Cell<u64>,
}

impl VirtualScheduler {
    /// Creates a scheduler with its clock at the epoch and nothing queued.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of callbacks waiting to run.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Advances the clock by `delta`, running every callback that falls due.
    ///
    /// Callbacks run in due-time order, FIFO for equal due times, with the
    /// clock set to each callback's due time while it runs. Work scheduled
    /// by a running callback participates: if it falls due within the
    /// remaining span it runs during this same call.
    pub fn advance(&self, delta: Duration) {
        let target = self.clock.get() + delta;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due_index = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.sequence))
                    .map(|(index, _)| index);
                due_index.map(|index| queue.remove(index))
            };
            // The queue borrow is released before the callback runs, so
            // callbacks are free to schedule more work.
            match next {
                Some(task) => {
                    self.clock.set(task.due.max(self.clock.get()));
                    (task.callback)();
                }
                None => break,
            }
        }
        self.clock.set(target);
    }
}

impl Scheduler for VirtualScheduler {
    #[inline]
    fn now(&self) -> Duration {
        self.clock.get()
    }

    fn schedule(&self, wait: Duration, callback: Box<dyn FnOnce()>) {
        let sequence = self.next_sequence.get();
        self.next_sequence.set(sequence + 1);
        self.queue.borrow_mut().push(ScheduledTask {
            due: self.clock.get() + wait,
            sequence,
            callback,
        });
    }
}
