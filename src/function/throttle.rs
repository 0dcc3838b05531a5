//! The `Throttle` decorator: at most one execution per time window.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::scheduler::Scheduler;

struct ThrottleState<A, R, F> {
    function: F,
    last_run: Option<Duration>,
    timer_armed: bool,
    pending: Option<A>,
    last_result: Option<R>,
}

/// A decorator that executes its wrapped function at most once per `wait`
/// window.
///
/// The instance moves between three states:
///
/// - **Idle**: no execution yet, or the window has expired. A call executes
///   the wrapped function immediately, records the execution time, and
///   returns the fresh result.
/// - **Cooling**: within `wait` of the last execution, nothing scheduled. A
///   call here does not execute; it records its argument, schedules one
///   trailing execution for the moment the window expires, and returns the
///   most recent (stale) result immediately — a throttled call never
///   blocks.
/// - **Pending**: within the window with a trailing execution already
///   scheduled. Further calls coalesce: the recorded argument is replaced
///   (latest wins) and no second timer is armed.
///
/// When the trailing execution fires it runs the wrapped function with the
/// recorded argument and starts the next window *at the fire time*, so
/// repeated coalescing never accumulates delay.
///
/// Timing comes entirely from the injected [`Scheduler`]; under a
/// [`VirtualScheduler`](super::VirtualScheduler) the whole state machine is
/// deterministic.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use funcol::function::{Throttle, VirtualScheduler};
///
/// let scheduler = Rc::new(VirtualScheduler::new());
/// let executions = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&executions);
///
/// let throttled = Throttle::new(Rc::clone(&scheduler), Duration::from_millis(100), move |n: i32| {
///     counter.set(counter.get() + 1);
///     n
/// });
///
/// // Five calls in a 10ms span: one runs immediately, the rest coalesce.
/// for n in 1..=5 {
///     throttled.call(n);
///     scheduler.advance(Duration::from_millis(2));
/// }
/// assert_eq!(executions.get(), 1);
///
/// // The window expires: exactly one trailing execution, with the latest
/// // argument.
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(executions.get(), 2);
/// assert_eq!(throttled.last_result(), Some(5));
/// ```
pub struct Throttle<A, R, F, S> {
    state: Rc<RefCell<ThrottleState<A, R, F>>>,
    scheduler: Rc<S>,
    wait: Duration,
}

impl<A, R, F, S> Throttle<A, R, F, S>
where
    A: 'static,
    R: Clone + 'static,
    F: FnMut(A) -> R + 'static,
    S: Scheduler + 'static,
{
    /// Wraps `function`, rate-limiting executions to one per `wait` on the
    /// given scheduler.
    pub fn new(scheduler: Rc<S>, wait: Duration, function: F) -> Self {
        Self {
            state: Rc::new(RefCell::new(ThrottleState {
                function,
                last_run: None,
                timer_armed: false,
                pending: None,
                last_result: None,
            })),
            scheduler,
            wait,
        }
    }

    /// Invokes or coalesces one throttled call.
    ///
    /// Executes the wrapped function immediately and returns its fresh
    /// result when the window has expired (or on the first call ever);
    /// otherwise records the argument for the single trailing execution and
    /// returns the most recent result. Never blocks.
    ///
    /// The wrapped function must not call back into the same `Throttle`;
    /// state lives behind a [`RefCell`], so reentrant calls panic.
    pub fn call(&self, argument: A) -> R {
        let now = self.scheduler.now();
        let mut state = self.state.borrow_mut();

        match state.last_run {
            // Inside the window: coalesce into one trailing execution.
            Some(last_run) if now.saturating_sub(last_run) < self.wait => {
                state.pending = Some(argument);
                if !state.timer_armed {
                    state.timer_armed = true;
                    let fire_in = (last_run + self.wait).saturating_sub(now);
                    let state_handle = Rc::clone(&self.state);
                    let scheduler_handle = Rc::clone(&self.scheduler);
                    self.scheduler.schedule(
                        fire_in,
                        Box::new(move || {
                            let mut state = state_handle.borrow_mut();
                            state.timer_armed = false;
                            if let Some(argument) = state.pending.take() {
                                let result = (state.function)(argument);
                                // The next window starts at the fire time, so
                                // coalescing never accumulates delay.
                                state.last_run = Some(scheduler_handle.now());
                                state.last_result = Some(result);
                            }
                        }),
                    );
                }
                match state.last_result.clone() {
                    Some(result) => result,
                    None => unreachable!("a call inside the window implies a prior execution"),
                }
            }
            // Idle, or the window has expired: execute immediately.
            _ => {
                state.last_run = Some(now);
                let result = (state.function)(argument);
                state.last_result = Some(result.clone());
                result
            }
        }
    }

    /// Returns the wait window.
    #[inline]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Returns a clone of the most recently computed result, if any
    /// execution has happened.
    pub fn last_result(&self) -> Option<R> {
        self.state.borrow().last_result.clone()
    }

    /// Returns whether a trailing execution is currently scheduled.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.state.borrow().timer_armed
    }
}

impl<A, R, F, S> fmt::Debug for Throttle<A, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("last_run", &state.last_run)
            .field("timer_armed", &state.timer_armed)
            .finish_non_exhaustive()
    }
}
