//! The `delay` decorator: fire-and-forget deferred invocation.

use std::time::Duration;

use super::scheduler::Scheduler;

/// Schedules a single invocation of `function(argument)` to run `wait`
/// after the current scheduler time.
///
/// The caller is never blocked and receives no handle: there is no
/// cancellation and no way to observe the function's return value.
/// Scheduling itself cannot fail. A zero `wait` runs the function on the
/// scheduler's next tick. Functions of several arguments take a tuple.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use funcol::function::{delay, VirtualScheduler};
///
/// let scheduler = VirtualScheduler::new();
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let handle = Rc::clone(&log);
///
/// delay(&scheduler, Duration::from_millis(500), ("a", "b"), move |(left, right)| {
///     handle.borrow_mut().push(format!("{left}{right}"));
/// });
///
/// assert!(log.borrow().is_empty());
/// scheduler.advance(Duration::from_millis(500));
/// assert_eq!(*log.borrow(), vec!["ab".to_string()]);
/// ```
pub fn delay<S, A, F>(scheduler: &S, wait: Duration, argument: A, function: F)
where
    S: Scheduler + ?Sized,
    A: 'static,
    F: FnOnce(A) + 'static,
{
    scheduler.schedule(wait, Box::new(move || function(argument)));
}

#[cfg(test)]
mod tests {
    use super::super::scheduler::VirtualScheduler;
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn test_delay_fires_after_wait() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let handle = Rc::clone(&fired);

        delay(&scheduler, Duration::from_millis(100), (), move |()| {
            handle.set(true);
        });

        scheduler.advance(Duration::from_millis(99));
        assert!(!fired.get());
        scheduler.advance(Duration::from_millis(1));
        assert!(fired.get());
    }

    #[rstest]
    fn test_delay_passes_the_argument() {
        let scheduler = VirtualScheduler::new();
        let received = Rc::new(Cell::new(0));
        let handle = Rc::clone(&received);

        delay(&scheduler, Duration::from_millis(10), 7, move |value| {
            handle.set(value);
        });

        scheduler.advance(Duration::from_millis(10));
        assert_eq!(received.get(), 7);
    }

    #[rstest]
    fn test_delay_zero_wait_runs_on_next_tick() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let handle = Rc::clone(&fired);

        delay(&scheduler, Duration::ZERO, (), move |()| handle.set(true));

        // Not synchronous: nothing runs until the scheduler ticks.
        assert!(!fired.get());
        scheduler.advance(Duration::ZERO);
        assert!(fired.get());
    }

    #[rstest]
    fn test_delay_through_a_trait_object() {
        let scheduler = VirtualScheduler::new();
        let erased: &dyn Scheduler = &scheduler;
        let fired = Rc::new(Cell::new(false));
        let handle = Rc::clone(&fired);

        delay(erased, Duration::from_millis(1), (), move |()| {
            handle.set(true);
        });

        scheduler.advance(Duration::from_millis(1));
        assert!(fired.get());
    }
}
