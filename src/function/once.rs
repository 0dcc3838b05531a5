//! The `Once` decorator: a function that runs at most one time.

use std::cell::RefCell;
use std::fmt;

/// The internal state of a [`Once`] decorator.
///
/// The state transitions `Pending` to `Done` exactly once; if the wrapped
/// function panics during that transition, the instance is poisoned and
/// unusable.
#[derive(Debug)]
enum OnceState<F, R> {
    /// The wrapped function has not run yet.
    Pending(F),
    /// The wrapped function has run; holds the cached result.
    Done(R),
    /// The wrapped function panicked on its first call.
    Poisoned,
}

/// A decorator that invokes its wrapped function at most one time.
///
/// The first [`call`](Self::call) invokes the wrapped function with the
/// supplied argument and caches the result. Every later call returns a
/// clone of that cached result without invoking the function again — the
/// later calls' arguments are ignored, by contract.
///
/// Each `Once` owns its state exclusively; wrapping the same function
/// twice produces two independent instances.
///
/// Functions of several arguments are wrapped with a tuple argument.
///
/// # Examples
///
/// ```rust
/// use funcol::function::Once;
/// use std::cell::Cell;
///
/// let runs = Cell::new(0);
/// let announce = Once::new(|name: &str| {
///     runs.set(runs.get() + 1);
///     format!("hello, {name}")
/// });
///
/// assert_eq!(announce.call("ada"), "hello, ada");
/// assert_eq!(announce.call("grace"), "hello, ada"); // cached, argument ignored
/// assert_eq!(runs.get(), 1);
/// ```
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

impl<F, R> Once<F, R> {
    /// Wraps `function`, deferring its single run to the first
    /// [`call`](Self::call).
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
        }
    }

    /// Returns whether the wrapped function has run.
    #[inline]
    pub fn has_run(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Done(_))
    }

    /// Returns whether the wrapped function panicked on its first call.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }
}

impl<F, R: Clone> Once<F, R> {
    /// Invokes the wrapped function on the first call; afterwards returns
    /// the cached result without invoking it.
    ///
    /// # Panics
    ///
    /// Panics if a previous call poisoned the instance (the wrapped
    /// function panicked).
    pub fn call<A>(&self, argument: A) -> R
    where
        F: FnOnce(A) -> R,
    {
        let mut state = self.state.borrow_mut();
        match &*state {
            OnceState::Done(result) => return result.clone(),
            OnceState::Poisoned => panic!("Once instance has been poisoned"),
            OnceState::Pending(_) => {}
        }

        // Take the function out, leaving Poisoned behind so a panic in the
        // wrapped function leaves the instance unusable rather than
        // half-initialized.
        let OnceState::Pending(function) = std::mem::replace(&mut *state, OnceState::Poisoned)
        else {
            unreachable!()
        };
        let result = function(argument);
        *state = OnceState::Done(result.clone());
        result
    }

    /// Returns a clone of the cached result, if the wrapped function has
    /// run.
    pub fn cached(&self) -> Option<R> {
        match &*self.state.borrow() {
            OnceState::Done(result) => Some(result.clone()),
            _ => None,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Done(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Pending(_) => formatter.debug_tuple("Once").field(&"<pending>").finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_once_runs_exactly_one_time() {
        let runs = Cell::new(0);
        let counted = Once::new(|value: i32| {
            runs.set(runs.get() + 1);
            value * 2
        });

        assert_eq!(counted.call(3), 6);
        assert_eq!(counted.call(4), 6);
        assert_eq!(counted.call(5), 6);
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn test_once_reports_state() {
        let wrapped = Once::new(|()| 42);
        assert!(!wrapped.has_run());
        assert_eq!(wrapped.cached(), None);

        wrapped.call(());
        assert!(wrapped.has_run());
        assert_eq!(wrapped.cached(), Some(42));
    }

    #[rstest]
    fn test_once_instances_are_independent() {
        let double = |value: i32| value * 2;
        let first = Once::new(double);
        let second = Once::new(double);

        assert_eq!(first.call(1), 2);
        assert_eq!(second.call(10), 20);
    }

    #[rstest]
    fn test_once_tuple_argument() {
        let joined = Once::new(|(left, right): (&str, &str)| format!("{left}-{right}"));
        assert_eq!(joined.call(("a", "b")), "a-b");
        assert_eq!(joined.call(("x", "y")), "a-b");
    }

    #[rstest]
    fn test_once_poisoned_by_panicking_function() {
        let wrapped: Once<_, i32> = Once::new(|()| panic!("boom"));
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| wrapped.call(())));
        assert!(outcome.is_err());
        assert!(wrapped.is_poisoned());
    }
}
