//! The `Memoize` decorator: per-argument result caching.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A decorator that caches its wrapped function's result per argument.
///
/// The first [`call`](Self::call) with a given argument invokes the
/// wrapped function and stores the result; later calls with an equal
/// argument return a clone of the stored result without invoking the
/// function. The cache never evicts — it lives as long as the instance.
///
/// Argument types must be `Eq + Hash + Clone`, which pins down cache-key
/// equality statically. Each instance owns its cache
/// exclusively; two instances wrapping the same function share nothing.
///
/// The wrapped function must not recursively call back into the same
/// `Memoize` instance; state lives behind a [`RefCell`], so reentrant
/// calls panic.
///
/// # Examples
///
/// ```rust
/// use funcol::function::Memoize;
/// use std::cell::Cell;
///
/// let runs = Cell::new(0);
/// let doubled = Memoize::new(|value: i32| {
///     runs.set(runs.get() + 1);
///     value * 2
/// });
///
/// assert_eq!(doubled.call(3), 6);
/// assert_eq!(doubled.call(3), 6); // cache hit
/// assert_eq!(doubled.call(4), 8);
/// assert_eq!(runs.get(), 2);
/// ```
pub struct Memoize<A, R, F> {
    function: RefCell<F>,
    cache: RefCell<HashMap<A, R>>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Wraps `function` with an empty cache.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: RefCell::new(function),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `argument`, computing and caching it
    /// on the first call with that argument.
    pub fn call(&self, argument: A) -> R {
        if let Some(result) = self.cache.borrow().get(&argument) {
            return result.clone();
        }

        let result = {
            let mut function = self.function.borrow_mut();
            (*function)(argument.clone())
        };
        self.cache.borrow_mut().insert(argument, result.clone());
        result
    }

    /// Returns whether a result is cached for `argument`.
    #[inline]
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.borrow().contains_key(argument)
    }

    /// Returns the number of distinct arguments cached so far.
    #[inline]
    pub fn cached_count(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}
