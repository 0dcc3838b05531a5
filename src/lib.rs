//! # funcol
//!
//! A functional utility library for Rust providing collection traversal
//! primitives and stateful function decorators.
//!
//! ## Overview
//!
//! The library is built around two small, strictly layered subsystems:
//!
//! - **Iteration Core**: [`each`](collection::each) and
//!   [`reduce`](collection::reduce) over a [`Collection`](collection::Collection)
//!   (an ordered sequence or a string-keyed mapping). Every other collection
//!   operation — `map`, `filter`, `reject`, `every`, `some`, `contains`,
//!   `index_of` — is derived from these two primitives, so traversal order is
//!   defined in exactly one place.
//! - **Function Decorators**: [`Once`](function::Once),
//!   [`Memoize`](function::Memoize), [`delay`](function::delay), and
//!   [`Throttle`](function::Throttle). Each wraps a function value with
//!   private per-instance state (a cached result, an argument cache, or a
//!   rate-limiting window). Timed behavior runs on an injected
//!   [`Scheduler`](function::Scheduler) capability rather than wall-clock
//!   time, so everything is deterministic under test.
//!
//! ## Feature Flags
//!
//! - `collection`: Collection type and traversal operations
//! - `function`: Function decorators and the scheduler capability
//! - `serde`: `Serialize`/`Deserialize` for `Collection`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcol::prelude::*;
//!
//! let numbers = Collection::from(vec![1, 2, 3, 4]);
//! let doubled = map(&numbers, |n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! let sum = reduce(&numbers, None, |accumulator: i32, n| accumulator + n);
//! assert_eq!(sum, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use funcol::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "function")]
pub mod function;
