//! Collection traversal: the iteration core and everything derived from it.
//!
//! This module is strictly layered:
//!
//! - [`traverse`](self): [`Collection`], [`Key`], [`each`], [`each_with`],
//!   and [`reduce`] — the only code in the crate that walks a collection.
//! - Derived operations: [`map`], [`filter`] (and its [`select`] alias),
//!   [`reject`], [`every`], [`some`], [`contains`], [`index_of`] — each
//!   defined through `each`/`reduce`, never through its own loop.
//! - Helpers: slicing, [`uniq`], [`pluck`], [`flatten`], [`zip`],
//!   [`sort_by`], set operations, and mapping merges — thin layers over the
//!   public contract above.
//!
//! # Examples
//!
//! ```rust
//! use funcol::collection::{every, filter, reduce, Collection};
//!
//! let scores = Collection::mapping([("alice", 82), ("bob", 91), ("carol", 75)]);
//!
//! let passing = filter(&scores, |score| *score >= 80);
//! assert_eq!(passing, vec![82, 91]);
//!
//! assert!(every(&scores, |score| *score >= 75));
//!
//! let total = reduce(&scores, 0, |accumulator, score| accumulator + score);
//! assert_eq!(total, 248);
//! ```

mod derived;
mod helpers;
mod traverse;

pub use derived::{contains, every, filter, index_of, map, reject, select, some};
pub use helpers::{
    defaults, difference, extend, first, first_n, flatten, intersection, last, last_n, pluck,
    sort_by, uniq, zip, Nested,
};
pub use traverse::{each, each_with, reduce, Collection, Key};
