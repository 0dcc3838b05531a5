//! The iteration core: `Collection`, `each`, and `reduce`.
//!
//! Every other collection operation in this crate is derived from the two
//! primitives defined here. Traversal order is defined exactly once, by
//! [`each`]: ascending index order for sequences, ascending key order for
//! mappings. [`reduce`] folds in that same order.
//!
//! # Examples
//!
//! ```rust
//! use funcol::collection::{each, reduce, Collection, Key};
//!
//! let numbers = Collection::from(vec![10, 20, 30]);
//!
//! let mut seen = Vec::new();
//! each(&numbers, |value, key, _collection| {
//!     if let Key::Index(index) = key {
//!         seen.push((index, *value));
//!     }
//! });
//! assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
//!
//! let sum = reduce(&numbers, None, |accumulator: i32, value| accumulator + value);
//! assert_eq!(sum, 60);
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A collection of values: either an ordered sequence or a string-keyed
/// mapping.
///
/// The two shapes share one traversal contract ([`each`]) and one fold
/// ([`reduce`]). A sequence is 0-based and index-addressable; a mapping has
/// unique string keys and enumerates in ascending key order, which is stable
/// within a traversal and across this implementation.
///
/// An *absent* collection is represented by `Option::<&Collection<T>>::None`;
/// the traversal entry points accept `impl Into<Option<&Collection<T>>>` so
/// that both `&collection` and `None` are valid arguments, and traversal over
/// `None` is a no-op.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::Collection;
///
/// let sequence = Collection::from(vec![1, 2, 3]);
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.get_index(1), Some(&2));
///
/// let mapping = Collection::mapping([("one", 1), ("two", 2)]);
/// assert_eq!(mapping.get("two"), Some(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Collection<T> {
    /// An ordered, index-addressable sequence of values.
    Sequence(Vec<T>),
    /// A mapping from unique string keys to values.
    Mapping(BTreeMap<String, T>),
}

/// The position of an element within a [`Collection`], passed to traversal
/// callbacks as their second argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// A 0-based position within a [`Collection::Sequence`].
    Index(usize),
    /// A key within a [`Collection::Mapping`].
    Name(&'a str),
}

impl<T> Collection<T> {
    /// Creates a sequence collection from anything convertible to a `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::sequence([1, 2, 3]);
    /// assert!(collection.is_sequence());
    /// ```
    #[inline]
    pub fn sequence(items: impl Into<Vec<T>>) -> Self {
        Self::Sequence(items.into())
    }

    /// Creates a mapping collection from key-value pairs.
    ///
    /// Later pairs overwrite earlier pairs with the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcol::collection::Collection;
    ///
    /// let collection = Collection::mapping([("a", 1), ("b", 2)]);
    /// assert!(collection.is_mapping());
    /// assert_eq!(collection.get("a"), Some(&1));
    /// ```
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Returns the number of elements in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    /// Returns `true` if the collection has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if this collection is an ordered sequence.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` if this collection is a key-value mapping.
    #[inline]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Looks up a value by key.
    ///
    /// Returns `None` if the key is absent or if this collection is a
    /// sequence.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&T> {
        match self {
            Self::Sequence(_) => None,
            Self::Mapping(entries) => entries.get(name),
        }
    }

    /// Looks up a value by position.
    ///
    /// Returns `None` if the index is out of bounds or if this collection is
    /// a mapping.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&T> {
        match self {
            Self::Sequence(items) => items.get(index),
            Self::Mapping(_) => None,
        }
    }
}

impl<T> Default for Collection<T> {
    /// Creates an empty sequence.
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    fn from(items: &[T]) -> Self {
        Self::Sequence(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self::Sequence(items.into())
    }
}

impl<T> From<BTreeMap<String, T>> for Collection<T> {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Self::Mapping(entries)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::Sequence(items.into_iter().collect())
    }
}

impl<T> FromIterator<(String, T)> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(entries: I) -> Self {
        Self::Mapping(entries.into_iter().collect())
    }
}

// =============================================================================
// Traversal Primitives
// =============================================================================

/// Invokes `iterator` once per element of `collection`.
///
/// This is the sole place traversal order is defined: sequences are visited
/// in ascending index order and the callback receives [`Key::Index`];
/// mappings are visited in ascending key order and the callback receives
/// [`Key::Name`]. The callback's third argument is the collection being
/// traversed.
///
/// An absent collection (`None`) results in no calls; this mirrors the
/// "null collection is a valid input" contract. This operation is for
/// effects only and returns nothing.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{each, Collection};
///
/// let collection = Collection::from(vec!["a", "b", "c"]);
/// let mut visited = Vec::new();
/// each(&collection, |value, _key, _collection| visited.push(*value));
/// assert_eq!(visited, vec!["a", "b", "c"]);
///
/// // Absent collections traverse as a no-op.
/// let mut calls = 0;
/// each(None::<&Collection<i32>>, |_value, _key, _collection| calls += 1);
/// assert_eq!(calls, 0);
/// ```
pub fn each<'a, T, C, F>(collection: C, mut iterator: F)
where
    T: 'a,
    C: Into<Option<&'a Collection<T>>>,
    F: FnMut(&'a T, Key<'a>, &'a Collection<T>),
{
    let Some(collection) = collection.into() else {
        return;
    };
    match collection {
        Collection::Sequence(items) => {
            for (index, value) in items.iter().enumerate() {
                iterator(value, Key::Index(index), collection);
            }
        }
        Collection::Mapping(entries) => {
            for (name, value) in entries {
                iterator(value, Key::Name(name.as_str()), collection);
            }
        }
    }
}

/// Like [`each`], but threads a mutable `context` value through the
/// traversal as the callback's first argument.
///
/// This is the explicit-receiver form of [`each`]: where a dynamic language
/// would rebind the callback's receiver, Rust threads the state through as
/// an argument.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{each_with, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3]);
/// let mut total = 0;
/// each_with(&collection, &mut total, |total, value, _key, _collection| {
///     *total += value;
/// });
/// assert_eq!(total, 6);
/// ```
pub fn each_with<'a, T, C, S, F>(collection: C, context: &mut S, mut iterator: F)
where
    T: 'a,
    C: Into<Option<&'a Collection<T>>>,
    S: ?Sized,
    F: FnMut(&mut S, &'a T, Key<'a>, &'a Collection<T>),
{
    each(collection, |value, key, collection| {
        iterator(&mut *context, value, key, collection);
    });
}

/// Folds `collection` into a single value, visiting elements in [`each`]'s
/// traversal order.
///
/// The accumulator is seeded from `initial`; at each step the accumulator is
/// replaced with `function(accumulator, element)`, and the final accumulator
/// is returned.
///
/// # Default seed
///
/// If `initial` is `None`, the accumulator is seeded with `A::default()` —
/// for integer accumulators that is `0`. Note the unusual convention: a
/// missing seed means *zero*, not "first element as seed". Callers
/// folding into strings, vectors, or other non-numeric accumulators should
/// pass an explicit seed. Folding an empty collection with no seed returns
/// the default seed, by contract.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{reduce, Collection};
///
/// let numbers = Collection::from(vec![1, 2, 3]);
/// assert_eq!(reduce(&numbers, 0, |accumulator, value| accumulator + value), 6);
///
/// // The missing seed defaults to zero.
/// let empty = Collection::<i32>::default();
/// assert_eq!(reduce(&empty, None, |accumulator: i32, value| accumulator + value), 0);
/// ```
pub fn reduce<'a, T, A, C, I, F>(collection: C, initial: I, mut function: F) -> A
where
    T: 'a,
    A: Default,
    C: Into<Option<&'a Collection<T>>>,
    I: Into<Option<A>>,
    F: FnMut(A, &'a T) -> A,
{
    let mut accumulator = initial.into().unwrap_or_default();
    each(collection, |value, _key, _collection| {
        let current = std::mem::take(&mut accumulator);
        accumulator = function(current, value);
    });
    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_each_visits_sequence_in_index_order() {
        let collection = Collection::from(vec![10, 20, 30]);
        let mut visited = Vec::new();
        each(&collection, |value, key, _collection| {
            visited.push((key, *value));
        });
        assert_eq!(
            visited,
            vec![
                (Key::Index(0), 10),
                (Key::Index(1), 20),
                (Key::Index(2), 30)
            ]
        );
    }

    #[rstest]
    fn test_each_visits_mapping_in_key_order() {
        let collection = Collection::mapping([("b", 2), ("a", 1), ("c", 3)]);
        let mut visited = Vec::new();
        each(&collection, |value, key, _collection| {
            if let Key::Name(name) = key {
                visited.push((name.to_string(), *value));
            }
        });
        assert_eq!(
            visited,
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 2),
                ("c".to_string(), 3)
            ]
        );
    }

    #[rstest]
    fn test_each_absent_collection_is_noop() {
        let mut calls = 0;
        each(None::<&Collection<i32>>, |_value, _key, _collection| {
            calls += 1;
        });
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_each_passes_the_collection_through() {
        let collection = Collection::from(vec![1, 2]);
        each(&collection, |_value, _key, passed| {
            assert_eq!(passed, &collection);
        });
    }

    #[rstest]
    fn test_each_with_threads_context() {
        let collection = Collection::from(vec![1, 2, 3]);
        let mut sink = Vec::new();
        each_with(&collection, &mut sink, |sink, value, _key, _collection| {
            sink.push(*value * 10);
        });
        assert_eq!(sink, vec![10, 20, 30]);
    }

    #[rstest]
    #[case(vec![1, 2, 3], 6)]
    #[case(vec![], 0)]
    #[case(vec![42], 42)]
    fn test_reduce_sums_with_explicit_seed(#[case] input: Vec<i32>, #[case] expected: i32) {
        let collection = Collection::from(input);
        let sum = reduce(&collection, 0, |accumulator, value| accumulator + value);
        assert_eq!(sum, expected);
    }

    #[rstest]
    fn test_reduce_missing_seed_defaults_to_zero() {
        let empty = Collection::<i32>::default();
        let sum = reduce(&empty, None, |accumulator: i32, value| accumulator + value);
        assert_eq!(sum, 0);
    }

    #[rstest]
    fn test_reduce_string_accumulator_with_explicit_seed() {
        let collection = Collection::from(vec!["a", "b", "c"]);
        let joined = reduce(&collection, String::new(), |mut accumulator, value| {
            accumulator.push_str(value);
            accumulator
        });
        assert_eq!(joined, "abc");
    }

    #[rstest]
    fn test_reduce_follows_each_order_for_mappings() {
        let collection = Collection::mapping([("z", "last"), ("a", "first")]);
        let order = reduce(&collection, Vec::new(), |mut accumulator, value| {
            accumulator.push(*value);
            accumulator
        });
        assert_eq!(order, vec!["first", "last"]);
    }

    #[rstest]
    fn test_mapping_duplicate_keys_keep_latest() {
        let collection = Collection::mapping([("a", 1), ("a", 2)]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("a"), Some(&2));
    }
}
