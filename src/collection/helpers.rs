//! Thin helpers layered on the iteration core's public contract.
//!
//! Nothing here introduces a new traversal: slicing, deduplication,
//! projection, flattening, set operations, and mapping merges are all
//! expressed through [`each`], [`filter`], [`map`], and [`contains`].

use super::derived::{contains, filter, map};
use super::traverse::{each, Collection, Key};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value or an arbitrarily nested list of values, the input shape for
/// [`flatten`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Nested<T> {
    /// A leaf value.
    Value(T),
    /// A nested list of further values or lists.
    List(Vec<Nested<T>>),
}

/// Returns a reference to the first element, or `None` if the collection is
/// empty.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{first, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3]);
/// assert_eq!(first(&collection), Some(&1));
/// ```
pub fn first<T>(collection: &Collection<T>) -> Option<&T> {
    let mut result = None;
    each(collection, |value, _key, _collection| {
        if result.is_none() {
            result = Some(value);
        }
    });
    result
}

/// Returns the first `count` elements as a new sequence.
///
/// Fewer elements are returned if the collection is shorter than `count`.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{first_n, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3]);
/// assert_eq!(first_n(&collection, 2), vec![1, 2]);
/// assert_eq!(first_n(&collection, 10), vec![1, 2, 3]);
/// ```
pub fn first_n<T: Clone>(collection: &Collection<T>, count: usize) -> Vec<T> {
    let mut result = Vec::new();
    each(collection, |value, _key, _collection| {
        if result.len() < count {
            result.push(value.clone());
        }
    });
    result
}

/// Returns a reference to the last element, or `None` if the collection is
/// empty.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{last, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3]);
/// assert_eq!(last(&collection), Some(&3));
/// ```
pub fn last<T>(collection: &Collection<T>) -> Option<&T> {
    let mut result = None;
    each(collection, |value, _key, _collection| {
        result = Some(value);
    });
    result
}

/// Returns the last `count` elements as a new sequence, preserving order.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{last_n, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3]);
/// assert_eq!(last_n(&collection, 2), vec![2, 3]);
/// assert_eq!(last_n(&collection, 0), Vec::<i32>::new());
/// ```
pub fn last_n<T: Clone>(collection: &Collection<T>, count: usize) -> Vec<T> {
    let mut result = Vec::new();
    each(collection, |value, _key, _collection| {
        result.push(value.clone());
        if result.len() > count {
            result.remove(0);
        }
    });
    result
}

/// Returns a duplicate-free copy of the collection, keeping the first
/// occurrence of each value.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{uniq, Collection};
///
/// let collection = Collection::from(vec![1, 2, 1, 3, 2]);
/// assert_eq!(uniq(&collection), vec![1, 2, 3]);
/// ```
pub fn uniq<T: PartialEq + Clone>(collection: &Collection<T>) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    each(collection, |value, _key, _collection| {
        if !result.iter().any(|existing| existing == value) {
            result.push(value.clone());
        }
    });
    result
}

/// Projects one named value out of each mapping in a sequence of mappings.
///
/// The classic use is extracting a single field from a list of records.
/// Entries lacking the key (or that are sequences) yield `None`.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{pluck, Collection};
///
/// let people = Collection::from(vec![
///     Collection::mapping([("name", "ada"), ("role", "engineer")]),
///     Collection::mapping([("name", "grace")]),
/// ]);
/// assert_eq!(pluck(&people, "name"), vec![Some("ada"), Some("grace")]);
/// assert_eq!(pluck(&people, "role"), vec![Some("engineer"), None]);
/// ```
pub fn pluck<T: Clone>(collection: &Collection<Collection<T>>, name: &str) -> Vec<Option<T>> {
    map(collection, |entry| entry.get(name).cloned())
}

/// Flattens arbitrarily nested lists into a single flat sequence,
/// preserving left-to-right order.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{flatten, Collection, Nested};
///
/// let collection = Collection::from(vec![
///     Nested::Value(1),
///     Nested::List(vec![Nested::Value(2), Nested::List(vec![Nested::Value(3)])]),
///     Nested::Value(4),
/// ]);
/// assert_eq!(flatten(&collection), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(collection: &Collection<Nested<T>>) -> Vec<T> {
    fn visit<T: Clone>(node: &Nested<T>, output: &mut Vec<T>) {
        match node {
            Nested::Value(value) => output.push(value.clone()),
            Nested::List(children) => {
                for child in children {
                    visit(child, output);
                }
            }
        }
    }

    let mut result = Vec::new();
    each(collection, |node, _key, _collection| {
        visit(node, &mut result);
    });
    result
}

/// Zips sequences together element-by-index.
///
/// Row `i` of the result holds the `i`-th element of every input; inputs
/// shorter than the longest one pad their missing slots with `None`.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{zip, Collection};
///
/// let letters = Collection::from(vec!["a", "b", "c"]);
/// let shorter = Collection::from(vec!["x"]);
/// let rows = zip(&[letters, shorter]);
/// assert_eq!(rows[0], vec![Some("a"), Some("x")]);
/// assert_eq!(rows[2], vec![Some("c"), None]);
/// ```
pub fn zip<T: Clone>(sequences: &[Collection<T>]) -> Vec<Vec<Option<T>>> {
    let longest = sequences
        .iter()
        .map(Collection::len)
        .max()
        .unwrap_or_default();
    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.get_index(index).cloned())
                .collect()
        })
        .collect()
}

/// Returns the collection's elements sorted by a key extracted from each
/// element.
///
/// The sort is stable: elements with equal keys keep their traversal order.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{sort_by, Collection};
///
/// let collection = Collection::from(vec!["pear", "fig", "banana"]);
/// assert_eq!(sort_by(&collection, |word| word.len()), vec!["fig", "pear", "banana"]);
/// ```
pub fn sort_by<T, K, F>(collection: &Collection<T>, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut items = map(collection, Clone::clone);
    items.sort_by_key(key);
    items
}

/// Returns the elements of `collection` that are present in every
/// collection of `others`.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{intersection, Collection};
///
/// let base = Collection::from(vec![1, 2, 3, 4]);
/// let others = [Collection::from(vec![2, 4, 6]), Collection::from(vec![4, 2])];
/// assert_eq!(intersection(&base, &others), vec![2, 4]);
/// ```
pub fn intersection<T: PartialEq + Clone>(
    collection: &Collection<T>,
    others: &[Collection<T>],
) -> Vec<T> {
    filter(collection, |value| {
        others.iter().all(|other| contains(other, value))
    })
}

/// Returns the elements of `collection` that are present in none of the
/// collections of `others`.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{difference, Collection};
///
/// let base = Collection::from(vec![1, 2, 3, 4]);
/// let others = [Collection::from(vec![2]), Collection::from(vec![4])];
/// assert_eq!(difference(&base, &others), vec![1, 3]);
/// ```
pub fn difference<T: PartialEq + Clone>(
    collection: &Collection<T>,
    others: &[Collection<T>],
) -> Vec<T> {
    filter(collection, |value| {
        !others.iter().any(|other| contains(other, value))
    })
}

/// Copies every entry of the `source` mapping into the `target` mapping,
/// overwriting entries whose key already exists.
///
/// # Panics
///
/// Panics if either collection is a sequence; merging is a mapping
/// operation.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{extend, Collection};
///
/// let mut target = Collection::mapping([("a", 1)]);
/// extend(&mut target, &Collection::mapping([("a", 10), ("b", 2)]));
/// assert_eq!(target.get("a"), Some(&10));
/// assert_eq!(target.get("b"), Some(&2));
/// ```
pub fn extend<T: Clone>(target: &mut Collection<T>, source: &Collection<T>) {
    let Collection::Mapping(entries) = target else {
        panic!("extend requires mapping collections");
    };
    each(source, |value, key, _collection| match key {
        Key::Name(name) => {
            entries.insert(name.to_string(), value.clone());
        }
        Key::Index(_) => panic!("extend requires mapping collections"),
    });
}

/// Copies entries of the `source` mapping into the `target` mapping, but
/// never overwrites a key that already exists in `target`.
///
/// # Panics
///
/// Panics if either collection is a sequence.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{defaults, Collection};
///
/// let mut target = Collection::mapping([("a", 1)]);
/// defaults(&mut target, &Collection::mapping([("a", 10), ("b", 2)]));
/// assert_eq!(target.get("a"), Some(&1));
/// assert_eq!(target.get("b"), Some(&2));
/// ```
pub fn defaults<T: Clone>(target: &mut Collection<T>, source: &Collection<T>) {
    let Collection::Mapping(entries) = target else {
        panic!("defaults requires mapping collections");
    };
    each(source, |value, key, _collection| match key {
        Key::Name(name) => {
            entries.entry(name.to_string()).or_insert_with(|| value.clone());
        }
        Key::Index(_) => panic!("defaults requires mapping collections"),
    });
}
