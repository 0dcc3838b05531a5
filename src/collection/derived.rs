//! Collection operations derived from the iteration core.
//!
//! Nothing in this module traverses a collection directly: every operation
//! is expressed through [`each`] or [`reduce`], so traversal order and
//! absent-collection behavior stay centralized in one place. Some
//! operations are additionally defined in terms of each other — [`reject`]
//! is [`filter`] with a negated predicate, and [`some`] is the negation of
//! [`every`] over the negated predicate — so the derivation laws hold by
//! construction.

use super::traverse::{each, reduce, Collection, Key};

/// Returns the first index at which `target` occurs in the collection, or
/// `None` if it does not occur.
///
/// This is the `Option`-shaped rendition of the classic `indexOf` returning
/// `-1` for absence. Only sequence positions are considered; for a mapping
/// the result is always `None`.
///
/// The whole collection is scanned via [`each`], latching the first match;
/// later matches are ignored.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{index_of, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3, 2]);
/// assert_eq!(index_of(&collection, &2), Some(1));
/// assert_eq!(index_of(&collection, &9), None);
/// ```
pub fn index_of<'a, T, C>(collection: C, target: &T) -> Option<usize>
where
    T: PartialEq + 'a,
    C: Into<Option<&'a Collection<T>>>,
{
    let mut found = None;
    each(collection, |value, key, _collection| {
        if found.is_none() && value == target {
            if let Key::Index(index) = key {
                found = Some(index);
            }
        }
    });
    found
}

/// Applies `iterator` to each element in traversal order and collects the
/// results into a new sequence.
///
/// The output length equals the input length, and `result[i]` is
/// `iterator(&input[i])` for every sequence index `i`.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{map, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3]);
/// assert_eq!(map(&collection, |value| value * 2), vec![2, 4, 6]);
/// ```
pub fn map<'a, T, U, C, F>(collection: C, mut iterator: F) -> Vec<U>
where
    T: 'a,
    C: Into<Option<&'a Collection<T>>>,
    F: FnMut(&'a T) -> U,
{
    let mut result = Vec::new();
    each(collection, |value, _key, _collection| {
        result.push(iterator(value));
    });
    result
}

/// Returns the elements for which `predicate` holds, preserving relative
/// order.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{filter, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3, 4]);
/// assert_eq!(filter(&collection, |value| value % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<'a, T, C, F>(collection: C, mut predicate: F) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Option<&'a Collection<T>>>,
    F: FnMut(&'a T) -> bool,
{
    let mut result = Vec::new();
    each(collection, |value, _key, _collection| {
        if predicate(value) {
            result.push(value.clone());
        }
    });
    result
}

/// Alias for [`filter`].
#[inline]
pub fn select<'a, T, C, F>(collection: C, predicate: F) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Option<&'a Collection<T>>>,
    F: FnMut(&'a T) -> bool,
{
    filter(collection, predicate)
}

/// Returns the elements for which `predicate` does not hold.
///
/// Defined as [`filter`] with the negated predicate, so
/// `reject(c, p)` and `filter(c, |v| !p(v))` agree element-for-element.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{reject, Collection};
///
/// let collection = Collection::from(vec![1, 2, 3, 4]);
/// assert_eq!(reject(&collection, |value| value % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<'a, T, C, F>(collection: C, mut predicate: F) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Option<&'a Collection<T>>>,
    F: FnMut(&'a T) -> bool,
{
    filter(collection, move |value| !predicate(value))
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Built on [`reduce`] with a boolean accumulator seeded `true`; the whole
/// collection is traversed (no short circuit), but the final result is
/// exact. An empty or absent collection is vacuously `true`.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{every, Collection};
///
/// let collection = Collection::from(vec![2, 4, 6]);
/// assert!(every(&collection, |value| value % 2 == 0));
/// assert!(!every(&collection, |value| *value > 2));
/// ```
pub fn every<'a, T, C, F>(collection: C, mut predicate: F) -> bool
where
    T: 'a,
    C: Into<Option<&'a Collection<T>>>,
    F: FnMut(&'a T) -> bool,
{
    reduce(collection, true, |accumulator, value| {
        accumulator && predicate(value)
    })
}

/// Returns `true` if any element satisfies `predicate`.
///
/// Derived from [`every`]: `some(c, p)` is `!every(c, |v| !p(v))`. An empty
/// or absent collection is `false`.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{some, Collection};
///
/// let collection = Collection::from(vec![1, 3, 4]);
/// assert!(some(&collection, |value| value % 2 == 0));
/// assert!(!some(&collection, |value| *value > 10));
/// ```
pub fn some<'a, T, C, F>(collection: C, mut predicate: F) -> bool
where
    T: 'a,
    C: Into<Option<&'a Collection<T>>>,
    F: FnMut(&'a T) -> bool,
{
    !every(collection, move |value| !predicate(value))
}

/// Returns `true` if the collection contains an element equal to `target`.
///
/// Equality is [`PartialEq`]. Derived from [`reduce`] accumulating a
/// found-flag.
///
/// # Examples
///
/// ```rust
/// use funcol::collection::{contains, Collection};
///
/// let collection = Collection::mapping([("a", 1), ("b", 2)]);
/// assert!(contains(&collection, &2));
/// assert!(!contains(&collection, &3));
/// ```
pub fn contains<'a, T, C>(collection: C, target: &T) -> bool
where
    T: PartialEq + 'a,
    C: Into<Option<&'a Collection<T>>>,
{
    reduce(collection, false, |found, value| found || value == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3], 2, Some(1))]
    #[case(vec![1, 2, 3], 9, None)]
    #[case(vec![5, 5, 5], 5, Some(0))]
    #[case(vec![], 1, None)]
    fn test_index_of(#[case] input: Vec<i32>, #[case] target: i32, #[case] expected: Option<usize>) {
        let collection = Collection::from(input);
        assert_eq!(index_of(&collection, &target), expected);
    }

    #[rstest]
    fn test_index_of_mapping_is_none() {
        let collection = Collection::mapping([("a", 1)]);
        assert_eq!(index_of(&collection, &1), None);
    }

    #[rstest]
    fn test_map_preserves_order_and_length() {
        let collection = Collection::from(vec![1, 2, 3]);
        let result = map(&collection, |value| value * value);
        assert_eq!(result, vec![1, 4, 9]);
    }

    #[rstest]
    fn test_map_absent_collection_is_empty() {
        let result = map(None::<&Collection<i32>>, |value| value * 2);
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_filter_and_select_agree() {
        let collection = Collection::from(vec![1, 2, 3, 4, 5]);
        let even = |value: &i32| value % 2 == 0;
        assert_eq!(filter(&collection, even), select(&collection, even));
    }

    #[rstest]
    fn test_reject_complements_filter() {
        let collection = Collection::from(vec![1, 2, 3, 4, 5]);
        let odd = |value: &i32| value % 2 == 1;
        assert_eq!(reject(&collection, odd), vec![2, 4]);
        assert_eq!(
            reject(&collection, odd),
            filter(&collection, |value| !odd(value))
        );
    }

    #[rstest]
    fn test_every_is_vacuously_true_on_empty() {
        let empty = Collection::<i32>::default();
        assert!(every(&empty, |_| false));
    }

    #[rstest]
    fn test_some_is_false_on_empty() {
        let empty = Collection::<i32>::default();
        assert!(!some(&empty, |_| true));
    }

    #[rstest]
    fn test_some_over_mapping_values() {
        let collection = Collection::mapping([("a", 1), ("b", 2)]);
        assert!(some(&collection, |value| *value == 2));
    }

    #[rstest]
    #[case(vec![1, 2, 3], 2, true)]
    #[case(vec![1, 2, 3], 7, false)]
    #[case(vec![], 0, false)]
    fn test_contains(#[case] input: Vec<i32>, #[case] target: i32, #[case] expected: bool) {
        let collection = Collection::from(input);
        assert_eq!(contains(&collection, &target), expected);
    }
}
