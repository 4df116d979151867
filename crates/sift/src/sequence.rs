//! Single-pass operations over borrowed containers.
//!
//! Every function here takes its container by reference (anything whose
//! `IntoIterator` yields `&T`) and returns a new `Vec` of references or a
//! scalar. Nothing is mutated and nothing is retained after the call.
//!
//! ```
//! use sift::{dedupe, extremum, sorted_view, Extreme, Natural, Reversed};
//!
//! let numbers = [5, 3, 8, 1, 3];
//!
//! assert_eq!(extremum(&numbers, Natural, Extreme::Max), Some(&8));
//! assert_eq!(dedupe(&numbers), vec![&5, &3, &8, &1]);
//! assert_eq!(sorted_view(&numbers, Reversed(Natural)), vec![&8, &5, &3, &3, &1]);
//!
//! let empty: [i32; 0] = [];
//! assert_eq!(extremum(&empty, Natural, Extreme::Min).copied().unwrap_or(-1), -1);
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use crate::ordering::{Natural, Rule};

/// Which end of an ordering an extremum query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extreme {
    /// The smallest element under the rule.
    Min,
    /// The largest element under the rule.
    Max,
}

impl Extreme {
    /// Returns `true` if a candidate that compares `ordering` against the
    /// current best should replace it.
    ///
    /// Only a strict improvement wins, so the first of several equal
    /// elements is kept.
    pub fn prefers(self, ordering: Ordering) -> bool {
        match self {
            Extreme::Min => ordering == Ordering::Less,
            Extreme::Max => ordering == Ordering::Greater,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Extreme::Min => "min",
            Extreme::Max => "max",
        }
    }
}

impl std::fmt::Display for Extreme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which half of a map entry a keyed extremum compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Select {
    /// Compare entries by key.
    Key,
    /// Compare entries by value; equal values go to the smaller key.
    Value,
}

/// Number of elements in the container.
pub fn count<I: IntoIterator>(items: I) -> usize {
    items.into_iter().count()
}

/// Returns the minimum or maximum element under `rule`, or `None` when the
/// container is empty.
///
/// The scan keeps the first-encountered element among equals, for both
/// directions. The result is always an element of the input.
pub fn extremum<'a, T, I, R>(items: I, rule: R, direction: Extreme) -> Option<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    R: Rule<T>,
{
    let mut iter = items.into_iter();
    let mut best = iter.next()?;
    for candidate in iter {
        if direction.prefers(rule.compare(candidate, best)) {
            best = candidate;
        }
    }
    Some(best)
}

/// Smallest element under `rule`.
pub fn min_by<'a, T, I, R>(items: I, rule: R) -> Option<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    R: Rule<T>,
{
    extremum(items, rule, Extreme::Min)
}

/// Largest element under `rule`.
pub fn max_by<'a, T, I, R>(items: I, rule: R) -> Option<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    R: Rule<T>,
{
    extremum(items, rule, Extreme::Max)
}

/// Smallest element in natural order.
pub fn min<'a, T, I>(items: I) -> Option<&'a T>
where
    T: Ord + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    extremum(items, Natural, Extreme::Min)
}

/// Largest element in natural order.
pub fn max<'a, T, I>(items: I) -> Option<&'a T>
where
    T: Ord + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    extremum(items, Natural, Extreme::Max)
}

/// Removes repeated values, keeping the first occurrence of each in its
/// original position.
pub fn dedupe<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Eq + Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen: HashSet<&'a T> = HashSet::new();
    let mut kept = Vec::new();
    let mut total = 0usize;
    for item in items {
        total += 1;
        if seen.insert(item) {
            kept.push(item);
        }
    }
    log::trace!("dedupe kept {} of {} elements", kept.len(), total);
    kept
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// A predicate that reads an optional field must decide the absent case
/// itself; there is no implicit default.
pub fn filter<'a, T, I, P>(items: I, predicate: P) -> Vec<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

/// Applies `transform` to every element, one output per input, in order.
pub fn map<'a, T, U, I, F>(items: I, transform: F) -> Vec<U>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> U,
{
    items.into_iter().map(transform).collect()
}

/// Returns the elements ordered by `rule`.
///
/// Equal elements may come out in any relative order; use
/// [`sorted_view_stable`] when that matters.
pub fn sorted_view<'a, T, I, R>(items: I, rule: R) -> Vec<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    R: Rule<T>,
{
    let mut view: Vec<&'a T> = items.into_iter().collect();
    view.sort_unstable_by(|a, b| rule.compare(a, b));
    view
}

/// Like [`sorted_view`], but equal elements keep their input order.
pub fn sorted_view_stable<'a, T, I, R>(items: I, rule: R) -> Vec<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    R: Rule<T>,
{
    let mut view: Vec<&'a T> = items.into_iter().collect();
    view.sort_by(|a, b| rule.compare(a, b));
    view
}

/// Returns the elements in natural ascending order.
pub fn sorted_natural<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Ord + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    sorted_view(items, Natural)
}

/// Returns the elements in reverse positional order.
///
/// Only positional sequences qualify: the iterator must be double-ended,
/// which rules out hash sets and hash maps.
pub fn reverse<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: DoubleEndedIterator,
{
    items.into_iter().rev().collect()
}

/// Returns the map entry whose key or value is extremal, or `None` for an
/// empty map.
///
/// With [`Select::Value`], entries with equal values are decided by the
/// smaller key, so the result does not depend on the map's iteration order.
pub fn keyed_extremum<'a, K, V, I>(
    entries: I,
    select: Select,
    direction: Extreme,
) -> Option<(&'a K, &'a V)>
where
    K: Ord + ?Sized + 'a,
    V: Ord + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut iter = entries.into_iter();
    let mut best = iter.next()?;
    for candidate in iter {
        let ordering = match select {
            Select::Key => candidate.0.cmp(best.0),
            Select::Value => match candidate.1.cmp(best.1) {
                // Tie on value: the smaller key counts as the better entry.
                Ordering::Equal => match direction {
                    Extreme::Max => best.0.cmp(candidate.0),
                    Extreme::Min => candidate.0.cmp(best.0),
                },
                other => other,
            },
        };
        if direction.prefers(ordering) {
            best = candidate;
        }
    }
    Some(best)
}

/// Returns the map entry that is extremal under a custom entry rule.
///
/// Ties keep the first entry in iteration order, which is only repeatable
/// for ordered maps.
pub fn keyed_extremum_by<'a, K, V, I, R>(
    entries: I,
    rule: R,
    direction: Extreme,
) -> Option<(&'a K, &'a V)>
where
    K: ?Sized + 'a,
    V: ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    R: Rule<(&'a K, &'a V)>,
{
    let mut iter = entries.into_iter();
    let mut best = iter.next()?;
    for candidate in iter {
        if direction.prefers(rule.compare(&candidate, &best)) {
            best = candidate;
        }
    }
    Some(best)
}

/// Key of the entry selected by [`keyed_extremum`].
pub fn extremum_key_of<'a, K, V, I>(entries: I, select: Select, direction: Extreme) -> Option<&'a K>
where
    K: Ord + ?Sized + 'a,
    V: Ord + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    keyed_extremum(entries, select, direction).map(|(key, _)| key)
}

/// Value of the entry selected by [`keyed_extremum`].
pub fn extremum_value_of<'a, K, V, I>(
    entries: I,
    select: Select,
    direction: Extreme,
) -> Option<&'a V>
where
    K: Ord + ?Sized + 'a,
    V: Ord + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    keyed_extremum(entries, select, direction).map(|(_, value)| value)
}

/// Keeps the map entries for which `predicate` holds, ordered by key.
pub fn filter_entries<'a, K, V, I, P>(entries: I, predicate: P) -> BTreeMap<&'a K, &'a V>
where
    K: Ord + ?Sized + 'a,
    V: ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    P: Fn(&K, &V) -> bool,
{
    entries
        .into_iter()
        .filter(|(key, value)| predicate(key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;
    use crate::ordering::{by_key, CaseInsensitive, Reversed};

    #[derive(Debug, PartialEq)]
    struct Person {
        name: &'static str,
        age: i32,
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                name: "Simon",
                age: 40,
            },
            Person {
                name: "Mark",
                age: 45,
            },
            Person {
                name: "Amelia",
                age: 40,
            },
            Person {
                name: "Howard",
                age: 67,
            },
            Person {
                name: "Falma",
                age: 18,
            },
            Person {
                name: "Gaia",
                age: 18,
            },
        ]
    }

    #[test]
    fn count_matches_len() {
        assert_eq!(count(&[1, 2, 3]), 3);
        assert_eq!(count(Vec::<i32>::new()), 0);
        let map: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(count(&map), 2);
    }

    #[test]
    fn min_and_max_of_integers() {
        let numbers = [100, 99, 98, 1, 2, 3, 97, 96];
        assert_eq!(min(&numbers), Some(&1));
        assert_eq!(max(&numbers), Some(&100));
    }

    #[test]
    fn empty_extremum_is_absent() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(extremum(&empty, Natural, Extreme::Min), None);
        assert_eq!(extremum(&empty, Natural, Extreme::Max), None);
        assert_eq!(max(&empty).copied().unwrap_or(-1), -1);
    }

    #[test]
    fn extremum_ties_keep_first_encountered() {
        let people = people();
        let by_age = by_key(|p: &Person| p.age);

        // Falma and Gaia are both 18
        let youngest = extremum(&people, &by_age, Extreme::Min).unwrap();
        assert_eq!(youngest.name, "Falma");

        let oldest = extremum(&people, &by_age, Extreme::Max).unwrap();
        assert_eq!(oldest.name, "Howard");

        // Simon and Amelia are both 40
        let forty = filter(&people, |p| p.age == 40);
        let first_forty = extremum(forty.iter().copied(), &by_age, Extreme::Max).unwrap();
        assert_eq!(first_forty.name, "Simon");
        let first_forty = extremum(forty.iter().copied(), &by_age, Extreme::Min).unwrap();
        assert_eq!(first_forty.name, "Simon");
    }

    #[test]
    fn extremum_with_reversed_rule_swaps_direction() {
        let numbers = [4, 9, 2];
        assert_eq!(extremum(&numbers, Reversed(Natural), Extreme::Max), Some(&2));
        assert_eq!(min_by(&numbers, Reversed(Natural)), Some(&9));
        assert_eq!(max_by(&numbers, Natural), Some(&9));
    }

    #[test]
    fn extremum_over_unsized_strings() {
        let names: Vec<String> = vec!["alex".into(), "Zelda".into(), "bob".into()];
        let highest = max_by(names.iter().map(String::as_str), CaseInsensitive);
        assert_eq!(highest, Some("Zelda"));
        assert_eq!(max(names.iter().map(String::as_str)), Some("bob"));
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        assert_eq!(dedupe(&[1, 1, 2, 2, 3, 3]), vec![&1, &2, &3]);
        assert_eq!(dedupe(&["z", "z", "y", "y"]), vec![&"z", &"y"]);
        assert_eq!(dedupe(&[3, 1, 3, 2, 1]), vec![&3, &1, &2]);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let words = ["z", "z", "y", "y", "a", "a", "b", "b", "c", "c"];
        let once = dedupe(&words);
        let twice = dedupe(once.iter().copied());
        assert_eq!(once, twice);
        assert_eq!(once, vec![&"z", &"y", &"a", &"b", &"c"]);
    }

    #[test]
    fn filter_keeps_subsequence() {
        let numbers = [1, 2, 4, 3, 11, 5, 7, 9, 12];
        assert_eq!(
            filter(&numbers, |n| n % 2 == 1),
            vec![&1, &3, &11, &5, &7, &9]
        );
        assert_eq!(filter(&numbers, |n| n % 2 == 0), vec![&2, &4, &12]);
    }

    #[test]
    fn filter_with_optional_field_excludes_absent() {
        let emails = [Some("a@gmail.com"), None, Some("b@aol.com")];
        let gmail = filter(&emails, |email| match email {
            Some(address) => address.contains("@gmail"),
            None => false,
        });
        assert_eq!(gmail, vec![&Some("a@gmail.com")]);
    }

    #[test]
    fn map_preserves_length_and_order() {
        let numbers = [2, 3, 4, 5];
        assert_eq!(map(&numbers, |n| n * 2), vec![4, 6, 8, 10]);

        let names = ["Alex", "Jennifer"];
        assert_eq!(map(&names, |name| name.len()), vec![4, 8]);
    }

    #[test]
    fn sorted_views() {
        let numbers = [5, 3, 8, 1];
        assert_eq!(sorted_natural(&numbers), vec![&1, &3, &5, &8]);
        assert_eq!(sorted_view(&numbers, Reversed(Natural)), vec![&8, &5, &3, &1]);
        // Source untouched
        assert_eq!(numbers, [5, 3, 8, 1]);
    }

    #[test]
    fn sorted_view_stable_keeps_input_order_for_ties() {
        let people = people();
        let sorted = sorted_view_stable(&people, by_key(|p: &Person| p.age));
        let names: Vec<&str> = sorted.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Falma", "Gaia", "Simon", "Amelia", "Mark", "Howard"]
        );
    }

    #[test]
    fn reverse_positions() {
        assert_eq!(reverse(&["Z", "Y", "X"]), vec![&"X", &"Y", &"Z"]);
        assert!(reverse(&Vec::<i32>::new()).is_empty());
    }

    fn letters() -> HashMap<&'static str, i32> {
        [("Z", 0), ("Y", 1), ("X", 2)].into_iter().collect()
    }

    #[test]
    fn keyed_extremum_by_key_and_value() {
        let map = letters();
        assert_eq!(
            keyed_extremum(&map, Select::Key, Extreme::Max),
            Some((&"Z", &0))
        );
        assert_eq!(
            keyed_extremum(&map, Select::Key, Extreme::Min),
            Some((&"X", &2))
        );
        assert_eq!(
            keyed_extremum(&map, Select::Value, Extreme::Max),
            Some((&"X", &2))
        );
        assert_eq!(
            keyed_extremum(&map, Select::Value, Extreme::Min),
            Some((&"Z", &0))
        );
    }

    #[test]
    fn keyed_extremum_value_ties_go_to_smaller_key() {
        let map: HashMap<&str, i32> = [("b", 5), ("a", 5), ("c", 5), ("d", 1)]
            .into_iter()
            .collect();
        // Repeated runs over a hash map must agree regardless of iteration order
        for _ in 0..8 {
            assert_eq!(
                keyed_extremum(&map, Select::Value, Extreme::Max),
                Some((&"a", &5))
            );
            assert_eq!(
                keyed_extremum(&map, Select::Value, Extreme::Min),
                Some((&"d", &1))
            );
        }
    }

    #[test]
    fn keyed_extremum_empty_is_absent() {
        let map: BTreeMap<String, i32> = BTreeMap::new();
        assert_eq!(keyed_extremum(&map, Select::Value, Extreme::Max), None);
        assert_eq!(extremum_key_of(&map, Select::Key, Extreme::Min), None);
    }

    #[test]
    fn keyed_extremum_projections() {
        let map = letters();
        assert_eq!(
            extremum_key_of(&map, Select::Value, Extreme::Min),
            Some(&"Z")
        );
        assert_eq!(
            extremum_value_of(&map, Select::Key, Extreme::Min),
            Some(&2)
        );
    }

    #[test]
    fn keyed_extremum_with_custom_rule() {
        let map: BTreeMap<&str, i32> = [("Z", 0), ("Y", -7), ("X", 2)].into_iter().collect();
        let by_magnitude = |a: &(&&str, &i32), b: &(&&str, &i32)| a.1.abs().cmp(&b.1.abs());
        assert_eq!(
            keyed_extremum_by(&map, by_magnitude, Extreme::Max),
            Some((&"Y", &-7))
        );
    }

    #[test]
    fn filter_entries_orders_by_key() {
        let map: HashMap<u32, &str> = [(12, "l"), (3, "c"), (9, "i"), (1, "a")]
            .into_iter()
            .collect();
        let low = filter_entries(&map, |key, _| *key < 10);
        let keys: Vec<u32> = low.keys().map(|k| **k).collect();
        assert_eq!(keys, vec![1, 3, 9]);
    }

    #[test]
    fn extreme_prefers_only_strict_improvement() {
        assert!(Extreme::Max.prefers(Ordering::Greater));
        assert!(!Extreme::Max.prefers(Ordering::Equal));
        assert!(Extreme::Min.prefers(Ordering::Less));
        assert!(!Extreme::Min.prefers(Ordering::Equal));
        assert_eq!(Extreme::Min.to_string(), "min");
    }
}
