//! Binary search and ordered insert/remove/range-query over key-sorted
//! sequences.
//!
//! All lookups share one encoding: a non-negative result is the index of a
//! matching element; a negative result is `-(insertion_index) - 1`, so the
//! insertion point of an absent key is recoverable as `-(result + 1)`.
//! Callers get "found" and "insert here" from a single probe, which the
//! range query needs to pad windows for boundary interpolation without a
//! second scan.

use std::cmp::Ordering;

/// Binary search over a sorted slice with an arbitrary probe type.
///
/// `compare(probe, element)` orders the probe against elements. Returns the
/// index of a matching element, or `-(insertion_index) - 1` when no element
/// matches. With duplicate keys any one of the equal elements may be
/// returned.
pub fn binary_search<T, P, F>(items: &[T], probe: &P, compare: F) -> isize
where
    F: Fn(&P, &T) -> Ordering,
{
    let mut m: isize = 0;
    let mut n: isize = items.len() as isize - 1;
    while m <= n {
        let k = (m + n) >> 1;
        match compare(probe, &items[k as usize]) {
            Ordering::Greater => m = k + 1,
            Ordering::Less => n = k - 1,
            Ordering::Equal => return k,
        }
    }
    -m - 1
}

/// [`binary_search`] specialized to an integer key extracted per element.
pub fn search_key<T, F>(items: &[T], key: i64, key_of: F) -> isize
where
    F: Fn(&T) -> i64,
{
    binary_search(items, &key, |k, item| k.cmp(&key_of(item)))
}

/// Insert `value` into a key-sorted vec. An element already holding the same
/// key is replaced, so uniqueness-by-key and sort order both hold afterward.
pub fn insert<T, F>(items: &mut Vec<T>, value: T, key_of: F)
where
    F: Fn(&T) -> i64,
{
    let pos = search_key(items, key_of(&value), &key_of);
    if pos >= 0 {
        items[pos as usize] = value;
    } else {
        items.insert((-(pos + 1)) as usize, value);
    }
}

/// Remove the element whose key matches, returning it. `None` when no
/// element has the key (a no-op, not an error). Index 0 is a valid match:
/// the first element is removable like any other.
pub fn remove<T, F>(items: &mut Vec<T>, key: i64, key_of: F) -> Option<T>
where
    F: Fn(&T) -> i64,
{
    let pos = search_key(items, key, key_of);
    if pos >= 0 {
        Some(items.remove(pos as usize))
    } else {
        None
    }
}

/// Maximal contiguous sub-slice whose keys fall within `[start, end]`,
/// padded with the element immediately before `start` when one exists, and
/// with one element past `end` when the last in-range key is strictly below
/// `end`. The padding guarantees callers always have enough surrounding
/// context to interpolate the exact window edges.
///
/// Empty when `items` is empty, when `start > end`, or when the requested
/// range lies entirely outside the data on the relevant side.
pub fn find_range<'a, T, F>(items: &'a [T], start: i64, end: i64, key_of: F) -> &'a [T]
where
    F: Fn(&T) -> i64,
{
    if items.is_empty() || start > end {
        return &[];
    }
    let pos = search_key(items, start, &key_of);
    let mut starti = if pos >= 0 {
        pos as usize
    } else {
        (-(pos + 1)) as usize
    };
    if starti == 0 && start < key_of(&items[0]) {
        // whole range below the data
        return &[];
    } else if starti >= items.len() {
        // whole range above the data
        return &[];
    }
    let mut endi = starti + 1;
    while endi < items.len() && key_of(&items[endi]) <= end {
        endi += 1;
    }
    if starti > 0 && key_of(&items[starti]) > start {
        starti -= 1;
    }
    if key_of(&items[endi - 1]) < end {
        endi += 1;
    }
    &items[starti..endi.min(items.len())]
}
