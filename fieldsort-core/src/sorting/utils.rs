//! Utility functions for sorting operations
//!
//! The comparator can fail, and `slice::sort_by` has no way to report that.
//! [`try_sort_by`] is a stable merge sort that stops at the first error.

use std::cmp::Ordering;

/// Runs at or below this length are insertion sorted.
const INSERTION_THRESHOLD: usize = 16;

/// Stable sort of `items` with a fallible comparison.
///
/// Returns the first error produced by `compare`; `items` is then left in
/// an unspecified order. Equal elements keep their relative order.
pub fn try_sort_by<T, E, F>(items: &mut [T], mut compare: F) -> Result<(), E>
where
    T: Copy,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if items.len() < 2 {
        return Ok(());
    }
    let mut scratch = items.to_vec();
    merge_sort(items, &mut scratch, &mut compare)
}

fn merge_sort<T, E, F>(items: &mut [T], scratch: &mut [T], compare: &mut F) -> Result<(), E>
where
    T: Copy,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let len = items.len();
    if len <= INSERTION_THRESHOLD {
        return insertion_sort(items, compare);
    }

    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort(left, left_scratch, compare)?;
        merge_sort(right, right_scratch, compare)?;
    }

    // Halves already in order
    if compare(&items[mid - 1], &items[mid])? != Ordering::Greater {
        return Ok(());
    }

    scratch.copy_from_slice(items);
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // Take from the right half only when strictly smaller, so ties keep
        // input order.
        let take_right = if i == left.len() {
            true
        } else if j == right.len() {
            false
        } else {
            compare(&right[j], &left[i])? == Ordering::Less
        };

        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
    Ok(())
}

fn insertion_sort<T, E, F>(items: &mut [T], compare: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j], &items[j - 1])? == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
    Ok(())
}

/// Reorder items based on a permutation of their indices
///
/// Each index in `indices` names the element from `items` that should land
/// at that position. Elements are moved, not cloned.
pub fn reorder_by_indices<T>(items: Vec<T>, indices: &[usize]) -> Vec<T> {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    indices
        .iter()
        .filter_map(|&idx| slots.get_mut(idx).and_then(Option::take))
        .collect()
}

/// Check if a slice is already sorted according to a fallible comparison
///
/// Stops at the first out-of-order pair or the first error.
pub fn try_is_sorted_by<T, E, F>(items: &[T], mut compare: F) -> Result<bool, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    for pair in items.windows(2) {
        if compare(&pair[0], &pair[1])? == Ordering::Greater {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_cmp(a: &i32, b: &i32) -> Result<Ordering, ()> {
        Ok(a.cmp(b))
    }

    #[test]
    fn test_try_sort_by_small_and_large() {
        let mut small = vec![3, 1, 2];
        try_sort_by(&mut small, ok_cmp).unwrap();
        assert_eq!(small, vec![1, 2, 3]);

        // Deterministic pseudo-random input, long enough to exercise merging
        let mut large: Vec<i32> = (0..500).map(|i| (i * 7919 + 13) % 257).collect();
        let mut expected = large.clone();
        expected.sort();

        try_sort_by(&mut large, ok_cmp).unwrap();
        assert_eq!(large, expected);
    }

    #[test]
    fn test_try_sort_by_is_stable() {
        // (key, original position)
        let mut items: Vec<(u8, usize)> = (0..100).map(|i| ((i % 3) as u8, i)).collect();
        try_sort_by(&mut items, |a, b| Ok::<_, ()>(a.0.cmp(&b.0))).unwrap();

        for pair in items.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                assert!(pair[0].1 < pair[1].1, "ties must keep input order");
            }
        }
    }

    #[test]
    fn test_try_sort_by_stops_at_first_error() {
        let mut calls = 0;
        let mut items: Vec<i32> = (0..64).rev().collect();
        let result = try_sort_by(&mut items, |a, b| {
            calls += 1;
            if calls == 5 { Err("boom") } else { Ok(a.cmp(b)) }
        });

        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_reorder_by_indices() {
        let items = vec!["a", "b", "c", "d"];
        let indices = vec![3, 1, 0, 2]; // d, b, a, c

        assert_eq!(reorder_by_indices(items, &indices), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_try_is_sorted_by() {
        let sorted = vec![1, 2, 2, 4, 5];
        let unsorted = vec![1, 3, 2, 4, 5];

        assert!(try_is_sorted_by(&sorted, ok_cmp).unwrap());
        assert!(!try_is_sorted_by(&unsorted, ok_cmp).unwrap());

        let descending = |a: &i32, b: &i32| Ok::<_, ()>(b.cmp(a));
        assert!(try_is_sorted_by(&[9, 7, 7, 0], descending).unwrap());
        assert!(!try_is_sorted_by(&sorted, descending).unwrap());

        assert_eq!(try_is_sorted_by(&sorted, |_, _| Err::<Ordering, _>(7)), Err(7));
    }
}
