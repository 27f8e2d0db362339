//! Selection sort. O(n^2) comparisons but only O(n) swaps, which makes it a
//! useful baseline and occasionally interesting when writes are expensive.

use std::cmp::Ordering;

register_sort!("selection_unstable");

/// Sorts the slice in non-descending order.
///
/// Not stable, equal elements can end up reordered because a swap may carry an
/// element across the whole unsorted suffix.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// `compare` must implement a strict weak ordering. If it doesn't, the
/// resulting order is unspecified but the slice keeps its original elements.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Invariant: after iteration i, v[..=i] holds the i + 1 smallest elements
    // in sorted order and v[i + 1..] is a permutation of the rest.
    for i in 0..len {
        // Position of the minimum of v[i..]. Strict less keeps the first
        // occurrence on ties.
        let mut min_pos = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_pos]) {
                min_pos = j;
            }
        }

        v.swap(i, min_pos);
    }
}
